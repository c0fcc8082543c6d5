//! Test fixtures and data generators
//!
//! Provides reusable JSON request bodies for integration tests.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Password accepted by the signup policy
pub const VALID_PASSWORD: &str = "Password123";

/// Signup body with a unique email
pub fn register_body() -> Value {
    let suffix = unique_suffix();
    json!({
        "email": format!("test{suffix}@example.com"),
        "password": VALID_PASSWORD,
        "confirmPassword": VALID_PASSWORD,
        "displayName": format!("User {suffix}"),
    })
}

/// Login body matching a signup body
pub fn login_body(register: &Value) -> Value {
    json!({
        "email": register["email"],
        "password": register["password"],
    })
}

/// Channel body with a unique, pattern-conforming name
pub fn channel_body() -> Value {
    json!({ "name": format!("channel-{}", unique_suffix()) })
}

/// File metadata body
pub fn upload_body(size_bytes: u64, media_type: &str) -> Value {
    json!({
        "fileName": format!("file-{}", unique_suffix()),
        "sizeBytes": size_bytes,
        "mediaType": media_type,
    })
}
