//! Test helpers for integration tests
//!
//! Drives the services with raw JSON request bodies and renders results the
//! way an HTTP layer would: `{ "data": ... }` on success, an `ErrorResponse`
//! with the field error list on failure.

use std::sync::Arc;

use anyhow::Result;
use chat_common::{try_init_tracing_with_config, AppConfig, AppError, ErrorResponse, TracingConfig};
use chat_service::dto::ApiResponse;
use chat_service::{
    AuthService, ChannelService, InMemoryStore, MessageService, ProfileService, ServiceContext,
    ServiceResult, UploadService,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Rendered service outcome
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    /// `data` payload of a successful response
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// `(path, kind)` pairs from a validation error body, in order
    pub fn field_errors(&self) -> Vec<(String, String)> {
        self.body["details"]
            .as_array()
            .map(|details| {
                details
                    .iter()
                    .map(|d| {
                        (
                            d["path"].as_str().unwrap_or_default().to_string(),
                            d["kind"].as_str().unwrap_or_default().to_string(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Messages from a validation error body, in order
    pub fn messages(&self) -> Vec<String> {
        self.body["details"]
            .as_array()
            .map(|details| {
                details
                    .iter()
                    .filter_map(|d| d["message"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// In-process application backed by the in-memory store
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    ctx: ServiceContext,
}

impl TestApp {
    pub fn new() -> Self {
        init_test_tracing();
        let store = Arc::new(InMemoryStore::new());
        let ctx = store.context();
        Self { store, ctx }
    }

    pub async fn register(&self, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(AuthService::new(&self.ctx).register(request).await, 201)
    }

    pub async fn login(&self, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(AuthService::new(&self.ctx).login(request).await, 200)
    }

    pub async fn create_channel(&self, user_id: Uuid, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            ChannelService::new(&self.ctx)
                .create_channel(user_id, request)
                .await,
            201,
        )
    }

    pub async fn create_message(&self, user_id: Uuid, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            MessageService::new(&self.ctx)
                .create_message(user_id, request)
                .await,
            201,
        )
    }

    pub async fn edit_message(
        &self,
        user_id: Uuid,
        message_id: Uuid,
        body: Value,
    ) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            MessageService::new(&self.ctx)
                .edit_message(user_id, message_id, request)
                .await,
            200,
        )
    }

    pub async fn update_profile(&self, user_id: Uuid, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            ProfileService::new(&self.ctx)
                .update_profile(user_id, request)
                .await,
            200,
        )
    }

    pub async fn upload_file(&self, user_id: Uuid, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            UploadService::new(&self.ctx)
                .register_file(user_id, request)
                .await,
            201,
        )
    }

    pub async fn upload_image(&self, user_id: Uuid, body: Value) -> Result<JsonResponse> {
        let request = parse(body)?;
        render(
            UploadService::new(&self.ctx)
                .register_image(user_id, request)
                .await,
            201,
        )
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a subscriber once per test binary; later calls are no-ops
pub fn init_test_tracing() {
    let config = AppConfig::from_env()
        .map(|config| config.tracing_config())
        .unwrap_or_default();
    let _ = try_init_tracing_with_config(TracingConfig {
        span_events: false,
        ..config
    });
}

fn parse<T: DeserializeOwned>(body: Value) -> Result<T> {
    Ok(serde_json::from_value(body)?)
}

fn render<T: Serialize>(result: ServiceResult<T>, ok_status: u16) -> Result<JsonResponse> {
    match result {
        Ok(data) => Ok(JsonResponse {
            status: ok_status,
            body: serde_json::to_value(ApiResponse::new(data))?,
        }),
        Err(err) => {
            let err = AppError::from(err);
            Ok(JsonResponse {
                status: err.status_code(),
                body: serde_json::to_value(ErrorResponse::from(&err))?,
            })
        }
    }
}

/// Assert status, printing the body on mismatch
pub fn assert_status(response: &JsonResponse, expected: u16) {
    assert_eq!(
        response.status, expected,
        "unexpected status, body: {}",
        response.body
    );
}

/// Assert a validation failure with exactly these `(path, kind)` pairs
pub fn assert_validation_errors(response: &JsonResponse, expected: &[(&str, &str)]) {
    assert_status(response, 400);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    let actual = response.field_errors();
    let actual: Vec<(&str, &str)> = actual.iter().map(|(p, k)| (p.as_str(), k.as_str())).collect();
    assert_eq!(actual, expected, "body: {}", response.body);
}

/// Extract a UUID field from a successful response
pub fn data_id(response: &JsonResponse) -> Uuid {
    response.data()["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .unwrap_or_else(|| panic!("response has no id: {}", response.body))
}
