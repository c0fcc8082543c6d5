//! Candidates - unvalidated, caller-supplied records and their record validators
//!
//! Each candidate runs every field validator, collects all field failures in
//! declaration order, and only then applies its cross-field refinements to the
//! already-normalized values.

mod auth;
mod channel;
mod file;
mod message;
mod profile;

pub use auth::{Credentials, LoginCandidate, NewAccount, SignupCandidate};
pub use channel::{ChannelCandidate, NewChannel};
pub use file::{FileMetadata, FileUpload, ImageUpload, ValidatedFile};
pub use message::{MessageCandidate, MessageEdit, MessageEditCandidate, NewMessage};
pub use profile::{ProfileCandidate, ProfileUpdate};

use tracing::debug;

use crate::validation::ValidationResult;

/// A record that can be validated into a normalized value
pub trait Candidate {
    /// Normalized value produced on success
    type Valid;

    /// Record name used in logs
    const RECORD: &'static str;

    /// Field pass followed by the refinement pass
    fn evaluate(&self) -> ValidationResult<Self::Valid>;

    /// Validate the candidate. Pure and deterministic.
    fn validate(&self) -> ValidationResult<Self::Valid> {
        self.evaluate().inspect_err(|errors| {
            debug!(
                record = Self::RECORD,
                error_count = errors.len(),
                first = ?errors.first().map(|e| e.path),
                "Candidate rejected"
            );
        })
    }
}
