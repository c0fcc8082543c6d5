//! Upload service
//!
//! Registers upload metadata after checking the declared size and media type.
//! File bytes are handled by the storage layer and never seen here.

use chat_core::candidates::{FileUpload, ImageUpload, ValidatedFile};
use chat_core::entities::Attachment;
use chat_core::Candidate;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AttachmentResponse, UploadRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a general attachment (images and documents)
    #[instrument(skip(self, request), fields(file_name = %request.file_name))]
    pub async fn register_file(
        &self,
        user_id: Uuid,
        request: UploadRequest,
    ) -> ServiceResult<AttachmentResponse> {
        let file = FileUpload(request.file).validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "File upload rejected");
        })?;
        self.store(user_id, request.file_name, file).await
    }

    /// Register an image-only upload (avatars, inline images)
    #[instrument(skip(self, request), fields(file_name = %request.file_name))]
    pub async fn register_image(
        &self,
        user_id: Uuid,
        request: UploadRequest,
    ) -> ServiceResult<AttachmentResponse> {
        let file = ImageUpload(request.file).validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Image upload rejected");
        })?;
        self.store(user_id, request.file_name, file).await
    }

    async fn store(
        &self,
        user_id: Uuid,
        file_name: String,
        file: ValidatedFile,
    ) -> ServiceResult<AttachmentResponse> {
        let attachment = Attachment::new(self.ctx.generate_id(), user_id, file_name, file);
        self.ctx.attachment_repo().create(&attachment).await?;

        info!(
            attachment_id = %attachment.id,
            media_type = attachment.media_type.as_str(),
            size_bytes = attachment.size_bytes,
            "Upload registered"
        );

        Ok(AttachmentResponse::from(&attachment))
    }
}
