//! Value objects - immutable types that represent domain concepts

mod location;
mod media_type;
mod password;

pub use location::{MessageLocation, MessageTarget};
pub use media_type::{
    MediaType, UnsupportedMediaType, UploadPolicy, DOCUMENT_MEDIA_TYPES, IMAGE_MEDIA_TYPES,
    MAX_FILE_SIZE, SUPPORTED_MEDIA_TYPES,
};
pub use password::Password;
