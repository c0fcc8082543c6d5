//! Field validators - one per domain field
//!
//! Each field runs an ordered list of [`Check`]s and stops at the first one that
//! rejects. On success the field's normalized value is returned.

use tracing::trace;
use uuid::Uuid;

use super::result::{ErrorKind, FieldError, FieldPath};
use super::rules::{
    Check, NumericRule, Rule, TextRule, CHANNEL_NAME_PATTERN, PASSWORD_CHARACTER_CLASSES,
};
use crate::value_objects::{MediaType, Password, UploadPolicy, MAX_FILE_SIZE};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const DISPLAY_NAME_MIN_LENGTH: usize = 2;
pub const DISPLAY_NAME_MAX_LENGTH: usize = 50;
pub const CHANNEL_NAME_MIN_LENGTH: usize = 2;
pub const CHANNEL_NAME_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;
pub const CONTENT_MAX_LENGTH: usize = 5000;
pub const BIO_MAX_LENGTH: usize = 500;

/// User-facing messages, one per rule
pub mod messages {
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_FORMAT: &str = "Email has an invalid format";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
    pub const PASSWORD_COMPLEXITY: &str =
        "Password must contain an uppercase letter, a lowercase letter, and a digit";
    pub const CONFIRM_PASSWORD_REQUIRED: &str = "Password confirmation is required";
    pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
    pub const DISPLAY_NAME_REQUIRED: &str = "Display name is required";
    pub const DISPLAY_NAME_TOO_SHORT: &str = "Display name must be at least 2 characters";
    pub const DISPLAY_NAME_TOO_LONG: &str = "Display name must be at most 50 characters";
    pub const CHANNEL_NAME_REQUIRED: &str = "Channel name is required";
    pub const CHANNEL_NAME_TOO_SHORT: &str = "Channel name must be at least 2 characters";
    pub const CHANNEL_NAME_TOO_LONG: &str = "Channel name must be at most 50 characters";
    pub const CHANNEL_NAME_FORMAT: &str = "Channel name has an invalid format: only letters, \
         digits, '-', '_' and Japanese characters are allowed";
    pub const DESCRIPTION_TOO_LONG: &str = "Description must be at most 500 characters";
    pub const CONTENT_REQUIRED: &str = "Message is required";
    pub const CONTENT_TOO_LONG: &str = "Message must be at most 5000 characters";
    pub const CHANNEL_ID_FORMAT: &str = "Channel ID has an invalid format";
    pub const DM_ID_FORMAT: &str = "DM ID has an invalid format";
    pub const LOCATION_REQUIRED: &str = "A message needs either a channel ID or a DM ID";
    pub const BIO_TOO_LONG: &str = "Bio must be at most 500 characters";
    pub const AVATAR_URL_FORMAT: &str = "Avatar URL has an invalid format";
    pub const FILE_TOO_LARGE: &str = "File size must be at most 10 MB";
    pub const FILE_TYPE_NOT_SUPPORTED: &str = "This file type is not supported";
    pub const IMAGE_TYPE_ONLY: &str = "Only image files (JPEG, PNG, WebP, GIF) are supported";
}

/// Run `checks` in order against `value`, stopping at the first rejection
pub fn run_checks<T, R>(path: FieldPath, value: &T, checks: &[Check<R>]) -> Result<(), FieldError>
where
    T: ?Sized,
    R: Rule<T>,
{
    for check in checks {
        if let Err(rejected) = check.rule.apply(value) {
            trace!(field = %path, reason = %rejected, "Field rule rejected");
            return Err(FieldError::new(path, rejected.kind, check.message));
        }
    }
    Ok(())
}

/// Treat `Some("")` the same as `None`
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

const EMAIL_CHECKS: [Check<TextRule>; 2] = [
    Check::new(TextRule::Required, messages::EMAIL_REQUIRED),
    Check::new(TextRule::Email, messages::EMAIL_FORMAT),
];

const LOGIN_PASSWORD_CHECKS: [Check<TextRule>; 2] = [
    Check::new(TextRule::Required, messages::PASSWORD_REQUIRED),
    Check::new(
        TextRule::MinChars(PASSWORD_MIN_LENGTH),
        messages::PASSWORD_TOO_SHORT,
    ),
];

const CONFIRM_PASSWORD_CHECKS: [Check<TextRule>; 1] = [Check::new(
    TextRule::Required,
    messages::CONFIRM_PASSWORD_REQUIRED,
)];

const DISPLAY_NAME_CHECKS: [Check<TextRule>; 3] = [
    Check::new(TextRule::Required, messages::DISPLAY_NAME_REQUIRED),
    Check::new(
        TextRule::MinChars(DISPLAY_NAME_MIN_LENGTH),
        messages::DISPLAY_NAME_TOO_SHORT,
    ),
    Check::new(
        TextRule::MaxChars(DISPLAY_NAME_MAX_LENGTH),
        messages::DISPLAY_NAME_TOO_LONG,
    ),
];

const DESCRIPTION_CHECKS: [Check<TextRule>; 1] = [Check::new(
    TextRule::MaxChars(DESCRIPTION_MAX_LENGTH),
    messages::DESCRIPTION_TOO_LONG,
)];

const CONTENT_CHECKS: [Check<TextRule>; 2] = [
    Check::new(TextRule::Required, messages::CONTENT_REQUIRED),
    Check::new(
        TextRule::MaxChars(CONTENT_MAX_LENGTH),
        messages::CONTENT_TOO_LONG,
    ),
];

const BIO_CHECKS: [Check<TextRule>; 1] = [Check::new(
    TextRule::MaxChars(BIO_MAX_LENGTH),
    messages::BIO_TOO_LONG,
)];

const AVATAR_URL_CHECKS: [Check<TextRule>; 1] =
    [Check::new(TextRule::Url, messages::AVATAR_URL_FORMAT)];

const FILE_SIZE_CHECKS: [Check<NumericRule>; 1] = [Check::new(
    NumericRule::AtMost(MAX_FILE_SIZE),
    messages::FILE_TOO_LARGE,
)];

fn signup_password_checks() -> [Check<TextRule>; 3] {
    let [required, min_length] = LOGIN_PASSWORD_CHECKS;
    [
        required,
        min_length,
        Check::new(
            TextRule::EveryPattern(&*PASSWORD_CHARACTER_CLASSES),
            messages::PASSWORD_COMPLEXITY,
        ),
    ]
}

fn channel_name_checks() -> [Check<TextRule>; 4] {
    [
        Check::new(TextRule::Required, messages::CHANNEL_NAME_REQUIRED),
        Check::new(
            TextRule::MinChars(CHANNEL_NAME_MIN_LENGTH),
            messages::CHANNEL_NAME_TOO_SHORT,
        ),
        Check::new(
            TextRule::MaxChars(CHANNEL_NAME_MAX_LENGTH),
            messages::CHANNEL_NAME_TOO_LONG,
        ),
        Check::new(
            TextRule::Pattern(&CHANNEL_NAME_PATTERN),
            messages::CHANNEL_NAME_FORMAT,
        ),
    ]
}

fn media_type_checks(policy: UploadPolicy) -> [Check<TextRule>; 1] {
    let message = match policy {
        UploadPolicy::AnyFile => messages::FILE_TYPE_NOT_SUPPORTED,
        UploadPolicy::ImageOnly => messages::IMAGE_TYPE_ONLY,
    };
    [Check::new(TextRule::OneOf(policy.allowed_media_types()), message)]
}

pub fn email(value: &str) -> Result<String, FieldError> {
    run_checks(FieldPath::EMAIL, value, &EMAIL_CHECKS)?;
    Ok(value.to_owned())
}

/// Login only checks presence and minimum length
pub fn login_password(value: &str) -> Result<Password, FieldError> {
    run_checks(FieldPath::PASSWORD, value, &LOGIN_PASSWORD_CHECKS)?;
    Ok(Password::new(value.to_owned()))
}

/// Signup additionally requires lowercase, uppercase and a digit
pub fn signup_password(value: &str) -> Result<Password, FieldError> {
    run_checks(FieldPath::PASSWORD, value, &signup_password_checks())?;
    Ok(Password::new(value.to_owned()))
}

pub fn password_confirmation(value: &str) -> Result<Password, FieldError> {
    run_checks(FieldPath::CONFIRM_PASSWORD, value, &CONFIRM_PASSWORD_CHECKS)?;
    Ok(Password::new(value.to_owned()))
}

pub fn display_name(value: &str) -> Result<String, FieldError> {
    run_checks(FieldPath::DISPLAY_NAME, value, &DISPLAY_NAME_CHECKS)?;
    Ok(value.to_owned())
}

pub fn channel_name(value: &str) -> Result<String, FieldError> {
    run_checks(FieldPath::NAME, value, &channel_name_checks())?;
    Ok(value.to_owned())
}

/// Empty descriptions normalize to `None`
pub fn channel_description(value: Option<&str>) -> Result<Option<String>, FieldError> {
    optional_text(FieldPath::DESCRIPTION, value, &DESCRIPTION_CHECKS)
}

pub fn message_content(value: &str) -> Result<String, FieldError> {
    run_checks(FieldPath::CONTENT, value, &CONTENT_CHECKS)?;
    Ok(value.to_owned())
}

/// Present references must be hyphenated UUIDs; the empty string counts as present
pub fn channel_ref(value: Option<&str>) -> Result<Option<Uuid>, FieldError> {
    uuid_ref(FieldPath::CHANNEL_ID, value, messages::CHANNEL_ID_FORMAT)
}

pub fn dm_ref(value: Option<&str>) -> Result<Option<Uuid>, FieldError> {
    uuid_ref(FieldPath::DM_ID, value, messages::DM_ID_FORMAT)
}

pub fn bio(value: Option<&str>) -> Result<Option<String>, FieldError> {
    optional_text(FieldPath::BIO, value, &BIO_CHECKS)
}

pub fn avatar_url(value: Option<&str>) -> Result<Option<String>, FieldError> {
    optional_text(FieldPath::AVATAR_URL, value, &AVATAR_URL_CHECKS)
}

pub fn file_size(size_bytes: u64) -> Result<u64, FieldError> {
    run_checks(FieldPath::SIZE_BYTES, &size_bytes, &FILE_SIZE_CHECKS)?;
    Ok(size_bytes)
}

pub fn media_type(value: &str, policy: UploadPolicy) -> Result<MediaType, FieldError> {
    let checks = media_type_checks(policy);
    run_checks(FieldPath::MEDIA_TYPE, value, &checks)?;
    value.parse().map_err(|_| {
        FieldError::new(FieldPath::MEDIA_TYPE, ErrorKind::TypeNotAllowed, checks[0].message)
    })
}

fn optional_text(
    path: FieldPath,
    value: Option<&str>,
    checks: &[Check<TextRule>],
) -> Result<Option<String>, FieldError> {
    match non_empty(value) {
        Some(value) => {
            run_checks(path, value, checks)?;
            Ok(Some(value.to_owned()))
        }
        None => Ok(None),
    }
}

fn uuid_ref(
    path: FieldPath,
    value: Option<&str>,
    message: &'static str,
) -> Result<Option<Uuid>, FieldError> {
    let Some(value) = value else {
        return Ok(None);
    };
    run_checks(path, value, &[Check::new(TextRule::Uuid, message)])?;
    Uuid::try_parse(value)
        .map(Some)
        .map_err(|_| FieldError::new(path, ErrorKind::FormatMismatch, message))
}
