//! Login and signup candidates

use serde::Deserialize;

use super::Candidate;
use crate::validation::fields::{self, messages};
use crate::validation::{FieldError, FieldPath, ValidationErrors, ValidationResult};
use crate::value_objects::Password;

/// Email/password login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginCandidate {
    pub email: String,
    pub password: String,
}

/// Validated login form, handed to the authentication collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

impl Candidate for LoginCandidate {
    type Valid = Credentials;
    const RECORD: &'static str = "login";

    fn evaluate(&self) -> ValidationResult<Credentials> {
        let mut errors = ValidationErrors::new();
        let email = errors.capture(fields::email(&self.email));
        let password = errors.capture(fields::login_password(&self.password));

        let (Some(email), Some(password)) = (email, password) else {
            return Err(errors);
        };
        Ok(Credentials { email, password })
    }
}

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupCandidate {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub display_name: String,
}

/// Validated registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: Password,
    pub display_name: String,
}

impl Candidate for SignupCandidate {
    type Valid = NewAccount;
    const RECORD: &'static str = "signup";

    fn evaluate(&self) -> ValidationResult<NewAccount> {
        let mut errors = ValidationErrors::new();
        let email = errors.capture(fields::email(&self.email));
        let password = errors.capture(fields::signup_password(&self.password));
        let confirmation = errors.capture(fields::password_confirmation(&self.confirm_password));
        let display_name = errors.capture(fields::display_name(&self.display_name));

        let (Some(email), Some(password), Some(confirmation), Some(display_name)) =
            (email, password, confirmation, display_name)
        else {
            return Err(errors);
        };

        // Mismatch is reported on the confirmation field, never on the password
        if password != confirmation {
            return Err(FieldError::cross_field(
                FieldPath::CONFIRM_PASSWORD,
                messages::PASSWORD_MISMATCH,
            )
            .into());
        }

        Ok(NewAccount {
            email,
            password,
            display_name,
        })
    }
}
