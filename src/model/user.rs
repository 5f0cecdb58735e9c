use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const USERNAME_MAX_LENGTH: usize = 80;
pub const EMAIL_ADDRESS_MAX_LENGTH: usize = 120;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email_address: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request body.
///
/// Absent keys deserialize as empty strings so that a partial body is reported
/// as missing fields rather than as a malformed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RegisterUserDto {
    pub username: String,
    pub email_address: String,
    pub password: String,
}

/// Field limits the register page needs before it can render its form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RegisterFormDto {
    pub username_max_length: usize,
    pub email_address_max_length: usize,
}

impl Default for RegisterFormDto {
    fn default() -> Self {
        Self {
            username_max_length: USERNAME_MAX_LENGTH,
            email_address_max_length: EMAIL_ADDRESS_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterValidationError {
    MissingFields,
    UsernameTooLong { max: usize },
    EmailAddressTooLong { max: usize },
}

impl std::fmt::Display for RegisterValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing username or password or email address"),
            Self::UsernameTooLong { max } => {
                write!(f, "Username must be at most {} characters", max)
            }
            Self::EmailAddressTooLong { max } => {
                write!(f, "Email address must be at most {} characters", max)
            }
        }
    }
}

impl RegisterUserDto {
    /// Checks the request against the form limits.
    ///
    /// Username and email address are compared after trimming; the password is
    /// taken as-is. Missing fields are reported before any length problem.
    pub fn validate(&self, form: &RegisterFormDto) -> Result<(), RegisterValidationError> {
        let username = self.username.trim();
        let email_address = self.email_address.trim();

        if username.is_empty() || email_address.is_empty() || self.password.is_empty() {
            return Err(RegisterValidationError::MissingFields);
        }

        if username.chars().count() > form.username_max_length {
            return Err(RegisterValidationError::UsernameTooLong {
                max: form.username_max_length,
            });
        }

        if email_address.chars().count() > form.email_address_max_length {
            return Err(RegisterValidationError::EmailAddressTooLong {
                max: form.email_address_max_length,
            });
        }

        Ok(())
    }
}
