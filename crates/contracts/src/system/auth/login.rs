use crate::shared::config::AuthConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Form-level problem, shown as is
    #[error("{0}")]
    Validation(&'static str),

    #[error("Invalid credentials. Try {email} / {password}")]
    InvalidCredentials { email: String, password: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `\S+@\S+\.\S+`: something, an `@`, something, a dot, something
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .match_indices('@')
        .filter(|(at, _)| *at > 0)
        .any(|(at, _)| {
            let domain = &value[at + 1..];
            domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
        })
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// First problem with the form, checked in display order
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() {
            return Err(AuthError::Validation("Email is required."));
        }
        if !looks_like_email(&self.email) {
            return Err(AuthError::Validation("Enter a valid email address."));
        }
        if self.password.is_empty() {
            return Err(AuthError::Validation("Password is required."));
        }
        if self.password.chars().count() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters.",
            ));
        }
        Ok(())
    }

    /// Validates the form and checks it against the demo credential pair.
    /// Returns the token to hand to the auth store.
    pub fn authenticate(&self, config: &AuthConfig) -> Result<String, AuthError> {
        self.validate()?;
        if self.email == config.email && self.password == config.password {
            Ok(config.token.clone())
        } else {
            log::warn!("login rejected for {}", self.email);
            Err(AuthError::InvalidCredentials {
                email: config.email.clone(),
                password: config.password.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        let cases = [
            ("", "", "Email is required."),
            ("admin", "password", "Enter a valid email address."),
            ("admin@gmail", "password", "Enter a valid email address."),
            ("ad min@gmail.com", "password", "Enter a valid email address."),
            ("admin@gmail.com", "", "Password is required."),
            ("admin@gmail.com", "12345", "Password must be at least 6 characters."),
        ];
        for (email, password, expected) in cases {
            let err = LoginRequest::new(email, password).validate().unwrap_err();
            assert_eq!(err, AuthError::Validation(expected), "{} / {}", email, password);
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(looks_like_email("a@b.c."));
        assert!(looks_like_email("@@b.c"));
    }

    #[test]
    fn test_demo_credentials() {
        let config = AuthConfig::default();
        let token = LoginRequest::new("admin@gmail.com", "password")
            .authenticate(&config)
            .unwrap();
        assert_eq!(token, "demo-token");
    }

    #[test]
    fn test_wrong_password_message() {
        let err = LoginRequest::new("admin@gmail.com", "hunter22")
            .authenticate(&AuthConfig::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid credentials. Try admin@gmail.com / password"
        );
    }
}
