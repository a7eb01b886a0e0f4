//! Registration input rules for credentials.

use validator::ValidateEmail;

use realm_core::config::AuthConfig;
use realm_core::error::AppError;

/// Longest email the credential store accepts (`users.email VARCHAR(255)`).
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Checks email grammar and password length before anything is stored.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl CredentialValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates an email address against the address grammar.
    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AppError::validation(format!(
                "Email address must be at most {MAX_EMAIL_LENGTH} characters long"
            )));
        }
        if email.validate_email() {
            Ok(())
        } else {
            Err(AppError::validation("Email address is not valid"))
        }
    }

    /// Validates a password against the length policy.
    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Validates both halves of a credential, email first.
    pub fn validate(&self, email: &str, password: &str) -> Result<(), AppError> {
        self.validate_email(email)?;
        self.validate_password(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::error::ErrorKind;

    fn validator() -> CredentialValidator {
        CredentialValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_accepts_plain_credentials() {
        assert!(validator().validate("a@x.com", "secret1").is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        for email in ["", "not-an-email", "a@", "@x.com"] {
            let err = validator().validate(email, "secret1").unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "{email}");
        }
    }

    #[test]
    fn test_rejects_overlong_email() {
        let email = format!("{}@{}.com", "a".repeat(60), vec!["b".repeat(60); 4].join("."));
        assert!(email.validate_email());
        assert_eq!(email.len(), 308);

        let err = validator().validate(&email, "secret1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validator().validate_password("12345").is_err());
        assert!(validator().validate_password("123456").is_ok());
        assert!(validator().validate_password("ääääää").is_ok());
    }
}
