//! Password policy enforcement for new passwords.

use quillpad_core::config::auth::AuthConfig;
use quillpad_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        // Use zxcvbn for entropy check
        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(make_validator().validate("G0lden!Harbor42").is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(make_validator().validate("Ab1!").is_err());
    }

    #[test]
    fn test_missing_uppercase_rejected() {
        assert!(make_validator().validate("g0lden!harbor42").is_err());
    }

    #[test]
    fn test_missing_digit_rejected() {
        assert!(make_validator().validate("Golden!Harbor").is_err());
    }

    #[test]
    fn test_common_password_rejected() {
        // Meets the character classes but is dictionary-weak.
        assert!(make_validator().validate("Password1").is_err());
    }
}
