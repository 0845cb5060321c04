//! Validation module for document drafts and the sign-in / sign-up forms
//!
//! Errors block the operation; warnings are shown to the user but never stop a save.

use super::document::DocumentDraft;

/// Minimum username length
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Minimum password length for registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// URL prefixes an image can be loaded from without a warning
const IMAGE_URL_SCHEMES: [&str; 3] = ["http://", "https://", "data:"];

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace only
    EmptyTitle,
    /// Description is empty or whitespace only
    EmptyDescription,
    /// Image URL does not use a scheme the browser will load
    ImageUrlScheme { url: String },
    /// Email is empty
    EmailRequired,
    /// Email is missing `@` or `.`
    InvalidEmail,
    /// Username is empty
    UsernameRequired,
    /// Username length outside the allowed range
    UsernameLength { min: usize, max: usize, actual: usize },
    /// Username contains characters other than letters, digits, `_` and `-`
    UsernameCharacters,
    /// Password is empty
    PasswordRequired,
    /// Password is shorter than the minimum
    PasswordTooShort { min: usize },
    /// Password lacks an uppercase letter
    PasswordNoUppercase,
    /// Password lacks a lowercase letter
    PasswordNoLowercase,
    /// Password lacks a digit
    PasswordNoDigit,
    /// Confirmation is empty
    ConfirmRequired,
    /// Confirmation differs from the password
    PasswordMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title is required"),
            ValidationError::EmptyDescription => write!(f, "Description is required"),
            ValidationError::ImageUrlScheme { url } => write!(
                f,
                "Image URL '{}' should start with http://, https:// or data:",
                url
            ),
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::UsernameRequired => write!(f, "Username is required"),
            ValidationError::UsernameLength { min, max, actual } => {
                if actual < min {
                    write!(f, "Username must be at least {} characters", min)
                } else {
                    write!(f, "Username must be at most {} characters", max)
                }
            }
            ValidationError::UsernameCharacters => write!(
                f,
                "Username can only contain letters, numbers, underscores, and hyphens"
            ),
            ValidationError::PasswordRequired => write!(f, "Password is required"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
            ValidationError::PasswordNoUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            ValidationError::PasswordNoLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            ValidationError::PasswordNoDigit => {
                write!(f, "Password must contain at least one digit")
            }
            ValidationError::ConfirmRequired => write!(f, "Please confirm your password"),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation result containing errors and warnings
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Errors that must be fixed
    pub errors: Vec<ValidationError>,
    /// Warnings that are recommended to fix
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Convert to Result, returning first error if any
    pub fn to_result(&self) -> Result<(), ValidationError> {
        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// All error messages joined for a single-line banner
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(
                self.errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(". "),
            )
        }
    }

    pub fn warning_summary(&self) -> Option<String> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(
                self.warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(". "),
            )
        }
    }
}

/// Validates a document draft before it is added or saved
pub fn validate_document(draft: &DocumentDraft) -> ValidationResult {
    let mut result = ValidationResult::new();

    if draft.title.trim().is_empty() {
        result.add_error(ValidationError::EmptyTitle);
    }
    if draft.description.trim().is_empty() {
        result.add_error(ValidationError::EmptyDescription);
    }

    let url = draft.image_url.trim();
    if !url.is_empty() && !IMAGE_URL_SCHEMES.iter().any(|s| url.starts_with(s)) {
        result.add_warning(ValidationError::ImageUrlScheme {
            url: url.to_string(),
        });
    }

    result
}

/// Per-field errors of the sign-in and sign-up forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub username: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub confirm: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm.is_none()
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !email.contains('@') || !email.contains('.') {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if username.is_empty() {
        Err(ValidationError::UsernameRequired)
    } else if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        Err(ValidationError::UsernameLength {
            min: MIN_USERNAME_LENGTH,
            max: MAX_USERNAME_LENGTH,
            actual: len,
        })
    } else if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        Err(ValidationError::UsernameCharacters)
    } else {
        Ok(())
    }
}

/// Rules for a new password. Sign-in only checks presence.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else if !password.chars().any(char::is_uppercase) {
        Err(ValidationError::PasswordNoUppercase)
    } else if !password.chars().any(char::is_lowercase) {
        Err(ValidationError::PasswordNoLowercase)
    } else if !password.chars().any(char::is_numeric) {
        Err(ValidationError::PasswordNoDigit)
    } else {
        Ok(())
    }
}

pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        Err(ValidationError::ConfirmRequired)
    } else if password != confirm {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    FieldErrors {
        email: validate_email(email).err(),
        password: password
            .is_empty()
            .then_some(ValidationError::PasswordRequired),
        ..Default::default()
    }
}

pub fn validate_registration(
    email: &str,
    username: &str,
    password: &str,
    confirm: &str,
) -> FieldErrors {
    FieldErrors {
        email: validate_email(email).err(),
        username: validate_username(username).err(),
        password: validate_new_password(password).err(),
        confirm: validate_confirmation(password, confirm).err(),
    }
}

/// Password strength shown by the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::None => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Number of filled meter bars
    pub fn level(&self) -> u8 {
        match self {
            PasswordStrength::None => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Medium => 2,
            PasswordStrength::Strong => 3,
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::None;
    }

    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_numeric),
        password.chars().any(|c| !c.is_alphanumeric()),
    ];

    match checks.iter().filter(|passed| **passed).count() {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let result = validate_document(&DocumentDraft::new("Title", "Body", ""));
        assert!(result.is_valid());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_blank_title_and_description() {
        let result = validate_document(&DocumentDraft::new("  ", "\t\n", ""));
        assert_eq!(
            result.errors,
            vec![ValidationError::EmptyTitle, ValidationError::EmptyDescription]
        );
        assert_eq!(result.to_result(), Err(ValidationError::EmptyTitle));
        assert_eq!(
            result.error_summary().as_deref(),
            Some("Title is required. Description is required")
        );
    }

    #[test]
    fn test_image_url_warning_does_not_block() {
        let result = validate_document(&DocumentDraft::new("T", "D", "ftp://host/img.png"));
        assert!(result.is_valid());
        assert!(result.has_warnings());
        assert!(result.warning_summary().unwrap().contains("ftp://host/img.png"));

        for url in ["https://a/b.png", "http://a", "data:image/png;base64,AAAA", "   "] {
            assert!(!validate_document(&DocumentDraft::new("T", "D", url)).has_warnings());
        }
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("nobody"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert!(validate_email("you@example.com").is_ok());
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(""), Err(ValidationError::UsernameRequired));
        assert!(matches!(
            validate_username("ab"),
            Err(ValidationError::UsernameLength { actual: 2, .. })
        ));
        assert!(validate_username(&"a".repeat(31)).is_err());
        assert_eq!(
            validate_username("bad name"),
            Err(ValidationError::UsernameCharacters)
        );
        assert!(validate_username("good_name-1").is_ok());
    }

    #[test]
    fn test_new_password_rules() {
        assert_eq!(validate_new_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_new_password("Ab1"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            validate_new_password("abcdefg1"),
            Err(ValidationError::PasswordNoUppercase)
        );
        assert_eq!(
            validate_new_password("ABCDEFG1"),
            Err(ValidationError::PasswordNoLowercase)
        );
        assert_eq!(
            validate_new_password("Abcdefgh"),
            Err(ValidationError::PasswordNoDigit)
        );
        assert!(validate_new_password("Abcdefg1").is_ok());
    }

    #[test]
    fn test_login_only_requires_password_presence() {
        let errors = validate_login("you@example.com", "x");
        assert!(errors.is_valid());

        let errors = validate_login("", "");
        assert_eq!(errors.email, Some(ValidationError::EmailRequired));
        assert_eq!(errors.password, Some(ValidationError::PasswordRequired));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_registration() {
        let errors = validate_registration("you@example.com", "you", "Secret123", "Secret123");
        assert!(errors.is_valid());

        let errors = validate_registration("you@example.com", "you", "Secret123", "Secret124");
        assert_eq!(errors.confirm, Some(ValidationError::PasswordMismatch));
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), PasswordStrength::None);
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abcdefgh123!"), PasswordStrength::Strong);
        assert!(PasswordStrength::Strong > PasswordStrength::Weak);
        assert_eq!(PasswordStrength::Medium.level(), 2);
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Title is required");
        assert_eq!(
            ValidationError::UsernameLength {
                min: 3,
                max: 30,
                actual: 40
            }
            .to_string(),
            "Username must be at most 30 characters"
        );
    }
}
