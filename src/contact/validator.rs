//! Field validation against the rule table.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::{rule_for, FieldName};

/// Stricter address check applied after the generic email pattern.
static STRICT_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid strict email regex pattern")
});

/// Providers that do not trigger the uncommon-domain warning.
pub const COMMON_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "mail.com",
];

/// Result of the strict email check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailCheck {
    Invalid,
    /// Accepted; `common_provider` is false for domains outside [`COMMON_PROVIDERS`].
    Valid { common_provider: bool },
}

impl EmailCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, EmailCheck::Valid { .. })
    }
}

/// Strict pattern plus the soft provider check, which only logs.
pub fn check_email(email: &str) -> EmailCheck {
    if !STRICT_EMAIL.is_match(email) {
        return EmailCheck::Invalid;
    }

    let domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_ascii_lowercase())
        .unwrap_or_default();
    let common_provider = COMMON_PROVIDERS.contains(&domain.as_str());
    if !common_provider {
        tracing::warn!(domain = %domain, "Uncommon email provider detected");
    }
    EmailCheck::Valid { common_provider }
}

/// Validate one field value. `Err` carries the first violated rule's message.
///
/// Checks run in order: required, pattern, minimum length, then the strict
/// email check for the email field.
pub fn validate_field(field: FieldName, raw: &str) -> Result<(), String> {
    let rule = rule_for(field);
    let value = raw.trim();

    if value.is_empty() {
        return if rule.required {
            Err(format!("{} is required", field.label()))
        } else {
            Ok(())
        };
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return Err(rule.message.to_string());
        }
    }

    if let Some(min) = rule.min_length {
        if value.chars().count() < min {
            return Err(format!(
                "{} must be at least {} characters long",
                field.label(),
                min
            ));
        }
    }

    if field == FieldName::Email && !check_email(value).is_valid() {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_required() {
        assert_eq!(
            validate_field(FieldName::Name, ""),
            Err("Name is required".to_string())
        );
        assert_eq!(
            validate_field(FieldName::Name, "   "),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_pattern_message_wins_over_length() {
        // "A1" is both too short and not letters-only; the pattern runs first
        assert_eq!(
            validate_field(FieldName::Name, "A1"),
            Err("Please enter a valid name (letters and spaces only)".to_string())
        );
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            validate_field(FieldName::Name, "A"),
            Err("Name must be at least 2 characters long".to_string())
        );
        assert!(validate_field(FieldName::Name, "Ada Lovelace").is_ok());
    }

    #[test]
    fn test_email_without_tld_fails() {
        assert_eq!(
            validate_field(FieldName::Email, "a@b"),
            Err("Please enter a valid email address".to_string())
        );
        assert_eq!(check_email("a@b"), EmailCheck::Valid { common_provider: false });
    }

    #[test]
    fn test_uncommon_domain_is_accepted() {
        assert!(validate_field(FieldName::Email, "a@b.com").is_ok());
        assert_eq!(
            check_email("a@b.com"),
            EmailCheck::Valid {
                common_provider: false
            }
        );
        assert_eq!(
            check_email("someone@Gmail.com"),
            EmailCheck::Valid {
                common_provider: true
            }
        );
    }

    #[test]
    fn test_strict_pattern_rejects_what_generic_allows() {
        // passes ^[^\s@]+@[^\s@]+\.[^\s@]+$ but has an invalid domain label
        assert_eq!(
            validate_field(FieldName::Email, "a@-b.com"),
            Err("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_subject_and_message_lengths() {
        assert_eq!(
            validate_field(FieldName::Subject, "Hey"),
            Err("Subject must be at least 5 characters long".to_string())
        );
        assert!(validate_field(FieldName::Subject, "Hello").is_ok());
        assert_eq!(
            validate_field(FieldName::Message, "too short"),
            Err("Message must be at least 10 characters long".to_string())
        );
        assert!(validate_field(FieldName::Message, "  long enough text  ").is_ok());
    }
}
