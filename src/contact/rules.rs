//! Declarative validation rules for the contact form fields.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// The four contact form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Capitalized name used in generated messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    /// Identifier of the line that shows this field's error.
    pub fn error_target(&self) -> String {
        format!("{}-error", self.as_str())
    }

    pub fn index(&self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Subject => 2,
            FieldName::Message => 3,
        }
    }

    /// Whether the field takes multi-line input.
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown form field '{}'", s))
    }
}

/// Static rule for one field.
#[derive(Debug)]
pub struct ValidationRule {
    pub field: FieldName,
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: &'static str,
}

/// Rules in field order.
pub static RULES: Lazy<[ValidationRule; 4]> = Lazy::new(|| {
    [
        ValidationRule {
            field: FieldName::Name,
            required: true,
            min_length: Some(2),
            pattern: Some(Regex::new(r"^[a-zA-Z\s]+$").expect("Invalid name regex pattern")),
            message: "Please enter a valid name (letters and spaces only)",
        },
        ValidationRule {
            field: FieldName::Email,
            required: true,
            min_length: None,
            pattern: Some(
                Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"),
            ),
            message: "Please enter a valid email address",
        },
        ValidationRule {
            field: FieldName::Subject,
            required: true,
            min_length: Some(5),
            pattern: None,
            message: "Subject must be at least 5 characters long",
        },
        ValidationRule {
            field: FieldName::Message,
            required: true,
            min_length: Some(10),
            pattern: None,
            message: "Message must be at least 10 characters long",
        },
    ]
});

/// The rule for `field`.
pub fn rule_for(field: FieldName) -> &'static ValidationRule {
    &RULES[field.index()]
}
