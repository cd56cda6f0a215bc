//! Contact form: rule table, validator, form state, and `mailto:` composition.

pub mod form;
pub mod mailto;
pub mod rules;
pub mod validator;

pub use form::{
    Alert, AlertKind, ContactForm, FieldState, FormFocus, PendingSubmission, SubmissionResult,
    SubmitStart, ALERT_TIMEOUT, FAILURE_MESSAGE, INVALID_BANNER, SUBMIT_SETTLE, SUCCESS_MESSAGE,
};
pub use mailto::ContactSubmission;
pub use rules::{rule_for, FieldName, ValidationRule, RULES};
pub use validator::{check_email, validate_field, EmailCheck, COMMON_PROVIDERS};
