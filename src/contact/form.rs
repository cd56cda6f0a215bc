//! Contact form state: field values, per-field errors, alerts, and submission.

use std::time::{Duration, Instant};

use super::mailto::ContactSubmission;
use super::rules::FieldName;
use super::validator::validate_field;
use crate::traits::{Delay, UriLauncher};

/// Pause between handing off the `mailto:` link and reporting success.
pub const SUBMIT_SETTLE: Duration = Duration::from_millis(1000);
/// Alerts disappear after this long.
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

pub const INVALID_BANNER: &str = "Please fix the errors above";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly.";

/// Value and current error of one field. An empty error means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: String,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "✔",
            AlertKind::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Alert {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ALERT_TIMEOUT
    }
}

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    Submit,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FieldName::Name)
    }
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Field(FieldName::Name) => FormFocus::Field(FieldName::Email),
            FormFocus::Field(FieldName::Email) => FormFocus::Field(FieldName::Subject),
            FormFocus::Field(FieldName::Subject) => FormFocus::Field(FieldName::Message),
            FormFocus::Field(FieldName::Message) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(FieldName::Name),
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Field(FieldName::Name) => FormFocus::Submit,
            FormFocus::Field(FieldName::Email) => FormFocus::Field(FieldName::Name),
            FormFocus::Field(FieldName::Subject) => FormFocus::Field(FieldName::Email),
            FormFocus::Field(FieldName::Message) => FormFocus::Field(FieldName::Subject),
            FormFocus::Submit => FormFocus::Field(FieldName::Message),
        }
    }
}

/// What a submit request did.
#[derive(Debug)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing happened.
    Busy,
    /// At least one field failed; errors and the banner are showing.
    Rejected,
    /// The link was handed off; settle the returned submission to finish.
    Sent(PendingSubmission),
    /// The opener refused the link; the failure alert is showing.
    Failed,
}

/// A handed-off submission waiting out [`SUBMIT_SETTLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub mailto: String,
}

impl PendingSubmission {
    /// Wait the settle delay. Always reports success since the hand-off already happened.
    pub async fn settle(self, delay: &dyn Delay) -> SubmissionResult {
        delay.sleep(SUBMIT_SETTLE).await;
        SubmissionResult::Sent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: [FieldState; 4],
    focus: FormFocus,
    submitting: bool,
    alert: Option<Alert>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[name.index()]
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Page initializer: focus the first field.
    pub fn wire(&mut self) {
        self.focus = FormFocus::default();
    }

    /// Replace a field's value. Counts as an input event, so the error clears.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        let field = &mut self.fields[name.index()];
        field.value = value.into();
        field.error.clear();
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        if let FormFocus::Field(name) = self.focus {
            if c == '\n' && !name.is_multiline() {
                return;
            }
            let field = &mut self.fields[name.index()];
            field.value.push(c);
            field.error.clear();
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let FormFocus::Field(name) = self.focus {
            let field = &mut self.fields[name.index()];
            field.value.pop();
            field.error.clear();
        }
    }

    /// Validate one field and store its error. Returns whether it passed.
    pub fn blur(&mut self, name: FieldName) -> bool {
        let field = &mut self.fields[name.index()];
        match validate_field(name, &field.value) {
            Ok(()) => {
                field.error.clear();
                true
            }
            Err(message) => {
                field.error = message;
                false
            }
        }
    }

    /// Move focus forward, blurring the field being left.
    pub fn focus_next(&mut self) {
        self.leave_focus();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.leave_focus();
        self.focus = self.focus.prev();
    }

    /// Leave the fields for the submit button, blurring the current field.
    pub fn focus_submit(&mut self) {
        self.leave_focus();
        self.focus = FormFocus::Submit;
    }

    fn leave_focus(&mut self) {
        if let FormFocus::Field(name) = self.focus {
            self.blur(name);
        }
    }

    /// Validate every field so each one shows its error. True if all pass.
    pub fn validate_all(&mut self) -> bool {
        FieldName::ALL
            .into_iter()
            .map(|name| self.blur(name))
            .fold(true, |all, ok| all && ok)
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.field(FieldName::Name).value.clone(),
            email: self.field(FieldName::Email).value.clone(),
            subject: self.field(FieldName::Subject).value.clone(),
            message: self.field(FieldName::Message).value.clone(),
        }
    }

    /// Validate and hand the composed `mailto:` link to `launcher`.
    ///
    /// On [`SubmitStart::Sent`] the form stays busy until [`ContactForm::complete`].
    pub fn submit(&mut self, recipient: &str, launcher: &dyn UriLauncher) -> SubmitStart {
        if self.submitting {
            return SubmitStart::Busy;
        }

        if !self.validate_all() {
            self.show_alert(AlertKind::Error, INVALID_BANNER);
            return SubmitStart::Rejected;
        }

        self.submitting = true;
        let mailto = self.submission().to_mailto(recipient);
        match launcher.open(&mailto) {
            Ok(()) => {
                tracing::info!("Contact form handed to mail client");
                SubmitStart::Sent(PendingSubmission { mailto })
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to open mail client");
                self.complete(SubmissionResult::Failed);
                SubmitStart::Failed
            }
        }
    }

    /// Finish a submission. Clears the busy flag whatever the result.
    pub fn complete(&mut self, result: SubmissionResult) {
        match result {
            SubmissionResult::Sent => {
                self.show_alert(AlertKind::Success, SUCCESS_MESSAGE);
                self.reset_fields();
            }
            SubmissionResult::Failed => self.show_alert(AlertKind::Error, FAILURE_MESSAGE),
        }
        self.submitting = false;
    }

    fn reset_fields(&mut self) {
        self.fields = Default::default();
        self.focus = FormFocus::default();
    }

    fn show_alert(&mut self, kind: AlertKind, message: &str) {
        self.alert = Some(Alert {
            kind,
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the alert once it has been visible for [`ALERT_TIMEOUT`].
    pub fn expire_alert(&mut self, now: Instant) {
        if self.alert.as_ref().is_some_and(|alert| alert.is_expired(now)) {
            self.alert = None;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
