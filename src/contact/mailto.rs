//! `mailto:` URI construction for the contact form.

/// The values a visitor submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Message body as it appears in the composed email.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:{recipient}?subject=..&body=..` with both query values percent-encoded.
    ///
    /// Only RFC 3986 unreserved characters pass through, so `! ' ( ) *` are
    /// escaped as well.
    pub fn to_mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "Line one & two".to_string(),
        }
    }

    #[test]
    fn test_body_layout() {
        assert_eq!(
            submission().body(),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nLine one & two"
        );
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let uri = submission().to_mailto("me@example.com");
        assert_eq!(
            uri,
            "mailto:me@example.com?subject=Hello%20there&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0ALine%20one%20%26%20two"
        );
    }

    #[test]
    fn test_sub_delimiters_are_escaped() {
        let submission = ContactSubmission {
            subject: "Hi! (it's *me*)".to_string(),
            ..submission()
        };
        let uri = submission.to_mailto("me@example.com");
        assert!(uri.starts_with(
            "mailto:me@example.com?subject=Hi%21%20%28it%27s%20%2Ame%2A%29&body="
        ));
    }
}
