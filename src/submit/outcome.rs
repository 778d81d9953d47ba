//! What the display region can show.

/// Heading placed above a successful summary.
pub const SUMMARY_HEADING: &str = "Video Summary";

/// Placeholder shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading summary...";

/// Which failure produced an error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The URL field was empty; nothing was sent.
    Validation,
    /// The backend answered with a non-success status and its own message.
    Application,
    /// The request or decode failed before a contract payload arrived.
    Network,
}

impl ErrorKind {
    /// Prefix shown before the message, where the kind carries one.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ErrorKind::Validation => None,
            ErrorKind::Application => Some("Error"),
            ErrorKind::Network => Some("Network Error"),
        }
    }
}

/// One rendering of the display region, replaced wholesale on every render.
///
/// Carried text is always treated as plain text by renderers, whatever the
/// backend put in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Summary(String),
    Error { kind: ErrorKind, message: String },
}

impl Outcome {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Error {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::Error {
            kind: ErrorKind::Application,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Error {
            kind: ErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The error line as shown to the user, prefix included.
    pub fn error_line(&self) -> Option<String> {
        match self {
            Self::Error { kind, message } => Some(match kind.prefix() {
                Some(prefix) => format!("{prefix}: {message}"),
                None => message.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_carry_the_error_prefix() {
        let outcome = Outcome::application("Invalid YouTube URL");
        assert_eq!(outcome.error_line().as_deref(), Some("Error: Invalid YouTube URL"));
    }

    #[test]
    fn network_errors_carry_the_network_prefix() {
        let outcome = Outcome::network("connection refused");
        assert_eq!(
            outcome.error_line().as_deref(),
            Some("Network Error: connection refused")
        );
    }

    #[test]
    fn validation_errors_have_no_prefix() {
        let outcome = Outcome::validation("Please enter a YouTube URL.");
        assert_eq!(outcome.error_line().as_deref(), Some("Please enter a YouTube URL."));
    }

    #[test]
    fn non_errors_have_no_error_line() {
        assert_eq!(Outcome::Pending.error_line(), None);
        assert_eq!(Outcome::Summary("text".into()).error_line(), None);
        assert!(!Outcome::Pending.is_error());
        assert!(Outcome::validation("x").is_error());
    }
}
