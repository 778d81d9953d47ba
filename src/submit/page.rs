//! The page surface the submit handler drives.

use super::outcome::{Outcome, LOADING_TEXT, SUMMARY_HEADING};

/// Everything the submit handler needs from a page: one input field, one
/// busy toggle, one display region.
///
/// Production pages are the terminal form and the one-shot stdout printer;
/// tests substitute a recording page. Methods are synchronous because
/// rendering is a UI write, not I/O.
pub trait SubmitPage {
    /// Current text of the URL field, untrimmed.
    fn input_text(&self) -> String;

    /// Toggle the submit control between idle and busy.
    fn set_busy(&mut self, busy: bool);

    /// Replace the display region's contents.
    fn render(&mut self, outcome: Outcome);
}

/// Page for the one-shot CLI mode.
///
/// The summary goes to stdout; progress and errors go to stderr so the
/// output stays pipeable.
pub struct StdoutPage {
    url: String,
    last: Option<Outcome>,
}

impl StdoutPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last: None,
        }
    }

    /// The final outcome once the handler has returned.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }
}

impl SubmitPage for StdoutPage {
    fn input_text(&self) -> String {
        self.url.clone()
    }

    fn set_busy(&mut self, _busy: bool) {
        // One-shot mode has no control to disable.
    }

    fn render(&mut self, outcome: Outcome) {
        match &outcome {
            Outcome::Pending => eprintln!("{LOADING_TEXT}"),
            Outcome::Summary(text) => println!("{SUMMARY_HEADING}\n\n{text}"),
            Outcome::Error { .. } => {
                if let Some(line) = outcome.error_line() {
                    eprintln!("{line}");
                }
            }
        }
        self.last = Some(outcome);
    }
}
