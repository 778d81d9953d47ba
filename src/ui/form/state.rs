//! State for the summarize form.

use crate::submit::Outcome;

/// Caption of the submit control when idle.
pub const IDLE_LABEL: &str = "Summarize";
/// Caption of the submit control while a request is outstanding.
pub const BUSY_LABEL: &str = "Summarizing…";

/// The whole form: URL field, submit control, display region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    /// Text of the URL field.
    pub input: String,
    /// Cursor position in the field, counted in chars.
    pub cursor: usize,
    /// True while a submission is outstanding; disables the control.
    pub busy: bool,
    /// Spinner frame counter, advanced while busy.
    pub animation_tick: u8,
    /// Last rendering of the display region, if any.
    pub outcome: Option<Outcome>,
}

impl FormState {
    /// Label the submit control currently shows.
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// True when Enter should start a submission.
    pub fn can_submit(&self) -> bool {
        !self.busy
    }
}
