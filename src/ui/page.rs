//! Channel-backed page for submissions started from the terminal form.

use std::sync::mpsc::Sender;

use crate::submit::{Outcome, SubmitPage};
use crate::ui::events::{AppEvent, FormEvent};

/// `SubmitPage` that reports back into the UI loop.
///
/// The field text is captured at the moment Enter is pressed, so the
/// handler sees the field exactly as it was at submit time even while the
/// user keeps typing. Busy toggles and renders travel over the event
/// channel and land in the reducer.
pub struct UiPage {
    input: String,
    events: Sender<AppEvent>,
}

impl UiPage {
    pub fn new(input: String, events: Sender<AppEvent>) -> Self {
        Self { input, events }
    }
}

impl SubmitPage for UiPage {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_busy(&mut self, busy: bool) {
        // The loop may already be gone during shutdown.
        let _ = self.events.send(AppEvent::Form(FormEvent::Busy(busy)));
    }

    fn render(&mut self, outcome: Outcome) {
        let _ = self.events.send(AppEvent::Form(FormEvent::Render(outcome)));
    }
}
