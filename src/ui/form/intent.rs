//! Intents the form reducer understands.

use crate::submit::Outcome;

/// Edits from the keyboard plus lifecycle events from a running submission.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// Clear the whole field.
    ClearInput,
    /// The submit handler toggled the busy flag.
    BusyChanged(bool),
    /// The submit handler replaced the display region.
    Rendered(Outcome),
    /// Animation heartbeat.
    Tick,
}
