//! Pure state transitions for the summarize form.

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl FormReducer {
    /// Apply one intent to the form. Pure: every effect lives elsewhere.
    pub fn reduce(state: FormState, intent: FormIntent) -> FormState {
        let mut next = state;
        match intent {
            FormIntent::Insert(ch) => {
                let at = byte_index(&next.input, next.cursor);
                next.input.insert(at, ch);
                next.cursor += 1;
            }
            FormIntent::Backspace => {
                if next.cursor > 0 {
                    let at = byte_index(&next.input, next.cursor - 1);
                    next.input.remove(at);
                    next.cursor -= 1;
                }
            }
            FormIntent::Delete => {
                if next.cursor < next.input.chars().count() {
                    let at = byte_index(&next.input, next.cursor);
                    next.input.remove(at);
                }
            }
            FormIntent::MoveLeft => {
                next.cursor = next.cursor.saturating_sub(1);
            }
            FormIntent::MoveRight => {
                next.cursor = (next.cursor + 1).min(next.input.chars().count());
            }
            FormIntent::MoveHome => {
                next.cursor = 0;
            }
            FormIntent::MoveEnd => {
                next.cursor = next.input.chars().count();
            }
            FormIntent::ClearInput => {
                next.input.clear();
                next.cursor = 0;
            }
            FormIntent::BusyChanged(busy) => {
                next.busy = busy;
                next.animation_tick = 0;
            }
            FormIntent::Rendered(outcome) => {
                next.outcome = Some(outcome);
            }
            FormIntent::Tick => {
                if next.busy {
                    next.animation_tick = next.animation_tick.wrapping_add(1);
                }
            }
        }
        next
    }
}

/// Byte offset of the `cursor`-th char, clamped to the end.
fn byte_index(input: &str, cursor: usize) -> usize {
    input
        .char_indices()
        .nth(cursor)
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}
