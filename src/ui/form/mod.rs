//! Model and reducer for the summarize form.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, BUSY_LABEL, IDLE_LABEL};
