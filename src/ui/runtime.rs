//! The interactive form loop.

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::client::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the form until the user quits.
///
/// Drawing and key handling stay on this thread; submissions are spawned
/// onto `runtime` and report back over the event channel.
pub fn run(config: &Config, runtime: Handle) -> std::io::Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let client = ApiClient::new(config.client.base_url.clone());
    let mut app = App::new(client, runtime, events.sender());

    tracing::info!(base_url = %config.client.base_url, "form ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Form(event)) => app.on_form_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("form ui stopped");
    Ok(())
}
