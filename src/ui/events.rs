//! Event plumbing between the input thread, submit tasks and the UI loop.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::submit::Outcome;

/// Feedback from a running submission.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// Busy flag toggled.
    Busy(bool),
    /// Display region replaced.
    Render(Outcome),
}

/// Everything the UI loop consumes.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    Form(FormEvent),
}

/// Owns the channel and the input thread behind it.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread: terminal events plus ticks at `tick_rate`.
    ///
    /// The thread exits once the receiving side is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Next event, or a timeout so the loop can redraw.
    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handed to submit tasks so they can report back into the loop.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
