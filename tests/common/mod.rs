//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use std::net::SocketAddr;
use std::time::Duration;

use tldw::submit::{Outcome, SubmitPage};

/// A port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    listener.local_addr().expect("local addr").port()
}

/// Wait until `addr` accepts TCP connections, or give up.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// One call the submit handler made against the page, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCall {
    Busy(bool),
    Render(Outcome),
}

/// `SubmitPage` that records every call for assertions.
pub struct RecordingPage {
    input: String,
    pub calls: Vec<PageCall>,
}

impl RecordingPage {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            calls: Vec::new(),
        }
    }

    /// Busy values in call order.
    pub fn busy_calls(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PageCall::Busy(busy) => Some(*busy),
                _ => None,
            })
            .collect()
    }

    /// Rendered outcomes in call order.
    pub fn rendered(&self) -> Vec<Outcome> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PageCall::Render(outcome) => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<Outcome> {
        self.rendered().pop()
    }
}

impl SubmitPage for RecordingPage {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_busy(&mut self, busy: bool) {
        self.calls.push(PageCall::Busy(busy));
    }

    fn render(&mut self, outcome: Outcome) {
        self.calls.push(PageCall::Render(outcome));
    }
}
