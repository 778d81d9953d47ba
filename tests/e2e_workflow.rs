//! Whole-loop tests: real server, real client, a page in the middle.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{wait_for_server, RecordingPage};
use tldw::client::ApiClient;
use tldw::server::SummarizeServer;
use tldw::submit::{self, ErrorKind, Outcome, StdoutPage};
use tldw::summarize::{SummarizeError, Summarizer};

struct FixedSummarizer(Option<String>);

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, _url: &str) -> Result<String, SummarizeError> {
        self.0.clone().ok_or(SummarizeError::NoTranscript)
    }
}

async fn start_server(summarizer: FixedSummarizer) -> SocketAddr {
    let mut server = SummarizeServer::new(Arc::new(summarizer));
    let addr = server.bind("127.0.0.1:0").await.expect("bind");
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    assert!(wait_for_server(addr, Duration::from_secs(5)).await);
    addr
}

#[tokio::test]
async fn a_submission_round_trips_through_the_real_stack() {
    let addr = start_server(FixedSummarizer(Some("The whole video in one line.".into()))).await;

    let client = ApiClient::new(format!("http://{addr}"));
    let mut page = RecordingPage::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    submit::submit(&mut page, &client).await;

    assert_eq!(
        page.rendered(),
        vec![
            Outcome::Pending,
            Outcome::Summary("The whole video in one line.".to_string()),
        ]
    );
    assert_eq!(page.busy_calls(), vec![true, false]);
}

#[tokio::test]
async fn backend_rejections_surface_as_application_errors() {
    let addr = start_server(FixedSummarizer(None)).await;

    let client = ApiClient::new(format!("http://{addr}"));
    let mut page = RecordingPage::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    submit::submit(&mut page, &client).await;

    assert_eq!(
        page.last_render(),
        Some(Outcome::Error {
            kind: ErrorKind::Application,
            message: "Could not generate summary".to_string(),
        })
    );
}

#[tokio::test]
async fn the_one_shot_page_reports_success_and_failure() {
    let addr = start_server(FixedSummarizer(Some("One good line.".into()))).await;
    let client = ApiClient::new(format!("http://{addr}"));

    let mut page = StdoutPage::new("https://youtu.be/dQw4w9WgXcQ");
    submit::submit(&mut page, &client).await;
    assert_eq!(
        page.last_outcome(),
        Some(&Outcome::Summary("One good line.".to_string()))
    );

    let mut page = StdoutPage::new("");
    submit::submit(&mut page, &client).await;
    assert!(page.last_outcome().is_some_and(|outcome| outcome.is_error()));
}
