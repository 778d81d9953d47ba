//! The submission flow: validate, post, render, always release busy.

mod outcome;
mod page;

pub use outcome::{ErrorKind, Outcome, LOADING_TEXT, SUMMARY_HEADING};
pub use page::{StdoutPage, SubmitPage};

use crate::api::SummaryResponse;
use crate::client::ApiClient;

/// Validation message for an empty URL field.
pub const EMPTY_URL_MESSAGE: &str = "Please enter a YouTube URL.";

/// Run one submission against the page.
///
/// An empty (or all-whitespace) field renders the validation message and
/// returns without touching the busy flag or the network. Otherwise the
/// handler shows the loading placeholder, marks the control busy, issues
/// exactly one request, and renders whatever comes back. From the moment
/// the flag is raised, a scope guard releases it on every exit path,
/// panics included, after the final render.
pub async fn submit<P: SubmitPage>(page: &mut P, client: &ApiClient) {
    let url = page.input_text().trim().to_string();
    if url.is_empty() {
        page.render(Outcome::validation(EMPTY_URL_MESSAGE));
        return;
    }

    page.render(Outcome::Pending);
    page.set_busy(true);
    let mut page = scopeguard::guard(page, |page| page.set_busy(false));

    match client.summarize(&url).await {
        Ok(SummaryResponse::Success { summary }) => {
            page.render(Outcome::Summary(summary));
        }
        Ok(SummaryResponse::Failure { status, error }) => {
            tracing::warn!(status, error = %error, "summarize request rejected");
            page.render(Outcome::application(error));
        }
        Err(err) => {
            tracing::warn!(error = %err, "summarize request failed");
            page.render(Outcome::network(err.to_string()));
        }
    }
}
