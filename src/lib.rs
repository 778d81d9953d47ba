//! tldw: summarize YouTube videos from the terminal.
//!
//! The crate is both halves of that sentence. `server` exposes the
//! summarize API over HTTP and `summarize` implements the transcript
//! pipeline behind it; `submit` drives one form submission against the API
//! through whatever page surface it is given, and `ui` is the interactive
//! page. `api` holds the wire contract both sides agree on.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod server;
pub mod submit;
pub mod summarize;
pub mod ui;
