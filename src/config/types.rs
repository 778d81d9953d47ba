//! Configuration data structures.

use serde::{Deserialize, Serialize};

/// Root configuration, one section per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// Settings for the terminal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the summarize backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Settings for the backend server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds, host:port.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Settings for the transcript pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Preferred caption language code.
    #[serde(default = "default_language")]
    pub language: String,
    /// Upper bound on sentences in a summary.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            max_sentences: default_max_sentences(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_sentences() -> usize {
    10
}
