//! Configuration types for Werkstatt.
//!
//! `WerkstattConfig` is the top-level `config.toml`. Every field has a
//! default, so an empty file (or no file) is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.werkstatt/config.toml` unless overridden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WerkstattConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub answers: AnswerConfig,
}

/// Site server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html`, `Info/` and `Projekte/`.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
        }
    }
}

/// What the chat client does with a pending gender question when the
/// follow-up request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Keep waiting for the gender answer.
    #[default]
    Retain,
    /// Drop back to idle.
    Reset,
}

/// Chat client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the answer service; `/ask` is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bot message shown when a request fails.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Opening bot message; empty disables it.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_fallback_message() -> String {
    "Fehler bei der Anfrage.".to_string()
}

fn default_greeting() -> String {
    "Hallo! Wie kann ich helfen?".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            fallback_message: default_fallback_message(),
            greeting: default_greeting(),
            failure_policy: FailurePolicy::default(),
            request_timeout_secs: None,
        }
    }
}

/// Answer service tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Similarity score (0-100) a question must exceed to match a phrase.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: u8,
}

fn default_match_threshold() -> u8 {
    75
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
        }
    }
}
