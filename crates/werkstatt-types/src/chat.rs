//! Chat widget entities.
//!
//! Both types are ephemeral: they live for one chat session and are never
//! persisted.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single bubble in the chat transcript.
///
/// Messages are appended in order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// The two states of the disambiguation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// The next submit starts a fresh question.
    #[default]
    Idle,
    /// The next submit is the gender answer to `last_question`.
    AwaitingGender,
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogState::Idle => write!(f, "idle"),
            DialogState::AwaitingGender => write!(f, "awaiting-gender"),
        }
    }
}

/// Memory of an unanswered follow-up request.
///
/// `last_question` is the most recent fresh question that completed a
/// round trip; `awaiting_gender` is set while the server waits for the
/// gender answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PendingDisambiguation {
    pub last_question: String,
    pub awaiting_gender: bool,
}

impl PendingDisambiguation {
    pub fn state(&self) -> DialogState {
        if self.awaiting_gender {
            DialogState::AwaitingGender
        } else {
            DialogState::Idle
        }
    }

    /// Forget the pending follow-up. `last_question` is kept.
    pub fn clear(&mut self) {
        self.awaiting_gender = false;
    }
}
