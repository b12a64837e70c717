//! Question dispatcher for the chat widget.
//!
//! `Conversation` is the pure reducer: `prepare` turns raw input into the
//! outgoing payload (and the optimistic user message), `resolve` folds the
//! transport result back into the transcript and the disambiguation state.
//! `QuestionDispatcher` runs both around an [`AskTransport`].

use tracing::debug;

use werkstatt_types::ask::{AskRequest, AskResponse};
use werkstatt_types::chat::{ChatMessage, DialogState, PendingDisambiguation};
use werkstatt_types::config::FailurePolicy;
use werkstatt_types::error::AskError;

use crate::chat::transport::AskTransport;

/// What a single `submit` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent or appended.
    Ignored,
    /// The server replied; `awaiting_gender` is the new pending flag.
    Answered { awaiting_gender: bool },
    /// The request failed and the fallback message was appended.
    Failed,
}

/// A payload ready to send, plus what to commit once it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuestion {
    pub request: AskRequest,
    /// Set for fresh questions; becomes `last_question` on success.
    fresh_question: Option<String>,
}

/// Transcript and disambiguation state of one chat session.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: PendingDisambiguation,
    fallback_message: String,
    failure_policy: FailurePolicy,
}

impl Conversation {
    pub fn new(fallback_message: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            pending: PendingDisambiguation::default(),
            fallback_message: fallback_message.into(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Append the opening bot message.
    pub fn greet(&mut self, greeting: &str) {
        if !greeting.trim().is_empty() {
            self.messages.push(ChatMessage::bot(greeting));
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> &PendingDisambiguation {
        &self.pending
    }

    pub fn state(&self) -> DialogState {
        self.pending.state()
    }

    /// Drop a pending gender question so the next input starts fresh.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Build the payload for `input` and append the user message.
    ///
    /// Returns `None` for blank input, leaving the conversation untouched.
    pub fn prepare(&mut self, input: &str) -> Option<PreparedQuestion> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));

        let prepared = match self.pending.state() {
            DialogState::AwaitingGender => PreparedQuestion {
                request: AskRequest::with_gender(self.pending.last_question.clone(), text),
                fresh_question: None,
            },
            DialogState::Idle => PreparedQuestion {
                request: AskRequest::question(text),
                fresh_question: Some(text.to_string()),
            },
        };
        Some(prepared)
    }

    /// Fold the result of a prepared round trip into the conversation.
    pub fn resolve(
        &mut self,
        prepared: PreparedQuestion,
        result: Result<AskResponse, AskError>,
    ) -> SubmitOutcome {
        match result {
            Ok(reply) => {
                self.messages.push(ChatMessage::bot(reply.response));
                if let Some(question) = prepared.fresh_question {
                    self.pending.last_question = question;
                }
                self.pending.awaiting_gender = reply.ask_gender;
                debug!(state = %self.pending.state(), "answer received");
                SubmitOutcome::Answered {
                    awaiting_gender: reply.ask_gender,
                }
            }
            Err(e) => {
                // the fallback bubble is all the user sees of a failure
                debug!(error = %e, state = %self.pending.state(), "ask request failed");
                self.messages.push(ChatMessage::bot(self.fallback_message.clone()));
                if self.failure_policy == FailurePolicy::Reset {
                    self.pending.clear();
                }
                SubmitOutcome::Failed
            }
        }
    }
}

/// Sends questions through a transport and keeps the conversation state.
///
/// `submit` takes `&mut self`, so a second question cannot start before
/// the first one resolves.
pub struct QuestionDispatcher<T: AskTransport> {
    transport: T,
    conversation: Conversation,
}

impl<T: AskTransport> QuestionDispatcher<T> {
    pub fn new(transport: T, conversation: Conversation) -> Self {
        Self {
            transport,
            conversation,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `input` as a fresh question or as the pending gender answer.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let Some(prepared) = self.conversation.prepare(input) else {
            return SubmitOutcome::Ignored;
        };
        let result = self.transport.ask(&prepared.request).await;
        self.conversation.resolve(prepared, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use werkstatt_types::chat::Sender;

    const FALLBACK: &str = "Fehler bei der Anfrage.";

    // --- Mock transport ---

    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<AskResponse, AskError>>>,
        sent: Mutex<Vec<AskRequest>>,
    }

    impl ScriptedTransport {
        fn with(replies: Vec<Result<AskResponse, AskError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<AskRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl AskTransport for ScriptedTransport {
        fn ask(
            &self,
            request: &AskRequest,
        ) -> impl std::future::Future<Output = Result<AskResponse, AskError>> + Send {
            self.sent.lock().unwrap().push(request.clone());
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AskError::Transport("no scripted reply".to_string())));
            async move { reply }
        }
    }

    fn dispatcher(replies: Vec<Result<AskResponse, AskError>>) -> QuestionDispatcher<ScriptedTransport> {
        QuestionDispatcher::new(ScriptedTransport::with(replies), Conversation::new(FALLBACK))
    }

    // --- Reducer ---

    #[test]
    fn test_prepare_blank_input_is_ignored() {
        let mut conv = Conversation::new(FALLBACK);
        assert!(conv.prepare("").is_none());
        assert!(conv.prepare("   \t\n").is_none());
        assert!(conv.messages().is_empty());
    }

    #[test]
    fn test_prepare_idle_sends_question_only() {
        let mut conv = Conversation::new(FALLBACK);
        let prepared = conv.prepare("Was ist CAE?").unwrap();
        assert_eq!(prepared.request, AskRequest::question("Was ist CAE?"));
        assert_eq!(conv.messages(), &[ChatMessage::user("Was ist CAE?")]);
    }

    #[test]
    fn test_prepare_appends_trimmed_text() {
        let mut conv = Conversation::new(FALLBACK);
        let prepared = conv.prepare("  Lasercutting?  ").unwrap();
        assert_eq!(prepared.request.question, "Lasercutting?");
        assert_eq!(conv.messages()[0].text, "Lasercutting?");
    }

    #[test]
    fn test_greet_skips_empty_greeting() {
        let mut conv = Conversation::new(FALLBACK);
        conv.greet("");
        assert!(conv.messages().is_empty());
        conv.greet("Hallo! Wie kann ich helfen?");
        assert_eq!(conv.messages(), &[ChatMessage::bot("Hallo! Wie kann ich helfen?")]);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut conv = Conversation::new(FALLBACK);
        let prepared = conv.prepare("meaning of life").unwrap();
        conv.resolve(prepared, Ok(AskResponse::follow_up("Geschlecht?")));
        assert_eq!(conv.state(), DialogState::AwaitingGender);

        conv.reset();
        assert_eq!(conv.state(), DialogState::Idle);
        let next = conv.prepare("Was ist CAD?").unwrap();
        assert!(next.request.gender.is_none());
    }

    // --- Dispatcher ---

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let mut d = dispatcher(vec![]);
        assert_eq!(d.submit("   ").await, SubmitOutcome::Ignored);
        assert!(d.transport().sent().is_empty());
        assert!(d.conversation().messages().is_empty());
    }

    #[tokio::test]
    async fn test_idle_answer_appends_user_and_bot() {
        let mut d = dispatcher(vec![Ok(AskResponse::answer("Computer Aided Engineering."))]);
        let outcome = d.submit("Was ist CAE?").await;

        assert_eq!(outcome, SubmitOutcome::Answered { awaiting_gender: false });
        assert_eq!(d.transport().sent(), vec![AskRequest::question("Was ist CAE?")]);
        let messages = d.conversation().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1], ChatMessage::bot("Computer Aided Engineering."));
        assert_eq!(d.conversation().state(), DialogState::Idle);
    }

    #[tokio::test]
    async fn test_gender_disambiguation_round_trip() {
        let mut d = dispatcher(vec![
            Ok(AskResponse::follow_up("Für wen ist das?")),
            Ok(AskResponse::answer("Nutze Multi-Material-Druck.")),
        ]);

        let first = d.submit("Wie druckt man in Farbe?").await;
        assert_eq!(first, SubmitOutcome::Answered { awaiting_gender: true });
        assert_eq!(d.conversation().state(), DialogState::AwaitingGender);
        assert_eq!(d.conversation().pending().last_question, "Wie druckt man in Farbe?");
        assert_eq!(d.conversation().messages()[1].text, "Für wen ist das?");

        let second = d.submit("männlich").await;
        assert_eq!(second, SubmitOutcome::Answered { awaiting_gender: false });
        assert_eq!(
            d.transport().sent(),
            vec![
                AskRequest::question("Wie druckt man in Farbe?"),
                AskRequest::with_gender("Wie druckt man in Farbe?", "männlich"),
            ]
        );
        assert_eq!(d.conversation().state(), DialogState::Idle);
        assert_eq!(
            d.conversation().messages().last(),
            Some(&ChatMessage::bot("Nutze Multi-Material-Druck."))
        );
    }

    #[tokio::test]
    async fn test_repeated_follow_up_keeps_original_question() {
        let mut d = dispatcher(vec![
            Ok(AskResponse::follow_up("Geschlecht?")),
            Ok(AskResponse::follow_up("Bitte male oder female.")),
            Ok(AskResponse::answer("42")),
        ]);
        d.submit("meaning of life").await;
        d.submit("vielleicht").await;
        d.submit("male").await;

        let sent = d.transport().sent();
        assert_eq!(sent[1], AskRequest::with_gender("meaning of life", "vielleicht"));
        assert_eq!(sent[2], AskRequest::with_gender("meaning of life", "male"));
    }

    #[tokio::test]
    async fn test_failure_appends_fallback_and_keeps_state() {
        let mut d = dispatcher(vec![
            Ok(AskResponse::follow_up("Geschlecht?")),
            Err(AskError::Status(500)),
        ]);
        d.submit("meaning of life").await;
        let before = d.conversation().pending().clone();

        let outcome = d.submit("female").await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(d.conversation().pending(), &before);
        assert_eq!(d.conversation().state(), DialogState::AwaitingGender);
        assert_eq!(d.conversation().messages().last(), Some(&ChatMessage::bot(FALLBACK)));
    }

    #[tokio::test]
    async fn test_failure_while_idle_keeps_last_question() {
        let mut d = dispatcher(vec![
            Ok(AskResponse::answer("Drehen und Fräsen.")),
            Err(AskError::Transport("connection refused".to_string())),
        ]);
        d.submit("Was macht die Dreherei?").await;
        let outcome = d.submit("Und die CNC?").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(d.conversation().pending().last_question, "Was macht die Dreherei?");
        assert_eq!(d.conversation().state(), DialogState::Idle);
        // user, bot, user, fallback
        assert_eq!(d.conversation().messages().len(), 4);
    }

    /// Collects everything a fmt subscriber writes.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failure_stays_quiet_at_default_verbosity() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut conv = Conversation::new(FALLBACK);
            let prepared = conv.prepare("Hallo?").unwrap();
            let outcome = conv.resolve(prepared, Err(AskError::Status(502)));
            assert_eq!(outcome, SubmitOutcome::Failed);
        });

        let written = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(written.is_empty(), "unexpected log output: {written}");
    }

    #[tokio::test]
    async fn test_reset_policy_drops_pending_on_failure() {
        let transport = ScriptedTransport::with(vec![
            Ok(AskResponse::follow_up("Geschlecht?")),
            Err(AskError::Decode("expected value".to_string())),
        ]);
        let conv = Conversation::new(FALLBACK).with_failure_policy(FailurePolicy::Reset);
        let mut d = QuestionDispatcher::new(transport, conv);

        d.submit("meaning of life").await;
        d.submit("male").await;
        assert_eq!(d.conversation().state(), DialogState::Idle);
        assert_eq!(d.conversation().pending().last_question, "meaning of life");
    }
}
