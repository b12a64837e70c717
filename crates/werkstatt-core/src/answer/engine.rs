//! Answer engine behind `POST /ask`.
//!
//! Matching order:
//! 1. meaning-of-life questions, answered per gender or with a follow-up
//!    asking for it
//! 2. everything else gets an "unknown" phrase
//!
//! Bodies that cannot be read as an [`AskRequest`] get an error phrase
//! instead of an HTTP error, so the widget always has something to show.

use tracing::debug;

use werkstatt_types::ask::{AskRequest, AskResponse, Gender};

use crate::answer::fuzzy::partial_ratio;
use crate::answer::phrases;
use crate::answer::picker::PhrasePicker;

/// Lowercase, trim and strip question marks.
pub fn normalize_question(question: &str) -> String {
    question.to_lowercase().trim().replace('?', "")
}

/// Which branch produced a reply. Logged with every answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    AskGender,
    Female,
    Male,
    Unknown,
    RequestError,
}

pub struct AnswerEngine<P: PhrasePicker> {
    picker: P,
    match_threshold: u8,
}

impl<P: PhrasePicker> AnswerEngine<P> {
    pub fn new(picker: P, match_threshold: u8) -> Self {
        Self {
            picker,
            match_threshold,
        }
    }

    /// Whether the question is close enough to any meaning-of-life phrase.
    pub fn is_meaning_of_life(&self, question: &str) -> bool {
        let norm = normalize_question(question);
        phrases::MEANING_OF_LIFE
            .iter()
            .any(|phrase| partial_ratio(&norm, phrase) > self.match_threshold)
    }

    /// Classify a request without picking a phrase.
    pub fn classify(&self, request: &AskRequest) -> AnswerKind {
        if !self.is_meaning_of_life(&request.question) {
            return AnswerKind::Unknown;
        }

        match request.gender.as_deref().filter(|g| !g.is_empty()) {
            None => AnswerKind::AskGender,
            Some(raw) => match raw.parse::<Gender>() {
                Ok(Gender::Female) => AnswerKind::Female,
                Ok(Gender::Male) => AnswerKind::Male,
                Err(_) => AnswerKind::Unknown,
            },
        }
    }

    pub fn answer(&self, request: &AskRequest) -> AskResponse {
        let kind = self.classify(request);
        debug!(?kind, has_gender = request.gender.is_some(), "answering question");
        self.reply_for(kind)
    }

    /// Parse a raw JSON body and answer it.
    pub fn answer_body(&self, body: &[u8]) -> AskResponse {
        match serde_json::from_slice::<AskRequest>(body) {
            Ok(request) => self.answer(&request),
            Err(e) => {
                debug!(error = %e, "unreadable ask body");
                self.reply_for(AnswerKind::RequestError)
            }
        }
    }

    /// A random home page greeting.
    pub fn greeting(&self) -> &'static str {
        self.picker.pick(phrases::GREETINGS)
    }

    fn reply_for(&self, kind: AnswerKind) -> AskResponse {
        match kind {
            AnswerKind::AskGender => AskResponse::follow_up(self.picker.pick(phrases::ASK_GENDER)),
            AnswerKind::Female => AskResponse::answer(self.picker.pick(phrases::ANSWER_FEMALE)),
            AnswerKind::Male => AskResponse::answer(self.picker.pick(phrases::ANSWER_MALE)),
            AnswerKind::Unknown => AskResponse::answer(self.picker.pick(phrases::UNKNOWN)),
            AnswerKind::RequestError => {
                AskResponse::answer(self.picker.pick(phrases::REQUEST_ERROR))
            }
        }
    }
}
