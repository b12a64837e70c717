//! Wire format of the `POST /ask` endpoint.
//!
//! Request body is `{"question": ...}` or `{"question": ..., "gender": ...}`.
//! Response body is `{"response": ..., "ask_gender"?: true}`.

use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;
use std::str::FromStr;

/// Fixed path of the answer endpoint.
pub const ASK_PATH: &str = "/ask";

/// Outgoing question payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(
        default,
        deserialize_with = "deserialize_gender",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,
}

impl AskRequest {
    /// A fresh question without disambiguation context.
    pub fn question(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            gender: None,
        }
    }

    /// The follow-up round: the original question plus the gender answer.
    pub fn with_gender(question: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            gender: Some(gender.into()),
        }
    }
}

/// Reply from the answer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
    /// Set when the server needs the gender before it can answer.
    #[serde(
        default,
        deserialize_with = "deserialize_truthy",
        skip_serializing_if = "is_false"
    )]
    pub ask_gender: bool,
}

impl AskResponse {
    pub fn answer(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ask_gender: false,
        }
    }

    pub fn follow_up(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ask_gender: true,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Accept any JSON value for `ask_gender`; only truthy values count.
///
/// `null`, `false`, `0` and `""` all end the conversation turn.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) mean no gender was
/// given. Any other non-string value is rejected.
fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let empty = match &value {
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        other => !is_truthy(other),
    };
    if empty {
        return Ok(None);
    }
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        other => Err(serde::de::Error::custom(format!(
            "gender must be a string, got {other}"
        ))),
    }
}

/// Gender answer understood by the answer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("invalid gender: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_question_has_no_gender_field() {
        let json = serde_json::to_string(&AskRequest::question("Wie druckt man in Farbe?")).unwrap();
        assert_eq!(json, r#"{"question":"Wie druckt man in Farbe?"}"#);
    }

    #[test]
    fn test_follow_up_question_carries_gender() {
        let req = AskRequest::with_gender("Wie druckt man in Farbe?", "männlich");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"question":"Wie druckt man in Farbe?","gender":"männlich"}"#
        );
    }

    #[test]
    fn test_request_missing_question_defaults_to_empty() {
        let req: AskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_empty());
        assert!(req.gender.is_none());
    }

    #[test]
    fn test_response_ask_gender_absent() {
        let resp: AskResponse =
            serde_json::from_str(r#"{"response":"Nutze Multi-Material-Druck."}"#).unwrap();
        assert!(!resp.ask_gender);
        assert_eq!(resp.response, "Nutze Multi-Material-Druck.");
    }

    #[test]
    fn test_response_ask_gender_falsy_values() {
        for raw in ["null", "false", "0", "\"\""] {
            let body = format!(r#"{{"response":"x","ask_gender":{raw}}}"#);
            let resp: AskResponse = serde_json::from_str(&body).unwrap();
            assert!(!resp.ask_gender, "{raw} should be falsy");
        }
    }

    #[test]
    fn test_response_ask_gender_truthy_values() {
        for raw in ["true", "1", "\"yes\""] {
            let body = format!(r#"{{"response":"x","ask_gender":{raw}}}"#);
            let resp: AskResponse = serde_json::from_str(&body).unwrap();
            assert!(resp.ask_gender, "{raw} should be truthy");
        }
    }

    #[test]
    fn test_response_serialize_omits_false_flag() {
        let json = serde_json::to_string(&AskResponse::answer("42")).unwrap();
        assert_eq!(json, r#"{"response":"42"}"#);
        let json = serde_json::to_string(&AskResponse::follow_up("?")).unwrap();
        assert_eq!(json, r#"{"response":"?","ask_gender":true}"#);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("divers".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_parse_is_exact() {
        assert!(" female ".parse::<Gender>().is_err());
        assert!("männlich".parse::<Gender>().is_err());
        assert!("weiblich".parse::<Gender>().is_err());
    }

    #[test]
    fn test_request_falsy_gender_is_absent() {
        for raw in ["null", "false", "0", "\"\"", "[]", "{}"] {
            let body = format!(r#"{{"question":"meaning of life","gender":{raw}}}"#);
            let req: AskRequest = serde_json::from_str(&body).unwrap();
            assert!(req.gender.is_none(), "{raw} should count as no gender");
        }
    }

    #[test]
    fn test_request_truthy_non_string_gender_is_rejected() {
        for raw in ["true", "1", "[\"male\"]"] {
            let body = format!(r#"{{"question":"meaning of life","gender":{raw}}}"#);
            assert!(serde_json::from_str::<AskRequest>(&body).is_err(), "{raw} should be rejected");
        }
    }
}
