//! AskTransport trait definition.
//!
//! The dispatcher never talks HTTP directly; it sends each payload through
//! this port. Uses native async fn in traits (RPITIT, Rust 2024 edition).

use werkstatt_types::ask::{AskRequest, AskResponse};
use werkstatt_types::error::AskError;

/// Delivers one question payload to the answer service.
///
/// Implementations live in werkstatt-infra (e.g., `HttpAskTransport`).
/// One call is one request: no retry, no caching.
pub trait AskTransport: Send + Sync {
    fn ask(
        &self,
        request: &AskRequest,
    ) -> impl std::future::Future<Output = Result<AskResponse, AskError>> + Send;
}
