//! Answer endpoint.
//!
//! POST /ask - always answers 200 with `{response, ask_gender?}`; bodies
//! that are not a valid question get an error phrase instead.

use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use uuid::Uuid;

use werkstatt_types::ask::AskResponse;

use crate::state::AppState;

/// POST /ask - Answer a chat widget question.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Json<AskResponse> {
    let start = Instant::now();
    let request_id = Uuid::now_v7();

    let reply = state.engine.answer_body(&body);

    tracing::info!(
        %request_id,
        ask_gender = reply.ask_gender,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "question answered"
    );
    Json(reply)
}
