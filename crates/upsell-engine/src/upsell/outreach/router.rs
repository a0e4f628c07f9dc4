use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::super::roster::RosterSource;
use super::repository::OutreachOutbox;
use super::service::{OutreachRequest, OutreachService, OutreachServiceError};

/// Router builder exposing the outreach composer and simulated send.
pub fn outreach_router<R, O>(service: Arc<OutreachService<R, O>>) -> Router
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    Router::new()
        .route(
            "/api/v1/upsell/users/:user_id/outreach",
            get(draft_handler::<R, O>),
        )
        .route(
            "/api/v1/upsell/users/:user_id/outreach/history",
            get(history_handler::<R, O>),
        )
        .route("/api/v1/upsell/outreach", post(send_handler::<R, O>))
        .with_state(service)
}

fn error_response(error: OutreachServiceError) -> Response {
    let status = match &error {
        OutreachServiceError::UnknownUser(_) => StatusCode::NOT_FOUND,
        OutreachServiceError::EmptySubject | OutreachServiceError::EmptyMessage => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        OutreachServiceError::Roster(_) | OutreachServiceError::Outbox(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn draft_handler<R, O>(
    State(service): State<Arc<OutreachService<R, O>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    match service.draft(&user_id) {
        Ok(draft) => (StatusCode::OK, axum::Json(draft)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn send_handler<R, O>(
    State(service): State<Arc<OutreachService<R, O>>>,
    axum::Json(request): axum::Json<OutreachRequest>,
) -> Response
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    match service.send(request) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<R, O>(
    State(service): State<Arc<OutreachService<R, O>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    match service.history(&user_id) {
        Ok(records) => (
            StatusCode::OK,
            axum::Json(json!({ "user_id": user_id, "sent": records })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
