use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::upsell::outreach::OutreachServiceError;
use crate::upsell::roster::{RosterError, RosterImportError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    RosterImport(RosterImportError),
    Roster(RosterError),
    Outreach(OutreachServiceError),
    UnknownUser(String),
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::RosterImport(err) => write!(f, "roster import error: {}", err),
            AppError::Roster(err) => write!(f, "roster error: {}", err),
            AppError::Outreach(err) => write!(f, "outreach error: {}", err),
            AppError::UnknownUser(id) => write!(f, "no user with id '{}'", id),
            AppError::InvalidRequest(reason) => write!(f, "invalid request: {}", reason),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::RosterImport(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Outreach(err) => Some(err),
            AppError::UnknownUser(_) | AppError::InvalidRequest(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::RosterImport(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownUser(_)
            | AppError::Outreach(OutreachServiceError::UnknownUser(_)) => StatusCode::NOT_FOUND,
            AppError::Outreach(
                OutreachServiceError::EmptySubject | OutreachServiceError::EmptyMessage,
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Roster(_)
            | AppError::Outreach(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::RosterImport(value)
    }
}

impl From<RosterError> for AppError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

impl From<OutreachServiceError> for AppError {
    fn from(value: OutreachServiceError) -> Self {
        Self::Outreach(value)
    }
}
