use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    Validation(validator::ValidationErrors),
    Rejection(StatusCode, String),
    Config(String),
    Io(std::io::Error),
    DatabaseError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors.to_string()),
            Self::Rejection(status, msg) => (status, msg),
            Self::Config(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            Self::DatabaseError(_) | Self::MigrationError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "{msg}"),
            Self::Validation(errors) => write!(f, "validation failed: {errors}"),
            Self::Rejection(_, msg) => write!(f, "{msg}"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::DatabaseError(err) => write!(f, "database error: {err}"),
            Self::MigrationError(err) => write!(f, "migration failed: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {:?}", err);
        Self::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        error!("Migration error: {:?}", err);
        Self::MigrationError(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejection(rejection.status(), rejection.body_text())
    }
}

// An unparsable path id is invalid input, same class as a bad body.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        let status = match rejection {
            PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        Self::Rejection(status, rejection.body_text())
    }
}
