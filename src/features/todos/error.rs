use crate::features::todos::model::{ErrorBody, MessageBody};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    NotFound(&'static str),

    /// Anything that went wrong talking to the database.
    #[error("{message}: {cause:#}")]
    Database {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn database(message: &'static str, cause: anyhow::Error) -> Self {
        Self::Database { message, cause }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody::new(message))).into_response()
            }
            ApiError::InvalidBody(rejection) => {
                let body = ErrorBody {
                    message: "Invalid request body".to_string(),
                    error: rejection.body_text(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageBody::new(message))).into_response()
            }
            ApiError::Database { message, cause } => {
                tracing::error!("{}: {:#}", message, cause);
                let body = ErrorBody {
                    message: message.to_string(),
                    error: format!("{:#}", cause),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
