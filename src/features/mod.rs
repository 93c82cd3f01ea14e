pub mod todos;

use axum::{Json, http::StatusCode, response::Html};
use todos::model::MessageBody;

pub async fn welcome_handler() -> Html<&'static str> {
    Html("Welcome to the TODO API 🚀")
}

// catch-all for unknown paths and unsupported methods on known ones
pub async fn route_not_found() -> (StatusCode, Json<MessageBody>) {
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Route not found")))
}
