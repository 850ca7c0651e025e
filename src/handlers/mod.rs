use axum::Json;

use crate::models::response::MessageResponse;

pub mod posts;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}
