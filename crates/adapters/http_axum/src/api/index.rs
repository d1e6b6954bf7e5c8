//! Landing route confirming the API is up.

use axum::Json;

use super::MessageBody;

/// `GET /`
pub async fn index() -> Json<MessageBody> {
    Json(MessageBody {
        message: "API operational with Tapo control.".to_string(),
    })
}
