//! JSON handler turning devices on and off.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use tapo_bridge_app::ports::DeviceConnector;

use super::MessageBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /tapo`
///
/// The body is taken raw so that a missing or malformed body is reported
/// only after the credentials check.
pub async fn control<C>(
    State(state): State<AppState<C>>,
    body: Bytes,
) -> Result<ControlResponse, ApiError>
where
    C: DeviceConnector + Send + Sync + 'static,
{
    let outcome = state.control_service.control_json(&body).await?;
    Ok(ControlResponse::Ok(Json(MessageBody {
        message: outcome.message(),
    })))
}
