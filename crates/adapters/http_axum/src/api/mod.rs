//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod control;
pub mod index;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use tapo_bridge_app::ports::DeviceConnector;

use crate::state::AppState;

/// JSON body carrying a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Build the API router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: DeviceConnector + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::index))
        .route("/tapo", post(control::control::<C>))
}
