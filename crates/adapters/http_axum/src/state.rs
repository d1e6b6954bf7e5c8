//! Shared application state for axum handlers.

use std::sync::Arc;

use tapo_bridge_app::ports::DeviceConnector;
use tapo_bridge_app::services::control_service::ControlService;

/// Application state shared across all axum handlers.
///
/// Generic over the device connector to avoid dynamic dispatch.
/// `Clone` is implemented manually so the connector itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Device control use-case.
    pub control_service: Arc<ControlService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
        }
    }
}

impl<C> AppState<C>
where
    C: DeviceConnector + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(control_service: ControlService<C>) -> Self {
        Self {
            control_service: Arc::new(control_service),
        }
    }
}
