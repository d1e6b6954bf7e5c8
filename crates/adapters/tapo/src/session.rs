//! Session handlers — one variant per `tapo` handler type.

use tapo::{ColorLightHandler, LightHandler, PlugEnergyMonitoringHandler, PlugHandler};

use tapo_bridge_app::ports::DeviceSession;
use tapo_bridge_domain::action::Action;
use tapo_bridge_domain::error::SessionError;

/// An authenticated session to a Tapo device.
pub enum TapoSession {
    /// P100.
    Plug(PlugHandler),
    /// P110.
    EnergyPlug(PlugEnergyMonitoringHandler),
    /// L510.
    Light(LightHandler),
    /// L530.
    ColorLight(ColorLightHandler),
}

impl TapoSession {
    async fn apply(&self, action: Action) -> Result<(), tapo::Error> {
        match (self, action) {
            (Self::Plug(h), Action::On) => h.on().await,
            (Self::Plug(h), Action::Off) => h.off().await,
            (Self::EnergyPlug(h), Action::On) => h.on().await,
            (Self::EnergyPlug(h), Action::Off) => h.off().await,
            (Self::Light(h), Action::On) => h.on().await,
            (Self::Light(h), Action::Off) => h.off().await,
            (Self::ColorLight(h), Action::On) => h.on().await,
            (Self::ColorLight(h), Action::Off) => h.off().await,
        }
    }
}

impl DeviceSession for TapoSession {
    async fn turn_on(&self) -> Result<(), SessionError> {
        self.apply(Action::On)
            .await
            .map_err(|err| SessionError::command(Action::On, err))
    }

    async fn turn_off(&self) -> Result<(), SessionError> {
        self.apply(Action::Off)
            .await
            .map_err(|err| SessionError::command(Action::Off, err))
    }
}
