//! # tapo-bridge-adapter-tapo
//!
//! Device session adapter for TP-Link Tapo devices, built on the
//! [`tapo`](https://docs.rs/tapo) crate.
//!
//! ## Supported models
//!
//! | Family | Handler | Product line |
//! |--------|---------|--------------|
//! | `P100` | `PlugHandler` | plug |
//! | `P110` | `PlugEnergyMonitoringHandler` | plug |
//! | `L510` | `LightHandler` | bulb |
//! | `L530` | `ColorLightHandler` | bulb |
//!
//! A fresh `tapo::ApiClient` is built for every session; its model-specific
//! constructor performs the handshake and login in one step.
//!
//! ## Dependency rule
//!
//! Depends on `tapo-bridge-app` (port traits) and `tapo-bridge-domain` only.

mod config;
mod session;

use tapo::ApiClient;

use tapo_bridge_app::ports::DeviceConnector;
use tapo_bridge_domain::credentials::Credentials;
use tapo_bridge_domain::device::{DeviceEntry, DeviceFamily};
use tapo_bridge_domain::error::SessionError;

pub use config::TapoConfig;
pub use session::TapoSession;

/// [`DeviceConnector`] talking to real devices on the local network.
#[derive(Debug, Clone, Default)]
pub struct TapoConnector {
    config: TapoConfig,
}

impl TapoConnector {
    #[must_use]
    pub fn new(config: TapoConfig) -> Self {
        Self { config }
    }

    fn client(&self, credentials: &Credentials) -> ApiClient {
        let client = ApiClient::new(credentials.email.clone(), credentials.password.clone());
        match self.config.timeout() {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }
}

impl DeviceConnector for TapoConnector {
    type Session = TapoSession;

    async fn connect(
        &self,
        device: &DeviceEntry,
        credentials: &Credentials,
    ) -> Result<TapoSession, SessionError> {
        let client = self.client(credentials);
        let ip = device.address.to_string();

        tracing::debug!(
            device = %device.name,
            address = %ip,
            family = %device.family,
            "opening tapo session"
        );

        let session = match device.family {
            DeviceFamily::P100 => client.p100(ip).await.map(TapoSession::Plug),
            DeviceFamily::P110 => client.p110(ip).await.map(TapoSession::EnergyPlug),
            DeviceFamily::L510 => client.l510(ip).await.map(TapoSession::Light),
            DeviceFamily::L530 => client.l530(ip).await.map(TapoSession::ColorLight),
        };

        session.map_err(SessionError::login)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    #[tokio::test]
    async fn should_report_login_failure_when_device_is_unreachable() {
        let connector = TapoConnector::new(TapoConfig {
            timeout_secs: Some(1),
        });
        let device = DeviceEntry::new(
            "nowhere",
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            DeviceFamily::P110,
        )
        .unwrap();
        let credentials = Credentials {
            email: "me@example.com".to_string(),
            password: "secret".to_string(),
        };

        let result = connector.connect(&device, &credentials).await;

        assert!(matches!(result, Err(SessionError::Login(_))));
    }
}
