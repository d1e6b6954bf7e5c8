//! Device session port — authenticated, per-request link to a physical device.
//!
//! The encrypted handshake, login and command encoding are vendor specific and
//! live in an adapter crate. A session is opened for a single request and
//! dropped afterwards; nothing here is pooled or retried.

use std::future::Future;
use std::sync::Arc;

use tapo_bridge_domain::credentials::Credentials;
use tapo_bridge_domain::device::DeviceEntry;
use tapo_bridge_domain::error::SessionError;

/// An established session able to switch a device on or off.
pub trait DeviceSession: Send + Sync {
    /// Switch the device on.
    fn turn_on(&self) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Switch the device off.
    fn turn_off(&self) -> impl Future<Output = Result<(), SessionError>> + Send;
}

/// Opens sessions to devices.
pub trait DeviceConnector {
    type Session: DeviceSession;

    /// Build a session bound to `device.address` for `device.family`, then
    /// perform handshake and login with `credentials`.
    ///
    /// Both steps must succeed for a session to be returned.
    fn connect(
        &self,
        device: &DeviceEntry,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Self::Session, SessionError>> + Send;
}

impl<T: DeviceConnector + Send + Sync> DeviceConnector for Arc<T> {
    type Session = T::Session;

    fn connect(
        &self,
        device: &DeviceEntry,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Self::Session, SessionError>> + Send {
        (**self).connect(device, credentials)
    }
}
