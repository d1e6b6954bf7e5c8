//! Common error types used across the workspace.
//!
//! Each layer converts into [`BridgeError`] via `#[from]`. The HTTP adapter is
//! the only place that maps the variants onto status codes.

use crate::action::Action;

/// Boxed error coming from an external library behind a port.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by the control use-case.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The caller sent something we cannot act on.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The deployment is missing something required to talk to devices.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The device session failed.
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Client-caused failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing JSON request body")]
    MissingBody,

    #[error("malformed JSON request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("the 'device_name' and 'action' fields are required")]
    MissingFields,

    #[error("unknown device: {0}")]
    UnknownDevice(String),

    #[error("invalid action '{0}', use 'on' or 'off'")]
    InvalidAction(String),

    #[error("unsupported device type: {0}")]
    UnsupportedFamily(String),

    #[error("invalid address '{address}' for device {device_name}")]
    InvalidAddress {
        device_name: String,
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("device name must not be empty")]
    EmptyDeviceName,

    #[error("duplicate device name: {0}")]
    DuplicateDevice(String),
}

/// Deployment misconfiguration detected at request time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing credentials: TAPO_EMAIL and TAPO_PASSWORD must be set")]
    MissingCredentials,
}

/// Failure raised by the session adapter while talking to a device.
#[derive(Debug, thiserror::Error)]
#[error("failed to control '{device_name}': {source}")]
pub struct DeviceError {
    pub device_name: String,
    #[source]
    pub source: SessionError,
}

/// Typed error returned across the device session port.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Handshake or authentication with the device failed.
    #[error("login failed: {0}")]
    Login(#[source] BoxError),

    /// The session was established but the command was rejected.
    #[error("turning {action} failed: {source}")]
    Command {
        action: Action,
        #[source]
        source: BoxError,
    },
}

impl SessionError {
    /// Wrap any library error as a login failure.
    pub fn login(err: impl Into<BoxError>) -> Self {
        Self::Login(err.into())
    }

    /// Wrap any library error as a command failure for `action`.
    pub fn command(action: Action, err: impl Into<BoxError>) -> Self {
        Self::Command {
            action,
            source: err.into(),
        }
    }
}
