//! Control request and outcome — one per HTTP call, never persisted.

use std::net::IpAddr;

use serde::Deserialize;

use crate::action::Action;
use crate::device::DeviceEntry;
use crate::error::ValidationError;

/// Raw request body as sent by the caller.
///
/// Both fields are optional here so that a missing field is reported as a
/// validation error rather than a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControlPayload {
    pub device_name: Option<String>,
    pub action: Option<String>,
}

impl ControlPayload {
    /// Parse a JSON body.
    ///
    /// An empty body, `null` and `{}` all count as a missing body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBody`],
    /// [`ValidationError::NotAnObject`] for arrays and scalars, or
    /// [`ValidationError::MalformedBody`].
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::MissingBody);
        }
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(ValidationError::MalformedBody)?;
        let map = match value {
            serde_json::Value::Null => return Err(ValidationError::MissingBody),
            serde_json::Value::Object(map) if map.is_empty() => {
                return Err(ValidationError::MissingBody);
            }
            serde_json::Value::Object(map) => map,
            _ => return Err(ValidationError::NotAnObject),
        };
        serde_json::from_value(serde_json::Value::Object(map))
            .map_err(ValidationError::MalformedBody)
    }

    /// Return `(device_name, action)` when both are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] otherwise.
    pub fn require_fields(self) -> Result<(String, String), ValidationError> {
        match (self.device_name, self.action) {
            (Some(name), Some(action)) if !name.is_empty() && !action.is_empty() => {
                Ok((name, action))
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// A validated control request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRequest {
    pub device_name: String,
    pub action: Action,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlOutcome {
    pub device_name: String,
    pub address: IpAddr,
    pub action: Action,
}

impl ControlOutcome {
    #[must_use]
    pub fn new(entry: &DeviceEntry, action: Action) -> Self {
        Self {
            device_name: entry.name.clone(),
            address: entry.address,
            action,
        }
    }

    /// Human-readable confirmation returned to the caller.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{} ({}) set to {} successfully.",
            self.device_name, self.address, self.action
        )
    }
}
