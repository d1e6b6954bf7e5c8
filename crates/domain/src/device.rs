//! Device — a physical Tapo device reachable on the local network.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ValidationError;

/// Product line of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Plug,
    Bulb,
}

/// Supported Tapo models.
///
/// Each variant maps to exactly one session handler in the device adapter.
/// Adding a model means adding a variant here and a match arm there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    /// Smart plug.
    P100,
    /// Smart plug with energy monitoring.
    P110,
    /// Dimmable white bulb.
    L510,
    /// Multicolour bulb.
    L530,
}

impl DeviceFamily {
    /// Model tag as printed on the device and in the Tapo app.
    #[must_use]
    pub fn model(self) -> &'static str {
        match self {
            Self::P100 => "P100",
            Self::P110 => "P110",
            Self::L510 => "L510",
            Self::L530 => "L530",
        }
    }

    #[must_use]
    pub fn kind(self) -> DeviceKind {
        match self {
            Self::P100 | Self::P110 => DeviceKind::Plug,
            Self::L510 | Self::L530 => DeviceKind::Bulb,
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model())
    }
}

impl FromStr for DeviceFamily {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P100" => Ok(Self::P100),
            "P110" => Ok(Self::P110),
            "L510" => Ok(Self::L510),
            "L530" => Ok(Self::L530),
            _ => Err(ValidationError::UnsupportedFamily(s.to_string())),
        }
    }
}

/// One row of the device registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub name: String,
    pub address: IpAddr,
    pub family: DeviceFamily,
}

impl DeviceEntry {
    /// Create an entry after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        address: IpAddr,
        family: DeviceFamily,
    ) -> Result<Self, ValidationError> {
        let entry = Self {
            name: name.into(),
            address,
            family,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Build an entry from its textual form, e.g. `("lampe_salon", "192.168.1.22", "L530")`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when `address` is not an IP
    /// address, [`ValidationError::UnsupportedFamily`] for an unknown model tag,
    /// or [`ValidationError::EmptyDeviceName`] for a blank name.
    pub fn parse(name: &str, address: &str, model: &str) -> Result<Self, ValidationError> {
        let ip = address
            .parse::<IpAddr>()
            .map_err(|source| ValidationError::InvalidAddress {
                device_name: name.to_string(),
                address: address.to_string(),
                source,
            })?;
        let family = model.parse::<DeviceFamily>()?;
        Self::new(name, ip, family)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyDeviceName);
        }
        Ok(())
    }
}
