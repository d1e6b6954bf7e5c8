//! Compiled-in device table.
//!
//! Addresses are local (`192.168.x.x`): the bridge must run on the same
//! network as the devices, or reach them through a tunnel/VPN.

use tapo_bridge_domain::error::ValidationError;
use tapo_bridge_domain::registry::DeviceRegistry;

/// `(logical name, IP address, model tag)`.
const DEVICES: &[(&str, &str, &str)] = &[
    ("lampe_salon", "192.168.1.22", "L530"),
    ("lampe_piece1", "192.168.1.23", "L530"),
    ("lampe_piece2", "192.168.1.21", "L530"),
    ("prise_piece_de_vie", "192.168.1.24", "P110"),
];

/// Build the registry from [`DEVICES`].
///
/// # Errors
///
/// Returns a validation error if a row is malformed or a name is repeated.
pub fn registry() -> Result<DeviceRegistry, ValidationError> {
    DeviceRegistry::from_rows(DEVICES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapo_bridge_domain::device::{DeviceFamily, DeviceKind};

    #[test]
    fn should_build_registry_from_compiled_table() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), DEVICES.len());
    }

    #[test]
    fn should_resolve_living_room_lamp() {
        let registry = registry().unwrap();
        let entry = registry.get("lampe_salon").unwrap();
        assert_eq!(entry.address.to_string(), "192.168.1.22");
        assert_eq!(entry.family, DeviceFamily::L530);
    }

    #[test]
    fn should_register_the_plug_as_a_plug() {
        let registry = registry().unwrap();
        let entry = registry.get("prise_piece_de_vie").unwrap();
        assert_eq!(entry.family.kind(), DeviceKind::Plug);
    }
}
