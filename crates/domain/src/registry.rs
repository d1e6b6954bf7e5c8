//! Device registry — the static name → (address, family) table.

use std::collections::BTreeMap;

use crate::device::DeviceEntry;
use crate::error::ValidationError;

/// Immutable lookup table of known devices, keyed by logical name.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    entries: BTreeMap<String, DeviceEntry>,
}

impl DeviceRegistry {
    /// Build a registry, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateDevice`] when two entries share a
    /// name, or any validation error of an individual entry.
    pub fn new(entries: impl IntoIterator<Item = DeviceEntry>) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            entry.validate()?;
            if map.contains_key(&entry.name) {
                return Err(ValidationError::DuplicateDevice(entry.name));
            }
            map.insert(entry.name.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// Build a registry from `(name, address, model)` rows.
    ///
    /// # Errors
    ///
    /// Returns the first row that fails to parse, or a duplicate name.
    pub fn from_rows<'a>(
        rows: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Result<Self, ValidationError> {
        let entries = rows
            .into_iter()
            .map(|(name, address, model)| DeviceEntry::parse(name, address, model))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Look up a device by its logical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeviceEntry> {
        self.entries.get(name)
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
