//! # tapo-bridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceConnector` — open an authenticated session to a device
//!   - `DeviceSession` — send `on` / `off` over that session
//! - Define the **driving/inbound** use-case:
//!   - `ControlService` — validate a control payload, resolve the device,
//!     dispatch the command
//! - Orchestrate domain objects without knowing *how* devices are reached
//!
//! ## Dependency rule
//! Depends on `tapo-bridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
