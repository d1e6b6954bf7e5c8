//! # tapo-bridge-domain
//!
//! Pure domain model for the tapo-bridge HTTP → device control bridge.
//!
//! ## Responsibilities
//! - Define **devices** (name, local address, Tapo model) and the static
//!   **registry** that maps names to them
//! - Define **actions** (`on` / `off`) and their case-insensitive parsing
//! - Define **control requests** (raw payload, validated request, outcome)
//! - Define **credentials** for the vendor account
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod action;
pub mod control;
pub mod credentials;
pub mod device;
pub mod registry;
