//! # tapo-bridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small JSON API:
//!   - `GET  /`      — liveness/info message
//!   - `GET  /health` — plain-text probe
//!   - `POST /tapo`  — turn a registered device on or off
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses with the right
//!   status code
//!
//! ## Dependency rule
//! Depends on `tapo-bridge-app` (for port traits and services) and
//! `tapo-bridge-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
