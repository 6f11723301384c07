//! Networking modules for the subscription API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the four REST calls, `config` carries the injected base URL,
//! and `types` defines the wire schema plus the typed outcomes panels render.

pub mod api;
pub mod config;
pub mod types;
