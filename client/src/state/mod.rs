//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each view owns one plain state struct held in an `RwSignal`; transitions
//! are ordinary methods so they can be tested without a browser.

pub mod auth;
pub mod subscription;
