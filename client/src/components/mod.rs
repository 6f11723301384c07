//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two portal views. Each owns its local state signal and receives the
//! API configuration from the root as a prop.

pub mod auth_panel;
pub mod subscription_panel;
