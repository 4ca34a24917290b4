//! Coordination helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules connect platform collaborators to the plain state models so
//! components stay thin and the coordination logic stays testable without a
//! browser.

pub mod session_watcher;
pub mod sign_in;
pub mod upload;
