//! Platform collaborator modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `platform` defines the capability traits the controllers depend on,
//! `types` the data crossing them, `error` their failure taxonomy, and
//! `firebase` the browser implementation.

pub mod error;
#[cfg(feature = "csr")]
pub mod firebase;
pub mod platform;
pub mod types;
