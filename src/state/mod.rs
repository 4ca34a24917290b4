//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `modal`, `upload`) so each component
//! depends on a small focused model. All three are plain data plus transition
//! methods; components hold them in `RwSignal`s provided via context.

pub mod modal;
pub mod session;
pub mod upload;
