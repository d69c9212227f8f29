//! Falling word entities.
//!
//! Words are spawned above the play field, fall at a speed fixed at spawn
//! time, and leave the field either by being typed or by escaping past the
//! bottom edge.

pub mod factory;
pub mod types;

pub use factory::*;
pub use types::*;
