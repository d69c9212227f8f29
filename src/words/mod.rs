//! Static vocabulary and color palette used by the word spawner.
//!
//! The word list is fixed at compile time. A word listed twice is twice as
//! likely to be drawn.

mod data;

pub use data::*;
