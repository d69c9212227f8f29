//! Utility modules: build info, frame timing, file logging, config file helpers.

pub mod build_info;
pub mod frame_timer;
pub mod logging;
pub mod persistence;

pub use build_info::*;
