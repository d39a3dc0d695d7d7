//! Shared primitives for the posture workspace.
//!
//! Landmark geometry lives in [`Vec2`]; process-wide diagnostics go through the
//! `log` facade with the loggers in [`logging`].

pub mod logging;
pub mod vec2;

pub use logging::{FileLogger, LogConfig, StdoutLogger, init_logger};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use posture_base::log::*
pub use log;
