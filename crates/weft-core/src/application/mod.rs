//! Application layer for the composition engine.
//!
//! This layer contains:
//! - **Composer**: the session engine orchestrating segment appends
//! - **Ports**: the sink interface the engine writes through
//!
//! The formatting model itself (capabilities, operands, specs, styles)
//! lives in `crate::domain`.

pub mod composer;
pub mod ports;

// Re-export the session API
pub use composer::{Composer, ComposeExt, compose, compose_with};

// Re-export port traits (for sink implementation)
pub use ports::TextSink;
