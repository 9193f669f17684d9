//! Weft Core - Interpolated Text Composition Engine
//!
//! This crate provides the domain and application layers for weft, an
//! engine that incrementally builds a text buffer from alternating literal
//! and dynamically-formatted segments.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Caller                       │
//! │  (opens a session, issues appends)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Composer                     │
//! │  (session engine: dispatch + padding)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Capability Contracts (Traits)       │
//! │  (TextSink, FormatAuthority,            │
//! │   CustomFormatter, Formattable)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     weft-adapters (Infrastructure)      │
//! │  (StyleAuthority, MaskingAuthority,     │
//! │   RecordingAuthority, ...)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use weft_core::prelude::*;
//!
//! let mut out = String::new();
//! let mut session = Composer::open(&mut out);
//! session.append_literal("Result: ");
//! session.append_value(Operand::display(&10)).unwrap();
//! session.append_formatted(Operand::formattable(&255), Some("X4"), 6).unwrap();
//! assert_eq!(out, "Result: 10  00FF");
//! ```
//!
//! Formatted segments resolve through three tiers — the authority's custom
//! formatter, the value's own [`Formattable`](domain::Formattable)
//! implementation, then plain `Display` — and the custom-formatter lookup
//! happens exactly once per session.

// Re-export domain layer (capabilities, operands, specs, styles)
pub mod domain;

// Re-export application layer (the session engine)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Composer, ComposeExt, TextSink, compose, compose_with};
    pub use crate::domain::{
        CustomFormatter, FormatAuthority, FormatSpec, Formattable, NumberFormat, Operand,
    };
    pub use crate::error::{ComposeError, ComposeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
