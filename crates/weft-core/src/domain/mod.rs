//! Core domain layer for the composition engine.
//!
//! This module contains the pure formatting model with no I/O concerns:
//! the capability contracts the engine dispatches through, the value shapes
//! a caller can hand to a session, the numeric rendering style, and the
//! format-spec mini-language understood by the built-in formattable types.
//!
//! Everything that touches an actual buffer lives in `crate::application`;
//! everything that *implements* an authority lives in `weft-adapters`.

pub mod capabilities;
pub mod format_spec;
pub mod number_format;
pub mod operand;

// Built-in `Formattable` implementations for the primitive numeric types.
mod numeric;

// Re-exports for convenience
pub use capabilities::{CustomFormatter, FormatAuthority, Formattable};
pub use format_spec::FormatSpec;
pub use number_format::NumberFormat;
pub use operand::Operand;
