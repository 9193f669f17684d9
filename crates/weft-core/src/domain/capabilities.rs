//! Formatting capability contracts.
//!
//! The composer resolves every formatted segment through three tiers, in
//! this order:
//!
//! 1. The session authority's [custom formatter](CustomFormatter), when one
//!    was exposed at session open. It wins over everything else, including
//!    absent-value handling.
//! 2. A value-level [`Formattable`] implementation, invoked with the spec
//!    and the session authority.
//! 3. The value's plain `Display` representation, spec ignored.
//!
//! The composer implements none of these itself; it only dispatches.

use crate::domain::number_format::NumberFormat;
use crate::domain::operand::Operand;
use crate::error::ComposeResult;

/// A formatting authority: the optional object supplying custom or
/// style-specific rendering of values for one composition session.
///
/// Implemented by:
/// - `weft_adapters::authority::StyleAuthority` (numeric style only)
/// - `weft_adapters::authority::MaskingAuthority` (custom formatter)
/// - `weft_adapters::authority::RecordingAuthority` (test instrumentation)
pub trait FormatAuthority {
    /// Custom-formatter capability lookup.
    ///
    /// The composer calls this exactly once, when the session opens, and
    /// caches the result for the session's entire lifetime. An authority
    /// whose answer could change mid-composition will not be re-probed.
    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        None
    }

    /// Numeric rendering style consulted by the built-in formattable types.
    fn number_format(&self) -> &NumberFormat {
        NumberFormat::invariant()
    }
}

/// Authority-provided override that renders any value to text.
///
/// Takes precedence over every other resolution path: when a session holds
/// one, all formatted segments route through it — absent values and values
/// with their own [`Formattable`] implementation included.
pub trait CustomFormatter {
    /// Render `value` under `spec`. The session authority is passed through
    /// unchanged so the formatter can delegate back to it.
    fn format(
        &self,
        spec: Option<&str>,
        value: Operand<'_>,
        authority: &dyn FormatAuthority,
    ) -> ComposeResult<String>;
}

/// Value-level contract for self-rendering given a format spec and an
/// authority.
///
/// Implemented by the primitive numeric types in this crate (interpreting
/// the [`FormatSpec`](crate::domain::FormatSpec) mini-language); any caller
/// type may implement it to participate in the second resolution tier.
pub trait Formattable {
    /// Render this value. `authority` is the session authority, or `None`
    /// when the session was opened without one.
    fn format(
        &self,
        spec: Option<&str>,
        authority: Option<&dyn FormatAuthority>,
    ) -> ComposeResult<String>;
}
