//! The value shapes a caller can hand to a formatted-append operation.

use std::fmt;

use crate::domain::capabilities::Formattable;

/// A single value passed to `append_formatted`, in one of the three shapes
/// the resolution tiers distinguish.
///
/// Pre-rendered text is deliberately *not* one of these shapes: raw text
/// goes through `append_text`, which never touches a formatter.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// Absent value. Renders as the empty string — never a "null" token —
    /// unless a custom formatter decides otherwise.
    Absent,
    /// Value that renders itself given a spec and the session authority.
    Formattable(&'a dyn Formattable),
    /// Plain value rendered through `Display`; any spec is ignored.
    Display(&'a dyn fmt::Display),
}

impl<'a> Operand<'a> {
    /// Wrap a value that implements the formattable capability.
    pub fn formattable<T: Formattable>(value: &'a T) -> Self {
        Self::Formattable(value)
    }

    /// Wrap a plain value; it will fall through to default stringification.
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Self::Display(value)
    }

    /// Map an optional value: `None` becomes [`Operand::Absent`].
    pub fn from_option<T: Formattable>(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Self::Formattable(v),
            None => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Formattable(_) => f.write_str("Formattable(..)"),
            Self::Display(_) => f.write_str("Display(..)"),
        }
    }
}
