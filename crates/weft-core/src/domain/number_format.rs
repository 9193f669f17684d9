//! Numeric rendering style.

use serde::{Deserialize, Serialize};

/// The numeric style an authority hands to the built-in formattable types.
///
/// Styles are plain data and travel well in configuration files; every
/// field falls back to the invariant style when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Separator between the integral and fractional part of a float.
    pub decimal_separator: char,
    /// Separator inserted every three digits by the `n` spec; `None`
    /// disables grouping entirely.
    pub group_separator: Option<char>,
    /// Sign prefixed to negative decimal renderings.
    pub minus_sign: char,
}

static INVARIANT: NumberFormat = NumberFormat {
    decimal_separator: '.',
    group_separator: Some(','),
    minus_sign: '-',
};

impl NumberFormat {
    /// Culture-neutral style: `.` decimal point, `,` grouping, `-` minus.
    ///
    /// Used whenever a session has no authority, or the authority does not
    /// override [`number_format`](crate::domain::FormatAuthority::number_format).
    pub const fn invariant() -> &'static NumberFormat {
        &INVARIANT
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        INVARIANT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invariant() {
        assert_eq!(&NumberFormat::default(), NumberFormat::invariant());
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let nf: NumberFormat = serde_json::from_str(r#"{"decimal_separator": ","}"#).unwrap();
        assert_eq!(nf.decimal_separator, ',');
        // Unspecified fields fall back to the invariant style.
        assert_eq!(nf.group_separator, Some(','));
        assert_eq!(nf.minus_sign, '-');
    }

    #[test]
    fn deserializes_disabled_grouping() {
        let nf: NumberFormat = serde_json::from_str(r#"{"group_separator": null}"#).unwrap();
        assert_eq!(nf.group_separator, None);
    }
}
