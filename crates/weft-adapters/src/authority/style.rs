//! Numeric-style authority.

use weft_core::domain::{FormatAuthority, NumberFormat};

/// Authority carrying a configurable numeric style and no custom formatter.
///
/// Formatted segments keep resolving through the normal tiers; only the
/// separators and the minus sign the built-in formattable types consult
/// change. Styles deserialize from configuration via [`NumberFormat`].
#[derive(Debug, Clone, Default)]
pub struct StyleAuthority {
    number_format: NumberFormat,
}

impl StyleAuthority {
    /// Create an authority from a complete style.
    pub fn new(number_format: NumberFormat) -> Self {
        Self { number_format }
    }

    pub fn with_decimal_separator(mut self, sep: char) -> Self {
        self.number_format.decimal_separator = sep;
        self
    }

    pub fn with_group_separator(mut self, sep: Option<char>) -> Self {
        self.number_format.group_separator = sep;
        self
    }

    pub fn with_minus_sign(mut self, sign: char) -> Self {
        self.number_format.minus_sign = sign;
        self
    }
}

impl FormatAuthority for StyleAuthority {
    fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }
}

#[cfg(test)]
mod tests {
    use weft_core::prelude::*;

    use super::*;

    #[test]
    fn grouping_follows_the_configured_separator() {
        let authority = StyleAuthority::default()
            .with_group_separator(Some('.'))
            .with_decimal_separator(',');

        let text = compose_with(&authority, |c| {
            c.append_formatted(Operand::formattable(&9_876_543i64), Some("n"), 0)?;
            c.append_literal(" / ");
            c.append_formatted(Operand::formattable(&1.25f64), Some("f2"), 0)
        })
        .unwrap();
        assert_eq!(text, "9.876.543 / 1,25");
    }

    #[test]
    fn default_style_is_invariant() {
        let authority = StyleAuthority::default();
        assert_eq!(authority.number_format(), NumberFormat::invariant());
    }

    #[test]
    fn style_loads_from_config_json() {
        let nf: NumberFormat =
            serde_json::from_str(r#"{"decimal_separator": ",", "group_separator": " "}"#).unwrap();
        let authority = StyleAuthority::new(nf);

        let text = compose_with(&authority, |c| {
            c.append_formatted(Operand::formattable(&1_000_000i64), Some("n"), 0)
        })
        .unwrap();
        assert_eq!(text, "1 000 000");
    }
}
