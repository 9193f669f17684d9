//! The compact format-spec mini-language.
//!
//! A spec is a single kind letter followed by an optional unsigned count.
//! The count is a minimum digit count (zero-padded) for integer kinds and
//! a fractional precision for float kinds. The composer never interprets
//! specs — it passes them through verbatim; this parser belongs to the
//! built-in formattable types, and adapters are free to define their own
//! spec vocabulary instead.
//!
//! | Spec    | Meaning                                            |
//! |---------|----------------------------------------------------|
//! | `d`     | decimal integer, optional zero-padded digit count  |
//! | `x`/`X` | lower/upper hexadecimal                            |
//! | `b`     | binary                                             |
//! | `o`     | octal                                              |
//! | `n`/`N` | decimal with digit grouping from the authority     |
//! | `f`/`F` | fixed-point float, optional precision (default 2)  |
//! | `e`/`E` | scientific float, optional precision               |

use crate::error::{ComposeError, ComposeResult};

/// A parsed format spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    Decimal { min_digits: Option<usize> },
    Hex { upper: bool, min_digits: Option<usize> },
    Binary { min_digits: Option<usize> },
    Octal { min_digits: Option<usize> },
    Grouped,
    Fixed { precision: Option<usize> },
    Scientific { upper: bool, precision: Option<usize> },
}

impl FormatSpec {
    /// Parse a spec string. Empty or malformed input is an error; callers
    /// that treat an empty spec as "no spec" must filter it beforehand.
    pub fn parse(spec: &str) -> ComposeResult<Self> {
        let mut chars = spec.chars();
        let Some(kind) = chars.next() else {
            return Err(invalid(spec, "empty spec"));
        };
        let rest = chars.as_str();
        let count = if rest.is_empty() {
            None
        } else {
            Some(
                rest.parse::<usize>()
                    .map_err(|_| invalid(spec, "count must be an unsigned integer"))?,
            )
        };

        match kind {
            'd' => Ok(Self::Decimal { min_digits: count }),
            'x' => Ok(Self::Hex {
                upper: false,
                min_digits: count,
            }),
            'X' => Ok(Self::Hex {
                upper: true,
                min_digits: count,
            }),
            'b' => Ok(Self::Binary { min_digits: count }),
            'o' => Ok(Self::Octal { min_digits: count }),
            'n' | 'N' => {
                if count.is_some() {
                    Err(invalid(spec, "grouping takes no digit count"))
                } else {
                    Ok(Self::Grouped)
                }
            }
            'f' | 'F' => Ok(Self::Fixed { precision: count }),
            'e' => Ok(Self::Scientific {
                upper: false,
                precision: count,
            }),
            'E' => Ok(Self::Scientific {
                upper: true,
                precision: count,
            }),
            other => Err(invalid(spec, &format!("unknown specifier '{other}'"))),
        }
    }
}

fn invalid(spec: &str, reason: &str) -> ComposeError {
    ComposeError::InvalidSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_kinds() {
        assert_eq!(
            FormatSpec::parse("d").unwrap(),
            FormatSpec::Decimal { min_digits: None }
        );
        assert_eq!(FormatSpec::parse("n").unwrap(), FormatSpec::Grouped);
        assert_eq!(FormatSpec::parse("N").unwrap(), FormatSpec::Grouped);
        assert_eq!(
            FormatSpec::parse("f").unwrap(),
            FormatSpec::Fixed { precision: None }
        );
    }

    #[test]
    fn parses_counts() {
        assert_eq!(
            FormatSpec::parse("X4").unwrap(),
            FormatSpec::Hex {
                upper: true,
                min_digits: Some(4)
            }
        );
        assert_eq!(
            FormatSpec::parse("f3").unwrap(),
            FormatSpec::Fixed { precision: Some(3) }
        );
        assert_eq!(
            FormatSpec::parse("e0").unwrap(),
            FormatSpec::Scientific {
                upper: false,
                precision: Some(0)
            }
        );
    }

    #[test]
    fn rejects_empty() {
        assert!(FormatSpec::parse("").is_err());
    }

    #[test]
    fn rejects_unknown_specifier() {
        let err = FormatSpec::parse("q").unwrap_err();
        assert!(err.to_string().contains('q'));
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(FormatSpec::parse("x4x").is_err());
        assert!(FormatSpec::parse("d-1").is_err());
    }

    #[test]
    fn rejects_count_on_grouping() {
        assert!(FormatSpec::parse("n3").is_err());
    }
}
