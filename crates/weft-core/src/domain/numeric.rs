//! Built-in `Formattable` implementations for the primitive numeric types.
//!
//! These interpret the [`FormatSpec`] mini-language and consult the session
//! authority's [`NumberFormat`] for separators and the minus sign. Without
//! a spec they defer to `Display`, restyled through the authority.

use crate::domain::capabilities::{FormatAuthority, Formattable};
use crate::domain::format_spec::FormatSpec;
use crate::domain::number_format::NumberFormat;
use crate::error::{ComposeError, ComposeResult};

fn style<'a>(authority: Option<&'a dyn FormatAuthority>) -> &'a NumberFormat {
    match authority {
        Some(a) => a.number_format(),
        None => NumberFormat::invariant(),
    }
}

/// Zero-pad the digit part (sign excluded) up to `min_digits`.
fn pad_digits(s: String, min_digits: Option<usize>) -> String {
    let Some(min) = min_digits else {
        return s;
    };
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let len = digits.chars().count();
    if len >= min {
        return s;
    }
    let mut out = String::with_capacity(sign.len() + min);
    out.push_str(sign);
    for _ in len..min {
        out.push('0');
    }
    out.push_str(digits);
    out
}

/// Insert the style's group separator every three digits, right to left.
fn group_digits(s: &str, nf: &NumberFormat) -> String {
    let Some(sep) = nf.group_separator else {
        return s.to_string();
    };
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let len = digits.len();
    let mut out = String::with_capacity(s.len() + len / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Swap the ASCII minus for the style's minus sign.
fn apply_minus(s: String, nf: &NumberFormat) -> String {
    if nf.minus_sign == '-' {
        return s;
    }
    match s.strip_prefix('-') {
        Some(rest) => {
            let mut out = String::with_capacity(s.len() + nf.minus_sign.len_utf8());
            out.push(nf.minus_sign);
            out.push_str(rest);
            out
        }
        None => s,
    }
}

/// Swap the decimal point and minus for the style's characters.
fn apply_float_style(s: String, nf: &NumberFormat) -> String {
    if nf.decimal_separator == '.' && nf.minus_sign == '-' {
        return s;
    }
    s.chars()
        .map(|c| match c {
            '.' => nf.decimal_separator,
            '-' => nf.minus_sign,
            c => c,
        })
        .collect()
}

macro_rules! formattable_int {
    ($($ty:ty)+) => {$(
        impl Formattable for $ty {
            fn format(
                &self,
                spec: Option<&str>,
                authority: Option<&dyn FormatAuthority>,
            ) -> ComposeResult<String> {
                let nf = style(authority);
                let raw = match spec {
                    None | Some("") => return Ok(apply_minus(self.to_string(), nf)),
                    Some(s) => s,
                };
                let rendered = match FormatSpec::parse(raw)? {
                    FormatSpec::Decimal { min_digits } => {
                        pad_digits(self.to_string(), min_digits)
                    }
                    FormatSpec::Hex { upper: false, min_digits } => {
                        pad_digits(format!("{:x}", self), min_digits)
                    }
                    FormatSpec::Hex { upper: true, min_digits } => {
                        pad_digits(format!("{:X}", self), min_digits)
                    }
                    FormatSpec::Binary { min_digits } => {
                        pad_digits(format!("{:b}", self), min_digits)
                    }
                    FormatSpec::Octal { min_digits } => {
                        pad_digits(format!("{:o}", self), min_digits)
                    }
                    FormatSpec::Grouped => group_digits(&self.to_string(), nf),
                    FormatSpec::Fixed { .. } | FormatSpec::Scientific { .. } => {
                        return Err(ComposeError::InvalidSpec {
                            spec: raw.to_string(),
                            reason: "float specifier applied to an integer".to_string(),
                        });
                    }
                };
                Ok(apply_minus(rendered, nf))
            }
        }
    )+};
}

formattable_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! formattable_float {
    ($($ty:ty)+) => {$(
        impl Formattable for $ty {
            fn format(
                &self,
                spec: Option<&str>,
                authority: Option<&dyn FormatAuthority>,
            ) -> ComposeResult<String> {
                let nf = style(authority);
                let raw = match spec {
                    None | Some("") => return Ok(apply_float_style(self.to_string(), nf)),
                    Some(s) => s,
                };
                let rendered = match FormatSpec::parse(raw)? {
                    FormatSpec::Fixed { precision } => {
                        format!("{:.1$}", self, precision.unwrap_or(2))
                    }
                    FormatSpec::Scientific { upper: false, precision } => match precision {
                        Some(p) => format!("{:.1$e}", self, p),
                        None => format!("{:e}", self),
                    },
                    FormatSpec::Scientific { upper: true, precision } => match precision {
                        Some(p) => format!("{:.1$E}", self, p),
                        None => format!("{:E}", self),
                    },
                    _ => {
                        return Err(ComposeError::InvalidSpec {
                            spec: raw.to_string(),
                            reason: "integer specifier applied to a float".to_string(),
                        });
                    }
                };
                Ok(apply_float_style(rendered, nf))
            }
        }
    )+};
}

formattable_float!(f32 f64);
