//! Redacting custom formatter.

use tracing::debug;
use weft_core::domain::{CustomFormatter, FormatAuthority, Operand};
use weft_core::error::ComposeResult;

const MASK: &str = "********";
const KEPT_SUFFIX: usize = 4;

/// Authority whose custom formatter redacts sensitive values.
///
/// Because a custom formatter intercepts every formatted segment in the
/// session, specs double as the redaction switch: `mask` renders a
/// fixed-width mask, `last4` keeps the final four characters, and any other
/// spec falls back to the rendering the default tiers would have produced.
#[derive(Debug, Clone, Default)]
pub struct MaskingAuthority {
    formatter: MaskingFormatter,
}

impl MaskingAuthority {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormatAuthority for MaskingAuthority {
    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        Some(&self.formatter)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MaskingFormatter;

impl CustomFormatter for MaskingFormatter {
    fn format(
        &self,
        spec: Option<&str>,
        value: Operand<'_>,
        authority: &dyn FormatAuthority,
    ) -> ComposeResult<String> {
        match spec {
            Some("mask") => {
                debug!("value rendered as fixed mask");
                Ok(MASK.to_string())
            }
            Some("last4") => {
                let rendered = fallback(None, value, authority)?;
                Ok(mask_but_last(&rendered, KEPT_SUFFIX))
            }
            other => fallback(other, value, authority),
        }
    }
}

/// The rendering the composer's default tiers would have produced.
fn fallback(
    spec: Option<&str>,
    value: Operand<'_>,
    authority: &dyn FormatAuthority,
) -> ComposeResult<String> {
    match value {
        Operand::Absent => Ok(String::new()),
        Operand::Formattable(v) => v.format(spec, Some(authority)),
        Operand::Display(v) => Ok(v.to_string()),
    }
}

/// Replace all but the last `keep` characters with `*`. Values no longer
/// than `keep` are masked whole so short secrets never leak.
fn mask_but_last(s: &str, keep: usize) -> String {
    let total = s.chars().count();
    if total <= keep {
        return "*".repeat(total);
    }
    s.chars()
        .enumerate()
        .map(|(i, c)| if i < total - keep { '*' } else { c })
        .collect()
}
