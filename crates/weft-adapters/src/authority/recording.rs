//! Recording authority doubles for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use weft_core::domain::{CustomFormatter, FormatAuthority, NumberFormat, Operand};
use weft_core::error::ComposeResult;

/// Wraps another authority and counts custom-formatter capability lookups.
///
/// Lets a test assert the composer's exactly-once probe contract without
/// changing what the wrapped authority answers.
#[derive(Debug, Default)]
pub struct RecordingAuthority<A> {
    inner: A,
    lookups: AtomicUsize,
}

impl<A: FormatAuthority> RecordingAuthority<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    /// How many times `custom_formatter` has been called.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: FormatAuthority> FormatAuthority for RecordingAuthority<A> {
    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.custom_formatter()
    }

    fn number_format(&self) -> &NumberFormat {
        self.inner.number_format()
    }
}

/// Custom formatter rendering a fixed string for every value, counting
/// invocations.
#[derive(Debug)]
pub struct ConstFormatter {
    output: String,
    calls: AtomicUsize,
}

impl ConstFormatter {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many values have been routed through this formatter.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl CustomFormatter for ConstFormatter {
    fn format(
        &self,
        _spec: Option<&str>,
        _value: Operand<'_>,
        _authority: &dyn FormatAuthority,
    ) -> ComposeResult<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.output.clone())
    }
}

/// Authority exposing a [`ConstFormatter`].
#[derive(Debug)]
pub struct ConstAuthority {
    formatter: ConstFormatter,
}

impl ConstAuthority {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            formatter: ConstFormatter::new(output),
        }
    }

    pub fn formatter(&self) -> &ConstFormatter {
        &self.formatter
    }
}

impl FormatAuthority for ConstAuthority {
    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        Some(&self.formatter)
    }
}
