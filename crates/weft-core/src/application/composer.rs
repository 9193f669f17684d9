//! The composition session engine.
//!
//! A [`Composer`] borrows a caller-supplied text sink for the duration of
//! one composition and appends literal and formatted segments into it in
//! call order. Formatted segments resolve through three tiers (custom
//! formatter → formattable capability → `Display`), then take optional
//! field-width alignment padding.
//!
//! The session owns nothing: the sink outlives it by construction, there is
//! no finalize step, and text appended before a failing segment stays in
//! the buffer.

use tracing::trace;

use crate::application::ports::TextSink;
use crate::domain::capabilities::{CustomFormatter, FormatAuthority};
use crate::domain::operand::Operand;
use crate::error::ComposeResult;

/// A composition session bound to one sink.
///
/// Created per composition and discarded when done. Not thread-safe; the
/// exclusive sink borrow already rules out concurrent appenders.
pub struct Composer<'a, S: TextSink + ?Sized> {
    sink: &'a mut S,
    authority: Option<&'a dyn FormatAuthority>,
    /// Resolved once at open; never re-probed during the session.
    custom: Option<&'a dyn CustomFormatter>,
}

impl<'a, S: TextSink + ?Sized> Composer<'a, S> {
    /// Open a session without a formatting authority.
    pub fn open(sink: &'a mut S) -> Self {
        trace!(has_custom_formatter = false, "composition session opened");
        Self {
            sink,
            authority: None,
            custom: None,
        }
    }

    /// Open a session with a formatting authority.
    ///
    /// The authority's custom-formatter capability is looked up here, once;
    /// whatever it answers holds for the whole session even if the
    /// authority's state later changes.
    pub fn open_with(sink: &'a mut S, authority: &'a dyn FormatAuthority) -> Self {
        let custom = authority.custom_formatter();
        trace!(
            has_custom_formatter = custom.is_some(),
            "composition session opened"
        );
        Self {
            sink,
            authority: Some(authority),
            custom,
        }
    }

    /// Whether this session routes formatted segments through a custom
    /// formatter. Fixed for the session lifetime.
    pub fn has_custom_formatter(&self) -> bool {
        self.custom.is_some()
    }

    /// Append a literal segment verbatim. No formatting, no padding.
    pub fn append_literal(&mut self, text: &str) {
        self.sink.append_str(text);
    }

    /// Append pre-rendered text.
    ///
    /// Raw text never routes through the custom-formatter or formattable
    /// paths — it is already text, so it pays no dispatch cost and no
    /// formatter gets a chance to reinterpret it.
    pub fn append_text(&mut self, text: &str) {
        self.sink.append_str(text);
    }

    /// Append pre-rendered text with field-width alignment.
    ///
    /// Negative `alignment` left-justifies (pad after), positive
    /// right-justifies (pad before), zero appends as-is.
    pub fn append_text_aligned(&mut self, text: &str, alignment: i32) {
        if alignment == 0 {
            self.sink.append_str(text);
            return;
        }
        self.append_padded(text, alignment);
    }

    /// Append a formatted value with no spec and no alignment.
    pub fn append_value(&mut self, value: Operand<'_>) -> ComposeResult<()> {
        self.append_formatted(value, None, 0)
    }

    /// Append a formatted value.
    ///
    /// Resolution order for the textual representation:
    /// 1. the session's custom formatter, when present — it also decides
    ///    how absent values render;
    /// 2. the empty string, when `value` is absent;
    /// 3. the value's own formattable capability, invoked with `spec` and
    ///    the session authority;
    /// 4. the value's `Display` representation, `spec` ignored.
    ///
    /// `alignment` is a signed field width in characters: `0` appends the
    /// representation directly, negative left-justifies, positive
    /// right-justifies. Representations wider than the field are appended
    /// unchanged — never truncated.
    ///
    /// Any error a capability raises propagates unmodified; segments
    /// already appended stay in the sink.
    pub fn append_formatted(
        &mut self,
        value: Operand<'_>,
        spec: Option<&str>,
        alignment: i32,
    ) -> ComposeResult<()> {
        if alignment == 0 {
            // Fast path: straight to the sink, no width or padding math.
            return self.append_unaligned(value, spec);
        }
        let rendered = self.render(value, spec)?;
        self.append_padded(&rendered, alignment);
        Ok(())
    }

    fn append_unaligned(&mut self, value: Operand<'_>, spec: Option<&str>) -> ComposeResult<()> {
        if let (Some(formatter), Some(authority)) = (self.custom, self.authority) {
            let rendered = formatter.format(spec, value, authority)?;
            self.sink.append_str(&rendered);
            return Ok(());
        }
        match value {
            Operand::Absent => {}
            Operand::Formattable(v) => {
                let rendered = v.format(spec, self.authority)?;
                self.sink.append_str(&rendered);
            }
            Operand::Display(v) => {
                self.sink.append_str(&v.to_string());
            }
        }
        Ok(())
    }

    fn render(&self, value: Operand<'_>, spec: Option<&str>) -> ComposeResult<String> {
        if let (Some(formatter), Some(authority)) = (self.custom, self.authority) {
            return formatter.format(spec, value, authority);
        }
        Ok(match value {
            Operand::Absent => String::new(),
            Operand::Formattable(v) => v.format(spec, self.authority)?,
            Operand::Display(v) => v.to_string(),
        })
    }

    fn append_padded(&mut self, rendered: &str, alignment: i32) {
        let width = alignment.unsigned_abs() as usize;
        let pad = width.saturating_sub(rendered.chars().count());
        if pad == 0 {
            self.sink.append_str(rendered);
        } else if alignment < 0 {
            self.sink.append_str(rendered);
            self.sink.append_repeat(' ', pad);
        } else {
            self.sink.append_repeat(' ', pad);
            self.sink.append_str(rendered);
        }
    }
}

/// Build a `String` through a closure-scoped composition session.
///
/// # Example
///
/// ```
/// use weft_core::application::compose;
/// use weft_core::domain::Operand;
///
/// let greeting = compose(|c| {
///     c.append_literal("Hello, ");
///     c.append_value(Operand::display(&"world"))?;
///     c.append_literal("!");
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(greeting, "Hello, world!");
/// ```
pub fn compose<F>(f: F) -> ComposeResult<String>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let mut out = String::new();
    let mut session = Composer::open(&mut out);
    f(&mut session)?;
    Ok(out)
}

/// Like [`compose`], with a formatting authority.
pub fn compose_with<F>(authority: &dyn FormatAuthority, f: F) -> ComposeResult<String>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let mut out = String::new();
    let mut session = Composer::open_with(&mut out, authority);
    f(&mut session)?;
    Ok(out)
}

/// Session-scoped composition on any sink, for call chaining.
pub trait ComposeExt: TextSink + Sized {
    /// Run a composition session against this sink and hand it back.
    fn compose<F>(&mut self, f: F) -> ComposeResult<&mut Self>
    where
        F: FnOnce(&mut Composer<'_, Self>) -> ComposeResult<()>,
    {
        let mut session = Composer::open(&mut *self);
        f(&mut session)?;
        Ok(self)
    }

    /// Run a composition session with an authority against this sink.
    fn compose_with<F>(&mut self, authority: &dyn FormatAuthority, f: F) -> ComposeResult<&mut Self>
    where
        F: FnOnce(&mut Composer<'_, Self>) -> ComposeResult<()>,
    {
        let mut session = Composer::open_with(&mut *self, authority);
        f(&mut session)?;
        Ok(self)
    }
}

impl<S: TextSink> ComposeExt for S {}
