//! Driven ports — implemented by the caller's buffer type.
//!
//! The composer writes through [`TextSink`] and nothing else: it never
//! reads back, rewrites, or truncates what a session has appended. `String`
//! is the canonical sink; any growable text buffer can participate by
//! implementing the trait.

/// Port for the text buffer a composition session appends into.
///
/// Lengths are measured in characters (Unicode scalar values), the same
/// unit alignment widths use — not bytes.
pub trait TextSink {
    /// Append a text fragment.
    fn append_str(&mut self, text: &str);

    /// Append a single character.
    fn append_char(&mut self, ch: char);

    /// Current length in characters.
    fn len_chars(&self) -> usize;

    /// Append `count` copies of `ch`.
    fn append_repeat(&mut self, ch: char, count: usize) {
        for _ in 0..count {
            self.append_char(ch);
        }
    }
}

impl TextSink for String {
    fn append_str(&mut self, text: &str) {
        self.push_str(text);
    }

    fn append_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn len_chars(&self) -> usize {
        self.chars().count()
    }

    fn append_repeat(&mut self, ch: char, count: usize) {
        self.extend(std::iter::repeat(ch).take(count));
    }
}
