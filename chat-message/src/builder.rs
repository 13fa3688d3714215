//! Chat message builder
//!
//! Provides a fluent API for building plain-text chat messages.

/// Plain-text message builder
///
/// Lines are joined with `\n`. Chat apps render the text as-is, so layout
/// is limited to blank lines, `label: value` fields and bullets.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push('\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Layout Helpers ===

    /// `label: value` on one line
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.text(label);
        self.text(": ");
        self.line(value)
    }

    /// `• item` on one line
    pub fn bullet(&mut self, item: &str) -> &mut Self {
        self.text("• ");
        self.line(item)
    }

    /// Section heading followed by its lines, then a blank line
    pub fn section<I, S>(&mut self, heading: &str, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(heading);
        for l in lines {
            self.line(l.as_ref());
        }
        self.newline()
    }

    // === Build ===

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish the message
    ///
    /// A single trailing newline is dropped so the message does not end in
    /// an empty chat line.
    pub fn build(self) -> String {
        let mut buf = self.buf;
        if buf.ends_with('\n') {
            buf.pop();
        }
        buf
    }
}
