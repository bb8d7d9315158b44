//! Indent-aware line builder for generated scripts.

const INDENT: &str = "    ";

/// Accumulates script lines with block nesting.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    buf: String,
    depth: usize,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current nesting depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    /// Appends lines from an iterator at the current depth.
    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in lines {
            self.line(text);
        }
        self
    }

    /// Writes `open`, the nested `body`, then `close`.
    pub fn block(
        &mut self,
        open: impl AsRef<str>,
        close: &str,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(open);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(close)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
