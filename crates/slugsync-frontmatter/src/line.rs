//! Lines with their original terminators.

/// The terminator a line carried in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Last line of a document without a trailing newline.
    None,
}

impl LineEnding {
    /// The literal terminator text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }
}

/// A single line of a document, split from its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line text without the terminator.
    pub content: String,
    /// Terminator that followed the text.
    pub ending: LineEnding,
}

impl Line {
    pub fn new(content: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            content: content.into(),
            ending,
        }
    }

    /// Split one raw chunk produced by `str::split_inclusive('\n')`.
    pub(crate) fn from_raw(raw: &str) -> Self {
        if let Some(content) = raw.strip_suffix("\r\n") {
            Self::new(content, LineEnding::CrLf)
        } else if let Some(content) = raw.strip_suffix('\n') {
            Self::new(content, LineEnding::Lf)
        } else {
            Self::new(raw, LineEnding::None)
        }
    }

    /// Append the line, terminator included, to `out`.
    pub(crate) fn write_to(&self, out: &mut String) {
        out.push_str(&self.content);
        out.push_str(self.ending.as_str());
    }
}
