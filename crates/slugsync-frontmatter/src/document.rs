//! Front-matter block detection and single-field synchronization.

use std::sync::LazyLock;

use regex::Regex;

use crate::line::Line;

/// Delimiter line that opens and closes a front-matter block.
pub const MARKER: &str = "---";

const BOM: char = '\u{feff}';

/// `<indent><key>:<optional space><value>`
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([^\s:][^:]*):\s*(.*)$").expect("field line pattern is valid")
});

/// Line indices of the two marker lines of a front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Index of the opening marker (always the first line).
    pub open: usize,
    /// Index of the closing marker.
    pub close: usize,
}

impl Block {
    /// Indices of the lines strictly between the markers.
    pub fn body(&self) -> std::ops::Range<usize> {
        self.open + 1..self.close
    }
}

/// Outcome of [`Document::sync_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// The document has no well-formed front-matter block; nothing was touched.
    NoBlock,
    /// The first matching field already holds the wanted value.
    Unchanged,
    /// The first matching field was rewritten in place.
    Updated {
        /// Index of the rewritten line.
        line: usize,
        /// Unquoted value the field held before.
        previous: String,
    },
    /// No matching field existed; one was inserted before the closing marker.
    Injected {
        /// Index of the inserted line.
        line: usize,
    },
}

impl FieldChange {
    /// Whether the document content changed.
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Updated { .. } | Self::Injected { .. })
    }
}

struct FieldMatch {
    index: usize,
    indent: String,
    value: String,
}

/// A text document held as a list of lines.
///
/// A leading byte-order mark is dropped on parse and never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Split `text` into lines, keeping each line's own terminator.
    pub fn parse(text: &str) -> Self {
        let body = text.strip_prefix(BOM).unwrap_or(text);

        Self {
            lines: body.split_inclusive('\n').map(Line::from_raw).collect(),
        }
    }

    /// Locate the front-matter block.
    ///
    /// The first line must be the marker (surrounding whitespace ignored);
    /// the block ends at the next marker line. Returns `None` otherwise.
    pub fn block(&self) -> Option<Block> {
        let first = self.lines.first()?;
        if first.content.trim() != MARKER {
            return None;
        }

        let close = self
            .lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.content.trim() == MARKER)
            .map(|(index, _)| index)?;

        Some(Block { open: 0, close })
    }

    /// Make the first `key` field inside the block equal `value`.
    ///
    /// Only the first matching line is considered. An existing line keeps its
    /// indentation and terminator; the value is written double-quoted. When no
    /// line matches, `key: "value"` is inserted right before the closing
    /// marker.
    pub fn sync_field(&mut self, key: &str, value: &str) -> FieldChange {
        let Some(block) = self.block() else {
            return FieldChange::NoBlock;
        };

        match self.find_field(&block, key) {
            Some(field) if field.value == value => FieldChange::Unchanged,
            Some(field) => {
                let rewritten = format!("{}{}: \"{}\"", field.indent, key, value);
                self.lines[field.index].content = rewritten;
                FieldChange::Updated {
                    line: field.index,
                    previous: field.value,
                }
            }
            None => {
                // The opening marker always has a terminator since a closing
                // marker follows it.
                let ending = self.lines[block.open].ending;
                self.lines
                    .insert(block.close, Line::new(format!("{}: \"{}\"", key, value), ending));
                FieldChange::Injected { line: block.close }
            }
        }
    }

    /// Serialize the document, without a byte-order mark.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            line.write_to(&mut out);
        }
        out
    }

    fn find_field(&self, block: &Block, key: &str) -> Option<FieldMatch> {
        block.body().find_map(|index| {
            let caps = FIELD_LINE.captures(&self.lines[index].content)?;
            if &caps[2] != key {
                return None;
            }
            Some(FieldMatch {
                index,
                indent: caps[1].to_string(),
                value: unquote(&caps[3]).to_string(),
            })
        })
    }
}

/// Trim and strip one layer of matching `"` or `'` quotes.
fn unquote(raw: &str) -> &str {
    let value = raw.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
