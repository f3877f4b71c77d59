//! # slugsync-frontmatter
//!
//! A small, line-preserving editor for the front-matter block at the top of
//! text documents such as Quarto `index.qmd` files.
//!
//! The block is recognized only when the first line of the document is a
//! `---` marker and a later line is the same marker. Everything between the
//! two markers is treated as a list of `key: value` lines. Editing keeps every
//! untouched line byte-for-byte, including its original line ending.
//!
//! ## Quick Start
//!
//! ```
//! use slugsync_frontmatter::{Document, FieldChange};
//!
//! let mut doc = Document::parse("---\ntitle: \"Hello\"\nimage: old.png\n---\nBody\n");
//! let change = doc.sync_field("image", "og-hello.webp");
//!
//! assert!(matches!(change, FieldChange::Updated { .. }));
//! assert_eq!(
//!     doc.render(),
//!     "---\ntitle: \"Hello\"\nimage: \"og-hello.webp\"\n---\nBody\n"
//! );
//! ```

mod document;
mod line;

pub use document::{Block, Document, FieldChange, MARKER};
pub use line::{Line, LineEnding};
