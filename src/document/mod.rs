//! Note content model.
//!
//! A line of note text is a sequence of [`Element`]s: plain text runs,
//! embedded matrices and inline symbols. [`parse`] turns bracket-matrix
//! shorthand into elements and [`serialize`] turns them back into text.
//! Notes themselves are ordered lists of [`ContentBlock`]s.
//!
//! # Example
//!
//! ```rust
//! use mathwriter::document::{parse, serialize};
//!
//! let text = "x = [ [ 1 2 ] ]";
//! let elements = parse(text);
//! assert_eq!(elements.len(), 2);
//! assert_eq!(serialize(&elements), text);
//! ```
pub mod block;
pub mod commands;
pub mod element;
mod parser;
mod serializer;

pub use block::{ContentBlock, DEFAULT_NOTE_TITLE, MathBlock, Note, NoteSummary, sort_by_recent};
pub use commands::{Command, CommandAction, CommandCategory, COMMANDS, filter_commands};
pub use element::Element;
pub use parser::parse;
pub use serializer::serialize;
