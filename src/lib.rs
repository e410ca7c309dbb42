//! MathWriter - document and expression model for math-aware notes
//!
//! This library provides the core of a notes editor that mixes plain text
//! with mathematical notation: an expression tree compiled to LaTeX, slot
//! templates for common structures, an inline symbol table, and a
//! round-tripping parser for bracket-matrix shorthand in plain text.
//!
//! # Features
//!
//! - **Expression trees**: [`MathAst`] with a deterministic LaTeX compiler
//! - **Templates**: summation, integral, limit, fraction and more, each with
//!   named slots that show a placeholder while empty
//! - **Bracket matrices**: `[ [ a b ] [ c d ] ]` in text parses to a matrix
//!   element and serializes back unchanged
//! - **Sanitizer**: strips editor scaffolding from markup before rendering
//! - **Notes**: serde-backed note and block model
//!
//! None of the compile, parse or serialize paths fail: malformed input
//! degrades to text, unknown ids fall back to safe values.
//!
//! # Example - Compiling an expression
//!
//! ```
//! use mathwriter::formula::{MathAst, to_markup};
//!
//! let identity = MathAst::matrix(vec![
//!     vec!["1".into(), "0".into()],
//!     vec!["0".into(), "1".into()],
//! ]);
//! assert_eq!(
//!     to_markup(&identity),
//!     "\\begin{bmatrix} 1 & 0 \\\\ 0 & 1 \\end{bmatrix}"
//! );
//! ```
//!
//! # Example - Filling a template
//!
//! ```
//! use mathwriter::formula::{SlotValues, compile_template};
//!
//! let mut slots = SlotValues::new();
//! slots.insert("numerator".into(), "a".into());
//! assert_eq!(compile_template("fraction", &slots), "\\dfrac{a}{\\square}");
//! ```
//!
//! # Example - Bracket matrices in text
//!
//! ```
//! use mathwriter::document::{Element, parse, serialize};
//!
//! let elements = parse("x = [ [ 1 2 ] ]");
//! assert_eq!(elements[0], Element::text("x = "));
//! assert_eq!(serialize(&elements), "x = [ [ 1 2 ] ]");
//! ```

/// Common types and utilities
///
/// Error type and id generation shared by the other modules.
pub mod common;

/// Math expressions
///
/// Expression tree, builder state, LaTeX compilation, templates, inline
/// symbols, sanitizer and render options.
pub mod formula;

/// Note content
///
/// Line elements with the bracket-matrix parser and serializer, notes and
/// content blocks, and the command palette catalog.
pub mod document;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use document::{ContentBlock, Element, MathBlock, Note, parse, serialize};
pub use formula::{MathAst, MathBuilder, MathRenderer, RenderOptions, compile_template, sanitize, to_markup};
