// Typed content elements of one line of a note

use crate::common::Result;
use crate::formula::ast::check_grid;
use serde::{Deserialize, Serialize};

/// A unit of parsed line content.
///
/// Serialized with a `type` tag: `{"type":"text","value":...}`,
/// `{"type":"matrix","rows":..,"cols":..,"data":[[..]]}`,
/// `{"type":"symbol","value":..,"display":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Run of plain text, kept verbatim
    Text { value: String },

    /// Embedded matrix, row-major
    Matrix {
        rows: usize,
        cols: usize,
        data: Vec<Vec<String>>,
    },

    /// Inline symbol id with an optional display glyph
    Symbol {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display: Option<String>,
    },
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Element::Text {
            value: value.into(),
        }
    }

    /// Matrix element with dimensions taken from the grid
    pub fn matrix(data: Vec<Vec<String>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        Element::Matrix { rows, cols, data }
    }

    /// `rows` x `cols` matrix of empty cells
    pub fn empty_matrix(rows: usize, cols: usize) -> Self {
        Element::Matrix {
            rows,
            cols,
            data: vec![vec![String::new(); cols]; rows],
        }
    }

    pub fn symbol(value: impl Into<String>, display: Option<String>) -> Self {
        Element::Symbol {
            value: value.into(),
            display,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text { .. })
    }

    /// Check that a matrix element is non-empty and rectangular.
    ///
    /// Text and symbol elements are always valid.
    pub fn validate(&self) -> Result<()> {
        match self {
            Element::Matrix { rows, cols, data } => check_grid(*rows, *cols, data),
            _ => Ok(()),
        }
    }
}
