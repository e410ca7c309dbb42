// Expression tree definitions

use super::types::{BinaryOp, NodeKind, Orientation, WrapKind};
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

/// A node of a math expression tree.
///
/// Children are owned through `Box`, so a tree is always finite and acyclic.
/// String payloads (cells, bounds, bodies) are opaque markup fragments and are
/// never parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MathAst {
    /// Symbol glyph or inline symbol id (`π`, `alpha`, ...)
    Symbol { value: String },

    /// Numeric literal
    Number { value: String },

    /// Variable or named quantity
    Identifier { name: String },

    /// Row-major grid of cells
    Matrix {
        rows: usize,
        cols: usize,
        cells: Vec<Vec<String>>,
    },

    /// Single row or column of cells
    Vector {
        orientation: Orientation,
        cells: Vec<String>,
    },

    /// Binary operation
    #[serde(rename = "op")]
    Operator {
        op: BinaryOp,
        left: Box<MathAst>,
        right: Box<MathAst>,
    },

    /// Delimited sub-expression
    Wrapper { wrap: WrapKind, inner: Box<MathAst> },

    /// Integral with optional bounds and differential
    Integral {
        body: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        d: Option<String>,
    },

    /// numerator / denominator
    Fraction {
        numerator: String,
        denominator: String,
    },

    /// base ^ exponent
    Exponent { base: String, exponent: String },

    /// base _ subscript
    Subscript { base: String, subscript: String },
}

impl MathAst {
    /// Create a symbol leaf
    pub fn symbol(value: impl Into<String>) -> Self {
        MathAst::Symbol { value: value.into() }
    }

    /// Create a number leaf
    pub fn number(value: impl Into<String>) -> Self {
        MathAst::Number { value: value.into() }
    }

    /// Create an identifier leaf
    pub fn identifier(name: impl Into<String>) -> Self {
        MathAst::Identifier { name: name.into() }
    }

    /// Create a matrix node, taking its dimensions from the grid.
    ///
    /// `cols` is the length of the first row.
    pub fn matrix(cells: Vec<Vec<String>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        MathAst::Matrix { rows, cols, cells }
    }

    /// Create a column vector
    pub fn column_vector(cells: Vec<String>) -> Self {
        MathAst::Vector {
            orientation: Orientation::Column,
            cells,
        }
    }

    /// Create a row vector
    pub fn row_vector(cells: Vec<String>) -> Self {
        MathAst::Vector {
            orientation: Orientation::Row,
            cells,
        }
    }

    /// Create a binary operation
    pub fn op(op: BinaryOp, left: MathAst, right: MathAst) -> Self {
        MathAst::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Wrap a sub-tree in delimiters
    pub fn wrap(wrap: WrapKind, inner: MathAst) -> Self {
        MathAst::Wrapper {
            wrap,
            inner: Box::new(inner),
        }
    }

    /// Create an integral without bounds or differential
    pub fn integral(body: impl Into<String>) -> Self {
        MathAst::Integral {
            body: body.into(),
            from: None,
            to: None,
            d: None,
        }
    }

    /// Create a fraction
    pub fn fraction(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        MathAst::Fraction {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Create an exponent
    pub fn exponent(base: impl Into<String>, exponent: impl Into<String>) -> Self {
        MathAst::Exponent {
            base: base.into(),
            exponent: exponent.into(),
        }
    }

    /// Create a subscript
    pub fn subscript(base: impl Into<String>, subscript: impl Into<String>) -> Self {
        MathAst::Subscript {
            base: base.into(),
            subscript: subscript.into(),
        }
    }

    /// Discriminant of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            MathAst::Symbol { .. } => NodeKind::Symbol,
            MathAst::Number { .. } => NodeKind::Number,
            MathAst::Identifier { .. } => NodeKind::Identifier,
            MathAst::Matrix { .. } => NodeKind::Matrix,
            MathAst::Vector { .. } => NodeKind::Vector,
            MathAst::Operator { .. } => NodeKind::Operator,
            MathAst::Wrapper { .. } => NodeKind::Wrapper,
            MathAst::Integral { .. } => NodeKind::Integral,
            MathAst::Fraction { .. } => NodeKind::Fraction,
            MathAst::Exponent { .. } => NodeKind::Exponent,
            MathAst::Subscript { .. } => NodeKind::Subscript,
        }
    }

    /// Number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        match self {
            MathAst::Operator { left, right, .. } => 1 + left.node_count() + right.node_count(),
            MathAst::Wrapper { inner, .. } => 1 + inner.node_count(),
            _ => 1,
        }
    }

    /// Strictly check the matrix invariants of this tree.
    ///
    /// The compiler accepts malformed trees; call this before building a node
    /// from untrusted builder state when a degenerate result is not acceptable.
    pub fn validate(&self) -> Result<()> {
        match self {
            MathAst::Matrix { rows, cols, cells } => check_grid(*rows, *cols, cells),
            MathAst::Vector { cells, .. } if cells.is_empty() => Err(Error::EmptyMatrix),
            MathAst::Operator { left, right, .. } => {
                left.validate()?;
                right.validate()
            },
            MathAst::Wrapper { inner, .. } => inner.validate(),
            _ => Ok(()),
        }
    }
}

/// Check that `cells` is a non-empty `rows` x `cols` grid.
pub(crate) fn check_grid(rows: usize, cols: usize, cells: &[Vec<String>]) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyMatrix);
    }
    if cells.len() != rows {
        return Err(Error::ShapeMismatch {
            expected_rows: rows,
            expected_cols: cols,
            detail: format!("found {} rows", cells.len()),
        });
    }
    if let Some((i, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(Error::ShapeMismatch {
            expected_rows: rows,
            expected_cols: cols,
            detail: format!("row {} has {} cells", i, row.len()),
        });
    }
    Ok(())
}
