// Supporting types for the expression AST

use crate::common::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Binary operators accepted by [`MathAst::Operator`](super::MathAst::Operator).
///
/// No precedence is attached: the tree shape decides grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "dot")]
    Dot,
    #[serde(rename = "times")]
    Times,
}

/// Parses the builder-facing spelling (`+`, `-`, `*`, `/`, `dot`, `times`).
impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "dot" => Ok(Self::Dot),
            "times" => Ok(Self::Times),
            _ => Err(Error::Other(format!("Unknown binary operator: {s:?}"))),
        }
    }
}

impl BinaryOp {
    /// Builder-facing spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Dot => "dot",
            Self::Times => "times",
        }
    }
}

/// Delimiters a [`MathAst::Wrapper`](super::MathAst::Wrapper) can put around its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapKind {
    /// Scaled parentheses
    Paren,
    /// Double-bar norm
    Norm,
    /// Square root (no index)
    Sqrt,
}

/// Vector layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// One cell per row
    #[default]
    #[serde(rename = "col")]
    Column,
    /// All cells in a single row
    #[serde(rename = "row")]
    Row,
}

impl Orientation {
    /// The other orientation.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Column => Self::Row,
            Self::Row => Self::Column,
        }
    }
}

/// Discriminant of a [`MathAst`](super::MathAst) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Symbol,
    Number,
    Identifier,
    Matrix,
    Vector,
    Operator,
    Wrapper,
    Integral,
    Fraction,
    Exponent,
    Subscript,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Symbol,
        NodeKind::Number,
        NodeKind::Identifier,
        NodeKind::Matrix,
        NodeKind::Vector,
        NodeKind::Operator,
        NodeKind::Wrapper,
        NodeKind::Integral,
        NodeKind::Fraction,
        NodeKind::Exponent,
        NodeKind::Subscript,
    ];

    /// Serialized tag of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Symbol => "symbol",
            NodeKind::Number => "number",
            NodeKind::Identifier => "identifier",
            NodeKind::Matrix => "matrix",
            NodeKind::Vector => "vector",
            NodeKind::Operator => "op",
            NodeKind::Wrapper => "wrapper",
            NodeKind::Integral => "integral",
            NodeKind::Fraction => "fraction",
            NodeKind::Exponent => "exponent",
            NodeKind::Subscript => "subscript",
        }
    }
}
