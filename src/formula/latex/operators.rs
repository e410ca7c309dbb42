// Operator and delimiter tokens for LaTeX output

use crate::formula::ast::{BinaryOp, WrapKind};

/// Convert a binary operator to its LaTeX token
#[inline]
pub fn binary_op_to_latex(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Plus => "+",
        BinaryOp::Minus => "-",
        BinaryOp::Multiply => "\\times",
        BinaryOp::Divide => "\\div",
        BinaryOp::Dot => "\\cdot",
        BinaryOp::Times => "\\times",
    }
}

/// Opening and closing delimiters for a wrapper
#[inline]
pub fn wrap_to_latex(wrap: WrapKind) -> (&'static str, &'static str) {
    match wrap {
        WrapKind::Paren => ("\\left( ", " \\right)"),
        WrapKind::Norm => ("\\left\\| ", " \\right\\|"),
        WrapKind::Sqrt => ("\\sqrt{", "}"),
    }
}
