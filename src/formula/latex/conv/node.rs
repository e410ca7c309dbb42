// Node conversion logic for LaTeX conversion
//
// This module contains the recursive conversion of MathAst nodes.

use super::converter::LatexConverter;
use super::matrix::{convert_grid, convert_vector};
use crate::formula::ast::MathAst;
use crate::formula::latex::operators::{binary_op_to_latex, wrap_to_latex};

impl LatexConverter {
    /// Convert a single node, appending to the buffer
    pub fn convert_node(&mut self, node: &MathAst) {
        convert_node_internal(self, node);
    }
}

/// Internal node conversion function
fn convert_node_internal(converter: &mut LatexConverter, node: &MathAst) {
    converter.stats.record_node();

    match node {
        // Leaves are already markup; symbol ids are not resolved here
        MathAst::Symbol { value } | MathAst::Number { value } => converter.buffer.push_str(value),
        MathAst::Identifier { name } => converter.buffer.push_str(name),
        MathAst::Matrix { cells, .. } => convert_grid(converter, cells),
        MathAst::Vector { orientation, cells } => convert_vector(converter, *orientation, cells),
        MathAst::Operator { op, left, right } => {
            convert_node_internal(converter, left);
            converter.buffer.push(' ');
            converter.buffer.push_str(binary_op_to_latex(*op));
            converter.buffer.push(' ');
            convert_node_internal(converter, right);
        },
        MathAst::Wrapper { wrap, inner } => {
            let (open, close) = wrap_to_latex(*wrap);
            converter.buffer.push_str(open);
            convert_node_internal(converter, inner);
            converter.buffer.push_str(close);
        },
        MathAst::Integral { body, from, to, d } => {
            converter.buffer.push_str("\\int");
            // A lone bound is dropped: bounds are written only as a pair.
            if let (Some(from), Some(to)) = (from, to) {
                push_group(&mut converter.buffer, "_", from);
                push_group(&mut converter.buffer, "^", to);
            }
            converter.buffer.push(' ');
            converter.buffer.push_str(body);
            if let Some(var) = d.as_deref().filter(|v| !v.is_empty()) {
                converter.buffer.push_str(" \\, d");
                converter.buffer.push_str(var);
            }
        },
        MathAst::Fraction {
            numerator,
            denominator,
        } => {
            converter.buffer.push_str("\\frac");
            push_group(&mut converter.buffer, "", numerator);
            push_group(&mut converter.buffer, "", denominator);
        },
        MathAst::Exponent { base, exponent } => {
            push_group(&mut converter.buffer, "", base);
            push_group(&mut converter.buffer, "^", exponent);
        },
        MathAst::Subscript { base, subscript } => {
            push_group(&mut converter.buffer, "", base);
            push_group(&mut converter.buffer, "_", subscript);
        },
    }
}

/// Append `prefix{content}`
#[inline]
fn push_group(buffer: &mut String, prefix: &str, content: &str) {
    buffer.push_str(prefix);
    buffer.push('{');
    buffer.push_str(content);
    buffer.push('}');
}
