// Matrix conversion logic for LaTeX conversion
//
// Matrices and vectors share one environment; a vector is a matrix with a
// single column or a single row.

use super::converter::LatexConverter;
use super::utils::estimate_grid_capacity;
use crate::formula::ast::Orientation;

/// Environment used for every matrix and vector
pub const MATRIX_ENV_BEGIN: &str = "\\begin{bmatrix} ";
pub const MATRIX_ENV_END: &str = " \\end{bmatrix}";

/// Separator between cells of one row
pub const COL_SEPARATOR: &str = " & ";
/// Separator between rows
pub const ROW_SEPARATOR: &str = " \\\\ ";

/// Write a row-major grid. The grid is written as given; ragged rows and
/// empty grids produce degenerate but well-delimited markup.
pub(super) fn convert_grid(converter: &mut LatexConverter, rows: &[Vec<String>]) {
    converter.buffer.reserve(estimate_grid_capacity(rows));
    converter.buffer.push_str(MATRIX_ENV_BEGIN);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            converter.buffer.push_str(ROW_SEPARATOR);
        }
        push_joined(&mut converter.buffer, row, COL_SEPARATOR);
    }
    converter.buffer.push_str(MATRIX_ENV_END);
}

/// Write a vector: a column stacks its cells, a row lines them up.
pub(super) fn convert_vector(
    converter: &mut LatexConverter,
    orientation: Orientation,
    cells: &[String],
) {
    let separator = match orientation {
        Orientation::Column => ROW_SEPARATOR,
        Orientation::Row => COL_SEPARATOR,
    };
    converter.buffer.push_str(MATRIX_ENV_BEGIN);
    push_joined(&mut converter.buffer, cells, separator);
    converter.buffer.push_str(MATRIX_ENV_END);
}

#[inline]
fn push_joined(buffer: &mut String, cells: &[String], separator: &str) {
    for (j, cell) in cells.iter().enumerate() {
        if j > 0 {
            buffer.push_str(separator);
        }
        buffer.push_str(cell);
    }
}
