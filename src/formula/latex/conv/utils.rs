// Size estimation helpers for LaTeX conversion

use crate::formula::ast::MathAst;

/// Estimate the output length of a tree to size the buffer up front.
pub fn estimate_markup_size(ast: &MathAst) -> usize {
    match ast {
        MathAst::Symbol { value } | MathAst::Number { value } => value.len(),
        MathAst::Identifier { name } => name.len(),
        MathAst::Matrix { cells, .. } => estimate_grid_capacity(cells),
        MathAst::Vector { cells, .. } => {
            // \begin{bmatrix} ... \end{bmatrix} plus separators
            32 + cells.iter().map(|c| c.len() + 4).sum::<usize>()
        },
        MathAst::Operator { left, right, .. } => {
            estimate_markup_size(left) + estimate_markup_size(right) + 10
        },
        MathAst::Wrapper { inner, .. } => estimate_markup_size(inner) + 18,
        MathAst::Integral { body, from, to, d } => {
            let bound = |b: &Option<String>| b.as_ref().map_or(0, |s| s.len() + 4);
            8 + body.len() + bound(from) + bound(to) + d.as_ref().map_or(0, |s| s.len() + 5)
        },
        MathAst::Fraction {
            numerator,
            denominator,
        } => numerator.len() + denominator.len() + 10,
        MathAst::Exponent { base, exponent } => base.len() + exponent.len() + 6,
        MathAst::Subscript { base, subscript } => base.len() + subscript.len() + 6,
    }
}

/// Estimate capacity needed for a matrix grid to avoid reallocations
pub fn estimate_grid_capacity(rows: &[Vec<String>]) -> usize {
    if rows.is_empty() {
        return 32;
    }

    let num_rows = rows.len();
    let num_cols = rows[0].len();

    // Estimate: environment markers + row separators + column separators + content
    let env_overhead = 32; // \begin{bmatrix}  \end{bmatrix}
    let row_separators = num_rows.saturating_sub(1) * 4; // " \\ "
    let col_separators = num_rows * num_cols.saturating_sub(1) * 3; // " & "
    let content: usize = rows.iter().flatten().map(String::len).sum();

    env_overhead + row_separators + col_separators + content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_grid_capacity() {
        let rows = vec![
            vec!["1".to_string(), "0".to_string()],
            vec!["0".to_string(), "1".to_string()],
        ];
        // 32 + 4 + 2 * 3 + 4
        assert_eq!(estimate_grid_capacity(&rows), 46);
        assert_eq!(estimate_grid_capacity(&[]), 32);
    }

    #[test]
    fn test_estimate_covers_leaf_payload() {
        assert_eq!(estimate_markup_size(&MathAst::number("12345")), 5);
        assert!(estimate_markup_size(&MathAst::fraction("a", "b")) >= "\\frac{a}{b}".len());
    }
}
