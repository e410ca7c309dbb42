//! Element sequence to bracket-matrix shorthand.

use super::element::Element;

/// Serialize elements back to plain text.
///
/// Text runs are written verbatim, matrices as `[ [ a b ] [ c d ] ]` and
/// symbols as their display glyph, falling back to the symbol id.
/// [`parse`](super::parse) inverts this for text and matrix elements whose
/// cells contain no spaces or brackets.
pub fn serialize(elements: &[Element]) -> String {
    let mut out = String::with_capacity(estimate_size(elements));
    for element in elements {
        write_element(&mut out, element);
    }
    out
}

fn write_element(out: &mut String, element: &Element) {
    match element {
        Element::Text { value } => out.push_str(value),
        Element::Matrix { data, .. } => {
            out.push_str("[ ");
            for (i, row) in data.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str("[ ");
                for (j, cell) in row.iter().enumerate() {
                    if j > 0 {
                        out.push(' ');
                    }
                    out.push_str(cell);
                }
                out.push_str(" ]");
            }
            out.push_str(" ]");
        },
        Element::Symbol { value, display } => match display.as_deref() {
            Some(glyph) if !glyph.is_empty() => out.push_str(glyph),
            _ => out.push_str(value),
        },
    }
}

fn estimate_size(elements: &[Element]) -> usize {
    elements
        .iter()
        .map(|element| match element {
            Element::Text { value } => value.len(),
            Element::Matrix { data, .. } => {
                4 + data
                    .iter()
                    .map(|row| 5 + row.iter().map(|c| c.len() + 1).sum::<usize>())
                    .sum::<usize>()
            },
            Element::Symbol { value, display } => display.as_ref().unwrap_or(value).len(),
        })
        .sum()
}
