//! Bracket-matrix shorthand parser.
//!
//! Scans plain text for embedded matrix literals of the form
//! `[ [ a b ] [ c d ] ]` and splits the text into [`Element`]s. Anything that
//! does not form a valid literal stays in the surrounding text run, so parsing
//! never fails.
//!
//! Grammar, with `_` standing for a run of ASCII whitespace:
//!
//! ```text
//! matrix := '[' ' ' _? row (_? row)* _? ']'
//! row    := '[' _? cell (_ cell)* _? ']'
//! cell   := any run of characters other than whitespace, '[' and ']'
//! ```
//!
//! Every row must have the same, non-zero number of cells. There is no escape
//! for brackets or whitespace inside a cell.

use super::element::Element;
use memchr::memchr;

/// Parse a line of text into text and matrix elements.
///
/// Text between matrices is kept verbatim, including surrounding whitespace.
/// The result is never empty: input without content yields a single empty
/// text element.
///
/// # Examples
///
/// ```
/// use mathwriter::document::{parse, Element};
///
/// let elements = parse("A = [ [ 1 0 ] [ 0 1 ] ]");
/// assert_eq!(elements[0], Element::text("A = "));
/// assert!(matches!(elements[1], Element::Matrix { rows: 2, cols: 2, .. }));
/// ```
pub fn parse(text: &str) -> Vec<Element> {
    let bytes = text.as_bytes();
    let mut elements = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        if bytes.get(open + 1) == Some(&b' ') {
            if let Some((matrix, end)) = parse_matrix(text, open) {
                push_text(&mut elements, &text[run_start..open]);
                elements.push(matrix);
                run_start = end;
                pos = end;
                continue;
            }
            log::trace!("no matrix literal at byte {open}, keeping it as text");
        }
        pos = open + 1;
    }
    push_text(&mut elements, &text[run_start..]);

    if elements.is_empty() {
        elements.push(Element::text(""));
    }
    elements
}

#[inline]
fn push_text(elements: &mut Vec<Element>, run: &str) {
    if !run.is_empty() {
        elements.push(Element::text(run));
    }
}

/// Forward-only cursor over the ASCII structure of a literal
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Read one cell; the cursor is on a non-space, non-bracket byte
    fn cell(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b'[' || b == b']' {
                break;
            }
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// Read a bracketed row; the cursor is past its `[`
    fn row(&mut self) -> Option<Vec<String>> {
        let mut cells = Vec::new();
        loop {
            self.skip_spaces();
            match self.peek()? {
                b']' => {
                    self.pos += 1;
                    return Some(cells);
                },
                b'[' => return None,
                _ => cells.push(self.cell().to_string()),
            }
        }
    }
}

/// Try to read a matrix literal whose outer `[` is at `start`.
///
/// Returns the element and the byte offset just past the closing `]`.
fn parse_matrix(text: &str, start: usize) -> Option<(Element, usize)> {
    let mut cursor = Cursor { text, pos: start };
    if !cursor.eat(b'[') {
        return None;
    }
    cursor.skip_spaces();

    let mut data = Vec::new();
    while cursor.eat(b'[') {
        data.push(cursor.row()?);
        cursor.skip_spaces();
    }
    if !cursor.eat(b']') {
        return None;
    }

    let cols = data.first().map_or(0, Vec::len);
    if cols == 0 || data.iter().any(|row| row.len() != cols) {
        return None;
    }
    Some((Element::matrix(data), cursor.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::serialize;
    use proptest::prelude::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_identity_matrix() {
        assert_eq!(
            parse("[ [ 1 0 ] [ 0 1 ] ]"),
            vec![Element::Matrix {
                rows: 2,
                cols: 2,
                data: grid(&[&["1", "0"], &["0", "1"]]),
            }]
        );
    }

    #[test]
    fn test_parse_text_around_matrix() {
        assert_eq!(
            parse("v = [ [ x ] [ y ] ] ok"),
            vec![
                Element::text("v = "),
                Element::matrix(grid(&[&["x"], &["y"]])),
                Element::text(" ok"),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_matrices() {
        let elements = parse("[ [ 1 ] ][ [ 2 ] ]");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1], Element::matrix(grid(&[&["2"]])));
    }

    #[test]
    fn test_parse_loose_spacing() {
        assert_eq!(
            parse("[  [1   2]  [3 4 ]]"),
            vec![Element::matrix(grid(&[&["1", "2"], &["3", "4"]]))]
        );
    }

    #[test]
    fn test_cells_split_on_any_whitespace() {
        let elements = parse("[ [ 1\t2 ]\n[ 3  4 ] ]");
        assert_eq!(elements, vec![Element::matrix(grid(&[&["1", "2"], &["3", "4"]]))]);
        assert_eq!(serialize(&elements), "[ [ 1 2 ] [ 3 4 ] ]");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), vec![Element::text("")]);
    }

    #[test]
    fn test_whitespace_only_text_is_kept() {
        assert_eq!(parse("   "), vec![Element::text("   ")]);
    }

    #[test]
    fn test_malformed_literals_degrade_to_text() {
        for input in [
            "[ [ 1 2 ] [ 3 ] ]",
            "[ [ 1 2 ]",
            "[ ]",
            "[ [ ] ]",
            "[ [ 1 [ 2 ] ] ]",
            "[[ 1 ] ]",
            "see [ [ a b ] ",
            "[ x ]",
        ] {
            assert_eq!(parse(input), vec![Element::text(input)], "{input}");
        }
    }

    #[test]
    fn test_failed_candidate_does_not_hide_later_matrix() {
        assert_eq!(
            parse("[ oops [ [ 1 ] ]"),
            vec![
                Element::text("[ oops "),
                Element::matrix(grid(&[&["1"]])),
            ]
        );
    }

    #[test]
    fn test_unicode_text_and_cells() {
        assert_eq!(
            parse("θ → [ [ α β ] ]"),
            vec![
                Element::text("θ → "),
                Element::matrix(grid(&[&["α", "β"]])),
            ]
        );
    }

    fn cell() -> impl Strategy<Value = String> {
        "[a-z0-9.+-]{1,4}"
    }

    fn matrix() -> impl Strategy<Value = Element> {
        (1usize..4, 1usize..4)
            .prop_flat_map(|(rows, cols)| {
                prop::collection::vec(prop::collection::vec(cell(), cols), rows)
            })
            .prop_map(Element::matrix)
    }

    fn text() -> impl Strategy<Value = Element> {
        "[^\\[\\]]{1,12}".prop_map(Element::text)
    }

    /// Element sequences without adjacent text runs
    fn elements() -> impl Strategy<Value = Vec<Element>> {
        prop::collection::vec(prop_oneof![text(), matrix()], 1..6).prop_map(|items| {
            let mut out: Vec<Element> = Vec::new();
            for item in items {
                if item.is_text() && out.last().is_some_and(Element::is_text) {
                    continue;
                }
                out.push(item);
            }
            out
        })
    }

    proptest! {
        #[test]
        fn test_parse_serialize_round_trip(elements in elements()) {
            prop_assert_eq!(parse(&serialize(&elements)), elements);
        }

        #[test]
        fn test_serialize_parse_round_trip(elements in elements()) {
            let text = serialize(&elements);
            prop_assert_eq!(serialize(&parse(&text)), text);
        }
    }
}
