//! Markup cleanup applied before a string reaches the renderer.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Editor scaffolding that must never be rendered.
///
/// `\square` is the visible slot placeholder and is intentionally absent.
const SCAFFOLDING_TOKENS: [&str; 7] = [
    "\\placeholder{}",
    "\\cursor{}",
    "\\cursor",
    "\\caret",
    "\u{200B}",
    "\u{2060}",
    "\u{FEFF}",
];

// LeftmostLongest so `\cursor{}` wins over `\cursor`
static SCAFFOLDING: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(SCAFFOLDING_TOKENS)
        .expect("Failed to build scaffolding matcher")
});

static EMPTY_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_^]\{\s*\}").expect("Failed to build empty script pattern"));

static FALLBACK_DIFFERENTIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bd([A-Za-z]?)/d([A-Za-z])\b")
        .expect("Failed to build differential pattern")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to build whitespace pattern"));

const ROW_SEPARATOR: &str = "\\\\";

/// Clean a markup string for rendering.
///
/// Strips internal scaffolding tokens, drops empty `_{}`/`^{}` groups,
/// rewrites a bare `d/dx` or `df/dx` into a differential fraction, collapses
/// whitespace and removes dangling `&`/`\\` separators at either end.
///
/// The rules are reapplied until the string stops changing, so
/// `sanitize(&sanitize(s)) == sanitize(s)` for every input.
///
/// # Examples
///
/// ```
/// use mathwriter::formula::latex::sanitize;
/// assert_eq!(sanitize("  dy/dx \\cursor "), "\\frac{dy}{dx}");
/// assert_eq!(sanitize("x_{} + \\square"), "x + \\square");
/// ```
pub fn sanitize(markup: &str) -> String {
    let mut current = sanitize_pass(markup);
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One application of every rule, in order
fn sanitize_pass(input: &str) -> String {
    let stripped = SCAFFOLDING.replace_all(input, &[""; SCAFFOLDING_TOKENS.len()]);
    let scripts = EMPTY_SCRIPT.replace_all(&stripped, "");

    let differentials = if FALLBACK_DIFFERENTIAL.is_match(&scripts) {
        log::trace!("rewriting fallback differential in {scripts:?}");
        FALLBACK_DIFFERENTIAL.replace_all(&scripts, r"\frac{d$1}{d$2}")
    } else {
        Cow::Borrowed(&*scripts)
    };

    let collapsed = WHITESPACE_RUN.replace_all(&differentials, " ");
    trim_separators(&collapsed).to_string()
}

/// Trim whitespace and any separators left dangling at the ends
fn trim_separators(mut s: &str) -> &str {
    loop {
        let before = s.len();
        s = s.trim();
        if let Some(rest) = s.strip_prefix('&') {
            s = rest;
        }
        if let Some(rest) = s.strip_prefix(ROW_SEPARATOR) {
            s = rest;
        }
        if let Some(rest) = s.strip_suffix('&') {
            // `\&` is a literal ampersand unless its backslash is half of `\\`
            let escapes = rest.bytes().rev().take_while(|&b| b == b'\\').count();
            if escapes % 2 == 0 {
                s = rest;
            }
        }
        if let Some(rest) = s.strip_suffix(ROW_SEPARATOR) {
            s = rest;
        }
        if s.len() == before {
            return s;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_scaffolding_tokens() {
        assert_eq!(sanitize("x\\placeholder{}+\\cursor{} y\\caret"), "x+ y");
        assert_eq!(sanitize("a\u{200B}b\u{FEFF}\u{2060}"), "ab");
    }

    #[test]
    fn test_keeps_visible_placeholder() {
        assert_eq!(
            sanitize("\\dfrac{\\square}{\\square}"),
            "\\dfrac{\\square}{\\square}"
        );
    }

    #[test]
    fn test_removes_empty_script_groups() {
        assert_eq!(sanitize("x_{}^{ } + 1"), "x + 1");
        assert_eq!(sanitize("x_{\\cursor}"), "x");
        // nested groups only empty out on the second pass
        assert_eq!(sanitize("x^{_{}}"), "x");
    }

    #[test]
    fn test_rewrites_fallback_differential() {
        assert_eq!(sanitize("d/dx"), "\\frac{d}{dx}");
        assert_eq!(sanitize("df/dx"), "\\frac{df}{dx}");
        assert_eq!(sanitize("dy/dt = k y"), "\\frac{dy}{dt} = k y");
        assert_eq!(sanitize("and/dx"), "and/dx");
        assert_eq!(sanitize("d/dxy"), "d/dxy");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize("  a \t\n  b  "), "a b");
    }

    #[test]
    fn test_trims_dangling_separators() {
        assert_eq!(sanitize("& 1 & 2 \\\\"), "1 & 2");
        assert_eq!(sanitize("\\\\ \\\\ x &&"), "x");
        assert_eq!(sanitize("a \\&"), "a \\&");
        assert_eq!(sanitize("a \\\\&"), "a");
        assert_eq!(sanitize("a \\\\\\&"), "a \\\\\\&");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(" \\cursor & "), "");
    }

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("\\cursor".to_string()),
            Just("\\cursor{}".to_string()),
            Just("\\placeholder{}".to_string()),
            Just("_{".to_string()),
            Just("^{".to_string()),
            Just("}".to_string()),
            Just("d/dx".to_string()),
            Just("d".to_string()),
            Just("/".to_string()),
            Just("&".to_string()),
            Just("\\\\".to_string()),
            Just("\\".to_string()),
            Just(" ".to_string()),
            Just("\u{200B}".to_string()),
            "[a-z]{1,3}",
        ]
    }

    proptest! {
        #[test]
        fn test_sanitize_idempotent(s in "\\PC{0,40}") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_sanitize_idempotent_on_markup(parts in prop::collection::vec(fragment(), 0..16)) {
            let s = parts.concat();
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }
    }
}
