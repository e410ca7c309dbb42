// Inline symbol table
//
// Maps the symbol ids used by inline symbol spans and symbol elements to a
// (LaTeX, display glyph) pair. Lookups never fail: an unknown id resolves to
// itself for both the markup and the glyph.

/// Static table of inline symbols: id => (markup, display glyph)
static INLINE_SYMBOLS: phf::Map<&'static str, (&'static str, &'static str)> = phf::phf_map! {
    // Lowercase Greek
    "alpha" => ("\\alpha", "α"),
    "beta" => ("\\beta", "β"),
    "gamma" => ("\\gamma", "γ"),
    "delta" => ("\\delta", "δ"),
    "epsilon" => ("\\epsilon", "ε"),
    "theta" => ("\\theta", "θ"),
    "lambda" => ("\\lambda", "λ"),
    "mu" => ("\\mu", "μ"),
    "pi" => ("\\pi", "π"),
    "rho" => ("\\rho", "ρ"),
    "sigma_lower" => ("\\sigma", "σ"),
    "tau" => ("\\tau", "τ"),
    "phi" => ("\\phi", "φ"),
    "chi" => ("\\chi", "χ"),
    "psi" => ("\\psi", "ψ"),
    "omega" => ("\\omega", "ω"),

    // Uppercase Greek
    "Gamma" => ("\\Gamma", "Γ"),
    "Delta" => ("\\Delta", "Δ"),
    "Theta" => ("\\Theta", "Θ"),
    "Lambda" => ("\\Lambda", "Λ"),
    "Sigma" => ("\\Sigma", "Σ"),
    "Phi" => ("\\Phi", "Φ"),
    "Psi" => ("\\Psi", "Ψ"),
    "Omega" => ("\\Omega", "Ω"),

    // Operators and relations
    "plus" => ("+", "+"),
    "minus" => ("-", "−"),
    "times" => ("\\times", "×"),
    "divide" => ("\\div", "÷"),
    "cdot" => ("\\cdot", "·"),
    "equals" => ("=", "="),
    "neq" => ("\\neq", "≠"),
    "approx" => ("\\approx", "≈"),
    "lt" => ("<", "<"),
    "gt" => (">", ">"),
    "leq" => ("\\leq", "≤"),
    "geq" => ("\\geq", "≥"),
    "pm" => ("\\pm", "±"),
    "infinity" => ("\\infty", "∞"),
    "nabla" => ("\\nabla", "∇"),
    "partial" => ("\\partial", "∂"),
    "forall" => ("\\forall", "∀"),
    "exists" => ("\\exists", "∃"),
    "in_set" => ("\\in", "∈"),
    "notin" => ("\\notin", "∉"),
    "subset" => ("\\subset", "⊂"),
    "supset" => ("\\supset", "⊃"),
    "cup" => ("\\cup", "∪"),
    "cap" => ("\\cap", "∩"),
    "rightarrow" => ("\\rightarrow", "→"),
    "leftarrow" => ("\\leftarrow", "←"),
    "Rightarrow" => ("\\Rightarrow", "⇒"),
    "Leftarrow" => ("\\Leftarrow", "⇐"),
    "leftrightarrow" => ("\\leftrightarrow", "↔"),
    "dots" => ("\\cdots", "⋯"),

    // Symbol element ids inserted from the command palette
    "sigma" => ("\\Sigma", "Σ"),
    "sum" => ("\\sum", "∑"),
    "integral" => ("\\int", "∫"),
    "sqrt" => ("\\surd", "√"),
};

/// Older symbol => markup table, kept for content written before inline
/// symbols carried a display glyph.
static LEGACY_SYMBOLS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "sigma" => "\\displaystyle \\Sigma",
    "sum" => "\\displaystyle \\sum",
    "integral" => "\\displaystyle \\int",
    "pi" => "\\pi",
    "alpha" => "\\alpha",
    "beta" => "\\beta",
    "theta" => "\\theta",
    "lambda" => "\\lambda",
    "gamma" => "\\gamma",
    "delta" => "\\delta",
    "plus" => "+",
    "minus" => "-",
    "times" => "\\times",
    "divide" => "\\div",
    "equals" => "=",
    "approx" => "\\approx",
    "leq" => "\\leq",
    "geq" => "\\geq",
    "infinity" => "\\infty",
    "sqrt" => "\\sqrt{}",
    "fraction" => "\\frac{}{}",
    "power" => "x^{}",
    "subscript" => "x_{}",
};

/// Resolved inline symbol.
///
/// Borrows from the static table on a hit and from the queried id on a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSymbol<'a> {
    /// LaTeX markup
    pub markup: &'a str,
    /// Unicode glyph shown in plain text
    pub display: &'a str,
}

/// Resolve an inline symbol id.
///
/// Unknown ids resolve to themselves so the renderer always has something to
/// show.
pub fn resolve_symbol(id: &str) -> InlineSymbol<'_> {
    match INLINE_SYMBOLS.get(id) {
        Some(&(markup, display)) => InlineSymbol { markup, display },
        None => {
            log::debug!("unresolved inline symbol id {id:?}");
            InlineSymbol {
                markup: id,
                display: id,
            }
        },
    }
}

/// Whether `id` names an inline symbol
#[inline]
pub fn is_known_symbol(id: &str) -> bool {
    INLINE_SYMBOLS.contains_key(id)
}

/// Markup from the legacy symbol table
#[inline]
pub fn legacy_symbol_markup(id: &str) -> Option<&'static str> {
    LEGACY_SYMBOLS.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_greek_symbol() {
        let sym = resolve_symbol("alpha");
        assert_eq!(sym.markup, "\\alpha");
        assert_eq!(sym.display, "α");
    }

    #[test]
    fn test_resolve_operator_symbol() {
        let sym = resolve_symbol("leq");
        assert_eq!(sym.markup, "\\leq");
        assert_eq!(sym.display, "≤");
        assert_eq!(resolve_symbol("minus").display, "−");
    }

    #[test]
    fn test_resolve_unknown_symbol_falls_back_to_id() {
        let sym = resolve_symbol("does-not-exist");
        assert_eq!(
            sym,
            InlineSymbol {
                markup: "does-not-exist",
                display: "does-not-exist",
            }
        );
    }

    #[test]
    fn test_symbol_ids_are_case_sensitive() {
        assert_eq!(resolve_symbol("Sigma").display, "Σ");
        assert_eq!(resolve_symbol("sigma_lower").display, "σ");
        assert!(!is_known_symbol("OMEGA"));
    }

    #[test]
    fn test_palette_symbol_ids_resolve() {
        for id in ["sigma", "integral", "sqrt", "pi", "alpha", "lambda"] {
            assert!(is_known_symbol(id), "{id} should be known");
        }
    }

    #[test]
    fn test_legacy_symbol_markup() {
        assert_eq!(legacy_symbol_markup("sigma"), Some("\\displaystyle \\Sigma"));
        assert_eq!(legacy_symbol_markup("fraction"), Some("\\frac{}{}"));
        assert_eq!(legacy_symbol_markup("omega"), None);
    }
}
