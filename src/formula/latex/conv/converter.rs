// LaTeX Converter Implementation
//
// This module contains the LatexConverter struct and its core methods.

use super::utils::estimate_markup_size;
use crate::formula::ast::MathAst;
use crate::formula::latex::LatexConversionStats;

/// Converter from expression trees to LaTeX strings.
///
/// The output buffer is reused between conversions. Conversion is total:
/// every tree produces a string, malformed matrices included.
pub struct LatexConverter {
    /// Buffer for building the LaTeX output
    pub(super) buffer: String,
    /// Conversion statistics
    pub(super) stats: LatexConversionStats,
}

impl LatexConverter {
    /// Create a new LaTeX converter
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new LaTeX converter with custom initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            stats: LatexConversionStats::default(),
        }
    }

    /// Convert a tree to LaTeX
    ///
    /// Returns a reference to the internal buffer; the next call overwrites it.
    ///
    /// # Example
    /// ```
    /// use mathwriter::formula::{LatexConverter, MathAst};
    ///
    /// let mut converter = LatexConverter::new();
    /// let ast = MathAst::fraction("a", "b");
    /// assert_eq!(converter.convert(&ast), "\\frac{a}{b}");
    /// ```
    pub fn convert(&mut self, ast: &MathAst) -> &str {
        self.reset();
        self.buffer.reserve(estimate_markup_size(ast));
        self.convert_node(ast);
        self.stats.record_output(self.buffer.len());
        &self.buffer
    }

    /// Get the current buffer content without clearing
    #[inline]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Reset the converter state for a new conversion
    #[inline]
    pub fn reset(&mut self) {
        self.buffer.clear();
        // Keep stats across conversions
    }

    /// Get conversion statistics
    #[inline]
    pub fn stats(&self) -> &LatexConversionStats {
        &self.stats
    }
}

impl Default for LatexConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for LatexConverter {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}

/// Convert a tree to an owned LaTeX string.
pub fn to_markup(ast: &MathAst) -> String {
    LatexConverter::new().convert(ast).to_string()
}
