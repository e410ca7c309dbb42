mod operators;
mod sanitize;
mod symbols;
mod templates;
mod conv;

pub use conv::converter::{LatexConverter, to_markup};
pub use sanitize::sanitize;
pub use symbols::{InlineSymbol, is_known_symbol, legacy_symbol_markup, resolve_symbol};
pub use templates::{
    PLACEHOLDER, SlotDefinition, SlotValues, Template, TemplateCategory, TemplateRegistry,
    TEMPLATE_REGISTRY, compile_template, template_slots, templates, templates_in,
};

/// Statistics for LaTeX conversion
#[derive(Debug, Default)]
pub struct LatexConversionStats {
    pub conversions: usize,
    pub nodes_processed: usize,
    pub total_chars_written: usize,
}

impl LatexConversionStats {
    pub fn record_node(&mut self) {
        self.nodes_processed += 1;
    }

    pub fn record_output(&mut self, size: usize) {
        self.conversions += 1;
        self.total_chars_written += size;
    }
}
