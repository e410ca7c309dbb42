// Formula Module - math expressions and their LaTeX form
//
// - `ast`: the expression tree stored in math blocks, plus builder state
// - `latex`: tree compiler, slot templates, inline symbols and sanitizer
// - `config`: rendering options
//
// # Example
//
// ```
// use mathwriter::formula::{MathAst, MathRenderer, RenderOptions};
//
// let renderer = MathRenderer::new(RenderOptions::new().with_delimiters(true));
// let ast = MathAst::fraction("1", "2");
// assert_eq!(renderer.render_ast(&ast), "\\[ \\frac{1}{2} \\]");
// ```

/// Expression tree and builder state
pub mod ast;
/// LaTeX compilation
///
/// Converts expression trees and template instances into LaTeX strings
/// consumed by an external typesetting renderer.
pub mod latex;
/// Rendering options
pub mod config;

// Re-export public API
pub use ast::{
    BinaryOp, BuilderMode, BuilderTab, MathAst, MathBuilder, NodeKind, Orientation, WrapKind,
};
pub use config::RenderOptions;
pub use latex::{LatexConverter, SlotValues, compile_template, sanitize, to_markup};

use latex::TEMPLATE_REGISTRY;

/// Compiles trees and templates and applies [`RenderOptions`] to the result
#[derive(Debug, Clone, Default)]
pub struct MathRenderer {
    options: RenderOptions,
}

impl MathRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render an expression tree
    pub fn render_ast(&self, ast: &MathAst) -> String {
        self.finish(to_markup(ast))
    }

    /// Render a template instance.
    ///
    /// An unknown template id renders as an empty string.
    pub fn render_template(&self, template_id: &str, values: &SlotValues) -> String {
        self.finish(compile_template(template_id, values))
    }

    /// Glyph scale the renderer should apply to a template
    pub fn glyph_scale(&self, template_id: &str) -> f32 {
        match TEMPLATE_REGISTRY.lookup(template_id) {
            Some(template) if template.is_large_operator => self.options.large_operator_scale,
            _ => 1.0,
        }
    }

    fn finish(&self, markup: String) -> String {
        let markup = if self.options.sanitize {
            sanitize(&markup)
        } else {
            markup
        };
        if markup.is_empty() || !self.options.wrap_delimiters {
            return markup;
        }
        if self.options.display_style {
            format!("\\[ {} \\]", markup)
        } else {
            format!("\\( {} \\)", markup)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ast_default_options() {
        let renderer = MathRenderer::default();
        let ast = MathAst::matrix(vec![
            vec!["1".into(), "0".into()],
            vec!["0".into(), "1".into()],
        ]);
        assert_eq!(
            renderer.render_ast(&ast),
            "\\begin{bmatrix} 1 & 0 \\\\ 0 & 1 \\end{bmatrix}"
        );
    }

    #[test]
    fn test_render_with_delimiters() {
        let ast = MathAst::identifier("x");
        let display = MathRenderer::new(RenderOptions::new().with_delimiters(true));
        assert_eq!(display.render_ast(&ast), "\\[ x \\]");
        let inline = MathRenderer::new(
            RenderOptions::new()
                .with_delimiters(true)
                .with_display_style(false),
        );
        assert_eq!(inline.render_ast(&ast), "\\( x \\)");
    }

    #[test]
    fn test_empty_template_never_wrapped() {
        let renderer = MathRenderer::new(RenderOptions::new().with_delimiters(true));
        assert_eq!(renderer.render_template("nope", &SlotValues::new()), "");
    }

    #[test]
    fn test_sanitize_toggle() {
        let ast = MathAst::identifier("  dy/dx ");
        let raw = MathRenderer::new(RenderOptions::new().with_sanitize(false));
        assert_eq!(raw.render_ast(&ast), "  dy/dx ");
        assert_eq!(
            MathRenderer::default().render_ast(&ast),
            "\\frac{dy}{dx}"
        );
    }

    #[test]
    fn test_render_template_keeps_placeholders() {
        let renderer = MathRenderer::default();
        assert_eq!(
            renderer.render_template("fraction", &SlotValues::new()),
            "\\dfrac{\\square}{\\square}"
        );
    }

    #[test]
    fn test_glyph_scale() {
        let renderer = MathRenderer::new(RenderOptions::new().with_large_operator_scale(1.8));
        assert_eq!(renderer.glyph_scale("summation"), 1.8);
        assert_eq!(renderer.glyph_scale("limit"), 1.8);
        assert_eq!(renderer.glyph_scale("fraction"), 1.0);
        assert_eq!(renderer.glyph_scale("unknown"), 1.0);
    }
}
