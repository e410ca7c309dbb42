//! Expression templates with named, independently editable slots.
//!
//! Each template maps a slot-value mapping to a LaTeX string. A missing or
//! blank slot is rendered as [`PLACEHOLDER`], so a partially filled template
//! still shows its complete structure while it is being edited.
//!
//! Adding a template means adding one `register` call below; nothing else
//! depends on the set of templates.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Glyph rendered in place of an empty slot
pub const PLACEHOLDER: &str = "\\square";

/// Slot name => current slot content
pub type SlotValues = HashMap<String, String>;

/// A named slot of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDefinition {
    /// Key in the slot-value mapping
    pub name: &'static str,
    /// Hint shown by editors while the slot is empty
    pub placeholder: &'static str,
    /// Value editors seed a fresh slot with
    pub default_value: &'static str,
}

impl SlotDefinition {
    const fn new(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            default_value: "",
        }
    }

    const fn with_default(
        name: &'static str,
        placeholder: &'static str,
        default_value: &'static str,
    ) -> Self {
        Self {
            name,
            placeholder,
            default_value,
        }
    }
}

/// Template grouping used by pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Operator,
    Structure,
    Function,
    Decoration,
}

impl TemplateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Structure => "structure",
            Self::Function => "function",
            Self::Decoration => "decoration",
        }
    }
}

/// A parameterized markup pattern
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub slots: &'static [SlotDefinition],
    /// Large operators are drawn at an increased glyph size by the renderer
    pub is_large_operator: bool,
    compile: fn(&SlotValues) -> String,
}

impl Template {
    /// Compile slot values to LaTeX
    #[inline]
    pub fn compile(&self, values: &SlotValues) -> String {
        (self.compile)(values)
    }

    /// Slot values holding every slot's default
    pub fn default_slot_values(&self) -> SlotValues {
        self.slots
            .iter()
            .map(|slot| (slot.name.to_string(), slot.default_value.to_string()))
            .collect()
    }
}

/// Registry of templates, keyed by id, in registration order
pub struct TemplateRegistry {
    templates: Vec<Template>,
    index: HashMap<&'static str, usize>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a template, replacing any template with the same id
    pub fn register(&mut self, template: Template) {
        match self.index.get(template.id) {
            Some(&i) => self.templates[i] = template,
            None => {
                self.index.insert(template.id, self.templates.len());
                self.templates.push(template);
            },
        }
    }

    /// Look up a template by id
    pub fn lookup(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// All templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Templates of one category, in registration order
    pub fn in_category(&self, category: TemplateCategory) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global template registry instance
pub static TEMPLATE_REGISTRY: Lazy<TemplateRegistry> = Lazy::new(|| {
    let mut registry = TemplateRegistry::new();
    register_operator_templates(&mut registry);
    register_structure_templates(&mut registry);
    register_function_templates(&mut registry);
    register_decoration_templates(&mut registry);
    registry
});

/// Compile a template instance to LaTeX.
///
/// Returns an empty string for an unknown template id.
pub fn compile_template(template_id: &str, values: &SlotValues) -> String {
    match TEMPLATE_REGISTRY.lookup(template_id) {
        Some(template) => template.compile(values),
        None => {
            log::debug!("unknown template id {template_id:?}");
            String::new()
        },
    }
}

/// Slot definitions of a template, empty for an unknown id
pub fn template_slots(template_id: &str) -> &'static [SlotDefinition] {
    match TEMPLATE_REGISTRY.lookup(template_id) {
        Some(template) => template.slots,
        None => &[],
    }
}

/// All registered templates in registration order
pub fn templates() -> impl Iterator<Item = &'static Template> {
    TEMPLATE_REGISTRY.iter()
}

/// Registered templates of one category
pub fn templates_in(category: TemplateCategory) -> impl Iterator<Item = &'static Template> {
    TEMPLATE_REGISTRY.in_category(category)
}

/// Slot content, or the placeholder glyph when missing or blank
#[inline]
fn slot<'a>(values: &'a SlotValues, name: &str) -> &'a str {
    match values.get(name) {
        Some(value) if !value.trim().is_empty() => value,
        _ => PLACEHOLDER,
    }
}

const BOUNDED_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("lower", "i=1"),
    SlotDefinition::new("upper", "n"),
    SlotDefinition::new("body", "expr"),
];

const SET_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("lower", "i=1"),
    SlotDefinition::new("upper", "n"),
    SlotDefinition::new("body", "A_i"),
];

const INTEGRAL_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("lower", "a"),
    SlotDefinition::new("upper", "b"),
    SlotDefinition::new("body", "f(x)"),
    SlotDefinition::with_default("differential", "dx", "dx"),
];

const BODY_X: &[SlotDefinition] = &[SlotDefinition::new("body", "x")];
const BODY_V: &[SlotDefinition] = &[SlotDefinition::new("body", "v")];
const BODY_EXPR: &[SlotDefinition] = &[SlotDefinition::new("body", "expr")];

const FRACTION_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("numerator", "a"),
    SlotDefinition::new("denominator", "b"),
];
const NTHROOT_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("index", "n"),
    SlotDefinition::new("body", "x"),
];
const POWER_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("base", "x"),
    SlotDefinition::new("exponent", "n"),
];
const SUBSCRIPT_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("base", "x"),
    SlotDefinition::new("sub", "i"),
];
const SUPER_SUB_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("base", "x"),
    SlotDefinition::new("sub", "i"),
    SlotDefinition::new("sup", "n"),
];
const BINOM_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("n", "n"),
    SlotDefinition::new("k", "k"),
];
const LIMIT_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::with_default("variable", "x", "x"),
    SlotDefinition::new("approaching", "\\infty"),
    SlotDefinition::new("body", "f(x)"),
];
const DERIVATIVE_SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new("function", "f"),
    SlotDefinition::with_default("variable", "x", "x"),
];

/// `\displaystyle<command>_{lower}^{upper} body`
fn large_operator(command: &str, v: &SlotValues) -> String {
    format!(
        "\\displaystyle{command}_{{{}}}^{{{}}} {}",
        slot(v, "lower"),
        slot(v, "upper"),
        slot(v, "body")
    )
}

/// Register large operators
fn register_operator_templates(registry: &mut TemplateRegistry) {
    registry.register(Template {
        id: "summation",
        name: "Summation",
        category: TemplateCategory::Operator,
        slots: BOUNDED_SLOTS,
        is_large_operator: true,
        compile: |v| large_operator("\\sum", v),
    });
    registry.register(Template {
        id: "product",
        name: "Product",
        category: TemplateCategory::Operator,
        slots: BOUNDED_SLOTS,
        is_large_operator: true,
        compile: |v| large_operator("\\prod", v),
    });
    registry.register(Template {
        id: "integral",
        name: "Integral",
        category: TemplateCategory::Operator,
        slots: INTEGRAL_SLOTS,
        is_large_operator: true,
        compile: |v| {
            format!(
                "\\displaystyle\\int_{{{}}}^{{{}}} {}\\, {}",
                slot(v, "lower"),
                slot(v, "upper"),
                slot(v, "body"),
                slot(v, "differential")
            )
        },
    });
    registry.register(Template {
        id: "union",
        name: "Union",
        category: TemplateCategory::Operator,
        slots: SET_SLOTS,
        is_large_operator: true,
        compile: |v| large_operator("\\bigcup", v),
    });
    registry.register(Template {
        id: "intersection",
        name: "Intersection",
        category: TemplateCategory::Operator,
        slots: SET_SLOTS,
        is_large_operator: true,
        compile: |v| large_operator("\\bigcap", v),
    });
}

/// Register fractions, roots, scripts and delimiters
fn register_structure_templates(registry: &mut TemplateRegistry) {
    registry.register(Template {
        id: "fraction",
        name: "Fraction",
        category: TemplateCategory::Structure,
        slots: FRACTION_SLOTS,
        is_large_operator: false,
        compile: |v| {
            format!(
                "\\dfrac{{{}}}{{{}}}",
                slot(v, "numerator"),
                slot(v, "denominator")
            )
        },
    });
    registry.register(Template {
        id: "sqrt",
        name: "Square Root",
        category: TemplateCategory::Structure,
        slots: BODY_X,
        is_large_operator: false,
        compile: |v| format!("\\sqrt{{{}}}", slot(v, "body")),
    });
    registry.register(Template {
        id: "nthroot",
        name: "Nth Root",
        category: TemplateCategory::Structure,
        slots: NTHROOT_SLOTS,
        is_large_operator: false,
        compile: |v| format!("\\sqrt[{}]{{{}}}", slot(v, "index"), slot(v, "body")),
    });
    registry.register(Template {
        id: "power",
        name: "Exponent",
        category: TemplateCategory::Structure,
        slots: POWER_SLOTS,
        is_large_operator: false,
        compile: |v| format!("{{{}}}^{{{}}}", slot(v, "base"), slot(v, "exponent")),
    });
    registry.register(Template {
        id: "subscriptExpr",
        name: "Subscript",
        category: TemplateCategory::Structure,
        slots: SUBSCRIPT_SLOTS,
        is_large_operator: false,
        compile: |v| format!("{{{}}}_{{{}}}", slot(v, "base"), slot(v, "sub")),
    });
    registry.register(Template {
        id: "superSub",
        name: "Super & Subscript",
        category: TemplateCategory::Structure,
        slots: SUPER_SUB_SLOTS,
        is_large_operator: false,
        compile: |v| {
            format!(
                "{{{}}}_{{{}}}^{{{}}}",
                slot(v, "base"),
                slot(v, "sub"),
                slot(v, "sup")
            )
        },
    });
    registry.register(Template {
        id: "abs",
        name: "Absolute Value",
        category: TemplateCategory::Structure,
        slots: BODY_X,
        is_large_operator: false,
        compile: |v| format!("\\left|{}\\right|", slot(v, "body")),
    });
    registry.register(Template {
        id: "paren",
        name: "Parentheses",
        category: TemplateCategory::Structure,
        slots: BODY_EXPR,
        is_large_operator: false,
        compile: |v| format!("\\left({}\\right)", slot(v, "body")),
    });
    registry.register(Template {
        id: "bracket",
        name: "Brackets",
        category: TemplateCategory::Structure,
        slots: BODY_EXPR,
        is_large_operator: false,
        compile: |v| format!("\\left[{}\\right]", slot(v, "body")),
    });
    registry.register(Template {
        id: "binom",
        name: "Binomial",
        category: TemplateCategory::Structure,
        slots: BINOM_SLOTS,
        is_large_operator: false,
        compile: |v| format!("\\dbinom{{{}}}{{{}}}", slot(v, "n"), slot(v, "k")),
    });
}

/// Register limits and derivatives
fn register_function_templates(registry: &mut TemplateRegistry) {
    registry.register(Template {
        id: "limit",
        name: "Limit",
        category: TemplateCategory::Function,
        slots: LIMIT_SLOTS,
        is_large_operator: true,
        compile: |v| {
            format!(
                "\\displaystyle\\lim_{{{} \\to {}}} {}",
                slot(v, "variable"),
                slot(v, "approaching"),
                slot(v, "body")
            )
        },
    });
    registry.register(Template {
        id: "derivative",
        name: "Derivative",
        category: TemplateCategory::Function,
        slots: DERIVATIVE_SLOTS,
        is_large_operator: false,
        compile: |v| {
            format!(
                "\\dfrac{{d{}}}{{d{}}}",
                slot(v, "function"),
                slot(v, "variable")
            )
        },
    });
    registry.register(Template {
        id: "partialDerivative",
        name: "Partial Derivative",
        category: TemplateCategory::Function,
        slots: DERIVATIVE_SLOTS,
        is_large_operator: false,
        compile: |v| {
            format!(
                "\\dfrac{{\\partial {}}}{{\\partial {}}}",
                slot(v, "function"),
                slot(v, "variable")
            )
        },
    });
}

/// Register accents
fn register_decoration_templates(registry: &mut TemplateRegistry) {
    registry.register(Template {
        id: "hat",
        name: "Hat",
        category: TemplateCategory::Decoration,
        slots: BODY_X,
        is_large_operator: false,
        compile: |v| format!("\\hat{{{}}}", slot(v, "body")),
    });
    registry.register(Template {
        id: "bar",
        name: "Bar (overline)",
        category: TemplateCategory::Decoration,
        slots: BODY_X,
        is_large_operator: false,
        compile: |v| format!("\\overline{{{}}}", slot(v, "body")),
    });
    registry.register(Template {
        id: "vec",
        name: "Vector Arrow",
        category: TemplateCategory::Decoration,
        slots: BODY_V,
        is_large_operator: false,
        compile: |v| format!("\\vec{{{}}}", slot(v, "body")),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> SlotValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fraction_template() {
        let v = values(&[("numerator", "a"), ("denominator", "b")]);
        assert_eq!(compile_template("fraction", &v), "\\dfrac{a}{b}");
        assert_eq!(
            compile_template("fraction", &SlotValues::new()),
            "\\dfrac{\\square}{\\square}"
        );
    }

    #[test]
    fn test_unknown_template_is_empty() {
        assert_eq!(compile_template("does-not-exist", &SlotValues::new()), "");
        assert!(template_slots("does-not-exist").is_empty());
    }

    #[test]
    fn test_slot_names() {
        let names = |id: &str| -> Vec<&str> { template_slots(id).iter().map(|s| s.name).collect() };
        assert_eq!(names("fraction"), ["numerator", "denominator"]);
        assert_eq!(names("nthroot"), ["index", "body"]);
        assert_eq!(names("power"), ["base", "exponent"]);
        assert_eq!(names("subscriptExpr"), ["base", "sub"]);
        assert_eq!(names("superSub"), ["base", "sub", "sup"]);
        assert_eq!(names("binom"), ["n", "k"]);
        assert_eq!(names("limit"), ["variable", "approaching", "body"]);
        assert_eq!(names("derivative"), ["function", "variable"]);
        assert_eq!(names("partialDerivative"), names("derivative"));
        assert_eq!(template_slots("limit")[0].default_value, "x");
    }

    #[test]
    fn test_every_template_shows_placeholder_per_slot() {
        let empty = SlotValues::new();
        for template in TEMPLATE_REGISTRY.iter() {
            let markup = compile_template(template.id, &empty);
            assert!(!markup.is_empty(), "{} compiled to nothing", template.id);
            assert_eq!(
                markup.matches(PLACEHOLDER).count(),
                template.slots.len(),
                "{} => {markup}",
                template.id
            );
        }
    }

    #[test]
    fn test_blank_slot_counts_as_empty() {
        let v = values(&[("body", "   ")]);
        assert_eq!(compile_template("sqrt", &v), "\\sqrt{\\square}");
    }

    #[test]
    fn test_summation_template() {
        let v = values(&[("lower", "i=1"), ("upper", "n"), ("body", "i^2")]);
        assert_eq!(
            compile_template("summation", &v),
            "\\displaystyle\\sum_{i=1}^{n} i^2"
        );
        let partial = values(&[("body", "a_i")]);
        assert_eq!(
            compile_template("product", &partial),
            "\\displaystyle\\prod_{\\square}^{\\square} a_i"
        );
    }

    #[test]
    fn test_integral_template_defaults() {
        let template = TEMPLATE_REGISTRY.lookup("integral").unwrap();
        let mut v = template.default_slot_values();
        assert_eq!(v.get("differential").map(String::as_str), Some("dx"));
        v.insert("lower".into(), "0".into());
        v.insert("upper".into(), "1".into());
        v.insert("body".into(), "x^2".into());
        assert_eq!(template.compile(&v), "\\displaystyle\\int_{0}^{1} x^2\\, dx");
    }

    #[test]
    fn test_function_templates() {
        let v = values(&[("variable", "n"), ("approaching", "0"), ("body", "a_n")]);
        assert_eq!(
            compile_template("limit", &v),
            "\\displaystyle\\lim_{n \\to 0} a_n"
        );
        let v = values(&[("function", "y"), ("variable", "t")]);
        assert_eq!(compile_template("derivative", &v), "\\dfrac{dy}{dt}");
        assert_eq!(
            compile_template("partialDerivative", &v),
            "\\dfrac{\\partial y}{\\partial t}"
        );
    }

    #[test]
    fn test_structure_templates() {
        let v = values(&[("index", "3"), ("body", "8")]);
        assert_eq!(compile_template("nthroot", &v), "\\sqrt[3]{8}");
        let v = values(&[("base", "x"), ("sub", "i"), ("sup", "2")]);
        assert_eq!(compile_template("superSub", &v), "{x}_{i}^{2}");
        let v = values(&[("n", "n"), ("k", "k")]);
        assert_eq!(compile_template("binom", &v), "\\dbinom{n}{k}");
        let v = values(&[("body", "x")]);
        assert_eq!(compile_template("abs", &v), "\\left|x\\right|");
        assert_eq!(compile_template("bracket", &v), "\\left[x\\right]");
        assert_eq!(compile_template("bar", &v), "\\overline{x}");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let v = values(&[("lower", "k=0"), ("body", "x^k")]);
        assert_eq!(
            compile_template("summation", &v),
            compile_template("summation", &v)
        );
    }

    #[test]
    fn test_registry_catalog() {
        assert_eq!(TEMPLATE_REGISTRY.len(), 21);
        assert_eq!(templates().next().map(|t| t.id), Some("summation"));
        let operators: Vec<_> = templates_in(TemplateCategory::Operator)
            .map(|t| t.id)
            .collect();
        assert_eq!(
            operators,
            ["summation", "product", "integral", "union", "intersection"]
        );
        assert!(TEMPLATE_REGISTRY.lookup("limit").unwrap().is_large_operator);
        assert!(!TEMPLATE_REGISTRY.lookup("fraction").unwrap().is_large_operator);
        assert_eq!(template_slots("binom").len(), 2);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = TemplateRegistry::new();
        let base = *TEMPLATE_REGISTRY.lookup("hat").unwrap();
        registry.register(base);
        registry.register(Template {
            name: "Caret",
            ..base
        });
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("hat").unwrap().name, "Caret");
    }
}
