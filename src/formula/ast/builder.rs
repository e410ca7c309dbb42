// Form state for assembling expressions without writing markup

use super::node::MathAst;
use super::types::Orientation;
use crate::formula::latex::to_markup;

const DEFAULT_MATRIX_SIZE: usize = 2;
const DEFAULT_VECTOR_SIZE: usize = 3;
const DEFAULT_INTEGRAL_VARIABLE: &str = "x";

/// Whether the builder creates a new block or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderMode {
    #[default]
    Create,
    Edit,
}

/// Builder page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderTab {
    #[default]
    Matrices,
    Vectors,
    Symbols,
    Calculus,
    Templates,
}

/// Plain-data state behind the math builder.
///
/// Holds one form per expression family. Nothing here renders or reacts
/// to input; callers mutate the fields through the methods below and ask
/// for an AST when the user confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct MathBuilder {
    pub mode: BuilderMode,
    pub editing_block_id: Option<String>,
    pub active_tab: BuilderTab,
    current_ast: Option<MathAst>,

    matrix_rows: usize,
    matrix_cols: usize,
    matrix_cells: Vec<Vec<String>>,

    vector_orientation: Orientation,
    vector_cells: Vec<String>,

    pub fraction_numerator: String,
    pub fraction_denominator: String,
    pub exponent_base: String,
    pub exponent_power: String,
    pub subscript_base: String,
    pub subscript_value: String,

    pub integral_body: String,
    pub integral_from: String,
    pub integral_to: String,
    pub integral_variable: String,
}

impl MathBuilder {
    pub fn new() -> Self {
        Self {
            mode: BuilderMode::Create,
            editing_block_id: None,
            active_tab: BuilderTab::Matrices,
            current_ast: None,
            matrix_rows: DEFAULT_MATRIX_SIZE,
            matrix_cols: DEFAULT_MATRIX_SIZE,
            matrix_cells: empty_grid(DEFAULT_MATRIX_SIZE, DEFAULT_MATRIX_SIZE),
            vector_orientation: Orientation::Column,
            vector_cells: vec![String::new(); DEFAULT_VECTOR_SIZE],
            fraction_numerator: String::new(),
            fraction_denominator: String::new(),
            exponent_base: String::new(),
            exponent_power: String::new(),
            subscript_base: String::new(),
            subscript_value: String::new(),
            integral_body: String::new(),
            integral_from: String::new(),
            integral_to: String::new(),
            integral_variable: DEFAULT_INTEGRAL_VARIABLE.to_string(),
        }
    }

    pub fn set_active_tab(&mut self, tab: BuilderTab) {
        self.active_tab = tab;
    }

    #[inline]
    pub fn matrix_size(&self) -> (usize, usize) {
        (self.matrix_rows, self.matrix_cols)
    }

    #[inline]
    pub fn matrix_cells(&self) -> &[Vec<String>] {
        &self.matrix_cells
    }

    #[inline]
    pub fn vector_cells(&self) -> &[String] {
        &self.vector_cells
    }

    #[inline]
    pub fn vector_orientation(&self) -> Orientation {
        self.vector_orientation
    }

    /// Resize the matrix grid, keeping cells that fit in the new shape
    pub fn set_matrix_size(&mut self, rows: usize, cols: usize) {
        self.matrix_cells.resize_with(rows, Vec::new);
        for row in &mut self.matrix_cells {
            row.resize_with(cols, String::new);
        }
        self.matrix_rows = rows;
        self.matrix_cols = cols;
    }

    /// Set one matrix cell; writes outside the grid are ignored
    pub fn update_matrix_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if let Some(cell) = self
            .matrix_cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
        {
            *cell = value.into();
        }
    }

    pub fn build_matrix_ast(&self) -> MathAst {
        MathAst::Matrix {
            rows: self.matrix_rows,
            cols: self.matrix_cols,
            cells: self.matrix_cells.clone(),
        }
    }

    /// Resize the vector, keeping the leading cells
    pub fn set_vector_size(&mut self, size: usize) {
        self.vector_cells.resize_with(size, String::new);
    }

    /// Set one vector cell; writes past the end are ignored
    pub fn update_vector_cell(&mut self, index: usize, value: impl Into<String>) {
        if let Some(cell) = self.vector_cells.get_mut(index) {
            *cell = value.into();
        }
    }

    pub fn toggle_vector_orientation(&mut self) {
        self.vector_orientation = self.vector_orientation.toggled();
    }

    pub fn build_vector_ast(&self) -> MathAst {
        MathAst::Vector {
            orientation: self.vector_orientation,
            cells: self.vector_cells.clone(),
        }
    }

    /// Build the expression for the active tab.
    ///
    /// The templates tab yields the first of fraction, exponent and subscript
    /// with any field filled in. The symbols tab never yields an AST since
    /// symbols are inserted directly.
    pub fn build_current_ast(&self) -> Option<MathAst> {
        match self.active_tab {
            BuilderTab::Matrices => Some(self.build_matrix_ast()),
            BuilderTab::Vectors => Some(self.build_vector_ast()),
            BuilderTab::Templates => self.build_template_ast(),
            BuilderTab::Calculus => Some(MathAst::Integral {
                body: self.integral_body.clone(),
                from: non_empty(&self.integral_from),
                to: non_empty(&self.integral_to),
                d: Some(self.integral_variable.clone()),
            }),
            BuilderTab::Symbols => None,
        }
    }

    fn build_template_ast(&self) -> Option<MathAst> {
        if !self.fraction_numerator.is_empty() || !self.fraction_denominator.is_empty() {
            Some(MathAst::fraction(
                self.fraction_numerator.as_str(),
                self.fraction_denominator.as_str(),
            ))
        } else if !self.exponent_base.is_empty() || !self.exponent_power.is_empty() {
            Some(MathAst::exponent(
                self.exponent_base.as_str(),
                self.exponent_power.as_str(),
            ))
        } else if !self.subscript_base.is_empty() || !self.subscript_value.is_empty() {
            Some(MathAst::subscript(
                self.subscript_base.as_str(),
                self.subscript_value.as_str(),
            ))
        } else {
            None
        }
    }

    /// Start editing an existing math block
    pub fn enter_edit_mode(&mut self, block_id: impl Into<String>, ast: MathAst) {
        self.mode = BuilderMode::Edit;
        self.editing_block_id = Some(block_id.into());
        self.load_ast(&ast);
        self.current_ast = Some(ast);
    }

    /// Leave edit mode and clear every form
    pub fn exit_edit_mode(&mut self) {
        self.mode = BuilderMode::Create;
        self.editing_block_id = None;
        self.current_ast = None;
        self.reset();
    }

    /// Copy an AST into the form that can edit it and switch to that tab.
    ///
    /// Kinds without a form (symbols, operators, wrappers, leaves) leave the
    /// builder unchanged.
    pub fn load_ast(&mut self, ast: &MathAst) {
        match ast {
            MathAst::Matrix { rows, cols, cells } => {
                self.active_tab = BuilderTab::Matrices;
                self.matrix_rows = *rows;
                self.matrix_cols = *cols;
                self.matrix_cells = cells.clone();
            },
            MathAst::Vector { orientation, cells } => {
                self.active_tab = BuilderTab::Vectors;
                self.vector_orientation = *orientation;
                self.vector_cells = cells.clone();
            },
            MathAst::Fraction {
                numerator,
                denominator,
            } => {
                self.active_tab = BuilderTab::Templates;
                self.fraction_numerator = numerator.clone();
                self.fraction_denominator = denominator.clone();
            },
            MathAst::Exponent { base, exponent } => {
                self.active_tab = BuilderTab::Templates;
                self.exponent_base = base.clone();
                self.exponent_power = exponent.clone();
            },
            MathAst::Subscript { base, subscript } => {
                self.active_tab = BuilderTab::Templates;
                self.subscript_base = base.clone();
                self.subscript_value = subscript.clone();
            },
            MathAst::Integral { body, from, to, d } => {
                self.active_tab = BuilderTab::Calculus;
                self.integral_body = body.clone();
                self.integral_from = from.clone().unwrap_or_default();
                self.integral_to = to.clone().unwrap_or_default();
                self.integral_variable = d
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INTEGRAL_VARIABLE.to_string());
            },
            _ => {},
        }
    }

    /// Restore every form to its initial state.
    ///
    /// Mode, editing block and active tab are kept.
    pub fn reset(&mut self) {
        *self = Self {
            mode: self.mode,
            editing_block_id: self.editing_block_id.take(),
            active_tab: self.active_tab,
            current_ast: self.current_ast.take(),
            ..Self::new()
        };
    }

    /// AST shown in the preview: the active form, or the block being
    /// edited when the form cannot represent it
    pub fn preview_ast(&self) -> Option<MathAst> {
        self.build_current_ast().or_else(|| self.current_ast.clone())
    }

    /// Markup of the preview AST, empty when there is nothing to show
    pub fn current_markup(&self) -> String {
        self.preview_ast()
            .map(|ast| to_markup(&ast))
            .unwrap_or_default()
    }
}

impl Default for MathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_grid(rows: usize, cols: usize) -> Vec<Vec<String>> {
    vec![vec![String::new(); cols]; rows]
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::ast::{BinaryOp, NodeKind};

    #[test]
    fn test_defaults() {
        let builder = MathBuilder::new();
        assert_eq!(builder.mode, BuilderMode::Create);
        assert_eq!(builder.active_tab, BuilderTab::Matrices);
        assert_eq!(builder.matrix_size(), (2, 2));
        assert_eq!(builder.vector_cells().len(), 3);
        assert_eq!(builder.vector_orientation(), Orientation::Column);
        assert_eq!(builder.integral_variable, "x");
    }

    #[test]
    fn test_matrix_resize_preserves_overlap() {
        let mut builder = MathBuilder::new();
        builder.update_matrix_cell(0, 0, "a");
        builder.update_matrix_cell(1, 1, "d");
        builder.set_matrix_size(3, 1);
        assert_eq!(builder.matrix_size(), (3, 1));
        assert_eq!(builder.matrix_cells(), [vec!["a"], vec![""], vec![""]]);

        builder.set_matrix_size(2, 3);
        assert_eq!(builder.matrix_cells(), [vec!["a", "", ""], vec!["", "", ""]]);
        assert!(builder.build_matrix_ast().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_writes_ignored() {
        let mut builder = MathBuilder::new();
        builder.update_matrix_cell(5, 0, "x");
        builder.update_matrix_cell(0, 5, "x");
        builder.update_vector_cell(3, "x");
        assert_eq!(builder, MathBuilder::new());
    }

    #[test]
    fn test_vector_builder() {
        let mut builder = MathBuilder::new();
        builder.set_vector_size(2);
        builder.update_vector_cell(0, "1");
        builder.update_vector_cell(1, "2");
        builder.toggle_vector_orientation();
        assert_eq!(
            builder.build_vector_ast(),
            MathAst::row_vector(vec!["1".into(), "2".into()])
        );
        builder.set_vector_size(4);
        assert_eq!(builder.vector_cells(), ["1", "2", "", ""]);
    }

    #[test]
    fn test_build_current_ast_per_tab() {
        let mut builder = MathBuilder::new();
        builder.set_active_tab(BuilderTab::Symbols);
        assert_eq!(builder.build_current_ast(), None);

        builder.set_active_tab(BuilderTab::Templates);
        assert_eq!(builder.build_current_ast(), None);
        builder.exponent_base = "x".into();
        builder.subscript_base = "y".into();
        assert_eq!(builder.build_current_ast(), Some(MathAst::exponent("x", "")));
        builder.fraction_denominator = "2".into();
        assert_eq!(builder.build_current_ast(), Some(MathAst::fraction("", "2")));

        builder.set_active_tab(BuilderTab::Calculus);
        builder.integral_body = "f(x)".into();
        builder.integral_to = "1".into();
        assert_eq!(
            builder.build_current_ast(),
            Some(MathAst::Integral {
                body: "f(x)".into(),
                from: None,
                to: Some("1".into()),
                d: Some("x".into()),
            })
        );
    }

    #[test]
    fn test_edit_mode_round_trip() {
        let ast = MathAst::Integral {
            body: "e^t".into(),
            from: Some("0".into()),
            to: Some("T".into()),
            d: None,
        };
        let mut builder = MathBuilder::new();
        builder.enter_edit_mode("block-1", ast);
        assert_eq!(builder.mode, BuilderMode::Edit);
        assert_eq!(builder.editing_block_id.as_deref(), Some("block-1"));
        assert_eq!(builder.active_tab, BuilderTab::Calculus);
        assert_eq!(builder.integral_variable, "x");
        assert_eq!(builder.current_markup(), "\\int_{0}^{T} e^t \\, dx");

        builder.exit_edit_mode();
        assert_eq!(builder.mode, BuilderMode::Create);
        assert_eq!(builder.editing_block_id, None);
        assert_eq!(builder.integral_body, "");
    }

    #[test]
    fn test_load_matrix_switches_tab() {
        let mut builder = MathBuilder::new();
        builder.set_active_tab(BuilderTab::Calculus);
        builder.load_ast(&MathAst::matrix(vec![vec!["1".into(), "2".into(), "3".into()]]));
        assert_eq!(builder.active_tab, BuilderTab::Matrices);
        assert_eq!(builder.matrix_size(), (1, 3));
    }

    #[test]
    fn test_edit_unsupported_kind_previews_loaded_ast() {
        let ast = MathAst::op(BinaryOp::Plus, MathAst::number("1"), MathAst::number("2"));
        assert_eq!(ast.kind(), NodeKind::Operator);
        let mut builder = MathBuilder::new();
        builder.set_active_tab(BuilderTab::Symbols);
        builder.enter_edit_mode("b", ast);
        assert_eq!(builder.active_tab, BuilderTab::Symbols);
        assert_eq!(builder.current_markup(), "1 + 2");
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut builder = MathBuilder::new();
        builder.enter_edit_mode("b", MathAst::fraction("1", "2"));
        builder.reset();
        assert_eq!(builder.mode, BuilderMode::Edit);
        assert_eq!(builder.active_tab, BuilderTab::Templates);
        assert_eq!(builder.fraction_numerator, "");
        assert_eq!(builder.build_current_ast(), None);
    }

    #[test]
    fn test_current_markup_empty_without_ast() {
        let mut builder = MathBuilder::new();
        builder.set_active_tab(BuilderTab::Symbols);
        assert_eq!(builder.current_markup(), "");
    }
}
