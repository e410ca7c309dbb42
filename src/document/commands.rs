//! Insert commands offered by the command palette.

use super::element::Element;

/// Palette grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Insert,
    Symbol,
}

impl CommandCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Symbol => "symbol",
        }
    }
}

/// What a command inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Matrix of empty cells; vectors are single-column matrices
    InsertMatrix { rows: usize, cols: usize },
    InsertSymbol {
        value: &'static str,
        display: &'static str,
    },
}

/// A palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub action: CommandAction,
}

impl Command {
    const fn matrix(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category: CommandCategory::Insert,
            action: CommandAction::InsertMatrix { rows, cols },
        }
    }

    const fn symbol(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        display: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category: CommandCategory::Symbol,
            action: CommandAction::InsertSymbol {
                value: name,
                display,
            },
        }
    }

    /// Element this command inserts
    pub fn element(&self) -> Element {
        match self.action {
            CommandAction::InsertMatrix { rows, cols } => Element::empty_matrix(rows, cols),
            CommandAction::InsertSymbol { value, display } => {
                Element::symbol(value, Some(display.to_string()))
            },
        }
    }

    /// Insert the command's element right after index `after`.
    ///
    /// `after` is clamped to the sequence, so an out-of-range index appends.
    /// Returns the index of the inserted element.
    pub fn apply(&self, elements: &mut Vec<Element>, after: usize) -> usize {
        let index = after.saturating_add(1).min(elements.len());
        elements.insert(index, self.element());
        index
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.category.as_str().contains(query)
    }
}

/// Every palette command, in display order
pub static COMMANDS: &[Command] = &[
    Command::matrix("insert-matrix-2x2", "matrix 2×2", "Insert a 2×2 matrix", 2, 2),
    Command::matrix("insert-matrix-2x3", "matrix 2×3", "Insert a 2×3 matrix", 2, 3),
    Command::matrix("insert-matrix-3x2", "matrix 3×2", "Insert a 3×2 matrix", 3, 2),
    Command::matrix("insert-matrix-3x3", "matrix 3×3", "Insert a 3×3 matrix", 3, 3),
    Command::matrix("insert-matrix-4x4", "matrix 4×4", "Insert a 4×4 matrix", 4, 4),
    Command::matrix("insert-vector-2", "vector 2D", "Insert a 2D column vector", 2, 1),
    Command::matrix("insert-vector-3", "vector 3D", "Insert a 3D column vector", 3, 1),
    Command::matrix("insert-vector-4", "vector 4D", "Insert a 4D column vector", 4, 1),
    // Greek letters
    Command::symbol("symbol-alpha", "alpha", "Insert α symbol", "α"),
    Command::symbol("symbol-beta", "beta", "Insert β symbol", "β"),
    Command::symbol("symbol-gamma", "gamma", "Insert γ symbol", "γ"),
    Command::symbol("symbol-delta", "delta", "Insert δ symbol", "δ"),
    Command::symbol("symbol-theta", "theta", "Insert θ symbol", "θ"),
    Command::symbol("symbol-lambda", "lambda", "Insert λ symbol", "λ"),
    Command::symbol("symbol-pi", "pi", "Insert π symbol", "π"),
    // Operators
    Command::symbol("symbol-sigma", "sigma", "Insert Σ (summation) symbol", "Σ"),
    Command::symbol("symbol-integral", "integral", "Insert ∫ (integral) symbol", "∫"),
    Command::symbol("symbol-sqrt", "sqrt", "Insert √ (square root) symbol", "√"),
];

/// Look up a command by id
pub fn command(id: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.id == id)
}

/// Commands whose name, description or category contains `query`,
/// ignoring case. An empty query matches everything.
pub fn filter_commands(query: &str) -> Vec<&'static Command> {
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }
    let query = query.to_lowercase();
    COMMANDS.iter().filter(|cmd| cmd.matches(&query)).collect()
}
