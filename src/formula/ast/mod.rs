// Expression tree for math blocks
//
// A `MathAst` is an owned tree: composite variants hold their children in
// `Box`es, leaves hold opaque markup fragments. The tree is what gets stored
// in a note, compiled to LaTeX by `formula::latex`, and edited through
// `MathBuilder`.

mod types;
mod node;
mod builder;

pub use types::*;
pub use node::MathAst;
pub(crate) use node::check_grid;
pub use builder::{BuilderMode, BuilderTab, MathBuilder};
