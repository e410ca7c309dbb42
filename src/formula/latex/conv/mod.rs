// Conversion logic module
//
// This module contains the core conversion logic from expression trees to
// LaTeX, split into the converter, node dispatch and matrix layout.

pub mod converter;
pub mod matrix;
pub mod node;
pub mod utils;
