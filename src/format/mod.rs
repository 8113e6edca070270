// src/format/mod.rs

//! The sectioned recipes-file format
//!
//! A recipes file is UTF-8 text where three literal marker lines divide
//! each record into its name, ingredients, and instructions:
//!
//! ```text
//! [Recept]
//! Pancakes
//! [Ingredienser]
//! 2;dl;flour
//! 1;pcs;egg
//! [Instruktioner]
//! Mix
//! Fry
//! ```
//!
//! Records repeat back to back. Blank lines are permitted anywhere and
//! ignored. Markers match exactly, case-sensitive, with no surrounding
//! whitespace: a line like `" [Recept]"` is content, not a marker.
//! Input accepts both `\n` and `\r\n` line endings; output always uses
//! `\n`.
//!
//! # Limitations
//!
//! - Ingredient fields are joined with `;` and never escaped, so an
//!   ingredient containing a semicolon will not survive a round trip.
//! - A name or instruction line that happens to equal a marker string
//!   is indistinguishable from the marker itself.
//! - A record with an empty name serializes to a blank name line, which
//!   the parser then skips; such a record does not survive a round trip.

mod parser;
mod writer;

pub use parser::{parse, parse_file};
pub use writer::serialize;

use thiserror::Error;

/// Marker line opening the name section of a record
pub const SECTION_RECIPE: &str = "[Recept]";

/// Marker line opening the ingredients section
pub const SECTION_INGREDIENTS: &str = "[Ingredienser]";

/// Marker line opening the instructions section
pub const SECTION_INSTRUCTIONS: &str = "[Instruktioner]";

/// A line that violates the section-relative grammar
///
/// Line numbers are 1-based and count every physical line, blank lines
/// included, so they match what an editor shows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: content before any section marker")]
    ContentBeforeMarker { line: usize },

    #[error("line {line}: ingredient has {found} field(s), expected amount;measure;name")]
    IngredientFieldCount { line: usize, found: usize },

    #[error("line {line}: no [Recept] record opened before this line")]
    NoCurrentRecipe { line: usize },
}

impl FormatError {
    /// The 1-based line the violation was found on
    pub fn line(&self) -> usize {
        match self {
            FormatError::ContentBeforeMarker { line } => *line,
            FormatError::IngredientFieldCount { line, .. } => *line,
            FormatError::NoCurrentRecipe { line } => *line,
        }
    }
}
