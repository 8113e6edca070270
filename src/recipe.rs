// src/recipe.rs

//! Recipe data model
//!
//! `Recipe` and `Ingredient` are passive holders: the parser builds them
//! up line by line, the repository hands out clones, and nothing here
//! touches I/O. `Clone` produces a fully independent copy (all fields
//! are owned), and `PartialEq` is the value equality the repository uses
//! to re-locate a stored record from a caller's copy.

use std::fmt;

/// One ingredient line: amount, measure, and name
///
/// All three fields are free-form text; the file format allows any of
/// them to be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Quantity, e.g. "2" or "0.5"
    pub amount: String,

    /// Unit of measure, e.g. "dl" or "pcs"
    pub measure: String,

    /// What the ingredient is
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient from its three fields
    pub fn new(
        amount: impl Into<String>,
        measure: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            measure: measure.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    /// Human form: the non-empty fields joined by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.amount, &self.measure, &self.name] {
            if part.is_empty() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        Ok(())
    }
}

/// One named recipe: ordered ingredients and ordered instruction lines
///
/// Order is meaningful on both lists (steps build on each other), so
/// they always preserve file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Recipe name, the line following a `[Recept]` marker
    pub name: String,

    /// Ingredients in file order
    pub ingredients: Vec<Ingredient>,

    /// Instruction lines in file order, kept verbatim
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Start an empty recipe with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Append an ingredient (keeps file order)
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Append an instruction line (keeps file order)
    pub fn add_instruction(&mut self, line: impl Into<String>) {
        self.instructions.push(line.into());
    }
}
