// src/format/writer.rs

//! Serializer: the inverse of the parser
//!
//! Emits one block per record: recipe marker, name, ingredients marker,
//! the semicolon-joined ingredient lines, instructions marker, then the
//! instruction lines verbatim. No separator blanks between records; the
//! parser skips blank lines anyway.

use super::{SECTION_INGREDIENTS, SECTION_INSTRUCTIONS, SECTION_RECIPE};
use crate::recipe::Recipe;

/// Render a sequence of recipes into file contents
///
/// Output uses `\n` terminators regardless of platform. Ingredient
/// fields are joined with `;` and not escaped, so fields containing a
/// semicolon will not parse back to the same record.
pub fn serialize(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for recipe in recipes {
        push_recipe(&mut out, recipe);
    }
    out
}

fn push_recipe(out: &mut String, recipe: &Recipe) {
    out.push_str(SECTION_RECIPE);
    out.push('\n');
    out.push_str(&recipe.name);
    out.push('\n');

    out.push_str(SECTION_INGREDIENTS);
    out.push('\n');
    for ingredient in &recipe.ingredients {
        out.push_str(&ingredient.amount);
        out.push(';');
        out.push_str(&ingredient.measure);
        out.push(';');
        out.push_str(&ingredient.name);
        out.push('\n');
    }

    out.push_str(SECTION_INSTRUCTIONS);
    out.push('\n');
    for line in &recipe.instructions {
        out.push_str(line);
        out.push('\n');
    }
}
