// src/render.rs

//! Console presentation of recipe records
//!
//! Renders already-parsed records to any [`Write`] sink; nothing here
//! reads or mutates the repository. Paging through a sequence takes a
//! caller-supplied continue signal, so interactive prompting stays in
//! the command layer and tests can drive paging without a terminal.

use std::io::Write;

use crate::error::Result;
use crate::recipe::Recipe;

/// Minimum inner width of the title frame, in characters
const MIN_TITLE_WIDTH: usize = 38;

const SECTION_RULE: &str = "-----------------";

/// Render one recipe card: framed title, ingredients, instructions
pub fn render_recipe(out: &mut impl Write, recipe: &Recipe) -> Result<()> {
    let name_width = recipe.name.chars().count();
    let width = name_width.max(MIN_TITLE_WIDTH);
    let left = (width - name_width) / 2;
    let right = width - name_width - left;

    writeln!(out, "╔{}╗", "═".repeat(width))?;
    writeln!(
        out,
        "║{}{}{}║",
        " ".repeat(left),
        recipe.name,
        " ".repeat(right)
    )?;
    writeln!(out, "╚{}╝", "═".repeat(width))?;
    writeln!(out)?;

    writeln!(out, "Ingredienser")?;
    writeln!(out, "{SECTION_RULE}")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "{ingredient}")?;
    }
    writeln!(out)?;

    writeln!(out, "Gör såhär:")?;
    writeln!(out, "{SECTION_RULE}")?;
    for line in &recipe.instructions {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    Ok(())
}

/// Render a sequence of recipe cards, invoking `pause` between
/// consecutive cards
///
/// `pause` returns whether to continue; a `false` stops the paging
/// early with success. It is never invoked before the first card or
/// after the last.
pub fn render_all(
    out: &mut impl Write,
    recipes: &[Recipe],
    mut pause: impl FnMut() -> bool,
) -> Result<()> {
    for (position, recipe) in recipes.iter().enumerate() {
        if position > 0 && !pause() {
            return Ok(());
        }
        render_recipe(out, recipe)?;
    }
    Ok(())
}
