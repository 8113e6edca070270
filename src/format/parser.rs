// src/format/parser.rs

//! Single-pass parser for the sectioned recipes format
//!
//! The scan is a four-state machine. `classify` decides what one line
//! means under the current state without touching anything, and `parse`
//! folds the resulting events into records. Parsing is I/O-free; the
//! file wrapper lives in [`parse_file`].

use std::path::Path;

use tracing::debug;

use super::{
    FormatError, SECTION_INGREDIENTS, SECTION_INSTRUCTIONS, SECTION_RECIPE,
};
use crate::recipe::{Ingredient, Recipe};

/// How the next content line will be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    /// Before any marker has been seen
    Indefinite,
    /// Content lines open new records
    Name,
    /// Content lines are semicolon-split ingredients
    Ingredient,
    /// Content lines are verbatim instructions
    Instruction,
}

/// The meaning of one line under the current state
#[derive(Debug, PartialEq, Eq)]
enum LineEvent {
    /// Empty line, skipped wherever it appears
    Blank,
    /// Marker line, moves the scan into a new state
    Enter(ReadState),
    /// Name-section content: opens a new record
    Begin(String),
    /// Ingredients-section content
    AddIngredient(Ingredient),
    /// Instructions-section content, kept verbatim
    AddInstruction(String),
}

/// Classify a single line relative to the current state
///
/// Pure function: the fold in [`parse`] applies the event. `number` is
/// the 1-based line number used in errors.
fn classify(state: ReadState, line: &str, number: usize) -> Result<LineEvent, FormatError> {
    // Only a fully empty line counts as blank; whitespace is content.
    if line.is_empty() {
        return Ok(LineEvent::Blank);
    }

    match line {
        SECTION_RECIPE => return Ok(LineEvent::Enter(ReadState::Name)),
        SECTION_INGREDIENTS => return Ok(LineEvent::Enter(ReadState::Ingredient)),
        SECTION_INSTRUCTIONS => return Ok(LineEvent::Enter(ReadState::Instruction)),
        _ => {}
    }

    match state {
        ReadState::Indefinite => Err(FormatError::ContentBeforeMarker { line: number }),
        ReadState::Name => Ok(LineEvent::Begin(line.to_string())),
        ReadState::Ingredient => {
            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() != 3 {
                return Err(FormatError::IngredientFieldCount {
                    line: number,
                    found: fields.len(),
                });
            }
            Ok(LineEvent::AddIngredient(Ingredient::new(
                fields[0], fields[1], fields[2],
            )))
        }
        ReadState::Instruction => Ok(LineEvent::AddInstruction(line.to_string())),
    }
}

/// Parse a whole recipes file from a string
///
/// Returns the records in file order; sorting is the repository's
/// concern, not the parser's. Fails on the first grammar violation
/// without yielding a partial result.
pub fn parse(input: &str) -> Result<Vec<Recipe>, FormatError> {
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut state = ReadState::Indefinite;

    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        match classify(state, line, number)? {
            LineEvent::Blank => {}
            LineEvent::Enter(next) => state = next,
            LineEvent::Begin(name) => recipes.push(Recipe::new(name)),
            LineEvent::AddIngredient(ingredient) => {
                let recipe = recipes
                    .last_mut()
                    .ok_or(FormatError::NoCurrentRecipe { line: number })?;
                recipe.add_ingredient(ingredient);
            }
            LineEvent::AddInstruction(text) => {
                let recipe = recipes
                    .last_mut()
                    .ok_or(FormatError::NoCurrentRecipe { line: number })?;
                recipe.add_instruction(text);
            }
        }
    }

    Ok(recipes)
}

/// Parse a recipes file from disk
pub fn parse_file(path: &Path) -> crate::Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)?;
    let recipes = parse(&content)?;
    debug!("parsed {} recipe(s) from {}", recipes.len(), path.display());
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_recipe() {
        let input = "\
[Recept]
Pancakes
[Ingredienser]
2;dl;flour
1;pcs;egg
[Instruktioner]
Mix
Fry
";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes.len(), 1);

        let recipe = &recipes[0];
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0], Ingredient::new("2", "dl", "flour"));
        assert_eq!(recipe.ingredients[1], Ingredient::new("1", "pcs", "egg"));
        assert_eq!(recipe.instructions, vec!["Mix", "Fry"]);
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let input = "\
[Recept]
Waffles
[Ingredienser]
3;dl;milk
[Instruktioner]
Whisk
[Recept]
Bread
[Ingredienser]
500;g;flour
[Instruktioner]
Knead
";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Waffles");
        assert_eq!(recipes[1].name, "Bread");
    }

    #[test]
    fn test_blank_lines_skipped_anywhere() {
        let input = "\

[Recept]

Pancakes

[Ingredienser]

2;dl;flour

[Instruktioner]

Mix

";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Pancakes");
        assert_eq!(recipes[0].ingredients.len(), 1);
        assert_eq!(recipes[0].instructions, vec!["Mix"]);
    }

    #[test]
    fn test_crlf_input_accepted() {
        let input = "[Recept]\r\nPancakes\r\n[Ingredienser]\r\n2;dl;flour\r\n[Instruktioner]\r\nMix\r\n";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes[0].name, "Pancakes");
        assert_eq!(recipes[0].ingredients[0].measure, "dl");
    }

    #[test]
    fn test_empty_input_yields_no_recipes() {
        assert_eq!(parse("").unwrap(), Vec::new());
        assert_eq!(parse("\n\n\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_content_before_marker_fails() {
        let err = parse("Pancakes\n").unwrap_err();
        assert_eq!(err, FormatError::ContentBeforeMarker { line: 1 });
    }

    #[test]
    fn test_ingredient_with_two_fields_fails() {
        let input = "\
[Recept]
Pancakes
[Ingredienser]
2;cups
";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err,
            FormatError::IngredientFieldCount { line: 4, found: 2 }
        );
    }

    #[test]
    fn test_ingredient_with_four_fields_fails() {
        let input = "\
[Recept]
Pancakes
[Ingredienser]
2;dl;wheat;flour
";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err,
            FormatError::IngredientFieldCount { line: 4, found: 4 }
        );
    }

    #[test]
    fn test_ingredient_before_any_recipe_fails() {
        let input = "\
[Ingredienser]
2;dl;flour
";
        let err = parse(input).unwrap_err();
        assert_eq!(err, FormatError::NoCurrentRecipe { line: 2 });
    }

    #[test]
    fn test_instruction_before_any_recipe_fails() {
        let input = "\
[Instruktioner]
Mix
";
        let err = parse(input).unwrap_err();
        assert_eq!(err, FormatError::NoCurrentRecipe { line: 2 });
    }

    #[test]
    fn test_marker_with_whitespace_is_content() {
        // " [Recept]" does not match the marker, so with no state set it
        // is a stray content line.
        let err = parse(" [Recept]\n").unwrap_err();
        assert_eq!(err, FormatError::ContentBeforeMarker { line: 1 });
    }

    #[test]
    fn test_second_name_line_opens_second_record() {
        // The name section stays open until the next marker, so another
        // content line starts another record.
        let input = "\
[Recept]
Pancakes
Waffles
[Ingredienser]
3;dl;milk
";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Pancakes");
        assert!(recipes[0].ingredients.is_empty());
        assert_eq!(recipes[1].name, "Waffles");
        assert_eq!(recipes[1].ingredients.len(), 1);
    }

    #[test]
    fn test_whitespace_only_line_is_a_name() {
        // Only a fully empty line is blank; two spaces make a legal
        // (if odd) recipe name.
        let input = "[Recept]\n  \n";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "  ");
    }

    #[test]
    fn test_empty_ingredient_fields_are_legal() {
        let input = "\
[Recept]
Stock
[Ingredienser]
;;water
";
        let recipes = parse(input).unwrap();
        assert_eq!(recipes[0].ingredients[0], Ingredient::new("", "", "water"));
    }

    #[test]
    fn test_error_line_numbers_count_blanks() {
        let input = "\
[Recept]
Pancakes

[Ingredienser]
bad-line
";
        let err = parse(input).unwrap_err();
        assert_eq!(
            err,
            FormatError::IngredientFieldCount { line: 5, found: 1 }
        );
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[Recept]\nToast\n[Ingredienser]\n2;slices;bread\n[Instruktioner]\nToast it\n").unwrap();

        let recipes = parse_file(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Toast");
    }

    #[test]
    fn test_parse_file_missing_path_is_io_error() {
        let err = parse_file(Path::new("/nonexistent/recipes.txt")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
