// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// A recipes file with three records, deliberately out of name order.
pub const PANTRY: &str = "\
[Recept]
Waffles
[Ingredienser]
3;dl;flour
3;dl;milk
2;pcs;eggs
[Instruktioner]
Whisk everything into a batter
Bake in a hot waffle iron
[Recept]
Bread
[Ingredienser]
500;g;flour
3;dl;water
1;packet;yeast
;;salt
[Instruktioner]
Knead
Let rise for an hour
Bake at 225 degrees
[Recept]
Pancakes
[Ingredienser]
2;dl;flour
1;pcs;egg
[Instruktioner]
Mix
Fry
";

/// Write the pantry fixture to a fresh recipes file.
///
/// Returns (TempDir, file path) - keep the TempDir alive to prevent cleanup.
pub fn setup_recipes_file() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("recipes.txt");
    std::fs::write(&path, PANTRY).unwrap();
    (temp_dir, path)
}
