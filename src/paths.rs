// src/paths.rs
//! Centralized path derivation for the recipes file

use std::path::PathBuf;

/// Resolve the default recipes file location
///
/// `KOKBOK_FILE` overrides everything; otherwise the file lives in the
/// platform data directory, falling back to the current directory when
/// the platform reports none.
pub fn default_recipes_file() -> PathBuf {
    std::env::var("KOKBOK_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir().join("recipes.txt"))
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kokbok")
}
