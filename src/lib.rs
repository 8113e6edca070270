// src/lib.rs

//! Kokbok Recipe Box
//!
//! A small recipe collection backed by a flat, sectioned text file.
//!
//! # Architecture
//!
//! - File-first: the recipes file is the durable state, no databases
//! - One authoritative in-memory collection per file, name-sorted
//! - Reads hand out copies; delete is the only mutation
//! - A modified flag gates persistence; saves are atomic renames

mod error;
pub mod format;
pub mod paths;
pub mod recipe;
pub mod render;
pub mod repository;

pub use error::{Error, Result};
pub use format::{parse, parse_file, serialize, FormatError};
pub use recipe::{Ingredient, Recipe};
pub use repository::Repository;
