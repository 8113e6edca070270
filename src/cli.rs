// src/cli.rs
//! CLI definitions for the kokbok recipe box
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "kokbok")]
#[command(author = "Kokbok Project")]
#[command(version)]
#[command(about = "A recipe box backed by a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter recipes file
    Init {
        /// Path to the recipes file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List recipe names with their indexes
    List {
        /// Path to the recipes file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show one recipe, or page through all of them
    Show {
        /// Recipe to show: a 0-based index or an exact name
        selector: Option<String>,

        /// Show every recipe
        #[arg(long, conflicts_with = "selector")]
        all: bool,

        /// Do not prompt between recipes (for piping)
        #[arg(long)]
        no_pause: bool,

        /// Path to the recipes file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete a recipe and save the file
    Delete {
        /// Recipe to delete: a 0-based index or an exact name
        selector: String,

        /// Show what would be deleted without changing the file
        #[arg(long)]
        dry_run: bool,

        /// Path to the recipes file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Parse the recipes file and report whether it is well-formed
    Check {
        /// Path to the recipes file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
