// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipes file path
fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("PATH")
        .help("Path to the recipes file")
}

fn build_cli() -> Command {
    Command::new("kokbok")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Kokbok Project")
        .about("A recipe box backed by a plain text file")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Create a starter recipes file")
                .arg(file_arg())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(clap::ArgAction::SetTrue)
                        .help("Overwrite an existing file"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List recipe names with their indexes")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one recipe, or page through all of them")
                .arg(Arg::new("selector").help("Recipe to show: a 0-based index or an exact name"))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(clap::ArgAction::SetTrue)
                        .help("Show every recipe"),
                )
                .arg(
                    Arg::new("no_pause")
                        .long("no-pause")
                        .action(clap::ArgAction::SetTrue)
                        .help("Do not prompt between recipes"),
                )
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a recipe and save the file")
                .arg(
                    Arg::new("selector")
                        .required(true)
                        .help("Recipe to delete: a 0-based index or an exact name"),
                )
                .arg(
                    Arg::new("dry_run")
                        .long("dry-run")
                        .action(clap::ArgAction::SetTrue)
                        .help("Show what would be deleted without changing the file"),
                )
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the recipes file and report whether it is well-formed")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("kokbok.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
