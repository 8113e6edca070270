// src/commands.rs
//! Command handlers for the kokbok CLI

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::info;

use kokbok::{paths, render, serialize, Ingredient, Recipe, Repository};

use crate::cli::Cli;

fn resolve_file(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(paths::default_recipes_file)
}

fn load_repository(file: Option<PathBuf>) -> Result<Repository> {
    let path = resolve_file(file);
    let mut repository = Repository::new(&path);
    repository
        .load()
        .with_context(|| format!("could not load recipes from {}", path.display()))?;
    Ok(repository)
}

/// Resolve a selector argument to a position in the collection
///
/// A selector that parses as a number is tried as a 0-based index
/// first, then as an exact name, so a recipe literally named "3" stays
/// reachable while plain indexes behave as expected.
fn resolve_selector(repository: &Repository, selector: &str) -> Result<usize> {
    if let Ok(index) = selector.parse::<usize>() {
        if index < repository.len() {
            return Ok(index);
        }
    }
    if let Some(position) = repository
        .get_all()
        .iter()
        .position(|recipe| recipe.name == selector)
    {
        return Ok(position);
    }
    bail!(
        "no recipe matches '{}' (run 'kokbok list' to see indexes and names)",
        selector
    );
}

fn starter_recipes() -> String {
    let mut pancakes = Recipe::new("Pancakes");
    pancakes.add_ingredient(Ingredient::new("2", "dl", "flour"));
    pancakes.add_ingredient(Ingredient::new("3", "dl", "milk"));
    pancakes.add_ingredient(Ingredient::new("1", "pcs", "egg"));
    pancakes.add_instruction("Whisk flour and milk into a smooth batter");
    pancakes.add_instruction("Beat in the egg");
    pancakes.add_instruction("Fry thin pancakes in butter, one ladle at a time");
    serialize(&[pancakes])
}

/// Create a starter recipes file
pub fn cmd_init(file: Option<PathBuf>, force: bool) -> Result<()> {
    let path = resolve_file(file);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
    }

    info!("Writing starter recipes file to: {}", path.display());
    std::fs::write(&path, starter_recipes())
        .with_context(|| format!("could not write {}", path.display()))?;
    println!("Created {} with one starter recipe", path.display());
    Ok(())
}

/// List recipe names with their indexes
pub fn cmd_list(file: Option<PathBuf>) -> Result<()> {
    let repository = load_repository(file)?;
    if repository.is_empty() {
        println!("No recipes in {}", repository.path().display());
        return Ok(());
    }

    for (index, recipe) in repository.get_all().iter().enumerate() {
        println!("{:>3}  {}", index, recipe.name);
    }
    Ok(())
}

/// Show one recipe, or page through all of them
pub fn cmd_show(
    selector: Option<String>,
    all: bool,
    no_pause: bool,
    file: Option<PathBuf>,
) -> Result<()> {
    let repository = load_repository(file)?;
    let mut stdout = io::stdout();

    if all {
        let recipes = repository.get_all();
        if no_pause || !io::stdin().is_terminal() {
            render::render_all(&mut stdout, &recipes, || true)?;
        } else {
            render::render_all(&mut stdout, &recipes, prompt_continue)?;
        }
        return Ok(());
    }

    let Some(selector) = selector else {
        bail!("specify a recipe (index or name) or --all");
    };
    let index = resolve_selector(&repository, &selector)?;
    let recipe = repository.get_at(index)?;
    render::render_recipe(&mut stdout, &recipe)?;
    Ok(())
}

/// Ask whether to keep paging; any answer but q/quit continues
fn prompt_continue() -> bool {
    print!("Press Enter for the next recipe (q quits): ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) => false,
        Ok(_) => !input.trim().eq_ignore_ascii_case("q"),
        Err(_) => false,
    }
}

/// Delete a recipe and save the file
pub fn cmd_delete(selector: &str, dry_run: bool, file: Option<PathBuf>) -> Result<()> {
    let mut repository = load_repository(file)?;
    let index = resolve_selector(&repository, selector)?;
    let recipe = repository.get_at(index)?;

    if dry_run {
        println!("Would delete '{}' (index {})", recipe.name, index);
        return Ok(());
    }

    info!("Deleting recipe '{}' (index {})", recipe.name, index);
    repository.delete_at(index)?;
    repository
        .save()
        .with_context(|| format!("could not save {}", repository.path().display()))?;
    println!(
        "Deleted '{}' from {}",
        recipe.name,
        repository.path().display()
    );
    Ok(())
}

/// Parse the recipes file and report whether it is well-formed
pub fn cmd_check(file: Option<PathBuf>) -> Result<()> {
    let path = resolve_file(file);
    let recipes = kokbok::parse_file(&path)
        .with_context(|| format!("{} is not well-formed", path.display()))?;

    let ingredients: usize = recipes.iter().map(|r| r.ingredients.len()).sum();
    let instructions: usize = recipes.iter().map(|r| r.instructions.len()).sum();
    println!("{}: OK", path.display());
    println!(
        "  {} recipe(s), {} ingredient(s), {} instruction line(s)",
        recipes.len(),
        ingredients,
        instructions
    );
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
