// src/repository.rs

//! The authoritative recipe collection
//!
//! `Repository` owns the single in-memory source of truth for one
//! recipes file. Callers never get references into it: reads hand out
//! independent clones, and the only mutation is record removal. A
//! modified flag tracks divergence from the file: it is set by delete,
//! cleared by a successful load or save, and save is a no-op while it
//! is clear.
//!
//! Change observers registered with [`Repository::on_change`] run
//! synchronously on the calling thread, in registration order, after
//! every successful load and delete. Failed operations never notify.
//!
//! Load is all-or-nothing: the file is parsed completely before the
//! collection is replaced, so an I/O or format error leaves the
//! previous contents (and the modified flag) untouched.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::format;
use crate::recipe::Recipe;

type ChangeCallback = Box<dyn Fn() + Send>;

/// In-memory recipe collection backed by one recipes file
pub struct Repository {
    /// The backing file, fixed at construction
    path: PathBuf,

    /// Authoritative records, name-sorted after each load
    recipes: Vec<Recipe>,

    /// True iff memory has diverged from the file since the last
    /// successful load or save
    modified: bool,

    /// Change observers, run in registration order
    observers: Vec<ChangeCallback>,
}

impl Repository {
    /// Create an empty repository for the given recipes file
    ///
    /// The file is not touched until [`load`](Self::load) or
    /// [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recipes: Vec::new(),
            modified: false,
            observers: Vec::new(),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// True iff the collection has unsaved changes
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Register a change observer
    ///
    /// Observers run synchronously after every successful load and
    /// delete, in registration order, with no payload.
    pub fn on_change(&mut self, callback: impl Fn() + Send + 'static) {
        self.observers.push(Box::new(callback));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer();
        }
    }

    /// Replace the collection with the file's contents
    ///
    /// Records are sorted by name (ascending byte order; the sort is
    /// stable, so records with equal names keep file order). Clears the
    /// modified flag and notifies observers. On error the collection is
    /// left exactly as it was and no notification fires.
    pub fn load(&mut self) -> Result<()> {
        let mut recipes = format::parse_file(&self.path)?;
        recipes.sort_by(|a, b| a.name.cmp(&b.name));

        self.recipes = recipes;
        self.modified = false;
        debug!(
            "loaded {} recipe(s) from {}",
            self.recipes.len(),
            self.path.display()
        );
        self.notify();
        Ok(())
    }

    /// Write the collection back to the file if it has changed
    ///
    /// A no-op returning success while the modified flag is clear. The
    /// write goes to a temporary file in the target directory and is
    /// renamed into place, so a failed save never truncates the
    /// recipes file. A successful save clears the modified flag; a
    /// failed one leaves it set so a retry still writes.
    pub fn save(&mut self) -> Result<()> {
        if !self.modified {
            debug!("collection unchanged, skipping save");
            return Ok(());
        }

        let content = format::serialize(&self.recipes);
        self.write_atomic(content.as_bytes())?;
        self.modified = false;
        debug!(
            "saved {} recipe(s) to {}",
            self.recipes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Independent copies of every record, in authoritative order
    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    /// Independent copy of the record at `index`
    pub fn get_at(&self, index: usize) -> Result<Recipe> {
        self.recipes
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.recipes.len(),
            })
    }

    /// Position of the first stored record value-equal to `recipe`
    ///
    /// This is the one place a caller's copy is resolved back to a
    /// stored record; two content-identical records resolve to the
    /// earlier position, deterministically.
    pub fn find(&self, recipe: &Recipe) -> Option<usize> {
        self.recipes.iter().position(|stored| stored == recipe)
    }

    /// Remove the stored record matching `recipe` (typically a copy
    /// from [`get_all`](Self::get_all) or [`get_at`](Self::get_at))
    pub fn delete(&mut self, recipe: &Recipe) -> Result<()> {
        let index = self
            .find(recipe)
            .ok_or_else(|| Error::NotFound(recipe.name.clone()))?;
        self.delete_at(index)
    }

    /// Remove the record at `index`
    ///
    /// Sets the modified flag and notifies observers after the removal
    /// is applied.
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        if index >= self.recipes.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.recipes.len(),
            });
        }

        let removed = self.recipes.remove(index);
        self.modified = true;
        debug!("deleted recipe '{}'", removed.name);
        self.notify();
        Ok(())
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path)
            .field("recipes", &self.recipes.len())
            .field("modified", &self.modified)
            .field("observers", &self.observers.len())
            .finish()
    }
}
