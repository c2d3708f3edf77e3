use crate::domain::model::Recipe;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "ingredients.txt";

/// Writes a recipe's ingredient list as plain text under `base_path`.
#[derive(Debug, Clone)]
pub struct RecipeFilePersister {
    base_path: PathBuf,
}

impl RecipeFilePersister {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Truncates or creates `file_name` and writes the ingredients to it.
    pub fn save(&self, recipe: &Recipe, file_name: &str) -> Result<PathBuf> {
        let full_path = self.base_path.join(file_name);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&full_path)?);
        write_ingredients(&mut writer, recipe)?;
        writer.flush()?;

        tracing::debug!(
            "Wrote {} ingredient lines to {}",
            recipe.ingredient_lines.len(),
            full_path.display()
        );
        Ok(full_path)
    }

    pub fn save_default(&self, recipe: &Recipe) -> Result<PathBuf> {
        self.save(recipe, DEFAULT_FILE_NAME)
    }
}

fn write_ingredients<W: Write>(out: &mut W, recipe: &Recipe) -> std::io::Result<()> {
    writeln!(out, "Ingredients for {}:", recipe.label)?;
    for line in &recipe.ingredient_lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
