//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sf_core::ParserConfig;
use std::io::Read;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Resolve the parser configuration.
///
/// An explicit `--config` must exist; otherwise `schemaforge.yml` in
/// `dir` is used when present, falling back to the defaults.
pub(crate) fn load_config(global: &GlobalArgs, dir: &Path) -> Result<ParserConfig> {
    if let Some(path) = &global.config {
        return ParserConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path));
    }

    let has_project_config = ["schemaforge.yml", "schemaforge.yaml"]
        .iter()
        .any(|name| dir.join(name).exists());
    if has_project_config {
        return ParserConfig::load_from_dir(dir)
            .with_context(|| format!("Failed to load config from {}", dir.display()));
    }

    log::debug!("No schemaforge.yml in {}, using defaults", dir.display());
    Ok(ParserConfig::default())
}

/// Read SQL text from a file path, or stdin for `-`
pub(crate) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut sql = String::new();
        std::io::stdin()
            .read_to_string(&mut sql)
            .context("Failed to read SQL from stdin")?;
        return Ok(sql);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read SQL file: {}", input))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
