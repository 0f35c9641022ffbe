//! Add command - attach a subcommand stub to an initialized project

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use cobble::{project, Config};

pub fn execute(
    name: String,
    parent: String,
    license_id: Option<String>,
    author: Option<String>,
    config_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = match &config_file {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(license_id) = license_id {
        config.license = license_id;
    }
    if let Some(author) = author {
        config.author = author;
    }

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let path = project::add_command(&name, &parent, &cwd, &config)?;

    let shown = path.strip_prefix(&cwd).unwrap_or(&path);
    println!(
        "✨ {} created at {}",
        name,
        shown.display().to_string().green()
    );

    Ok(())
}
