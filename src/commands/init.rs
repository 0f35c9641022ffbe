//! Init command - create a new cobra application skeleton

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use cobble::{module, project, Config};

pub fn execute(
    name: String,
    license_id: Option<String>,
    author: Option<String>,
    viper: bool,
    pkg_name: Option<String>,
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
    if viper {
        config.use_viper = true;
    }
    if pkg_name.is_some() {
        config.pkg_name = pkg_name;
    }

    println!("🔨 Initializing cobra application: {}", name.cyan());

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let context = module::resolve(&cwd)?;

    let args = vec![name];
    let created = project::initialize_project(&args, &cwd, &config)?;
    let descriptor = project::build(&args[0], &cwd, &context, &config)?;

    if !descriptor.legal.is_none() {
        println!("  ✓ Created LICENSE ({})", descriptor.legal.name);
    }
    println!("  ✓ Created main.go");
    println!("  ✓ Created cmd/root.go");
    if context.in_workspace {
        println!("  ✓ Registered {} in go.work", descriptor.app_name);
    } else if let Some(module_name) = &context.module_name {
        println!("  ✓ Detected enclosing Go module {module_name}");
    }

    println!(
        "\n✨ Application '{}' is ready at {}",
        descriptor.app_name,
        created.display().to_string().green()
    );
    println!("\nNext steps:");
    match created.strip_prefix(&cwd) {
        Ok(rel) => println!("  cd {}", rel.display()),
        Err(_) => println!("  cd {}", created.display()),
    }
    // inside a workspace or an existing module the tree already has an
    // identity; only a free-standing project needs go mod init
    if !context.in_workspace && context.module_root.is_none() {
        println!("  go mod init {}", descriptor.pkg_name);
    }
    println!("  go mod tidy");
    println!("  go run . --help");

    Ok(())
}
