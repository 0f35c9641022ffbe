use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "cobble", author, version = env!("CARGO_PKG_VERSION"), about = "Scaffolding for cobra-style Go CLI applications", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.cobble/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new cobra application
    Init {
        /// Project name; may be a relative path like tools/mycli
        name: String,

        /// License to embed (apache, mit, bsd-3, none)
        #[arg(short, long)]
        license: Option<String>,

        /// Author for copyright headers
        #[arg(short, long)]
        author: Option<String>,

        /// Wire viper configuration support into the root command
        #[arg(long)]
        viper: bool,

        /// Explicit Go package path, overriding the configured prefix
        #[arg(long)]
        pkg_name: Option<String>,
    },

    /// Add a subcommand stub to an initialized application
    Add {
        /// Command name, e.g. serve or user-list
        name: String,

        /// Parent command the stub registers itself under
        #[arg(short, long, default_value = "root")]
        parent: String,

        /// License to embed (apache, mit, bsd-3, none)
        #[arg(short, long)]
        license: Option<String>,

        /// Author for copyright headers
        #[arg(short, long)]
        author: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            name,
            license,
            author,
            viper,
            pkg_name,
        } => {
            commands::init::execute(name, license, author, viper, pkg_name, cli.config)?;
        }
        Commands::Add {
            name,
            parent,
            license,
            author,
        } => {
            commands::add::execute(name, parent, license, author, cli.config)?;
        }
    }

    Ok(())
}
