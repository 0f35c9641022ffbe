//! Project initialization - descriptor building and skeleton creation
//!
//! The entry point is [`initialize_project`]: validate the target name,
//! resolve the enclosing module context, build a [`Project`] descriptor,
//! refuse conflicting or occupied targets, then hand the descriptor to
//! the generator and register the new member when a workspace encloses
//! it. Failures during generation clean up the partially written target.
//!
//! # Example
//! ```no_run
//! use cobble::{project, Config};
//!
//! let config = Config::default();
//! let created = project::initialize_project(
//!     &["myapp".to_string()],
//!     std::path::Path::new("/home/user/src"),
//!     &config,
//! )?;
//! println!("created {}", created.display());
//! # Ok::<(), cobble::ScaffoldError>(())
//! ```

mod internal;

pub use internal::Project;

use crate::config::Config;
use crate::error::Result;
use crate::module::ModuleContext;
use std::path::{Path, PathBuf};

/// Build a [`Project`] descriptor for `name` under `cwd` without touching
/// the filesystem. `cwd` must be absolute.
pub fn build(name: &str, cwd: &Path, context: &ModuleContext, config: &Config) -> Result<Project> {
    internal::build(name, cwd, context, config)
}

/// Create a project skeleton for `args[0]` under `cwd` and return the
/// created directory. Registers the project in an enclosing `go.work`
/// workspace when one governs `cwd`.
pub fn initialize_project(args: &[String], cwd: &Path, config: &Config) -> Result<PathBuf> {
    internal::initialize_project(args, cwd, config)
}

/// Add a subcommand stub `cmd/<name>.go` to an initialized project and
/// return the written path.
pub fn add_command(
    name: &str,
    parent: &str,
    project_root: &Path,
    config: &Config,
) -> Result<PathBuf> {
    internal::add_command(name, parent, project_root, config)
}
