//! Skeleton file generation - renders embedded templates into Go sources
//!
//! Templates live in `resources/templates/` and are compiled in with
//! `include_str!`. Handlebars runs in strict mode with HTML escaping
//! disabled, and the templates contain nothing but plain substitutions,
//! so generated files are byte-predictable for the golden tests.

mod internal;

pub use internal::CommandStub;

use crate::license::License;
use crate::project::Project;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Write the project skeleton (LICENSE, main.go, cmd/root.go) under
/// `project.absolute_path`, creating directories as needed. Skips the
/// LICENSE file when the project's license is "none".
pub fn create_project(project: &Project) -> Result<()> {
    internal::create_project(project)
}

/// Write `cmd/<name>.go` for a new subcommand and return its path.
pub fn create_command(project_root: &Path, stub: &CommandStub) -> Result<PathBuf> {
    internal::create_command(project_root, stub)
}

/// Compose the comment block at the top of every generated Go file: the
/// copyright line, then the license header when one exists.
pub fn file_header(copyright: &str, legal: &License) -> String {
    internal::file_header(copyright, legal)
}
