//! Module context detection - discovers enclosing `go.mod` / `go.work`
//!
//! Walks from a starting directory toward the filesystem root and stops
//! at the first directory carrying either marker. Within one directory a
//! `go.work` outranks a `go.mod`, so a module nested in a workspace is
//! attributed to the workspace only when its own directory carries both.
//!
//! # Example
//! ```no_run
//! use cobble::module;
//!
//! let context = module::resolve(std::path::Path::new("/home/user/src/app"))?;
//! if context.in_workspace {
//!     println!("workspace members: {:?}", context.members);
//! }
//! # Ok::<(), cobble::ScaffoldError>(())
//! ```

mod internal;

pub use internal::{Fs, ModuleContext, OsFs};

use crate::error::Result;
use std::path::Path;

/// Resolve the module context for `start` against the real filesystem.
pub fn resolve(start: &Path) -> Result<ModuleContext> {
    internal::resolve_with(&OsFs, start)
}

/// Resolve the module context through a caller-provided filesystem probe.
pub fn resolve_with(fs: &dyn Fs, start: &Path) -> Result<ModuleContext> {
    internal::resolve_with(fs, start)
}

/// Register a new member in the workspace's `go.work` by appending a
/// `use ./<member>` directive. `member` is a path relative to the
/// workspace root, forward-slashed.
pub fn register_member(workspace_root: &Path, member: &str) -> Result<()> {
    internal::register_member(workspace_root, member)
}
