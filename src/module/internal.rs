//! Internal implementation for module context detection

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Filesystem Probe
// =============================================================================

/// Narrow filesystem capability used by the resolver, so tests can walk
/// synthetic directory trees without touching disk.
pub trait Fs {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Probe backed by the real filesystem.
pub struct OsFs;

impl Fs for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

// =============================================================================
// Module Context
// =============================================================================

/// What surrounds the working directory, as far as Go tooling is concerned.
///
/// Exactly one of three shapes: workspace (`in_workspace` with
/// `workspace_root` and `members` populated), standalone module
/// (`module_root` populated), or empty (nothing found up to the
/// filesystem root).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleContext {
    pub in_workspace: bool,
    pub workspace_root: Option<PathBuf>,
    /// Member names parsed from the workspace's `use` directives.
    pub members: BTreeSet<String>,
    pub module_root: Option<PathBuf>,
    /// Module path declared by the enclosing `go.mod`, when it parses.
    pub module_name: Option<String>,
}

pub fn resolve_with(fs: &dyn Fs, start: &Path) -> Result<ModuleContext> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let work = current.join("go.work");
        if fs.exists(&work) {
            let content = fs
                .read_to_string(&work)
                .map_err(|e| ScaffoldError::fs(&work, e))?;
            return Ok(ModuleContext {
                in_workspace: true,
                workspace_root: Some(current.to_path_buf()),
                members: parse_use_directives(&content),
                module_root: None,
                module_name: None,
            });
        }

        let module = current.join("go.mod");
        if fs.exists(&module) {
            let content = fs
                .read_to_string(&module)
                .map_err(|e| ScaffoldError::fs(&module, e))?;
            return Ok(ModuleContext {
                in_workspace: false,
                workspace_root: None,
                members: BTreeSet::new(),
                module_root: Some(current.to_path_buf()),
                module_name: parse_module_name(&content),
            });
        }

        dir = current.parent();
    }
    Ok(ModuleContext::default())
}

// =============================================================================
// go.work / go.mod Parsing
// =============================================================================

/// Extract member names from `use` directives, handling both the
/// single-line form (`use ./api`) and the parenthesized block form.
/// A member's name is the final segment of its use path.
fn parse_use_directives(content: &str) -> BTreeSet<String> {
    let mut members = BTreeSet::new();
    let mut in_block = false;
    for raw in content.lines() {
        let line = strip_line_comment(raw).trim();
        if in_block {
            if line == ")" {
                in_block = false;
            } else if !line.is_empty() {
                insert_member(&mut members, line);
            }
        } else if let Some(rest) = line.strip_prefix("use") {
            // "use" must be a whole word; "user ./x" is not a directive
            if !rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
                continue;
            }
            let rest = rest.trim();
            if rest == "(" {
                in_block = true;
            } else if !rest.is_empty() {
                insert_member(&mut members, rest);
            }
        }
    }
    members
}

fn insert_member(members: &mut BTreeSet<String>, directive: &str) {
    let cleaned = directive.trim().trim_matches('"');
    let name = cleaned
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    if !name.is_empty() && name != "." && name != ".." {
        members.insert(name.to_string());
    }
}

/// First `module` directive in a `go.mod`, if any.
fn parse_module_name(content: &str) -> Option<String> {
    for raw in content.lines() {
        let line = strip_line_comment(raw).trim();
        if let Some(rest) = line.strip_prefix("module") {
            if rest.starts_with(char::is_whitespace) {
                let name = rest.trim().trim_matches('"');
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

// =============================================================================
// Workspace Registration
// =============================================================================

pub fn register_member(workspace_root: &Path, member: &str) -> Result<()> {
    let work = workspace_root.join("go.work");
    let mut content = fs::read_to_string(&work).map_err(|e| ScaffoldError::fs(&work, e))?;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&format!("use ./{member}\n"));
    fs::write(&work, content).map_err(|e| ScaffoldError::fs(&work, e))
}
