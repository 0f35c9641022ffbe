//! License registry for generated projects
//!
//! Licenses are embedded at compile time from `resources/licenses/`. Each
//! entry carries the short header placed in Go file comments and the full
//! body written to `LICENSE`. Bodies may contain a `{{copyright}}` hole
//! that the generator fills; the Apache body keeps its canonical bracket
//! placeholders untouched, matching common practice.

use crate::error::{Result, ScaffoldError};

const APACHE_TEXT: &str = include_str!("../resources/licenses/apache-2.0.txt");
const APACHE_HEADER: &str = include_str!("../resources/licenses/apache-2.0.header.txt");
const MIT_TEXT: &str = include_str!("../resources/licenses/mit.txt");
const MIT_HEADER: &str = include_str!("../resources/licenses/mit.header.txt");
const BSD3_TEXT: &str = include_str!("../resources/licenses/bsd-3.txt");
const BSD3_HEADER: &str = include_str!("../resources/licenses/bsd-3.header.txt");

/// A resolved license choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    /// Display name, e.g. "Apache 2.0".
    pub name: String,
    /// Comment-header text, without trailing newline. Empty for "none".
    pub header: String,
    /// Full LICENSE body. Empty for "none", meaning no LICENSE file.
    pub text: String,
}

impl License {
    /// The explicit "no license" choice. No LICENSE file is written and
    /// file headers carry only the copyright line.
    pub fn none() -> Self {
        Self {
            name: "None".to_string(),
            header: String::new(),
            text: String::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.text.is_empty()
    }
}

/// Look up a license by a user-supplied identifier.
///
/// Matching is forgiving: case, spaces, hyphens, underscores and dots are
/// ignored, so "Apache-2.0", "apache 2.0" and "APACHE20" all resolve to
/// the same entry. Unknown identifiers are an argument error, never a
/// silent fallback.
pub fn find(id: &str) -> Result<License> {
    match normalize(id).as_str() {
        "" | "none" => Ok(License::none()),
        "apache" | "apache2" | "apache20" => Ok(License {
            name: "Apache 2.0".to_string(),
            header: APACHE_HEADER.trim_end().to_string(),
            text: APACHE_TEXT.to_string(),
        }),
        "mit" => Ok(License {
            name: "MIT".to_string(),
            header: MIT_HEADER.trim_end().to_string(),
            text: MIT_TEXT.to_string(),
        }),
        "bsd" | "bsd3" | "3clausebsd" | "bsd3clause" => Ok(License {
            name: "BSD 3-Clause".to_string(),
            header: BSD3_HEADER.trim_end().to_string(),
            text: BSD3_TEXT.to_string(),
        }),
        _ => Err(ScaffoldError::argument(format!(
            "unknown license '{id}' (expected apache, mit, bsd-3, or none)"
        ))),
    }
}

fn normalize(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .collect::<String>()
        .to_lowercase()
}
