//! Shared helpers for the golden-file test suite

use cobble::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed configuration behind the golden fixtures. The pinned year
/// keeps generated copyright headers byte-stable.
pub fn golden_config() -> Config {
    Config {
        author: "NAME HERE <EMAIL ADDRESS>".to_string(),
        license: "apache".to_string(),
        use_viper: true,
        pkg_prefix: "github.com/spf13".to_string(),
        pkg_name: None,
        year: Some(2022),
    }
}

pub fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

/// Byte-compare a generated file against a golden fixture, reporting the
/// first differing line on mismatch.
pub fn compare_files(generated: &Path, golden: &Path) {
    let got = fs::read_to_string(generated)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", generated.display()));
    let want = fs::read_to_string(golden)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", golden.display()));
    if got == want {
        return;
    }
    for (number, (got_line, want_line)) in got.lines().zip(want.lines()).enumerate() {
        assert_eq!(
            got_line,
            want_line,
            "{} differs from {} at line {}",
            generated.display(),
            golden.display(),
            number + 1
        );
    }
    panic!(
        "{} differs from {} in length ({} vs {} bytes)",
        generated.display(),
        golden.display(),
        got.len(),
        want.len()
    );
}
