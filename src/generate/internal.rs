//! Internal implementation for skeleton generation

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::license::License;
use crate::project::Project;

const MAIN_TMPL: &str = include_str!("../../resources/templates/main.go.tmpl");
const ROOT_TMPL: &str = include_str!("../../resources/templates/root.go.tmpl");
const ROOT_VIPER_TMPL: &str = include_str!("../../resources/templates/root_viper.go.tmpl");
const COMMAND_TMPL: &str = include_str!("../../resources/templates/command.go.tmpl");

// =============================================================================
// Template Engine
// =============================================================================

fn engine() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("main.go", MAIN_TMPL)
        .context("Failed to register main.go template")?;
    handlebars
        .register_template_string("root.go", ROOT_TMPL)
        .context("Failed to register root.go template")?;
    handlebars
        .register_template_string("root_viper.go", ROOT_VIPER_TMPL)
        .context("Failed to register root_viper.go template")?;
    handlebars
        .register_template_string("command.go", COMMAND_TMPL)
        .context("Failed to register command.go template")?;
    Ok(handlebars)
}

// =============================================================================
// Project Skeleton
// =============================================================================

pub fn create_project(project: &Project) -> Result<()> {
    let root = &project.absolute_path;
    fs::create_dir_all(root.join("cmd"))
        .with_context(|| format!("Failed to create project directory: {}", root.display()))?;

    let handlebars = engine()?;
    let data = json!({
        "file_header": file_header(&project.copyright, &project.legal),
        "pkg_name": project.pkg_name,
        "app_name": project.app_name,
        "copyright": project.copyright,
    });

    if !project.legal.is_none() {
        let text = handlebars
            .render_template(&project.legal.text, &data)
            .context("Failed to render LICENSE")?;
        write_file(&root.join("LICENSE"), &text)?;
    }

    let main_go = handlebars
        .render("main.go", &data)
        .context("Failed to render main.go")?;
    write_file(&root.join("main.go"), &main_go)?;

    // viper support is a different root command, not a conditional block
    let root_template = if project.use_viper {
        "root_viper.go"
    } else {
        "root.go"
    };
    let root_go = handlebars
        .render(root_template, &data)
        .context("Failed to render cmd/root.go")?;
    write_file(&root.join("cmd").join("root.go"), &root_go)?;

    Ok(())
}

// =============================================================================
// Subcommand Stubs
// =============================================================================

/// Everything the command template needs, precomputed by the caller.
#[derive(Debug, Clone)]
pub struct CommandStub {
    /// Command name as typed on the CLI, e.g. "user-list".
    pub name: String,
    /// Go variable name, e.g. "userListCmd".
    pub var: String,
    /// Go variable the stub registers itself under, e.g. "rootCmd".
    pub parent_var: String,
    /// Rendered comment block for the top of the file.
    pub file_header: String,
}

pub fn create_command(project_root: &Path, stub: &CommandStub) -> Result<PathBuf> {
    let handlebars = engine()?;
    let data = json!({
        "file_header": stub.file_header,
        "cmd_name": stub.name,
        "cmd_var": stub.var,
        "parent_var": stub.parent_var,
    });
    let rendered = handlebars
        .render("command.go", &data)
        .with_context(|| format!("Failed to render cmd/{}.go", stub.name))?;

    let path = project_root.join("cmd").join(format!("{}.go", stub.name));
    write_file(&path, &rendered)?;
    Ok(path)
}

// =============================================================================
// Helpers
// =============================================================================

pub fn file_header(copyright: &str, legal: &License) -> String {
    if legal.header.is_empty() {
        format!("/*\n{copyright}\n*/")
    } else {
        format!("/*\n{copyright}\n\n{}\n*/", legal.header)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::license;
    use crate::module::ModuleContext;
    use crate::project;
    use tempfile::TempDir;

    fn sample_project(root: &Path, use_viper: bool) -> Project {
        let config = Config {
            author: "Jane Doe <jane@example.com>".to_string(),
            license: "mit".to_string(),
            use_viper,
            pkg_prefix: "example.com/jane".to_string(),
            pkg_name: None,
            year: Some(2024),
        };
        project::build("demo", root, &ModuleContext::default(), &config).unwrap()
    }

    #[test]
    fn test_create_project_writes_skeleton() {
        let tmp = TempDir::new().unwrap();
        let project = sample_project(tmp.path(), false);
        create_project(&project).unwrap();

        let main_go = fs::read_to_string(project.absolute_path.join("main.go")).unwrap();
        assert!(main_go.starts_with("/*\nCopyright © 2024 Jane Doe <jane@example.com>\n"));
        assert!(main_go.contains("import \"example.com/jane/demo/cmd\""));

        let root_go = fs::read_to_string(project.absolute_path.join("cmd/root.go")).unwrap();
        assert!(root_go.contains("Use:   \"demo\""));
        assert!(!root_go.contains("viper"));

        let license_text = fs::read_to_string(project.absolute_path.join("LICENSE")).unwrap();
        assert!(license_text.contains("Copyright © 2024 Jane Doe <jane@example.com>"));
        assert!(!license_text.contains("{{copyright}}"));
    }

    #[test]
    fn test_create_project_selects_viper_root() {
        let tmp = TempDir::new().unwrap();
        let project = sample_project(tmp.path(), true);
        create_project(&project).unwrap();

        let root_go = fs::read_to_string(project.absolute_path.join("cmd/root.go")).unwrap();
        assert!(root_go.contains("github.com/spf13/viper"));
        assert!(root_go.contains("viper.AutomaticEnv()"));
        assert!(root_go.contains(".demo"));
    }

    #[test]
    fn test_create_project_skips_license_for_none() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            license: "none".to_string(),
            ..Config::default()
        };
        let project =
            project::build("bare", tmp.path(), &ModuleContext::default(), &config).unwrap();
        create_project(&project).unwrap();

        assert!(!project.absolute_path.join("LICENSE").exists());
        let main_go = fs::read_to_string(project.absolute_path.join("main.go")).unwrap();
        assert!(main_go.starts_with("/*\nCopyright ©"));
    }

    #[test]
    fn test_create_command_renders_stub() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("cmd")).unwrap();
        let legal = license::find("none").unwrap();
        let stub = CommandStub {
            name: "serve".to_string(),
            var: "serveCmd".to_string(),
            parent_var: "rootCmd".to_string(),
            file_header: file_header("Copyright © 2024 Jane Doe", &legal),
        };

        let path = create_command(tmp.path(), &stub).unwrap();
        assert_eq!(path, tmp.path().join("cmd/serve.go"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("var serveCmd = &cobra.Command{"));
        assert!(content.contains("Use:   \"serve\""));
        assert!(content.contains("rootCmd.AddCommand(serveCmd)"));
    }
}
