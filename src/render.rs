//! README rendering through Handlebars.

use std::path::Path;

use handlebars::Handlebars;

use crate::context::RenderContext;
use crate::error::Result;

/// Built-in template, embedded at compile time.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.md");

/// Output file name, relative to the working directory.
pub const README_PATH: &str = "README.md";

/// Render the context through the given template file, or the built-in
/// default. HTML escaping is off: the output is Markdown and markdown-
/// sensitive values are escaped upstream.
pub fn build_readme(context: &RenderContext, template_path: Option<&Path>) -> Result<String> {
    let template = match template_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string("readme", template)?;
    Ok(registry.render("readme", context)?)
}

/// Write the rendered README into `dir`, overwriting any existing one.
pub fn write_readme(dir: &Path, content: &str) -> Result<()> {
    std::fs::write(dir.join(README_PATH), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn context_with(entries: &[(&str, Value)]) -> RenderContext {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn renders_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("custom.md");
        std::fs::write(&template_path, "# {{projectName}}\n{{projectDescription}}\n").unwrap();

        let context = context_with(&[
            ("projectName", Value::String("my-tool".into())),
            ("projectDescription", Value::String("does things".into())),
        ]);

        let readme = build_readme(&context, Some(&template_path)).unwrap();
        assert_eq!(readme, "# my-tool\ndoes things\n");
    }

    #[test]
    fn values_are_not_html_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("custom.md");
        std::fs::write(&template_path, "{{usage}}").unwrap();

        let context = context_with(&[("usage", Value::String("foo < bar > baz".into()))]);
        let readme = build_readme(&context, Some(&template_path)).unwrap();
        assert_eq!(readme, "foo < bar > baz");
    }

    #[test]
    fn default_template_compiles_and_hides_empty_sections() {
        let context = context_with(&[
            ("projectName", Value::String("my-tool".into())),
            ("isGithubRepos", Value::Bool(false)),
            ("repositoryUrl", Value::Null),
            ("projectPrerequisites", Value::Null),
            ("isProjectOnNpm", Value::Bool(false)),
        ]);

        let readme = build_readme(&context, None).unwrap();
        assert!(readme.contains("my-tool"));
        // No install command answered, so no install section.
        assert!(!readme.contains("## Install"));
    }

    #[test]
    fn writes_readme_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_readme(dir.path(), "# hello\n").unwrap();

        let written = std::fs::read_to_string(dir.path().join(README_PATH)).unwrap();
        assert_eq!(written, "# hello\n");
    }
}
