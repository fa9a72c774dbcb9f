//! Error types for readme-gen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Remote lookup failures never appear here: the npm and GitHub probes
/// degrade to `false`/`None` locally (a missing remote answer is not an
/// error for a README generator). A malformed `config.json` on the other
/// hand is fatal, so a corrupt answer cache never goes unnoticed.
#[derive(Debug, Error)]
pub enum Error {
    /// `config.json` exists but is not a valid JSON object.
    #[error("config file {path} is not valid JSON: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    #[error("failed to compile template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, Error>;
