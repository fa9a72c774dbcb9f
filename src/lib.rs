#![forbid(unsafe_code)]

//! # readme-gen
//!
//! Interactive README generator. Collects project metadata through
//! prompts (or defaults), caches answers in a `config.json`, and renders
//! the result through a Handlebars template.
//!
//! ## Pipeline
//!
//! 1. [`project::detect`] gathers facts from `package.json`, git metadata
//!    and lock files.
//! 2. [`questions::build`] produces the ordered question catalog.
//! 3. [`answers::resolve`] merges config-file values, defaults and
//!    interactive answers (config wins).
//! 4. [`context::assemble`] builds the render context, including the npm
//!    availability probe.
//! 5. [`render::build_readme`] renders it and the result is written to
//!    `README.md`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//!
//! fn main() -> anyhow::Result<()> {
//!     let info = readme_gen::project::detect(std::path::Path::new("."));
//!     let catalog = readme_gen::questions::build(&info);
//!     let answers = readme_gen::answers::resolve(catalog, &BTreeMap::new(), true)?;
//!     let context = readme_gen::context::assemble(&info, &answers);
//!     let readme = readme_gen::render::build_readme(&context, None)?;
//!     println!("{readme}");
//!     Ok(())
//! }
//! ```

pub mod answers;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod project;
pub mod questions;
pub mod remote;
pub mod render;
pub mod text;

// Re-exports
pub use answers::{resolve, Answer, AnswerSet};
pub use context::{assemble, RenderContext};
pub use error::{Error, Result};
pub use project::{detect, PackageManager, ProjectInfo};
pub use questions::{Choice, DefaultValue, Question, QuestionKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
