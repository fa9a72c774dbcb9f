//! Generate command: prompt for answers and write README.md.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;

use crate::{answers, config, context, project, questions, remote, render};

const END_MSG: &str = "README.md was successfully generated.\nThanks for using readme-gen!";

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Custom template file; the built-in template is used when absent.
    pub template_path: Option<PathBuf>,
    /// Skip prompting and answer every question with its default.
    pub use_default_answers: bool,
}

/// Execute the generate command.
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let spinner = step_spinner("Gathering project information...");
    let mut info = project::detect(&cwd);
    if let Some(username) = info.github_username.clone() {
        spinner.set_message("Looking up author profile...");
        info.author_website = remote::author_website_from_github(&username);
    }
    spinner.finish_and_clear();

    let config_path = cwd.join(config::CONFIG_PATH);
    let cached_answers = if config::exists(&config_path) {
        config::read(&config_path).context("reading answer cache")?
    } else {
        BTreeMap::new()
    };

    let catalog = questions::build(&info);
    let resolved = answers::resolve(catalog, &cached_answers, options.use_default_answers)?;

    let spinner = step_spinner("Building README...");
    let render_context = context::assemble(&info, &resolved);
    let readme = render::build_readme(&render_context, options.template_path.as_deref())?;
    render::write_readme(&cwd, &readme)?;
    spinner.finish_and_clear();

    show_end_message();
    Ok(())
}

fn step_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Completion banner, boxed and centered like the rest of the tool's
/// status output.
fn show_end_message() {
    let inner = END_MSG
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let horizontal = "═".repeat(inner);

    println!();
    println!("{}", style(format!("╔{horizontal}╗")).cyan());
    for line in END_MSG.lines() {
        println!("{}", style(format!("║{line:^inner$}║")).cyan());
    }
    println!("{}", style(format!("╚{horizontal}╝")).cyan());
}
