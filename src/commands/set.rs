//! Set command: persist key=value answers into config.json.

use anyhow::Result;
use console::style;

use crate::config;

/// Options for the set command.
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Raw `key=value` tokens from the command line.
    pub pairs: Vec<String>,
}

/// Execute the set command. Invalid tokens are dropped silently; whatever
/// valid pairs were found are written.
pub fn execute_set(options: SetOptions) -> Result<()> {
    let config_path = std::env::current_dir()?.join(config::CONFIG_PATH);
    let updated = config::apply_updates(&config_path, &options.pairs)?;

    println!(
        "{} Updated {}",
        style("✓").green(),
        config_path.display()
    );
    for (key, value) in &updated {
        println!("    {} = {}", style(key).cyan(), value);
    }
    Ok(())
}
