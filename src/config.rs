//! Answer cache persisted as a flat `config.json` in the working directory.
//!
//! The config file is a plain JSON object mapping a closed set of answer
//! keys to string values. It is read on every generate run (values found
//! there win over prompting entirely) and rewritten as a whole by the
//! `set` command.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Fixed location of the answer cache, relative to the working directory.
pub const CONFIG_PATH: &str = "config.json";

/// Keys the config file may contain. Anything else is dropped on write.
pub const VALID_KEYS: [&str; 10] = [
    "authorGithubUsername",
    "authorLinkedInUsername",
    "authorName",
    "authorPatreonUsername",
    "authorTwitterUsername",
    "authorWebsite",
    "devToProfileName",
    "installCommand",
    "mediumProfileUserName",
    "packageManager",
];

/// Characters removed from `set` tokens before validation. Only the first
/// occurrence of each character is removed, matching the historical
/// behavior; `va!l!ue` keeps one `!`.
const DISALLOWED_CHARS: [char; 5] = ['"', '\'', '!', '@', '&'];

/// True iff a regular file is present at `path`. Filesystem errors count
/// as "does not exist".
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Read the config file as a flat string map.
///
/// A present-but-malformed file is a fatal [`Error::MalformedConfig`]; a
/// corrupt answer cache must be visible, not silently ignored.
pub fn read(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::MalformedConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize the full mapping and overwrite the file.
pub fn write(path: &Path, config: &BTreeMap<String, String>) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Apply `key=value` tokens to the config file and return the result.
///
/// Invalid tokens (no `=`, unknown key, empty value) are dropped one by
/// one without failing the command. Keys are matched against
/// [`VALID_KEYS`] case-insensitively and stored with their original
/// casing.
pub fn apply_updates(path: &Path, raw_pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut config = if exists(path) {
        read(path)?
    } else {
        BTreeMap::new()
    };

    for token in raw_pairs {
        let Some(eq) = token.find('=') else {
            tracing::debug!("ignoring token without '=': {token}");
            continue;
        };
        let key = strip_disallowed(token[..eq].trim());
        let value = strip_disallowed(token[eq + 1..].trim());

        let recognized = VALID_KEYS
            .iter()
            .any(|valid| valid.eq_ignore_ascii_case(&key));
        if recognized && !value.is_empty() {
            config.insert(key, value);
        } else {
            tracing::debug!("ignoring config pair: {token}");
        }
    }

    write(path, &config)?;
    Ok(config)
}

/// Remove the first occurrence of each disallowed character.
fn strip_disallowed(input: &str) -> String {
    let mut out = input.to_string();
    for c in DISALLOWED_CHARS {
        if let Some(idx) = out.find(c) {
            out.remove(idx);
        }
    }
    out
}
