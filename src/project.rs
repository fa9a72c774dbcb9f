//! Project fact detection.
//!
//! Builds a [`ProjectInfo`] snapshot from the working directory before any
//! prompting happens: `package.json` metadata, the git repository name and
//! the package manager implied by lock files. Everything here degrades to
//! "unknown" rather than failing; a README can be generated for an empty
//! directory.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

/// Package manager implied by a lock file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }
}

/// Detected facts about the current project. Immutable for the duration of
/// a run once [`detect`] and the profile lookup have completed.
#[derive(Debug, Clone, Default)]
pub struct ProjectInfo {
    /// Best-effort project name; always present (falls back to the
    /// directory name).
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub homepage: Option<String>,
    pub license_name: Option<String>,
    pub repository_url: Option<String>,
    pub is_github_repository: bool,
    pub github_username: Option<String>,
    pub documentation_url: Option<String>,
    pub contributing_url: Option<String>,
    pub package_manager: Option<PackageManager>,
    /// Website from the author's GitHub profile, filled in by the caller
    /// after detection (it needs a network round-trip).
    pub author_website: Option<String>,
}

/// Loose view of `package.json`; every field optional, unknown fields
/// ignored.
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    author: Option<serde_json::Value>,
    homepage: Option<String>,
    license: Option<String>,
    repository: Option<serde_json::Value>,
}

/// Gather project facts from `dir`.
pub fn detect(dir: &Path) -> ProjectInfo {
    let package = read_package_json(dir).unwrap_or_default();

    let name = package
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| git_repository_name(dir))
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default();

    let repository_url = package.repository.as_ref().and_then(repository_url_of);
    let is_github_repository = repository_url
        .as_deref()
        .is_some_and(|url| url.contains("github.com"));
    let github_username = repository_url
        .as_deref()
        .and_then(github_username_from_url);

    ProjectInfo {
        name,
        version: package.version,
        description: package.description,
        author: package.author.as_ref().and_then(author_name_of),
        homepage: package.homepage,
        license_name: package.license,
        documentation_url: repository_url.as_deref().map(|r| format!("{r}#readme")),
        contributing_url: repository_url.as_deref().map(|r| format!("{r}/issues")),
        repository_url,
        is_github_repository,
        github_username,
        package_manager: package_manager_from_lock_files(dir),
        author_website: None,
    }
}

/// Read `package.json`; a missing or unreadable file is a normal state.
fn read_package_json(dir: &Path) -> Option<PackageJson> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    serde_json::from_str(&content).ok()
}

/// `author` is either a plain string or an object with a `name` field.
fn author_name_of(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Object(obj) => obj
            .get("name")
            .and_then(|n| n.as_str())
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// `repository` is either a plain string or an object with a `url` field.
/// Normalizes `git+https://...git` style URLs.
fn repository_url_of(value: &serde_json::Value) -> Option<String> {
    let raw = match value {
        serde_json::Value::String(s) => s.as_str(),
        serde_json::Value::Object(obj) => obj.get("url").and_then(|u| u.as_str())?,
        _ => return None,
    };
    if raw.is_empty() {
        return None;
    }
    let url = raw.strip_prefix("git+").unwrap_or(raw);
    let url = url.strip_suffix(".git").unwrap_or(url);
    Some(url.to_string())
}

/// First path segment after `github.com` in a repository URL.
fn github_username_from_url(url: &str) -> Option<String> {
    // Accepts both https://github.com/user/repo and git@github.com:user/repo.
    let re = Regex::new(r"github\.com[/:]([^/]+)").ok()?;
    re.captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|u| !u.is_empty())
}

/// Repository name from the origin remote URL, else the worktree directory
/// name. Any git failure is "no repository".
fn git_repository_name(dir: &Path) -> Option<String> {
    let repo = git2::Repository::discover(dir).ok()?;
    if let Ok(origin) = repo.find_remote("origin") {
        if let Some(url) = origin.url() {
            if let Some(tail) = url.rsplit(['/', ':']).next() {
                let name = tail.strip_suffix(".git").unwrap_or(tail);
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    repo.workdir()
        .and_then(|w| w.file_name())
        .map(|n| n.to_string_lossy().into_owned())
}

/// Lock-file based package manager detection. Both lock files present is
/// ambiguous and resolves to "undetermined", same as neither.
fn package_manager_from_lock_files(dir: &Path) -> Option<PackageManager> {
    let npm_lock = dir.join("package-lock.json").is_file();
    let yarn_lock = dir.join("yarn.lock").is_file();

    match (npm_lock, yarn_lock) {
        (true, false) => Some(PackageManager::Npm),
        (false, true) => Some(PackageManager::Yarn),
        _ => None,
    }
}
