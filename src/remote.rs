//! Read-only remote lookups.
//!
//! Both probes are best-effort: any transport error, timeout or unexpected
//! response degrades to "not available" / "unknown". A README generator
//! must keep working offline.

use std::time::Duration;

const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";
const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("readme-gen/", env!("CARGO_PKG_VERSION"));
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// True iff the package registry knows `project_name`. Only the response
/// status matters; the body is not consulted.
pub fn is_project_available_on_npm(project_name: &str) -> bool {
    if project_name.is_empty() {
        return false;
    }
    let url = format!("{NPM_REGISTRY_URL}/{project_name}");
    match ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(LOOKUP_TIMEOUT)
        .call()
    {
        Ok(response) => {
            tracing::debug!("npm lookup for {project_name}: {}", response.status());
            true
        }
        Err(err) => {
            tracing::debug!("npm lookup for {project_name} failed: {err}");
            false
        }
    }
}

/// The `blog` field of the author's GitHub profile, if set.
pub fn author_website_from_github(github_username: &str) -> Option<String> {
    if github_username.is_empty() {
        return None;
    }
    let url = format!("{GITHUB_API_URL}/users/{github_username}");
    let response = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(LOOKUP_TIMEOUT)
        .call()
        .map_err(|err| tracing::debug!("github profile lookup failed: {err}"))
        .ok()?;

    let profile: serde_json::Value = response.into_json().ok()?;
    profile
        .get("blog")
        .and_then(|b| b.as_str())
        .filter(|b| !b.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic whether or not the network is reachable: a name this
    // random is not registered (404) and a transport failure also resolves
    // to false.
    #[test]
    fn unregistered_name_resolves_to_false() {
        assert!(!is_project_available_on_npm(
            "readme-gen-test-b2c1f7e9a4-not-a-real-package"
        ));
    }

    #[test]
    fn empty_name_resolves_to_false() {
        assert!(!is_project_available_on_npm(""));
    }

    #[test]
    fn empty_username_has_no_website() {
        assert_eq!(author_website_from_github(""), None);
    }
}
