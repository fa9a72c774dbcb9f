//! End-to-end answer resolution over the real question catalog.

use std::collections::BTreeMap;

use readme_gen::{answers, context, questions, Answer, ProjectInfo};

fn detected_project() -> ProjectInfo {
    ProjectInfo {
        name: "my-tool".to_string(),
        version: Some("1.2.3".to_string()),
        description: Some("does things".to_string()),
        author: Some("Jane Doe".to_string()),
        homepage: Some("https://example.com".to_string()),
        license_name: Some("MIT".to_string()),
        repository_url: Some("https://github.com/jane/my-tool".to_string()),
        is_github_repository: true,
        github_username: Some("jane".to_string()),
        documentation_url: Some("https://github.com/jane/my-tool#readme".to_string()),
        contributing_url: Some("https://github.com/jane/my-tool/issues".to_string()),
        package_manager: Some(readme_gen::PackageManager::Yarn),
        author_website: Some("https://jane.dev".to_string()),
    }
}

fn no_config() -> BTreeMap<String, String> {
    BTreeMap::new()
}

fn text(answers: &readme_gen::AnswerSet, name: &str) -> String {
    match answers.get(name) {
        Some(Answer::Text(s)) => s.clone(),
        other => panic!("expected text answer for {name}, got {other:?}"),
    }
}

#[test]
fn defaults_follow_detected_project() {
    let catalog = questions::build(&detected_project());
    let resolved = answers::resolve(catalog, &no_config(), true).unwrap();

    assert_eq!(text(&resolved, "projectName"), "my-tool");
    assert_eq!(text(&resolved, "projectVersion"), "1.2.3");
    assert_eq!(text(&resolved, "projectDescription"), "does things");
    assert_eq!(text(&resolved, "authorName"), "Jane Doe");
    assert_eq!(text(&resolved, "authorGithubUsername"), "jane");
    assert_eq!(text(&resolved, "authorWebsite"), "https://jane.dev");
    assert_eq!(text(&resolved, "licenseName"), "MIT");
    assert_eq!(
        text(&resolved, "licenseUrl"),
        "https://github.com/jane/my-tool/blob/master/LICENSE"
    );
}

#[test]
fn command_defaults_follow_the_chosen_package_manager() {
    let catalog = questions::build(&detected_project());
    let resolved = answers::resolve(catalog, &no_config(), true).unwrap();

    // yarn.lock was detected, so yarn is the pre-checked choice.
    assert_eq!(
        resolved.get("packageManager"),
        Some(&Answer::List(vec!["yarn".to_string()]))
    );
    assert_eq!(text(&resolved, "installCommand"), "yarn install");
    assert_eq!(text(&resolved, "usage"), "yarn run start");
    assert_eq!(text(&resolved, "testCommand"), "yarn run test");
}

#[test]
fn empty_project_still_resolves_every_applicable_field() {
    // Fresh directory: no package.json, no lock files, no git remote.
    let info = ProjectInfo {
        name: "fresh-dir".to_string(),
        ..ProjectInfo::default()
    };
    let catalog = questions::build(&info);
    let resolved = answers::resolve(catalog, &no_config(), true).unwrap();

    assert_eq!(text(&resolved, "projectName"), "fresh-dir");
    // Fields without a detected default answer with the empty string.
    assert_eq!(text(&resolved, "projectVersion"), "");
    assert_eq!(text(&resolved, "authorTwitterUsername"), "");
    // npm is the fallback pre-check, so the command chain still resolves.
    assert_eq!(
        resolved.get("packageManager"),
        Some(&Answer::List(vec!["npm".to_string()]))
    );
    assert_eq!(text(&resolved, "installCommand"), "npm install");
    // licenseName resolved empty, so licenseUrl is inapplicable: absent,
    // not present-with-empty-value.
    assert_eq!(resolved.get("licenseUrl"), None);
}

#[test]
fn config_values_win_and_suppress_resolution() {
    let mut config = no_config();
    config.insert("authorName".to_string(), "Config Author".to_string());
    config.insert("packageManager".to_string(), "yarn".to_string());

    let info = ProjectInfo {
        name: "fresh-dir".to_string(),
        author: Some("Detected Author".to_string()),
        ..ProjectInfo::default()
    };
    let catalog = questions::build(&info);
    let resolved = answers::resolve(catalog, &config, true).unwrap();

    assert_eq!(text(&resolved, "authorName"), "Config Author");
    // The seeded text value feeds the dependent command questions.
    assert_eq!(text(&resolved, "installCommand"), "yarn install");
}

#[test]
fn end_to_end_context_for_empty_project() {
    let info = ProjectInfo {
        name: "fresh-dir".to_string(),
        ..ProjectInfo::default()
    };
    let catalog = questions::build(&info);
    let resolved = answers::resolve(catalog, &no_config(), true).unwrap();
    let context = context::assemble_with(&info, &resolved, false);

    assert_eq!(context.get("isProjectOnNpm"), Some(&serde_json::json!(false)));
    assert_eq!(
        context.get("projectPrerequisites"),
        Some(&serde_json::Value::Null)
    );
    assert_eq!(
        context.get("projectName"),
        Some(&serde_json::json!("fresh-dir"))
    );
    assert_eq!(context.get("isGithubRepos"), Some(&serde_json::json!(false)));
}
