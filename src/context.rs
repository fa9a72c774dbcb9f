//! Render context assembly.
//!
//! The assembled object is the full contract with the template boundary;
//! adding or removing a field here is a breaking change for custom
//! templates.

use serde_json::Value;

use crate::answers::{Answer, AnswerSet};
use crate::project::ProjectInfo;
use crate::remote;

/// The object handed to the template renderer.
pub type RenderContext = serde_json::Map<String, Value>;

/// Assemble the final render context, probing the npm registry for the
/// resolved project name.
pub fn assemble(info: &ProjectInfo, answers: &AnswerSet) -> RenderContext {
    let project_name = answers
        .get("projectName")
        .and_then(Answer::as_text)
        .unwrap_or(&info.name);
    let is_on_npm = remote::is_project_available_on_npm(project_name);
    assemble_with(info, answers, is_on_npm)
}

/// Assembly with the registry probe result supplied by the caller.
pub fn assemble_with(info: &ProjectInfo, answers: &AnswerSet, is_on_npm: bool) -> RenderContext {
    let mut context = RenderContext::new();
    context.insert(
        "isGithubRepos".to_string(),
        Value::Bool(info.is_github_repository),
    );
    context.insert(
        "repositoryUrl".to_string(),
        info.repository_url
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null),
    );
    // Reserved in the template contract; not sourced from any question.
    context.insert("projectPrerequisites".to_string(), Value::Null);
    context.insert("isProjectOnNpm".to_string(), Value::Bool(is_on_npm));

    // Answers last: on a name collision the resolved answer wins.
    for (name, answer) in answers {
        context.insert(name.clone(), answer.to_value());
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn info_with_repo() -> ProjectInfo {
        ProjectInfo {
            is_github_repository: true,
            repository_url: Some("https://github.com/jane/x".to_string()),
            ..ProjectInfo::default()
        }
    }

    #[test]
    fn passthrough_and_reserved_fields() {
        let context = assemble_with(&info_with_repo(), &AnswerSet::new(), false);

        assert_eq!(context.get("isGithubRepos"), Some(&Value::Bool(true)));
        assert_eq!(
            context.get("repositoryUrl"),
            Some(&Value::String("https://github.com/jane/x".to_string()))
        );
        assert_eq!(context.get("projectPrerequisites"), Some(&Value::Null));
        assert_eq!(context.get("isProjectOnNpm"), Some(&Value::Bool(false)));
    }

    #[test]
    fn answers_are_spread_last() {
        let mut answers = AnswerSet::new();
        answers.insert(
            "repositoryUrl".to_string(),
            Answer::Text("overridden".to_string()),
        );

        let context = assemble_with(&info_with_repo(), &answers, false);
        assert_eq!(
            context.get("repositoryUrl"),
            Some(&Value::String("overridden".to_string()))
        );
    }

    #[test]
    fn list_answers_become_arrays() {
        let mut answers = AnswerSet::new();
        answers.insert(
            "packageManager".to_string(),
            Answer::List(vec!["npm".to_string()]),
        );

        let context = assemble_with(&ProjectInfo::default(), &answers, false);
        assert_eq!(
            context.get("packageManager"),
            Some(&serde_json::json!(["npm"]))
        );
    }
}
