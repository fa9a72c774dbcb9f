//! Project identity questions.

use super::{DefaultValue, Question, QuestionKind};
use crate::project::ProjectInfo;

fn input(name: &'static str, message: &str, default: DefaultValue) -> Question {
    Question {
        name,
        message: message.to_string(),
        kind: QuestionKind::Input {
            default,
            filter: None,
        },
        when: None,
    }
}

pub(super) fn project_name(info: &ProjectInfo) -> Question {
    input(
        "projectName",
        "💡  Project name",
        DefaultValue::Static(info.name.clone()),
    )
}

pub(super) fn project_version(info: &ProjectInfo) -> Question {
    input(
        "projectVersion",
        "🔖  Project version",
        DefaultValue::from(info.version.clone()),
    )
}

pub(super) fn project_description(info: &ProjectInfo) -> Question {
    input(
        "projectDescription",
        "📝  Project description",
        DefaultValue::from(info.description.clone()),
    )
}

pub(super) fn project_documentation_url(info: &ProjectInfo) -> Question {
    input(
        "projectDocumentationUrl",
        "📘  Project documentation URL  (use empty value to skip)",
        DefaultValue::from(info.documentation_url.clone()),
    )
}

pub(super) fn project_homepage(info: &ProjectInfo) -> Question {
    input(
        "projectHomepage",
        "🏠  Project homepage  (use empty value to skip)",
        DefaultValue::from(info.homepage.clone()),
    )
}

pub(super) fn project_demo_url(_info: &ProjectInfo) -> Question {
    input(
        "projectDemoUrl",
        "✨  Project demo URL  (use empty value to skip)",
        DefaultValue::None,
    )
}
