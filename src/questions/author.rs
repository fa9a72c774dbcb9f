//! Author identity questions.

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

pub(super) fn author_name(info: &ProjectInfo) -> Question {
    input(
        "authorName",
        "👤  Author name  (use empty value to skip)",
        DefaultValue::from(info.author.clone()),
    )
}

pub(super) fn author_github_username(info: &ProjectInfo) -> Question {
    input(
        "authorGithubUsername",
        "🐙  GitHub username  (use empty value to skip)",
        DefaultValue::from(info.github_username.clone()),
    )
}

pub(super) fn author_twitter_username(_info: &ProjectInfo) -> Question {
    input(
        "authorTwitterUsername",
        "🐦  Twitter username  (use empty value to skip)",
        DefaultValue::None,
    )
}

pub(super) fn author_linkedin_username(_info: &ProjectInfo) -> Question {
    input(
        "authorLinkedInUsername",
        "💼  LinkedIn username  (use empty value to skip)",
        DefaultValue::None,
    )
}

pub(super) fn author_patreon_username(_info: &ProjectInfo) -> Question {
    input(
        "authorPatreonUsername",
        "❤️  Patreon username  (use empty value to skip)",
        DefaultValue::None,
    )
}

/// Default pre-filled from the author's GitHub profile `blog` field, looked
/// up before the catalog is built so this factory stays free of I/O.
pub(super) fn author_website(info: &ProjectInfo) -> Question {
    input(
        "authorWebsite",
        "🏠  Author website  (use empty value to skip)",
        DefaultValue::from(info.author_website.clone()),
    )
}
