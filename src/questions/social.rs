//! Social profile questions.
//!
//! Both handles share the same cleanup: one leading `@` is stripped and the
//! rest escaped for markdown, so `@some_user` interpolates as a link label
//! without turning underscores into emphasis. Empty input stays a skip.

use super::{DefaultValue, Question, QuestionKind};
use crate::project::ProjectInfo;
use crate::text::clean_social_username;

fn handle(name: &'static str, message: &str) -> Question {
    Question {
        name,
        message: message.to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::None,
            filter: Some(clean_social_username),
        },
        when: None,
    }
}

pub(super) fn dev_to_profile(_info: &ProjectInfo) -> Question {
    handle(
        "devToProfileName",
        "👤  dev.to Profile  (use empty value to skip)",
    )
}

pub(super) fn medium_profile(_info: &ProjectInfo) -> Question {
    handle(
        "mediumProfileUserName",
        "👤  Medium Profile  (use empty value to skip)",
    )
}
