//! The question catalog.
//!
//! One ordered descriptor per answer field. Factories are pure functions of
//! [`ProjectInfo`]; catalog order is load-bearing: applicability predicates
//! and derived defaults may only read fields that appear earlier, and the
//! resolver feeds answers through in exactly this order.

mod author;
mod project;
mod social;
mod tooling;

use crate::answers::AnswerSet;
use crate::project::ProjectInfo;

/// Applicability predicate over the answers resolved so far. Absent means
/// always applicable.
pub type Predicate = Box<dyn Fn(&AnswerSet) -> bool>;

/// Default computed from the answers resolved so far; `None` means the
/// question has no default answer.
pub type DerivedDefault = Box<dyn Fn(&AnswerSet) -> Option<String>>;

/// Default answer of a free-text question.
pub enum DefaultValue {
    /// No default; interactive input starts blank, defaults mode answers
    /// with the empty string.
    None,
    Static(String),
    Derived(DerivedDefault),
}

impl From<Option<String>> for DefaultValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) if !s.is_empty() => DefaultValue::Static(s),
            _ => DefaultValue::None,
        }
    }
}

/// One selectable entry of a multi-select question.
pub struct Choice {
    pub label: String,
    pub value: String,
    /// Pre-selected in the prompt; collected as-is in defaults mode.
    pub checked: bool,
}

/// How a question is asked and answered.
pub enum QuestionKind {
    Input {
        default: DefaultValue,
        /// Post-processing applied to the produced value, whichever path
        /// produced it.
        filter: Option<fn(&str) -> String>,
    },
    MultiSelect { choices: Vec<Choice> },
}

/// A single requested field of project metadata.
pub struct Question {
    /// Unique key; doubles as the render-context field name.
    pub name: &'static str,
    pub message: String,
    pub kind: QuestionKind,
    pub when: Option<Predicate>,
}

/// Build the full ordered catalog for one run.
pub fn build(info: &ProjectInfo) -> Vec<Question> {
    vec![
        project::project_name(info),
        project::project_version(info),
        project::project_description(info),
        project::project_documentation_url(info),
        project::project_homepage(info),
        project::project_demo_url(info),
        author::author_name(info),
        author::author_github_username(info),
        author::author_twitter_username(info),
        author::author_linkedin_username(info),
        author::author_patreon_username(info),
        author::author_website(info),
        social::dev_to_profile(info),
        social::medium_profile(info),
        tooling::package_manager(info),
        tooling::install_command(info),
        tooling::usage(info),
        tooling::test_command(info),
        tooling::license_name(info),
        tooling::license_url(info),
        tooling::contributing_url(info),
    ]
}
