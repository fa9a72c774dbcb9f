//! Package manager, command and license questions.
//!
//! The command questions depend on `packageManager` being resolved first:
//! their applicability predicates and derived defaults read the chosen
//! manager out of the accumulated answers.

use super::{Choice, DefaultValue, Question, QuestionKind};
use crate::answers::{Answer, AnswerSet};
use crate::project::{PackageManager, ProjectInfo};

/// The package manager picked so far, whether it came from the multi-select
/// (first pick) or verbatim from the config file.
fn chosen_package_manager(answers: &AnswerSet) -> Option<String> {
    match answers.get("packageManager")? {
        Answer::Text(s) if !s.is_empty() => Some(s.clone()),
        Answer::List(items) => items.first().cloned(),
        Answer::Text(_) => None,
    }
}

fn package_manager_was_chosen(answers: &AnswerSet) -> bool {
    chosen_package_manager(answers).is_some()
}

pub(super) fn package_manager(info: &ProjectInfo) -> Question {
    // npm is pre-checked when lock files leave the choice open, so a fresh
    // directory still resolves the dependent command questions.
    let detected = info.package_manager;
    let npm_checked = detected != Some(PackageManager::Yarn);
    Question {
        name: "packageManager",
        message: "📦  Package manager".to_string(),
        kind: QuestionKind::MultiSelect {
            choices: vec![
                Choice {
                    label: "npm".to_string(),
                    value: PackageManager::Npm.as_str().to_string(),
                    checked: npm_checked,
                },
                Choice {
                    label: "yarn".to_string(),
                    value: PackageManager::Yarn.as_str().to_string(),
                    checked: detected == Some(PackageManager::Yarn),
                },
            ],
        },
        when: None,
    }
}

pub(super) fn install_command(_info: &ProjectInfo) -> Question {
    Question {
        name: "installCommand",
        message: "🛠  Install command".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::Derived(Box::new(|answers| {
                chosen_package_manager(answers).map(|pm| format!("{pm} install"))
            })),
            filter: None,
        },
        when: Some(Box::new(package_manager_was_chosen)),
    }
}

pub(super) fn usage(_info: &ProjectInfo) -> Question {
    Question {
        name: "usage",
        message: "💻  Usage command or instruction".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::Derived(Box::new(|answers| {
                chosen_package_manager(answers).map(|pm| format!("{pm} run start"))
            })),
            filter: None,
        },
        when: Some(Box::new(package_manager_was_chosen)),
    }
}

pub(super) fn test_command(_info: &ProjectInfo) -> Question {
    Question {
        name: "testCommand",
        message: "✅  Test command".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::Derived(Box::new(|answers| {
                chosen_package_manager(answers).map(|pm| format!("{pm} run test"))
            })),
            filter: None,
        },
        when: Some(Box::new(package_manager_was_chosen)),
    }
}

pub(super) fn license_name(info: &ProjectInfo) -> Question {
    Question {
        name: "licenseName",
        message: "📄  License name  (use empty value to skip)".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::from(info.license_name.clone()),
            filter: None,
        },
        when: None,
    }
}

pub(super) fn license_url(info: &ProjectInfo) -> Question {
    Question {
        name: "licenseUrl",
        message: "🔗  License URL  (use empty value to skip)".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::from(
                info.repository_url
                    .as_deref()
                    .map(|r| format!("{r}/blob/master/LICENSE")),
            ),
            filter: None,
        },
        when: Some(Box::new(|answers| {
            answers.get("licenseName").is_some_and(|a| !a.is_empty())
        })),
    }
}

pub(super) fn contributing_url(info: &ProjectInfo) -> Question {
    Question {
        name: "contributingUrl",
        message: "🤝  Contributing guidelines URL  (use empty value to skip)".to_string(),
        kind: QuestionKind::Input {
            default: DefaultValue::from(info.contributing_url.clone()),
            filter: None,
        },
        when: None,
    }
}
