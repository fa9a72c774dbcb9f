//! Answer resolution.
//!
//! Merges three answer sources with a fixed precedence: config-file values
//! beat everything and suppress prompting for that field entirely; the rest
//! is resolved in catalog order, either interactively or by synthesizing
//! defaults, with already-resolved answers feeding later questions'
//! applicability predicates and derived defaults.

use std::collections::BTreeMap;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect};
use serde::Serialize;

use crate::error::Result;
use crate::questions::{DefaultValue, Question, QuestionKind};

/// A resolved answer: free text, or the picked values of a multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    List(Vec<String>),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::List(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Text(s) => s.is_empty(),
            Answer::List(items) => items.is_empty(),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Answer::Text(s) => serde_json::Value::String(s.clone()),
            Answer::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|i| serde_json::Value::String(i.clone()))
                    .collect(),
            ),
        }
    }
}

/// Question name to resolved value for one run.
pub type AnswerSet = BTreeMap<String, Answer>;

/// Resolve the full catalog against the config cache.
///
/// Config values win even though they are collected first; the final
/// `merged.extend(seeded)` makes that override direction explicit instead
/// of burying it in accumulator mutation.
pub fn resolve(
    questions: Vec<Question>,
    config: &BTreeMap<String, String>,
    use_defaults: bool,
) -> Result<AnswerSet> {
    let mut seeded = AnswerSet::new();
    let mut pending = Vec::new();
    for question in questions {
        match config.get(question.name).filter(|v| !v.is_empty()) {
            Some(value) => {
                seeded.insert(question.name.to_string(), Answer::Text(value.clone()));
            }
            None => pending.push(question),
        }
    }

    // Seeded answers participate in `when` and derived-default evaluation
    // for the questions that still need resolving.
    let mut working = seeded.clone();
    let mut resolved = AnswerSet::new();
    for question in &pending {
        if let Some(when) = &question.when {
            if !when(&working) {
                continue;
            }
        }
        let answer = if use_defaults {
            default_answer(question, &working)
        } else {
            prompt_answer(question, &working)?
        };
        if let Some(answer) = answer {
            working.insert(question.name.to_string(), answer.clone());
            resolved.insert(question.name.to_string(), answer);
        }
    }

    let mut merged = resolved;
    merged.extend(seeded);
    Ok(merged)
}

/// Synthesize the default answer for a question, or `None` when the
/// question has no answer at all (derived default that resolves to
/// nothing). A free-text question without any default answers with the
/// empty string.
fn default_answer(question: &Question, answers: &AnswerSet) -> Option<Answer> {
    match &question.kind {
        QuestionKind::Input { default, filter } => {
            let value = match default {
                DefaultValue::Static(s) => Some(s.clone()),
                DefaultValue::Derived(f) => f(answers),
                DefaultValue::None => Some(String::new()),
            }?;
            let value = match filter {
                Some(f) => f(&value),
                None => value,
            };
            Some(Answer::Text(value))
        }
        QuestionKind::MultiSelect { choices } => Some(Answer::List(
            choices
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.value.clone())
                .collect(),
        )),
    }
}

/// Obtain the answer interactively, with the same default wiring the
/// non-interactive path uses.
fn prompt_answer(question: &Question, answers: &AnswerSet) -> Result<Option<Answer>> {
    let theme = ColorfulTheme::default();
    match &question.kind {
        QuestionKind::Input { default, filter } => {
            let default_value = match default {
                DefaultValue::Static(s) => Some(s.clone()),
                DefaultValue::Derived(f) => f(answers),
                DefaultValue::None => None,
            };
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt(question.message.clone())
                .allow_empty(true);
            if let Some(value) = default_value {
                input = input.default(value);
            }
            let raw = input.interact_text()?;
            let value = match filter {
                Some(f) => f(&raw),
                None => raw,
            };
            Ok(Some(Answer::Text(value)))
        }
        QuestionKind::MultiSelect { choices } => {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let checked: Vec<bool> = choices.iter().map(|c| c.checked).collect();
            let picks = MultiSelect::with_theme(&theme)
                .with_prompt(question.message.clone())
                .items(&labels)
                .defaults(&checked)
                .interact()?;
            Ok(Some(Answer::List(
                picks.into_iter().map(|i| choices[i].value.clone()).collect(),
            )))
        }
    }
}
