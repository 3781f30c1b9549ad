//! Prompt provider that answers from a script instead of the terminal
//!
//! Answers are consumed in the order the prompts are shown. Used by the
//! non-interactive mode and by tests, which can inspect the transcript of
//! every prompt that was shown.

use super::interface::*;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One prompt shown to the scripted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRecord {
    Text { prompt: String, prefill: String, cursor: usize },
    Choice { placeholder: String, labels: Vec<String> },
    MultiChoice { placeholder: String, labels: Vec<String> },
}

/// Scripted prompt provider.
///
/// When a queue runs dry the prompt is dismissed: text and choice prompts
/// answer `None`, multi-choice prompts answer an empty selection.
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: RefCell<VecDeque<Option<String>>>,
    choice_responses: RefCell<VecDeque<Option<String>>>,
    multi_choice_responses: RefCell<VecDeque<Vec<String>>>,
    transcript: RefCell<Vec<PromptRecord>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer of the next text prompt.
    pub fn with_text_response(self, response: &str) -> Self {
        self.text_responses.borrow_mut().push_back(Some(response.to_string()));
        self
    }

    /// Queues a dismissal of the next text prompt.
    pub fn with_text_dismissed(self) -> Self {
        self.text_responses.borrow_mut().push_back(None);
        self
    }

    /// Queues the label to pick on the next choice prompt.
    pub fn with_choice_response(self, label: &str) -> Self {
        self.choice_responses.borrow_mut().push_back(Some(label.to_string()));
        self
    }

    /// Queues a dismissal of the next choice prompt.
    pub fn with_choice_dismissed(self) -> Self {
        self.choice_responses.borrow_mut().push_back(None);
        self
    }

    /// Queues the labels to pick on the next multi-choice prompt.
    pub fn with_multi_choice_response(self, labels: &[&str]) -> Self {
        self.multi_choice_responses
            .borrow_mut()
            .push_back(labels.iter().map(|label| label.to_string()).collect());
        self
    }

    /// Every prompt shown so far, in order.
    pub fn transcript(&self) -> Vec<PromptRecord> {
        self.transcript.borrow().clone()
    }

    fn record(&self, record: PromptRecord) {
        log::debug!("Auto-answering {record:?}");
        self.transcript.borrow_mut().push(record);
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        self.record(PromptRecord::Text {
            prompt: config.prompt.clone(),
            prefill: config.prefill.clone(),
            cursor: config.cursor,
        });

        Ok(self.text_responses.borrow_mut().pop_front().flatten())
    }
}

impl ChoicePrompter for AutomaticPrompter {
    fn prompt_choice(&self, config: &ChoiceConfig) -> Result<Option<usize>> {
        let labels: Vec<String> = config.labels().into_iter().map(String::from).collect();
        self.record(PromptRecord::Choice {
            placeholder: config.placeholder.clone(),
            labels: labels.clone(),
        });

        let response = self.choice_responses.borrow_mut().pop_front().flatten();
        Ok(response.and_then(|wanted| labels.iter().position(|label| *label == wanted)))
    }
}

impl MultiChoicePrompter for AutomaticPrompter {
    fn prompt_multi_choice(&self, config: &ChoiceConfig) -> Result<Vec<usize>> {
        let labels: Vec<String> = config.labels().into_iter().map(String::from).collect();
        self.record(PromptRecord::MultiChoice {
            placeholder: config.placeholder.clone(),
            labels: labels.clone(),
        });

        let wanted = self.multi_choice_responses.borrow_mut().pop_front().unwrap_or_else(|| {
            // Nothing scripted: keep whatever is pre-selected
            config
                .choices
                .iter()
                .filter(|choice| choice.picked)
                .map(|choice| choice.label.clone())
                .collect()
        });

        Ok(labels
            .iter()
            .enumerate()
            .filter(|(_, label)| wanted.contains(label))
            .map(|(index, _)| index)
            .collect())
    }
}
