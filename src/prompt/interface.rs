//! Pure interfaces for prompting without external dependencies
//!
//! These are the capabilities the wizard needs from whatever front-end hosts
//! it. A `None` (or an empty selection for multi-choice) always means the
//! user dismissed the prompt.

use crate::error::Result;

/// Configuration for free text prompts
#[derive(Debug, Clone, Default)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Value the input starts with.
    pub prefill: String,
    /// Cursor position inside `prefill`, in characters.
    pub cursor: usize,
}

impl TextPromptConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), ..Self::default() }
    }

    /// Prefills the input and places the cursor after the prefill.
    pub fn with_prefill(mut self, prefill: impl Into<String>) -> Self {
        self.prefill = prefill.into();
        self.cursor = self.prefill.chars().count();
        self
    }
}

/// A selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub description: Option<String>,
    /// Pre-selected in multi-choice prompts.
    pub picked: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), description: None, picked: false }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn picked(mut self, picked: bool) -> Self {
        self.picked = picked;
        self
    }
}

/// Configuration for single and multiple choice prompts
#[derive(Debug, Clone)]
pub struct ChoiceConfig {
    /// Context shown above the choices, eg. the command being built.
    pub placeholder: String,
    pub choices: Vec<Choice>,
}

impl ChoiceConfig {
    pub fn new(placeholder: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self { placeholder: placeholder.into(), choices }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.choices.iter().map(|choice| choice.label.as_str()).collect()
    }
}

/// Abstract interface for free text input
pub trait TextPrompter {
    /// Returns `None` when the prompt was dismissed.
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>>;
}

/// Abstract interface for single choice selection
pub trait ChoicePrompter {
    /// Returns the index of the selected choice, `None` when dismissed.
    fn prompt_choice(&self, config: &ChoiceConfig) -> Result<Option<usize>>;
}

/// Abstract interface for multiple choice selection
pub trait MultiChoicePrompter {
    /// Returns the indices of the selected choices, possibly none.
    fn prompt_multi_choice(&self, config: &ChoiceConfig) -> Result<Vec<usize>>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ChoicePrompter + MultiChoicePrompter {}

impl<T> PromptProvider for T where T: TextPrompter + ChoicePrompter + MultiChoicePrompter {}
