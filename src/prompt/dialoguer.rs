//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    Choice, ChoiceConfig, ChoicePrompter, MultiChoicePrompter, TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }

    fn item(choice: &Choice) -> String {
        match &choice.description {
            Some(description) => format!("{}  ({description})", choice.label),
            None => choice.label.clone(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        // Input starts with the cursor after the initial text, which is where
        // `TextPromptConfig::with_prefill` puts it.
        let input: String = Input::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .with_initial_text(config.prefill.clone())
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_string();
        Ok((!input.is_empty()).then_some(input))
    }
}

impl ChoicePrompter for DialoguerPrompter {
    fn prompt_choice(&self, config: &ChoiceConfig) -> Result<Option<usize>> {
        let items: Vec<String> = config.choices.iter().map(Self::item).collect();

        Ok(Select::with_theme(&self.theme)
            .with_prompt(&config.placeholder)
            .items(&items)
            .default(0)
            .interact_opt()?)
    }
}

impl MultiChoicePrompter for DialoguerPrompter {
    fn prompt_multi_choice(&self, config: &ChoiceConfig) -> Result<Vec<usize>> {
        let items: Vec<String> = config.choices.iter().map(Self::item).collect();
        let defaults: Vec<bool> = config.choices.iter().map(|choice| choice.picked).collect();

        let indices = MultiSelect::with_theme(&self.theme)
            .with_prompt(&config.placeholder)
            .items(&items)
            .defaults(&defaults)
            .interact_opt()?;

        Ok(indices.unwrap_or_default())
    }
}
