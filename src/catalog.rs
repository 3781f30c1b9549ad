//! Declarative table of the options each scaffold kind offers.

use indexmap::IndexMap;
use serde::Deserialize;

/// How the value of an option is elicited.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Set to true as soon as the option is selected.
    Boolean,
    /// Asked as free text.
    Text,
}

/// A single option offered for a scaffold kind.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: String,
    /// Shown next to the option in the picker and used as prompt text.
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub value_kind: ValueKind,
    /// Whether the option is pre-selected in the picker.
    #[serde(default)]
    pub picked: bool,
}

impl OptionDefinition {
    pub fn new(name: &str, description: &str, value_kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            value_kind,
            picked: false,
        }
    }
}

/// Ordered option definitions per scaffold kind.
#[derive(Debug, Clone, Default)]
pub struct OptionCatalog {
    kinds: IndexMap<String, Vec<OptionDefinition>>,
}

impl OptionCatalog {
    /// The catalog shipped with antdg.
    pub fn builtin() -> Self {
        let mut kinds = IndexMap::new();
        kinds.insert(
            "page".to_string(),
            vec![
                OptionDefinition::new("redirect", "as redirect route", ValueKind::Boolean),
                OptionDefinition::new("father", "with father route", ValueKind::Text),
            ],
        );
        kinds.insert(
            "component".to_string(),
            vec![OptionDefinition::new(
                "folder",
                "component name is folder",
                ValueKind::Boolean,
            )],
        );
        Self { kinds }
    }

    /// Replaces or adds the given kinds, keeping the position of replaced ones.
    pub fn extend(&mut self, kinds: IndexMap<String, Vec<OptionDefinition>>) {
        self.kinds.extend(kinds);
    }

    /// Options of `kind`, empty for an unknown kind.
    pub fn options_for(&self, kind: &str) -> &[OptionDefinition] {
        self.kinds.get(kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find(&self, kind: &str, name: &str) -> Option<&OptionDefinition> {
        self.options_for(kind).iter().find(|option| option.name == name)
    }

    /// Kinds that carry at least one declared entry.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}
