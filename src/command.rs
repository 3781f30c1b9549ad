//! Generator command model.
//!
//! [`CommandModel`] accumulates everything the questionnaire learns about the
//! generation (base command, scaffold kind, positional name and options) and
//! renders it to the command line handed to the terminal.

use crate::constants::{DEFAULT_BASE_COMMAND, PATH_OPTION, SOURCE_ROOT_SEGMENT};
use crate::ext::PathExt;
use indexmap::IndexMap;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Value stored for a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Presence-only flag, rendered as `--name`.
    Flag(bool),
    /// Single value, rendered as `--name value`.
    Text(String),
    /// Several values, rendered as `--name v1 v2`.
    List(Vec<String>),
}

impl OptionValue {
    /// Returns the text of a single-valued option.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            _ => None,
        }
    }

    fn render(&self, name: &str) -> Option<String> {
        match self {
            OptionValue::Flag(true) => Some(format!("--{name}")),
            OptionValue::Flag(false) => None,
            OptionValue::Text(value) => Some(format!("--{name} {value}")),
            OptionValue::List(values) if values.is_empty() => Some(format!("--{name}")),
            OptionValue::List(values) => Some(format!("--{name} {}", values.join(" "))),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl From<&OptionValue> for serde_json::Value {
    fn from(value: &OptionValue) -> Self {
        match value {
            OptionValue::Flag(flag) => serde_json::Value::Bool(*flag),
            OptionValue::Text(text) => serde_json::Value::String(text.clone()),
            OptionValue::List(values) => values.clone().into(),
        }
    }
}

/// Location the user invoked the generation from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextPath {
    /// Eg. `/home/jimmy/react-project/src/routers/some-module`
    pub full: PathBuf,
    /// Eg. `src/routers/some-module`
    pub relative_to_root: String,
    /// Eg. `routers/some-module`, empty when no source root was found.
    pub relative_to_source_root: String,
}

impl ContextPath {
    /// Computes the context path of `full` inside `folder`.
    ///
    /// Returns `None`, and logs a warning, when `full` is not a descendant of
    /// `folder`.
    pub fn resolve(full: &Path, folder: &Path) -> Option<Self> {
        let Some(relative) = full.relative_to(folder) else {
            log::warn!(
                "Context path {} is outside of the project folder {}, ignoring it.",
                full.display(),
                folder.display()
            );
            return None;
        };

        let relative_to_root = relative.to_slash_string();
        let relative_to_source_root = relative_to_root
            .split('/')
            .skip_while(|segment| *segment != SOURCE_ROOT_SEGMENT)
            .skip(1)
            .collect::<Vec<_>>()
            .join("/");

        Some(Self { full: full.to_path_buf(), relative_to_root, relative_to_source_root })
    }
}

/// Returns the last segment of a path-or-name, ignoring trailing separators.
pub fn last_segment(path_or_name: &str) -> &str {
    path_or_name
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
}

/// Returns everything before the last segment of a path-or-name, using `/`
/// as separator. Empty when the input is a bare name.
pub fn parent_segments(path_or_name: &str) -> String {
    let trimmed = path_or_name.trim_end_matches(['/', '\\']);
    match trimmed.rfind(['/', '\\']) {
        Some(index) => trimmed[..index]
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/"),
        None => String::new(),
    }
}

/// Mutable accumulator for one generator invocation.
///
/// The rendered command only depends on the base command, the scaffold kind,
/// the positional name and the ordered options.
#[derive(Debug, Clone)]
pub struct CommandModel {
    base_command: String,
    kind: String,
    positional_name: String,
    options: IndexMap<String, OptionValue>,
}

impl CommandModel {
    /// Creates the command for `kind`, seeding the `path` option from the
    /// context path when it lies inside `folder`.
    pub fn new(folder: &Path, kind: &str, context_path: Option<&Path>) -> Self {
        let mut command = Self {
            base_command: DEFAULT_BASE_COMMAND.to_string(),
            kind: kind.to_string(),
            positional_name: String::new(),
            options: IndexMap::new(),
        };
        command.set_context_path(folder, context_path);
        command
    }

    /// Replaces the default base command.
    pub fn with_base_command(mut self, base_command: &str) -> Self {
        self.base_command = base_command.trim().to_string();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn positional_name(&self) -> &str {
        &self.positional_name
    }

    /// Sets the positional argument to the last segment of `path_or_name`,
    /// eg. `src/routers/some-module` => `some-module`.
    pub fn set_positional_name(&mut self, path_or_name: &str) {
        self.positional_name = last_segment(path_or_name).to_string();
    }

    /// Upserts options. Existing names keep their original position. A
    /// `false` flag means absence and removes the option.
    pub fn add_options<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (name, value) in entries {
            let name = name.into();
            match value.into() {
                OptionValue::Flag(false) => {
                    self.options.shift_remove(&name);
                }
                value => {
                    self.options.insert(name, value);
                }
            }
        }
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn option_value(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Iterates options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Renders `<base> <kind> <name> <options>` in the shortest form possible.
    pub fn render(&self) -> String {
        let options = self.options.iter().filter_map(|(name, value)| value.render(name));

        [self.base_command.clone(), self.kind.clone(), self.positional_name.clone()]
            .into_iter()
            .chain(options)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_context_path(&mut self, folder: &Path, context_path: Option<&Path>) {
        let Some(full) = context_path else {
            log::info!("No context path detected.");
            return;
        };
        log::info!("Full context path detected: {}", full.display());

        let Some(context) = ContextPath::resolve(full, folder) else {
            return;
        };

        log::info!("Folder-relative context path detected: {}", context.relative_to_root);
        if context.relative_to_source_root.is_empty() {
            log::info!("No source root detected from context path.");
        } else {
            log::info!(
                "Source-relative context path detected: {}",
                context.relative_to_source_root
            );
        }

        if !context.relative_to_root.is_empty() {
            self.add_options([(PATH_OPTION, context.relative_to_root)]);
        }
    }
}

impl Display for CommandModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
