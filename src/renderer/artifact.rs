//! Expected artifact of a generation, used as the success signal.

use crate::{
    command::CommandModel, constants::PATH_OPTION, error::Result,
    renderer::interface::TemplateRenderer,
};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// Renders the artifact `template` for `command` and joins it onto `folder`.
///
/// The template sees `name` (positional name), `dir` (the `path` option),
/// `kind` and `options`. Returns `None` when no path can be determined,
/// which is the case before a name has been entered.
pub fn expected_artifact(
    renderer: &dyn TemplateRenderer,
    template: &str,
    folder: &Path,
    command: &CommandModel,
) -> Result<Option<PathBuf>> {
    if command.positional_name().is_empty() {
        return Ok(None);
    }

    let dir = command
        .option_value(PATH_OPTION)
        .and_then(|value| value.as_text())
        .unwrap_or_default();
    let options: Map<String, Value> =
        command.options().map(|(name, value)| (name.to_string(), value.into())).collect();
    let context = json!({
        "name": command.positional_name(),
        "dir": dir,
        "kind": command.kind(),
        "options": options,
    });

    let rendered = renderer.render(template, &context, Some("artifact"))?;
    let segments: Vec<&str> = rendered
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    if segments.is_empty() {
        return Ok(None);
    }

    Ok(Some(segments.iter().fold(folder.to_path_buf(), |path, segment| path.join(segment))))
}
