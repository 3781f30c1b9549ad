use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    #[error("Failed to render artifact path. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Config file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    /// The watcher was asked to probe without a determinable artifact path.
    #[error("No expected artifact path to watch.")]
    EmptyExpectedPath,

    #[error("Failed to launch '{command}' in '{folder}'. Original error: {e}")]
    LaunchError { command: String, folder: String, e: std::io::Error },

    #[error("Cannot pick a project folder without prompting, candidates are: {}. Pass a context path inside one of them or a single --workspace.", .candidates.join(", "))]
    AmbiguousWorkspace { candidates: Vec<String> },

    #[error("Invalid option '{0}': expected NAME or NAME=VALUE.")]
    InvalidOptionArg(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
