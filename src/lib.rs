/// Handles argument parsing and wires the terminal front-end.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Extension traits for standard library types.
pub mod ext;

/// Generator command model and rendering.
pub mod command;

/// Options offered per scaffold kind.
pub mod catalog;

/// Project configuration.
pub mod config;

/// Artifact path templates.
pub mod renderer;

/// Polling for the generated file.
pub mod watcher;

/// User input abstractions and implementations.
pub mod prompt;

/// Folder resolution, launching, opening and notifications.
pub mod host;

/// The interactive questionnaire.
pub mod wizard;
