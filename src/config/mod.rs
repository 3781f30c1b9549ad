//! Project configuration for antdg
//!
//! This module contains the configuration system components:
//! - `types`: Watch settings and default value helpers
//! - `loader`: Configuration file discovery and parsing

pub mod loader;
pub mod types;


pub use loader::Settings;
pub use types::WatchSettings;
