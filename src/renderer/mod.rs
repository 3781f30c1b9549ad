pub mod artifact;
pub mod interface;
pub mod minijinja;

pub use artifact::expected_artifact;
pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
