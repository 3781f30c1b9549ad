pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, parse_option_arg, Args};
pub use runner::{run, Runner};
