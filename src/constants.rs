//! Constants used throughout antdg

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["antdg.json", "antdg.yaml", "antdg.yml"];

/// Generator invocation every rendered command starts with
pub const DEFAULT_BASE_COMMAND: &str = "antd g";

/// Option seeded from the context path and used as the artifact directory
pub const PATH_OPTION: &str = "path";

/// Default location of the generated file, relative to the project folder
pub const DEFAULT_ARTIFACT_TEMPLATE: &str = "{{ dir }}/{{ name }}/index.tsx";

/// Path segment that marks the inner source root of a project
pub const SOURCE_ROOT_SEGMENT: &str = "src";

/// File arrival polling defaults
pub mod watch {
    pub const MAX_ATTEMPTS: u32 = 10;
    pub const INTERVAL_MS: u64 = 500;
}

/// Labels shown by the wizard prompts
pub mod labels {
    pub const YES: &str = "Yes";
    pub const YES_DESCRIPTION: &str = "Confirm";
    pub const MORE_OPTIONS: &str = "More options";
    pub const MORE_OPTIONS_DESCRIPTION: &str = "Pick extra generator options";
    pub const CONFIRM: &str = "Confirm";
    pub const CONFIRM_DESCRIPTION: &str =
        "Pro-tip: take a minute to check the command above is really what you want";
    pub const CANCEL: &str = "Cancel";
    pub const REFRESH_EXPLORER: &str = "Refresh Explorer";
    pub const DISMISS: &str = "Dismiss";
    pub const OPTIONS_PLACEHOLDER: &str =
        "Do you need some options? (if not, just press Enter to skip this step)";
    pub const WORKSPACE_PLACEHOLDER: &str = "Pick the project folder to generate into";
    pub const UNKNOWN_STATUS: &str = "Command launched, check the terminal to know its status. You may need to refresh the explorer to see the generated file(s).";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
