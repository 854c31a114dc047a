//! Global Constants
//!
//! Centralized defaults and fixed output strings.

/// Generator defaults
pub mod generator {
    /// Script looked up relative to the working directory
    pub const DEFAULT_SCRIPT: &str = "gen_classes.py";

    /// Interpreter used to execute the script
    pub const DEFAULT_INTERPRETER: &str = "python3";

    /// Documentation file the script produces
    pub const DEFAULT_TARGET: &str = "docs/CLASSES.md";

    /// Upper bound on a single generator run (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Appended to the warning when the script is absent
    pub const ABSENT_REASON: &str = "it is not included in the repository because of license issues";
}

/// Terminal output
pub mod output {
    /// Title shown inside the opening banner
    pub const DEFAULT_TITLE: &str = "docgen: GENERATING DOCUMENTATION";

    /// Label for warning lines
    pub const WARN_LABEL: &str = "[WARN]";

    /// Label for success lines, padded to the width of `WARN_LABEL`
    pub const OK_LABEL: &str = "[OK]  ";

    /// Banner fill character
    pub const RULE_CHAR: char = '=';
}

/// Paths and environment
pub mod paths {
    /// Project data directory, relative to the working directory
    pub const PROJECT_DIR: &str = ".docgen";

    /// Config file name inside the project and global directories
    pub const CONFIG_FILE: &str = "config.toml";

    /// Directory name under the XDG config home
    pub const GLOBAL_DIR_NAME: &str = "docgen";

    /// Environment variable prefix (nesting separator is `__`)
    pub const ENV_PREFIX: &str = "DOCGEN_";
}
