//! Global Constants
//!
//! Centralized constants for configuration and output formatting.

/// Output document constants
pub mod output {
    /// File name written into each documented root
    pub const DEFAULT_OUTPUT_FILE: &str = "REPOSITORY_STRUCTURE.md";

    /// Roots documented when neither the command line nor the config names any
    pub const DEFAULT_ROOTS: &[&str] = &["frontend", "backend"];

    /// chrono format matching ISO-8601 local date-time
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
}

/// Tree block glyphs
pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const LAST_BRANCH: &str = "└── ";
    pub const CONTINUATION: &str = "│   ";
    pub const BLANK: &str = "    ";
}

/// Filesystem snapshot constants
pub mod scan {
    /// Files larger than this are listed but never read (1MB)
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

    /// Patterns excluded unless the config says otherwise
    pub const DEFAULT_EXCLUDE: &[&str] = &[".git"];
}

/// Configuration file locations
pub mod config {
    /// Project-level directory holding config.toml
    pub const PROJECT_DIR: &str = ".structdoc";

    /// Config file name in both global and project directories
    pub const CONFIG_FILE: &str = "config.toml";

    /// Environment variable prefix
    pub const ENV_PREFIX: &str = "STRUCTDOC_";
}
