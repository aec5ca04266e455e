//! Configuration Types
//!
//! All configuration structures with defaults matching the built-in
//! behaviour. Supports global and project level configuration files.

use serde::{Deserialize, Serialize};

use crate::constants::output::{DEFAULT_OUTPUT_FILE, DEFAULT_ROOTS};
use crate::constants::scan::{DEFAULT_EXCLUDE, DEFAULT_MAX_FILE_SIZE};
use crate::extract::KotlinJavaStrategy;
use crate::snapshot::ScanOptions;
use crate::types::{DocError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Which roots to document and where to write
    pub generate: GenerateConfig,

    /// Snapshot settings
    pub scan: ScanConfig,

    /// Doc comment extraction settings
    pub extract: ExtractConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            generate: GenerateConfig::default(),
            scan: ScanConfig::default(),
            extract: ExtractConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let output = self.generate.output_file.as_str();
        if output.trim().is_empty() {
            return Err(DocError::Config(
                "generate.output_file must not be empty".to_string(),
            ));
        }

        if output != output.trim()
            || output == "."
            || output == ".."
            || output.contains('/')
            || output.contains('\\')
        {
            return Err(DocError::Config(format!(
                "generate.output_file must be a plain file name, got {:?}",
                output
            )));
        }

        if self.scan.max_file_size == 0 {
            return Err(DocError::Config(
                "scan.max_file_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Generate Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Root directories documented when none are given on the command line
    pub roots: Vec<String>,

    /// Document file name written inside each root
    pub output_file: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|r| r.to_string()).collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// List dotfiles and dot-directories
    pub include_hidden: bool,

    /// Apply .gitignore / .ignore rules
    pub respect_gitignore: bool,

    /// Glob patterns relative to the root
    pub exclude: Vec<String>,

    /// Files above this size (bytes) are listed but not read
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_gitignore: false,
            exclude: DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        ScanOptions {
            include_hidden: config.include_hidden,
            respect_gitignore: config.respect_gitignore,
            exclude: config.exclude.clone(),
            max_file_size: config.max_file_size,
        }
    }
}

// =============================================================================
// Extract Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// How Kotlin/Java class documentation is located
    pub kotlin_java: KotlinJavaStrategy,
}
