//! CLI Common Utilities
//!
//! Shared context for command handlers: the merged configuration and the
//! console output sink.

use std::path::Path;

use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::document::{StructureDocumenter, SystemClock};
use crate::extract::DocExtractor;
use crate::types::Result;

/// Command execution context
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Styled status lines
    pub output: Output,
}

impl CommandContext {
    /// Load configuration; `config_path` replaces the project config file
    pub fn load(config_path: Option<&Path>, quiet: bool) -> Result<Self> {
        let config = ConfigLoader::load(config_path)?;
        Ok(Self::with_config(config, quiet))
    }

    pub fn with_config(config: Config, quiet: bool) -> Self {
        Self {
            config,
            output: Output::quiet(quiet),
        }
    }

    /// Documenter using the configured extraction strategy
    pub fn documenter(&self) -> Result<StructureDocumenter> {
        let extractor = DocExtractor::with_strategy(self.config.extract.kotlin_java)?;
        Ok(StructureDocumenter::with_parts(
            extractor,
            Box::new(SystemClock),
        ))
    }
}
