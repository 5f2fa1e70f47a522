use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, ToolError};

/// Optional TOML defaults for display options, merged under CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub output: Option<OutputConfig>,
    pub list: Option<ListConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub indent: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConfig {
    pub format: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(ToolError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ToolError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })
    }

    pub fn indent(&self) -> Option<usize> {
        self.output.as_ref().and_then(|output| output.indent)
    }

    pub fn list_format(&self) -> Option<&str> {
        self.list.as_ref().and_then(|list| list.format.as_deref())
    }
}
