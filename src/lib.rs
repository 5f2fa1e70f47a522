pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command, JsonCommand, ListCommand, TimeCommand};
pub use crate::config::{cli::LocalInput, FileConfig};

pub use crate::core::diff::{diff, diff_texts};
#[cfg(feature = "cli")]
pub use crate::core::engine::ToolEngine;
pub use crate::core::repair::repair;
pub use crate::domain::model::{DiffReport, RepairResult};
pub use crate::utils::error::{Result, ToolError};
