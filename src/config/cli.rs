use std::fs;
use std::io::Read;

use crate::domain::ports::InputReader;
use crate::utils::error::Result;

/// Reads tool input from the local filesystem, or from stdin when the
/// source is `-`.
#[derive(Debug, Clone, Default)]
pub struct LocalInput;

impl InputReader for LocalInput {
    fn read(&self, source: &str) -> Result<String> {
        if source == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        Ok(fs::read_to_string(source)?)
    }
}
