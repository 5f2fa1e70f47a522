use crate::utils::error::Result;

/// Source of raw tool input. The CLI reads files or stdin; tests plug in
/// an in-memory implementation.
pub trait InputReader {
    fn read(&self, source: &str) -> Result<String>;
}
