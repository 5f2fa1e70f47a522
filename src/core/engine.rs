use serde::Serialize;

use crate::config::file::FileConfig;
use crate::config::{Command, JsonCommand, ListCommand, TimeCommand};
use crate::core::list::ListFormat;
use crate::core::{diff, format, list, repair, time};
use crate::domain::ports::InputReader;
use crate::utils::error::Result;

/// Dispatches a parsed command to the pure tool functions and renders the
/// result for display. Inputs are loaded through the [`InputReader`] port;
/// display defaults come from the optional TOML config.
pub struct ToolEngine<R: InputReader> {
    reader: R,
    defaults: FileConfig,
}

impl<R: InputReader> ToolEngine<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            defaults: FileConfig::default(),
        }
    }

    pub fn with_defaults(reader: R, defaults: FileConfig) -> Self {
        Self { reader, defaults }
    }

    pub fn run(&self, command: &Command) -> Result<String> {
        match command {
            Command::Json(cmd) => self.run_json(cmd),
            Command::List(cmd) => self.run_list(cmd),
            Command::Time(cmd) => self.run_time(cmd),
        }
    }

    fn run_json(&self, cmd: &JsonCommand) -> Result<String> {
        match cmd {
            JsonCommand::Repair { input } => {
                let text = self.reader.read(input)?;
                tracing::info!("Repairing JSON from {}", input);
                render(&repair::repair(&text))
            }
            JsonCommand::Diff { first, second } => {
                let a = self.reader.read(first)?;
                let b = self.reader.read(second)?;
                tracing::info!("Diffing {} against {}", first, second);
                render(&diff::diff_texts(&a, &b)?)
            }
            JsonCommand::Prettify { input, indent } => {
                let text = self.reader.read(input)?;
                let indent = indent.or_else(|| self.defaults.indent()).unwrap_or(2);
                format::prettify_with_indent(&text, indent)
            }
            JsonCommand::Stringify { input } => {
                let text = self.reader.read(input)?;
                format::stringify(&text)
            }
            JsonCommand::Flatten { input } => {
                let text = self.reader.read(input)?;
                render(&format::flatten(&text)?)
            }
        }
    }

    fn run_list(&self, cmd: &ListCommand) -> Result<String> {
        match cmd {
            ListCommand::Unique { input, format } => {
                let items = self.read_list(input, format)?;
                render(&list::unique(&items))
            }
            ListCommand::Diff {
                first,
                second,
                format,
            } => {
                let a = self.read_list(first, format)?;
                let b = self.read_list(second, format)?;
                render(&list::difference(&a, &b))
            }
            ListCommand::Intersection {
                first,
                second,
                format,
            } => {
                let a = self.read_list(first, format)?;
                let b = self.read_list(second, format)?;
                render(&list::intersection(&a, &b))
            }
            ListCommand::Duplicates { input, format } => {
                let items = self.read_list(input, format)?;
                render(&list::duplicates(&items))
            }
            ListCommand::Sort { input, format } => {
                let items = self.read_list(input, format)?;
                render(&list::sort(&items))
            }
        }
    }

    fn run_time(&self, cmd: &TimeCommand) -> Result<String> {
        match cmd {
            TimeCommand::MsToDate { ms } => render(&time::ms_to_datetime(ms)?),
            TimeCommand::DateToMs { date } => render(&time::datetime_to_ms(date)?),
            TimeCommand::Diff { start, end } => render(&time::time_difference(start, end)?),
            TimeCommand::Shift {
                date,
                amount,
                unit,
                op,
            } => render(&time::add_subtract(date, *amount, unit.parse()?, op.parse()?)?),
            TimeCommand::Format { date } => render(&time::format_date(date)?),
            TimeCommand::Now => render(&time::now_snapshot()),
        }
    }

    fn read_list(
        &self,
        source: &str,
        format: &Option<String>,
    ) -> Result<Vec<serde_json::Value>> {
        let text = self.reader.read(source)?;
        let format = match format.as_deref().or_else(|| self.defaults.list_format()) {
            Some(name) => name.parse()?,
            None => ListFormat::Auto,
        };
        list::parse_list(&text, format)
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
