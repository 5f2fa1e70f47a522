use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a JSON repair attempt. `issues` lists, in application order,
/// every heuristic that changed the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RepairResult {
    #[serde(rename_all = "camelCase")]
    Fixed {
        original: String,
        fixed: String,
        issues: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        original: String,
        attempted: String,
        issues: Vec<String>,
        error: String,
    },
}

impl RepairResult {
    pub fn success(&self) -> bool {
        matches!(self, RepairResult::Fixed { .. })
    }

    pub fn issues(&self) -> &[String] {
        match self {
            RepairResult::Fixed { issues, .. } | RepairResult::Failed { issues, .. } => issues,
        }
    }

    pub fn fixed_text(&self) -> Option<&str> {
        match self {
            RepairResult::Fixed { fixed, .. } => Some(fixed),
            RepairResult::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub total_differences: usize,
    pub only_in_first: usize,
    pub only_in_second: usize,
    pub value_changed: usize,
    pub type_changed: usize,
}

/// A value present at `path` on one side only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceEntry {
    pub path: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChangeEntry {
    pub path: String,
    pub first_value: Value,
    pub second_value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeChangeEntry {
    pub path: String,
    pub first_value: Value,
    pub second_value: Value,
    pub first_type: String,
    pub second_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffDetails {
    pub only_in_first: Vec<PresenceEntry>,
    pub only_in_second: Vec<PresenceEntry>,
    pub value_changed: Vec<ValueChangeEntry>,
    pub type_changed: Vec<TypeChangeEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub summary: DiffSummary,
    pub details: DiffDetails,
}

impl DiffReport {
    // Counters move in lockstep with the detail lists, so
    // `total_differences` always equals the sum of the four categories.
    pub fn record_only_in_first(&mut self, entry: PresenceEntry) {
        self.summary.only_in_first += 1;
        self.summary.total_differences += 1;
        self.details.only_in_first.push(entry);
    }

    pub fn record_only_in_second(&mut self, entry: PresenceEntry) {
        self.summary.only_in_second += 1;
        self.summary.total_differences += 1;
        self.details.only_in_second.push(entry);
    }

    pub fn record_value_changed(&mut self, entry: ValueChangeEntry) {
        self.summary.value_changed += 1;
        self.summary.total_differences += 1;
        self.details.value_changed.push(entry);
    }

    pub fn record_type_changed(&mut self, entry: TypeChangeEntry) {
        self.summary.type_changed += 1;
        self.summary.total_differences += 1;
        self.details.type_changed.push(entry);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListReport {
    pub count: usize,
    pub items: Vec<Value>,
}

impl ListReport {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Both directions of a two-list difference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDiffReport {
    pub diff1: ListReport,
    pub diff2: ListReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConversion {
    pub utc: String,
    pub local: String,
    pub unix: i64,
    pub ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDifference {
    pub milliseconds: i64,
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub human_readable: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeShift {
    pub result: String,
    pub utc: String,
    pub ms: i64,
    pub unix: i64,
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFormats {
    pub iso: String,
    pub utc: String,
    pub local: String,
    pub date_only: String,
    pub time_only: String,
    #[serde(rename = "yyyy_mm_dd")]
    pub yyyy_mm_dd: String,
    #[serde(rename = "dd_mm_yyyy")]
    pub dd_mm_yyyy: String,
    #[serde(rename = "mm_dd_yyyy")]
    pub mm_dd_yyyy: String,
    pub unix: i64,
    pub ms: i64,
}
