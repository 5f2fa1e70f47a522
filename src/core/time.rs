//! Date/time conversions built on chrono.
//!
//! Inputs are parsed leniently (RFC 3339, RFC 2822, `%Y-%m-%d %H:%M:%S`,
//! bare dates); naive inputs are interpreted as UTC. Every function returns
//! a tagged error for unparseable input rather than panicking.

use std::str::FromStr;

use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::domain::model::{DateFormats, TimeConversion, TimeDifference, TimeShift};
use crate::utils::error::{Result, ToolError};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    fn label(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "seconds" => Ok(TimeUnit::Seconds),
            "minutes" => Ok(TimeUnit::Minutes),
            "hours" => Ok(TimeUnit::Hours),
            "days" => Ok(TimeUnit::Days),
            "months" => Ok(TimeUnit::Months),
            "years" => Ok(TimeUnit::Years),
            other => Err(ToolError::InvalidInput {
                message: format!("Invalid time unit: {}", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    Add,
    Subtract,
}

impl FromStr for ShiftOp {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(ShiftOp::Add),
            "subtract" => Ok(ShiftOp::Subtract),
            other => Err(ToolError::InvalidInput {
                message: format!("Invalid operation: {} (expected add or subtract)", other),
            }),
        }
    }
}

pub fn ms_to_datetime(input: &str) -> Result<TimeConversion> {
    let ms: i64 = input.trim().parse().map_err(|_| ToolError::InvalidInput {
        message: "Please enter a valid number of milliseconds".to_string(),
    })?;
    let utc = Utc
        .timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| ToolError::InvalidInput {
            message: "Timestamp out of range".to_string(),
        })?;
    Ok(conversion(utc))
}

pub fn datetime_to_ms(input: &str) -> Result<TimeConversion> {
    Ok(conversion(parse_datetime(input)?))
}

pub fn time_difference(start: &str, end: &str) -> Result<TimeDifference> {
    let start_dt = parse_datetime(start)?;
    let end_dt = parse_datetime(end)?;

    let milliseconds = (end_dt.timestamp_millis() - start_dt.timestamp_millis()).abs();
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    Ok(TimeDifference {
        milliseconds,
        seconds,
        minutes,
        hours,
        days,
        human_readable: format!(
            "{} days, {} hours, {} minutes, {} seconds",
            days,
            hours % 24,
            minutes % 60,
            seconds % 60
        ),
        start_date: start_dt.with_timezone(&Local).format(LOCAL_FORMAT).to_string(),
        end_date: end_dt.with_timezone(&Local).format(LOCAL_FORMAT).to_string(),
    })
}

pub fn add_subtract(base: &str, amount: i64, unit: TimeUnit, op: ShiftOp) -> Result<TimeShift> {
    let dt = parse_datetime(base)?;
    let signed = match op {
        ShiftOp::Add => amount,
        ShiftOp::Subtract => -amount,
    };

    let shifted = match unit {
        TimeUnit::Seconds => shift_delta(dt, Duration::try_seconds(signed))?,
        TimeUnit::Minutes => shift_delta(dt, Duration::try_minutes(signed))?,
        TimeUnit::Hours => shift_delta(dt, Duration::try_hours(signed))?,
        TimeUnit::Days => shift_delta(dt, Duration::try_days(signed))?,
        TimeUnit::Months => shift_months(dt, signed)?,
        TimeUnit::Years => shift_months(dt, signed.checked_mul(12).unwrap_or(i64::MAX))?,
    };

    Ok(TimeShift {
        result: shifted.with_timezone(&Local).format(LOCAL_FORMAT).to_string(),
        utc: shifted.to_rfc2822(),
        ms: shifted.timestamp_millis(),
        unix: shifted.timestamp(),
        operation: format!(
            "{} {} {}",
            match op {
                ShiftOp::Add => "Added",
                ShiftOp::Subtract => "Subtracted",
            },
            amount,
            unit.label()
        ),
    })
}

pub fn format_date(input: &str) -> Result<DateFormats> {
    let dt = parse_datetime(input)?;
    let local = dt.with_timezone(&Local);
    Ok(DateFormats {
        iso: dt.to_rfc3339(),
        utc: dt.to_rfc2822(),
        local: local.format(LOCAL_FORMAT).to_string(),
        date_only: dt.format("%a %b %d %Y").to_string(),
        time_only: local.format("%H:%M:%S").to_string(),
        yyyy_mm_dd: dt.format("%Y-%m-%d").to_string(),
        dd_mm_yyyy: dt.format("%d/%m/%Y").to_string(),
        mm_dd_yyyy: dt.format("%m/%d/%Y").to_string(),
        unix: dt.timestamp(),
        ms: dt.timestamp_millis(),
    })
}

/// Snapshot of the current instant, the CLI's stand-in for a live clock
/// panel.
pub fn now_snapshot() -> TimeConversion {
    conversion(Utc::now())
}

fn conversion(utc: DateTime<Utc>) -> TimeConversion {
    TimeConversion {
        utc: utc.to_rfc2822(),
        local: utc.with_timezone(&Local).format(LOCAL_FORMAT).to_string(),
        unix: utc.timestamp(),
        ms: utc.timestamp_millis(),
    }
}

pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let text = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")?;
    Ok(Utc.from_utc_datetime(&naive))
}

fn shift_delta(dt: DateTime<Utc>, delta: Option<Duration>) -> Result<DateTime<Utc>> {
    delta
        .and_then(|d| dt.checked_add_signed(d))
        .ok_or_else(|| ToolError::InvalidInput {
            message: "Shift amount out of range".to_string(),
        })
}

fn shift_months(dt: DateTime<Utc>, months: i64) -> Result<DateTime<Utc>> {
    let span = u32::try_from(months.unsigned_abs()).map_err(|_| ToolError::InvalidInput {
        message: "Shift amount out of range".to_string(),
    })?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(span))
    } else {
        dt.checked_sub_months(Months::new(span))
    };
    shifted.ok_or_else(|| ToolError::InvalidInput {
        message: "Shift amount out of range".to_string(),
    })
}
