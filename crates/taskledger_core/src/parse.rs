//! Record-line grammar parsing.
//!
//! # Responsibility
//! - Turn one comma-separated record line into a validated `Task`.
//! - Parse the leading decimal count line of the framed input.
//!
//! # Invariants
//! - The first invalid record fails the whole load; callers never see a
//!   partially parsed task.
//! - Fields beyond what the declared kind requires are ignored.

use crate::model::task::{Task, TaskKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for load and parse operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load-time error for the framed record input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The kind field parsed as an integer outside the known codes.
    InvalidTaskKind { record: usize, value: i64 },
    /// A field required by the declared kind is missing or unparseable.
    MalformedField {
        record: usize,
        field: &'static str,
        message: String,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTaskKind { record, value } => {
                write!(f, "invalid task kind in record {record}: {value}")
            }
            Self::MalformedField {
                record,
                field,
                message,
            } => write!(f, "record {record} has malformed {field}: {message}"),
        }
    }
}

impl Error for LoadError {}

fn malformed(record: usize, field: &'static str, message: String) -> LoadError {
    LoadError::MalformedField {
        record,
        field,
        message,
    }
}

/// Parses the leading count line of the `count + records` framing.
pub(crate) fn parse_count(line: &str) -> LoadResult<usize> {
    let raw = line.trim();
    raw.parse::<usize>().map_err(|_| {
        malformed(
            0,
            "count",
            format!("expected a non-negative task count, got `{raw}`"),
        )
    })
}

/// Parses one record line: `kind,description[,dueInDays[,assignee]]`.
///
/// Commas are plain separators, there is no escaping. The kind code is
/// validated before any other field is looked at.
pub(crate) fn parse_record(record: usize, line: &str) -> LoadResult<Task> {
    let mut fields = line.split(',');

    // split() always yields at least one item, possibly empty.
    let kind_field = fields.next().unwrap_or("");
    let code: i64 = kind_field.parse().map_err(|_| {
        malformed(
            record,
            "kind",
            format!("expected an integer kind code, got `{kind_field}`"),
        )
    })?;
    let kind = TaskKind::from_code(code).ok_or(LoadError::InvalidTaskKind {
        record,
        value: code,
    })?;

    let description = match fields.next() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            return Err(malformed(
                record,
                "description",
                "description is required and must be non-empty".to_string(),
            ))
        }
    };

    let task = match kind {
        TaskKind::Plain => Task::plain(description),
        TaskKind::Deadline => {
            let due_in_days = parse_due_in_days(record, fields.next())?;
            Task::deadline(description, due_in_days)
        }
        TaskKind::Delegated => {
            let due_in_days = parse_due_in_days(record, fields.next())?;
            let assignee = match fields.next() {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => {
                    return Err(malformed(
                        record,
                        "assignee",
                        "delegated tasks require an assignee".to_string(),
                    ))
                }
            };
            Task::delegated(description, due_in_days, assignee)
        }
    };

    Ok(task)
}

fn parse_due_in_days(record: usize, field: Option<&str>) -> LoadResult<i64> {
    let raw = field.ok_or_else(|| {
        malformed(
            record,
            "due_in_days",
            "deadline tasks require a day count".to_string(),
        )
    })?;
    raw.parse::<i64>().map_err(|_| {
        malformed(
            record,
            "due_in_days",
            format!("expected an integer day count, got `{raw}`"),
        )
    })
}
