//! Ordered task collection and its query/report operations.
//!
//! # Responsibility
//! - Build the collection from framed line input in one strict pass.
//! - Produce the description, detail, due-today and reminder line reports.
//! - Track completion and accumulate reward points.
//!
//! # Invariants
//! - A task's 0-based load index is its permanent identifier.
//! - The collection length is fixed at load; no insertion or removal.
//! - The first bad record aborts the load; a failed load yields no
//!   collection at all.

use crate::model::task::{Task, TaskDetails};
use crate::parse::{parse_count, parse_record, LoadError, LoadResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for completion calls addressed outside the loaded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task index {} out of range for {} tasks",
            self.index, self.len
        )
    }
}

impl Error for IndexOutOfRange {}

/// Ordered, index-addressed task collection.
///
/// Owns every record exclusively for its whole lifetime. All operations
/// are synchronous single passes over at most `len()` tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Loads `count` record lines in input order.
    ///
    /// Stops at the first bad record and returns its error; nothing built
    /// so far survives. Lines beyond `count` are left unread.
    pub fn load<I>(count: usize, lines: I) -> LoadResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let mut tasks = Vec::with_capacity(count);
        for record in 0..count {
            let line = lines.next().ok_or_else(|| LoadError::MalformedField {
                record,
                field: "record",
                message: "record line missing from source".to_string(),
            })?;
            tasks.push(parse_record(record, line.as_ref())?);
        }
        Ok(Self { tasks })
    }

    /// Loads from the framed form: a decimal count line followed by that
    /// many record lines.
    pub fn from_lines<I>(lines: I) -> LoadResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let count_line = lines.next().ok_or_else(|| LoadError::MalformedField {
            record: 0,
            field: "count",
            message: "count line missing from source".to_string(),
        })?;
        let count = parse_count(count_line.as_ref())?;
        Self::load(count, lines)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// One `{index} {description}` line per task, unfiltered.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{index} {}", task.description()))
    }

    /// One full detail line per task, unfiltered.
    ///
    /// Shape: `{index} {[X]|[ ]} {description}`, then
    /// ` | Due in {days} days` for dated kinds, then
    /// ` | Assigned to {assignee}` for delegated ones.
    pub fn details(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| detail_line(index, task))
    }

    /// Lines for dated tasks whose day count is exactly zero.
    ///
    /// Completion is ignored twice over here: completed tasks still
    /// qualify, and the marker is always rendered `[ ]`.
    pub fn due_today(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_in_days() == Some(0))
            .map(|(index, task)| {
                format!("{index} [ ] {} | Due in 0 days", task.description())
            })
    }

    /// Reminder lines for incomplete dated tasks.
    ///
    /// Delegated tasks nudge the assignee; deadline tasks restate the day
    /// count. Plain tasks never remind.
    pub fn reminders(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .filter(|task| !task.is_completed())
            .filter_map(|task| match task.details() {
                TaskDetails::Plain => None,
                TaskDetails::Deadline { due_in_days } => Some(format!(
                    "The task \"{}\" is due in {due_in_days} days",
                    task.description()
                )),
                TaskDetails::Delegated { assignee, .. } => Some(format!(
                    "Sending a reminder to complete \"{}\" to {assignee}",
                    task.description()
                )),
            })
    }

    /// Marks the task at `index` completed.
    ///
    /// Idempotent for already-completed tasks. Out-of-range indexes are a
    /// caller contract violation and fail without touching any task.
    pub fn complete(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        task.complete();
        Ok(())
    }

    /// Sums the day counts of completed dated tasks.
    ///
    /// Plain tasks are excluded outright, completed or not. Day counts are
    /// trusted as given, so negative inputs flow into the sum.
    pub fn total_reward_points(&self) -> i64 {
        self.tasks
            .iter()
            .filter(|task| task.is_completed())
            .filter_map(|task| task.due_in_days())
            .sum()
    }
}

fn detail_line(index: usize, task: &Task) -> String {
    let marker = if task.is_completed() { "[X]" } else { "[ ]" };
    let mut line = format!("{index} {marker} {}", task.description());
    if let Some(days) = task.due_in_days() {
        line.push_str(&format!(" | Due in {days} days"));
    }
    if let Some(assignee) = task.assignee() {
        line.push_str(&format!(" | Assigned to {assignee}"));
    }
    line
}
