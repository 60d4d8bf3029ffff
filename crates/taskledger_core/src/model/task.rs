//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record for plain, deadline and delegated tasks.
//! - Provide the one-way completion lifecycle helper.
//!
//! # Invariants
//! - `due_in_days` exists iff the kind is not `Plain`.
//! - `assignee` exists iff the kind is `Delegated`.
//! - Description, kind and kind-dependent fields never change after
//!   creation; only the completion flag moves, and only to `true`.

use serde::{Deserialize, Serialize};

/// Unified category for all task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Undated task, description only.
    Plain,
    /// Task with a day-count deadline.
    Deadline,
    /// Task with a deadline, handed to someone else.
    Delegated,
}

impl TaskKind {
    /// Maps an input-grammar kind code to a kind.
    ///
    /// Returns `None` for any code outside 0, 1, 2.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Plain),
            1 => Some(Self::Deadline),
            2 => Some(Self::Delegated),
            _ => None,
        }
    }

    /// Returns the input-grammar code for this kind.
    pub fn code(self) -> i64 {
        match self {
            Self::Plain => 0,
            Self::Deadline => 1,
            Self::Delegated => 2,
        }
    }
}

/// Kind-dependent task data.
///
/// Modeled as one tagged variant per kind so a deadline cannot exist
/// without its day count and an assignee cannot exist without a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskDetails {
    Plain,
    Deadline { due_in_days: i64 },
    Delegated { due_in_days: i64, assignee: String },
}

impl TaskDetails {
    /// Returns the kind discriminant for this variant.
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Plain => TaskKind::Plain,
            Self::Deadline { .. } => TaskKind::Deadline,
            Self::Delegated { .. } => TaskKind::Delegated,
        }
    }
}

/// Canonical task record.
///
/// Fields are private so the only reachable mutation is `complete()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    #[serde(flatten)]
    details: TaskDetails,
    #[serde(default)]
    completed: bool,
}

impl Task {
    /// Creates an undated task.
    ///
    /// Every constructor starts the task incomplete.
    pub fn plain(description: impl Into<String>) -> Self {
        Self::new(description, TaskDetails::Plain)
    }

    /// Creates a task due in `due_in_days` days.
    pub fn deadline(description: impl Into<String>, due_in_days: i64) -> Self {
        Self::new(description, TaskDetails::Deadline { due_in_days })
    }

    /// Creates a task due in `due_in_days` days and assigned to `assignee`.
    pub fn delegated(
        description: impl Into<String>,
        due_in_days: i64,
        assignee: impl Into<String>,
    ) -> Self {
        Self::new(
            description,
            TaskDetails::Delegated {
                due_in_days,
                assignee: assignee.into(),
            },
        )
    }

    fn new(description: impl Into<String>, details: TaskDetails) -> Self {
        Self {
            description: description.into(),
            details,
            completed: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &TaskDetails {
        &self.details
    }

    pub fn kind(&self) -> TaskKind {
        self.details.kind()
    }

    /// Day count until due. `None` for plain tasks.
    pub fn due_in_days(&self) -> Option<i64> {
        match &self.details {
            TaskDetails::Plain => None,
            TaskDetails::Deadline { due_in_days }
            | TaskDetails::Delegated { due_in_days, .. } => Some(*due_in_days),
        }
    }

    /// Assignee name. `None` unless the task is delegated.
    pub fn assignee(&self) -> Option<&str> {
        match &self.details {
            TaskDetails::Delegated { assignee, .. } => Some(assignee.as_str()),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task completed. Idempotent; there is no way back.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}
