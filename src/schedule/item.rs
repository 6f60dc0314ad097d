use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule {id} has an empty interval: {start} is not before {end}")]
    EmptyInterval {
        id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Display category derived from a task's status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Task,
    Sub,
    Quest,
}

impl TaskStatus {
    /// Total mapping - any unknown code (negative or >= 3) falls back to Task
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => TaskStatus::Task,
            1 => TaskStatus::Sub,
            2 => TaskStatus::Quest,
            _ => TaskStatus::Task,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Task => "task",
            TaskStatus::Sub => "sub",
            TaskStatus::Quest => "quest",
        }
    }
}

/// A scheduled task as displayed on the day grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: i32,
}

impl ScheduleItem {
    /// Build an item, rejecting empty or inverted intervals up front
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: i32,
    ) -> Result<Self, ScheduleError> {
        let item = Self {
            id,
            title: title.into(),
            description: description.into(),
            start,
            end,
            status,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the `start < end` invariant
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start >= self.end {
            return Err(ScheduleError::EmptyInterval {
                id: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn status_tag(&self) -> TaskStatus {
        TaskStatus::from_code(self.status)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
