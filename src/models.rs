//! Frontend Models
//!
//! Data structures matching the remote `todos` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier assigned by the store.
///
/// The table may hand it out as a number or a string; only equality is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => TaskId::new(n.to_string()),
            RawId::Text(s) => TaskId::new(s),
        })
    }
}

/// Task record (matches table row)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "task")]
    pub text: String,
    #[serde(rename = "is_completed", default)]
    pub completed: bool,
    #[serde(rename = "is_important", default)]
    pub important: bool,
    #[serde(rename = "is_archived", default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn flag(&self, flag: TaskFlag) -> bool {
        match flag {
            TaskFlag::Completed => self.completed,
            TaskFlag::Important => self.important,
            TaskFlag::Archived => self.archived,
        }
    }

    pub fn set_flag(&mut self, flag: TaskFlag, value: bool) {
        match flag {
            TaskFlag::Completed => self.completed = value,
            TaskFlag::Important => self.important = value,
            TaskFlag::Archived => self.archived = value,
        }
    }
}

/// The three independent status flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFlag {
    Completed,
    Important,
    Archived,
}

/// Tab selector categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Important,
    Complete,
    Archived,
}

impl Category {
    /// Tabs in display order
    pub const ALL: [Category; 4] = [Category::All, Category::Important, Category::Complete, Category::Archived];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Important => "Important",
            Category::Complete => "Complete",
            Category::Archived => "Archived",
        }
    }

    /// Whether a task belongs to this category
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Category::All => true,
            Category::Important => task.important,
            Category::Complete => task.completed,
            Category::Archived => task.archived,
        }
    }
}

/// Insert payload; all flags start false
#[derive(Debug, Clone, Serialize)]
pub struct NewTask<'a> {
    pub task: &'a str,
    pub is_completed: bool,
    pub is_important: bool,
    pub is_archived: bool,
}

impl<'a> NewTask<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            task: text,
            is_completed: false,
            is_important: false,
            is_archived: false,
        }
    }
}

/// Partial update payload, only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl TaskPatch {
    pub fn text(text: &str) -> Self {
        Self { task: Some(text.to_string()), ..Default::default() }
    }

    pub fn flag(flag: TaskFlag, value: bool) -> Self {
        let mut patch = Self::default();
        match flag {
            TaskFlag::Completed => patch.is_completed = Some(value),
            TaskFlag::Important => patch.is_important = Some(value),
            TaskFlag::Archived => patch.is_archived = Some(value),
        }
        patch
    }
}
