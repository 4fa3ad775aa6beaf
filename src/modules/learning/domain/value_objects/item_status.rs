use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a learning item.
///
/// Closed set: the transition table in `StatusMachine` matches exhaustively,
/// so adding a fifth status is a compile-time-visible change everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    Backlog,
    InProgress,
    Paused,
    Done,
}

impl ItemStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemStatus::Backlog => "Backlog",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Paused => "Paused",
            ItemStatus::Done => "Done",
        }
    }

    /// All statuses, in forward lifecycle order.
    pub fn all() -> [ItemStatus; 4] {
        [
            ItemStatus::Backlog,
            ItemStatus::InProgress,
            ItemStatus::Paused,
            ItemStatus::Done,
        ]
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backlog" => Ok(ItemStatus::Backlog),
            "in progress" | "in_progress" | "inprogress" => Ok(ItemStatus::InProgress),
            "paused" => Ok(ItemStatus::Paused),
            "done" => Ok(ItemStatus::Done),
            other => Err(format!("Unknown item status: {}", other)),
        }
    }
}
