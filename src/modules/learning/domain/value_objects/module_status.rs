use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion status of a single module within a learning item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleStatus {
    Pending,
    InProgress,
    Done,
}

impl ModuleStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleStatus::Pending => "Pending",
            ModuleStatus::InProgress => "In Progress",
            ModuleStatus::Done => "Done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ModuleStatus::Done)
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ModuleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ModuleStatus::Pending),
            "in progress" | "in_progress" | "inprogress" => Ok(ModuleStatus::InProgress),
            "done" => Ok(ModuleStatus::Done),
            other => Err(format!("Unknown module status: {}", other)),
        }
    }
}
