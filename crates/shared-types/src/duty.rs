use serde::{Deserialize, Serialize};

/// Kind of duty assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DutyType {
    Patrol,
    /// Crowd/security arrangement for an event.
    Bandobast,
    Checkpoint,
    Escort,
}

impl DutyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyType::Patrol => "Patrol",
            DutyType::Bandobast => "Bandobast",
            DutyType::Checkpoint => "Checkpoint",
            DutyType::Escort => "Escort",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Pending,
    InProgress,
    Completed,
}

/// All duty statuses in display order.
pub const ALL_DUTY_STATUSES: &[DutyStatus] = &[
    DutyStatus::InProgress,
    DutyStatus::Pending,
    DutyStatus::Completed,
];

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::Pending => "pending",
            DutyStatus::InProgress => "in_progress",
            DutyStatus::Completed => "completed",
        }
    }

    /// The key with underscores shown as spaces ("in progress").
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DutyStatus::Completed)
    }
}

/// A duty assignment listed on the dashboard and duties panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DutyRecord {
    pub id: String,
    pub duty_type: DutyType,
    pub area: String,
    /// Assigned officer names, in assignment order.
    pub officers: Vec<String>,
    pub status: DutyStatus,
    pub start_time: String,
}

impl DutyRecord {
    pub fn officers_label(&self) -> String {
        self.officers.join(", ")
    }
}
