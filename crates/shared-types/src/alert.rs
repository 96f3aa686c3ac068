use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

/// All priorities, most urgent first.
pub const ALL_PRIORITIES: &[AlertPriority] = &[
    AlertPriority::High,
    AlertPriority::Medium,
    AlertPriority::Low,
];

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::High => "high",
            AlertPriority::Medium => "medium",
            AlertPriority::Low => "low",
        }
    }
}

/// An alert raised by or about an officer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub id: String,
    /// Free-form alert kind, e.g. "SOS" or "Battery Low".
    pub alert_type: String,
    pub officer: String,
    pub message: String,
    pub time: String,
    pub priority: AlertPriority,
}
