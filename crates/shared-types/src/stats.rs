use serde::{Deserialize, Serialize};

/// Accent used to color a stat card icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatTone {
    Emerald,
    Blue,
    Amber,
    Violet,
}

impl StatTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatTone::Emerald => "emerald",
            StatTone::Blue => "blue",
            StatTone::Amber => "amber",
            StatTone::Violet => "violet",
        }
    }
}

/// Which headline figure a stat card shows. Drives the icon choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    ActiveOfficers,
    ActiveDuties,
    PendingAlerts,
    CoverageArea,
}

/// One headline figure on the dashboard panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: String,
    pub tone: StatTone,
}
