use serde::{Deserialize, Serialize};

use crate::AppError;

/// Field status reported for an officer's device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OfficerStatus {
    Active,
    Issue,
    Offline,
}

impl OfficerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficerStatus::Active => "active",
            OfficerStatus::Issue => "issue",
            OfficerStatus::Offline => "offline",
        }
    }
}

/// Radio signal quality of an officer's device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Strong,
    Weak,
    None,
}

impl SignalStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Strong => "strong",
            SignalStrength::Weak => "weak",
            SignalStrength::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A field officer as shown on the monitoring map and roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfficerRecord {
    pub id: String,
    pub name: String,
    pub badge: String,
    pub status: OfficerStatus,
    pub location: GeoPoint,
    pub area: String,
    /// Device battery, 0..=100.
    pub battery: u8,
    pub signal: SignalStrength,
    pub last_update: String,
}

/// Status filter offered by the monitoring dropdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Issue,
    Offline,
}

/// All filters in dropdown order.
pub const ALL_STATUS_FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Active,
    StatusFilter::Issue,
    StatusFilter::Offline,
];

impl StatusFilter {
    /// Key used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Issue => "issue",
            StatusFilter::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Officers",
            StatusFilter::Active => "Active",
            StatusFilter::Issue => "Has Issues",
            StatusFilter::Offline => "Offline",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, AppError> {
        ALL_STATUS_FILTERS
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| AppError::not_found(format!("unknown status filter '{key}'")))
    }

    /// Whether an officer with `status` passes this filter.
    pub fn matches(&self, status: OfficerStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == OfficerStatus::Active,
            StatusFilter::Issue => status == OfficerStatus::Issue,
            StatusFilter::Offline => status == OfficerStatus::Offline,
        }
    }
}
