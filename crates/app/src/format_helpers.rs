//! Shared mappings from domain values to UI tones and labels.

use shared_types::{
    AlertPriority, DutyStatus, DutyType, OfficerStatus, SignalStrength, StatTone,
};
use shared_ui::{BadgeVariant, Tone};
use station::monitoring::BatteryLevel;

/// Badge tone for an officer's status.
pub fn officer_status_tone(status: OfficerStatus) -> Tone {
    match status {
        OfficerStatus::Active => Tone::Success,
        OfficerStatus::Issue => Tone::Warning,
        OfficerStatus::Offline => Tone::Danger,
    }
}

/// Battery readings go red under 20% and amber under 50%.
pub fn battery_tone(percent: u8) -> Tone {
    match BatteryLevel::from_percent(percent) {
        BatteryLevel::Critical => Tone::Danger,
        BatteryLevel::Low => Tone::Warning,
        BatteryLevel::Healthy => Tone::Success,
    }
}

pub fn signal_tone(signal: SignalStrength) -> Tone {
    match signal {
        SignalStrength::Strong => Tone::Success,
        SignalStrength::Weak => Tone::Warning,
        SignalStrength::None => Tone::Danger,
    }
}

/// Running duties read green, queued ones amber, finished ones muted.
pub fn duty_status_tone(status: DutyStatus) -> Tone {
    match status {
        DutyStatus::InProgress => Tone::Success,
        DutyStatus::Pending => Tone::Warning,
        DutyStatus::Completed => Tone::Muted,
    }
}

/// Patrols get the filled badge; other duty kinds the secondary one.
pub fn duty_type_variant(duty_type: DutyType) -> BadgeVariant {
    match duty_type {
        DutyType::Patrol => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    }
}

/// Row tint for an alert. Low-priority alerts stay muted.
pub fn alert_priority_tone(priority: AlertPriority) -> Tone {
    match priority {
        AlertPriority::High => Tone::Danger,
        AlertPriority::Medium => Tone::Warning,
        AlertPriority::Low => Tone::Muted,
    }
}

/// CSS class suffix for a stat card's icon chip.
pub fn stat_tone_class(tone: StatTone) -> String {
    format!("stat-icon stat-icon-{}", tone.as_str())
}

/// "Officers (3)" style heading with a count.
pub fn counted(label: &str, count: usize) -> String {
    format!("{label} ({count})")
}
