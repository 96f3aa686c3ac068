//! Read-only sample data standing in for a real data source.

use shared_types::{
    AlertPriority, AlertRecord, DutyRecord, DutyStatus, DutyType, GeoPoint, OfficerRecord,
    OfficerStatus, SignalStrength, StatCard, StatKind, StatTone,
};

/// Number of duties shown under "Recent Duties" on the dashboard.
pub const RECENT_DUTY_COUNT: usize = 4;

/// Number of alerts shown under "Recent Alerts" on the dashboard.
pub const RECENT_ALERT_COUNT: usize = 3;

/// Source of the collections the panels render.
///
/// Implementations never hand out mutable access; panels only filter.
pub trait FixtureRepository {
    fn officers(&self) -> &[OfficerRecord];
    fn duties(&self) -> &[DutyRecord];
    fn alerts(&self) -> &[AlertRecord];
    fn stats(&self) -> &[StatCard];

    fn recent_duties(&self) -> &[DutyRecord] {
        let duties = self.duties();
        &duties[..duties.len().min(RECENT_DUTY_COUNT)]
    }

    fn recent_alerts(&self) -> &[AlertRecord] {
        let alerts = self.alerts();
        &alerts[..alerts.len().min(RECENT_ALERT_COUNT)]
    }

    /// Duties that are not completed, in fixture order.
    fn open_duties(&self) -> Vec<&DutyRecord> {
        self.duties().iter().filter(|d| d.status.is_open()).collect()
    }
}

/// The hard-coded CopMap sample station.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFixtures {
    officers: Vec<OfficerRecord>,
    duties: Vec<DutyRecord>,
    alerts: Vec<AlertRecord>,
    stats: Vec<StatCard>,
}

impl Default for StaticFixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureRepository for StaticFixtures {
    fn officers(&self) -> &[OfficerRecord] {
        &self.officers
    }

    fn duties(&self) -> &[DutyRecord] {
        &self.duties
    }

    fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    fn stats(&self) -> &[StatCard] {
        &self.stats
    }
}

#[allow(clippy::too_many_arguments)]
fn officer(
    id: &str,
    name: &str,
    badge: &str,
    status: OfficerStatus,
    (lat, lng): (f64, f64),
    area: &str,
    battery: u8,
    signal: SignalStrength,
    last_update: &str,
) -> OfficerRecord {
    OfficerRecord {
        id: id.to_string(),
        name: name.to_string(),
        badge: badge.to_string(),
        status,
        location: GeoPoint { lat, lng },
        area: area.to_string(),
        battery,
        signal,
        last_update: last_update.to_string(),
    }
}

fn duty(
    id: &str,
    duty_type: DutyType,
    area: &str,
    officers: &[&str],
    status: DutyStatus,
    start_time: &str,
) -> DutyRecord {
    DutyRecord {
        id: id.to_string(),
        duty_type,
        area: area.to_string(),
        officers: officers.iter().map(|name| name.to_string()).collect(),
        status,
        start_time: start_time.to_string(),
    }
}

fn alert(
    id: &str,
    alert_type: &str,
    officer: &str,
    message: &str,
    time: &str,
    priority: AlertPriority,
) -> AlertRecord {
    AlertRecord {
        id: id.to_string(),
        alert_type: alert_type.to_string(),
        officer: officer.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        priority,
    }
}

fn stat(
    kind: StatKind,
    title: &str,
    value: &str,
    description: &str,
    trend: &str,
    tone: StatTone,
) -> StatCard {
    StatCard {
        kind,
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        trend: trend.to_string(),
        tone,
    }
}

impl StaticFixtures {
    pub fn new() -> Self {
        use AlertPriority::{High, Low, Medium};
        use DutyStatus::{Completed, InProgress, Pending};
        use OfficerStatus::{Active, Issue, Offline};

        let officers = vec![
            officer("1", "Raj Kumar", "BADGE-1234", Active, (28.6139, 77.209), "Sector 15, Main Market", 85, SignalStrength::Strong, "2 min ago"),
            officer("2", "Amit Singh", "BADGE-2345", Active, (28.6229, 77.219), "Sector 18, Mall Road", 45, SignalStrength::Strong, "1 min ago"),
            officer("3", "Priya Sharma", "BADGE-3456", Issue, (28.6339, 77.229), "Gandhi Stadium", 12, SignalStrength::Weak, "5 min ago"),
            officer("4", "Deepak Verma", "BADGE-4567", Active, (28.6049, 77.199), "Railway Station", 92, SignalStrength::Strong, "30 sec ago"),
            officer("5", "Sunil Yadav", "BADGE-5678", Offline, (28.5949, 77.189), "Bus Terminal", 0, SignalStrength::None, "15 min ago"),
        ];

        let duties = vec![
            duty("1", DutyType::Patrol, "Sector 15, Main Market", &["Raj Kumar", "Amit Singh"], InProgress, "08:00 AM"),
            duty("2", DutyType::Bandobast, "Gandhi Stadium", &["Priya Sharma", "Deepak Verma", "Sunil Yadav"], InProgress, "09:30 AM"),
            duty("3", DutyType::Patrol, "Sector 22, Bus Stand", &["Vikram Patel"], Pending, "10:00 AM"),
            duty("4", DutyType::Patrol, "Railway Station Area", &["Meena Kumari", "Ravi Shankar"], Completed, "06:00 AM"),
            duty("5", DutyType::Checkpoint, "Sector 62 Crossing", &["Anil Mehta", "Kavita Rao"], Pending, "02:00 PM"),
            duty("6", DutyType::Escort, "District Court", &["Suresh Nair"], Completed, "07:30 AM"),
        ];

        let alerts = vec![
            alert("1", "SOS", "Constable Raj Kumar", "Emergency assistance needed", "5 min ago", High),
            alert("2", "Battery Low", "Constable Amit Singh", "Device battery at 15%", "12 min ago", Medium),
            alert("3", "Offline", "Constable Priya Sharma", "Lost GPS signal", "28 min ago", Low),
            alert("4", "Geofence", "Constable Deepak Verma", "Left assigned patrol zone", "41 min ago", Medium),
            alert("5", "Check-in", "Constable Sunil Yadav", "Missed scheduled check-in", "1 hr ago", Low),
        ];

        let stats = vec![
            stat(StatKind::ActiveOfficers, "Active Officers", "24", "Currently on duty", "+3 from yesterday", StatTone::Emerald),
            stat(StatKind::ActiveDuties, "Active Duties", "12", "Ongoing assignments", "8 patrol, 4 bandobast", StatTone::Blue),
            stat(StatKind::PendingAlerts, "Pending Alerts", "3", "Requires attention", "2 urgent, 1 normal", StatTone::Amber),
            stat(StatKind::CoverageArea, "Coverage Area", "15", "Active zones", "All sectors covered", StatTone::Violet),
        ];

        Self {
            officers,
            duties,
            alerts,
            stats,
        }
    }
}
