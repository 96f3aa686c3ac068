pub mod alert_row;
pub mod duty_row;
pub mod officer_telemetry;

pub use alert_row::AlertRow;
pub use duty_row::DutyRow;
pub use officer_telemetry::OfficerTelemetry;
