use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::{AlertPriority, AlertRecord, ALL_PRIORITIES};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::components::AlertRow;
use crate::format_helpers::{alert_priority_tone, counted};
use crate::use_station;

fn count_with_priority(alerts: &[AlertRecord], priority: AlertPriority) -> usize {
    alerts.iter().filter(|a| a.priority == priority).count()
}

/// All alerts in fixture order, headed by a per-priority summary.
#[component]
pub fn AlertsPanel() -> Element {
    let station = use_station();
    let fixtures = station.fixtures.clone();
    let alerts = fixtures.alerts();
    let title = counted("All Alerts", alerts.len());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        div { class: "panel",
            div { class: "summary-row",
                for priority in ALL_PRIORITIES.iter().copied() {
                    div { key: "{priority.as_str()}", class: "summary-chip",
                        Badge {
                            variant: BadgeVariant::Outline,
                            tone: alert_priority_tone(priority),
                            "{priority.as_str()}"
                        }
                        span { class: "summary-count", "{count_with_priority(alerts, priority)}" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                        "{title}"
                    }
                    CardDescription { "Alerts raised by officers in the field" }
                }
                CardContent {
                    div { class: "row-list",
                        for alert in alerts {
                            AlertRow { key: "{alert.id}", alert: alert.clone() }
                        }
                    }
                }
            }
        }
    }
}
