use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMapPin;
use dioxus_free_icons::Icon;
use shared_types::OfficerRecord;
use shared_ui::{Avatar, Badge, BadgeVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Meter};

use crate::components::OfficerTelemetry;
use crate::format_helpers::{battery_tone, officer_status_tone};
use crate::use_station;

/// Roster of every officer on the station's books.
#[component]
pub fn OfficersPanel() -> Element {
    let station = use_station();
    let fixtures = station.fixtures.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        div { class: "panel roster-grid",
            for officer in fixtures.officers() {
                RosterCard { key: "{officer.id}", officer: officer.clone() }
            }
        }
    }
}

#[component]
fn RosterCard(officer: OfficerRecord) -> Element {
    let initial: String = officer.name.chars().take(1).collect();

    rsx! {
        Card { class: "roster-card",
            CardHeader { class: "roster-header",
                Avatar { initials: initial }
                div { class: "roster-identity",
                    CardTitle { "{officer.name}" }
                    p { class: "officer-badge", "{officer.badge}" }
                }
                Badge {
                    variant: BadgeVariant::Outline,
                    tone: officer_status_tone(officer.status),
                    "{officer.status.as_str()}"
                }
            }
            CardContent {
                p { class: "officer-area",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                    "{officer.area}"
                }
                Meter {
                    value: officer.battery,
                    tone: battery_tone(officer.battery),
                    label: "Battery",
                }
            }
            CardFooter {
                OfficerTelemetry { officer: officer.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn one_card_per_officer() {
        let html = render(rsx! { OfficersPanel {} });
        assert_eq!(html.matches("roster-card").count(), 5, "{html}");
        for name in ["Raj Kumar", "Amit Singh", "Priya Sharma", "Deepak Verma", "Sunil Yadav"] {
            assert!(html.contains(name), "{name} missing: {html}");
        }
    }

    #[test]
    fn dead_battery_draws_empty_meter() {
        let html = render(rsx! { OfficersPanel {} });
        assert!(html.contains(r#"aria-valuenow="0""#), "{html}");
        assert!(html.contains("width: 0%;"), "{html}");
    }
}
