use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClipboardList;
use dioxus_free_icons::Icon;
use shared_types::{DutyRecord, DutyStatus, ALL_DUTY_STATUSES};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::components::DutyRow;
use crate::format_helpers::{counted, duty_status_tone};
use crate::use_station;

/// Number of duties in `status`.
fn count_with_status(duties: &[DutyRecord], status: DutyStatus) -> usize {
    duties.iter().filter(|d| d.status == status).count()
}

/// Every duty assignment with a per-status summary.
#[component]
pub fn DutiesPanel() -> Element {
    let station = use_station();
    let fixtures = station.fixtures.clone();
    let duties = fixtures.duties();
    let title = counted("All Duties", duties.len());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        div { class: "panel",
            div { class: "summary-row",
                for status in ALL_DUTY_STATUSES.iter().copied() {
                    div { key: "{status.as_str()}", class: "summary-chip",
                        Badge { variant: BadgeVariant::Outline, tone: duty_status_tone(status), "{status.label()}" }
                        span { class: "summary-count", "{count_with_status(duties, status)}" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 }
                        "{title}"
                    }
                    CardDescription { "Duty assignments across the station" }
                }
                CardContent {
                    div { class: "row-list",
                        for duty in duties {
                            DutyRow { key: "{duty.id}", duty: duty.clone() }
                        }
                    }
                }
            }
        }
    }
}
