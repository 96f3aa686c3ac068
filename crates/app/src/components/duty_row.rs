use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;
use shared_types::DutyRecord;
use shared_ui::{Badge, BadgeVariant};

use crate::format_helpers::{duty_status_tone, duty_type_variant};

/// One duty: type and status badges, area, assigned officers, start time.
#[component]
pub fn DutyRow(duty: DutyRecord) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rows.css") }
        div { class: "duty-row",
            div { class: "row-body",
                div { class: "row-badges",
                    Badge { variant: duty_type_variant(duty.duty_type), "{duty.duty_type.as_str()}" }
                    Badge {
                        variant: BadgeVariant::Outline,
                        tone: duty_status_tone(duty.status),
                        "{duty.status.label()}"
                    }
                }
                p { class: "row-title", "{duty.area}" }
                p { class: "row-detail", "{duty.officers_label()}" }
            }
            div { class: "row-time",
                Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                "{duty.start_time}"
            }
        }
    }
}
