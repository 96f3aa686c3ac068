use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::AlertRecord;
use shared_ui::{Badge, BadgeVariant};

use crate::format_helpers::alert_priority_tone;

/// One alert, tinted by priority.
#[component]
pub fn AlertRow(alert: AlertRecord) -> Element {
    let tone = alert_priority_tone(alert.priority);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rows.css") }
        div { class: "alert-row", "data-tone": tone.as_str(),
            div { class: "alert-row-icon",
                Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
            }
            div { class: "row-body",
                div { class: "row-badges",
                    Badge { variant: BadgeVariant::Outline, tone, "{alert.alert_type}" }
                    span { class: "row-time", "{alert.time}" }
                }
                p { class: "row-title", "{alert.officer}" }
                p { class: "row-detail", "{alert.message}" }
            }
        }
    }
}
