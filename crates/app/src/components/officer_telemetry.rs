use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBattery, LdClock, LdSignal};
use dioxus_free_icons::Icon;
use shared_types::OfficerRecord;

use crate::format_helpers::{battery_tone, signal_tone};

/// Battery, signal, and last-update readings for an officer's device.
#[component]
pub fn OfficerTelemetry(officer: OfficerRecord) -> Element {
    let battery = battery_tone(officer.battery);
    let signal = signal_tone(officer.signal);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rows.css") }
        div { class: "telemetry",
            span { class: "telemetry-item", "data-tone": battery.as_str(),
                Icon::<LdBattery> { icon: LdBattery, width: 12, height: 12 }
                "{officer.battery}%"
            }
            span { class: "telemetry-item", "data-tone": signal.as_str(),
                Icon::<LdSignal> { icon: LdSignal, width: 12, height: 12 }
                "{officer.signal.as_str()}"
            }
            span { class: "telemetry-item",
                Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                "{officer.last_update}"
            }
        }
    }
}
