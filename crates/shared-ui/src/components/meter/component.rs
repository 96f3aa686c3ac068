use dioxus::prelude::*;

use crate::Tone;

/// Horizontal fill bar for a 0..=100 reading such as device battery.
///
/// Values above 100 are drawn full.
#[component]
pub fn Meter(
    value: u8,
    #[props(default)] tone: Tone,
    #[props(default)] label: String,
) -> Element {
    let value = value.min(100);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "meter",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            "aria-label": "{label}",
            "data-tone": tone.as_str(),
            div {
                class: "meter-fill",
                style: "width: {value}%;",
            }
        }
    }
}
