use dioxus::prelude::*;

/// One `<option>` of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A themed native select for filter dropdowns.
///
/// The selection is constrained to `options`; `onchange` receives the
/// chosen option's value.
#[component]
pub fn FormSelect(
    /// Current selected value.
    value: String,
    options: Vec<SelectOption>,
    #[props(default)] onchange: Option<EventHandler<String>>,
    /// Accessible name when no visible label is rendered.
    #[props(default)]
    aria_label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            select {
                class: "form-select",
                "aria-label": "{aria_label}",
                disabled: disabled,
                onchange: move |evt: Event<FormData>| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
