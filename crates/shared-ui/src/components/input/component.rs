use dioxus::prelude::*;

/// Labeled text input for forms.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_type() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { label: "Email", input_type: "email", placeholder: "officer@station.gov" }
        });
        assert!(html.contains("Email"), "{html}");
        assert!(html.contains(r#"type="email""#), "{html}");
        assert!(html.contains("officer@station.gov"), "{html}");
    }

    #[test]
    fn omits_label_when_empty() {
        let html = dioxus_ssr::render_element(rsx! { Input { value: "x" } });
        assert!(!html.contains("input-label"), "{html}");
    }
}
