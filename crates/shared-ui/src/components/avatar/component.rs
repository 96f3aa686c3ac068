use dioxus::prelude::*;

/// Round badge showing a user's initial.
#[component]
pub fn Avatar(
    initials: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "avatar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "avatar-initials", "{initials}" }
        }
    }
}
