use dioxus::prelude::*;

/// Sticky header across the top of the content pane.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

/// Title and subtitle stacked on the left of the header.
#[component]
pub fn PageTitle(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "page-title-block",
            h2 { class: "page-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}
