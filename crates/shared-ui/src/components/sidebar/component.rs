use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdX};
use dioxus_free_icons::Icon;

// ─── Layout components ─────────────────────────────────────────────────

/// Flex row holding the Sidebar and the SidebarInset.
#[component]
pub fn SidebarLayout(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sidebar-layout", {children} }
    }
}

/// The navigation sidebar.
///
/// Always visible on wide viewports. On narrow viewports it slides in as
/// an overlay when `open` is set, with a backdrop that calls `on_close`.
/// The caller owns the open flag.
#[component]
pub fn Sidebar(
    open: bool,
    on_close: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// A nav entry. Highlighted when `active`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "sidebar-menu-button",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Menu button shown in the page header on narrow viewports.
#[component]
pub fn SidebarTrigger(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Open navigation",
            onclick: move |evt| onclick.call(evt),
            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
        }
    }
}

/// Close button inside the sidebar header, narrow viewports only.
#[component]
pub fn SidebarClose(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "sidebar-close",
            r#type: "button",
            "aria-label": "Close navigation",
            onclick: move |evt| onclick.call(evt),
            Icon::<LdX> { icon: LdX, width: 20, height: 20 }
        }
    }
}

/// The main content column beside the Sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sidebar_has_no_backdrop() {
        let html = dioxus_ssr::render_element(rsx! {
            Sidebar { open: false, on_close: move |_| {}, "nav" }
        });
        assert!(html.contains(r#"data-state="closed""#), "{html}");
        assert!(!html.contains("sidebar-backdrop"), "{html}");
    }

    #[test]
    fn open_sidebar_renders_backdrop() {
        let html = dioxus_ssr::render_element(rsx! {
            Sidebar { open: true, on_close: move |_| {}, "nav" }
        });
        assert!(html.contains(r#"data-state="open""#), "{html}");
        assert!(html.contains("sidebar-backdrop"), "{html}");
    }

    #[test]
    fn active_menu_button_is_marked() {
        let html = dioxus_ssr::render_element(rsx! {
            SidebarMenuButton { active: true, onclick: move |_| {}, "Duties" }
        });
        assert!(html.contains(r#"data-active="true""#), "{html}");
        assert!(html.contains(r#"aria-current="page""#), "{html}");
    }
}
