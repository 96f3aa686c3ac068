pub mod alerts;
pub mod duties;
pub mod monitoring;
pub mod officers;
pub mod overview;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdClipboardList, LdLayoutDashboard, LdLogOut, LdMapPin, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Session;
use shared_ui::{
    Avatar, Button, ButtonVariant, PageHeader, PageTitle, Sidebar, SidebarClose, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarLayout, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarTrigger,
};
use station::shell::NAV_ITEMS;
use station::{ActiveView, ShellState};

use crate::auth::use_auth;
use crate::use_station;

/// Station-master shell: sidebar navigation, header, and the active panel.
///
/// The active view and the sidebar flag are local to the shell and reset
/// on every sign-in.
#[component]
pub fn DashboardShell(session: Session) -> Element {
    let mut auth = use_auth();
    let station = use_station();
    let mut shell = use_signal(ShellState::new);

    let state = shell();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarLayout {
            Sidebar {
                open: state.sidebar_open,
                on_close: move |_| shell.write().close_sidebar(),

                SidebarHeader {
                    div { class: "sidebar-brand-icon",
                        Icon::<LdShield> { icon: LdShield, width: 24, height: 24 }
                    }
                    div { class: "sidebar-brand",
                        h1 { class: "sidebar-brand-name", "{station.dashboard.brand_name}" }
                        p { class: "sidebar-brand-caption", "Station Dashboard" }
                    }
                    SidebarClose { onclick: move |_| shell.write().close_sidebar() }
                }

                SidebarContent {
                    SidebarMenu {
                        for view in NAV_ITEMS.iter().copied() {
                            SidebarMenuItem { key: "{view.as_str()}",
                                SidebarMenuButton {
                                    active: state.active_view == view,
                                    onclick: move |_| shell.write().select(view),
                                    NavIcon { view }
                                    "{view.label()}"
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        Avatar { initials: session.initial() }
                        div { class: "sidebar-user-text",
                            p { class: "sidebar-user-name", "{session.display_name()}" }
                            p { class: "sidebar-user-email", "{session.email()}" }
                        }
                    }
                    Button {
                        class: "sidebar-sign-out",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| auth.logout(),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }

            SidebarInset {
                PageHeader {
                    SidebarTrigger { onclick: move |_| shell.write().open_sidebar() }
                    PageTitle {
                        title: "{state.title()}",
                        subtitle: "{station.dashboard.subtitle}",
                    }
                }

                div { class: "dashboard-content",
                    match state.active_view {
                        ActiveView::Dashboard => rsx! { overview::DashboardPanel {} },
                        ActiveView::Monitoring => rsx! { monitoring::MonitoringPanel {} },
                        ActiveView::Duties => rsx! { duties::DutiesPanel {} },
                        ActiveView::Alerts => rsx! { alerts::AlertsPanel {} },
                        ActiveView::Officers => rsx! { officers::OfficersPanel {} },
                    }
                }
            }
        }
    }
}

#[component]
fn NavIcon(view: ActiveView) -> Element {
    match view {
        ActiveView::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } },
        ActiveView::Monitoring => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
        ActiveView::Duties => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 } },
        ActiveView::Alerts => rsx! { Icon::<LdBell> { icon: LdBell, width: 20, height: 20 } },
        ActiveView::Officers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
    }
}
