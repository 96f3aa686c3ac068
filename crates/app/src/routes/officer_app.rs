use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClipboardList, LdLogOut, LdPower, LdShield};
use dioxus_free_icons::Icon;
use shared_types::Session;
use shared_ui::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Tone,
};

use crate::auth::use_auth;
use crate::components::{AlertRow, DutyRow};
use crate::format_helpers::counted;
use crate::use_station;

/// Mobile-first view for a signed-in field officer.
///
/// The on-duty toggle is local to this view and starts off duty.
#[component]
pub fn OfficerApp(session: Session) -> Element {
    let mut auth = use_auth();
    let station = use_station();
    let mut on_duty = use_signal(|| false);

    let fixtures = station.fixtures.clone();
    let open_duties = fixtures.open_duties();
    let duties_title = counted("Open Duties", open_duties.len());
    let badge = session.badge().unwrap_or_default().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./officer_app.css") }

        div { class: "officer-app",
            header { class: "officer-app-header",
                div { class: "officer-app-brand",
                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                    span { "{station.dashboard.brand_name}" }
                }
                div { class: "officer-app-identity",
                    Avatar { initials: session.initial() }
                    div {
                        p { class: "officer-app-name", "{session.display_name()}" }
                        p { class: "officer-app-badge", "{badge}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| auth.logout(),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign out"
                }
            }

            main { class: "officer-app-body",
                Card { tone: if on_duty() { Tone::Success } else { Tone::Neutral },
                    CardContent { class: "duty-toggle",
                        div {
                            p { class: "duty-toggle-label", "Duty Status" }
                            Badge {
                                variant: BadgeVariant::Outline,
                                tone: if on_duty() { Tone::Success } else { Tone::Muted },
                                if on_duty() { "On Duty" } else { "Off Duty" }
                            }
                        }
                        Button {
                            variant: if on_duty() { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                            onclick: move |_| {
                                let next = !on_duty();
                                tracing::info!(on_duty = next, "duty status changed");
                                on_duty.set(next);
                            },
                            Icon::<LdPower> { icon: LdPower, width: 16, height: 16 }
                            if on_duty() { "Go Off Duty" } else { "Go On Duty" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 }
                            "{duties_title}"
                        }
                        CardDescription { "Assignments that are pending or in progress" }
                    }
                    CardContent {
                        div { class: "row-list",
                            for duty in open_duties {
                                DutyRow { key: "{duty.id}", duty: duty.clone() }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                            "Recent Alerts"
                        }
                    }
                    CardContent {
                        div { class: "row-list",
                            for alert in fixtures.recent_alerts() {
                                AlertRow { key: "{alert.id}", alert: alert.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
