use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClipboardList, LdMapPin, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{StatCard, StatKind};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::components::{AlertRow, DutyRow};
use crate::format_helpers::stat_tone_class;
use crate::use_station;

/// Headline stats plus the most recent duties and alerts.
#[component]
pub fn DashboardPanel() -> Element {
    let station = use_station();
    let fixtures = station.fixtures.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        div { class: "panel",
            div { class: "stat-grid",
                for stat in fixtures.stats() {
                    StatTile { key: "{stat.title}", stat: stat.clone() }
                }
            }

            div { class: "panel-columns",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 }
                            "Recent Duties"
                        }
                        CardDescription { "Latest duty assignments and status" }
                    }
                    CardContent {
                        div { class: "row-list",
                            for duty in fixtures.recent_duties() {
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
                        CardDescription { "Active alerts requiring attention" }
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

#[component]
fn StatTile(stat: StatCard) -> Element {
    rsx! {
        Card {
            CardHeader { class: "stat-header",
                CardTitle { class: "stat-title", "{stat.title}" }
                span { class: stat_tone_class(stat.tone),
                    StatIcon { kind: stat.kind }
                }
            }
            CardContent {
                div { class: "stat-value", "{stat.value}" }
                p { class: "stat-description", "{stat.description}" }
                div { class: "stat-trend",
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 12, height: 12 }
                    "{stat.trend}"
                }
            }
        }
    }
}

#[component]
fn StatIcon(kind: StatKind) -> Element {
    match kind {
        StatKind::ActiveOfficers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
        StatKind::ActiveDuties => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 } },
        StatKind::PendingAlerts => rsx! { Icon::<LdBell> { icon: LdBell, width: 20, height: 20 } },
        StatKind::CoverageArea => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn shows_all_four_stats() {
        let html = render(rsx! { DashboardPanel {} });
        for title in ["Active Officers", "Active Duties", "Pending Alerts", "Coverage Area"] {
            assert!(html.contains(title), "{title} missing: {html}");
        }
        assert!(html.contains("+3 from yesterday"), "{html}");
        assert!(html.contains("stat-icon-violet"), "{html}");
    }

    #[test]
    fn recent_lists_are_capped() {
        let html = render(rsx! { DashboardPanel {} });
        assert_eq!(html.matches(r#"class="duty-row""#).count(), 4, "{html}");
        assert_eq!(html.matches(r#"class="alert-row""#).count(), 3, "{html}");
        assert!(html.contains("Railway Station Area"), "{html}");
        assert!(!html.contains("District Court"), "{html}");
    }
}
