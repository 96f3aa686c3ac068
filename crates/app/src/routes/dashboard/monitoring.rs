use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFilter, LdMapPin, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{OfficerRecord, StatusFilter, ALL_STATUS_FILTERS};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, SelectOption};
use station::monitoring::{marker_position, StatusCounts};
use station::MonitoringState;

use crate::components::OfficerTelemetry;
use crate::format_helpers::{counted, officer_status_tone};
use crate::use_station;

/// Live map and officer list with a status filter.
///
/// `initial_filter` only seeds the dropdown; the panel owns the state after
/// the first render.
#[component]
pub fn MonitoringPanel(#[props(default)] initial_filter: StatusFilter) -> Element {
    let station = use_station();
    let mut monitoring = use_signal(move || MonitoringState {
        status_filter: initial_filter,
        ..MonitoringState::new()
    });

    let fixtures = station.fixtures.clone();
    let officers = fixtures.officers();
    let counts = StatusCounts::of(officers);
    let state = monitoring();
    let visible: Vec<OfficerRecord> = state.visible(officers).into_iter().cloned().collect();
    let list_title = counted("Officers", visible.len());

    let options: Vec<SelectOption> = ALL_STATUS_FILTERS
        .iter()
        .map(|f| SelectOption::new(f.as_str(), f.label()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        div { class: "panel",
            div { class: "monitoring-controls",
                div { class: "monitoring-filter",
                    Icon::<LdFilter> { icon: LdFilter, width: 16, height: 16 }
                    FormSelect {
                        value: "{state.status_filter.as_str()}",
                        options,
                        aria_label: "Filter by status",
                        onchange: move |key: String| match StatusFilter::from_key(&key) {
                            Ok(filter) => monitoring.write().set_filter(filter),
                            Err(err) => tracing::warn!(%err, "ignoring filter value"),
                        },
                    }
                }
                div { class: "monitoring-counts",
                    span { class: "status-dot-label", span { class: "status-dot", "data-tone": "success" } "Active ({counts.active})" }
                    span { class: "status-dot-label", span { class: "status-dot", "data-tone": "warning" } "Issue ({counts.issue})" }
                    span { class: "status-dot-label", span { class: "status-dot", "data-tone": "danger" } "Offline ({counts.offline})" }
                }
            }

            div { class: "monitoring-grid",
                Card { class: "monitoring-map-card",
                    CardHeader {
                        CardTitle {
                            Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                            "Live Map"
                        }
                    }
                    CardContent {
                        div { class: "map",
                            div { class: "map-grid" }
                            for (index, officer) in visible.iter().enumerate() {
                                button {
                                    key: "marker-{officer.id}",
                                    class: "map-marker",
                                    r#type: "button",
                                    style: marker_position(index).style(),
                                    "data-selected": state.is_selected(&officer.id),
                                    "aria-label": "{officer.name}",
                                    onclick: {
                                        let id = officer.id.clone();
                                        move |_| monitoring.write().select_officer(id.clone())
                                    },
                                    span { class: "map-marker-dot", "data-tone": officer_status_tone(officer.status).as_str(),
                                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                                    }
                                    if state.is_selected(&officer.id) {
                                        span { class: "map-marker-label", "{officer.name}" }
                                    }
                                }
                            }
                            div { class: "map-legend",
                                p { class: "map-legend-title", "Legend" }
                                span { class: "status-dot-label", span { class: "status-dot", "data-tone": "success" } "Active" }
                                span { class: "status-dot-label", span { class: "status-dot", "data-tone": "warning" } "Issue" }
                                span { class: "status-dot-label", span { class: "status-dot", "data-tone": "danger" } "Offline" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                            "{list_title}"
                        }
                    }
                    CardContent {
                        div { class: "officer-list",
                            for officer in visible.iter() {
                                button {
                                    key: "entry-{officer.id}",
                                    class: "officer-entry",
                                    r#type: "button",
                                    "data-selected": state.is_selected(&officer.id),
                                    onclick: {
                                        let id = officer.id.clone();
                                        move |_| monitoring.write().select_officer(id.clone())
                                    },
                                    div { class: "officer-entry-head",
                                        div {
                                            p { class: "officer-name", "{officer.name}" }
                                            p { class: "officer-badge", "{officer.badge}" }
                                        }
                                        Badge {
                                            variant: BadgeVariant::Outline,
                                            tone: officer_status_tone(officer.status),
                                            "{officer.status.as_str()}"
                                        }
                                    }
                                    p { class: "officer-area",
                                        Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                                        "{officer.area}"
                                    }
                                    OfficerTelemetry { officer: officer.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
