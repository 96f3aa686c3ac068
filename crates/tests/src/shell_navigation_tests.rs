use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;
use station::shell::NAV_ITEMS;
use station::{ActiveView, ShellState};

#[test]
fn test_shell_starts_on_dashboard_with_sidebar_closed() {
    let shell = ShellState::new();
    assert_eq!(shell.active_view, ActiveView::Dashboard);
    assert!(!shell.sidebar_open);
    assert_eq!(shell.title(), "Dashboard");
}

#[test]
fn test_every_nav_item_selects_and_closes_sidebar() {
    for &view in NAV_ITEMS {
        let mut shell = ShellState::new();
        shell.open_sidebar();
        shell.select(view);
        assert_eq!(shell.active_view, view);
        assert!(!shell.sidebar_open, "{view:?} left the sidebar open");
        assert_eq!(shell.title(), view.label());
    }
}

#[test]
fn test_nav_labels_in_sidebar_order() {
    let labels: Vec<_> = NAV_ITEMS.iter().map(|v| v.label()).collect();
    assert_eq!(
        labels,
        ["Dashboard", "Live Monitoring", "Duties", "Alerts", "Officers"]
    );
}

#[test]
fn test_sidebar_toggle_leaves_view_alone() {
    let mut shell = ShellState::new();
    shell.select(ActiveView::Alerts);
    shell.toggle_sidebar();
    assert!(shell.sidebar_open);
    shell.close_sidebar();
    assert!(!shell.sidebar_open);
    assert_eq!(shell.active_view, ActiveView::Alerts);
}

#[test]
fn test_unknown_view_key_is_not_found() {
    let err = ActiveView::from_key("reports").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(ActiveView::from_key("monitoring").unwrap(), ActiveView::Monitoring);
}
