use shared_types::AppError;

/// The content pane shown inside the station-master shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Monitoring,
    Duties,
    Alerts,
    Officers,
}

/// Sidebar destinations in display order.
pub const NAV_ITEMS: &[ActiveView] = &[
    ActiveView::Dashboard,
    ActiveView::Monitoring,
    ActiveView::Duties,
    ActiveView::Alerts,
    ActiveView::Officers,
];

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Monitoring => "monitoring",
            ActiveView::Duties => "duties",
            ActiveView::Alerts => "alerts",
            ActiveView::Officers => "officers",
        }
    }

    /// Sidebar label, also used as the header title.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Monitoring => "Live Monitoring",
            ActiveView::Duties => "Duties",
            ActiveView::Alerts => "Alerts",
            ActiveView::Officers => "Officers",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, AppError> {
        NAV_ITEMS
            .iter()
            .copied()
            .find(|view| view.as_str() == key)
            .ok_or_else(|| AppError::not_found(format!("unknown view '{key}'")))
    }
}

/// Local state of the station-master shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub active_view: ActiveView,
    /// Overlay sidebar on narrow viewports.
    pub sidebar_open: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nav selection: switch the pane and close the overlay.
    pub fn select(&mut self, view: ActiveView) {
        tracing::debug!(view = view.as_str(), "nav selected");
        self.active_view = view;
        self.sidebar_open = false;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn title(&self) -> &'static str {
        self.active_view.label()
    }
}
