//! Page layout model
//!
//! Title, navigation entries and the collapsible sidebar flag shared by
//! the dashboard shell.

/// Header title
pub const DASHBOARD_TITLE: &str = "Crime Foresight Dashboard";

/// A sidebar navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// In-page anchor
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", href: "#overview", icon: "📊" },
    NavItem { label: "Crime Map", href: "#crime-map", icon: "🗺️" },
    NavItem { label: "Predictions", href: "#predictions", icon: "📈" },
    NavItem { label: "Incidents", href: "#incidents", icon: "🚨" },
    NavItem { label: "Reports", href: "#reports", icon: "📄" },
    NavItem { label: "Settings", href: "#settings", icon: "⚙️" },
];

/// Visibility of the sidebar on small screens. Large screens always show it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Classes for the sidebar panel: slid out unless open, pinned on `lg`
    pub fn panel_class(self) -> &'static str {
        if self.open {
            "fixed inset-y-0 left-0 z-50 w-64 translate-x-0 transition-transform lg:translate-x-0"
        } else {
            "fixed inset-y-0 left-0 z-50 w-64 -translate-x-full transition-transform lg:translate-x-0"
        }
    }
}
