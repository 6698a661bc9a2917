use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboards listed in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    #[default]
    Default,
    ECommerce,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 2] = [Self::Default, Self::ECommerce];
}

impl fmt::Display for SidebarTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::ECommerce => write!(f, "eCommerce"),
        }
    }
}

/// Pages of the drawer-based demo dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoPage {
    #[default]
    Home,
    Analytics,
    Reports,
    Settings,
}

impl DemoPage {
    pub const ALL: [DemoPage; 4] = [Self::Home, Self::Analytics, Self::Reports, Self::Settings];
}

impl fmt::Display for DemoPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Analytics => write!(f, "Analytics"),
            Self::Reports => write!(f, "Reports"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

/// Which view is active and whether the mobile drawer is showing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub tab: SidebarTab,
    pub page: DemoPage,
    pub drawer_open: bool,
}

impl Navigation {
    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.tab = tab;
    }

    /// Switching page always closes the mobile drawer
    pub fn select_page(&mut self, page: DemoPage) {
        self.page = page;
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}
