use serde::Serialize;
use tracing::debug;

use crate::{
    config::DashboardConfig,
    domain::{
        default_cards, seed_orders, AppliedSettings, DemoPage, Navigation, Order, SettingsForm,
        SidebarTab, ThemeMode,
    },
    error::Result,
    view::{CardGrid, OrderListView},
};

/// What the order table needs to draw one page
#[derive(Debug, Serialize)]
pub struct OrderPageSnapshot<'a> {
    pub query: &'a str,
    pub page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub rows: Vec<&'a Order>,
}

impl OrderPageSnapshot<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// All dashboard state owned by one viewer session
#[derive(Debug, Clone)]
pub struct DashboardSession {
    config: DashboardConfig,
    orders: OrderListView,
    cards: CardGrid,
    navigation: Navigation,
    settings: AppliedSettings,
}

impl DashboardSession {
    /// Builds a session over fresh seed data
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let orders = OrderListView::with_config(seed_orders(), &config)?;
        let settings = AppliedSettings {
            theme: config.theme,
            ..AppliedSettings::default()
        };

        Ok(Self {
            config,
            orders,
            cards: CardGrid::new(default_cards()),
            navigation: Navigation::default(),
            settings,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn orders(&self) -> &OrderListView {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderListView {
        &mut self.orders
    }

    pub fn cards(&self) -> &CardGrid {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut CardGrid {
        &mut self.cards
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.navigation.select_tab(tab);
        debug!(%tab, "sidebar tab selected");
    }

    pub fn select_page(&mut self, page: DemoPage) {
        self.navigation.select_page(page);
        debug!(%page, "demo page selected");
    }

    pub fn toggle_drawer(&mut self) {
        self.navigation.toggle_drawer();
    }

    pub fn theme(&self) -> ThemeMode {
        self.settings.theme
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.settings.theme = self.settings.theme.toggle();
        debug!(theme = %self.settings.theme, "theme toggled");
        self.settings.theme
    }

    pub fn settings(&self) -> &AppliedSettings {
        &self.settings
    }

    /// Opens a settings form seeded with the current settings
    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::new(self.settings)
    }

    /// Applies saved settings and returns the query string the shell should
    /// put in the address bar
    pub fn apply_settings(&mut self, settings: AppliedSettings) -> Result<String> {
        let query = settings.to_query_string()?;
        self.settings = settings;
        debug!(%query, "settings applied");
        Ok(query)
    }

    pub fn order_page_snapshot(&self) -> OrderPageSnapshot<'_> {
        OrderPageSnapshot {
            query: self.orders.query(),
            page: self.orders.page(),
            page_count: self.orders.page_count(),
            total_matches: self.orders.filtered_len(),
            rows: self.orders.visible_page(),
        }
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        let config = DashboardConfig::default();
        Self {
            orders: OrderListView::new(seed_orders()),
            cards: CardGrid::new(default_cards()),
            navigation: Navigation::default(),
            settings: AppliedSettings {
                theme: config.theme,
                ..AppliedSettings::default()
            },
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::PagePolicy, domain::OrderStatus};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("bytwind_core=debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        init_tracing();
        let mut first = DashboardSession::default();
        let second = DashboardSession::default();

        first.orders_mut().set_query("pending");
        first.cards_mut().begin_drag("sales");
        first.cards_mut().hover_over("health");

        assert_eq!(second.orders().query(), "");
        assert_eq!(second.cards().order(), vec!["sales", "users", "health"]);
        assert_eq!(first.cards().order(), vec!["users", "health", "sales"]);
    }

    #[test]
    fn test_new_uses_config() {
        let config = DashboardConfig {
            page_size: 10,
            page_policy: PagePolicy::Preserve,
            theme: ThemeMode::Dark,
        };
        let session = DashboardSession::new(config).unwrap();

        assert_eq!(session.orders().page_size(), 10);
        assert_eq!(session.orders().page_count(), 2);
        assert_eq!(session.theme(), ThemeMode::Dark);
        assert_eq!(session.config().page_policy, PagePolicy::Preserve);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DashboardConfig {
            page_size: 0,
            ..DashboardConfig::default()
        };
        assert!(DashboardSession::new(config).is_err());
    }

    #[test]
    fn test_navigation_and_theme() {
        let mut session = DashboardSession::default();

        session.select_tab(SidebarTab::ECommerce);
        session.toggle_drawer();
        session.select_page(DemoPage::Settings);

        assert_eq!(session.navigation().tab, SidebarTab::ECommerce);
        assert_eq!(session.navigation().page, DemoPage::Settings);
        assert!(!session.navigation().drawer_open);

        assert_eq!(session.toggle_theme(), ThemeMode::Dark);
        assert_eq!(session.toggle_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_settings_apply_only_on_submit() {
        init_tracing();
        let mut session = DashboardSession::default();

        let mut form = session.settings_form();
        form.select_theme(ThemeMode::Dark);
        form.set_notifications(false);
        assert_eq!(session.theme(), ThemeMode::Light);

        let query = session.apply_settings(form.submit()).unwrap();
        assert_eq!(query, "theme=dark&notifications=off");
        assert_eq!(session.theme(), ThemeMode::Dark);
        assert!(!session.settings().notifications);
    }

    #[test]
    fn test_order_page_snapshot() {
        let mut session = DashboardSession::default();
        session.orders_mut().set_query("approved");

        let snapshot = session.order_page_snapshot();
        assert_eq!(snapshot.total_matches, 4);
        assert_eq!(snapshot.page_count, 1);
        assert!(snapshot
            .rows
            .iter()
            .all(|o| o.status == OrderStatus::Approved));

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"query\":\"approved\""));
        assert!(json.contains("#CM9804"));
    }
}
