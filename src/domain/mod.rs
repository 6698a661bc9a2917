pub mod card;
pub mod metrics;
pub mod navigation;
pub mod order;
pub mod report;
pub mod settings;

pub use card::{default_cards, Card};
pub use metrics::{AnalyticsPoint, Projection, StatTile, TopProduct, Trend};
pub use navigation::{DemoPage, Navigation, SidebarTab};
pub use order::{seed_orders, Order, OrderId, OrderStatus, StatusTone};
pub use report::{Report, ReportStatus};
pub use settings::{AppliedSettings, SettingsForm, ThemeMode};
