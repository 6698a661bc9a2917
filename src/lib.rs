//! # Bytwind Core
//!
//! State core for the Bytwind admin dashboard.
//!
//! This crate owns everything the dashboard decides without drawing: the
//! searchable, paginated order table, the drag-to-reorder card grid, and the
//! navigation, theme, and settings state around them. Rendering is left to
//! whatever shell consumes these types.
//!
//! ```
//! use bytwind_core::DashboardSession;
//!
//! let mut session = DashboardSession::default();
//! session.orders_mut().set_query("pending");
//!
//! assert_eq!(session.orders().visible_page().len(), 4);
//! assert_eq!(session.orders().page_count(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use config::{DashboardConfig, PagePolicy};
pub use domain::{
    card::{default_cards, Card},
    order::{seed_orders, Order, OrderId, OrderStatus},
    settings::{AppliedSettings, SettingsForm, ThemeMode},
};
pub use error::{DashboardError, Result};
pub use session::DashboardSession;
pub use view::{CardGrid, OrderListView, VisualEmphasis};
