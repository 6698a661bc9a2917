use tracing::{debug, warn};

use crate::{
    config::{DashboardConfig, PagePolicy},
    domain::Order,
    error::{DashboardError, Result},
};

/// Types whose rows can be matched by the table's search box
pub trait Searchable {
    /// Fields checked by the search filter
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any searchable field.
    ///
    /// An empty query matches every row.
    fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Search and pagination state over a fixed set of rows.
///
/// Rows are never mutated or reordered; the filter keeps seed order.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    rows: Vec<T>,
    query: String,
    page: usize,
    page_size: usize,
    policy: PagePolicy,
}

/// The order table on the Default dashboard
pub type OrderListView = ListView<Order>;

impl<T: Searchable> ListView<T> {
    /// Creates a view on page 1 with an empty query and default config
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            query: String::new(),
            page: 1,
            page_size: DashboardConfig::DEFAULT_PAGE_SIZE,
            policy: PagePolicy::default(),
        }
    }

    pub fn with_config(rows: Vec<T>, config: &DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            page_size: config.page_size,
            policy: config.page_policy,
            ..Self::new(rows)
        })
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if self.policy == PagePolicy::ResetOnQuery {
            self.page = 1;
        }
        debug!(query = %self.query, page = self.page, "list query changed");
    }

    /// Moves to page `page` (1-based). No upper bound is enforced.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        if page == 0 {
            warn!("rejected page index 0");
            return Err(DashboardError::InvalidPage(page));
        }
        self.page = page;
        debug!(page, "list page changed");
        Ok(())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    fn matching(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows
            .iter()
            .filter(move |row| row.matches_query(&self.query))
    }

    /// All rows matching the query, in seed order
    pub fn filtered(&self) -> Vec<&T> {
        self.matching().collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.matching().count()
    }

    /// Rows on the current page; empty when the page is past the end
    pub fn visible_page(&self) -> Vec<&T> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        self.matching().skip(start).take(self.page_size).collect()
    }

    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size).max(1)
    }
}
