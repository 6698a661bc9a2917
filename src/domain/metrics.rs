//! Illustrative figures for the eCommerce and Analytics panels.
//!
//! Values are display data only; nothing here is derived from the orders.

use serde::{Deserialize, Serialize};

/// Direction of a stat tile's change indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline number shown in the top row of the eCommerce tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    /// Signed percentage label, e.g. "+11.01%"
    pub delta: String,
    /// Hex colour for the delta text
    pub accent: String,
}

impl StatTile {
    pub fn new(label: &str, value: &str, delta: &str, accent: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.to_string(),
            accent: accent.to_string(),
        }
    }

    pub fn trend(&self) -> Trend {
        if self.delta.trim_start().starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    /// Parses the delta label into a signed percentage
    pub fn delta_percent(&self) -> Option<f64> {
        self.delta
            .trim()
            .trim_end_matches('%')
            .trim_start_matches('+')
            .parse()
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub amount: String,
}

/// One month of the "Projections vs Actuals" bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub month: String,
    pub projected: u32,
    pub actual: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsPoint {
    pub month: String,
    pub users: u32,
}

pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub fn stat_tiles() -> Vec<StatTile> {
    vec![
        StatTile::new("Customers", "3,781", "+11.01%", "#6fb3ff"),
        StatTile::new("Orders", "1,219", "-0.03%", "#ffd06b"),
        StatTile::new("Revenue", "$695", "+15.03%", "#9ef0c7"),
        StatTile::new("Growth", "30.1%", "+6.08%", "#ff6b6b"),
    ]
}

pub fn top_products() -> Vec<TopProduct> {
    [
        ("ASOS Ridley High Waist", "$79.49", 82, "$4,518.18"),
        ("Marco Lightweight Shirt", "$128.50", 37, "$4,754.50"),
        ("Half Sleeve Shirt", "$39.99", 64, "$2,559.36"),
        ("Lightweight Jacket", "$20.00", 32, "$3,480.00"),
        ("Marco Shoes", "$79.49", 44, "$1,965.81"),
    ]
    .into_iter()
    .map(|(name, price, quantity, amount)| TopProduct {
        name: name.to_string(),
        price: price.to_string(),
        quantity,
        amount: amount.to_string(),
    })
    .collect()
}

pub fn projections() -> Vec<Projection> {
    let values = [(16, 3), (22, 5), (18, 4), (26, 6), (14, 2), (22, 4)];

    MONTHS
        .iter()
        .zip(values)
        .map(|(month, (projected, actual))| Projection {
            month: month.to_string(),
            projected,
            actual,
        })
        .collect()
}

pub fn analytics_series() -> Vec<AnalyticsPoint> {
    let users = [400, 700, 200, 900, 500, 800];

    MONTHS
        .iter()
        .zip(users)
        .map(|(month, users)| AnalyticsPoint {
            month: month.to_string(),
            users,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_tile_trend() {
        let tiles = stat_tiles();
        let trends: Vec<Trend> = tiles.iter().map(StatTile::trend).collect();
        assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Up, Trend::Up]);
    }

    #[test]
    fn test_stat_tile_delta_percent() {
        let tiles = stat_tiles();
        assert_eq!(tiles[0].delta_percent(), Some(11.01));
        assert_eq!(tiles[1].delta_percent(), Some(-0.03));

        let broken = StatTile::new("X", "1", "n/a", "#000");
        assert_eq!(broken.delta_percent(), None);
    }

    #[test]
    fn test_series_cover_six_months() {
        let proj = projections();
        assert_eq!(proj.len(), 6);
        assert_eq!(proj[3].month, "Apr");
        assert_eq!((proj[3].projected, proj[3].actual), (26, 6));

        let series = analytics_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[5].users, 800);
    }

    #[test]
    fn test_top_products() {
        let products = top_products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[1].name, "Marco Lightweight Shirt");
        assert_eq!(products[1].quantity, 37);
    }
}
