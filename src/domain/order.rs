use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::view::list_view::Searchable;

/// Unique identifier for an order row (e.g., #CM9801)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    const PREFIX: &'static str = "#CM";

    /// Creates a new OrderId from its order number
    pub fn new(number: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, number))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = crate::error::DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let digits = normalized
            .strip_prefix(Self::PREFIX)
            .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()));

        match digits {
            Some(_) => Ok(Self(normalized)),
            None => Err(crate::error::DashboardError::InvalidOrderId(s.to_string())),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of an order in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

/// Colour family used for the status chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Info,
    Success,
    Warning,
    Primary,
    Error,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::InProgress,
        Self::Complete,
        Self::Pending,
        Self::Approved,
        Self::Rejected,
    ];

    /// Label shown in the table; also the text matched by search
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::InProgress => StatusTone::Info,
            Self::Complete => StatusTone::Success,
            Self::Pending => StatusTone::Warning,
            Self::Approved => StatusTone::Primary,
            Self::Rejected => StatusTone::Error,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = crate::error::DashboardError;

    /// Accepts the display label or its compact lowercase form ("in progress", "inprogress")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match compact.as_str() {
            "inprogress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(crate::error::DashboardError::InvalidStatus(s.to_string())),
        }
    }
}

/// A row of the order table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub owner_name: String,
    pub avatar_url: String,
    pub project: String,
    pub address: String,
    /// Free-form label such as "Just now" or "Feb 2, 2023"; never parsed
    pub date_label: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: OrderId,
        owner_name: impl Into<String>,
        project: impl Into<String>,
        address: impl Into<String>,
        date_label: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            owner_name: owner_name.into(),
            avatar_url: String::new(),
            project: project.into(),
            address: address.into(),
            date_label: date_label.into(),
            status,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.owner_name.as_str(),
            self.project.as_str(),
            self.address.as_str(),
            self.status.label(),
        ]
    }
}

/// Builds the order table's seed rows in display order.
///
/// Each call returns a fresh set owned by the caller.
pub fn seed_orders() -> Vec<Order> {
    use OrderStatus::*;

    let rows: [(&str, &str, &str, &str, OrderStatus); 19] = [
        ("Natali Craig", "Landing Page", "Meadow Lane Oakland", "Just now", InProgress),
        ("Kate Morrison", "CRM Admin pages", "Larry Son Francisco", "A minute ago", Complete),
        ("Drew Cano", "Client Project", "Bagwell Avenue Ocala", "1 hour ago", Pending),
        ("Orlando Diggs", "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", Approved),
        ("Andi Lane", "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", Rejected),
        ("Sam Lee", "Mobile App", "Pine Street Seattle", "Feb 3, 2023", Complete),
        ("Linda Park", "Web Portal", "Elm Road Dallas", "Feb 4, 2023", Pending),
        ("Mike Chen", "API Integration", "Maple Ave Boston", "Feb 5, 2023", Approved),
        ("Sara Kim", "E-commerce", "Oak Lane Miami", "Feb 6, 2023", Rejected),
        ("Tom Ford", "Landing Page", "Cedar St Denver", "Feb 7, 2023", InProgress),
        ("Emily Stone", "CRM Admin pages", "Birch Blvd Houston", "Feb 8, 2023", Complete),
        ("Chris Paul", "Client Project", "Spruce Ct Atlanta", "Feb 9, 2023", Pending),
        ("Anna Bell", "Admin Dashboard", "Willow Dr Chicago", "Feb 10, 2023", Approved),
        ("James Dean", "App Landing Page", "Aspen Way Phoenix", "Feb 11, 2023", Rejected),
        ("Olivia King", "Mobile App", "Magnolia St Orlando", "Feb 12, 2023", Complete),
        ("Lucas Gray", "Web Portal", "Dogwood Rd Charlotte", "Feb 13, 2023", Pending),
        ("Mia Clark", "API Integration", "Hickory Ave Tampa", "Feb 14, 2023", Approved),
        ("Ethan Hall", "E-commerce", "Sycamore Lane Austin", "Feb 15, 2023", Rejected),
        ("Zoe Adams", "Landing Page", "Juniper St Portland", "Feb 16, 2023", InProgress),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((owner, project, address, date, status), n)| {
            Order::new(OrderId::new(9800 + n), owner, project, address, date, status)
                .with_avatar(format!("https://i.pravatar.cc/40?img={}", n))
        })
        .collect()
}
