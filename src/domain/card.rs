use serde::{Deserialize, Serialize};

/// A draggable tile on the Home page grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, value: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            subtitle: title.clone(),
            title,
            value: value.into(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }
}

/// Home page cards in their initial order
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new("sales", "Sales", "$12,340").with_subtitle("Sales Overview"),
        Card::new("users", "Active Users", "1,234"),
        Card::new("health", "System Health", "All systems operational"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cards() {
        let cards = default_cards();
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["sales", "users", "health"]);
        assert_eq!(cards[0].subtitle, "Sales Overview");
        assert_eq!(cards[1].subtitle, "Active Users");
    }
}
