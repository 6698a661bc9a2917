use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Card;

/// Drag gesture state of the card grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: String,
        /// Most recent hover that moved the card; a repeat of it is ignored
        last_target: Option<String>,
    },
}

/// Scale and stacking order the renderer applies to a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEmphasis {
    pub scale: f32,
    pub elevation: u8,
}

impl VisualEmphasis {
    pub const RESTING: Self = Self {
        scale: 1.0,
        elevation: 1,
    };
    pub const LIFTED: Self = Self {
        scale: 1.12,
        elevation: 10,
    };
}

/// Pointer cursor to show over a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorHint {
    Grab,
    Move,
}

/// Drop shadow family for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    Resting,
    Lifted,
}

/// Ordered cards plus the drag gesture that reorders them.
///
/// The card list is only ever changed by moving one card, so it stays a
/// permutation of the cards it was built with.
///
/// # Usage
///
/// ```
/// use bytwind_core::{default_cards, CardGrid};
///
/// let mut grid = CardGrid::new(default_cards());
/// grid.begin_drag("sales");
/// grid.hover_over("health");
/// grid.end_drag();
///
/// assert_eq!(grid.order(), vec!["users", "health", "sales"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
    cards: Vec<Card>,
    state: DragState,
}

fn position_of(cards: &[Card], id: &str) -> Option<usize> {
    cards.iter().position(|card| card.id == id)
}

impl CardGrid {
    /// Builds a grid; a card whose id repeats an earlier one is dropped
    pub fn new(cards: Vec<Card>) -> Self {
        let mut unique: Vec<Card> = Vec::with_capacity(cards.len());
        for card in cards {
            if position_of(&unique, &card.id).is_some() {
                warn!(id = %card.id, "duplicate card id ignored");
                continue;
            }
            unique.push(card);
        }

        Self {
            cards: unique,
            state: DragState::Idle,
        }
    }

    /// Starts dragging `id`. Unknown ids leave the grid untouched.
    pub fn begin_drag(&mut self, id: &str) {
        if position_of(&self.cards, id).is_none() {
            debug!(id, "begin_drag on unknown card ignored");
            return;
        }
        self.state = DragState::Dragging {
            dragged: id.to_string(),
            last_target: None,
        };
        debug!(id, "drag started");
    }

    /// Moves the dragged card into the slot currently held by `target`.
    ///
    /// No-op while idle, for unknown targets, and when `target` repeats the
    /// previous hover. Hovering the dragged card itself clears that memory.
    pub fn hover_over(&mut self, target: &str) {
        let DragState::Dragging {
            dragged,
            last_target,
        } = &mut self.state
        else {
            return;
        };

        if target == dragged.as_str() {
            *last_target = None;
            return;
        }
        if last_target.as_deref() == Some(target) {
            return;
        }

        let (Some(from), Some(to)) = (
            position_of(&self.cards, dragged),
            position_of(&self.cards, target),
        ) else {
            return;
        };

        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        *last_target = Some(target.to_string());
        debug!(dragged = %dragged, target, from, to, "card moved");
    }

    /// Finishes the gesture, keeping the current order
    pub fn end_drag(&mut self) {
        if let DragState::Dragging { dragged, .. } = &self.state {
            debug!(dragged = %dragged, "drag ended");
        }
        self.state = DragState::Idle;
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { dragged, .. } => Some(dragged),
            DragState::Idle => None,
        }
    }

    pub fn is_dragged(&self, id: &str) -> bool {
        self.dragged_id() == Some(id)
    }

    /// Card ids in their current order
    pub fn order(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.id.as_str()).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visual_emphasis(&self, id: &str) -> VisualEmphasis {
        if self.is_dragged(id) {
            VisualEmphasis::LIFTED
        } else {
            VisualEmphasis::RESTING
        }
    }

    pub fn cursor(&self, id: &str) -> CursorHint {
        if self.is_dragged(id) {
            CursorHint::Move
        } else {
            CursorHint::Grab
        }
    }

    pub fn shadow(&self, id: &str) -> Shadow {
        if self.is_dragged(id) {
            Shadow::Lifted
        } else {
            Shadow::Resting
        }
    }
}
