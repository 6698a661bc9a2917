pub mod list_view;
pub mod reorder;

pub use list_view::{ListView, OrderListView, Searchable};
pub use reorder::{CardGrid, CursorHint, DragState, Shadow, VisualEmphasis};
