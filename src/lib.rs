// Splitter Layout Library
// Two-pane resizable layout for terminal UIs, driven by mouse drags on a divider

// Core infrastructure - geometry, sizing, drag state, listeners
pub mod core;

// UI - pane widgets, splitter view and the demo loop
pub mod ui;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{
    secondary_pane_size, LayoutController, LayoutNotification, Orientation, PointerAnchor, Position,
    PrimaryIndex, Rect, SizeUnit, SplitterOptions,
};
pub use ui::SplitterView;
pub use constants::*;
