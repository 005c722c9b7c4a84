// Core infrastructure module
// Geometry, sizing and the drag/listener state every splitter is built on

pub mod app;
pub mod app_config;
pub mod controller;
pub mod drag;
pub mod events;
pub mod geometry;
pub mod layout_config;
pub mod options;
pub mod rect_registry;
pub mod sizing;
pub mod subscriptions;

pub use app::{App, PaneContent};
pub use app_config::SplitterDefaults;
pub use controller::{LayoutController, LayoutNotification, PaneSpec, RenderPlan};
pub use drag::{DragSession, DragState};
pub use events::{AppEvent, EventHandler, SplitterEvent};
pub use geometry::{Orientation, Position, Rect, SizeUnit};
pub use layout_config::LayoutConfig;
pub use options::{OptionsError, PrimaryIndex, SizeConstraints, SizingPolicy, SplitterOptions};
pub use rect_registry::{BoundingRectSource, RectHandle, RectRegistry};
pub use sizing::{secondary_pane_size, PointerAnchor};
pub use subscriptions::{EventSources, EventTarget, ListenerKind, Subscription};
