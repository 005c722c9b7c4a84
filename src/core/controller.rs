// Layout Controller
// Owns the secondary pane size, the drag state machine and the listener subscriptions
//
// Data flow:
//   pointer-down on divider -> capture container/divider rects -> Resizing
//   pointer-move            -> secondary_pane_size(cached rects, pointer) -> store
//   pointer-up (anywhere)   -> Idle

use log::{debug, info, trace};

use super::drag::{DragSession, DragState};
use super::events::SplitterEvent;
use super::geometry::{Orientation, Position, Rect, SizeUnit};
use super::options::SplitterOptions;
use super::rect_registry::BoundingRectSource;
use super::sizing::{secondary_pane_size, PointerAnchor};
use super::subscriptions::{EventSources, EventTarget, ListenerKind, Subscription};
use crate::constants::{
    CLASS_LAYOUT_CHANGING, CLASS_LAYOUT_PANE, CLASS_LAYOUT_PANE_PRIMARY, CLASS_SPLITTER_LAYOUT,
    CLASS_LAYOUT_SPLITTER, CLASS_SPLITTER_VERTICAL, HWND_SPLITTER_CONTAINER, HWND_SPLITTER_DIVIDER,
};

/// Changes observable by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutNotification {
    /// The divider was grabbed
    DragStarted,
    /// The divider was released
    DragEnded,
    /// The stored secondary pane size changed
    SecondaryPaneSizeChanged(f64),
}

/// One pane to render
#[derive(Debug, Clone, PartialEq)]
pub struct PaneSpec {
    /// Index of the child rendered in this pane; `None` for the empty placeholder
    pub child: Option<usize>,
    pub primary: bool,
    pub orientation: Orientation,
    pub size_unit: SizeUnit,
    /// Explicit size, only set on the secondary pane
    pub size: Option<f64>,
}

impl PaneSpec {
    pub fn class_name(&self) -> String {
        if self.primary {
            format!("{} {}", CLASS_LAYOUT_PANE, CLASS_LAYOUT_PANE_PRIMARY)
        } else {
            CLASS_LAYOUT_PANE.to_string()
        }
    }

    /// Formatted size along the layout axis, e.g. `"49.8046875%"`
    /// The primary pane has no explicit size and flex-fills the remainder
    pub fn style_size(&self) -> Option<String> {
        if self.primary {
            return None;
        }
        let size = self.size.unwrap_or(0.0);
        Some(format!("{}{}", size, self.size_unit.suffix()))
    }
}

/// Result of one render pass of the pane count policy
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub class_name: String,
    /// One or two panes, in render order
    pub panes: Vec<PaneSpec>,
    /// Whether a divider is rendered between the panes
    pub divider: bool,
}

impl RenderPlan {
    pub fn secondary(&self) -> Option<&PaneSpec> {
        self.panes.iter().find(|pane| !pane.primary)
    }

    pub fn divider_class_name(&self) -> Option<&'static str> {
        self.divider.then_some(CLASS_LAYOUT_SPLITTER)
    }
}

/// Splitter layout controller
#[derive(Debug)]
pub struct LayoutController {
    options: SplitterOptions,
    container_name: String,
    divider_name: String,
    secondary_pane_size: f64,
    drag: DragState,
    subscriptions: Vec<Subscription>,
    notifications: Vec<LayoutNotification>,
}

impl LayoutController {
    pub fn new(options: SplitterOptions) -> Self {
        Self {
            options,
            container_name: HWND_SPLITTER_CONTAINER.to_string(),
            divider_name: HWND_SPLITTER_DIVIDER.to_string(),
            secondary_pane_size: 0.0,
            drag: DragState::Idle,
            subscriptions: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Use custom element handle names, so several splitters can share one registry
    pub fn with_element_names(mut self, container: impl Into<String>, divider: impl Into<String>) -> Self {
        self.container_name = container.into();
        self.divider_name = divider.into();
        self
    }

    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    /// Replace the options; the stored size is kept as-is
    pub fn set_options(&mut self, options: SplitterOptions) {
        self.options = options;
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn divider_name(&self) -> &str {
        &self.divider_name
    }

    pub fn secondary_pane_size(&self) -> f64 {
        self.secondary_pane_size
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_resizing()
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Drain the notifications queued since the last call
    pub fn take_notifications(&mut self) -> Vec<LayoutNotification> {
        std::mem::take(&mut self.notifications)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Lifecycle                                          │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Acquire the shared listeners and seed the secondary pane size
    ///
    /// Call after the first render pass so the container rect is registered.
    /// Mounting twice is a no-op.
    pub fn mount(&mut self, rects: &impl BoundingRectSource, sources: &EventSources) {
        if self.is_mounted() {
            return;
        }

        self.subscriptions = vec![
            sources.subscribe(EventTarget::Window, ListenerKind::Resize),
            sources.subscribe(EventTarget::Document, ListenerKind::PointerUp),
            sources.subscribe(EventTarget::Document, ListenerKind::PointerMove),
        ];

        self.seed_secondary_pane_size(rects);
        info!(
            "splitter mounted: orientation={:?} unit={:?} primary={:?} secondary_size={}",
            self.options.orientation(),
            self.options.size_unit(),
            self.options.primary_index(),
            self.secondary_pane_size
        );
    }

    /// Release the shared listeners; an in-progress drag is abandoned
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.subscriptions.clear();
        self.drag = DragState::Idle;
        info!("splitter unmounted");
    }

    /// Set the size from the configured initial size, or split the container evenly
    pub fn seed_secondary_pane_size(&mut self, rects: &impl BoundingRectSource) {
        let size = match self.options.secondary_initial_size() {
            Some(initial) => initial,
            None => self.even_split(rects),
        };
        self.set_secondary_pane_size(size);
    }

    fn even_split(&self, rects: &impl BoundingRectSource) -> f64 {
        let container = rects.bounding_rect(&self.container_name).unwrap_or_default();
        // Without a rendered divider, simulate one of the configured thickness
        let divider = rects.bounding_rect(&self.divider_name).unwrap_or_else(|| {
            let size = self.options.divider_size();
            Rect::new(0.0, 0.0, size, size)
        });
        let position = Position::new(
            container.left + (container.width - divider.width) / 2.0,
            container.top + (container.height - divider.height) / 2.0,
        );
        secondary_pane_size(
            &self.options.sizing_policy(),
            &container,
            &divider,
            position,
            PointerAnchor::DividerEdge,
        )
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                    Pane Count Policy                                       │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Decide what to render for `child_count` children
    ///
    /// Zero children render one empty primary pane, one child renders a sole
    /// primary pane, two or more render the first two with a divider.
    pub fn render_plan(&self, child_count: usize) -> RenderPlan {
        let rendered = child_count.min(2);
        let primary_index = self.options.primary_index().index();

        let panes = if rendered == 0 {
            vec![self.pane_spec(None, true)]
        } else {
            (0..rendered)
                .map(|i| {
                    let primary = rendered == 1 || i == primary_index;
                    self.pane_spec(Some(i), primary)
                })
                .collect()
        };

        RenderPlan {
            class_name: self.class_name(),
            panes,
            divider: rendered == 2,
        }
    }

    fn pane_spec(&self, child: Option<usize>, primary: bool) -> PaneSpec {
        PaneSpec {
            child,
            primary,
            orientation: self.options.orientation(),
            size_unit: self.options.size_unit(),
            size: if primary { None } else { Some(self.secondary_pane_size) },
        }
    }

    fn class_name(&self) -> String {
        let mut classes = String::from(CLASS_SPLITTER_LAYOUT);
        if let Some(custom) = self.options.custom_class_name() {
            classes.push(' ');
            classes.push_str(custom);
        }
        if self.options.orientation().is_vertical() {
            classes.push(' ');
            classes.push_str(CLASS_SPLITTER_VERTICAL);
        }
        if self.is_resizing() {
            classes.push(' ');
            classes.push_str(CLASS_LAYOUT_CHANGING);
        }
        classes
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                       Event Handlers                                       │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Route an event to its handler
    ///
    /// Shared-source events are only handled while the matching listener is
    /// held. Returns true if a handler ran.
    pub fn dispatch(&mut self, event: SplitterEvent, rects: &impl BoundingRectSource) -> bool {
        if let Some((target, kind)) = event.listener() {
            if !self.is_listening(target, kind) {
                return false;
            }
        }

        match event {
            SplitterEvent::PointerDown(position) => self.handle_divider_pointer_down(position, rects),
            SplitterEvent::PointerMove(position) => {
                self.handle_pointer_move(position);
                true
            }
            SplitterEvent::PointerUp(_) => {
                self.handle_pointer_up();
                true
            }
            SplitterEvent::Resize { .. } => {
                self.handle_resize(rects);
                true
            }
        }
    }

    fn is_listening(&self, target: EventTarget, kind: ListenerKind) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.target() == target && s.kind() == kind && s.is_active())
    }

    /// Start a drag if the position hits the rendered divider
    ///
    /// Captures fresh container and divider rects for the session. Without a
    /// rendered divider nothing happens.
    pub fn handle_divider_pointer_down(&mut self, position: Position, rects: &impl BoundingRectSource) -> bool {
        let Some(divider) = rects.bounding_rect(&self.divider_name) else {
            return false;
        };
        if !divider.contains(position) {
            return false;
        }
        let Some(container) = rects.bounding_rect(&self.container_name) else {
            return false;
        };

        if self.drag.begin(DragSession { container, divider }) {
            debug!("drag started at ({}, {})", position.left, position.top);
            self.notifications.push(LayoutNotification::DragStarted);
        }
        true
    }

    /// Recompute the size from the absolute pointer position while resizing
    ///
    /// Ignored while idle. Returns the new size if a drag is in progress.
    pub fn handle_pointer_move(&mut self, position: Position) -> Option<f64> {
        let session = *self.drag.session()?;
        let size = secondary_pane_size(
            &self.options.sizing_policy(),
            &session.container,
            &session.divider,
            position,
            PointerAnchor::DividerCenter,
        );
        trace!("drag move to ({}, {}) -> {}", position.left, position.top, size);
        self.set_secondary_pane_size(size);
        Some(size)
    }

    /// End the drag, wherever the pointer is released
    pub fn handle_pointer_up(&mut self) {
        if self.drag.end() {
            debug!("drag ended, secondary size {}", self.secondary_pane_size);
            self.notifications.push(LayoutNotification::DragEnded);
        }
    }

    /// Viewport resize
    ///
    /// Percentage sizes are resolution independent and reflow on the next
    /// render. Pixel sizes are re-read from the rendered divider's leading
    /// edge, which keeps the pixel value but re-applies the minimum sizes
    /// against the new container. Pass rects recorded after the resize.
    pub fn handle_resize(&mut self, rects: &impl BoundingRectSource) {
        if self.options.size_unit().is_percentage() {
            debug!("viewport resized, keeping {}% secondary size", self.secondary_pane_size);
            return;
        }
        let (Some(container), Some(divider)) = (
            rects.bounding_rect(&self.container_name),
            rects.bounding_rect(&self.divider_name),
        ) else {
            debug!("viewport resized without a rendered divider");
            return;
        };

        let size = secondary_pane_size(
            &self.options.sizing_policy(),
            &container,
            &divider,
            Position::new(divider.left, divider.top),
            PointerAnchor::DividerEdge,
        );
        debug!("viewport resized, secondary size {} -> {}px", self.secondary_pane_size, size);
        self.set_secondary_pane_size(size);
    }

    fn set_secondary_pane_size(&mut self, size: f64) {
        if size != self.secondary_pane_size {
            self.secondary_pane_size = size;
            self.notifications.push(LayoutNotification::SecondaryPaneSizeChanged(size));
        }
    }
}
