// Application State
// Demo application state: one splitter, its children and the shared event plumbing

use log::{debug, info};

use super::layout_config::{LayoutConfig, PaneConfigYaml};
use super::{
    AppEvent, LayoutController, LayoutNotification, RectRegistry, EventSources, SplitterEvent,
    SplitterOptions,
};

/// Upper bound on child regions the demo lets you add; only two are ever rendered
const MAX_CHILDREN: usize = 4;

/// Content shown inside a pane
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaneContent {
    pub title: String,
    pub body: String,
}

impl PaneContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

impl From<&PaneConfigYaml> for PaneContent {
    fn from(pane: &PaneConfigYaml) -> Self {
        Self::new(pane.title.clone(), pane.body.clone())
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub title: String,
    pub status_text: String,
    pub resizing_text: Option<String>,

    /// Child regions handed to the splitter
    pub children: Vec<PaneContent>,

    pub controller: LayoutController,

    /// Rects recorded by the last render pass
    pub registry: RectRegistry,

    /// Document/window listener table shared with the controller
    pub sources: EventSources,

    /// Latest host-visible notification, shown in the status bar
    pub last_notification: Option<LayoutNotification>,

    /// Re-seed the pane size after the next render (set when the axis or unit changes)
    pub needs_reseed: bool,

    /// Reconcile the pane size against the resized container after the next render
    pub pending_resize: bool,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &LayoutConfig, options: SplitterOptions) -> Self {
        Self {
            title: config.application.title.clone(),
            status_text: config.application.status_bar.default_text.clone(),
            resizing_text: config.application.status_bar.resizing_text.clone(),
            children: config.application.panes.iter().map(PaneContent::from).collect(),
            controller: LayoutController::new(options),
            registry: RectRegistry::new(),
            sources: EventSources::new(),
            last_notification: None,
            needs_reseed: false,
            pending_resize: false,
            should_quit: false,
        }
    }

    /// Mount the splitter; call once the first frame has been rendered
    pub fn mount(&mut self) {
        self.controller.mount(&self.registry, &self.sources);
        self.collect_notifications();
    }

    /// Called after every render pass, when the registry holds fresh rects
    pub fn after_render(&mut self) {
        if self.needs_reseed && self.controller.is_mounted() {
            self.needs_reseed = false;
            self.controller.seed_secondary_pane_size(&self.registry);
            self.collect_notifications();
        }
        if self.pending_resize {
            self.pending_resize = false;
            self.controller.handle_resize(&self.registry);
            self.collect_notifications();
        }
    }

    pub fn quit(&mut self) {
        self.controller.unmount();
        self.should_quit = true;
    }

    /// Status bar text for the current state
    pub fn status_line(&self) -> &str {
        match &self.resizing_text {
            Some(text) if self.controller.is_resizing() => text,
            _ => &self.status_text,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::ToggleOrientation => {
                let options = self.controller.options().clone();
                let orientation = options.orientation().toggled();
                self.update_options(options.with_orientation(orientation), true);
            }
            AppEvent::ToggleSizeUnit => {
                let options = self.controller.options().clone();
                let unit = options.size_unit().toggled();
                self.update_options(options.with_size_unit(unit), true);
            }
            AppEvent::SwapPrimary => {
                let options = self.controller.options().clone();
                let primary = options.primary_index().swapped().index() as i64;
                self.update_options(options.with_primary_index(primary), false);
            }
            AppEvent::AddPane => {
                if self.children.len() < MAX_CHILDREN {
                    let i = self.children.len();
                    self.children.push(PaneContent::new(format!("Pane {i}"), format!("Child #{i}")));
                    debug!("child added, {} total", self.children.len());
                }
            }
            AppEvent::RemovePane => {
                if self.children.pop().is_some() {
                    debug!("child removed, {} total", self.children.len());
                }
            }
            AppEvent::Splitter(event) => self.handle_splitter_event(event),
            AppEvent::None => {}
        }
    }

    fn handle_splitter_event(&mut self, event: SplitterEvent) {
        let handled = self.controller.dispatch(event, &self.registry);
        // Terminal resizes arrive before the panes are laid out again
        if handled && matches!(event, SplitterEvent::Resize { .. }) {
            self.pending_resize = true;
        }
        self.collect_notifications();
    }

    fn update_options(&mut self, options: SplitterOptions, reseed: bool) {
        info!(
            "options changed: orientation={:?} unit={:?} primary={:?}",
            options.orientation(),
            options.size_unit(),
            options.primary_index()
        );
        self.controller.set_options(options);
        // The recorded divider rect belongs to the old axis
        if reseed {
            self.registry.unregister_by_name(self.controller.divider_name());
            self.needs_reseed = true;
        }
    }

    fn collect_notifications(&mut self) {
        if let Some(last) = self.controller.take_notifications().pop() {
            self.last_notification = Some(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Orientation, Position, Rect, SizeUnit};
    use crate::core::layout_config::parse_config;
    use crate::core::PrimaryIndex;
    use crate::constants::{HWND_SPLITTER_CONTAINER, HWND_SPLITTER_DIVIDER};

    const CONFIG: &str = r#"
application:
  title: "Test"
  status_bar:
    default_text: "idle"
    resizing_text: "dragging"
  panes:
    - title: "Left"
      body: "a"
    - title: "Right"
      body: "b"
"#;

    fn app() -> App {
        let config = parse_config(CONFIG).unwrap();
        let options = SplitterOptions::default()
            .with_orientation(Orientation::Horizontal)
            .with_size_unit(SizeUnit::Pixel)
            .with_primary_index(0)
            .with_divider_size(1.0)
            .unwrap();
        let mut app = App::new(&config, options);
        app.registry.register(Some(HWND_SPLITTER_CONTAINER), Rect::new(0.0, 0.0, 81.0, 20.0));
        app.registry.register(Some(HWND_SPLITTER_DIVIDER), Rect::new(0.0, 40.0, 1.0, 20.0));
        app.mount();
        app
    }

    #[test]
    fn test_mount_seeds_even_split() {
        let app = app();
        assert_eq!(app.children.len(), 2);
        assert_eq!(app.controller.secondary_pane_size(), 40.0);
        assert_eq!(app.last_notification, Some(LayoutNotification::SecondaryPaneSizeChanged(40.0)));
        assert_eq!(app.sources.listener_count(), 3);
    }

    #[test]
    fn test_drag_updates_status() {
        let mut app = app();
        app.handle_event(AppEvent::Splitter(SplitterEvent::PointerDown(Position::new(40.0, 3.0))));
        assert_eq!(app.status_line(), "dragging");
        assert_eq!(app.last_notification, Some(LayoutNotification::DragStarted));

        app.handle_event(AppEvent::Splitter(SplitterEvent::PointerMove(Position::new(20.5, 3.0))));
        assert_eq!(app.controller.secondary_pane_size(), 60.0);

        app.handle_event(AppEvent::Splitter(SplitterEvent::PointerUp(Position::new(0.0, 0.0))));
        assert_eq!(app.status_line(), "idle");
        assert_eq!(app.last_notification, Some(LayoutNotification::DragEnded));
    }

    #[test]
    fn test_toggle_orientation_reseeds_after_render() {
        let mut app = app();
        app.handle_event(AppEvent::ToggleOrientation);

        assert_eq!(app.controller.options().orientation(), Orientation::Vertical);
        assert!(app.needs_reseed);
        assert!(!app.registry.name_exists(HWND_SPLITTER_DIVIDER));

        app.after_render();
        // 20 rows, simulated 1-row divider at row 9.5
        assert_eq!(app.controller.secondary_pane_size(), 9.5);
        assert!(!app.needs_reseed);
    }

    #[test]
    fn test_swap_primary_keeps_size() {
        let mut app = app();
        app.handle_event(AppEvent::SwapPrimary);
        assert_eq!(app.controller.options().primary_index(), PrimaryIndex::Second);
        assert_eq!(app.controller.secondary_pane_size(), 40.0);
        assert!(!app.needs_reseed);
    }

    #[test]
    fn test_children_bounds() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_event(AppEvent::AddPane);
        }
        assert_eq!(app.children.len(), MAX_CHILDREN);
        for _ in 0..10 {
            app.handle_event(AppEvent::RemovePane);
        }
        assert!(app.children.is_empty());
    }

    #[test]
    fn test_quit_releases_listeners() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
        assert_eq!(app.sources.listener_count(), 0);
    }
}
