// Event Handling
// Splitter and application event types, and translation from terminal events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::geometry::Position;
use super::subscriptions::{EventTarget, ListenerKind};

/// Events consumed by a splitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitterEvent {
    /// Primary button pressed; routed to the divider element if it is hit
    PointerDown(Position),
    /// Pointer moved anywhere on the surface (with or without a button held)
    PointerMove(Position),
    /// Primary button released anywhere on the surface
    PointerUp(Position),
    /// The viewport changed size
    Resize { width: u16, height: u16 },
}

impl SplitterEvent {
    /// Shared source and listener kind this event is delivered through
    ///
    /// Pointer-down is delivered to the divider element itself and has no
    /// shared listener.
    pub fn listener(&self) -> Option<(EventTarget, ListenerKind)> {
        match self {
            SplitterEvent::PointerDown(_) => None,
            SplitterEvent::PointerMove(_) => Some((EventTarget::Document, ListenerKind::PointerMove)),
            SplitterEvent::PointerUp(_) => Some((EventTarget::Document, ListenerKind::PointerUp)),
            SplitterEvent::Resize { .. } => Some((EventTarget::Window, ListenerKind::Resize)),
        }
    }
}

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Switch between side-by-side and stacked panes
    ToggleOrientation,

    /// Switch between pixel and percentage sizing
    ToggleSizeUnit,

    /// Make the other pane primary
    SwapPrimary,

    /// Add a child region
    AddPane,

    /// Remove the last child region
    RemovePane,

    /// Pointer or viewport event for the splitter
    Splitter(SplitterEvent),

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(width, height) => AppEvent::Splitter(SplitterEvent::Resize { width, height }),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            KeyCode::Char('v') => AppEvent::ToggleOrientation,
            KeyCode::Char('p') => AppEvent::ToggleSizeUnit,
            KeyCode::Char('s') => AppEvent::SwapPrimary,

            KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::AddPane,
            KeyCode::Char('-') => AppEvent::RemovePane,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        let position = Position::from_cell(mouse.column, mouse.row);
        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => SplitterEvent::PointerDown(position),
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                SplitterEvent::PointerMove(position)
            }
            MouseEventKind::Up(MouseButton::Left) => SplitterEvent::PointerUp(position),
            _ => return AppEvent::None,
        };
        AppEvent::Splitter(event)
    }
}
