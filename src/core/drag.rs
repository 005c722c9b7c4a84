// Drag State Machine
// Idle <-> Resizing, with container/divider rects captured at drag start

use super::geometry::Rect;

/// Geometry captured when the divider is grabbed
///
/// Recaptured on every pointer-down so a window resize between drags is
/// picked up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub container: Rect,
    pub divider: Rect,
}

/// Drag lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Resizing(DragSession),
}

impl DragState {
    /// Enter `Resizing` with freshly captured rects
    /// Returns true if the machine was idle before
    pub fn begin(&mut self, session: DragSession) -> bool {
        let was_idle = !self.is_resizing();
        *self = DragState::Resizing(session);
        was_idle
    }

    /// Leave `Resizing`
    /// Returns true if a session was actually ended
    pub fn end(&mut self) -> bool {
        let was_resizing = self.is_resizing();
        *self = DragState::Idle;
        was_resizing
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Resizing(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, DragState::Resizing(_))
    }
}
