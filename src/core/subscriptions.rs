// Event Subscriptions
// Process-wide event sources (document, window) and scoped listener handles
//
// A splitter acquires its listeners at mount and holds them as `Subscription`
// guards. Dropping a guard deregisters the listener, so tearing down a
// splitter can never leave a listener pointing at it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared source an event is delivered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// Pointer events anywhere in the host surface
    Document,
    /// Viewport-level notifications
    Window,
}

/// Kind of event a listener receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    Resize,
}

/// Identifier of a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy)]
struct ListenerEntry {
    id: ListenerId,
    target: EventTarget,
    kind: ListenerKind,
}

#[derive(Debug)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<ListenerEntry>,
}

impl Default for ListenerTable {
    fn default() -> Self {
        Self { next_id: 1, entries: Vec::new() }
    }
}

/// The document and window event sources shared by every splitter on a surface
///
/// Single-threaded by construction: cloning shares the same listener table.
#[derive(Debug, Clone, Default)]
pub struct EventSources {
    table: Rc<RefCell<ListenerTable>>,
}

impl EventSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned guard is dropped
    pub fn subscribe(&self, target: EventTarget, kind: ListenerKind) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.entries.push(ListenerEntry { id, target, kind });

        Subscription {
            id,
            target,
            kind,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Total number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Number of listeners registered for a target and kind
    pub fn listeners_for(&self, target: EventTarget, kind: ListenerKind) -> usize {
        self.table
            .borrow()
            .entries
            .iter()
            .filter(|e| e.target == target && e.kind == kind)
            .count()
    }

    fn contains(table: &Weak<RefCell<ListenerTable>>, id: ListenerId) -> bool {
        table
            .upgrade()
            .map(|t| t.borrow().entries.iter().any(|e| e.id == id))
            .unwrap_or(false)
    }
}

/// Scoped listener registration; deregisters on drop
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    target: EventTarget,
    kind: ListenerKind,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn target(&self) -> EventTarget {
        self.target
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Whether the listener is still registered with its source
    pub fn is_active(&self) -> bool {
        EventSources::contains(&self.table, self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}
