// Rectangle Handle System (HWND-like)
// Tracks the bounding boxes of rendered elements so they can be queried on demand
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register(Some(HWND_SPLITTER_CONTAINER), area);
//   // Later, when the divider is grabbed...
//   let container = registry.bounding_rect(HWND_SPLITTER_CONTAINER);

use super::geometry::Rect;
use std::collections::HashMap;

/// Source of fresh bounding boxes for named elements
///
/// The splitter never caches geometry across drags; it asks this source at
/// the moment it needs a rect.
pub trait BoundingRectSource {
    /// Bounding box of the element registered under `name`, if it is rendered
    fn bounding_rect(&self, name: &str) -> Option<Rect>;
}

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to the last rendered rect
    handles: HashMap<u64, Rect>,
    /// Map of name to handle ID (for lookup by name)
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // Start at 1, 0 can be used as invalid handle
        }
    }

    /// Register a rectangle and return a handle
    /// If a name is provided and a rectangle with that name already exists, it will be updated
    pub fn register(&mut self, name: Option<&str>, rect: impl Into<Rect>) -> RectHandle {
        let rect = rect.into();

        if let Some(name_str) = name {
            if let Some(&existing_id) = self.name_to_handle.get(name_str) {
                if let Some(entry) = self.handles.get_mut(&existing_id) {
                    *entry = rect;
                    return RectHandle(existing_id);
                }
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;

        self.handles.insert(handle_id, rect);
        if let Some(name_str) = name {
            self.name_to_handle.insert(name_str.to_string(), handle_id);
        }

        RectHandle(handle_id)
    }

    /// Get the current rect for a handle
    pub fn get_rect(&self, handle: RectHandle) -> Option<Rect> {
        self.handles.get(&handle.0).copied()
    }

    /// Get handle by name
    pub fn get_handle(&self, name: &str) -> Option<RectHandle> {
        self.name_to_handle.get(name).map(|&id| RectHandle(id))
    }

    /// Remove a rectangle from the registry by name
    /// Used when an element stops being rendered (e.g. the divider with one pane)
    pub fn unregister_by_name(&mut self, name: &str) -> bool {
        match self.name_to_handle.remove(name) {
            Some(handle_id) => {
                self.handles.remove(&handle_id);
                true
            }
            None => false,
        }
    }

    /// Check if a name exists
    pub fn name_exists(&self, name: &str) -> bool {
        self.name_to_handle.contains_key(name)
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingRectSource for RectRegistry {
    fn bounding_rect(&self, name: &str) -> Option<Rect> {
        self.get_handle(name).and_then(|handle| self.get_rect(handle))
    }
}
