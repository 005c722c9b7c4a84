// Application constants
// Element handle names (HWND) and class names shared by the core and the renderer

/// Handle name of the splitter's root container
pub const HWND_SPLITTER_CONTAINER: &str = "hwndSplitterContainer";

/// Handle name of the draggable divider
pub const HWND_SPLITTER_DIVIDER: &str = "hwndSplitterDivider";

/// Handle name of the status bar below the splitter in the demo
pub const HWND_STATUS_BAR: &str = "hwndStatusBar";

/// Root class of every splitter
pub const CLASS_SPLITTER_LAYOUT: &str = "splitter-layout";

/// Root class added when panes are stacked
pub const CLASS_SPLITTER_VERTICAL: &str = "splitter-layout-vertical";

/// Root class added while the divider is being dragged
pub const CLASS_LAYOUT_CHANGING: &str = "layout-changing";

/// Class of every pane
pub const CLASS_LAYOUT_PANE: &str = "layout-pane";

/// Class added to the primary pane
pub const CLASS_LAYOUT_PANE_PRIMARY: &str = "layout-pane-primary";

/// Class of the divider element
pub const CLASS_LAYOUT_SPLITTER: &str = "layout-splitter";
