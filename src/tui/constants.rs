//! Constants used throughout the TUI module

/// Spinner frames, advanced once per tick
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frames when Unicode icons are disabled
pub const ASCII_SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Status message timeout in seconds
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height including borders
pub const FOOTER_HEIGHT: u16 = 3;

/// Banner height on the results page (icon line, title, borders)
pub const PAGE_STATUS_HEIGHT: u16 = 4;

/// Rows kept visible below/above the selection before scrolling
pub const SCROLL_BUFFER: usize = 2;
