//! Color theme constants.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and input
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color for the logo and view titles
pub const COLOR_HEADER: Color = Color::White;

/// In-progress game elements
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Waiting/pending elements
pub const COLOR_QUEUED: Color = Color::Gray;

/// Dim text for hints
pub const COLOR_DIM: Color = Color::DarkGray;
