//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const TARGET_DOT_SCALE: f32 = 0.3;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 560.0;
pub const INITIAL_RIGHT_PANEL: f32 = 300.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const SELECTED_SQUARE: u32 = 0xD6C35A;
pub const CHECK_SQUARE: u32 = 0xE0605A;
pub const TARGET_MARK: u32 = 0x3F5F3A;
pub const PROMOTION_MARK: u32 = 0x7A4FB0;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const STATUS_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ALERT: u32 = 0xf87171;
pub const TEXT_GOOD: u32 = 0x4ade80;
pub const OVERLAY_BG: u32 = 0x000000aa; // rgba

/// Get the color for a board square based on its display position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
