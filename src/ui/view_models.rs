//! View models for rendering the board and the status pane.
//!
//! These types are DTOs (Data Transfer Objects) that prepare session state
//! for display in the UI. They live in the UI layer, not the domain layer.

use crate::domain::{Piece, PieceColor};

/// Marker drawn on a legal destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMark {
    Move,
    Promotion,
}

/// Display data for one board square, in display coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    /// Origin of the current selection
    pub selected: bool,
    pub target: Option<TargetMark>,
    /// King of the side in check
    pub in_check: bool,
}

/// Display data for the status pane
#[derive(Clone, Debug, PartialEq)]
pub struct StatusDisplay {
    pub player: PieceColor,
    pub side_to_move: PieceColor,
    /// Headline, e.g. "Your move" or "Checkmate - you win"
    pub headline: String,
    pub alert: bool,
    pub busy: bool,
    /// Destinations for the selected piece are still being fetched
    pub loading_moves: bool,
    pub notice: Option<String>,
    pub last_cue: Option<&'static str>,
    pub can_retry_bot: bool,
    pub depth: u32,
}
