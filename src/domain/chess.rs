//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shakmaty::{Color as SColor, Role};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn is_white(self) -> bool {
        self == PieceColor::White
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl From<SColor> for PieceColor {
    fn from(color: SColor) -> Self {
        match color {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }
}

impl From<PieceColor> for SColor {
    fn from(color: PieceColor) -> Self {
        match color {
            PieceColor::White => SColor::White,
            PieceColor::Black => SColor::Black,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    /// Parse a board cell marker: upper case is White, lower case Black.
    pub fn from_marker(marker: char) -> Option<Piece> {
        shakmaty::Piece::from_char(marker).map(shakmaty_to_piece)
    }
}

/// Piece a pawn may promote to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Upper-case letter used on the wire ("Q", "R", "B", "N")
    pub fn letter(self) -> char {
        self.role().upper_char()
    }

    pub fn role(self) -> Role {
        match self {
            PromotionPiece::Queen => Role::Queen,
            PromotionPiece::Rook => Role::Rook,
            PromotionPiece::Bishop => Role::Bishop,
            PromotionPiece::Knight => Role::Knight,
        }
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: piece.color.into(),
    }
}
