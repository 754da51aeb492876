//! Mapping between board squares and display row/column indices.
//!
//! Row 0 / column 0 is the top-left corner of the rendered board. With the
//! normal orientation that is a8; flipped, both axes are mirrored and it is h1.

use shakmaty::{File, Rank, Square};

use crate::domain::PieceColor;
use crate::error::ClientError;

/// Which side of the board is drawn at the bottom
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Orientation {
    /// White at the bottom
    #[default]
    Normal,
    /// Black at the bottom
    Flipped,
}

impl Orientation {
    /// The local player always sits at the bottom of the board
    pub fn for_player(color: PieceColor) -> Self {
        match color {
            PieceColor::White => Orientation::Normal,
            PieceColor::Black => Orientation::Flipped,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Orientation::Flipped
    }

    fn real(self, index: usize) -> usize {
        match self {
            Orientation::Normal => index,
            Orientation::Flipped => 7 - index,
        }
    }
}

/// Convert display row/col to a square
pub fn to_square(row: usize, col: usize, orientation: Orientation) -> Result<Square, ClientError> {
    if row > 7 || col > 7 {
        return Err(ClientError::InvalidCoordinate(format!("row {} col {}", row, col)));
    }
    let row = orientation.real(row);
    let col = orientation.real(col);
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8
    Ok(Square::from_coords(file, rank))
}

/// Convert a square to display row/col
pub fn to_indices(square: Square, orientation: Orientation) -> (usize, usize) {
    let row = 7 - usize::from(square.rank());
    let col = usize::from(square.file());
    (orientation.real(row), orientation.real(col))
}

/// Parse "e2"-style square text
pub fn parse_square(text: &str) -> Result<Square, ClientError> {
    text.trim()
        .parse::<Square>()
        .map_err(|_| ClientError::InvalidCoordinate(text.to_string()))
}
