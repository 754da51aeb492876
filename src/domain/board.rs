//! Authoritative board snapshot and game status as reported by the move authority.

use shakmaty::Square;

use crate::domain::coords::{Orientation, to_indices, to_square};
use crate::domain::{Piece, PieceColor, PieceKind, shakmaty_to_piece};
use crate::error::ClientError;

/// 8x8 grid of cells, row 0 = rank 8, column 0 = file a.
///
/// Replaced wholesale on every reconciliation; never edited cell by cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BoardSnapshot {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardSnapshot {
    /// Build from rows of one-character markers (`.` is empty).
    pub fn from_rows<R, C>(rows: R) -> Result<Self, ClientError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut cells = [[None; 8]; 8];
        let mut row_count = 0;
        for (row, cols) in rows.into_iter().enumerate() {
            if row > 7 {
                return Err(ClientError::MalformedResponse("board has more than 8 rows".into()));
            }
            let mut col_count = 0;
            for (col, cell) in cols.into_iter().enumerate() {
                if col > 7 {
                    return Err(ClientError::MalformedResponse(format!(
                        "board row {} has more than 8 cells",
                        row
                    )));
                }
                cells[row][col] = parse_cell(cell.as_ref())?;
                col_count += 1;
            }
            if col_count != 8 {
                return Err(ClientError::MalformedResponse(format!(
                    "board row {} has {} cells",
                    row, col_count
                )));
            }
            row_count += 1;
        }
        if row_count != 8 {
            return Err(ClientError::MalformedResponse(format!(
                "board has {} rows",
                row_count
            )));
        }
        Ok(Self { cells })
    }

    /// Snapshot of a shakmaty board
    pub fn from_board(board: &shakmaty::Board) -> Self {
        let mut cells = [[None; 8]; 8];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                if let Ok(sq) = to_square(row, col, Orientation::Normal) {
                    *cell = board.piece_at(sq).map(shakmaty_to_piece);
                }
            }
        }
        Self { cells }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = to_indices(square, Orientation::Normal);
        self.cells[row][col]
    }

    /// Square holding the king of the given color, if any
    pub fn king_square(&self, color: PieceColor) -> Option<Square> {
        let king = Piece {
            kind: PieceKind::King,
            color,
        };
        self.squares()
            .find(|(_, piece)| *piece == Some(king))
            .map(|(sq, _)| sq)
    }

    /// All squares with their contents, a8 first
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                to_square(row, col, Orientation::Normal)
                    .ok()
                    .map(|sq| (sq, self.cells[row][col]))
            })
        })
    }
}

fn parse_cell(cell: &str) -> Result<Option<Piece>, ClientError> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some('.'), None) | (Some(' '), None) => Ok(None),
        (Some(marker), None) => Piece::from_marker(marker)
            .map(Some)
            .ok_or_else(|| ClientError::MalformedResponse(format!("unknown piece {:?}", cell))),
        _ => Err(ClientError::MalformedResponse(format!("bad board cell {:?}", cell))),
    }
}

/// Check/terminal state of the game. Checkmate and stalemate exclude check by construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Terminal flags win over check; check is kept only as reported.
    pub fn from_flags(check: bool, checkmate: bool, stalemate: bool) -> Self {
        if checkmate {
            GameStatus::Checkmate
        } else if stalemate {
            GameStatus::Stalemate
        } else if check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    pub fn is_check(self) -> bool {
        self == GameStatus::Check
    }

    pub fn is_checkmate(self) -> bool {
        self == GameStatus::Checkmate
    }

    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Authoritative game state returned by new-game, submit-move and bot-move calls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameUpdate {
    pub board: BoardSnapshot,
    pub side_to_move: PieceColor,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    /// The bot owes a reply to the move just played
    pub bot_needed: bool,
}
