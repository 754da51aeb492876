//! In-process move authority backed by shakmaty.
//!
//! Behaves like the HTTP server: a new game as Black lets the bot open,
//! out-of-turn or illegal moves are rejected, and `bot_needed` is set when the
//! bot is on move in an unfinished game. The bot plays a mate in one when it
//! has one, otherwise the first capture, otherwise the first legal move.

use log::debug;
use shakmaty::{Chess, File, Move, Position, Square};

use super::MoveAuthority;
use crate::domain::{BoardSnapshot, GameUpdate, LegalMove, PieceColor, PromotionPiece};
use crate::error::ClientError;

pub struct LocalAuthority {
    start: Chess,
    position: Chess,
    player: PieceColor,
}

impl LocalAuthority {
    pub fn new() -> Self {
        Self::with_start(Chess::default())
    }

    /// Authority whose games begin from `start` instead of the initial position
    pub fn with_start(start: Chess) -> Self {
        Self {
            position: start.clone(),
            start,
            player: PieceColor::White,
        }
    }

    fn update(&self) -> GameUpdate {
        let position = &self.position;
        let turn = PieceColor::from(position.turn());
        let over = position.is_checkmate() || position.is_stalemate();
        GameUpdate {
            board: BoardSnapshot::from_board(position.board()),
            side_to_move: turn,
            check: position.is_check(),
            checkmate: position.is_checkmate(),
            stalemate: position.is_stalemate(),
            bot_needed: !over && turn != self.player,
        }
    }

    fn play(&mut self, m: Move) -> Result<(), ClientError> {
        self.position = self
            .position
            .clone()
            .play(m)
            .map_err(|_| ClientError::RemoteRejected("Illegal move".to_string()))?;
        Ok(())
    }

    fn play_bot(&mut self) -> Result<(), ClientError> {
        let moves = self.position.legal_moves();
        let mate = moves.iter().find(|m| {
            self.position
                .clone()
                .play((*m).clone())
                .is_ok_and(|after| after.is_checkmate())
        });
        let choice = mate
            .or_else(|| moves.iter().find(|m| m.is_capture()))
            .or_else(|| moves.first())
            .cloned();
        match choice {
            Some(m) => {
                debug!("local bot plays {:?}", m);
                self.play(m)
            }
            None => Ok(()),
        }
    }
}

impl Default for LocalAuthority {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin and destination as the player clicks them (king onto g/c file when castling)
fn click_squares(m: &Move) -> Option<(Square, Square)> {
    match m {
        Move::Normal { from, to, .. } => Some((*from, *to)),
        Move::EnPassant { from, to, .. } => Some((*from, *to)),
        Move::Castle { king, rook, .. } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some((*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

impl MoveAuthority for LocalAuthority {
    fn new_game(&mut self, player: PieceColor, depth: u32) -> Result<GameUpdate, ClientError> {
        debug!("local new game as {} depth {}", player.name(), depth);
        self.position = self.start.clone();
        self.player = player;
        if PieceColor::from(self.position.turn()) != player {
            self.play_bot()?;
        }
        let mut update = self.update();
        update.bot_needed = false;
        Ok(update)
    }

    fn legal_moves(&mut self, from: Square) -> Result<Vec<LegalMove>, ClientError> {
        Ok(self
            .position
            .legal_moves()
            .iter()
            .filter_map(|m| {
                let (origin, to) = click_squares(m)?;
                (origin == from).then_some(LegalMove {
                    to,
                    promotion: m.is_promotion(),
                })
            })
            .collect())
    }

    fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<GameUpdate, ClientError> {
        if PieceColor::from(self.position.turn()) != self.player {
            return Err(ClientError::RemoteRejected("It is not your turn".to_string()));
        }
        let wanted = promotion.map(PromotionPiece::role);
        let chosen = self
            .position
            .legal_moves()
            .iter()
            .find(|m| click_squares(m) == Some((from, to)) && m.promotion() == wanted)
            .cloned()
            .ok_or_else(|| ClientError::RemoteRejected("Illegal move".to_string()))?;
        self.play(chosen)?;
        Ok(self.update())
    }

    fn bot_move(&mut self, depth: u32) -> Result<GameUpdate, ClientError> {
        if PieceColor::from(self.position.turn()) == self.player {
            return Err(ClientError::RemoteRejected("It is not the bot's turn".to_string()));
        }
        debug!("local bot thinking at depth {}", depth);
        self.play_bot()?;
        let mut update = self.update();
        update.bot_needed = false;
        Ok(update)
    }
}
