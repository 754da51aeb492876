//! JSON bodies exchanged with the HTTP move authority.

use serde::{Deserialize, Serialize};

use crate::domain::{BoardSnapshot, GameUpdate, LegalMove, PieceColor, parse_square};
use crate::error::ClientError;

#[derive(Debug, Serialize)]
pub struct NewGameBody {
    pub player_white: bool,
    pub depth: u32,
}

#[derive(Debug, Serialize)]
pub struct MoveBody {
    pub from_square: String,
    pub to_square: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepthBody {
    pub depth: u32,
}

/// Game state as sent by the server
#[derive(Debug, Deserialize)]
pub struct GameBody {
    pub board: Vec<Vec<String>>,
    pub white_to_move: bool,
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub checkmate: bool,
    #[serde(default)]
    pub stalemate: bool,
    #[serde(default)]
    pub bot_needed: bool,
}

impl GameBody {
    pub fn into_update(self) -> Result<GameUpdate, ClientError> {
        Ok(GameUpdate {
            board: BoardSnapshot::from_rows(self.board)?,
            side_to_move: if self.white_to_move {
                PieceColor::White
            } else {
                PieceColor::Black
            },
            check: self.check,
            checkmate: self.checkmate,
            stalemate: self.stalemate,
            bot_needed: self.bot_needed,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LegalMovesBody {
    pub moves: Vec<LegalMoveEntry>,
}

/// One entry per promotion piece when the move promotes
#[derive(Debug, Deserialize)]
pub struct LegalMoveEntry {
    pub to: String,
    #[serde(default)]
    pub promotion: Option<String>,
}

impl LegalMovesBody {
    pub fn into_moves(self) -> Result<Vec<LegalMove>, ClientError> {
        self.moves
            .into_iter()
            .map(|entry| {
                let to = parse_square(&entry.to).map_err(|_| {
                    ClientError::MalformedResponse(format!("bad square {:?}", entry.to))
                })?;
                Ok(LegalMove {
                    to,
                    promotion: entry.promotion.is_some(),
                })
            })
            .collect()
    }
}

/// FastAPI-style error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoveCache, Piece, PieceKind};
    use shakmaty::Square;

    const START_BODY: &str = r#"{
        "board": [
            ["r","n","b","q","k","b","n","r"],
            ["p","p","p","p","p","p","p","p"],
            [".",".",".",".",".",".",".","."],
            [".",".",".",".",".",".",".","."],
            [".",".",".",".","P",".",".","."],
            [".",".",".",".",".",".",".","."],
            ["P","P","P","P",".","P","P","P"],
            ["R","N","B","Q","K","B","N","R"]
        ],
        "white_to_move": false,
        "check": false,
        "checkmate": false,
        "stalemate": false,
        "bot_needed": true
    }"#;

    #[test]
    fn test_parse_move_reply() {
        let body: GameBody = serde_json::from_str(START_BODY).unwrap();
        let update = body.into_update().unwrap();
        assert_eq!(update.side_to_move, PieceColor::Black);
        assert!(update.bot_needed);
        assert_eq!(
            update.board.piece_at(Square::E4),
            Some(Piece { kind: PieceKind::Pawn, color: PieceColor::White })
        );
        assert_eq!(update.board.piece_at(Square::E2), None);
    }

    #[test]
    fn test_new_game_reply_without_bot_flag() {
        let mut value: serde_json::Value = serde_json::from_str(START_BODY).unwrap();
        value.as_object_mut().unwrap().remove("bot_needed");
        let body: GameBody = serde_json::from_value(value).unwrap();
        assert!(!body.bot_needed);
    }

    #[test]
    fn test_bad_board_is_malformed() {
        let json = r#"{"board": [["K"]], "white_to_move": true}"#;
        let body: GameBody = serde_json::from_str(json).unwrap();
        assert!(matches!(body.into_update(), Err(ClientError::MalformedResponse(_))));
    }

    #[test]
    fn test_promotion_entries_fold_into_one_destination() {
        let json = r#"{"moves": [
            {"to": "a8", "promotion": "Q"},
            {"to": "a8", "promotion": "R"},
            {"to": "a8", "promotion": "B"},
            {"to": "a8", "promotion": "N"}
        ]}"#;
        let body: LegalMovesBody = serde_json::from_str(json).unwrap();
        let mut cache = MoveCache::default();
        cache.replace(body.into_moves().unwrap());
        assert_eq!(cache.len(), 1);
        assert!(cache.get(Square::A8).unwrap().promotion);
    }

    #[test]
    fn test_plain_destinations() {
        let json = r#"{"moves": [{"to": "e3", "promotion": null}, {"to": "e4"}]}"#;
        let body: LegalMovesBody = serde_json::from_str(json).unwrap();
        let moves = body.into_moves().unwrap();
        assert_eq!(
            moves,
            vec![
                LegalMove { to: Square::E3, promotion: false },
                LegalMove { to: Square::E4, promotion: false },
            ]
        );
    }

    #[test]
    fn test_bad_destination_is_malformed() {
        let json = r#"{"moves": [{"to": "z9"}]}"#;
        let body: LegalMovesBody = serde_json::from_str(json).unwrap();
        assert!(matches!(body.into_moves(), Err(ClientError::MalformedResponse(_))));
    }

    #[test]
    fn test_move_body_omits_missing_promotion() {
        let body = MoveBody {
            from_square: "e2".into(),
            to_square: "e4".into(),
            promotion: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"from_square":"e2","to_square":"e4"}"#
        );
    }
}
