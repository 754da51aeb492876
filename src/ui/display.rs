//! Display generation for the board and the status pane.
//!
//! This module transforms session state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{GameStatus, InteractionState, Session, to_square};
use crate::models::{CuePlayer, cue_name};
use crate::ui::view_models::{SquareView, StatusDisplay, TargetMark};

/// All 64 squares in display order (row 0 first), seen from the session's orientation.
pub fn board_display(session: &Session) -> Vec<SquareView> {
    let board = session.board();
    let orientation = session.orientation();
    let checked_king = if session.status().is_check() || session.status().is_checkmate() {
        board.king_square(session.side_to_move())
    } else {
        None
    };
    let promotion_target = session.promotion().map(|p| p.destination);

    let mut squares = Vec::with_capacity(64);
    for row in 0..8 {
        for col in 0..8 {
            let Ok(square) = to_square(row, col, orientation) else {
                continue;
            };
            let target = session.legal_moves().get(square).map(|m| {
                if m.promotion {
                    TargetMark::Promotion
                } else {
                    TargetMark::Move
                }
            });
            squares.push(SquareView {
                row,
                col,
                piece: board.piece_at(square),
                selected: session.selection() == Some(square) || promotion_target == Some(square),
                target,
                in_check: checked_king == Some(square),
            });
        }
    }
    squares
}

/// Status text and flags for the side pane
pub fn status_display(session: &Session, cues: &CuePlayer) -> StatusDisplay {
    let player = session.player();
    let side_to_move = session.side_to_move();
    let busy = session.state() == InteractionState::AwaitingRemote;

    let (headline, alert) = match session.status() {
        GameStatus::Checkmate if side_to_move == player => {
            ("Checkmate - you lose".to_string(), true)
        }
        GameStatus::Checkmate => ("Checkmate - you win".to_string(), true),
        GameStatus::Stalemate => ("Stalemate - draw".to_string(), true),
        GameStatus::Check if side_to_move == player => ("Check! Your move".to_string(), true),
        GameStatus::Check => ("Check! Bot to move".to_string(), true),
        GameStatus::Ongoing if busy => ("Bot thinking...".to_string(), false),
        GameStatus::Ongoing if side_to_move == player => ("Your move".to_string(), false),
        GameStatus::Ongoing => ("Bot to move".to_string(), false),
    };

    StatusDisplay {
        player,
        side_to_move,
        headline,
        alert,
        busy,
        loading_moves: session.is_loading_moves(),
        notice: session.notice().map(str::to_string),
        last_cue: cues.last().map(cue_name),
        can_retry_bot: session.bot_move_owed(),
        depth: session.depth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Feedback, LegalMove, Piece, PieceColor, PieceKind, RemoteReply, RemoteRequest,
    };
    use crate::remote::{LocalAuthority, MoveAuthority};
    use shakmaty::Square;

    fn run(session: &mut Session, authority: &mut LocalAuthority, request: Option<RemoteRequest>) {
        let mut next = request;
        while let Some(request) = next.take() {
            let outcome = authority.execute(&request.call);
            next = session
                .handle_reply(RemoteReply { ticket: request.ticket, outcome })
                .unwrap();
        }
    }

    fn started(player: PieceColor) -> Session {
        let mut session = Session::new(player, 2);
        let mut authority = LocalAuthority::new();
        let request = session.start_new_game(player, 2);
        run(&mut session, &mut authority, Some(request));
        session
    }

    #[test]
    fn test_flipped_board_puts_white_at_top() {
        let session = started(PieceColor::Black);
        let squares = board_display(&session);
        assert_eq!(squares.len(), 64);
        // Top-left is h1 when playing Black
        assert_eq!(
            squares[0].piece,
            Some(Piece { kind: PieceKind::Rook, color: PieceColor::White })
        );
        // Bottom row holds Black's back rank
        assert_eq!(squares[63].piece.map(|p| p.color), Some(PieceColor::Black));
    }

    #[test]
    fn test_selection_and_targets_marked() {
        let mut session = started(PieceColor::White);
        let mut authority = LocalAuthority::new();
        authority.new_game(PieceColor::White, 2).unwrap();
        let request = session.click(Square::E2);
        run(&mut session, &mut authority, request);

        let squares = board_display(&session);
        let at = |row: usize, col: usize| squares[row * 8 + col];
        assert!(at(6, 4).selected);
        assert_eq!(at(5, 4).target, Some(TargetMark::Move));
        assert_eq!(at(4, 4).target, Some(TargetMark::Move));
        assert_eq!(at(3, 4).target, None);
        assert_eq!(squares.iter().filter(|s| s.target.is_some()).count(), 2);
    }

    #[test]
    fn test_promotion_target_mark() {
        let mut session = started(PieceColor::White);
        session.selection = Some(Square::E2);
        session.moves.replace([LegalMove { to: Square::E4, promotion: true }]);
        let squares = board_display(&session);
        assert_eq!(squares[4 * 8 + 4].target, Some(TargetMark::Promotion));
    }

    #[test]
    fn test_status_headlines() {
        let mut session = started(PieceColor::White);
        let mut cues = CuePlayer::init(0.5);
        for feedback in session.take_feedback() {
            cues.play(feedback);
        }
        let status = status_display(&session, &cues);
        assert_eq!(status.headline, "Your move");
        assert!(!status.busy);
        assert_eq!(status.last_cue, Some("start"));
        assert!(!status.can_retry_bot);

        session.status = GameStatus::Checkmate;
        cues.play(Feedback::GameOver(GameStatus::Checkmate));
        let status = status_display(&session, &cues);
        assert_eq!(status.headline, "Checkmate - you lose");
        assert!(status.alert);
    }

    #[test]
    fn test_busy_while_move_in_flight() {
        let mut session = started(PieceColor::White);
        session.start_new_game(PieceColor::White, 2);
        let status = status_display(&session, &CuePlayer::init(0.5));
        assert!(status.busy);
        assert_eq!(status.headline, "Bot thinking...");
    }

    #[test]
    fn test_loading_moves_flag() {
        let mut session = started(PieceColor::White);
        let cues = CuePlayer::init(0.5);
        assert!(session.click(Square::E2).is_some());
        assert!(status_display(&session, &cues).loading_moves);

        let mut authority = LocalAuthority::new();
        authority.new_game(PieceColor::White, 2).unwrap();
        let query = session.click(Square::G1);
        run(&mut session, &mut authority, query);
        let status = status_display(&session, &cues);
        assert!(!status.loading_moves);
        assert!(!status.busy);
    }
}
