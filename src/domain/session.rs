//! Interaction state machine for one client session.
//!
//! The session never talks to the network itself. Every operation that needs
//! the move authority returns a [`RemoteRequest`]; the caller executes it and
//! hands the [`RemoteReply`] back through [`Session::handle_reply`]. Requests
//! carry a [`Ticket`] so replies for superseded selections or older games can
//! be recognised and dropped.

use log::{debug, info, warn};
use shakmaty::Square;

use crate::domain::coords::{Orientation, to_square};
use crate::domain::{
    BoardSnapshot, GameStatus, MoveCache, PieceColor, PromotionPiece, RemoteCall, RemoteReply,
    RemoteRequest, RemoteResponse, Ticket,
};
use crate::error::ClientError;

/// Observable interaction state, derived from the session fields
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InteractionState {
    Idle,
    Selected,
    AwaitingPromotionChoice,
    /// New game, move submission or bot move in flight
    AwaitingRemote,
}

/// Pending promotion between the destination click and the piece choice
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PromotionRequest {
    pub origin: Square,
    pub destination: Square,
}

/// Signals for the surrounding system to render or sonify
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feedback {
    GameStarted,
    MoveApplied,
    Check,
    GameOver(GameStatus),
}

/// Side and depth requested for a new game, applied once the authority confirms it
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct GameSetup {
    pub(crate) player: PieceColor,
    pub(crate) depth: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CallKind {
    NewGame(GameSetup),
    SubmitMove,
    BotMove,
}

#[derive(Clone, Copy, Debug)]
struct Outstanding {
    ticket: Ticket,
    kind: CallKind,
}

pub struct Session {
    pub(crate) player: PieceColor,
    pub(crate) orientation: Orientation,
    pub(crate) depth: u32,
    /// Set once the authority has confirmed a game
    pub(crate) started: bool,
    /// Game id, bumped by every new game
    generation: u64,
    next_serial: u64,
    pub(crate) board: BoardSnapshot,
    pub(crate) side_to_move: PieceColor,
    pub(crate) status: GameStatus,
    pub(crate) selection: Option<Square>,
    pub(crate) moves: MoveCache,
    pub(crate) promotion: Option<PromotionRequest>,
    /// Legal-moves query for the current selection
    legal_query: Option<Ticket>,
    /// Move, bot or new-game call
    outstanding: Option<Outstanding>,
    pub(crate) notice: Option<String>,
    pub(crate) feedback: Vec<Feedback>,
}

impl Session {
    pub fn new(player: PieceColor, depth: u32) -> Self {
        Self {
            player,
            orientation: Orientation::for_player(player),
            depth,
            started: false,
            generation: 0,
            next_serial: 0,
            board: BoardSnapshot::default(),
            side_to_move: PieceColor::White,
            status: GameStatus::Ongoing,
            selection: None,
            moves: MoveCache::default(),
            promotion: None,
            legal_query: None,
            outstanding: None,
            notice: None,
            feedback: Vec::new(),
        }
    }

    pub fn state(&self) -> InteractionState {
        if self.outstanding.is_some() {
            InteractionState::AwaitingRemote
        } else if self.promotion.is_some() {
            InteractionState::AwaitingPromotionChoice
        } else if self.selection.is_some() {
            InteractionState::Selected
        } else {
            InteractionState::Idle
        }
    }

    pub fn player(&self) -> PieceColor {
        self.player
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn legal_moves(&self) -> &MoveCache {
        &self.moves
    }

    pub fn promotion(&self) -> Option<PromotionRequest> {
        self.promotion
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the destinations for the current selection are still being fetched
    pub fn is_loading_moves(&self) -> bool {
        self.legal_query.is_some()
    }

    /// Whether the bot is on move and nothing is in flight
    pub fn bot_move_owed(&self) -> bool {
        self.started
            && self.outstanding.is_none()
            && self.side_to_move != self.player
            && !self.status.is_over()
    }

    /// Feedback signals emitted since the last call
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }

    /// Start a new game, abandoning whatever is in progress.
    ///
    /// Side, orientation and depth keep their current values until the
    /// authority answers, so a failed request leaves the old game as it was.
    pub fn start_new_game(&mut self, player: PieceColor, depth: u32) -> RemoteRequest {
        self.generation += 1;
        self.notice = None;
        self.legal_query = None;
        self.clear_interaction();

        info!(
            "new game {} as {} at depth {}",
            self.generation,
            player.name(),
            depth
        );
        self.issue(
            CallKind::NewGame(GameSetup { player, depth }),
            RemoteCall::NewGame { player, depth },
        )
    }

    /// Click in display coordinates
    pub fn click_display(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<RemoteRequest>, ClientError> {
        let square = to_square(row, col, self.orientation)?;
        Ok(self.click(square))
    }

    /// Click on a board square
    pub fn click(&mut self, square: Square) -> Option<RemoteRequest> {
        match self.state() {
            InteractionState::AwaitingRemote | InteractionState::AwaitingPromotionChoice => {
                debug!("click on {} ignored in {:?}", square, self.state());
                None
            }
            InteractionState::Idle => self.select(square),
            InteractionState::Selected => {
                let origin = self.selection?;
                if self.legal_query.is_some() {
                    // Destinations not known yet: another own piece supersedes the query
                    if square != origin && self.can_select(square) {
                        return self.select(square);
                    }
                    self.deselect();
                    return None;
                }

                match self.moves.get(square).copied() {
                    Some(mv) if mv.promotion => {
                        debug!("promotion pending {}{}", origin, square);
                        self.promotion = Some(PromotionRequest {
                            origin,
                            destination: square,
                        });
                        None
                    }
                    Some(_) => Some(self.submit(origin, square, None)),
                    None => {
                        self.deselect();
                        None
                    }
                }
            }
        }
    }

    /// Resolve a pending promotion with the chosen piece
    pub fn choose_promotion(&mut self, piece: PromotionPiece) -> Option<RemoteRequest> {
        if self.outstanding.is_some() {
            return None;
        }
        let request = self.promotion?;
        Some(self.submit(request.origin, request.destination, Some(piece)))
    }

    /// Abandon a pending promotion and return to idle
    pub fn cancel_promotion(&mut self) {
        if self.outstanding.is_none() && self.promotion.is_some() {
            debug!("promotion cancelled");
            self.clear_interaction();
        }
    }

    /// Ask the bot to move again after a failed bot reply
    pub fn request_bot_move(&mut self) -> Option<RemoteRequest> {
        if !self.bot_move_owed() {
            return None;
        }
        self.notice = None;
        Some(self.issue(CallKind::BotMove, RemoteCall::BotMove { depth: self.depth }))
    }

    /// Apply a reply from the move authority.
    ///
    /// Returns the follow-up request (the bot's reply) when one is owed.
    /// `Err(StaleResponse)` means the reply was discarded and nothing changed.
    pub fn handle_reply(
        &mut self,
        reply: RemoteReply,
    ) -> Result<Option<RemoteRequest>, ClientError> {
        if reply.ticket.generation != self.generation {
            return Err(ClientError::StaleResponse);
        }

        if self.legal_query == Some(reply.ticket) {
            self.legal_query = None;
            self.apply_legal_moves(reply.outcome);
            return Ok(None);
        }

        let outstanding = match self.outstanding {
            Some(o) if o.ticket == reply.ticket => o,
            _ => return Err(ClientError::StaleResponse),
        };
        self.outstanding = None;

        match reply.outcome {
            Ok(RemoteResponse::Game(update)) => {
                let bot_needed = update.bot_needed;
                self.reconcile(update, outstanding.kind);
                if bot_needed && outstanding.kind == CallKind::SubmitMove {
                    debug!("bot reply owed, requesting bot move");
                    return Ok(Some(
                        self.issue(CallKind::BotMove, RemoteCall::BotMove { depth: self.depth }),
                    ));
                }
                Ok(None)
            }
            Ok(RemoteResponse::LegalMoves(_)) => {
                self.fail(ClientError::MalformedResponse(
                    "expected a game state, got legal moves".to_string(),
                ));
                Ok(None)
            }
            Err(e) => {
                self.fail(e);
                Ok(None)
            }
        }
    }

    fn apply_legal_moves(&mut self, outcome: Result<RemoteResponse, ClientError>) {
        match outcome {
            Ok(RemoteResponse::LegalMoves(moves)) if self.selection.is_some() => {
                self.moves.replace(moves);
                debug!(
                    "{} destinations for {:?}",
                    self.moves.len(),
                    self.selection
                );
            }
            Ok(RemoteResponse::LegalMoves(_)) => {}
            Ok(RemoteResponse::Game(_)) => {
                warn!("legal moves query answered with a game state");
                self.deselect();
            }
            Err(e) => {
                // No highlight, the square behaves as unselectable
                warn!("legal moves query failed: {}", e);
                self.deselect();
            }
        }
    }

    fn can_select(&self, square: Square) -> bool {
        !self.status.is_over()
            && self.side_to_move == self.player
            && self
                .board
                .piece_at(square)
                .is_some_and(|piece| piece.color == self.player)
    }

    fn select(&mut self, square: Square) -> Option<RemoteRequest> {
        if !self.can_select(square) {
            return None;
        }
        debug!("select {}", square);
        self.selection = Some(square);
        self.moves.clear();
        let ticket = self.next_ticket();
        self.legal_query = Some(ticket);
        Some(RemoteRequest {
            ticket,
            call: RemoteCall::LegalMoves { from: square },
        })
    }

    fn deselect(&mut self) {
        self.legal_query = None;
        self.clear_interaction();
    }

    fn submit(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> RemoteRequest {
        debug!("submit {}{} promotion {:?}", from, to, promotion);
        self.issue(
            CallKind::SubmitMove,
            RemoteCall::SubmitMove {
                from,
                to,
                promotion,
            },
        )
    }

    /// A move, bot or new-game call failed: keep the board, surface a notice
    fn fail(&mut self, error: ClientError) {
        warn!("remote call failed: {}", error);
        self.notice = Some(error.notice());
        self.legal_query = None;
        self.clear_interaction();
    }

    fn issue(&mut self, kind: CallKind, call: RemoteCall) -> RemoteRequest {
        let ticket = self.next_ticket();
        self.outstanding = Some(Outstanding { ticket, kind });
        RemoteRequest { ticket, call }
    }

    fn next_ticket(&mut self) -> Ticket {
        self.next_serial += 1;
        Ticket {
            generation: self.generation,
            serial: self.next_serial,
        }
    }

    pub(crate) fn clear_interaction(&mut self) {
        self.selection = None;
        self.moves.clear();
        self.promotion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameUpdate, LegalMove, Piece, PieceKind};
    use crate::remote::{LocalAuthority, MoveAuthority};
    use shakmaty::fen::Fen;
    use shakmaty::{CastlingMode, Chess};

    /// Execute requests synchronously until no follow-up is owed
    fn drive(
        session: &mut Session,
        authority: &mut LocalAuthority,
        request: Option<RemoteRequest>,
    ) {
        let mut next = request;
        while let Some(request) = next.take() {
            let reply = RemoteReply {
                ticket: request.ticket,
                outcome: authority.execute(&request.call),
            };
            next = session.handle_reply(reply).unwrap();
        }
    }

    fn started(player: PieceColor) -> (Session, LocalAuthority) {
        let mut session = Session::new(player, 3);
        let mut authority = LocalAuthority::new();
        let request = session.start_new_game(player, 3);
        drive(&mut session, &mut authority, Some(request));
        (session, authority)
    }

    fn answer(
        request: &RemoteRequest,
        outcome: Result<RemoteResponse, ClientError>,
    ) -> RemoteReply {
        RemoteReply {
            ticket: request.ticket,
            outcome,
        }
    }

    fn assert_clean(session: &Session) {
        assert_eq!(session.selection(), None);
        assert!(session.legal_moves().is_empty());
        assert_eq!(session.promotion(), None);
    }

    #[test]
    fn test_new_game_as_white() {
        let (session, _) = started(PieceColor::White);
        assert_eq!(session.state(), InteractionState::Idle);
        assert_eq!(session.side_to_move(), PieceColor::White);
        for file in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'] {
            let white: Square = format!("{}2", file).parse().unwrap();
            let black: Square = format!("{}7", file).parse().unwrap();
            assert_eq!(
                session.board().piece_at(white),
                Some(Piece { kind: PieceKind::Pawn, color: PieceColor::White })
            );
            assert_eq!(
                session.board().piece_at(black),
                Some(Piece { kind: PieceKind::Pawn, color: PieceColor::Black })
            );
        }
        assert_eq!(session.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_new_game_emits_start_feedback() {
        let (mut session, _) = started(PieceColor::White);
        assert_eq!(session.take_feedback(), vec![Feedback::GameStarted]);
        assert!(session.take_feedback().is_empty());
    }

    #[test]
    fn test_new_game_as_black_bot_opens() {
        let (session, _) = started(PieceColor::Black);
        assert_eq!(session.side_to_move(), PieceColor::Black);
        assert!(session.orientation().is_flipped());
    }

    #[test]
    fn test_select_pawn_lists_pushes() {
        let (mut session, mut authority) = started(PieceColor::White);
        let request = session.click(Square::E2);
        assert!(matches!(
            request,
            Some(RemoteRequest { call: RemoteCall::LegalMoves { from: Square::E2 }, .. })
        ));
        assert!(session.is_loading_moves());
        drive(&mut session, &mut authority, request);

        assert_eq!(session.state(), InteractionState::Selected);
        assert_eq!(session.selection(), Some(Square::E2));
        let moves: Vec<_> = session.legal_moves().iter().copied().collect();
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&LegalMove { to: Square::E3, promotion: false }));
        assert!(moves.contains(&LegalMove { to: Square::E4, promotion: false }));
    }

    #[test]
    fn test_idle_clicks_on_empty_or_opponent_are_noops() {
        let (mut session, _) = started(PieceColor::White);
        assert!(session.click(Square::E4).is_none());
        assert!(session.click(Square::E7).is_none());
        assert_eq!(session.state(), InteractionState::Idle);
        assert_clean(&session);
    }

    #[test]
    fn test_move_triggers_bot_reply() {
        let (mut session, mut authority) = started(PieceColor::White);
        let select = session.click(Square::E2);
        drive(&mut session, &mut authority, select);

        let submit = session.click(Square::E4).unwrap();
        assert_eq!(session.state(), InteractionState::AwaitingRemote);
        assert!(session.click(Square::D2).is_none());

        let reply = answer(&submit, authority.execute(&submit.call));
        let bot = session.handle_reply(reply).unwrap().unwrap();
        assert!(matches!(bot.call, RemoteCall::BotMove { depth: 3 }));
        assert_eq!(session.side_to_move(), PieceColor::Black);
        assert_eq!(
            session.board().piece_at(Square::E4),
            Some(Piece { kind: PieceKind::Pawn, color: PieceColor::White })
        );
        assert_eq!(session.state(), InteractionState::AwaitingRemote);
        assert_clean(&session);

        drive(&mut session, &mut authority, Some(bot));
        assert_eq!(session.state(), InteractionState::Idle);
        assert_eq!(session.side_to_move(), PieceColor::White);
        assert!(session.take_feedback().contains(&Feedback::MoveApplied));
    }

    #[test]
    fn test_non_target_click_deselects() {
        let (mut session, mut authority) = started(PieceColor::White);
        let select = session.click(Square::E2);
        drive(&mut session, &mut authority, select);

        // Another own piece does not re-select once destinations are known
        assert!(session.click(Square::D2).is_none());
        assert_eq!(session.state(), InteractionState::Idle);
        assert_clean(&session);

        let select = session.click(Square::G1);
        drive(&mut session, &mut authority, select);
        assert!(session.click(Square::G1).is_none());
        assert_clean(&session);
    }

    #[test]
    fn test_rapid_selection_keeps_latest_query() {
        let (mut session, mut authority) = started(PieceColor::White);
        let first = session.click(Square::E2).unwrap();
        let second = session.click(Square::G1).unwrap();
        assert_eq!(session.selection(), Some(Square::G1));

        let late = answer(&first, authority.execute(&first.call));
        assert_eq!(session.handle_reply(late), Err(ClientError::StaleResponse));
        assert!(session.legal_moves().is_empty());

        drive(&mut session, &mut authority, Some(second));
        assert!(session.legal_moves().get(Square::F3).is_some());
        assert!(session.legal_moves().get(Square::H3).is_some());
        assert!(session.legal_moves().get(Square::E4).is_none());
    }

    #[test]
    fn test_click_elsewhere_while_loading_deselects() {
        let (mut session, mut authority) = started(PieceColor::White);
        let query = session.click(Square::E2).unwrap();
        assert!(session.click(Square::E5).is_none());
        assert_clean(&session);

        let late = answer(&query, authority.execute(&query.call));
        assert_eq!(session.handle_reply(late), Err(ClientError::StaleResponse));
        assert_clean(&session);
    }

    #[test]
    fn test_legal_moves_failure_is_soft() {
        let (mut session, _) = started(PieceColor::White);
        let query = session.click(Square::E2).unwrap();
        let reply = answer(
            &query,
            Err(ClientError::RemoteUnavailable("connection refused".into())),
        );
        assert_eq!(session.handle_reply(reply), Ok(None));
        assert_eq!(session.state(), InteractionState::Idle);
        assert_clean(&session);
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_submit_failure_keeps_board() {
        let (mut session, mut authority) = started(PieceColor::White);
        let before = *session.board();
        let select = session.click(Square::E2);
        drive(&mut session, &mut authority, select);
        let submit = session.click(Square::E4).unwrap();

        let reply = answer(&submit, Err(ClientError::RemoteUnavailable("timeout".into())));
        assert_eq!(session.handle_reply(reply), Ok(None));
        assert_eq!(*session.board(), before);
        assert_eq!(session.side_to_move(), PieceColor::White);
        assert_eq!(session.state(), InteractionState::Idle);
        assert!(session.notice().is_some());
    }

    #[test]
    fn test_bot_failure_can_be_retried() {
        let (mut session, mut authority) = started(PieceColor::White);
        let select = session.click(Square::E2);
        drive(&mut session, &mut authority, select);
        let submit = session.click(Square::E4).unwrap();
        let bot = session
            .handle_reply(answer(&submit, authority.execute(&submit.call)))
            .unwrap()
            .unwrap();

        let failed = answer(&bot, Err(ClientError::RemoteUnavailable("reset".into())));
        assert_eq!(session.handle_reply(failed), Ok(None));
        assert!(session.bot_move_owed());
        assert!(session.click(Square::D2).is_none());

        let retry = session.request_bot_move();
        assert!(retry.is_some());
        assert_eq!(session.notice(), None);
        drive(&mut session, &mut authority, retry);
        assert_eq!(session.side_to_move(), PieceColor::White);
        assert!(session.request_bot_move().is_none());
    }

    #[test]
    fn test_new_game_discards_pending_replies() {
        let (mut session, mut authority) = started(PieceColor::White);
        let select = session.click(Square::E2);
        drive(&mut session, &mut authority, select);
        let submit = session.click(Square::E4).unwrap();
        let old_reply = answer(&submit, authority.execute(&submit.call));

        let restart = session.start_new_game(PieceColor::White, 3);
        assert!(session.generation() > submit.ticket.generation);
        assert_eq!(session.handle_reply(old_reply), Err(ClientError::StaleResponse));

        drive(&mut session, &mut authority, Some(restart));
        assert_eq!(session.state(), InteractionState::Idle);
        assert_eq!(session.board().piece_at(Square::E4), None);
    }

    #[test]
    fn test_new_game_cancels_promotion() {
        let mut session = Session::new(PieceColor::White, 3);
        session.selection = Some(Square::A7);
        session.moves.replace([LegalMove { to: Square::A8, promotion: true }]);
        session.promotion = Some(PromotionRequest { origin: Square::A7, destination: Square::A8 });

        let request = session.start_new_game(PieceColor::Black, 5);
        assert!(matches!(
            request.call,
            RemoteCall::NewGame { player: PieceColor::Black, depth: 5 }
        ));
        assert_eq!(session.state(), InteractionState::AwaitingRemote);
        assert_clean(&session);
    }

    #[test]
    fn test_unknown_ticket_is_stale() {
        let (mut session, _) = started(PieceColor::White);
        let reply = RemoteReply {
            ticket: Ticket { generation: session.generation(), serial: 999 },
            outcome: Ok(RemoteResponse::LegalMoves(Vec::new())),
        };
        assert_eq!(session.handle_reply(reply), Err(ClientError::StaleResponse));
    }

    #[test]
    fn test_cannot_select_out_of_turn_or_after_game_over() {
        let (mut session, _) = started(PieceColor::White);
        session.side_to_move = PieceColor::Black;
        assert!(session.click(Square::E2).is_none());

        session.side_to_move = PieceColor::White;
        session.status = GameStatus::Checkmate;
        assert!(session.click(Square::E2).is_none());
        assert!(!session.bot_move_owed());
    }

    #[test]
    fn test_click_display_uses_orientation() {
        let (mut session, _) = started(PieceColor::White);
        let request = session.click_display(6, 4).unwrap().unwrap();
        assert_eq!(request.call, RemoteCall::LegalMoves { from: Square::E2 });
        assert!(matches!(
            session.click_display(8, 0),
            Err(ClientError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_reply_with_wrong_shape_surfaces_notice() {
        let (mut session, _) = started(PieceColor::White);
        let request = session.start_new_game(PieceColor::White, 3);
        let reply = answer(&request, Ok(RemoteResponse::LegalMoves(Vec::new())));
        assert_eq!(session.handle_reply(reply), Ok(None));
        assert!(session.notice().is_some());
        assert_eq!(session.state(), InteractionState::Idle);
    }

    #[test]
    fn test_bot_needed_ignored_for_new_game() {
        let mut session = Session::new(PieceColor::White, 3);
        let request = session.start_new_game(PieceColor::White, 3);
        let update = GameUpdate {
            board: BoardSnapshot::from_board(&shakmaty::Board::default()),
            side_to_move: PieceColor::White,
            check: false,
            checkmate: false,
            stalemate: false,
            bot_needed: true,
        };
        let reply = answer(&request, Ok(RemoteResponse::Game(update)));
        assert_eq!(session.handle_reply(reply), Ok(None));
    }

    fn promotion_game() -> (Session, LocalAuthority) {
        let fen: Fen = "7k/P7/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let start: Chess = fen.into_position(CastlingMode::Standard).unwrap();
        let mut session = Session::new(PieceColor::White, 3);
        let mut authority = LocalAuthority::with_start(start);
        let request = session.start_new_game(PieceColor::White, 3);
        drive(&mut session, &mut authority, Some(request));
        (session, authority)
    }

    #[test]
    fn test_promotion_waits_for_choice_and_cancels() {
        let (mut session, mut authority) = promotion_game();
        let before = *session.board();
        let select = session.click(Square::A7);
        drive(&mut session, &mut authority, select);
        assert_eq!(
            session.legal_moves().iter().copied().collect::<Vec<_>>(),
            vec![LegalMove { to: Square::A8, promotion: true }]
        );

        assert!(session.click(Square::A8).is_none());
        assert_eq!(session.state(), InteractionState::AwaitingPromotionChoice);
        assert_eq!(
            session.promotion(),
            Some(PromotionRequest { origin: Square::A7, destination: Square::A8 })
        );

        // Board clicks are ignored until the choice is made
        assert!(session.click(Square::A1).is_none());
        assert!(session.click(Square::A8).is_none());
        assert_eq!(session.state(), InteractionState::AwaitingPromotionChoice);

        session.cancel_promotion();
        assert_eq!(session.state(), InteractionState::Idle);
        assert_clean(&session);
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn test_promotion_choice_submits_piece() {
        let (mut session, mut authority) = promotion_game();
        let select = session.click(Square::A7);
        drive(&mut session, &mut authority, select);
        assert!(session.click(Square::A8).is_none());

        let submit = session.choose_promotion(PromotionPiece::Queen).unwrap();
        assert_eq!(
            submit.call,
            RemoteCall::SubmitMove {
                from: Square::A7,
                to: Square::A8,
                promotion: Some(PromotionPiece::Queen),
            }
        );
        assert_eq!(session.state(), InteractionState::AwaitingRemote);
        assert!(session.choose_promotion(PromotionPiece::Rook).is_none());

        drive(&mut session, &mut authority, Some(submit));
        assert_eq!(session.state(), InteractionState::Idle);
        assert_clean(&session);
        assert_eq!(
            session.board().piece_at(Square::A8),
            Some(Piece { kind: PieceKind::Queen, color: PieceColor::White })
        );
        assert_eq!(session.board().piece_at(Square::A7), None);
        assert_eq!(session.side_to_move(), PieceColor::White);
    }

    #[test]
    fn test_failed_new_game_keeps_previous_game() {
        let (mut session, _) = started(PieceColor::White);
        session.status = GameStatus::Checkmate;
        let before = *session.board();

        let request = session.start_new_game(PieceColor::Black, 5);
        let reply = answer(&request, Err(ClientError::RemoteUnavailable("refused".into())));
        assert_eq!(session.handle_reply(reply), Ok(None));

        assert_eq!(session.player(), PieceColor::White);
        assert!(!session.orientation().is_flipped());
        assert_eq!(session.depth(), 3);
        assert_eq!(session.status(), GameStatus::Checkmate);
        assert_eq!(*session.board(), before);
        assert!(session.notice().is_some());
        assert!(!session.bot_move_owed());
        assert!(session.request_bot_move().is_none());
    }

    #[test]
    fn test_failed_first_game_owes_no_bot_move() {
        let mut session = Session::new(PieceColor::Black, 3);
        let request = session.start_new_game(PieceColor::Black, 3);
        let reply = answer(&request, Err(ClientError::RemoteUnavailable("refused".into())));
        assert_eq!(session.handle_reply(reply), Ok(None));

        assert_eq!(session.state(), InteractionState::Idle);
        assert_eq!(*session.board(), BoardSnapshot::default());
        assert!(!session.bot_move_owed());
        assert!(session.request_bot_move().is_none());
        assert!(session.click(Square::E7).is_none());
    }
}
