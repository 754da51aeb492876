//! Game model - connects the interaction session to the move authority worker.
//!
//! Architecture:
//! - The session decides what to ask the authority; this model ships the
//!   requests to the worker thread
//! - A GPUI background task polls the worker's reply channel and feeds replies
//!   back into the session, dispatching any follow-up (the bot's move)
//! - Feedback signals produced by reconciliation go to the cue player

use std::time::Duration;

use gpui::{AsyncApp, Context, Pixels, Size, Task, WeakEntity, px};
use log::{debug, error, warn};

use crate::config::ClientConfig;
use crate::domain::{PieceColor, PromotionPiece, RemoteReply, RemoteRequest, Session};
use crate::error::ClientError;
use crate::models::CuePlayer;
use crate::remote::RemoteWorker;
use crate::ui::BoardLayout;
use crate::ui::theme::INITIAL_LEFT_PANEL;

/// The main game model containing the session and its remote plumbing
pub struct GameModel {
    session: Session,
    worker: RemoteWorker,
    cues: CuePlayer,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
    /// Background polling task (kept alive as long as the model)
    _poll_task: Task<()>,
}

impl GameModel {
    /// Create the model and immediately start a game with the configured side.
    pub fn new(config: &ClientConfig, worker: RemoteWorker, cx: &mut Context<Self>) -> Self {
        let poll_task = cx.spawn(
            async move |weak_entity: WeakEntity<GameModel>, cx: &mut AsyncApp| {
                Self::run_reply_loop(weak_entity, cx).await;
            },
        );

        let mut model = Self {
            session: Session::new(config.player, config.depth),
            worker,
            cues: CuePlayer::init(config.volume),
            panel_size: Size {
                width: px(INITIAL_LEFT_PANEL),
                height: px(600.0),
            },
            _poll_task: poll_task,
        };
        model.new_game(config.player);
        model
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cues(&self) -> &CuePlayer {
        &self.cues
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.panel_size)
    }

    /// Start a new game, keeping the current search depth
    pub fn new_game(&mut self, player: PieceColor) {
        let depth = self.session.depth();
        let request = self.session.start_new_game(player, depth);
        self.dispatch(request);
    }

    /// Click on a square given in display coordinates
    pub fn click(&mut self, row: usize, col: usize) {
        match self.session.click_display(row, col) {
            Ok(Some(request)) => self.dispatch(request),
            Ok(None) => {}
            Err(e) => error!("click at {},{} dropped: {}", row, col, e),
        }
    }

    pub fn choose_promotion(&mut self, piece: PromotionPiece) {
        if let Some(request) = self.session.choose_promotion(piece) {
            self.dispatch(request);
        }
    }

    pub fn cancel_promotion(&mut self) {
        self.session.cancel_promotion();
    }

    pub fn retry_bot_move(&mut self) {
        if let Some(request) = self.session.request_bot_move() {
            self.dispatch(request);
        }
    }

    /// Background loop that polls the reply channel and updates the model
    async fn run_reply_loop(weak_entity: WeakEntity<GameModel>, cx: &mut AsyncApp) {
        const POLL_INTERVAL: Duration = Duration::from_millis(16); // ~60fps

        loop {
            cx.background_executor().timer(POLL_INTERVAL).await;

            let alive = weak_entity.update(cx, |game, cx| {
                if game.process_pending_replies() {
                    cx.notify();
                }
            });

            if alive.is_err() {
                break; // entity dropped
            }
        }
    }

    /// Returns true if any replies were processed
    fn process_pending_replies(&mut self) -> bool {
        let replies = self.worker.drain();
        if replies.is_empty() {
            return false;
        }
        for reply in replies {
            self.accept(reply);
        }
        true
    }

    fn accept(&mut self, reply: RemoteReply) {
        let ticket = reply.ticket;
        match self.session.handle_reply(reply) {
            Ok(Some(request)) => self.dispatch(request),
            Ok(None) => {}
            Err(ClientError::StaleResponse) => debug!(
                "discarded stale reply {:?} (current game {})",
                ticket,
                self.session.generation()
            ),
            Err(e) => warn!("reply not applied: {}", e),
        }
        for feedback in self.session.take_feedback() {
            self.cues.play(feedback);
        }
    }

    fn dispatch(&mut self, request: RemoteRequest) {
        if let Err(failed) = self.worker.submit(request) {
            error!("could not reach the move authority worker");
            self.accept(failed);
        }
    }
}
