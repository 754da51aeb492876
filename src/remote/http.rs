//! Move authority reached over JSON/HTTP.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shakmaty::Square;

use super::MoveAuthority;
use super::wire::{DepthBody, ErrorBody, GameBody, LegalMovesBody, MoveBody, NewGameBody};
use crate::domain::{GameUpdate, LegalMove, PieceColor, PromotionPiece};
use crate::error::ClientError;

pub struct HttpAuthority {
    client: Client,
    base_url: String,
}

impl HttpAuthority {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent("chess-client/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::RemoteUnavailable(format!("http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request and decode the body, mapping HTTP errors to `RemoteRejected`
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .map_err(|e| ClientError::RemoteUnavailable(e.to_string()))?;
        let status = response.status();
        debug!("authority replied {}", status);

        if status.is_client_error() {
            let detail = response
                .json::<ErrorBody>()
                .map(|body| body.detail)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::RemoteRejected(detail));
        }
        if !status.is_success() {
            return Err(ClientError::RemoteUnavailable(status.to_string()));
        }

        response
            .json::<T>()
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

impl MoveAuthority for HttpAuthority {
    fn new_game(&mut self, player: PieceColor, depth: u32) -> Result<GameUpdate, ClientError> {
        let body = NewGameBody {
            player_white: player.is_white(),
            depth,
        };
        let reply: GameBody = self.send(self.client.post(self.url("newgame")).json(&body))?;
        reply.into_update()
    }

    fn legal_moves(&mut self, from: Square) -> Result<Vec<LegalMove>, ClientError> {
        let request = self
            .client
            .get(self.url("legal_moves"))
            .query(&[("from_square", from.to_string())]);
        let reply: LegalMovesBody = self.send(request)?;
        reply.into_moves()
    }

    fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<GameUpdate, ClientError> {
        let body = MoveBody {
            from_square: from.to_string(),
            to_square: to.to_string(),
            promotion: promotion.map(|p| p.letter().to_string()),
        };
        let reply: GameBody = self.send(self.client.post(self.url("move")).json(&body))?;
        reply.into_update()
    }

    fn bot_move(&mut self, depth: u32) -> Result<GameUpdate, ClientError> {
        let body = DepthBody { depth };
        let reply: GameBody = self.send(self.client.post(self.url("bot_move")).json(&body))?;
        reply.into_update()
    }
}
