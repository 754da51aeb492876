//! Background thread that owns the move authority.
//!
//! Architecture (same shape as an engine reader/writer pair):
//! - Requests are sent over a channel to one OS thread that performs the
//!   blocking call
//! - Replies come back over a second channel, stamped with the request ticket
//! - The UI side drains replies without blocking

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, info};

use super::MoveAuthority;
use crate::domain::{RemoteReply, RemoteRequest};
use crate::error::ClientError;

pub struct RemoteWorker {
    requests: Sender<RemoteRequest>,
    replies: Receiver<RemoteReply>,
}

impl RemoteWorker {
    /// Spawn the worker thread. It exits once the worker is dropped.
    pub fn spawn(mut authority: Box<dyn MoveAuthority>) -> std::io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<RemoteRequest>();
        let (reply_tx, reply_rx) = mpsc::channel::<RemoteReply>();

        thread::Builder::new()
            .name("move-authority".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    debug!("-> {} {:?}", request.call.name(), request.ticket);
                    let outcome = authority.execute(&request.call);
                    let reply = RemoteReply {
                        ticket: request.ticket,
                        outcome,
                    };
                    if reply_tx.send(reply).is_err() {
                        break;
                    }
                }
                info!("move authority worker stopped");
            })?;

        Ok(Self {
            requests: request_tx,
            replies: reply_rx,
        })
    }

    /// Queue a request. When the worker is gone the failure comes back as a reply
    /// so the caller handles it like any other remote failure.
    pub fn submit(&self, request: RemoteRequest) -> Result<(), RemoteReply> {
        self.requests.send(request).map_err(|e| {
            RemoteReply::failed(
                &e.0,
                ClientError::RemoteUnavailable("move authority worker stopped".to_string()),
            )
        })
    }

    /// All replies that have arrived so far
    pub fn drain(&self) -> Vec<RemoteReply> {
        self.replies.try_iter().collect()
    }
}
