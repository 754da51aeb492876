//! Application setup and window creation.

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use log::{error, info};

use crate::config::ClientConfig;
use crate::models::GameModel;
use crate::remote::{self, RemoteWorker};
use crate::ui::views::ChessBoardView;

/// Initialize and run the chess client
pub fn run(cx: &mut App, config: ClientConfig) {
    gpui_component::init(cx);

    let authority = match remote::connect(&config) {
        Ok(authority) => authority,
        Err(e) => {
            error!("cannot set up move authority: {}", e);
            cx.quit();
            return;
        }
    };
    let worker = match RemoteWorker::spawn(authority) {
        Ok(worker) => worker,
        Err(e) => {
            error!("cannot start move authority worker: {}", e);
            cx.quit();
            return;
        }
    };
    info!(
        "playing {} against {}",
        config.player.name(),
        if config.offline { "the built-in bot" } else { config.server_url.as_str() }
    );

    // Create the game model; this also starts the first game
    let model = cx.new(|cx| GameModel::new(&config, worker, cx));

    let bounds = Bounds::centered(None, size(px(900.0), px(620.0)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    );
    if let Err(e) = opened {
        error!("failed to open window: {}", e);
        cx.quit();
    }
}
