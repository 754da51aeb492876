mod app;
mod config;
mod domain;
mod error;
mod models;
mod remote;
mod ui;

use anyhow::Result;
use gpui::{App, Application};

use config::ClientConfig;
use ui::FileAssets;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if std::env::args().any(|arg| arg == "--print-config-schema") {
        println!("{}", ClientConfig::schema_json()?);
        return Ok(());
    }

    let config = ClientConfig::load()?;

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| app::run(cx, config));
    Ok(())
}
