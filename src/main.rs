mod app;
mod config;
mod domain;
mod infrastructure;
mod poller;
mod practicum;
mod telegram;

use anyhow::Result;
use infrastructure::{logging, stop};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    logging::init_tracing(&config)?;

    let (stop_handle, stop_token) = stop::StopHandle::new();
    stop::install_signal_handlers(stop_handle);

    let app = app::HomeworkBotApp::initialize(config)?;
    app.run(stop_token).await
}
