mod api;
mod config;
mod html;
mod leaderboard;
mod logging;
mod render;
mod scheduler;
mod util;

use tokio::signal;
use tracing::{info, warn};

use crate::api::medals_api::HttpMedalSource;
use crate::render::clock::SystemClock;
use crate::render::page_file::PageFile;
use crate::render::Renderer;
use crate::scheduler::{trigger, LeaderboardClient};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cfg = config::load_config()?;

    logging::init(&cfg.log)?;
    info!("Logging Initialised. Initialising Medalboard application");

    let page = PageFile::create(&cfg.page.path, &cfg.page.container_id, &cfg.page.title)?;
    info!(page = %page.path().display(), "Rendering into page file");
    let mut client = LeaderboardClient::new(
        HttpMedalSource::new(&cfg.backend_url),
        page,
        SystemClock,
        Renderer::new(&cfg.page.heading),
        cfg.refresh_interval,
    );

    client.start();
    info!(backend_url = %cfg.backend_url, "Setup complete. Waiting for refresh triggers");

    let manual = cfg.stdin_trigger.then(trigger::spawn_stdin_trigger);
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = ?e, "Failed to listen for shutdown signal");
        }
    };
    trigger::run_until_shutdown(manual, shutdown, || {
        client.refresh_now();
    })
    .await;

    info!(
        running = client.is_running(),
        rows = client.leaderboard().len(),
        "Shutting down"
    );
    client.stop();
    Ok(())
}
