use anyhow::{Context, Result};
use tracing::warn;

use lorascrub::app::App;
use lorascrub::config::ScrubConfig;
use lorascrub::logging::{cleanup_old_logs, init_logging};
use lorascrub::tui::run_tui;

fn main() -> Result<()> {
    let config = ScrubConfig::load().context("failed to load configuration")?;

    // The guard keeps the non-blocking log writer alive until exit
    let _guard = init_logging(&config.logging).context("failed to initialize logging")?;
    if let Err(e) = cleanup_old_logs(&config.logging) {
        warn!("log cleanup failed: {}", e);
    }

    let colors = config.theme.colors();
    let mut app = App::new();
    run_tui(&mut app, &colors)
}
