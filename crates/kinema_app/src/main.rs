//! Headless portfolio demo
//!
//! Mounts the page, toggles the theme once, then runs a scripted scroll
//! sweep to the bottom and back while the frame loop drives the reveal
//! pipeline. Trigger transitions show up at trace level
//! (`RUST_LOG=kinema_scroll=trace`).

use anyhow::Result;
use clap::Parser;
use kinema_app::{NavLink, Portfolio};
use kinema_core::Viewport;
use kinema_scroll::SmoothScrollConfig;
use kinema_theme::FileStore;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "kinema", about = "Run the portfolio page headlessly")]
struct Cli {
    /// Theme preference file (TOML). Survives across runs.
    #[arg(long, default_value = "kinema-prefs.toml")]
    prefs: PathBuf,

    /// Frame rate of the scroll loop.
    #[arg(long, default_value_t = 120)]
    fps: u32,

    /// Seconds to dwell at each end of the sweep.
    #[arg(long, default_value_t = 2.5)]
    dwell_secs: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = SmoothScrollConfig {
        target_fps: cli.fps,
        ..Default::default()
    };
    let mut portfolio = Portfolio::new(FileStore::new(&cli.prefs), config, Viewport::default());
    tracing::info!(mode = %portfolio.theme_mode(), "portfolio mounted");

    let mode = portfolio.toggle_theme();
    tracing::info!(%mode, prefs = %cli.prefs.display(), "preference stored");

    let mut handle = portfolio.start()?;
    let dwell = Duration::from_secs_f32(cli.dwell_secs);

    portfolio.navigate(NavLink::Contact);
    thread::sleep(dwell);
    tracing::info!(
        position = portfolio.position(),
        cards = ?portfolio.cards_state(),
        skills = ?portfolio.skills_state(),
        "swept to the bottom"
    );

    portfolio.navigate(NavLink::Home);
    thread::sleep(dwell);
    tracing::info!(
        position = portfolio.position(),
        cards = ?portfolio.cards_state(),
        hero_done = portfolio.hero_done(),
        "swept back to the top"
    );

    handle.stop();
    Ok(())
}
