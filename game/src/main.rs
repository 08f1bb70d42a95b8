use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use engine::app::{AppConfig, run_game};

use game::headful::app::PocketBlocksApp;
use game::headful::audio_device;
use game::render::SCREEN;
use game::settings::{Settings, SettingsOverrides};

/// Handheld-style falling block puzzle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window size as a multiple of 160x144 (1-8).
    #[arg(long)]
    scale: Option<u32>,

    /// Seed for the piece bag.
    #[arg(long)]
    seed: Option<u64>,

    /// Start without sound.
    #[arg(long)]
    mute: bool,

    #[arg(long)]
    no_vsync: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let overrides = SettingsOverrides {
        scale: cli.scale,
        seed: cli.seed,
        mute: cli.mute,
        no_vsync: cli.no_vsync,
    };
    let settings = Settings::resolve(cli.config.as_deref(), overrides)
        .context("failed to load settings")?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting: scale {} vsync {} seed {} mute {}",
        settings.scale,
        settings.vsync,
        seed,
        settings.audio.mute
    );

    let audio = audio_device::open_or_silent(settings.audio);
    let app = PocketBlocksApp::new(seed, audio);
    let config = AppConfig {
        title: "Pocket Blocks".to_string(),
        buffer_size: SCREEN,
        scale: settings.scale,
        vsync: settings.vsync,
    };

    run_game(config, app)
        .map_err(|err| anyhow!("{err}"))
        .context("failed to open the game window")
}
