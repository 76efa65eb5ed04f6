//! Pong table without a window
//!
//! Runs the simulation at its refresh rate against a synthetic mouse, logs
//! points and rounds, and can record every frame for later playback.
//!
//! Example:
//!   cargo run -p headless -- --seed 7 --rounds 3 --record session.pong

mod hand;
mod recorder;
mod session;
mod settings;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use game_core::{Side, Table};
use std::path::PathBuf;
use tracing::{info, Level};

use hand::Hand;
use recorder::Recorder;
use session::{Limits, Session};
use settings::{default_settings_string, load_settings, validate};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the Pong table headless", long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible game; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Stop after this many finished rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Write every frame to this file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Pace ticks to the refresh rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Park the mouse at this screen y instead of following the ball
    #[arg(long)]
    mouse_y: Option<f32>,

    /// Screen pixels the following hand moves per tick
    #[arg(long)]
    hand_speed: Option<f32>,

    /// Side the mouse-driven paddle guards
    #[arg(long, value_enum)]
    player: Option<SideArg>,

    #[arg(long)]
    refresh_rate: Option<u32>,

    /// Print a settings file with every default and exit
    #[arg(long)]
    print_config: bool,

    /// More output per occurrence (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", default_settings_string());
        return Ok(());
    }

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let settings = load_settings(cli.config.as_deref())?;
    let mut config = settings.table;
    if let Some(side) = cli.player {
        config.player_side = side.into();
    }
    if let Some(rate) = cli.refresh_rate {
        config.refresh_rate = rate;
    }
    validate(&config)?;

    let seed = cli.seed.or(settings.host.seed);
    let rounds = cli.rounds.or(settings.host.rounds).unwrap_or(1);
    if rounds == 0 && cli.ticks.is_none() {
        bail!("--rounds 0 needs --ticks to stop");
    }
    let realtime = cli.realtime || settings.host.realtime.unwrap_or(false);

    let table = match seed {
        Some(seed) => Table::with_seed(config, seed),
        None => Table::new(config),
    };
    let hand = match cli.mouse_y {
        Some(mouse_y) => Hand::still(mouse_y),
        None => Hand::follow(&table, cli.hand_speed.or(settings.host.hand_speed).unwrap_or(4.0)),
    };
    let recorder = cli.record.as_deref().map(Recorder::create).transpose()?;
    let limits = Limits {
        ticks: cli.ticks,
        rounds: if rounds == 0 { u32::MAX } else { rounds },
    };

    info!(?seed, ?limits, realtime, "starting session");
    let mut session = Session::new(table, hand, recorder, limits, seed)?;
    let summary = session.run(realtime)?;
    session.finish()?;

    info!(
        ticks = summary.ticks,
        rounds = summary.winners.len(),
        points = summary.points,
        paddle_hits = summary.paddle_hits,
        wall_hits = summary.wall_hits,
        "session over"
    );
    for (round, winner) in summary.winners.iter().enumerate() {
        info!(round = round + 1, ?winner, "winner");
    }
    Ok(())
}
