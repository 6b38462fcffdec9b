#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that lets players travel the Land of Midnight.

mod config;
mod keymap;
mod session;
mod terminal;
mod world_file;

use std::{
    io::{self, BufRead, Cursor, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use midnight_rendering::{Presentation, RenderingBackend};
use midnight_system_geometry::{Perspective, VanishingGrid};
use midnight_world::{Scenario, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, session::Session, terminal::TerminalBackend};

/// Travel the Land of Midnight from the terminal
#[derive(Parser)]
#[command(name = "lords-of-midnight")]
#[command(about = "Explore the Land of Midnight one square at a time", long_about = None)]
#[command(version)]
struct Cli {
    /// World map as a JSON array of rows of squares
    #[arg(long, default_value = "data/world.json")]
    world: PathBuf,

    /// Optional TOML file overriding the clock and movement rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Travel without spending time or energy
    #[arg(long)]
    cheat: bool,

    /// Keys to replay instead of reading from stdin
    #[arg(long)]
    commands: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,

    /// Print the panorama anchors derived from the vanishing points
    Anchors {
        /// Which family of layouts to derive
        #[arg(value_enum, default_value_t = PerspectiveArg::Cardinal)]
        perspective: PerspectiveArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PerspectiveArg {
    Cardinal,
    Intercardinal,
}

impl From<PerspectiveArg> for Perspective {
    fn from(value: PerspectiveArg) -> Self {
        match value {
            PerspectiveArg::Cardinal => Perspective::Cardinal,
            PerspectiveArg::Intercardinal => Perspective::Intercardinal,
        }
    }
}

/// Entry point for the Lords of Midnight command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Some(Command::Anchors { perspective }) => {
            print_anchors((*perspective).into(), &mut io::stdout().lock())
        }
        Some(Command::Play) | None => play(&cli),
    }
}

fn play(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let policy = config.policy(cli.cheat)?;
    let grid = world_file::load(&cli.world, policy.world_border_terrain())?;

    let mut scenario = Scenario::default();
    if let Some(start) = config.start(&grid)? {
        scenario = scenario.with_start(start);
    }
    let world = World::new(grid, scenario, policy).context("invalid scenario")?;
    info!(
        rows = midnight_world::query::grid(&world).rows(),
        cols = midnight_world::query::grid(&world).cols(),
        cheat = policy.cheat_mode(),
        "session started"
    );

    let mut session = Session::new(world);
    let presentation = Presentation::new("The Lords of Midnight", session.scene(None));

    let stdout = io::stdout();
    match &cli.commands {
        Some(keys) => run_backend(
            Cursor::new(keys.clone()),
            stdout.lock(),
            presentation,
            &mut session,
        ),
        None => run_backend(io::stdin().lock(), stdout.lock(), presentation, &mut session),
    }
}

fn run_backend<R, W>(
    input: R,
    output: W,
    presentation: Presentation,
    session: &mut Session,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    TerminalBackend::new(input, output).run(presentation, |frame, scene| {
        session.handle(frame, scene)
    })
}

fn print_anchors(perspective: Perspective, out: &mut impl Write) -> Result<()> {
    let rows = VanishingGrid::PANORAMA.anchor_rows(perspective.anchor_specs());
    for (index, row) in rows.iter().enumerate() {
        let points = row
            .iter()
            .map(|point| format!("({}, {})", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "row {index}: {points}").context("failed to write anchors")?;
    }
    Ok(())
}
