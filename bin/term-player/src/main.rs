#[macro_use]
extern crate tracing;

mod input;
mod surface;
mod term;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use input::Command;
use surface::TermSurface;
use term::TermGuard;
use tetro_play::{Config, Game};

/// Falling-block puzzle in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the shape randomizer.
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds between automatic down moves.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Write logs to this file.
    #[arg(long)]
    log: Option<PathBuf>,
    #[arg(long, default_value = "tetro_play=debug,tetro_term_player=info")]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_logging(path, &args.log_filter)?;
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(ms) = args.tick_ms {
        config.tick_millis = ms;
    }
    config.validate().context("invalid settings")?;
    debug!(?config, "starting");

    let game = run(&config)?;
    println!(
        "pieces: {}, rows: {}",
        game.pieces_locked(),
        game.rows_cleared()
    );
    Ok(())
}

fn init_logging(path: &Path, filter: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

/// Plays on the alternate screen until the player quits. The terminal is restored when
/// the guard drops. Returns the last session.
fn run(config: &Config) -> Result<Game> {
    let mut term = TermGuard::enter(io::stdout())?;
    play(term.out(), config)
}

fn play(w: &mut impl Write, config: &Config) -> Result<Game> {
    let (width, height) = (config.width, config.height);
    let mut surface = TermSurface::new(w, config.cell_size, (1, 1));
    let mut game = Game::from_config(config)?;
    redraw(&mut surface, &mut game, width, height)?;

    let tick = config.tick();
    let mut next_tick = Instant::now() + tick;
    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(ev) => match input::command(&ev) {
                    Some(Command::Quit) => {
                        info!("quit");
                        break;
                    }
                    Some(Command::Key(key)) if key == "KeyR" && game.is_over() => {
                        info!("restart");
                        game = Game::from_config(config)?;
                        redraw(&mut surface, &mut game, width, height)?;
                        next_tick = Instant::now() + tick;
                    }
                    Some(Command::Key(key)) => {
                        game.handle_key(&key, &mut surface)?;
                        draw_status(&mut surface, &game, height)?;
                    }
                    None => {}
                },
                Event::Resize(..) => {
                    game.invalidate();
                    redraw(&mut surface, &mut game, width, height)?;
                }
                _ => {}
            }
        }

        if Instant::now() >= next_tick {
            game.tick(&mut surface)?;
            draw_status(&mut surface, &game, height)?;
            next_tick += tick;
        }
    }
    Ok(game)
}

fn redraw<W: Write>(
    surface: &mut TermSurface<W>,
    game: &mut Game,
    width: usize,
    height: usize,
) -> io::Result<()> {
    surface.clear_screen()?;
    surface.draw_frame(width, height)?;
    game.render(surface)?;
    draw_status(surface, game, height)
}

fn draw_status<W: Write>(
    surface: &mut TermSurface<W>,
    game: &Game,
    height: usize,
) -> io::Result<()> {
    let stats = format!(
        "pieces {}  rows {}",
        game.pieces_locked(),
        game.rows_cleared()
    );
    surface.print_below(height, 0, &stats)?;
    let help = if game.is_over() {
        "GAME OVER   r: restart   q: quit"
    } else {
        "arrows/hjkl: move   z: turn back   space: drop   q: quit"
    };
    surface.print_below(height, 1, help)?;
    surface.flush()
}
