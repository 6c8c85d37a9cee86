//! Terminal minigames runner.
//!
//! Parses the command line, sets up file logging, then drives the app with
//! crossterm input and the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_minigames::app::App;
use tui_minigames::core::{BlocksConfig, GameRng, MatchConfig};
use tui_minigames::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_minigames::types::{Difficulty, MemoryPolicy, TICK_MS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the first game (later games count up from it)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long, env = "MINIGAMES_LOG_PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play falling blocks
    Blocks,
    /// Play pairs against the computer
    Pairs {
        /// easy, normal or hard
        #[arg(short, long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,

        /// Whose mismatches the computer remembers: both or human-only
        #[arg(short, long, value_parser = parse_memory)]
        memory: Option<MemoryPolicy>,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

fn parse_memory(s: &str) -> Result<MemoryPolicy, String> {
    MemoryPolicy::from_str(s).ok_or_else(|| format!("unknown memory policy '{s}'"))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut match_config = MatchConfig::from_env()?;
    let blocks_config = BlocksConfig::from_env()?;
    if let Some(Command::Pairs { difficulty, memory }) = &args.command {
        if let Some(d) = difficulty {
            match_config = match_config.with_difficulty(*d);
        }
        if let Some(m) = memory {
            match_config = match_config.with_memory_policy(*m);
        }
    }

    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    info!(seed, ?match_config, ?blocks_config, "starting");

    let mut app = App::new(seed, match_config, blocks_config);
    match args.command {
        Some(Command::Blocks) => app.open_blocks(),
        Some(Command::Pairs { .. }) => app.open_pairs(),
        None => {}
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);

    while !app.should_quit() {
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.revision()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render_into(Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.on_tick(elapsed.as_millis() as u32);
        }
    }

    info!("quit");
    Ok(())
}
