//! Play the game in a terminal.
//!
//! The number is printed, wiped after its show time, and then a prompt
//! waits for the answer. Type `:reset` to start over or `:quit` to stop.
//!
//! Run with: cargo run --bin recall -- --seed 7

use clap::Parser;
use recall::config::{ConfigError, GameConfig};
use recall::core::RoundPhase;
use recall::render::{Notice, Renderer, View};
use recall::timer::{SystemClock, TimerQueue};
use recall::{BuildError, GameBuilder};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Parser)]
#[command(name = "recall")]
#[command(about = "Memorize the number, then type it back")]
struct Cli {
    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible digit sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Show each number for 3 seconds instead of 2.5 at six digits
    #[arg(long)]
    relaxed: bool,

    /// Stop adding digits at this length
    #[arg(long, value_name = "DIGITS")]
    cap: Option<usize>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Writes the game to a terminal. The first write error is kept and
/// reported by the game loop, since `Renderer` methods cannot return errors.
struct TerminalRenderer<W: Write> {
    out: W,
    length: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            length: 0,
            error: None,
        }
    }

    fn draw(&mut self, view: &View) -> io::Result<()> {
        match view.phase {
            RoundPhase::Showing => {
                write!(self.out, "{CLEAR_SCREEN}")?;
                writeln!(self.out, "score {}   digits {}\n", view.score, view.length)?;
                if let Some(digits) = &view.digits {
                    writeln!(self.out, "    {digits}")?;
                }
            }
            RoundPhase::Paused => {
                write!(self.out, "{CLEAR_SCREEN}")?;
                writeln!(self.out, "score {}   digits {}\n", view.score, view.length)?;
            }
            RoundPhase::AwaitingAnswer => self.prompt()?,
            RoundPhase::ShowingResult => {
                if let Some(result) = &view.result {
                    if result.correct {
                        writeln!(self.out, "✓ Correct!")?;
                    } else {
                        writeln!(self.out, "✗ Wrong!")?;
                        if let (Some(expected), Some(submitted)) =
                            (&result.expected, &result.submitted)
                        {
                            writeln!(self.out, "  Correct answer: {expected}")?;
                            writeln!(self.out, "  Your answer:    {submitted}")?;
                        }
                    }
                }
            }
        }
        self.out.flush()
    }

    fn announce(&mut self, notice: &Notice) -> io::Result<()> {
        writeln!(self.out, "  ** {} **", notice.message())?;
        // the round is still waiting, so ask again below the message
        if let Notice::AnswerRejected { .. } = notice {
            self.prompt()?;
        }
        self.out.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.out, "Enter the {}-digit number:", self.length)
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &View) {
        self.length = view.length;
        let result = self.draw(view);
        self.keep(result);
    }

    fn notify(&mut self, notice: &Notice) {
        let result = self.announce(notice);
        self.keep(result);
    }

    fn clear(&mut self) {
        let result = write!(self.out, "{CLEAR_SCREEN}").and_then(|()| self.out.flush());
        self.keep(result);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.relaxed {
        config.timing.base_show_ms = 3_000;
    }
    if let Some(cap) = cli.cap {
        config.difficulty.max_length = Some(cap);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    info!(?config, "starting");

    let mut builder = GameBuilder::new()
        .config(config)
        .scheduler(TimerQueue::new(SystemClock))
        .renderer(TerminalRenderer::new(io::stdout()));
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut game = builder.start()?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        game.poll();
        if let Some(err) = game.renderer_mut().error.take() {
            return Err(err.into());
        }
        match game.phase() {
            Some(RoundPhase::AwaitingAnswer) => {
                line.clear();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                match line.trim() {
                    ":quit" | ":q" => break,
                    ":reset" => game.reset(),
                    answer => {
                        if let Err(err) = game.submit(answer) {
                            debug!(%err, "submission not scored");
                        }
                    }
                }
            }
            Some(_) => {
                let wait = game
                    .view()
                    .and_then(|view| view.remaining)
                    .unwrap_or(Duration::from_millis(10));
                std::thread::sleep(wait);
            }
            None => break,
        }
    }

    let stats = *game.stats();
    let score = game.score();
    game.teardown();

    println!("final score {score}");
    println!(
        "rounds {}   correct {}   longest streak {}   longest number {} digits",
        stats.rounds_scored, stats.correct, stats.longest_streak, stats.longest_length
    );
    if let Some(accuracy) = stats.accuracy() {
        println!("accuracy {:.0}%", accuracy * 100.0);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("recall: {err}");
            ExitCode::FAILURE
        }
    }
}
