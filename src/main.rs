use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mpmat::{fixture, io, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Path-graph adjacency matrix fixture generator")]
struct Cli {
    /// Config file (defaults to ./mpmat.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the fixture file (default)
    Generate {
        /// Matrix side length
        #[arg(short, long)]
        size: Option<usize>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a fixture, or the row block one rank would read
    Show {
        /// Fixture file (defaults to the configured output)
        path: Option<PathBuf>,

        /// Rank whose rows to print
        #[arg(long, requires = "ranks")]
        rank: Option<usize>,

        /// Number of ranks the rows are split over
        #[arg(long, requires = "rank")]
        ranks: Option<usize>,
    },
    /// Check a fixture against the fill rule
    Verify {
        /// Fixture file (defaults to the configured output)
        path: Option<PathBuf>,

        /// Required side length; inferred from the file length when omitted
        #[arg(short, long)]
        size: Option<usize>,
    },
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    run(cli, settings, &mut std::io::stdout().lock())
}

/// Execute one command against already-loaded settings. Matrix text from
/// `show` goes to `out`.
fn run<W: Write>(cli: Cli, settings: Settings, out: &mut W) -> Result<()> {
    match cli.command.unwrap_or(Command::Generate { size: None, output: None }) {
        Command::Generate { size, output } => {
            let settings = settings.with_overrides(size, output);
            mpmat::generate(settings.size, &settings.output)
                .with_context(|| format!("failed to write {}", settings.output.display()))?;
        }
        Command::Show { path, rank, ranks } => {
            let path = path.unwrap_or(settings.output);
            match (rank, ranks) {
                (Some(rank), Some(ranks)) => {
                    let bytes = std::fs::metadata(&path)
                        .with_context(|| format!("failed to stat {}", path.display()))?
                        .len();
                    let n = io::reader::infer_size(bytes)?;
                    let block = io::read_row_block(&path, n, rank, ranks)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    info!(
                        rank,
                        ranks,
                        first = block.first_row,
                        rows = block.row_count(),
                        "row block"
                    );
                    write!(out, "{block}")?;
                }
                _ => {
                    let matrix = io::read_matrix(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    write!(out, "{matrix}")?;
                }
            }
        }
        Command::Verify { path, size } => {
            let path = path.unwrap_or(settings.output);
            let matrix = match size {
                Some(n) => io::read_matrix_sized(&path, n),
                None => io::read_matrix(&path),
            }
            .with_context(|| format!("failed to read {}", path.display()))?;

            fixture::verify(&matrix)
                .with_context(|| format!("{} is not a valid fixture", path.display()))?;
            info!(path = %path.display(), size = matrix.size(), "fixture ok");
        }
    }

    Ok(())
}
