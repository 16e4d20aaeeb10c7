//! Binary entrypoint for the 5/36 combination generator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lotto_cli::{LottoConfig, Session, SessionState};
use lotto_core::{Candidate, LOTTO_VERSION};
use lotto_draw::RngSource;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lotto", version = LOTTO_VERSION)]
#[command(about = "Generate 5/36 combinations that avoid clustered or evenly spaced numbers")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file holding history and attempt totals between runs
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more combinations
    Generate {
        /// How many combinations to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Fixed seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Check five numbers against the rules
    Check {
        /// The numbers, in any order
        #[arg(num_args = 5, required = true)]
        numbers: Vec<u8>,
    },
    /// Show the recent history
    History {
        /// Drop all records (the generation count is kept)
        #[arg(long)]
        clear: bool,
        /// Print number frequencies
        #[arg(long)]
        stats: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = LottoConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let state = match &cli.state {
        Some(path) => SessionState::load(path).context("loading state")?,
        None => None,
    };

    match cli.command {
        Commands::Generate { count, seed, json } => {
            let source = match seed {
                Some(seed) => RngSource::seeded(seed),
                None => RngSource::from_entropy(),
            };
            let mut session = Session::restore(&config, source, state)?;

            for _ in 0..count {
                let generation = session.generate();
                if json {
                    println!("{}", serde_json::to_string(&generation)?);
                } else {
                    println!("{}", generation);
                }
            }

            if !json {
                println!(
                    "Total attempts: {}  Total generations: {}",
                    session.total_attempts(),
                    session.generation_count()
                );
            }
            save_state(cli.state.as_deref(), &session)?;
        }
        Commands::Check { numbers } => {
            let candidate = Candidate::from_slice(&numbers)?;
            let session = Session::restore(&config, RngSource::from_entropy(), state)?;
            let evaluation = session.check(&candidate);

            println!("{}", evaluation);
            for violation in &evaluation.violations {
                println!("  - {}", violation);
            }
        }
        Commands::History { clear, stats } => {
            let mut session = Session::restore(&config, RngSource::from_entropy(), state)?;

            if clear {
                session.history_mut().clear();
                save_state(cli.state.as_deref(), &session)?;
            }

            let history = session.history();
            if history.is_empty() {
                println!("No history yet. Generate some numbers!");
            }
            for record in history.entries() {
                let marker = if record.best_effort { " (best effort)" } else { "" };
                println!("{}  {}{}", record.candidate, record.date_label(), marker);
            }
            println!("Total generations: {}", session.generation_count());

            if stats {
                let stats = history.stats();
                if let Some(n) = stats.most_frequent {
                    println!("Most frequent: {}", n);
                }
                for (n, count) in &stats.frequencies {
                    println!("  {:02}: {}", n, count);
                }
            }
        }
    }

    Ok(())
}

fn save_state<S: lotto_draw::RandomSource>(path: Option<&Path>, session: &Session<S>) -> Result<()> {
    if let Some(path) = path {
        session
            .state()
            .save(path)
            .with_context(|| format!("saving state to {}", path.display()))?;
    }
    Ok(())
}
