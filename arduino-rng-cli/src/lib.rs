use anyhow::{Context, Result};
use arduino_rng_core::Generator;
use arduino_rng_life::{BoardSnapshot, Boundary, LedBoard};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replays the Arduino random() sequence on the host", long_about = None)]
pub struct Cli {
    /// Value passed to randomSeed() before drawing (non-positive values are ignored)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Reject empty ranges and seeds the board would ignore
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print raw generator outputs
    Sequence {
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// Print random(A) draws, or random(A, B) when B is given
    Random {
        #[arg(allow_negative_numbers = true)]
        a: i32,

        #[arg(allow_negative_numbers = true)]
        b: Option<i32>,

        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// Print the LED board the game-of-life firmware starts from
    Life {
        /// Generations to evolve after randomization
        #[arg(short, long, default_value_t = 0)]
        generations: u32,

        /// Wrap neighbours around the edges instead of treating them as dead
        #[arg(long)]
        periodic: bool,

        /// Emit a JSON snapshot instead of the text grid
        #[arg(long)]
        json: bool,
    },
}

/// Builds the generator the firmware would have after `randomSeed(seed)`.
pub fn seeded_generator(seed: Option<i64>, strict: bool) -> Result<Generator> {
    let mut rng = Generator::new();
    if let Some(seed) = seed {
        if strict {
            rng.try_seed(seed).context("Invalid seed")?;
        } else {
            if seed <= 0 {
                log::warn!("randomSeed({}) has no effect, keeping the reset state", seed);
            }
            rng.seed(seed);
        }
    }
    log::debug!("Starting from state {}", rng.state());
    Ok(rng)
}

/// Runs the command and returns what should be printed.
pub fn execute(cli: &Cli) -> Result<String> {
    let mut rng = seeded_generator(cli.seed, cli.strict)?;

    let lines: Vec<String> = match &cli.command {
        Command::Sequence { count } => (0..*count).map(|_| rng.advance().to_string()).collect(),
        Command::Random { a, b, count } => draw(&mut rng, *a, *b, *count, cli.strict)?,
        Command::Life {
            generations,
            periodic,
            json,
        } => {
            let boundary = if *periodic {
                Boundary::Periodic
            } else {
                Boundary::Open
            };
            let (mut board, symmetry) = LedBoard::random(&mut rng);
            log::info!(
                "Initial board has {} live cells ({:?})",
                board.count_alive(),
                symmetry
            );

            for generation in 0..*generations {
                board = board.step(boundary);
                if board.is_empty() {
                    log::info!("Board died out after {} generations", generation + 1);
                    break;
                }
            }

            if *json {
                let snapshot = BoardSnapshot::capture(&board, cli.seed, symmetry, *generations);
                vec![snapshot
                    .to_json_pretty()
                    .context("Failed to serialize board snapshot")?]
            } else {
                vec![board.to_string()]
            }
        }
    };

    Ok(lines.join("\n"))
}

fn draw(
    rng: &mut Generator,
    a: i32,
    b: Option<i32>,
    count: usize,
    strict: bool,
) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let value = if strict {
            rng.try_random(a, b)
                .with_context(|| format!("Cannot draw from random({}, {:?})", a, b))?
        } else {
            rng.random(a, b)
        };
        values.push(value.to_string());
    }
    Ok(values)
}
