//! Plays a whole match without prompting.
//!
//! Human seats take their moves, in order, from `--moves`. Without
//! `--moves` both seats are automated.
//!
//! ```text
//! rps --rules rpsls --rounds 3 --name Ada --moves rock,spock,lizard --seed 7
//! rps --config match.json
//! RUST_LOG=debug rps --rounds 10
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use rps_engine::core::DEFAULT_ROUND_LIMIT;
use rps_engine::{Match, MatchConfig, PlayerConfig, Role, Ruleset, Seat};

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Play a scripted Rock-Paper-Scissors match")]
struct Args {
    /// Ruleset: rps or rpsls
    #[arg(long, default_value = "rps")]
    rules: Ruleset,

    /// Number of rounds to play
    #[arg(long, default_value_t = DEFAULT_ROUND_LIMIT, allow_negative_numbers = true)]
    rounds: i64,

    /// Name of the first seat
    #[arg(long, default_value = "Player")]
    name: String,

    /// Seed for automated choices
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated moves for human seats, consumed in order
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,

    /// JSON match configuration; replaces --rules, --rounds and --name
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let first = if args.moves.is_empty() {
                PlayerConfig::automated(args.name.clone())
            } else {
                PlayerConfig::human(args.name.clone())
            };
            MatchConfig::new()
                .with_ruleset(args.rules)
                .with_round_limit(args.rounds)
                .with_players(first, PlayerConfig::automated("Computer"))
        }
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

/// Play `game` to the end, feeding human seats from `moves`.
fn play<'a>(
    game: &mut Match,
    moves: impl IntoIterator<Item = &'a String>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut moves = moves.into_iter();

    let title = format!("Welcome to {}", game.catalog().name());
    writeln!(out, "{}\n{}", title, "-".repeat(title.len()))?;

    while !game.is_finished() {
        for seat in Seat::ALL {
            if game.participant(seat).role() != Role::Human {
                continue;
            }
            let Some(name) = moves.next() else {
                bail!(
                    "ran out of moves for {} in round {}",
                    game.participant(seat).name(),
                    game.current_round() + 1
                );
            };
            game.choose(seat, name)?;
        }
        game.draw_automated()?;
        game.resolve_round()?;

        writeln!(out, "\n{}\n\n{}", game.report_round(), game.report_score())?;
        game.advance_round();
    }

    writeln!(out, "\nFinal Results\n-------------")?;
    writeln!(out, "{}\n\n{}", game.report_score(), game.report_winner())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut game = Match::from_config(&config).context("invalid match configuration")?;
    play(&mut game, &args.moves, &mut std::io::stdout().lock())
}
