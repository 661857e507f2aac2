use autouno::{
    options::GameOptions,
    shuffle::{IdentityShuffler, ReverseShuffler, SeededShuffler, Shuffle},
    turn::TurnActionResult,
    uno::Uno,
};
use clap::Parser;
use color_eyre::Result;
use strum_macros::{Display, EnumString};
use tracing::{info, warn, Level};

#[derive(Clone, Copy, Debug, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum ShuffleKind {
    Seeded,
    Identity,
    Reverse,
}

#[derive(Debug, Parser)]
#[command(name = "autouno-sim", about = "Play one fully automated game of UNO")]
struct Args {
    /// Number of players, clamped to 2..=4
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Seed used for every shuffle
    #[arg(short, long, default_value_t = autouno::constants::DEFAULT_SEED)]
    seed: u64,

    /// Give up after this many turns
    #[arg(long, default_value_t = 500)]
    max_turns: usize,

    /// How the deck is shuffled: seeded, identity or reverse
    #[arg(long, default_value_t = ShuffleKind::Seeded)]
    shuffle: ShuffleKind,

    /// Log every play (-v) or every draw and reshuffle as well (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let options = GameOptions::default().with_seed(args.seed);
    match args.shuffle {
        ShuffleKind::Seeded => play(
            Uno::with_options(args.players, options, SeededShuffler),
            args.max_turns,
        ),
        ShuffleKind::Identity => play(
            Uno::with_options(args.players, options, IdentityShuffler),
            args.max_turns,
        ),
        ShuffleKind::Reverse => play(
            Uno::with_options(args.players, options, ReverseShuffler),
            args.max_turns,
        ),
    }
}

fn play<S: Shuffle>(mut uno: Uno<S>, max_turns: usize) -> Result<()> {
    uno.initialize();
    info!(state = %uno.get_state(), "dealt");

    for turn in 1..=max_turns {
        let result = uno.play_turn()?;

        match result.turn_action_result {
            TurnActionResult::Played { card, .. } | TurnActionResult::SelfDrawPlayed { card, .. } => {
                info!(turn, player = result.player, %card, state = %uno.get_state(), "played")
            }
            TurnActionResult::SelfDraw { .. } => {
                info!(turn, player = result.player, state = %uno.get_state(), "drew")
            }
        }
        if result.exhausted_draws > 0 {
            warn!(turn, draws = result.exhausted_draws, "deck exhausted");
        }

        if let Some(winner) = uno.get_winner() {
            info!(turn, winner, "game over");
            return Ok(());
        }
    }

    warn!(max_turns, state = %uno.get_state(), "no winner");
    Ok(())
}
