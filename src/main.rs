use anyhow::{anyhow, bail, Context};
use broadside::{
    generate_layout, init_logging, print_own_board, print_tracking_board, AttackRecord, Coord,
    Difficulty, Game, Outcome, Side, Snapshot,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(author, version, about = "Grid battle against a hunting opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DifficultyArg {
    Easy,
    Normal,
    Hard,
    Master,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Difficulty {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Master => Difficulty::Master,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the automated opponent.
    Play {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Restore a saved game from this file")]
        load: Option<PathBuf>,
        #[arg(long, help = "Write the game here when quitting mid-game")]
        save: Option<PathBuf>,
        #[arg(
            long,
            default_value_t = 0,
            help = "Pause between displayed opponent moves, in milliseconds"
        )]
        delay_ms: u64,
    },
    /// Run seeded games with a random external attacker and print totals.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
        difficulty: DifficultyArg,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            load,
            save,
            delay_ms,
        } => play(difficulty.into(), seed, load, save, delay_ms),
        Commands::Sim {
            games,
            difficulty,
            seed,
        } => sim(games, difficulty.into(), seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(
    difficulty: Difficulty,
    seed: Option<u64>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    delay_ms: u64,
) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut stats = [[0u32; 2]; Difficulty::ALL.len()];
    let mut next_load = load;
    loop {
        let mut game = match next_load.take() {
            Some(path) => {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("reading save {}", path.display()))?;
                let snapshot: Snapshot =
                    bincode::deserialize(&bytes).context("decoding save file")?;
                let game = snapshot.restore()?;
                println!(
                    "Loaded a {} game from {} ({}% complete).",
                    game.difficulty(),
                    path.display(),
                    game.progress_percent()
                );
                game
            }
            None => {
                let human_fleet = generate_layout(&mut rng)?;
                let automated_fleet = generate_layout(&mut rng)?;
                println!("Your fleet has been deployed. Difficulty: {}.", difficulty);
                Game::new(difficulty, human_fleet, automated_fleet)?
            }
        };
        match run_game(&mut game, &mut rng, save.as_deref(), delay_ms)? {
            Some(winner) => {
                if let Some(i) = Difficulty::ALL.iter().position(|&d| d == game.difficulty()) {
                    match winner {
                        Side::Human => stats[i][0] += 1,
                        Side::Automated => stats[i][1] += 1,
                    }
                }
                println!(
                    "\nYOU {}!",
                    if winner == Side::Human { "WON" } else { "LOST" }
                );
            }
            None => break, // saved and quit
        }
        let again = prompt("Play again? [y/N] ").unwrap_or_default();
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    print_stats(&stats);
    Ok(())
}

fn run_game(
    game: &mut Game,
    rng: &mut SmallRng,
    save: Option<&Path>,
    delay_ms: u64,
) -> anyhow::Result<Option<Side>> {
    loop {
        print_own_board(game);
        print_tracking_board(game);
        let input = prompt("\nTarget (e.g. B7), or 'save' / 'resign': ")?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("save") || input.eq_ignore_ascii_case("quit") {
            let Some(path) = save else {
                println!("No --save path was given; cannot save.");
                continue;
            };
            let mut snapshot = Snapshot::capture(game);
            snapshot.date = unix_now();
            std::fs::write(path, bincode::serialize(&snapshot)?)
                .with_context(|| format!("writing save {}", path.display()))?;
            println!(
                "Game saved to {} ({}% complete).",
                path.display(),
                game.progress_percent()
            );
            return Ok(None);
        }
        if input.eq_ignore_ascii_case("resign") {
            return Ok(Some(game.resign(Side::Human)));
        }
        let coord: Coord = match input.parse() {
            Ok(coord) => coord,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        if game.board(Side::Automated).was_attacked(coord) {
            println!("{} was already attacked; pick another square.", coord);
            continue;
        }
        let records = game.apply_attack(Side::Automated, coord, rng)?;
        replay_records(&records, delay_ms);
        if let Some(winner) = game.check_win() {
            print_own_board(game);
            print_tracking_board(game);
            return Ok(Some(winner));
        }
    }
}

/// Show the engine's already-resolved attack sequence at a human pace. The
/// pacing is purely presentational; every outcome was computed up front.
fn replay_records(records: &[AttackRecord], delay_ms: u64) {
    for record in records {
        let who = match record.side_attacked {
            Side::Automated => "You fire",
            Side::Human => "The computer fires",
        };
        if record.side_attacked == Side::Human && delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
        match &record.outcome {
            Outcome::Miss => println!("{} at {}: miss.", who, record.coord),
            Outcome::Hit(_) => println!("{} at {}: HIT.", who, record.coord),
            Outcome::Sunk(ship) => {
                println!("{} at {}: SUNK the {}!", who, record.coord, ship.class())
            }
        }
    }
}

fn print_stats(stats: &[[u32; 2]; Difficulty::ALL.len()]) {
    println!("\nSession score:");
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let [wins, losses] = stats[i];
        if wins + losses > 0 {
            println!("  {} mode: {} wins - {} losses", difficulty, wins, losses);
        }
    }
}

fn sim(games: u32, difficulty: Difficulty, seed: u64) -> anyhow::Result<()> {
    let mut human_wins = 0u32;
    let mut automated_wins = 0u32;
    let mut total_attacks = 0u64;
    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(u64::from(i)));
        let human_fleet = generate_layout(&mut rng)?;
        let automated_fleet = generate_layout(&mut rng)?;
        let mut game = Game::new(difficulty, human_fleet, automated_fleet)?;
        let mut turns = 0;
        let winner = loop {
            turns += 1;
            if turns > 500 {
                bail!("game {} did not terminate", i);
            }
            let coord = random_untried(&game, &mut rng)
                .ok_or_else(|| anyhow!("no untried coordinates left in game {}", i))?;
            let records = game.apply_attack(Side::Automated, coord, &mut rng)?;
            total_attacks += records.len() as u64;
            if let Some(winner) = game.check_win() {
                break winner;
            }
        };
        match winner {
            Side::Human => human_wins += 1,
            Side::Automated => automated_wins += 1,
        }
    }
    println!("{} games on {} difficulty:", games, difficulty);
    println!("  random attacker wins: {}", human_wins);
    println!("  opponent wins:        {}", automated_wins);
    if games > 0 {
        println!(
            "  attacks per game:     {:.1}",
            total_attacks as f64 / f64::from(games)
        );
    }
    Ok(())
}

fn random_untried<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Coord> {
    let board = game.board(Side::Automated);
    let untried: Vec<Coord> = Coord::all().filter(|&c| !board.was_attacked(c)).collect();
    if untried.is_empty() {
        None
    } else {
        Some(untried[rng.random_range(0..untried.len())])
    }
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
