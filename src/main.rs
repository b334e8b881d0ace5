//! dominoes CLI: play random games and enumerate every ending of a position.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dominoes::search::{
    enumerate_parallel, play_moves, play_out, simulate, summarize_parallel, EnumerationConfig,
    EnumerationStats, FirstLegal, MovePolicy, UniformRandom,
};
use dominoes::{Action, Game, GameConfig, GameRng, PlayerId, StartingPlayer};

#[derive(Parser)]
#[command(name = "dominoes")]
#[command(about = "Play and enumerate games of dominoes")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Args, Clone, Debug)]
struct TableArgs {
    /// Number of players
    #[arg(long, default_value = "2")]
    players: usize,

    /// Tiles dealt to each player
    #[arg(long, default_value = "7")]
    hand_size: usize,

    /// Highest pip value in the set
    #[arg(long, default_value = "6")]
    max_pip: u8,

    /// Give the first turn to the holder of the highest double
    #[arg(long)]
    highest_double_opens: bool,

    /// Seed for the deal and random moves
    #[arg(long, default_value = "42")]
    seed: u64,
}

impl TableArgs {
    fn config(&self) -> GameConfig {
        let starting_player = if self.highest_double_opens {
            StartingPlayer::HighestDouble
        } else {
            StartingPlayer::default()
        };
        GameConfig::default()
            .with_players(self.players)
            .with_hand_size(self.hand_size)
            .with_max_pip(self.max_pip)
            .with_starting_player(starting_player)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Play one game and print every turn
    Play {
        #[command(flatten)]
        table: TableArgs,

        /// How moves are chosen
        #[arg(long, default_value = "random")]
        policy: PolicyKind,
    },
    /// Play many independent games and report totals
    Simulate {
        #[command(flatten)]
        table: TableArgs,

        /// Number of games
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// How moves are chosen
        #[arg(long, default_value = "random")]
        policy: PolicyKind,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a random prefix, then enumerate every way the game can end
    Enumerate {
        #[command(flatten)]
        table: TableArgs,

        /// Random moves played before enumerating
        #[arg(long, default_value = "8")]
        fixed_moves: usize,

        /// Worker threads (default: one per core)
        #[arg(long)]
        workers: Option<usize>,

        /// Keep every terminal game in memory instead of only counting
        #[arg(long)]
        collect: bool,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    First,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.cmd {
        Cmd::Play { table, policy } => match policy {
            PolicyKind::Random => play(&table, &UniformRandom),
            PolicyKind::First => play(&table, &FirstLegal),
        },
        Cmd::Simulate {
            table,
            games,
            policy,
            json,
        } => {
            let root = Game::new(table.config(), table.seed)?;
            let mut rng = GameRng::new(table.seed);
            let stats = match policy {
                PolicyKind::Random => simulate(&root, games, &UniformRandom, &mut rng)?,
                PolicyKind::First => simulate(&root, games, &FirstLegal, &mut rng)?,
            };
            report(&stats, root.config().player_count, json)
        }
        Cmd::Enumerate {
            table,
            fixed_moves,
            workers,
            collect,
            json,
        } => {
            let mut config = EnumerationConfig::default()
                .with_fixed_moves(fixed_moves)
                .with_seed(table.seed);
            if let Some(workers) = workers {
                config = config.with_workers(workers);
            }
            enumerate(&table, &config, collect, json)
        }
    }
}

fn play<P: MovePolicy<Game>>(table: &TableArgs, policy: &P) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(table.config(), table.seed)?;
    let mut rng = GameRng::new(table.seed);
    println!("{game}\n");

    let result = play_out(&mut game, policy, &mut rng)?;
    for record in game.history() {
        match record.action {
            Action::Play(mv) => println!("{}: plays {mv}", record.player),
            Action::Draw(tile) => println!("{}: draws {tile}", record.player),
            Action::Pass => println!("{}: passes", record.player),
        }
    }

    println!("\n{game}");
    match result {
        Some(result) => println!("result: {result}"),
        None => println!("result: none"),
    }
    Ok(())
}

fn enumerate(
    table: &TableArgs,
    config: &EnumerationConfig,
    collect: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(table.config(), config.seed)?;
    let mut rng = GameRng::new(config.seed);
    play_moves(&mut game, config.fixed_moves, &UniformRandom, &mut rng)?;
    info!(fixed_moves = config.fixed_moves, board = %game.board(), "random prefix played");
    if !json {
        println!("{game}\n");
    }

    let player_count = game.config().player_count;
    let stats = if collect {
        let completed = enumerate_parallel(game, config)?;
        let mut stats = EnumerationStats::new();
        for game in &completed {
            if let Some(result) = game.result() {
                stats.record_terminal(result, game.board().len());
            }
        }
        stats
    } else {
        summarize_parallel(game, config)?
    };
    report(&stats, player_count, json)
}

fn report(
    stats: &EnumerationStats,
    player_count: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("terminal games: {}", stats.terminal_games);
    for player in PlayerId::all(player_count) {
        println!("  {player} wins: {}", stats.wins_for(player));
    }
    println!("  blocked: {}", stats.blocked);
    println!("states expanded: {}", stats.nodes_expanded);
    println!("final board lengths:");
    for (len, count) in stats.sorted_lengths() {
        println!("  {len:>3}: {count}");
    }
    if stats.time_us > 0 {
        println!(
            "time: {:.3}s ({:.0} games/s)",
            stats.time_us as f64 / 1_000_000.0,
            stats.games_per_second()
        );
    }
    Ok(())
}
