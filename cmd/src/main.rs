use clap::Parser;
use clap::Subcommand;
use log::{info, warn, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};

use strata_skip_list::builder::SkipListBuilder;
use strata_skip_list::StrataSkipListError;
use strata_traits::default::{
    WithMaxLevel, WithSeed, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY,
};
use strata_traits::skip_list::SkipListTrait;

#[derive(Parser)]
#[command(name = "stratacli")]
#[command(version = "0.1.0")]
#[command(about = "A simple CLI for the strata skip list")]
struct Cli {
    /// Log more, repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}
#[derive(Subcommand)]
enum Commands {
    /// Build a list, then run rounds of search, insert and delete
    Demo {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 4)]
        max_level: usize,
        #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
        probability: f64,
        #[arg(short, long, default_value_t = 5)]
        rounds: usize,
        /// Strictly ascending keys to start from
        #[arg(short, long, value_delimiter = ',', default_values_t = [1, 3, 4, 5, 6, 7, 8, 10])]
        keys: Vec<i64>,
    },
    /// Print the levels of a list built from the given keys
    Dump {
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, default_value_t = DEFAULT_MAX_LEVEL)]
        max_level: usize,
        #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
        probability: f64,
        #[arg(value_delimiter = ',')]
        keys: Vec<i64>,
    },
}
fn main() {
    let cli = Cli::parse();
    let mut logger = env_logger::builder();
    match cli.verbose {
        0 => {}
        1 => {
            logger.filter_level(LevelFilter::Debug);
        }
        _ => {
            logger.filter_level(LevelFilter::Trace);
        }
    }
    logger.init();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Demo {
                seed,
                max_level,
                probability,
                rounds,
                keys,
            } => handle_demo(seed, max_level, probability, rounds, keys),
            Commands::Dump {
                seed,
                max_level,
                probability,
                keys,
            } => handle_dump(seed, max_level, probability, keys),
        };
        if let Err(e) = result {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
fn builder(seed: Option<u64>, max_level: usize, probability: f64) -> SkipListBuilder {
    let mut builder = SkipListBuilder::default();
    builder.set_max_level(max_level).set_probability(probability);
    if let Some(seed) = seed {
        builder.set_seed(seed);
    }
    builder
}
fn handle_dump(
    seed: Option<u64>,
    max_level: usize,
    probability: f64,
    mut keys: Vec<i64>,
) -> Result<(), StrataSkipListError> {
    keys.sort_unstable();
    keys.dedup();
    let list = builder(seed, max_level, probability).build_from_sorted(keys)?;
    print!("{}", list);
    Ok(())
}
fn handle_demo(
    seed: u64,
    max_level: usize,
    probability: f64,
    rounds: usize,
    keys: Vec<i64>,
) -> Result<(), StrataSkipListError> {
    let mut list =
        builder(Some(seed), max_level, probability).build_from_sorted(keys)?;
    println!("=== Initial skip list ===");
    print!("{}", list);

    let mut rng = StdRng::seed_from_u64(seed);
    for round in 0..rounds {
        let key = rng.gen_range(0..20);
        run_round(&mut list, key, 2 * round as i64);
    }

    println!("=== Final skip list ===");
    print!("{}", list);
    Ok(())
}
fn run_round<T: SkipListTrait<i64>>(list: &mut T, key: i64, delete: i64) {
    match list.search(&key) {
        Ok(found) => info!("Found: {}", found),
        Err(_) => info!("Not found: {}", key),
    }
    match list.insert(key) {
        Ok(()) => info!("Inserted {}", key),
        Err(e) => info!("Insert {} skipped: {}", key, e),
    }
    if list.search(&key).is_err() {
        warn!("Not found after insertion: {}", key);
    }
    match list.delete(&delete) {
        Ok(deleted) => info!("Deleted: {}", deleted),
        Err(_) => info!("Not found for deletion: {}", delete),
    }
    info!("len {} height {}", list.len(), list.height());
}

#[test]
fn test_demo_round() {
    let mut list = builder(Some(1), 4, 0.5)
        .build_from_sorted([1i64, 3, 5])
        .unwrap();
    run_round(&mut list, 2, 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 5]);
    run_round(&mut list, 2, 0);
    assert_eq!(list.len(), 3);
}
#[test]
fn test_cli_parses() {
    let cli = Cli::parse_from(["stratacli", "-vv", "demo", "--keys", "1,2,3", "--rounds", "2"]);
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Some(Commands::Demo { keys, rounds, seed, .. }) => {
            assert_eq!(keys, [1, 2, 3]);
            assert_eq!(rounds, 2);
            assert_eq!(seed, 42);
        }
        _ => panic!("expected demo"),
    }
}
