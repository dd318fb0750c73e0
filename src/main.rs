use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use guess_sim::demo::run_quick_demo;
use guess_sim::report::{print_report_json, SessionReport};
use guess_sim::simulation::run_simulation;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    seed: Option<u64>, // None => seed from OS entropy
    json: bool,
    verbose: bool,
}

fn build_cli() -> Command {
    Command::new("guess_sim")
        .about("Number-guessing simulator (binary search + random guesses)")
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("N")
                .help("Seed the random generator for a reproducible run")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON report line after the simulation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .after_help(
"EXAMPLES:
  guess_sim
  guess_sim --seed 42
  guess_sim -s 7 --json -v"
        )
}

fn config_from_matches(m: &ArgMatches) -> Config {
    Config {
        seed: m.get_one::<u64>("seed").copied(),
        json: m.get_flag("json"),
        verbose: m.get_flag("verbose"),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Simulation, separator, then quick demo.
fn run<W: Write + ?Sized>(cfg: &Config, out: &mut W) -> io::Result<()> {
    let mut rng = build_rng(cfg.seed);

    let start = Instant::now();
    let session = run_simulation(&mut rng, out)?;
    let elapsed = start.elapsed();
    info!(
        won = session.stats.rounds_won,
        played = session.stats.rounds_played,
        total_attempts = session.stats.total_attempts,
        "simulation finished"
    );

    if cfg.json {
        let report = SessionReport::new(&session.stats, cfg.seed, elapsed);
        print_report_json(&report, out)?;
    }

    writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))?;

    let outcome = run_quick_demo(&mut rng, out)?;
    info!(
        secret = outcome.secret,
        won = outcome.won(),
        "quick demo finished"
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let m = build_cli().get_matches();
    let cfg = config_from_matches(&m);

    init_logging(cfg.verbose);
    debug!(?cfg, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cfg, &mut out)?;
    out.flush()?;
    Ok(())
}
