//! simsre — command-line front end for the simsre team simulator.
//!
//! Runs one team of SRE agents under a policy config and prints how their
//! time split across operational, project and onboarding work.  With
//! `--compare-cross-team F` it instead runs the same config twice, once with
//! no cross-team work and once with fraction `F`, and prints both mixes side
//! by side.
//!
//! ```text
//! simsre --agents 6 --ticks 5000 --seed 7 --config team.json --output out/
//! simsre --agents 6 --ticks 5000 --seed 7 --compare-cross-team 0.3
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sre_core::{RunConfig, WorkKind};
use sre_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sre_policy::{PolicyConfig, PolicyVariant, WorkPolicy};
use sre_sim::{NoopObserver, Sim, SimBuilder, SweepPoint, WorkMixSummary, run_sweep};
use sre_team::TeamBuilder;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Simulate how an SRE team's time splits between kinds of work
#[derive(Parser, Debug)]
#[command(name = "simsre")]
#[command(about = "Discrete-event simulation of an SRE team's work mix", long_about = None)]
struct Args {
    /// Number of agents in the team
    #[arg(short, long, default_value = "5")]
    agents: usize,

    /// Number of ticks to simulate
    #[arg(short, long, default_value = "1000")]
    ticks: u64,

    /// Master seed (omit to draw one from OS entropy; it is logged)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON policy config; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for agent_activity.csv, tick_summaries.csv and work_mix.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write output.db instead of CSV files (requires the `sqlite` feature)
    #[arg(long)]
    sqlite: bool,

    /// Compare cross-team fraction 0.0 against this value
    #[arg(long)]
    compare_cross_team: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PolicyConfig::default(),
    };

    match args.compare_cross_team {
        Some(fraction) => compare(&args, config, fraction),
        None => single(&args, config),
    }
}

fn load_config(path: &Path) -> Result<PolicyConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Single run ────────────────────────────────────────────────────────────────

fn single(args: &Args, config: PolicyConfig) -> Result<()> {
    let policy = config.policy;
    let mut sim = SimBuilder::new(
        RunConfig::new(args.ticks, args.seed),
        TeamBuilder::new(args.agents).build(),
        config,
        policy,
    )
    .build()?;

    let t0 = Instant::now();
    match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            if args.sqlite {
                run_with_sqlite(&mut sim, dir)?;
            } else {
                run_with_writer(&mut sim, CsvWriter::new(dir)?)?;
            }
            info!(dir = %dir.display(), "output written");
        }
        None => {
            sim.run(&mut NoopObserver);
        }
    }
    let elapsed = t0.elapsed();

    let team = sim.team();
    let config = sim.config();
    println!("=== simsre — {} agents, {} ticks, seed {} ===", team.len(), args.ticks, sim.seed());
    println!("policy: {}", config.policy.name());
    println!(
        "offered operational load: {:.2} ticks of work per tick",
        config.arrivals.mean() * config.operational_size.mean(),
    );
    println!(
        "operational items: {} arrived, {} served, {} relieved",
        team.total_arrived(),
        team.total_served(),
        team.total_relieved(),
    );
    let backlog = team.backlog();
    match backlog.peek() {
        Some(oldest) => println!(
            "backlog at end: {} items, {} ticks of work, oldest waiting {} ticks",
            backlog.len(),
            backlog.pending_ticks(),
            sim.now().since(oldest.arrival),
        ),
        None => println!("backlog at end: empty"),
    }
    println!(
        "onboardings: {} started, {} completed",
        team.onboardings_started(),
        team.onboardings_completed(),
    );
    println!("cross-team overruns: {}", team.cross_team_overruns());
    println!("simulated in {:.3} s", elapsed.as_secs_f64());
    println!();
    print_mix_table(&sim.summary());
    Ok(())
}

fn run_with_writer<W: OutputWriter>(sim: &mut Sim<PolicyVariant>, writer: W) -> Result<()> {
    let mut obs = SimOutputObserver::new(writer);
    sim.run(&mut obs);
    obs.write_work_mix(&sim.summary())?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
fn run_with_sqlite(sim: &mut Sim<PolicyVariant>, dir: &Path) -> Result<()> {
    run_with_writer(sim, sre_output::SqliteWriter::new(dir)?)
}

#[cfg(not(feature = "sqlite"))]
fn run_with_sqlite(_sim: &mut Sim<PolicyVariant>, _dir: &Path) -> Result<()> {
    anyhow::bail!("--sqlite needs simsre built with the `sqlite` feature")
}

// ── Cross-team comparison ─────────────────────────────────────────────────────

fn compare(args: &Args, config: PolicyConfig, fraction: f64) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, fraction, "comparing cross-team fractions");

    let points = [0.0, fraction].map(|cross_team_fraction| {
        let config = PolicyConfig { cross_team_fraction, ..config.clone() };
        SweepPoint::new(config, args.agents, args.ticks, seed)
    });
    let mut results = run_sweep(&points).into_iter();
    let (Some(base), Some(with)) = (results.next(), results.next()) else {
        anyhow::bail!("sweep returned fewer results than points");
    };
    let (base, with) = (base?, with?);

    println!("=== simsre — {} agents, {} ticks, seed {} ===", args.agents, args.ticks, seed);
    println!("{:<20} {:>12} {:>12}", "Team work mix", "cross 0.00", format!("cross {fraction:.2}"));
    println!("{}", "-".repeat(46));
    for kind in WorkKind::ALL {
        println!(
            "{:<20} {:>11.1}% {:>11.1}%",
            kind.as_str(),
            base.team.fraction(kind) * 100.0,
            with.team.fraction(kind) * 100.0,
        );
    }
    Ok(())
}

// ── Output table ──────────────────────────────────────────────────────────────

fn print_mix_table(summary: &WorkMixSummary) {
    print!("{:<8}", "Agent");
    for kind in WorkKind::ALL {
        print!(" {:>20}", kind.as_str());
    }
    println!();
    println!("{}", "-".repeat(8 + 21 * WorkKind::COUNT));

    let rows = summary
        .per_agent
        .iter()
        .enumerate()
        .map(|(i, mix)| (i.to_string(), mix))
        .chain(std::iter::once(("team".to_owned(), &summary.team)));
    for (label, mix) in rows {
        print!("{label:<8}");
        for kind in WorkKind::ALL {
            print!(" {:>19.1}%", mix.fraction(kind) * 100.0);
        }
        println!();
    }
}
