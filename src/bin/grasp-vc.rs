use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use grasp_cover::report::Report;
use grasp_cover::{instance, sample, GraspConfig, Result, Strategy};

/// Approximate Minimum Vertex Cover with GRASP and report sample statistics.
#[derive(Parser, Debug)]
#[command(name = "grasp-vc", version, about, long_about = None)]
struct Cli {
    /// DIMACS instance file
    #[arg(short, long)]
    input: PathBuf,

    /// Construction strategy: list_right, grasp_deg or grasp_weideg
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Strategy,

    /// RCL greediness in [0, 1] (randomized strategies only)
    #[arg(short, long, default_value_t = 0.5)]
    alpha: f64,

    /// Number of repetitions, between 1 and 100000
    #[arg(short, long, default_value_t = 30)]
    reps: usize,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run repetitions in parallel
    #[arg(long)]
    parallel: bool,

    /// Write the best cover found to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    name.parse()
}

fn run(cli: Cli) -> Result<()> {
    let config = GraspConfig {
        alpha: cli.alpha,
        repetitions: cli.reps,
        seed: cli.seed,
        parallel: cli.parallel,
    };
    config.validate()?;

    let instance = instance::read_file(&cli.input)?;
    let outcome = sample(cli.strategy, &instance, &config)?;
    let report = Report::new(cli.input.display().to_string(), &instance, &outcome, config.alpha)?;
    println!("{report}");

    if let Some(path) = cli.output {
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(outcome.best.format().as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
