use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use startup_metrics::{
    load_financial_profiles, load_idea_profiles, sample_idea, sample_startup,
    BurnBatchSummary, BurnReport, FinancialProfile, IdeaBatchSummary, IdeaProfile, IdeaReport,
    RatingPolicy,
};

#[derive(Parser)]
#[command(author, version, about = "Startup burn/runway calculator and idea validation scorer", long_about = None)]
struct Cli {
    /// Log at debug level unless STARTUP_METRICS_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample startup and sample idea reports
    Sample,
    /// Burn rate, runway and advice for one startup
    Burn {
        #[arg(long)]
        name: String,
        /// Cash in hand
        #[arg(long, allow_negative_numbers = true)]
        cash: f64,
        /// Monthly expenses
        #[arg(long, allow_negative_numbers = true)]
        expenses: f64,
        /// Monthly revenue
        #[arg(long, allow_negative_numbers = true)]
        revenue: f64,
        #[arg(long)]
        json: bool,
    },
    /// Validation score and verdict for one idea
    Idea {
        #[arg(long)]
        name: String,
        /// Problem severity, 1 to 10
        #[arg(long, allow_negative_numbers = true)]
        problem: f64,
        /// Market size, 1 to 10
        #[arg(long, allow_negative_numbers = true)]
        market: f64,
        /// Competition level, 1 to 10
        #[arg(long, allow_negative_numbers = true)]
        competition: f64,
        #[arg(long, value_enum, default_value_t = RatingsArg::Accept)]
        ratings: RatingsArg,
        #[arg(long)]
        json: bool,
    },
    /// Burn reports for every row of a CSV file
    BurnBatch {
        /// CSV with name,cash_in_hand,monthly_expenses,monthly_revenue
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Idea reports for every row of a CSV file
    IdeaBatch {
        /// CSV with idea_name,problem_score,market_size,competition_level
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = RatingsArg::Accept)]
        ratings: RatingsArg,
        #[arg(long)]
        json: bool,
    },
}

/// Out-of-range rating handling
#[derive(Clone, Copy, Debug, ValueEnum)]
enum RatingsArg {
    Accept,
    Clamp,
    Reject,
}

impl From<RatingsArg> for RatingPolicy {
    fn from(arg: RatingsArg) -> Self {
        match arg {
            RatingsArg::Accept => RatingPolicy::Accept,
            RatingsArg::Clamp => RatingPolicy::Clamp,
            RatingsArg::Reject => RatingPolicy::Reject,
        }
    }
}

#[derive(Serialize)]
struct Batch<R, S> {
    reports: Vec<R>,
    summary: S,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Sample) {
        Commands::Sample => run_sample()?,
        Commands::Burn {
            name,
            cash,
            expenses,
            revenue,
            json,
        } => {
            let report = FinancialProfile::new(name, cash, expenses, revenue)?.report();
            emit(&report, json)?;
        }
        Commands::Idea {
            name,
            problem,
            market,
            competition,
            ratings,
            json,
        } => {
            let report =
                IdeaProfile::with_policy(name, problem, market, competition, ratings.into())?
                    .show_result();
            emit(&report, json)?;
        }
        Commands::BurnBatch { path, json } => run_burn_batch(path, json)?,
        Commands::IdeaBatch {
            path,
            ratings,
            json,
        } => run_idea_batch(path, ratings.into(), json)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries reports
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("STARTUP_METRICS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_sample() -> Result<()> {
    println!("\n{}", sample_startup()?.report());
    println!("\n{}", sample_idea()?.show_result());
    Ok(())
}

fn run_burn_batch(path: PathBuf, json: bool) -> Result<()> {
    let reports: Vec<BurnReport> = load_financial_profiles(&path)?
        .iter()
        .map(FinancialProfile::report)
        .collect();
    let summary = BurnBatchSummary::from_reports(&reports);

    if json {
        println!("{}", serde_json::to_string_pretty(&Batch { reports, summary })?);
    } else {
        for report in &reports {
            println!("\n{}", report);
        }
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", summary.summary());
    }

    Ok(())
}

fn run_idea_batch(path: PathBuf, policy: RatingPolicy, json: bool) -> Result<()> {
    let reports: Vec<IdeaReport> = load_idea_profiles(&path, policy)?
        .iter()
        .map(IdeaProfile::show_result)
        .collect();
    let summary = IdeaBatchSummary::from_reports(&reports);

    if json {
        println!("{}", serde_json::to_string_pretty(&Batch { reports, summary })?);
    } else {
        for report in &reports {
            println!("\n{}", report);
        }
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", summary.summary());
    }

    Ok(())
}

fn emit<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("\n{}", report);
    }
    Ok(())
}
