use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use u_crew::catalog::RequirementCatalog;
use u_crew::config::AppConfig;
use u_crew::error::AppError;
use u_crew::fixture::{read_json, Roster};
use u_crew::models::Weekday;
use u_crew::scheduler::{CrewScheduler, ScheduleKpi};
use u_crew::telemetry;
use u_crew::validation::validate_input;

#[derive(Parser, Debug)]
#[command(
    name = "u-crew",
    about = "Assign construction crews to jobs across the work week",
    version
)]
struct Cli {
    /// Override the configured log level/filter
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a roster, run the allocation pass and print the schedule (default command)
    Run(RunArgs),
    /// Print a seeded random roster as JSON
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Roster JSON file (defaults to the canonical five-building week)
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Catalog JSON file (overrides CREW_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print the schedule as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Print placement and utilization metrics
    #[arg(long)]
    kpi: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of jobs
    #[arg(long, default_value_t = 10)]
    jobs: usize,
    /// Number of employees
    #[arg(long, default_value_t = 10)]
    employees: usize,
    /// Probability that an employee is free on a given day
    #[arg(long, default_value_t = 0.7)]
    availability: f64,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    telemetry::init(&config.telemetry)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()))
    {
        Command::Run(args) => run_schedule(args, &config),
        Command::Generate(args) => generate(args),
    }
}

fn run_schedule(args: RunArgs, config: &AppConfig) -> Result<(), AppError> {
    let roster = match &args.roster {
        Some(path) => Roster::from_path(path)?,
        None => Roster::canonical(),
    };
    let catalog = match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => read_json::<RequirementCatalog>(path)?,
        None => RequirementCatalog::standard(),
    };

    if let Err(errors) = validate_input(&roster.jobs, &roster.employee_models()?, &catalog) {
        for error in &errors {
            warn!(kind = ?error.kind, "{}", error.message);
        }
    }

    let mut scheduler = CrewScheduler::with_catalog(catalog);
    roster.apply(&mut scheduler)?;
    scheduler.schedule();

    if args.json {
        println!("{}", serde_json::to_string_pretty(scheduler.snapshot())?);
    } else {
        println!("{}", scheduler.snapshot());
    }

    for job in scheduler.pending_jobs() {
        info!(job = %job.name, category = %job.category, "left unscheduled");
    }

    if args.kpi {
        print_kpi(&scheduler.kpi());
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), AppError> {
    let roster = Roster::random(args.seed, args.jobs, args.employees, args.availability);
    println!("{}", serde_json::to_string_pretty(&roster)?);
    Ok(())
}

fn print_kpi(kpi: &ScheduleKpi) {
    println!(
        "Scheduled: {} | Pending: {} | Placement rate: {:.0}%",
        kpi.scheduled_jobs,
        kpi.pending_jobs,
        kpi.placement_rate * 100.0
    );
    for day in Weekday::ALL {
        println!("  {day}: {} job(s)", kpi.jobs_per_day[day.index()]);
    }
    if let Some(day) = kpi.busiest_day() {
        println!("Busiest day: {day}");
    }
    println!("Average utilization: {:.0}%", kpi.avg_utilization * 100.0);
}
