use clap::{Parser, Subcommand};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wilson_eoq::calculator::{Calculator, CalculatorConfig};
use wilson_eoq::io::{display, form};
use wilson_eoq::model::RawInputs;
use wilson_eoq::Result;

/// Economic Order Quantity calculator for a fuel station (Wilson model)
#[derive(Parser)]
#[command(name = "wilson-eoq")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Print the detailed report, including the minimum total cost
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of samples on the cost curve
    #[arg(long, global = true)]
    points: Option<usize>,

    /// Write the cost chart to this SVG file
    #[arg(long, global = true)]
    chart: Option<PathBuf>,

    /// Write the sampled curve to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Explain the model and exit
    #[arg(long)]
    explain: bool,

    /// Fuel sold per year, in liters (V)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "explain")]
    demand: Option<String>,

    /// Cost of one refill order (K)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "explain")]
    order_cost: Option<String>,

    /// Cost of storing one liter for a year (S)
    #[arg(long, allow_hyphen_values = true, required_unless_present = "explain")]
    holding_cost: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for the inputs on the terminal, one calculation per round
    Interactive,
}

fn load_config(cli: &Cli) -> Result<CalculatorConfig> {
    let base = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let mut config = base.with_env_override()?;

    if let Some(points) = cli.points {
        config.num_points = points;
    }
    if let Some(path) = &cli.chart {
        config.chart_path = Some(path.clone());
    }
    if let Some(path) = &cli.csv {
        config.csv_path = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_once(cli: &Cli, calculator: &mut Calculator) -> Result<()> {
    let raw = RawInputs {
        annual_demand: cli.demand.clone().unwrap_or_default(),
        order_cost: cli.order_cost.clone().unwrap_or_default(),
        holding_cost_rate: cli.holding_cost.clone().unwrap_or_default(),
    };

    let outcome = calculator.submit(&raw)?;
    for line in display::result_lines(&outcome.solution) {
        println!("{}", line);
    }
    if cli.verbose {
        println!("\n{}", display::detailed_report(&outcome.solution));
    }

    for path in calculator.export()? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.explain {
        println!("{}", display::MODEL_EXPLANATION);
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.log_level);
    info!(points = config.num_points, "calculator ready");

    let mut calculator = Calculator::new(config);

    let result = match &cli.command {
        Some(Commands::Interactive) => {
            form::run_form(&mut calculator, stdin().lock(), stdout().lock()).map(|_| ())
        }
        None => run_once(&cli, &mut calculator),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
