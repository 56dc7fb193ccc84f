mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::income::{IncomeArgs, RequiredPrincipalArgs};
use commands::portfolio::PortfolioArgs;
use commands::retirement::{DrawdownArgs, LifecycleArgs};
use commands::savings::{AccumulateArgs, GoalArgs};

/// Savings, dividend and retirement projections
#[derive(Parser)]
#[command(
    name = "etfs",
    version,
    about = "Savings, dividend and retirement projections",
    long_about = "A CLI for closed-form personal-finance projections with decimal precision. \
                  Supports periodic-investment accumulation, goal solving, dividend income \
                  targets, retirement drawdown, blended portfolio projections, and named \
                  market scenarios."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project periodic investments to a future value
    Accumulate(AccumulateArgs),
    /// Solve the monthly contribution that reaches a target value
    Goal(GoalArgs),
    /// Monthly dividend income from a principal
    Income(IncomeArgs),
    /// Principal required for a target monthly dividend
    RequiredPrincipal(RequiredPrincipalArgs),
    /// Size retirement withdrawals (fixed term or SWR)
    Drawdown(DrawdownArgs),
    /// Accumulate to retirement, then draw the corpus down
    Lifecycle(LifecycleArgs),
    /// Project a blended multi-holding portfolio
    Portfolio(PortfolioArgs),
    /// List the named market scenarios
    Scenarios,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Accumulate(args) => commands::savings::run_accumulate(args),
        Commands::Goal(args) => commands::savings::run_goal(args),
        Commands::Income(args) => commands::income::run_income(args),
        Commands::RequiredPrincipal(args) => commands::income::run_required_principal(args),
        Commands::Drawdown(args) => commands::retirement::run_drawdown(args),
        Commands::Lifecycle(args) => commands::retirement::run_lifecycle(args),
        Commands::Portfolio(args) => commands::portfolio::run_portfolio(args),
        Commands::Scenarios => commands::scenarios::run_scenarios(),
        Commands::Version => {
            println!("etfs {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
