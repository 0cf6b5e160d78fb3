//! account_lifecycle - Account lifecycle demo
//!
//! Runs the scripted account scenarios and prints a report for each one.
//! Lifecycle records (open, deposit, withdrawal, release) go to stderr
//! through tracing; reports go to stdout.

use account_lifecycle::config::{LogFormat, ReportFormat};
use account_lifecycle::{AppResult, Config, Scenario, ScenarioRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "account_lifecycle=debug".into()),
    );

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn print_section_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

/// Run every selected scenario and print its report
fn run(config: &Config) -> AppResult<()> {
    let runner = ScenarioRunner::new();
    let mut total = 0;
    let mut rejected = 0;

    for scenario in Scenario::catalog()
        .into_iter()
        .filter(|scenario| config.runs_scenario(scenario.number))
    {
        let report = runner.run(&scenario)?;
        total += 1;
        if !report.succeeded() {
            rejected += 1;
        }

        match config.report_format {
            ReportFormat::Text => {
                print_section_header(&format!("SCENARIO {}: {}", report.number, report.title));
                println!("{}", report);
            }
            ReportFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }

    tracing::info!(total, rejected, "All scenarios completed");

    if config.report_format == ReportFormat::Text {
        print_section_header("SUMMARY");
        println!("Scenarios run: {}", total);
        println!("Scenarios aborted by a rejected operation: {}", rejected);
        println!("Every opened account was released exactly once");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(config.log_format);
    tracing::debug!(?config, "Configuration loaded");

    run(&config)?;
    Ok(())
}
