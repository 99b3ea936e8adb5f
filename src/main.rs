//! project-health - rule-based project health prediction
//!
//! With no subcommand, prints the training report followed by predictions
//! for the three demonstration projects.
//!
//! # Usage
//!
//! ```bash
//! # Training report + demo predictions
//! project-health
//!
//! # Training report only, custom parameters
//! project-health train --learning-rate 0.0005 --epochs 4
//!
//! # Assess one project
//! project-health predict --name "Bridge" --allocated 800000 --utilized 60000 --days 130 --json
//!
//! # Portfolio summary over the demo projects
//! project-health portfolio
//! ```
//!
//! # Environment Variables
//!
//! - `PROJECT_HEALTH_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: warn, `--verbose` raises it to debug)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use project_health::config::defaults::MAX_EPOCHS;
use project_health::predictor::demo_projects;
use project_health::report;
use project_health::{HealthConfig, Predictor, ProjectInput, ProjectRecord};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "project-health")]
#[command(about = "Rule-based project health prediction")]
#[command(version)]
struct CliArgs {
    /// TOML config file; a file given here must load cleanly
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Training report followed by predictions for the demo projects (default)
    Demo,

    /// Training report only
    Train {
        /// Learning rate shown in the report (default from config)
        #[arg(long)]
        learning_rate: Option<f64>,
        /// Number of epochs to report (default from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_EPOCHS)))]
        epochs: Option<u32>,
    },

    /// Assess a single project
    Predict {
        #[arg(long)]
        name: Option<String>,
        /// Allocated budget
        #[arg(long)]
        allocated: Option<f64>,
        /// Utilized budget
        #[arg(long)]
        utilized: Option<f64>,
        /// Days since funding approval
        #[arg(long)]
        days: Option<u32>,
        /// Overall sanctioned budget, enables the allocation risk factor
        #[arg(long)]
        total_budget: Option<f64>,
        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Portfolio health over the demo projects
    Portfolio {
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<HealthConfig> {
    match path {
        Some(p) => HealthConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(HealthConfig::load()),
    }
}

fn run_train<W: Write>(
    out: &mut W,
    predictor: &Predictor,
    learning_rate: f64,
    epochs: u32,
) -> Result<()> {
    let report = predictor.train_grpo(learning_rate, epochs);
    report::write_training_log(out, &report).context("Failed to write training report")
}

fn run_demo<W: Write>(out: &mut W, predictor: &Predictor) -> Result<()> {
    let t = &predictor.config().training;
    run_train(out, predictor, t.learning_rate, t.num_epochs)?;

    report::write_predictions_header(out)?;
    let symbol = &predictor.config().display.currency_symbol;
    for project in demo_projects() {
        let assessment = predictor
            .assess(&project)
            .with_context(|| format!("Failed to assess {}", project.name))?;
        report::write_assessment(out, &project, &assessment, symbol)?;
    }
    Ok(())
}

fn run_predict<W: Write>(
    out: &mut W,
    predictor: &Predictor,
    input: ProjectInput,
    json: bool,
) -> Result<()> {
    let project = ProjectRecord::try_from(input).context("Incomplete project")?;
    let assessment = predictor
        .assess(&project)
        .with_context(|| format!("Failed to assess {}", project.name))?;
    debug!(project = %project.name, prediction = %assessment.prediction, "Assessment complete");

    if json {
        let text = serde_json::to_string_pretty(&assessment)
            .context("Failed to serialize assessment")?;
        writeln!(out, "{text}")?;
    } else {
        let symbol = &predictor.config().display.currency_symbol;
        report::write_assessment(out, &project, &assessment, symbol)?;
        report::write_assessment_details(out, &assessment)?;
    }
    Ok(())
}

fn run_portfolio<W: Write>(out: &mut W, predictor: &Predictor, json: bool) -> Result<()> {
    let analysis = predictor.analyze_portfolio(&demo_projects())?;
    if json {
        let text = serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        writeln!(out, "{text}")?;
    } else {
        report::write_portfolio(out, &analysis, &predictor.config().display.currency_symbol)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging; stdout is reserved for the report
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = load_config(args.config.as_ref())?;
    let predictor = Predictor::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(SubCommand::Demo) {
        SubCommand::Demo => run_demo(&mut out, &predictor)?,
        SubCommand::Train { learning_rate, epochs } => {
            let t = &predictor.config().training;
            run_train(
                &mut out,
                &predictor,
                learning_rate.unwrap_or(t.learning_rate),
                epochs.unwrap_or(t.num_epochs),
            )?;
        }
        SubCommand::Predict {
            name,
            allocated,
            utilized,
            days,
            total_budget,
            json,
        } => {
            let input = ProjectInput {
                name,
                allocated_budget: allocated,
                utilized_budget: utilized,
                days_approved: days,
                total_budget,
            };
            run_predict(&mut out, &predictor, input, json)?;
        }
        SubCommand::Portfolio { json } => run_portfolio(&mut out, &predictor, json)?,
    }

    out.flush()?;
    Ok(())
}
