use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use partial_tp_calculator::config::{parse_percent_list, Config};
use partial_tp_calculator::core::allocation::default_custom_inputs;
use partial_tp_calculator::core::compute_scenario;
use partial_tp_calculator::models::{DistributionStrategy, TradingMode};
use partial_tp_calculator::parser::{SignalParser, EXAMPLE_SIGNAL};
use partial_tp_calculator::report::ScenarioReport;

/// Simulate partial take-profit outcomes for a pasted trading signal.
#[derive(Debug, Parser)]
#[command(name = "partial-tp", version)]
struct Cli {
    /// File holding the signal text; reads stdin when omitted.
    signal_file: Option<PathBuf>,

    /// Use the bundled example signal.
    #[arg(long, conflicts_with = "signal_file")]
    example: bool,

    /// Capital in base currency.
    #[arg(long)]
    modal: Option<f64>,

    /// spot or futures.
    #[arg(long)]
    mode: Option<TradingMode>,

    /// Futures leverage (1-125).
    #[arg(long)]
    leverage: Option<u32>,

    /// equal, front-loaded, back-loaded or custom.
    #[arg(long)]
    distribution: Option<DistributionStrategy>,

    /// Custom percentages per target, e.g. "30,30,40". Implies custom.
    /// Without it, custom uses 30% per target, at least 1% for each
    /// non-final target, with the last absorbing the rest.
    #[arg(long)]
    alloc: Option<String>,

    /// Print the scenario as JSON instead of the summary table.
    #[arg(long)]
    json: bool,

    /// Write the CSV export to the output directory.
    #[arg(long)]
    csv: bool,

    /// Write the plain-text report to the output directory.
    #[arg(long)]
    report: bool,

    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    apply_overrides(&mut cfg, &cli)?;

    let text = read_signal_text(&cli)?;
    let signal = match SignalParser::new().parse(&text) {
        Ok(signal) => signal,
        Err(e) => bail!("Failed to parse signal: {e}. Please check the format."),
    };
    info!(
        "Parsed {}: entry {:?}, {} targets, {} stop losses",
        signal.symbol_or_unknown(),
        signal.entry,
        signal.targets.len(),
        signal.stop_losses.len()
    );

    if cfg.distribution == DistributionStrategy::Custom && cfg.custom_allocations.is_empty() {
        cfg.custom_allocations = default_custom_inputs(signal.targets.len());
        warn!(
            "No custom allocation given, using defaults {:?}",
            cfg.custom_allocations
        );
    }

    let trading = cfg.trading_config()?;
    let result = compute_scenario(&signal, &trading)?;
    let report = ScenarioReport::new(signal, trading, result);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
    }

    let out_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output_dir));
    if cli.csv {
        let path = report.save_csv(&out_dir)?;
        info!("CSV saved to: {}", path.display());
    }
    if cli.report {
        let path = report.save_text(&out_dir)?;
        info!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn apply_overrides(cfg: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(modal) = cli.modal {
        cfg.modal = modal;
    }
    if let Some(mode) = cli.mode {
        cfg.trading_mode = mode;
    }
    if let Some(leverage) = cli.leverage {
        cfg.leverage = leverage;
    }
    if let Some(distribution) = cli.distribution {
        cfg.distribution = distribution;
    }
    if let Some(raw) = &cli.alloc {
        cfg.custom_allocations = parse_percent_list(raw)?;
        cfg.distribution = DistributionStrategy::Custom;
    }
    Ok(())
}

fn read_signal_text(cli: &Cli) -> Result<String> {
    if cli.example {
        return Ok(EXAMPLE_SIGNAL.to_string());
    }
    match &cli.signal_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading signal from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading signal from stdin")?;
            Ok(buf)
        }
    }
}
