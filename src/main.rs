mod chart;
mod metrics;
mod relativity;
mod state;
mod tui;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gammascope",
    about = "Interactive explorer for special-relativity time dilation"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive terminal explorer
    Tui,
    /// Export a dilation sweep to CSV and render the chart pair to PNG
    Export {
        /// Traveler-clock seconds dilated at every sweep step
        #[arg(long, default_value_t = 60.0)]
        time: f64,
        /// Lorentz factor at which the chart marker is placed
        #[arg(long, default_value_t = 50.0)]
        gamma: f64,
        /// CSV output path
        #[arg(long, default_value = "dilation.csv")]
        csv: PathBuf,
        /// PNG output path
        #[arg(long, default_value = "charts.png")]
        png: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export {
            time,
            gamma,
            csv,
            png,
        }) => run_export(time, gamma, &csv, &png)?,
        Some(Commands::Tui) | None => tui::start()?,
    }

    Ok(())
}

fn run_export(time: f64, gamma: f64, csv: &Path, png: &Path) -> Result<()> {
    let rows = metrics::dilation_sweep(time);
    metrics::export_csv(&rows, csv)?;
    metrics::plot_charts(gamma, png)?;
    println!("✅ Sweep written to {}, charts to {}", csv.display(), png.display());
    Ok(())
}
