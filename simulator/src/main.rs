use anyhow::Context;
use clap::Parser;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Synthetic spectrum generator and analyzer")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Total bin count (even)
    #[arg(long, default_value_t = 65536)]
    n: usize,
    /// Sample rate in Hz; 0 selects a unit frequency resolution
    #[arg(long, default_value_t = 0.0)]
    fs: f64,
    /// Use a pink (1/sqrt(f)) magnitude profile instead of a flat one
    #[arg(long, default_value_t = false)]
    pink: bool,
    /// Seed for the random phase draw
    #[arg(long)]
    seed: Option<u64>,
    /// Skip spectral-density normalization
    #[arg(long, default_value_t = false)]
    no_density: bool,
    /// Include the single-sided power density series in the report
    #[arg(long, default_value_t = false)]
    include_psd: bool,
    /// Write the JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.n, args.fs, args.pink, args.seed, !args.no_density)
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute(args.include_psd)?;

    println!(
        "Spectrum -> bins {}, bin size {}, total power {:.6e}, peak {:?} Hz, seed {:?}",
        result.summary.num_samples,
        result.summary.bin_size,
        result.summary.total_power,
        result.summary.peak_frequency,
        result.phase_seed
    );

    if let Some(report_path) = args.output {
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&report_path)
            .with_context(|| format!("creating report {}", report_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)
            .with_context(|| format!("writing report {}", report_path.display()))?;
        log::info!("report written to {}", report_path.display());
    }

    Ok(())
}
