use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rubric::{
    aggregate, format_result_table, format_summary, summarize, write_result_csv, BandConfig,
    MetricBand, Normalizer,
};

#[derive(Parser)]
#[command(name = "rubric")]
#[command(author, version, about = "Teacher survey score aggregation and comment normalization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate per-teacher survey CSVs into a single metrics table
    Aggregate {
        /// Directory containing one CSV file per teacher
        #[arg(short, long)]
        input: PathBuf,

        /// Optional CSV file to write the result table to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Custom band as NAME=START..END; repeat to replace the default set
        #[arg(long = "band", value_name = "NAME=START..END")]
        bands: Vec<MetricBand>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Normalize free-text survey comments, one per line
    Clean {
        /// Input text file with one comment per line
        #[arg(short, long)]
        input: PathBuf,

        /// Optional file to write the cleaned lines to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            input,
            output,
            bands,
            verbose,
        } => {
            setup_logging(verbose);
            run_aggregate(input, output, bands)
        }
        Commands::Clean {
            input,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            run_clean(input, output)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_aggregate(input: PathBuf, output: Option<PathBuf>, bands: Vec<MetricBand>) -> Result<()> {
    let config = if bands.is_empty() {
        BandConfig::default()
    } else {
        BandConfig::new(bands)
    };

    info!("Aggregating survey files from {:?}", input);
    let result = aggregate(&input, &config).context("Aggregation failed")?;

    println!("Teacher Metrics");
    println!("===============");
    print!("{}", format_result_table(&result.table));
    println!();

    println!("Summary Statistics");
    println!("------------------");
    print!("{}", format_summary(&summarize(&result.table)));
    println!();

    println!(
        "Processed {} of {} files ({} skipped)",
        result.summary.files_processed, result.summary.files_found, result.summary.files_skipped
    );

    if let Some(path) = output {
        write_result_csv(&result.table, &path)?;
        info!("Result table written to {:?}", path);
    }

    Ok(())
}

fn run_clean(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    info!("Normalizing comments from {:?}", input);
    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read file: {:?}", input))?;

    let comments: Vec<String> = content.lines().map(str::to_string).collect();
    let normalizer = Normalizer::english();
    let cleaned = normalizer.normalize_all(&comments);

    info!("Normalized {} comments", cleaned.len());

    match output {
        Some(path) => {
            let mut text = cleaned.join("\n");
            text.push('\n');
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write file: {:?}", path))?;
            info!("Cleaned comments written to {:?}", path);
        }
        None => {
            for line in &cleaned {
                println!("{line}");
            }
        }
    }

    Ok(())
}
