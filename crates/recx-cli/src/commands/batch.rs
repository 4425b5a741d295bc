//! Batch command - extract receipts from many text files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, warn};

use recx_core::extract_receipts;

use super::extract::{format_receipts, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (text files only)
    #[arg(required = true)]
    input: String,

    /// Output directory (default: print everything to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue when a file fails instead of aborting the batch
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("no matching text files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} file(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let mut processed = 0usize;
    let mut failed = 0usize;
    let mut total_receipts = 0usize;

    for path in files {
        match process_file(&path, &args) {
            Ok(count) => {
                processed += 1;
                total_receipts += count;
                debug!("{}: {} receipt(s)", path.display(), count);
            }
            Err(err) => {
                failed += 1;
                warn!("{}: {}", path.display(), err);
                if !args.continue_on_error {
                    return Err(err.context(format!("while processing {}", path.display())));
                }
                eprintln!("{} {}: {}", style("✗").red(), path.display(), err);
            }
        }
    }

    println!(
        "{} {} file(s) processed, {} receipt(s) extracted, {} failed",
        style("✓").green(),
        processed,
        total_receipts,
        failed
    );

    Ok(())
}

/// Process a single file, returning how many receipts it yielded.
fn process_file(path: &PathBuf, args: &BatchArgs) -> anyhow::Result<usize> {
    let text = fs::read_to_string(path)?;

    if text.trim().is_empty() {
        anyhow::bail!("input contains no usable text");
    }

    let receipts = extract_receipts(&text);
    if receipts.is_empty() {
        anyhow::bail!("no structured receipt data found");
    }

    let output = format_receipts(&receipts, args.format)?;

    match &args.output_dir {
        Some(dir) => {
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Text => "txt",
            };
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipts");
            fs::write(dir.join(format!("{stem}.{extension}")), &output)?;
        }
        None => {
            println!("{} {}", style("•").cyan(), path.display());
            println!("{}", output);
        }
    }

    Ok(receipts.len())
}
