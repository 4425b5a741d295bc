//! Extract command - pull structured receipts out of one text document.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use recx_core::{extract_receipts, Receipt};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    // Empty input is the caller's problem, not the engine's; reject before
    // invoking extraction.
    if text.trim().is_empty() {
        anyhow::bail!("input contains no usable text");
    }

    info!("extracting from {} characters of text", text.len());
    let receipts = extract_receipts(&text);

    if receipts.is_empty() {
        anyhow::bail!("no structured receipt data found in {}", args.input.display());
    }
    debug!("extracted {} receipt(s)", receipts.len());

    let output = format_receipts(&receipts, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} receipt(s) written to {}",
            style("✓").green(),
            receipts.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if !path.exists() {
        anyhow::bail!("input file not found: {}", path.display())
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

pub(crate) fn format_receipts(receipts: &[Receipt], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipts)?),
        OutputFormat::Text => Ok(format_text(receipts)),
    }
}

fn format_text(receipts: &[Receipt]) -> String {
    let mut output = String::new();

    for (index, receipt) in receipts.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("Receipt {}\n", index + 1));
        output.push_str(&format!("  Vendor:   {}\n", receipt.vendor));
        output.push_str(&format!("  Date:     {}\n", receipt.transaction_date));
        output.push_str(&format!(
            "  Amount:   {} {}\n",
            receipt.total_amount, receipt.currency
        ));
        output.push_str(&format!("  Category: {}\n", receipt.category));
    }

    output
}
