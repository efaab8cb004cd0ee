//! Process command - structure a single OCR text file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use recscan_core::{check_input, LineRuleParser, ReceiptParser, ReceiptRecord};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file produced by OCR ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per item
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let text = read_input(&args.input).await?;
    check_input(&text, &config.input)?;

    info!("Processing {}", args.input.display());

    let result = LineRuleParser::new().parse(&text);

    if args.show_warnings || config.output.include_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    let output = format_record(&result.record, args.format, config.output.pretty_json)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(strip_bom(text));
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(strip_bom(tokio::fs::read_to_string(input).await?))
}

/// Drop a leading UTF-8 byte order mark so it does not end up in the merchant.
pub fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

pub fn format_record(
    record: &ReceiptRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ReceiptRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["merchant", "date", "quantity", "name", "price", "total"])?;

    if record.items.is_empty() {
        wtr.write_record([
            record.merchant.as_str(),
            record.date.as_str(),
            "",
            "",
            "",
            record.total.as_str(),
        ])?;
    }

    for item in &record.items {
        let quantity = item.quantity.to_string();
        wtr.write_record([
            record.merchant.as_str(),
            record.date.as_str(),
            quantity.as_str(),
            item.name.as_str(),
            item.price.as_str(),
            record.total.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ReceiptRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Merchant: {}\n", record.merchant));
    match record.parsed_date() {
        Some(date) => output.push_str(&format!("Date: {} ({})\n", record.date, date)),
        None => output.push_str(&format!("Date: {}\n", record.date)),
    }
    output.push('\n');

    output.push_str("Items:\n");
    if record.items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in &record.items {
        output.push_str(&format!(
            "  {} x {:<30} {}\n",
            item.quantity, item.name, item.price
        ));
    }
    output.push('\n');

    output.push_str(&format!("Total: {}\n", record.total));

    output
}
