//! Process command - extract fields from a single statement file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use cardex_core::models::config::CardexConfig;
use cardex_core::models::statement::StatementRecord;
use cardex_core::pdf::{PdfSource, StatementPdf};
use cardex_core::statement::{RuleStatementParser, StatementParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or pre-extracted text)
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
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        CardexConfig::from_file(Path::new(path))?
    } else {
        CardexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = load_statement_text(&args.input, &config)?;
    if text.trim().is_empty() {
        warn!("No text recovered from {}; the record will be all placeholders", args.input.display());
    }

    let parser = build_parser(&config);
    let record = parser.parse(&text);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
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

/// Build the extraction parser from configuration toggles.
pub(super) fn build_parser(config: &CardexConfig) -> RuleStatementParser {
    RuleStatementParser::new()
        .with_date_validation(config.extraction.validate_dates)
        .with_amount_validation(config.extraction.validate_amounts)
}

/// Recover statement text from a PDF or plain-text input file.
pub(super) fn load_statement_text(path: &Path, config: &CardexConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let pdf = StatementPdf::open(path)?;
            debug!("PDF has {} pages", pdf.page_count());

            let text = pdf.front_text(config.pdf.front_pages)?;
            if text.trim().len() < config.pdf.min_text_length {
                // Identity markers are occasionally pushed past the front
                // pages by promotional inserts
                warn!("Front pages held little text, extracting the whole document");
                return Ok(pdf.extract_text()?);
            }
            Ok(text)
        }
        "txt" | "text" => Ok(fs::read_to_string(path)?),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

pub(super) fn format_record(record: &StatementRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &StatementRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "bank_name",
        "card_variant",
        "card_last_4",
        "billing_cycle",
        "payment_due_date",
        "total_balance",
        "transaction_info",
    ])?;

    wtr.write_record([
        &record.bank_name,
        &record.card_variant,
        &record.card_last_4,
        &record.billing_cycle,
        &record.payment_due_date,
        &record.total_balance,
        &record.transaction_info,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &StatementRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bank:          {}\n", record.bank_name));
    output.push_str(&format!("Card:          {}\n", record.card_variant));
    output.push_str(&format!("Ending in:     {}\n", record.card_last_4));
    output.push_str(&format!("Billing cycle: {}\n", record.billing_cycle));
    output.push_str(&format!("Payment due:   {}\n", record.payment_due_date));
    output.push_str(&format!("Balance:       {}\n", record.total_balance));
    output.push_str(&format!("Transactions:  {}\n", record.transaction_info));

    output
}
