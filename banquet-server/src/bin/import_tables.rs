//! import-tables - 批量导入桌位
//!
//! Reads `name<TAB>guests<TAB>tables` lines from a file or stdin and sends
//! them to a running server, or with `--dry-run` only prints the allocation.
//!
//! ```text
//! import-tables tables.tsv
//! API_BASE=http://banquet.local:3000 import-tables --replace tables.tsv
//! cat tables.tsv | import-tables --dry-run
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use shared::ErrorBody;
use shared::models::SeatingTable;
use shared::seating::{
    AllocationWarning, ImportReport, ImportRequest, allocate_batch, parse_import_rows,
};

const DEFAULT_API_BASE: &str = "http://localhost:3000";

#[derive(Parser, Debug)]
#[command(
    name = "import-tables",
    version,
    about = "Import seating tables from tab-separated text"
)]
struct Cli {
    /// TSV file (name, guests, tables); reads stdin when omitted
    file: Option<PathBuf>,

    /// Server base URL (falls back to $API_BASE, then http://localhost:3000)
    #[arg(long)]
    api_base: Option<String>,

    /// Replace the whole seating plan instead of appending
    #[arg(long)]
    replace: bool,

    /// Print the allocation without contacting the server
    #[arg(long)]
    dry_run: bool,
}

fn resolve_api_base(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn import_url(api_base: &str) -> String {
    format!("{}/api/tables/import", api_base.trim_end_matches('/'))
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_tables(tables: &[SeatingTable]) {
    for t in tables {
        println!("  #{:<4} {:>3} pax  {}", t.table_number, t.pax, t.name);
    }
    let pax: u64 = tables.iter().map(|t| u64::from(t.pax)).sum();
    println!("{} tables, {} guests", tables.len(), pax);
}

fn print_notes(warnings: &[AllocationWarning], skipped_lines: &[usize]) {
    for w in warnings {
        println!("warning: {}", w);
    }
    for line in skipped_lines {
        println!("skipped line {}: expected 3 tab-separated fields", line);
    }
}

async fn send(api_base: &str, request: &ImportRequest) -> Result<ImportReport> {
    let url = import_url(api_base);
    let response = reqwest::Client::new()
        .post(&url)
        .json(request)
        .send()
        .await
        .with_context(|| format!("POST {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| format!("{} [{}]", e.message, e.code))
            .unwrap_or(body);
        bail!("import failed ({}): {}", status, message);
    }
    response
        .json::<ImportReport>()
        .await
        .context("decoding import report")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    banquet_server::init_logger_with_file(Some("warn"), None);

    let text = read_input(cli.file.as_ref())?;

    if cli.dry_run {
        let batch = parse_import_rows(&text);
        let allocation = allocate_batch(&batch.rows);
        println!("Parsed {} rows (dry run)", batch.rows.len());
        print_tables(&allocation.tables);
        print_notes(&allocation.warnings, &batch.skipped_lines);
        return Ok(());
    }

    let api_base = resolve_api_base(cli.api_base, std::env::var("API_BASE").ok());
    let request = ImportRequest {
        text,
        replace: cli.replace,
    };
    let report = send(&api_base, &request).await?;

    println!("Imported into {}", api_base);
    print_tables(&report.created);
    print_notes(&report.warnings, &report.skipped_lines);
    Ok(())
}
