use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pattern_admin::{
    AdminApi, AdminConsole, ApiConfig, DEFAULT_API_URL, HelpDialog, HttpAdminApi, PatternRecord,
    format_record,
    logging::{self, LogTarget},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "pattern-admin",
    version,
    about = "Terminal admin console for the chart-pattern learning catalog",
    long_about = None
)]
struct Cli {
    /// Origin of the admin API
    #[arg(long, env = "PATTERN_ADMIN_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "PATTERN_ADMIN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log file for interactive sessions (default: <cache dir>/pattern-admin/pattern-admin.log)
    #[arg(long, env = "PATTERN_ADMIN_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Print the record list and exit instead of opening the console
    #[arg(long)]
    list: bool,

    /// Output format for --list
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Show console key bindings
    #[arg(long)]
    help_keys: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.help_keys {
        println!("{}", HelpDialog::help_text());
        return Ok(());
    }

    let log_target = if cli.list {
        LogTarget::Stderr
    } else {
        match cli.log_file.clone().or_else(logging::default_log_path) {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        }
    };
    logging::init_tracing(&log_target, cli.verbose)?;

    let config = ApiConfig {
        base_url: cli.api_url.clone(),
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    let api = HttpAdminApi::new(&config).context("invalid API configuration")?;
    tracing::info!(base_url = api.base_url(), list = cli.list, "starting");

    if cli.list {
        let records = api.list_records().context("failed to fetch records")?;
        return print_records(&records, cli.format, !cli.no_color);
    }

    let mut console = AdminConsole::new(Arc::new(api));
    console.run()
}

fn print_records(records: &[PatternRecord], format: OutputFormat, use_color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(handle, "No records found.")?;
            } else {
                writeln!(handle, "Found {} records:\n", records.len())?;
                for record in records {
                    writeln!(handle, "{}", format_record(record, use_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": records,
                "count": records.len(),
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for record in records {
                serde_json::to_writer(&mut handle, record)?;
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}
