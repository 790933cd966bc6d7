//! macmap entry point.
//!
//! Captures a switch's dynamic MAC table and interface status, joins them
//! by port, and writes the report as CSV or JSON.

use anyhow::{bail, Context};
use clap::Parser;
use macmap::config::{MacmapConfig, ReportFormat, DEFAULT_CONFIG_PATH};
use macmap::csv_sink::CsvReportSink;
use macmap::json_sink::JsonReportSink;
use macmap::logging::{init_logging, log_anomalies, LogFormat};
use macmap::oui_table::OuiTable;
use macmap::replay::ReplayExecutor;
use macmap::shell::ShellExecutor;
use macmap_core::{
    Collector, CommandExecutor, NoVendorLookup, ReportSink, SwitchReport, VendorLookup,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Switch MAC table and interface status report
#[derive(Parser, Debug)]
#[command(name = "macmap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Switch name used when no prompt is known
    #[arg(short = 'n', long)]
    switch_name: Option<String>,

    /// Session prompt, e.g. `sw1#`
    #[arg(long)]
    prompt: Option<String>,

    /// Shell command template with a {command} placeholder
    #[arg(short = 's', long)]
    ssh_template: Option<String>,

    /// Per-command timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Saved MAC table output to replay instead of running commands
    #[arg(long, requires = "replay_status")]
    replay_mac: Option<PathBuf>,

    /// Saved interface status output to replay instead of running commands
    #[arg(long, requires = "replay_mac")]
    replay_status: Option<PathBuf>,

    /// Directory for report files
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long, value_enum)]
    format: Option<ReportFormat>,

    /// OUI to vendor CSV table
    #[arg(long)]
    oui_table: Option<PathBuf>,
}

impl Args {
    /// Applies command line overrides on top of the file configuration.
    fn apply(&self, config: &mut MacmapConfig) {
        if let Some(ref name) = self.switch_name {
            config.session.switch_name = Some(name.clone());
        }
        if let Some(ref prompt) = self.prompt {
            config.session.prompt = Some(prompt.clone());
        }
        if let Some(ref template) = self.ssh_template {
            config.shell.command_template = Some(template.clone());
        }
        if let Some(timeout) = self.timeout {
            config.shell.timeout_secs = timeout;
        }
        if let Some(ref dir) = self.output_dir {
            config.report.output_dir = Some(dir.clone());
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(ref path) = self.oui_table {
            config.report.oui_table = Some(path.clone());
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_level, args.log_format);

    match run(args).await {
        Ok(paths) => {
            for path in &paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("macmap failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<Vec<PathBuf>> {
    let mut config = MacmapConfig::load_or_default(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let report = match (&args.replay_mac, &args.replay_status) {
        (Some(mac), Some(status)) => {
            info!(mac = %mac.display(), status = %status.display(), "Replaying saved captures");
            let mut executor = ReplayExecutor::from_files(&config.session.commands, mac, status)
                .context("failed to load replay captures")?;
            if let Some(ref prompt) = config.session.prompt {
                executor = executor.with_prompt(prompt.clone());
            }
            collect(executor, &config).await?
        }
        _ => {
            let Some(template) = config.shell.command_template.clone() else {
                bail!("no shell command template configured; pass --ssh-template or --replay-mac/--replay-status");
            };
            let mut executor = ShellExecutor::from_template(template)?
                .with_timeout(config.shell_timeout());
            if let Some(ref prompt) = config.session.prompt {
                executor = executor.with_prompt(prompt.clone());
            }
            collect(executor, &config).await?
        }
    };

    log_anomalies(&report);

    let vendors: Box<dyn VendorLookup> = match config.report.oui_table {
        Some(ref path) => Box::new(OuiTable::load(path)?),
        None => Box::new(NoVendorLookup),
    };

    let output_dir = config.output_dir();
    let paths = match config.report.format {
        ReportFormat::Csv => CsvReportSink::new(output_dir).write_report(&report, vendors.as_ref())?,
        ReportFormat::Json => {
            JsonReportSink::new(output_dir).write_report(&report, vendors.as_ref())?
        }
    };

    Ok(paths)
}

async fn collect<E: CommandExecutor>(
    executor: E,
    config: &MacmapConfig,
) -> anyhow::Result<SwitchReport> {
    let mut collector = Collector::new(executor).with_commands(config.session.commands.clone());
    if let Some(ref name) = config.session.switch_name {
        collector = collector.with_switch_name(name.clone());
    }
    Ok(collector.collect().await?)
}
