//! Command-line pipeline for the Payroll Audit Engine.
//!
//! `audit` reconciles two timesheet exports and saves the discrepancy CSV;
//! `report` assembles the audit report from the exports and a previously
//! saved discrepancy file. All inputs are explicit path arguments.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};

use payroll_audit::config::AuditConfig;
use payroll_audit::error::{AuditError, AuditResult};
use payroll_audit::io::{load_discrepancy_csv, load_timesheet_csv, save_discrepancy_csv};
use payroll_audit::reconcile::{discrepancies, reconcile};
use payroll_audit::report::{build_report, render_text};

#[derive(Parser)]
#[command(name = "payroll-audit")]
#[command(about = "Reconcile TABS and SAP timesheet exports and report hour discrepancies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to an audit configuration YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile two timesheet exports and save the discrepancy CSV
    Audit {
        /// Current TABS payroll CSV
        #[arg(long)]
        tabs: PathBuf,

        /// SAP payroll CSV
        #[arg(long)]
        sap: PathBuf,

        /// Match tolerance in hours, overriding the configuration
        #[arg(long)]
        tolerance: Option<Decimal>,

        /// Destination for the discrepancy CSV
        #[arg(short, long, default_value = "payroll_discrepancy_report.csv")]
        out: PathBuf,
    },

    /// Assemble the audit report from the exports and a discrepancy CSV
    Report {
        /// Current TABS payroll CSV
        #[arg(long)]
        tabs: PathBuf,

        /// SAP payroll CSV
        #[arg(long)]
        sap: PathBuf,

        /// Discrepancy CSV produced by `audit`
        #[arg(long)]
        discrepancies: PathBuf,

        /// Previous-period TABS CSV for the period comparison
        #[arg(long)]
        prior_tabs: Option<PathBuf>,

        /// Write the rendered summary to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_audit=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Audit {
            tabs,
            sap,
            tolerance,
            out,
        } => run_audit(&tabs, &sap, tolerance, &out, &config),
        Commands::Report {
            tabs,
            sap,
            discrepancies,
            prior_tabs,
            out,
            json,
        } => run_report(
            &tabs,
            &sap,
            &discrepancies,
            prior_tabs.as_deref(),
            out.as_deref(),
            json.as_deref(),
            &config,
        ),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> AuditResult<AuditConfig> {
    match path {
        Some(path) => AuditConfig::load(path),
        None => Ok(AuditConfig::default()),
    }
}

fn run_audit(
    tabs: &Path,
    sap: &Path,
    tolerance: Option<Decimal>,
    out: &Path,
    config: &AuditConfig,
) -> AuditResult<()> {
    let tabs_records = load_timesheet_csv(tabs)?;
    info!(records = tabs_records.len(), path = %tabs.display(), "loaded TABS export");

    let sap_records = load_timesheet_csv(sap)?;
    info!(records = sap_records.len(), path = %sap.display(), "loaded SAP export");

    let pairs = reconcile(
        &tabs_records,
        &sap_records,
        tolerance.unwrap_or(config.tolerance),
    )?;
    let mismatches = discrepancies(&pairs);

    println!("Total records compared: {}", pairs.len());
    println!("Mismatches found: {}", mismatches.len());

    save_discrepancy_csv(out, &mismatches)?;
    info!(mismatches = mismatches.len(), path = %out.display(), "saved discrepancy report");
    println!("Discrepancy report saved to: {}", out.display());

    Ok(())
}

fn run_report(
    tabs: &Path,
    sap: &Path,
    mismatch_path: &Path,
    prior_tabs: Option<&Path>,
    out: Option<&Path>,
    json: Option<&Path>,
    config: &AuditConfig,
) -> AuditResult<()> {
    let tabs_records = load_timesheet_csv(tabs)?;
    let sap_records = load_timesheet_csv(sap)?;
    let mismatches = load_discrepancy_csv(mismatch_path)?;
    info!(
        tabs = tabs_records.len(),
        sap = sap_records.len(),
        mismatches = mismatches.len(),
        "loaded report inputs"
    );

    let prior_records = match prior_tabs {
        Some(path) => Some(load_timesheet_csv(path)?),
        None => None,
    };

    let report = build_report(
        &tabs_records,
        &sap_records,
        &mismatches,
        prior_records.as_deref(),
        config,
    );
    info!(report_id = %report.report_id, "assembled audit report");

    let text = render_text(&report);
    match out {
        Some(path) => {
            write_file(path, &text)?;
            println!("Audit report saved to: {}", path.display());
        }
        None => print!("{text}"),
    }

    if let Some(path) = json {
        let body = serde_json::to_string_pretty(&report).map_err(|e| AuditError::Io {
            path: path.display().to_string(),
            source: std::io::Error::other(e),
        })?;
        write_file(path, &body)?;
        println!("Report JSON saved to: {}", path.display());
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> AuditResult<()> {
    fs::write(path, contents).map_err(|e| AuditError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
