//! `docsync status` — per-pair doc header freshness.
//!
//! Exits non-zero when any pair needs attention, so the command doubles as a
//! CI drift gate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use docsync_core::{config, SyncPair};
use docsync_sync::{freshness, PairState};

/// Arguments for `docsync status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    /// Base directory relative pair paths resolve against (default: current directory).
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let base = config::resolve_base(self.base).context("could not resolve base directory")?;
        let pairs = config::builtin_pairs();

        let report = build_report(&pairs, &base)?;
        if self.json {
            print_json(&report)?;
        } else {
            print_table(&report);
        }

        if report.needs_sync_count > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct PairStatus {
    name: String,
    readme: String,
    source: String,
    state: PairState,
    detail: String,
}

#[derive(Debug, Clone)]
struct StatusReport {
    needs_sync_count: usize,
    pairs: Vec<PairStatus>,
}

#[derive(Serialize)]
struct StatusReportJson {
    summary: StatusSummaryJson,
    pairs: Vec<PairStatusJson>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    pairs: usize,
    needs_sync: usize,
}

#[derive(Serialize)]
struct PairStatusJson {
    name: String,
    readme: String,
    source: String,
    status: String,
    detail: String,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "pair")]
    pair: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "detail")]
    detail: String,
}

fn build_report(pairs: &[SyncPair], base: &std::path::Path) -> Result<StatusReport> {
    let mut rows = Vec::new();
    for pair in pairs {
        let state = freshness::check(pair, base)
            .with_context(|| format!("status check failed for '{}'", pair.name))?;
        rows.push(PairStatus {
            name: pair.name.0.clone(),
            readme: pair.readme.display().to_string(),
            source: pair.source.display().to_string(),
            detail: state_detail(&state),
            state,
        });
    }

    let needs_sync_count = rows
        .iter()
        .filter(|row| !matches!(row.state, PairState::Current))
        .count();

    Ok(StatusReport {
        needs_sync_count,
        pairs: rows,
    })
}

fn print_json(report: &StatusReport) -> Result<()> {
    let payload = StatusReportJson {
        summary: StatusSummaryJson {
            pairs: report.pairs.len(),
            needs_sync: report.needs_sync_count,
        },
        pairs: report
            .pairs
            .iter()
            .map(|row| PairStatusJson {
                name: row.name.clone(),
                readme: row.readme.clone(),
                source: row.source.clone(),
                status: state_key(&row.state).to_string(),
                detail: row.detail.clone(),
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(report: &StatusReport) {
    println!(
        "docsync v{} | {} pairs | {} need sync",
        env!("CARGO_PKG_VERSION"),
        report.pairs.len(),
        report.needs_sync_count,
    );

    if report.pairs.is_empty() {
        println!("No pairs configured.");
        return;
    }

    println!(
        "Indicators: {} CURRENT  {} OUT OF SYNC  {} MISSING",
        state_indicator(&PairState::Current),
        state_indicator(&PairState::OutOfSync),
        state_indicator(&PairState::MissingReadme {
            path: PathBuf::new(),
        }),
    );

    let table_rows: Vec<StatusTableRow> = report
        .pairs
        .iter()
        .map(|row| StatusTableRow {
            pair: row.name.clone(),
            status: state_label(&row.state).to_string(),
            detail: row.detail.clone(),
        })
        .collect();
    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{table}");

    if report.needs_sync_count > 0 {
        println!("Run 'docsync sync' to update stale headers.");
    }
}

fn state_key(state: &PairState) -> &'static str {
    match state {
        PairState::Current => "current",
        PairState::OutOfSync => "out_of_sync",
        PairState::MissingReadme { .. } => "missing_readme",
        PairState::MissingSource { .. } => "missing_source",
    }
}

fn state_label(state: &PairState) -> &'static str {
    match state {
        PairState::Current => "CURRENT",
        PairState::OutOfSync => "OUT OF SYNC",
        PairState::MissingReadme { .. } => "NO README",
        PairState::MissingSource { .. } => "NO SOURCE",
    }
}

fn state_indicator(state: &PairState) -> String {
    match state {
        PairState::Current => "■".green().bold().to_string(),
        PairState::OutOfSync => "■".yellow().bold().to_string(),
        PairState::MissingReadme { .. } | PairState::MissingSource { .. } => {
            "■".red().bold().to_string()
        }
    }
}

fn state_detail(state: &PairState) -> String {
    match state {
        PairState::Current => "up to date".to_string(),
        PairState::OutOfSync => "header differs from README".to_string(),
        PairState::MissingReadme { path } => format!("readme missing: {}", path.display()),
        PairState::MissingSource { path } => format!("source missing: {}", path.display()),
    }
}
