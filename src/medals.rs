use log::{debug, info, warn};

use medal_ranking::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

pub mod config_reader;
pub mod flags;
pub mod io_common;
pub mod io_csv;
pub mod io_feed;
pub mod io_xlsx;
pub mod snapshot;

use crate::args::Args;
use crate::medals::config_reader::*;

#[derive(Debug, Snafu)]
pub enum MedalError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display(""))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Unexpected feed content: {message}"))]
    FeedShape { message: String },
    #[snafu(display(""))]
    CsvOpen { source: csv::Error },
    #[snafu(display("Error reading CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Line {lineno}: missing or malformed field {field}"))]
    BadField { lineno: usize, field: String },
    #[snafu(display("Error opening workbook {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display(""))]
    EmptyExcel {},
    #[snafu(display("Line {lineno}: unexpected cell content {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },
    #[snafu(display("Error writing the CSV snapshot"))]
    SnapshotWrite { source: csv::Error },
    #[snafu(display("Error flushing the CSV snapshot"))]
    SnapshotFlush { source: std::io::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Ranking failed: {source}"))]
    Ranking { source: RankingErrors },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type MedalResult<T> = Result<T, MedalError>;

/// One medal row as produced by the input readers, before validation.
///
/// The feed reader fills in the NOC code; the tabular readers carry the
/// already-formatted candidate string.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedMedalRow {
    pub noc: Option<String>,
    pub candidate: Option<String>,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub total: Option<u64>,
}

/// Turns parsed rows into medal records with the canonical identity.
///
/// The identity string is computed once here (NOC plus flag glyph for feed
/// rows); every downstream table joins on it. Sum and uniqueness checks are
/// the core's job.
pub fn validate_rows(rows: &[ParsedMedalRow]) -> MedalResult<Vec<MedalRecord>> {
    let mut res: Vec<MedalRecord> = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        let candidate = match (&row.candidate, &row.noc) {
            (Some(c), _) => c.clone(),
            (None, Some(noc)) => flags::display_name(noc),
            (None, None) => {
                whatever!("medal row without a candidate identity: {:?}", row)
            }
        };
        let total = row.total.unwrap_or(row.gold + row.silver + row.bronze);
        res.push(MedalRecord {
            candidate,
            gold: row.gold,
            silver: row.silver,
            bronze: row.bronze,
            total,
        });
    }
    debug!("validate_rows: {:?} records", res.len());
    Ok(res)
}

fn read_rows(
    path: &str,
    provider: &str,
    worksheet: &Option<String>,
) -> MedalResult<Vec<ParsedMedalRow>> {
    info!(
        "Attempting to read medal table {:?} with provider {:?}",
        path, provider
    );
    match provider {
        "feed" => io_feed::read_feed_json(path),
        "csv" => io_csv::read_csv_table(path),
        "xlsx" => io_xlsx::read_excel_table(path, worksheet),
        x => whatever!("Input type not implemented {:?}", x),
    }
}

fn comparison_to_json(rows: &[ComparisonRow]) -> Vec<JSValue> {
    rows.iter()
        .map(|row| {
            json!({
                "candidate": row.candidate,
                "rankMj": row.rank_mj,
                "majorityGrade": row.grade,
                "rankLexico": row.rank_lexico,
                "rankTotal": row.rank_total,
                "gold": row.gold,
                "silver": row.silver,
                "bronze": row.bronze,
                "total": row.total,
            })
        })
        .collect()
}

fn ballots_to_json(ballots: &[Ballot]) -> Vec<JSValue> {
    ballots
        .iter()
        .map(|b| {
            let mut weights = serde_json::Map::new();
            for (label, w) in b.weights.iter() {
                weights.insert(label.clone(), json!(w));
            }
            json!({ "candidate": b.candidate, "weights": weights })
        })
        .collect()
}

fn build_summary_js(config: &MedalConfig, rules: &RankingRules, rv: &RankingResult) -> JSValue {
    let c = OutputConfig {
        contest: config.output_settings.contest_name.clone(),
        date: config.output_settings.contest_date.clone(),
        min_medals: rules.min_total,
        max_total: rv.max_total,
    };
    json!({
        "config": c,
        "comparison": comparison_to_json(&rv.comparison),
        "meritProfiles": ballots_to_json(&rv.ballots),
        "warnings": rv.warnings,
    })
}

fn log_comparison(rv: &RankingResult) {
    info!(
        "{:<28} {:>6} {:<14} {:>7} {:>6}   {:>4} {:>4} {:>4} {:>5}",
        "candidate", "mj", "grade", "lexico", "total", "G", "S", "B", "sum"
    );
    for row in rv.comparison.iter() {
        info!(
            "{:<28} {:>6} {:<14} {:>7} {:>6}   {:>4} {:>4} {:>4} {:>5}",
            row.candidate,
            row.rank_mj,
            row.grade,
            row.rank_lexico,
            row.rank_total,
            row.gold,
            row.silver,
            row.bronze,
            row.total
        );
    }
}

/// End-to-end run for the command line: configuration, input, snapshot,
/// ranking, summary and reference check.
pub fn run_tally(args: &Args) -> MedalResult<()> {
    let config = match &args.config {
        Some(p) => read_config(p)?,
        None => MedalConfig::default_config(),
    };
    info!("config: {:?}", config);

    let rules = validate_rules(&config, args.min_medals)?;

    let mut rows: Vec<ParsedMedalRow> = Vec::new();
    if let Some(input) = &args.input {
        let provider = args.input_type.clone().unwrap_or_else(|| "csv".to_string());
        rows = read_rows(input, provider.as_str(), &args.excel_worksheet_name)?;
    } else {
        if config.sources.is_empty() {
            whatever!("no input provided: pass --input or a configuration with medalFileSources");
        }
        // Source paths are relative to the configuration file.
        let root_p = match &args.config {
            Some(p) => Path::new(p.as_str())
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
            None => PathBuf::new(),
        };
        for src in config.sources.iter() {
            let p: PathBuf = [root_p.as_path(), Path::new(src.file_path.as_str())]
                .iter()
                .collect();
            let p2 = p.as_path().display().to_string();
            let mut file_rows = read_rows(&p2, src.provider.as_str(), &src.worksheet_name)?;
            rows.append(&mut file_rows);
        }
    }
    debug!("rows: {:?}", rows);

    let records = validate_rows(&rows)?;

    // The snapshot is taken before ranking and has no effect on the result.
    if let Some(dir) = &args.snapshot_dir {
        let p = snapshot::write_snapshot(&records, dir)?;
        info!("Raw medal table snapshotted to {:?}", p);
    }

    let result = run_ranking(&records, &rules).context(RankingSnafu {})?;
    for w in result.warnings.iter() {
        warn!("data-quality warning: {}", w);
    }
    log_comparison(&result);

    let summary = build_summary_js(&config, &rules, &result);
    let pretty_js_stats = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
    match &args.out {
        Some(p) if p != "stdout" => {
            fs::write(p, &pretty_js_stats).context(WritingSummarySnafu { path: p.clone() })?;
            info!("Summary written to {:?}", p);
        }
        _ => {
            println!("{}", pretty_js_stats);
        }
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            whatever!("Difference detected between calculated summary and reference summary")
        }
    }

    Ok(())
}
