// CSV snapshots of the raw medal table, one file per run.

use crate::medals::*;

use chrono::Local;
use log::debug;
use medal_ranking::MedalRecord;
use snafu::prelude::*;
use std::path::PathBuf;

/// Writes the raw table to `<dir>/medal_data_<YYYYmmdd_HHh>.csv` and returns
/// the path. Purely observational: ranking does not depend on it.
pub fn write_snapshot(records: &[MedalRecord], dir: &str) -> MedalResult<PathBuf> {
    let suffix = Local::now().format("%Y%m%d_%Hh").to_string();
    let path: PathBuf = [dir, format!("medal_data_{}.csv", suffix).as_str()]
        .iter()
        .collect();
    debug!("write_snapshot: {:?}", path);

    let mut wtr = csv::Writer::from_path(path.as_path()).context(SnapshotWriteSnafu {})?;
    wtr.write_record(["Country", "Gold", "Silver", "Bronze", "Total"])
        .context(SnapshotWriteSnafu {})?;
    for r in records.iter() {
        wtr.write_record(&[
            r.candidate.clone(),
            r.gold.to_string(),
            r.silver.to_string(),
            r.bronze.to_string(),
            r.total.to_string(),
        ])
        .context(SnapshotWriteSnafu {})?;
    }
    wtr.flush().context(SnapshotFlushSnafu {})?;
    Ok(path)
}
