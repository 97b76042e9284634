use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use stopwatch_core::{hms_cs, LapStats, Split};

/// Write the current session to a timestamped CSV file under `dir` and
/// return the path. The file carries a summary block (total time and lap
/// statistics) followed by one row per split.
pub fn export_session(dir: &Path, elapsed_ms: u64, splits: &[Split]) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(format!("stopwatch-session-{}.csv", sanitize_stamp(&stamp)));
    write_csv(&path, &stamp, elapsed_ms, splits)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn write_csv(path: &Path, stamp: &str, elapsed_ms: u64, splits: &[Split]) -> Result<()> {
    // Summary rows are two columns, split rows three.
    let mut w = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    w.write_record(["Stopwatch Session", stamp])?;
    w.write_record(["Total Time", hms_cs(elapsed_ms).as_str()])?;
    if let Some(stats) = LapStats::from_splits(splits) {
        w.write_record(["Average Lap", hms_cs(stats.average_ms).as_str()])?;
        w.write_record(["Best Lap", hms_cs(stats.best_ms).as_str()])?;
        w.write_record(["Worst Lap", hms_cs(stats.worst_ms).as_str()])?;
    }

    w.write_record(["Split", "Total Time", "Lap Time"])?;
    for split in splits {
        let id = split.id.to_string();
        w.write_record([id.as_str(), split.total_label.as_str(), split.lap_label.as_str()])?;
    }

    w.flush()?;
    Ok(())
}

/// Strip the path and drive separators a locale-formatted timestamp can
/// contain so the stamp is safe inside a file name.
fn sanitize_stamp(s: &str) -> String {
    s.replace(['/', '\\', ':'], "-")
}
