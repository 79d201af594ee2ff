// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Appends each epoch's metrics to a CSV file so a run can be
// inspected or re-plotted after the process exits.
//
// Output file: <output_dir>/metrics.csv
//
//   epoch,loss,accuracy,val_loss,val_accuracy
//   1,0.682114,0.571053,0.649870,0.638947
//   2,0.601552,0.702105,0.571204,0.744737
//   ...
//
// A diverged run writes "NaN" cells; nothing is filtered.
//
// "accuracy" counts a row as positive when its logit is above 0
// (sigmoid ≥ 0.5), not when the raw logit is above 0.5, so values
// are not comparable with histories that thresholded raw logits.
//
// Each training run starts a fresh file.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::history::EpochMetrics;

const HEADER: &str = "epoch,loss,accuracy,val_loss,val_accuracy";

pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Start a new log: any metrics.csv from an earlier run is replaced
    /// by a file holding only the header.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");
        if csv_path.exists() {
            tracing::info!("Replacing metrics from a previous run: '{}'", csv_path.display());
        }
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "{HEADER}")?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one epoch as a CSV row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{:.6},{:.6},{:.6},{:.6}",
            m.epoch, m.loss, m.accuracy, m.val_loss, m.val_accuracy,
        )?;
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
