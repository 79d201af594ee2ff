// ============================================================
// Layer 6 — Terminal Charts
// ============================================================
// Renders the training curves straight into the terminal so a
// run can be judged without leaving the shell:
//
//   Training and validation loss
//   Loss
//      0.6921 |o
//             | *
//             |  o*
//             |    o *
//      0.3310 |       o  *  *  *
//             +-------------------
//              1               15
//                     Epoch
//    o Training loss   * Validation loss
//
// Points are placed on a fixed character grid. Later series
// overwrite earlier ones where they land on the same cell.
// Non-finite values (a diverged run) are skipped, not drawn.

use std::fmt::Write;

const PLOT_WIDTH:  usize = 60;
const PLOT_HEIGHT: usize = 15;
const AXIS_WIDTH:  usize = 10;

/// One line on a chart
#[derive(Debug, Clone)]
pub struct Series {
    pub label:  String,
    pub marker: char,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, marker: char, values: Vec<f64>) -> Self {
        Self { label: label.into(), marker, values }
    }
}

/// Values are indexed by epoch, starting at epoch 1.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title:   String,
    pub x_label: String,
    pub y_label: String,
    pub series:  Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title:   title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series:  Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

pub fn render_chart(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);

    let finite: Vec<f64> = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .collect();

    if finite.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    let epochs = chart.series.iter().map(|s| s.values.len()).max().unwrap_or(0);

    let mut grid = vec![vec![' '; PLOT_WIDTH]; PLOT_HEIGHT];
    for series in &chart.series {
        for (i, &v) in series.values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            let col = column_of(i, epochs);
            let row = ((hi - v) / (hi - lo) * (PLOT_HEIGHT - 1) as f64).round() as usize;
            grid[row.min(PLOT_HEIGHT - 1)][col] = series.marker;
        }
    }

    let _ = writeln!(out, "{}", chart.y_label);
    for (r, cells) in grid.iter().enumerate() {
        let tick = if r == 0 {
            format!("{hi:>w$.4}", w = AXIS_WIDTH - 1)
        } else if r == PLOT_HEIGHT - 1 {
            format!("{lo:>w$.4}", w = AXIS_WIDTH - 1)
        } else {
            " ".repeat(AXIS_WIDTH - 1)
        };
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{tick} |{}", line.trim_end());
    }
    let _ = writeln!(out, "{} +{}", " ".repeat(AXIS_WIDTH - 1), "-".repeat(PLOT_WIDTH));

    // epoch numbers under the first and last columns
    let last_col = column_of(epochs.saturating_sub(1), epochs);
    let mut ticks = format!("{}1", " ".repeat(AXIS_WIDTH + 1));
    if epochs > 1 {
        let last = epochs.to_string();
        let pad  = last_col.saturating_sub(last.len());
        let _ = write!(ticks, "{}{}", " ".repeat(pad), last);
    }
    let _ = writeln!(out, "{ticks}");
    let _ = writeln!(
        out,
        "{}{}",
        " ".repeat(AXIS_WIDTH + 1 + PLOT_WIDTH.saturating_sub(chart.x_label.len()) / 2),
        chart.x_label
    );

    let legend: Vec<String> = chart
        .series
        .iter()
        .map(|s| format!("{} {}", s.marker, s.label))
        .collect();
    let _ = writeln!(out, "  {}", legend.join("   "));
    out
}

fn column_of(index: usize, epochs: usize) -> usize {
    if epochs <= 1 {
        0
    } else {
        index * (PLOT_WIDTH - 1) / (epochs - 1)
    }
}
