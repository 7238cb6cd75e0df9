//! Plain-text rendering of a [`ComparisonReport`].

use std::fmt::Write;

use crate::ComparisonReport;

pub const DEFAULT_CHART_WIDTH: usize = 40;
const BAR: char = '#';

/// `Results:` and `Execution Times:` blocks, one line per algorithm.
pub fn format_report(report: &ComparisonReport) -> String {
    let mut out = String::from("Results:\n");
    for run in report {
        let _ = writeln!(out, "{}: {:?}", run.name(), run.positions);
    }

    out.push_str("\nExecution Times:\n");
    for run in report {
        let _ = writeln!(out, "{}: {:.6} seconds", run.name(), run.seconds());
    }
    out
}

/// Horizontal bar chart of seconds per algorithm.
///
/// The slowest entry spans `width` cells and the rest scale linearly. Any
/// non-zero time gets at least one cell so it stays visible.
pub fn format_bar_chart(timings: &[(&str, f64)], width: usize) -> String {
    let label_width = timings.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let slowest = timings.iter().map(|&(_, secs)| secs).fold(0.0_f64, f64::max);

    let mut out = String::from("Time (seconds)\n");
    for &(name, secs) in timings {
        let cells = bar_cells(secs, slowest, width);
        let bar: String = std::iter::repeat_n(BAR, cells).collect();
        let _ = writeln!(out, "{name:>label_width$} | {bar:<width$} {secs:.6}");
    }
    out
}

fn bar_cells(secs: f64, slowest: f64, width: usize) -> usize {
    if slowest <= 0.0 || secs <= 0.0 {
        return 0;
    }
    let cells = (secs / slowest * width as f64).round() as usize;
    cells.clamp(1, width.max(1))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{Algorithm, AlgorithmRun};

    fn sample_report() -> ComparisonReport {
        [
            (Algorithm::Naive, 2_000_000),
            (Algorithm::RabinKarp, 1_000_000),
        ]
        .into_iter()
        .map(|(algorithm, nanos)| AlgorithmRun {
            algorithm,
            positions: vec![0, 3],
            elapsed: Duration::from_nanos(nanos),
        })
        .collect()
    }

    #[test]
    fn report_lists_positions_then_times() {
        let text = format_report(&sample_report());
        assert_eq!(
            text,
            "Results:\n\
             Naive: [0, 3]\n\
             Rabin-Karp: [0, 3]\n\
             \n\
             Execution Times:\n\
             Naive: 0.002000 seconds\n\
             Rabin-Karp: 0.001000 seconds\n"
        );
    }

    #[test]
    fn chart_scales_to_slowest() {
        let chart = format_bar_chart(&[("Naive", 0.002), ("KMP", 0.001)], 10);
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines[0], "Time (seconds)");
        assert_eq!(lines[1], "Naive | ########## 0.002000");
        assert_eq!(lines[2], "  KMP | #####      0.001000");
    }

    #[test]
    fn tiny_times_stay_visible() {
        assert_eq!(bar_cells(1e-9, 1.0, 40), 1);
        assert_eq!(bar_cells(0.0, 1.0, 40), 0);
        assert_eq!(bar_cells(0.0, 0.0, 40), 0);
    }
}
