//! Run several matchers over the same input and time each one.

use std::time::{Duration, Instant};

use crate::{Algorithm, SearchOptions};

/// Time a single call. The clock starts right before `f` and stops right after.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// One matcher's result within a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub positions: Vec<usize>,
    pub elapsed: Duration,
}

impl AlgorithmRun {
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Results keyed by algorithm, in the order the algorithms were run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonReport {
    runs: Vec<AlgorithmRun>,
}

impl ComparisonReport {
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// `(name, seconds)` pairs, the input of a timing chart.
    pub fn timings(&self) -> Vec<(&'static str, f64)> {
        self.runs.iter().map(|run| (run.name(), run.seconds())).collect()
    }

    /// The shared positions if every run agrees, `None` otherwise or when empty.
    pub fn agreed_positions(&self) -> Option<&[usize]> {
        let (first, rest) = self.runs.split_first()?;
        rest.iter()
            .all(|run| run.positions == first.positions)
            .then_some(first.positions.as_slice())
    }
}

impl FromIterator<AlgorithmRun> for ComparisonReport {
    fn from_iter<I: IntoIterator<Item = AlgorithmRun>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = &'a AlgorithmRun;
    type IntoIter = std::slice::Iter<'a, AlgorithmRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Comparator {
    options: SearchOptions,
}

impl Comparator {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run all four matchers, one after another, in [`Algorithm::ALL`] order.
    pub fn run(&self, text: &[u8], pattern: &[u8]) -> ComparisonReport {
        self.run_selected(&Algorithm::ALL, text, pattern)
    }

    /// Run only `algorithms`, in the given order. Runs are sequential so no
    /// timing overlaps another.
    pub fn run_selected(&self, algorithms: &[Algorithm], text: &[u8], pattern: &[u8]) -> ComparisonReport {
        algorithms
            .iter()
            .map(|&algorithm| {
                let (positions, elapsed) =
                    measure(|| algorithm.find_all(text, pattern, &self.options));
                log::debug!(
                    "{algorithm}: {} matches in {}ns",
                    positions.len(),
                    elapsed.as_nanos()
                );
                AlgorithmRun {
                    algorithm,
                    positions,
                    elapsed,
                }
            })
            .collect()
    }
}

/// [`Comparator::run`] with default options.
pub fn compare(text: &[u8], pattern: &[u8]) -> ComparisonReport {
    Comparator::default().run(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_value() {
        let (value, elapsed) = measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed <= Duration::from_secs(1));
    }

    #[test]
    fn report_keeps_declaration_order() {
        let report = compare(b"ABABDABACDABABCABAB", b"ABABCABAB");
        let names: Vec<_> = report.iter().map(AlgorithmRun::name).collect();
        assert_eq!(names, ["Naive", "Rabin-Karp", "KMP", "Boyer-Moore"]);
        assert_eq!(report.agreed_positions(), Some(&[10][..]));
    }

    #[test]
    fn run_selected_keeps_caller_order() {
        let report = Comparator::default().run_selected(
            &[Algorithm::BoyerMoore, Algorithm::Naive],
            b"abcabc",
            b"bc",
        );
        assert_eq!(report.len(), 2);
        assert_eq!(report.iter().next().map(|run| run.algorithm), Some(Algorithm::BoyerMoore));
        assert!(report.get(Algorithm::Kmp).is_none());
        assert_eq!(report.get(Algorithm::Naive).map(|run| run.positions.clone()), Some(vec![1, 4]));
    }

    #[test]
    fn disagreement_is_detected() {
        let mut report = compare(b"aaaa", b"aa");
        report.runs[2].positions.pop();
        assert_eq!(report.agreed_positions(), None);
        assert_eq!(ComparisonReport::default().agreed_positions(), None);
    }

    #[test]
    fn timings_follow_runs() {
        let report = compare(b"HELLO", b"XYZ");
        let timings = report.timings();
        assert_eq!(timings.len(), 4);
        assert_eq!(timings[1].0, "Rabin-Karp");
        assert!(timings.iter().all(|&(_, secs)| secs >= 0.0));
    }
}
