mod algorithm;
mod bm;
mod error;
mod kmp;
mod naive;
mod rabin_karp;

pub mod compare;
pub mod render;

/// A single-pattern exact matcher.
///
/// `Config` holds pattern-independent knobs, `State` holds the tables built
/// from the pattern. A state is only valid for the pattern it was built from.
///
/// Positions are byte offsets. An empty pattern, or a pattern longer than the
/// text, matches nowhere.
pub trait StringSearch {
    type Config: Default;
    type State;

    fn build(config: &Self::Config, pattern: &[u8]) -> Self::State;
    fn find_with(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find_all_with(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize>;

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        let state = Self::build(&Self::Config::default(), pattern);
        Self::find_with(&state, text, pattern)
    }
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        let state = Self::build(&Self::Config::default(), pattern);
        Self::find_all_with(&state, text, pattern)
    }
    fn find(text: &str, pattern: &str) -> Option<usize> {
        Self::find_bytes(text.as_bytes(), pattern.as_bytes())
    }
    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        Self::find_all_bytes(text.as_bytes(), pattern.as_bytes())
    }
}

/// True when no position can match: empty pattern or pattern longer than text.
#[inline]
pub(crate) fn is_degenerate(text: &[u8], pattern: &[u8]) -> bool {
    pattern.is_empty() || pattern.len() > text.len()
}

/// Runs a scan that reports matches through a callback, collecting every one.
pub(crate) fn collect_all(scan: impl FnOnce(&mut dyn FnMut(usize) -> bool)) -> Vec<usize> {
    let mut result = Vec::new();
    scan(&mut |pos: usize| {
        result.push(pos);
        true
    });
    result
}

/// Runs a scan that reports matches through a callback, stopping at the first.
pub(crate) fn collect_first(scan: impl FnOnce(&mut dyn FnMut(usize) -> bool)) -> Option<usize> {
    let mut first = None;
    scan(&mut |pos: usize| {
        first = Some(pos);
        false
    });
    first
}

pub use algorithm::{Algorithm, SearchOptions};
pub use bm::{BM, BmTables, build_bad_char_table, build_good_suffix_table};
pub use compare::{AlgorithmRun, ComparisonReport, Comparator, compare, measure};
pub use error::{ConfigError, UnknownAlgorithm};
pub use kmp::{KMP, build_lps};
pub use naive::Naive;
pub use rabin_karp::{RabinKarp, RabinKarpConfig, RabinKarpState};
