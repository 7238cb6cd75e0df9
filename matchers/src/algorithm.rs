use std::fmt;
use std::str::FromStr;

use crate::{BM, KMP, Naive, RabinKarp, RabinKarpConfig, StringSearch, UnknownAlgorithm};

/// The matchers a comparison can run, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Naive,
    #[value(alias = "rk")]
    RabinKarp,
    Kmp,
    #[value(alias = "bm")]
    BoyerMoore,
}

/// Knobs for the matchers that have any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub rabin_karp: RabinKarpConfig,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::RabinKarp,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
        }
    }

    pub fn find_all(self, text: &[u8], pattern: &[u8], options: &SearchOptions) -> Vec<usize> {
        match self {
            Algorithm::Naive => Naive::find_all_bytes(text, pattern),
            Algorithm::RabinKarp => {
                let state = RabinKarp::build(&options.rabin_karp, pattern);
                RabinKarp::find_all_with(&state, text, pattern)
            }
            Algorithm::Kmp => KMP::find_all_bytes(text, pattern),
            Algorithm::BoyerMoore => BM::find_all_bytes(text, pattern),
        }
    }

    pub fn find(self, text: &[u8], pattern: &[u8], options: &SearchOptions) -> Option<usize> {
        match self {
            Algorithm::Naive => Naive::find_bytes(text, pattern),
            Algorithm::RabinKarp => {
                let state = RabinKarp::build(&options.rabin_karp, pattern);
                RabinKarp::find_with(&state, text, pattern)
            }
            Algorithm::Kmp => KMP::find_bytes(text, pattern),
            Algorithm::BoyerMoore => BM::find_bytes(text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "naive" => Ok(Algorithm::Naive),
            "rabinkarp" | "rk" => Ok(Algorithm::RabinKarp),
            "kmp" | "knuthmorrispratt" => Ok(Algorithm::Kmp),
            "boyermoore" | "bm" => Ok(Algorithm::BoyerMoore),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
            assert_eq!(algo.to_string(), algo.name());
        }
    }

    #[test]
    fn cli_spellings_parse() {
        assert_eq!("rabin-karp".parse::<Algorithm>(), Ok(Algorithm::RabinKarp));
        assert_eq!("RK".parse::<Algorithm>(), Ok(Algorithm::RabinKarp));
        assert_eq!("boyer_moore".parse::<Algorithm>(), Ok(Algorithm::BoyerMoore));
        assert_eq!("bm".parse::<Algorithm>(), Ok(Algorithm::BoyerMoore));
        assert_eq!("Kmp".parse::<Algorithm>(), Ok(Algorithm::Kmp));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "horspool".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("horspool".to_string()));
        assert!(err.to_string().contains("horspool"));
    }

    #[test]
    fn dispatch_reaches_every_matcher() {
        let options = SearchOptions::default();
        for algo in Algorithm::ALL {
            assert_eq!(algo.find_all(b"AAAAA", b"AA", &options), vec![0, 1, 2, 3], "{algo}");
            assert_eq!(algo.find(b"xxAA", b"AA", &options), Some(2), "{algo}");
        }
    }
}
