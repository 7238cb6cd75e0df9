use thiserror::Error;

/// Rejected matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rabin-karp modulus must be at least 1")]
    ZeroModulus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected one of: naive, rabin-karp, kmp, boyer-moore)")]
pub struct UnknownAlgorithm(pub String);
