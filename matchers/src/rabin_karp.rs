use crate::{ConfigError, StringSearch, collect_all, collect_first, is_degenerate};

/// Radix and prime modulus of the rolling hash.
///
/// Both are `u32` so every intermediate product of the `u64` hash arithmetic
/// stays in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarpConfig {
    radix: u32,
    modulus: u32,
}

impl RabinKarpConfig {
    pub const DEFAULT_RADIX: u32 = 256;
    pub const DEFAULT_MODULUS: u32 = 101;

    pub fn new(radix: u32, modulus: u32) -> Result<Self, ConfigError> {
        if modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(Self { radix, modulus })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self {
            radix: Self::DEFAULT_RADIX,
            modulus: Self::DEFAULT_MODULUS,
        }
    }
}

/// Pattern hash plus the weight of the window's leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarpState {
    radix: u64,
    modulus: u64,
    /// `radix^(m-1) mod modulus`
    high: u64,
    pattern_hash: u64,
}

impl RabinKarpState {
    pub fn pattern_hash(&self) -> u64 {
        self.pattern_hash
    }

    /// Horner's rule over `bytes`, reduced mod `modulus` at every step.
    fn hash(&self, bytes: &[u8]) -> u64 {
        bytes
            .iter()
            .fold(0, |h, &b| (self.radix * h + u64::from(b)) % self.modulus)
    }

    /// Slide the window one byte: drop `outgoing`, append `incoming`.
    #[inline]
    fn roll(&self, hash: u64, outgoing: u8, incoming: u8) -> u64 {
        let q = self.modulus;
        let drop = u64::from(outgoing) * self.high % q;
        // hash and drop are both < q, adding q first keeps the difference non-negative
        let without = (hash + q - drop) % q;
        (self.radix * without + u64::from(incoming)) % q
    }
}

pub struct RabinKarp;

impl StringSearch for RabinKarp {
    type Config = RabinKarpConfig;
    type State = RabinKarpState;

    fn build(config: &Self::Config, pattern: &[u8]) -> Self::State {
        let radix = u64::from(config.radix);
        let modulus = u64::from(config.modulus);

        let mut high = 1 % modulus;
        for _ in 1..pattern.len() {
            high = high * radix % modulus;
        }

        let mut state = RabinKarpState {
            radix,
            modulus,
            high,
            pattern_hash: 0,
        };
        state.pattern_hash = state.hash(pattern);
        state
    }

    fn find_with(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        collect_first(|on_match| rabin_karp_scan(state, text, pattern, on_match))
    }

    fn find_all_with(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        collect_all(|on_match| rabin_karp_scan(state, text, pattern, on_match))
    }
}

fn rabin_karp_scan(
    state: &RabinKarpState,
    text: &[u8],
    pattern: &[u8],
    on_match: &mut dyn FnMut(usize) -> bool,
) {
    if is_degenerate(text, pattern) {
        return;
    }

    let n = text.len();
    let m = pattern.len();
    let mut window = state.hash(&text[..m]);
    let mut collisions = 0usize;

    for i in 0..=n - m {
        if window == state.pattern_hash {
            // equal hashes are only a candidate
            if &text[i..i + m] == pattern {
                if !on_match(i) {
                    return;
                }
            } else {
                collisions += 1;
            }
        }
        if i < n - m {
            window = state.roll(window, text[i], text[i + m]);
        }
    }

    if collisions > 0 {
        log::trace!("rabin-karp: {collisions} spurious hash hits");
    }
}
