use matchers::{Algorithm, RabinKarpConfig, SearchOptions};
use quickcheck::{TestResult, quickcheck};

/// Squash arbitrary bytes onto `alphabet` symbols so matches actually happen.
fn squash(bytes: &[u8], alphabet: u8) -> Vec<u8> {
    bytes.iter().map(|b| b'a' + b % alphabet).collect()
}

fn naive_reference(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn all_agree(text: &[u8], pattern: &[u8], options: &SearchOptions) -> bool {
    let expected = naive_reference(text, pattern);
    Algorithm::ALL
        .iter()
        .all(|algo| algo.find_all(text, pattern, options) == expected)
}

quickcheck! {
    fn binary_alphabet_agrees(text: Vec<u8>, pattern: Vec<u8>) -> TestResult {
        if pattern.len() > 6 {
            return TestResult::discard();
        }
        let text = squash(&text, 2);
        let pattern = squash(&pattern, 2);
        TestResult::from_bool(all_agree(&text, &pattern, &SearchOptions::default()))
    }

    fn small_alphabet_agrees(text: Vec<u8>, pattern: Vec<u8>) -> TestResult {
        if pattern.len() > 4 {
            return TestResult::discard();
        }
        let text = squash(&text, 3);
        let pattern = squash(&pattern, 3);
        TestResult::from_bool(all_agree(&text, &pattern, &SearchOptions::default()))
    }

    fn raw_bytes_agree(text: Vec<u8>, pattern: Vec<u8>) -> bool {
        all_agree(&text, &pattern, &SearchOptions::default())
    }

    fn substring_is_always_found(text: Vec<u8>, start: usize, len: usize) -> TestResult {
        let text = squash(&text, 4);
        if text.is_empty() {
            return TestResult::discard();
        }
        let start = start % text.len();
        let len = 1 + len % (text.len() - start);
        let pattern = text[start..start + len].to_vec();

        let options = SearchOptions::default();
        TestResult::from_bool(Algorithm::ALL.iter().all(|algo| {
            let positions = algo.find_all(&text, &pattern, &options);
            positions.contains(&start) && positions.windows(2).all(|w| w[0] < w[1])
        }))
    }

    fn colliding_hashes_agree(text: Vec<u8>, pattern: Vec<u8>, modulus: u8) -> TestResult {
        if pattern.len() > 5 {
            return TestResult::discard();
        }
        let Ok(rabin_karp) = RabinKarpConfig::new(256, u32::from(modulus % 7) + 1) else {
            return TestResult::discard();
        };
        let text = squash(&text, 2);
        let pattern = squash(&pattern, 2);
        TestResult::from_bool(all_agree(&text, &pattern, &SearchOptions { rabin_karp }))
    }
}
