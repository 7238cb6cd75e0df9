use crate::{StringSearch, collect_all, collect_first, is_degenerate};

pub struct KMP;

impl StringSearch for KMP {
    type Config = ();
    type State = Vec<usize>;

    fn build(_config: &Self::Config, pattern: &[u8]) -> Self::State {
        build_lps(pattern)
    }

    fn find_with(lps: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        collect_first(|on_match| kmp_scan(lps, text, pattern, on_match))
    }

    fn find_all_with(lps: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        collect_all(|on_match| kmp_scan(lps, text, pattern, on_match))
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table
pub fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // retry pattern[i] against the next shorter border
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

fn kmp_scan(lps: &[usize], text: &[u8], pattern: &[u8], on_match: &mut dyn FnMut(usize) -> bool) {
    if is_degenerate(text, pattern) {
        return;
    }
    debug_assert_eq!(lps.len(), pattern.len(), "LPS table built for another pattern");

    let n = text.len();
    let m = pattern.len();

    let mut i = 0usize; // index in text, never moves backwards
    let mut j = 0usize; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                if !on_match(i - j) {
                    return;
                }
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
}
