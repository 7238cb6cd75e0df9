use crate::{StringSearch, collect_all, collect_first, is_degenerate};

pub struct Naive;

impl StringSearch for Naive {
    type Config = ();
    type State = ();

    fn build(_config: &Self::Config, _pattern: &[u8]) -> Self::State {}

    fn find_with(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        collect_first(|on_match| naive_scan(text, pattern, on_match))
    }

    fn find_all_with(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        collect_all(|on_match| naive_scan(text, pattern, on_match))
    }
}

/// Try every alignment, comparing left to right and bailing on the first
/// mismatching byte. `on_match` returns `false` to stop the scan.
fn naive_scan(text: &[u8], pattern: &[u8], on_match: &mut dyn FnMut(usize) -> bool) {
    if is_degenerate(text, pattern) {
        return;
    }

    let n = text.len();
    let m = pattern.len();

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched && !on_match(i) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(Naive::find_bytes(hay, pat), Some(10));
        assert_eq!(Naive::find_all_bytes(hay, pat), vec![10]);
    }

    #[test]
    fn test_naive_not_found() {
        assert_eq!(Naive::find_bytes(b"hello world", b"rust"), None);
        assert!(Naive::find_all_bytes(b"hello world", b"rust").is_empty());
    }

    #[test]
    fn test_naive_degenerate() {
        let pat: &[u8] = b"";
        assert_eq!(Naive::find_bytes(b"abc", pat), None);
        assert!(Naive::find_all_bytes(b"abc", pat).is_empty());
        assert!(Naive::find_all_bytes(b"abc", b"abcd").is_empty());
        assert!(Naive::find_all_bytes(b"", b"a").is_empty());
    }

    #[test]
    fn test_naive_find_all_overlapping() {
        assert_eq!(Naive::find_all_bytes(b"aaaa", b"aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_naive_whole_text() {
        assert_eq!(Naive::find_all_bytes(b"abc", b"abc"), vec![0]);
    }

    #[test]
    fn test_naive_utf8() {
        let hay = "🌍hello🌍hello";
        let pat = "🌍hello";

        assert_eq!(pat.len(), 9);
        assert_eq!(Naive::find(hay, pat), Some(0));
        assert_eq!(Naive::find_all(hay, pat), vec![0, pat.len()]);
    }
}
