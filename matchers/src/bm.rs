use crate::{StringSearch, collect_all, collect_first, is_degenerate};

pub struct BM;

/// Both Boyer–Moore shift tables for one pattern.
#[derive(Debug, Clone)]
pub struct BmTables {
    bad_char: [isize; 256],
    good_suffix: Vec<usize>,
}

impl BmTables {
    pub fn bad_char(&self) -> &[isize; 256] {
        &self.bad_char
    }

    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }
}

impl StringSearch for BM {
    type Config = ();
    type State = BmTables;

    fn build(_config: &Self::Config, pattern: &[u8]) -> Self::State {
        BmTables {
            bad_char: build_bad_char_table(pattern),
            good_suffix: build_good_suffix_table(pattern),
        }
    }

    fn find_with(tables: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        collect_first(|on_match| bm_scan(tables, text, pattern, on_match))
    }

    fn find_all_with(tables: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        collect_all(|on_match| bm_scan(tables, text, pattern, on_match))
    }
}

/// Build the bad-character table for Boyer–Moore: the last index of each
/// byte in `pattern`, or -1 when the byte does not occur.
pub fn build_bad_char_table(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Build the good-suffix shift table for Boyer–Moore.
///
/// `shift[j]` is how far to move the pattern when `pattern[j..]` matched and
/// `pattern[j - 1]` did not; `shift[0]` is the shift after a full match.
/// Has `m + 1` entries, all in `1..=m` for a non-empty pattern.
pub fn build_good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![m; m + 1];
    // border_pos[i]: start of the widest border of pattern[i..]
    let mut border_pos = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border_pos[i] = j;

    // Case 1: the matched suffix reoccurs earlier in the pattern.
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == m {
                shift[j] = j - i;
            }
            j = border_pos[j];
        }
        i -= 1;
        j -= 1;
        border_pos[i] = j;
    }

    // Case 2: only a prefix of the pattern matches a part of the suffix.
    j = border_pos[0];
    for (i, value) in shift.iter_mut().enumerate() {
        if *value == m {
            *value = j;
        }
        if i == j {
            j = border_pos[j];
        }
    }

    shift
}

fn bm_scan(tables: &BmTables, text: &[u8], pattern: &[u8], on_match: &mut dyn FnMut(usize) -> bool) {
    if is_degenerate(text, pattern) {
        return;
    }
    debug_assert_eq!(tables.good_suffix.len(), pattern.len() + 1);

    let n = text.len();
    let m = pattern.len();
    let bad_char = &tables.bad_char;
    let good_suffix = &tables.good_suffix;

    let mut s = 0usize; // where the current pattern alignment starts in text

    while s <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }

        if j < 0 {
            if !on_match(s) {
                return;
            }
            s += good_suffix[0];
        } else {
            let mismatch_index = j as usize;
            let bad_byte = text[s + mismatch_index];

            // may be zero or negative when the byte occurs right of j
            let bc_shift = j - bad_char[bad_byte as usize];
            let gs_shift = good_suffix[mismatch_index + 1];

            s += if bc_shift > gs_shift as isize {
                bc_shift as usize
            } else {
                gs_shift
            };
        }
    }
}
