use std::process::ExitCode;
use std::time::Duration;

use matchers::{Algorithm, ComparisonReport, Comparator};

const REPEATS: usize = 5;

struct Workload {
    name: &'static str,
    text: Vec<u8>,
    patterns: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
struct ResultEntry {
    algo: Algorithm,
    workload: &'static str,
    pattern: &'static str,
    duration: Duration,
    found_count: usize,
}

#[derive(Debug)]
struct Mismatch {
    algo: Algorithm,
    workload: &'static str,
    pattern: &'static str,
    expected: usize,
    actual: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("--- Starting Matcher Benchmark ---");
    let workloads = workloads();
    let comparator = Comparator::default();

    let mut results = Vec::new();
    let mut mismatches = Vec::new();

    for workload in &workloads {
        println!("> Workload '{}' ({} bytes)", workload.name, workload.text.len());

        for &(pattern, pat_desc) in workload.patterns {
            log::info!("running pattern {pattern:?} ({pat_desc})");
            let report = best_of(&comparator, &workload.text, pattern.as_bytes());
            record(&report, workload.name, pattern, &mut results, &mut mismatches);
        }
    }

    print_summary_table(&results);

    if mismatches.is_empty() {
        println!("All algorithms agree with the naive baseline.");
        ExitCode::SUCCESS
    } else {
        print_mismatches(&mismatches);
        ExitCode::FAILURE
    }
}

/// Run the comparison `REPEATS` times and keep the fastest time per algorithm.
fn best_of(comparator: &Comparator, text: &[u8], pattern: &[u8]) -> ComparisonReport {
    let mut best = comparator.run(text, pattern);
    for _ in 1..REPEATS {
        let next = comparator.run(text, pattern);
        best = best
            .iter()
            .zip(next.iter())
            .map(|(a, b)| if b.elapsed < a.elapsed { b.clone() } else { a.clone() })
            .collect();
    }
    best
}

fn record(
    report: &ComparisonReport,
    workload: &'static str,
    pattern: &'static str,
    results: &mut Vec<ResultEntry>,
    mismatches: &mut Vec<Mismatch>,
) {
    let baseline = report
        .get(Algorithm::Naive)
        .map(|run| run.positions.as_slice())
        .unwrap_or_default();

    for run in report {
        if run.positions != baseline {
            mismatches.push(Mismatch {
                algo: run.algorithm,
                workload,
                pattern,
                expected: baseline.len(),
                actual: run.positions.len(),
            });
        }
        results.push(ResultEntry {
            algo: run.algorithm,
            workload,
            pattern,
            duration: run.elapsed,
            found_count: run.positions.len(),
        });
    }
}

fn workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "periodic",
            text: b"AB".repeat(50_000),
            patterns: &[("ABABAB", "Self-overlapping"), ("ABBA", "Not Present")],
        },
        Workload {
            name: "dna",
            text: random_dna(200_000, 0x2545_f491_4f6c_dd1d),
            patterns: &[
                ("TCGC", "Short DNA"),
                ("GATTACA", "Medium DNA"),
                ("TGCGAGATTTGGACGGACGTTGACGG", "Long DNA"),
            ],
        },
        Workload {
            name: "prose",
            text: LOREM.repeat(500).into_bytes(),
            patterns: &[("Lorem", "Common Word"), ("XYZXYZMISSING", "Not Present")],
        },
        Workload {
            name: "worst-case",
            text: {
                let mut text = vec![b'a'; 100_000];
                text.push(b'b');
                text
            },
            patterns: &[("aaaaaaaaab", "Late Mismatch"), ("baaaaaaaaa", "Early Mismatch")],
        },
    ]
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. ";

/// Deterministic xorshift64 over the four nucleotides.
fn random_dna(len: usize, mut seed: u64) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            BASES[(seed >> 62) as usize]
        })
        .collect()
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", " RESULTS SUMMARY ");
    println!(
        "{:<14} | {:<12} | {:<16} | {:>8} | {:>15}",
        "Algorithm", "Workload", "Pattern", "Found", "Time (µs)"
    );
    println!("{:-^80}", "");

    for entry in results {
        let micros = entry.duration.as_nanos() as f64 / 1000.0;

        println!(
            "{:<14} | {:<12} | {:<16} | {:>8} | {:>15.2}",
            entry.algo.name(),
            entry.workload,
            entry.pattern.chars().take(14).collect::<String>(),
            entry.found_count,
            micros
        );
    }
    println!("{:=^80}", " END ");
}

fn print_mismatches(mismatches: &[Mismatch]) {
    eprintln!("\n{} mismatches against the naive baseline:", mismatches.len());
    for m in mismatches {
        eprintln!(
            "  ! {} on '{}' / {:?}: expected {} matches, got {}",
            m.algo, m.workload, m.pattern, m.expected, m.actual
        );
    }
}
