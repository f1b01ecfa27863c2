use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use rolling_dp::problems::grid_paths::GridPaths;
use rolling_dp::problems::word_break::{Dictionary, WordBreak};
use rolling_dp::utils::binomial;
use rolling_dp::RollingEngine;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Rolling DP Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs both built-in problems across increasing input sizes and checks:");
    eprintln!("  • Correctness: grid counts against the closed form C(m+n-2, m-1),");
    eprintln!(
        "    word segmentation against a right-to-left suffix table (texts up to {} chars)",
        options.verify_limit
    );
    eprintln!("  • Cost: wall-clock time and RSS delta per run");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Square grids (up to the largest that fits in u128)...");
    measurements.extend(run_grid(
        "grid_paths_square",
        &[(4, 4), (8, 8), (16, 16), (32, 32), (48, 48), (66, 66), (67, 67)],
        &mut sys,
    ));
    eprintln!();

    eprintln!("[2/4] Wide grids (4 rows, many columns)...");
    let wide: Vec<(usize, usize)> = [256usize, 1024, 4096, 16384, 65536, 262_144]
        .iter()
        .map(|&cols| (4, cols))
        .collect();
    measurements.extend(run_grid("grid_paths_wide", &wide, &mut sys));
    eprintln!();

    eprintln!("[3/4] Segmentable texts (repeated dictionary words)...");
    measurements.extend(run_word_break(
        "word_break_segmentable",
        &options,
        &mut sys,
        &["apple", "pen", "applepen", "pine", "pineapple"],
        |len| repeated_words(&["pine", "apple", "pen"], len),
    ));
    eprintln!();

    eprintln!("[4/4] Unsegmentable texts (a^n b against a, aa, aaa, ...)...");
    measurements.extend(run_word_break(
        "word_break_unsegmentable",
        &options,
        &mut sys,
        &["a", "aa", "aaa", "aaaa", "aaaaa", "aaaaaaaa"],
        |len| {
            let mut text = "a".repeat(len.saturating_sub(1));
            text.push('b');
            text
        },
    ));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Longest text (in chars) checked against the right-to-left suffix table (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 1024
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    result: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

struct Outcome {
    result: String,
    status: VerificationStatus,
    detail: Option<String>,
}

fn run_grid(scenario: &'static str, dims: &[(usize, usize)], sys: &mut System) -> Vec<Measurement> {
    let total = dims.len();
    dims.iter()
        .enumerate()
        .map(|(idx, &(rows, cols))| {
            eprint!("      [{}/{}] Testing {}x{}... ", idx + 1, total, rows, cols);
            let m = measure(scenario, format!("{rows}x{cols}"), sys, || {
                let counted = GridPaths::new(rows, cols)
                    .and_then(|problem| RollingEngine::new(problem).run());
                let expected = binomial((rows + cols - 2) as u64, (rows - 1) as u64);
                match (counted, expected) {
                    (Ok(got), Some(want)) if got == want => Outcome {
                        result: got.to_string(),
                        status: VerificationStatus::Passed,
                        detail: None,
                    },
                    // both sides agree the count does not fit
                    (Err(err), None) => Outcome {
                        result: "overflow".to_string(),
                        status: VerificationStatus::Passed,
                        detail: Some(err.to_string()),
                    },
                    (got, want) => Outcome {
                        result: format!("{got:?}"),
                        status: VerificationStatus::Failed,
                        detail: Some(format!("expected {want:?}, got {got:?}")),
                    },
                }
            });
            eprintln!(
                "{} paths={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_word_break<G>(
    scenario: &'static str,
    options: &Options,
    sys: &mut System,
    words: &[&str],
    make_text: G,
) -> Vec<Measurement>
where
    G: Fn(usize) -> String,
{
    const LENGTHS: &[usize] = &[256, 1024, 4096, 16384, 65536];
    let dict = Dictionary::new(words.iter().copied());
    let total = LENGTHS.len();

    LENGTHS
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing len {}... ", idx + 1, total, len);
            let text = make_text(len);
            let m = measure(scenario, format!("len={len}"), sys, || {
                let problem = WordBreak::new(&text, &dict);
                let engine = RollingEngine::new(problem);
                let table = match engine.final_frontier() {
                    Ok(table) => table,
                    Err(never) => match never {},
                };
                let found = engine.problem().words(&table);
                let result = match &found {
                    Some(parts) => format!("{} words", parts.len()),
                    None => "unsegmentable".to_string(),
                };

                let chars = text.chars().count();
                if chars > options.verify_limit {
                    return Outcome {
                        result,
                        status: VerificationStatus::NotChecked,
                        detail: None,
                    };
                }
                let baseline = suffix_segmentable(&text, words);
                let rebuilt = found.as_ref().map(|parts| parts.concat());
                let consistent = rebuilt.as_deref().map_or(true, |joined| joined == text);
                if baseline == found.is_some() && consistent {
                    Outcome {
                        result,
                        status: VerificationStatus::Passed,
                        detail: None,
                    }
                } else {
                    Outcome {
                        result,
                        status: VerificationStatus::Failed,
                        detail: Some(format!(
                            "baseline={baseline}, engine={}, rebuilt_matches={consistent}",
                            found.is_some()
                        )),
                    }
                }
            });
            eprintln!(
                "{} {}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1);
    let pct = |n: usize| 100.0 * n as f64 / total as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, pct(passed));
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, pct(failed));
    eprintln!(
        "  ○ Not checked (text > {} chars): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        pct(not_checked)
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {}", detail);
                }
            }
        }
        eprintln!();
    }

    eprintln!("Timing by Scenario:");
    eprintln!();
    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let min_time = ms.iter().map(|m| m.wall_s).fold(f64::INFINITY, f64::min);
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let avg_time = ms.iter().map(|m| m.wall_s).sum::<f64>() / ms.len() as f64;
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {}:", scenario);
        eprintln!("    Runs: {}", ms.len());
        eprintln!(
            "    Time: min={:.3}s, max={:.3}s, avg={:.3}s",
            min_time, max_time, avg_time
        );
        eprintln!("    Memory: max_delta={} KiB", max_mem);
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {} run(s) failed. Please review the errors above.", failed);
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Outcome,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let outcome = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);
    Measurement {
        scenario,
        size_desc,
        result: outcome.result,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: outcome.status,
        verification_detail: outcome.detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,result,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let w_scenario = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let w_size = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);
    let w_result = measurements
        .iter()
        .map(|m| m.result.len())
        .fold("result".len(), usize::max);
    println!(
        "{:<w_scenario$}  {:<w_size$}  {:>w_result$}  {:>10}  {:>14}  {:>12}",
        "scenario", "size", "result", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<w_scenario$}  {:-<w_size$}  {:-<w_result$}  {:-<10}  {:-<14}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<w_scenario$}  {:<w_size$}  {:>w_result$}  {:>10.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label()
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.verification_detail {
            Some(ref d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"result\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

/// Resident set size of this process in KiB (`sysinfo` reports bytes).
fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Concatenate `words` cyclically until at least `len` bytes are produced.
fn repeated_words(words: &[&str], len: usize) -> String {
    let mut text = String::with_capacity(len + 16);
    for word in words.iter().cycle() {
        if text.len() >= len {
            break;
        }
        text.push_str(word);
    }
    text
}

/// Suffix table filled right to left: `ok[start]` holds when some word
/// begins at `start` and the rest after it is segmentable.
fn suffix_segmentable(text: &str, words: &[&str]) -> bool {
    let n = text.len();
    let mut ok = vec![false; n + 1];
    ok[n] = true;
    for start in (0..n).rev() {
        if !text.is_char_boundary(start) {
            continue;
        }
        let rest = &text[start..];
        ok[start] = words
            .iter()
            .any(|w| !w.is_empty() && rest.starts_with(w) && ok[start + w.len()]);
    }
    ok[0]
}
