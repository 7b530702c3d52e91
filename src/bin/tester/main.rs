// Surge Oracle Tester v0.1.0 — strict, reference-based verification
// Golden cases, threshold boundaries, seeded randomized property checks
//
// Usage:
//   cargo run --bin tester                        # All sections, seed 142, 50 trials
//   cargo run --bin tester -- --trials 500        # More randomized trials
//   cargo run --bin tester -- --seed 7            # Custom seed
//   cargo run --bin tester -- random              # Filter sections by name
//   cargo run --bin tester -- --json --quiet      # Failures only, JSON report
//   RUST_LOG=surge_oracle=trace cargo run --bin tester

mod checks;
mod golden;
mod random;
mod reference;
mod report;

use anyhow::Context;
use checks::Tally;
use report::*;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SECTIONS: [&str; 3] = ["golden", "boundaries", "random"];

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Debug)]
struct CliArgs {
    trials: usize,
    seed: u64,
    eps: f64,
    json: bool,
    quiet: bool,
    filter: Option<String>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            trials: 50,
            seed: 142,
            eps: 1e-9,
            json: false,
            quiet: false,
            filter: None,
        }
    }
}

impl CliArgs {
    fn runs_section(&self, key: &str) -> bool {
        match &self.filter {
            Some(f) => key.contains(&f.to_lowercase()),
            None => true,
        }
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> CliArgs {
    let args: Vec<String> = args.into_iter().collect();
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    cli.trials = args[i].parse().unwrap_or(50);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(142);
                }
            }
            "--eps" => {
                i += 1;
                if i < args.len() {
                    cli.eps = args[i].parse().unwrap_or(1e-9);
                }
            }
            "--json" => cli.json = true,
            "--quiet" => cli.quiet = true,
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = parse_args(std::env::args().skip(1));
    info!(?cli, "tester configuration");

    if !SECTIONS.iter().any(|s| cli.runs_section(s)) {
        eprintln!("No sections match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    println!("=== Surge Oracle Strict Auto Tester ===");
    println!("  PRNG: ChaCha8Rng | Seed: {} | Trials: {} | eps: {:e}", cli.seed, cli.trials, cli.eps);

    let mut tally = Tally::new(cli.eps, cli.quiet);

    if cli.runs_section("golden") {
        tally.section("golden", "[A] Golden cases (deterministic)");
        golden::run_golden(&mut tally);
    }

    if cli.runs_section("boundaries") {
        tally.section("boundaries", "[B] Classification + Recommendation boundaries");
        golden::run_boundaries(&mut tally);
    }

    if cli.runs_section("random") {
        tally.section("random", "[C] Randomized property tests (seeded)");
        let executed = random::run_random(&mut tally, cli.seed, cli.trials);
        println!("  Random cases executed: {}", executed);
    }

    // ─── Summary ────────────────────────────────────────────────────────

    let total = tally.total();
    let passed = tally.passed();

    println!();
    println!("Passed {} of {} checks.", passed, total);
    if passed == total {
        println!("All checks passed ✅");
    } else {
        println!("Some checks failed ❌ — see details above.");
    }

    // ─── Write JSON Report ──────────────────────────────────────────────

    if cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_millis();
        let timestamp = format!("{}", ts);

        let report = TesterReport {
            timestamp: timestamp.clone(),
            version: env!("CARGO_PKG_VERSION"),
            prng: "ChaCha8Rng",
            seed: cli.seed,
            trials: cli.trials,
            eps: cli.eps,
            total,
            passed,
            sections: SECTIONS.iter()
                .filter(|s| cli.runs_section(s))
                .map(|s| SectionSummary::from_records(*s, tally.records()))
                .collect(),
            failures: tally.failures(),
        };

        let dir = std::path::Path::new("tester-results");
        std::fs::create_dir_all(dir).context("failed to create tester-results/")?;
        let path = dir.join(format!("tester-{}.json", timestamp));
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(&path, &json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Results saved to: {}", path.display());
    }

    if passed != total {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let cli = args(&[]);
        assert_eq!(cli.trials, 50);
        assert_eq!(cli.seed, 142);
        assert_eq!(cli.eps, 1e-9);
        assert!(!cli.json);
        assert!(cli.filter.is_none());
    }

    #[test]
    fn flags_and_filter() {
        let cli = args(&["--trials", "500", "--seed", "7", "--json", "--quiet", "RANDOM"]);
        assert_eq!(cli.trials, 500);
        assert_eq!(cli.seed, 7);
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(cli.runs_section("random"));
        assert!(!cli.runs_section("golden"));
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let cli = args(&["--trials", "many", "--seed", "-1"]);
        assert_eq!(cli.trials, 50);
        assert_eq!(cli.seed, 142);
    }
}
