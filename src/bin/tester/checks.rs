// Check Accumulator — pass/total tally owned by the harness run
// A failed check is printed and recorded; it never stops later checks

use tracing::warn;

use crate::report::CheckRecord;

pub struct Tally {
    pub eps: f64,
    pub quiet: bool,
    section: &'static str,
    records: Vec<CheckRecord>,
}

impl Tally {
    pub fn new(eps: f64, quiet: bool) -> Self {
        Self {
            eps,
            quiet,
            section: "",
            records: Vec::new(),
        }
    }

    /// Start a new section; subsequent checks are recorded under it.
    pub fn section(&mut self, key: &'static str, title: &str) {
        self.section = key;
        println!();
        println!("{}", title);
    }

    pub fn approx(&mut self, label: &str, actual: f64, expected: f64) -> bool {
        let ok = (actual - expected).abs() <= self.eps;
        let detail = if ok {
            format!("actual={:.6}  expected={:.6}", actual, expected)
        } else {
            format!("actual={:.6}  expected={:.6}  diff={:e}", actual, expected, actual - expected)
        };
        self.record(label, ok, detail)
    }

    pub fn equals(&mut self, label: &str, actual: &str, expected: &str) -> bool {
        let ok = actual == expected;
        let detail = if ok {
            format!("actual={:?}", actual)
        } else {
            format!("actual={:?}  expected={:?}", actual, expected)
        };
        self.record(label, ok, detail)
    }

    pub fn truth(&mut self, label: &str, condition: bool) -> bool {
        self.record(label, condition, String::new())
    }

    fn record(&mut self, label: &str, passed: bool, detail: String) -> bool {
        let mark = if passed { "✓" } else { "✗" };
        if !passed {
            warn!(section = self.section, label, %detail, "check failed");
        }
        if !passed || !self.quiet {
            if detail.is_empty() {
                println!("  {} {}", mark, label);
            } else {
                println!("  {} {}  {}", mark, label, detail);
            }
        }
        self.records.push(CheckRecord {
            section: self.section,
            label: label.to_string(),
            passed,
            detail,
        });
        passed
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.passed).count()
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn failures(&self) -> Vec<CheckRecord> {
        self.records.iter().filter(|r| !r.passed).cloned().collect()
    }
}
