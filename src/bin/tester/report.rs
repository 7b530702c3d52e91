// Tester Report Types
// Structured output of one harness run, written as JSON with --json

use serde::Serialize;

// ─── Single Check ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    pub section: &'static str,
    pub label: String,
    pub passed: bool,
    pub detail: String,
}

// ─── Per-Section Aggregation ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub section: &'static str,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl SectionSummary {
    pub fn from_records(section: &'static str, records: &[CheckRecord]) -> Self {
        let in_section: Vec<&CheckRecord> = records.iter()
            .filter(|r| r.section == section)
            .collect();
        let passed = in_section.iter().filter(|r| r.passed).count();
        Self {
            section,
            total: in_section.len(),
            passed,
            failed: in_section.len() - passed,
        }
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TesterReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub seed: u64,
    pub trials: usize,
    pub eps: f64,
    pub total: usize,
    pub passed: usize,
    pub sections: Vec<SectionSummary>,
    pub failures: Vec<CheckRecord>,
}
