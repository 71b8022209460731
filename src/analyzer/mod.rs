pub mod lp_source;
pub mod price_pattern;
pub mod spread;
pub mod timestamp_gap;

use std::collections::HashSet;

use crate::capture::CaptureBuffer;
use crate::model::evidence::{EvidenceRecord, Polarity};
use crate::verdict::VerdictInput;

/// Everything the analyzers learned from one capture: the LP tally (which
/// doubles as the observed-label set) plus every evidence record in analyzer
/// execution order.
#[derive(Debug)]
pub struct AnalysisReport {
    /// (label, tick count) in first-seen order over the flattened buffer.
    pub lp_tallies: Vec<(String, usize)>,
    pub evidence: Vec<EvidenceRecord>,
}

impl AnalysisReport {
    pub fn supports_real(&self) -> usize {
        self.count(Polarity::SupportsReal)
    }

    pub fn supports_simulated(&self) -> usize {
        self.count(Polarity::SupportsSimulated)
    }

    fn count(&self, polarity: Polarity) -> usize {
        self.evidence
            .iter()
            .filter(|e| e.polarity == polarity)
            .count()
    }

    pub fn verdict_input(&self) -> VerdictInput {
        VerdictInput {
            labels: self.lp_tallies.iter().map(|(lp, _)| lp.clone()).collect(),
            supports_real: self.supports_real(),
            supports_simulated: self.supports_simulated(),
        }
    }
}

/// Run every analyzer over an immutable snapshot of the capture. Each one is
/// a pure function returning its own records; concatenation order here fixes
/// the order they appear in the report.
pub fn run(buffer: &CaptureBuffer) -> AnalysisReport {
    let lp = lp_source::analyze(buffer);

    let mut evidence = lp.evidence;
    evidence.extend(price_pattern::analyze(buffer));
    evidence.extend(timestamp_gap::analyze(buffer));
    evidence.extend(spread::analyze(buffer));

    AnalysisReport {
        lp_tallies: lp.tallies,
        evidence,
    }
}

/// Distinct count after rounding to 6 decimal places. Matching quote math
/// elsewhere, the rounded value is keyed as integer micro-units so float
/// identity never enters into it.
pub(crate) fn distinct_rounded(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| (v * 1e6).round() as i64)
        .collect::<HashSet<_>>()
        .len()
}

/// Distinct count on exact bit patterns, for sequences that are compared
/// without rounding (timestamp gaps).
pub(crate) fn distinct_exact(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| v.to_bits())
        .collect::<HashSet<_>>()
        .len()
}
