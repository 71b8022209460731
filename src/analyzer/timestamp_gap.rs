use crate::analyzer::distinct_exact;
use crate::capture::CaptureBuffer;
use crate::model::evidence::EvidenceRecord;

const REGULARITY_THRESHOLD: f64 = 0.3;
const SUB_SECOND_MEAN: f64 = 1.0;

/// Inter-arrival cadence check over the whole capture. Timestamps are pooled
/// across symbols and sorted; a generator ticking on a timer produces a small
/// set of gap values at sub-second mean spacing, which real market flow does
/// not. Emits at most one record for the entire session.
pub fn analyze(buffer: &CaptureBuffer) -> Vec<EvidenceRecord> {
    let mut timestamps: Vec<f64> = buffer.flattened().iter().map(|t| t.timestamp).collect();
    timestamps.sort_by(|a, b| a.total_cmp(b));

    let gaps: Vec<f64> = timestamps.windows(2).map(|w| w[1] - w[0]).collect();
    if gaps.is_empty() {
        return Vec::new();
    }

    let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
    // Gaps are compared exactly; a timer-driven generator repeats the same
    // float, while real arrivals essentially never do.
    let regularity = distinct_exact(&gaps) as f64 / gaps.len() as f64;

    let record = if regularity < REGULARITY_THRESHOLD && mean_gap < SUB_SECOND_MEAN {
        EvidenceRecord::simulated(format!(
            "uniform sub-second tick cadence (mean gap {mean_gap:.2}s, regularity {regularity:.3})"
        ))
    } else {
        EvidenceRecord::real(format!(
            "irregular tick cadence (mean gap {mean_gap:.2}s, regularity {regularity:.3})"
        ))
    };
    vec![record]
}
