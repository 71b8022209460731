use crate::analyzer::distinct_rounded;
use crate::capture::CaptureBuffer;
use crate::model::evidence::EvidenceRecord;

/// Below this share of distinct bid deltas, price movement is considered
/// patterned rather than market noise.
const REGULARITY_THRESHOLD: f64 = 0.5;

/// Minimum ticks per symbol before delta statistics mean anything.
const MIN_TICKS: usize = 3;

/// Per-symbol bid-delta variety check. Simulators tend to step prices by a
/// small fixed menu of increments, so a low distinct-to-total ratio over the
/// successive differences points at synthetic data.
pub fn analyze(buffer: &CaptureBuffer) -> Vec<EvidenceRecord> {
    let mut evidence = Vec::new();

    for symbol in buffer.symbols() {
        let ticks = buffer.ticks_for(symbol);
        if ticks.len() < MIN_TICKS {
            continue;
        }

        let deltas: Vec<f64> = ticks.windows(2).map(|w| w[1].bid - w[0].bid).collect();
        let regularity = distinct_rounded(&deltas) as f64 / deltas.len() as f64;

        if regularity < REGULARITY_THRESHOLD {
            evidence.push(EvidenceRecord::simulated(format!(
                "{symbol}: low variety of price deltas (regularity {regularity:.3})"
            )));
        } else {
            evidence.push(EvidenceRecord::real(format!(
                "{symbol}: high variety of price deltas (regularity {regularity:.3})"
            )));
        }
    }

    evidence
}
