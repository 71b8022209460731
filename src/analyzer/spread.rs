use crate::analyzer::distinct_rounded;
use crate::capture::CaptureBuffer;
use crate::model::evidence::EvidenceRecord;

/// Strictly above this, the spread is treated as pinned.
const CONSISTENCY_THRESHOLD: f64 = 0.95;

/// Per-symbol spread variability check. A fixed quoted spread is the
/// hallmark of a simulator; live LPs requote the spread constantly.
///
/// Consistency is 1 - distinct/total over rounded spreads, so a symbol with
/// a single tick scores 0 ("fully varied"). That is an artifact of the
/// formula, kept as documented behavior; the tests pin it down.
pub fn analyze(buffer: &CaptureBuffer) -> Vec<EvidenceRecord> {
    let mut evidence = Vec::new();

    for symbol in buffer.symbols() {
        let ticks = buffer.ticks_for(symbol);
        if ticks.is_empty() {
            continue;
        }

        let spreads: Vec<f64> = ticks.iter().map(|t| t.spread()).collect();
        let consistency = 1.0 - distinct_rounded(&spreads) as f64 / spreads.len() as f64;

        if consistency > CONSISTENCY_THRESHOLD {
            evidence.push(EvidenceRecord::simulated(format!(
                "{symbol}: near-constant spread ({:.1}% consistency)",
                consistency * 100.0
            )));
        } else {
            evidence.push(EvidenceRecord::real(format!(
                "{symbol}: variable spread ({:.1}% consistency)",
                consistency * 100.0
            )));
        }
    }

    evidence
}
