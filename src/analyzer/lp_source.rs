use crate::capture::CaptureBuffer;
use crate::model::evidence::EvidenceRecord;

/// LP label a simulator stamps on its own output. Seeing it anywhere is
/// conclusive on its own.
pub const SIMULATED_LP: &str = "SIMULATED";

/// LP label of the production FIX gateway.
pub const REAL_GATEWAY_LP: &str = "YOFX";

#[derive(Debug)]
pub struct LpSourceReport {
    /// (label, tick count) in first-seen order.
    pub tallies: Vec<(String, usize)>,
    pub evidence: Vec<EvidenceRecord>,
}

/// Tally source labels over the flattened buffer. Only the two well-known
/// markers produce evidence; any other label is informational and shows up
/// in the tally alone.
pub fn analyze(buffer: &CaptureBuffer) -> LpSourceReport {
    let mut tallies: Vec<(String, usize)> = Vec::new();
    for tick in buffer.flattened() {
        match tallies.iter_mut().find(|(lp, _)| *lp == tick.source) {
            Some((_, count)) => *count += 1,
            None => tallies.push((tick.source.clone(), 1)),
        }
    }

    let mut evidence = Vec::new();
    for (lp, _count) in &tallies {
        if lp == SIMULATED_LP {
            evidence.push(EvidenceRecord::simulated(format!(
                "LP field shows \"{SIMULATED_LP}\", an explicit simulation marker"
            )));
        } else if lp == REAL_GATEWAY_LP {
            evidence.push(EvidenceRecord::real(format!(
                "LP field shows \"{REAL_GATEWAY_LP}\", the real FIX gateway"
            )));
        }
    }

    LpSourceReport { tallies, evidence }
}
