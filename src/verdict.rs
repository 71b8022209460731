use std::collections::HashSet;

use crate::analyzer::lp_source::{REAL_GATEWAY_LP, SIMULATED_LP};
use crate::model::evidence::Verdict;

/// Snapshot the aggregator decides on: the distinct source labels seen in
/// the capture plus the evidence tallies. Owning the data keeps `decide` a
/// pure function that can be re-run on the same input at will.
#[derive(Debug, Clone)]
pub struct VerdictInput {
    pub labels: HashSet<String>,
    pub supports_real: usize,
    pub supports_simulated: usize,
}

/// Ordered decision table, first match wins. The simulation marker
/// short-circuits everything; the gateway marker only confirms a real feed
/// when the evidence majority agrees; ties fall all the way through.
const RULES: [(fn(&VerdictInput) -> bool, Verdict); 4] = [
    (simulated_marker_present, Verdict::Simulated),
    (gateway_with_real_majority, Verdict::Real),
    (simulated_majority, Verdict::LikelySimulated),
    (|_| true, Verdict::Inconclusive),
];

pub fn decide(input: &VerdictInput) -> Verdict {
    RULES
        .iter()
        .find(|(applies, _)| applies(input))
        .map(|(_, verdict)| *verdict)
        .unwrap_or(Verdict::Inconclusive)
}

fn simulated_marker_present(input: &VerdictInput) -> bool {
    input.labels.contains(SIMULATED_LP)
}

fn gateway_with_real_majority(input: &VerdictInput) -> bool {
    input.labels.contains(REAL_GATEWAY_LP) && input.supports_real > input.supports_simulated
}

fn simulated_majority(input: &VerdictInput) -> bool {
    input.supports_simulated > input.supports_real
}

/// One-line explanation attached to the verdict in the report.
pub fn explain(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Simulated => "the LP field explicitly marks the feed as simulated",
        Verdict::Real => "the FIX gateway label and the evidence majority both point at live data",
        Verdict::LikelySimulated => "statistical patterns suggest simulation despite the LP field",
        Verdict::Inconclusive => "mixed indicators; capture more data",
    }
}
