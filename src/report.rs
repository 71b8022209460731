use std::fmt::Write;
use std::time::Duration;

use crate::analyzer::AnalysisReport;
use crate::capture::CaptureBuffer;
use crate::model::evidence::{Polarity, Verdict};
use crate::verdict;

const RULE: &str = "============================================================";

/// Render the whole session to a plain-text report. Pure formatting; the
/// caller decides where it goes.
pub fn render(
    buffer: &CaptureBuffer,
    analysis: &AnalysisReport,
    verdict: Verdict,
    elapsed: Duration,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "LP SOURCES");
    let buffered = buffer.total_buffered().max(1);
    for (lp, count) in &analysis.lp_tallies {
        let pct = *count as f64 / buffered as f64 * 100.0;
        let _ = writeln!(out, "  {lp}: {count} ticks ({pct:.1}%)");
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "SYMBOLS");
    for symbol in buffer.symbols() {
        let _ = writeln!(out, "  {symbol}: {} ticks buffered", buffer.ticks_for(symbol).len());
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "EVIDENCE");
    for record in &analysis.evidence {
        let tag = match record.polarity {
            Polarity::SupportsReal => "real",
            Polarity::SupportsSimulated => "sim ",
        };
        let _ = writeln!(out, "  [{tag}] {}", record.message);
    }
    let _ = writeln!(
        out,
        "  supports-real: {}  supports-simulated: {}",
        analysis.supports_real(),
        analysis.supports_simulated()
    );

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "VERDICT: {verdict}");
    let _ = writeln!(out, "  {}", verdict::explain(verdict));

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "ticks received: {}  buffered: {}  symbols: {}  duration: {:.1}s",
        buffer.total_received(),
        buffer.total_buffered(),
        buffer.symbols().len(),
        elapsed.as_secs_f64()
    );
    let _ = writeln!(out, "{RULE}");

    out
}
