use std::fmt;

/// Which way one piece of analyzer evidence points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    SupportsReal,
    SupportsSimulated,
}

/// Immutable finding produced by an analyzer: a polarity plus a
/// human-readable rationale for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceRecord {
    pub polarity: Polarity,
    pub message: String,
}

impl EvidenceRecord {
    pub fn real(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::SupportsReal,
            message: message.into(),
        }
    }

    pub fn simulated(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::SupportsSimulated,
            message: message.into(),
        }
    }
}

/// Final classification of the feed. Derived from evidence on demand,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Simulated,
    Real,
    LikelySimulated,
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Simulated => "SIMULATED",
            Verdict::Real => "REAL",
            Verdict::LikelySimulated => "LIKELY_SIMULATED",
            Verdict::Inconclusive => "INCONCLUSIVE",
        };
        f.write_str(s)
    }
}
