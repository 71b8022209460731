/// Source label recorded when the feed omits the `lp` field.
pub const UNKNOWN_LP: &str = "UNKNOWN";

/// One quote update from the feed. `timestamp` is epoch seconds and may be
/// fractional. ask >= bid is expected but never enforced; a crossed quote
/// still produces a (negative) spread.
#[derive(Debug, Clone)]
pub struct Tick {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub timestamp: f64,
    pub source: String,
}

impl Tick {
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}
