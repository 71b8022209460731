use std::collections::HashMap;
use std::time::Duration;

use crate::model::tick::Tick;

/// Knobs for one capture session. Defaults mirror the documented CLI
/// behavior: 20 ticks per symbol from up to 3 symbols within 30 seconds.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Buffer capacity per symbol; also the global received-count target.
    pub ticks_per_symbol: usize,
    /// How many symbols must fill up before the session can end early.
    /// Clamped down to the number of symbols actually seen.
    pub min_symbols: usize,
    /// Per-read inactivity timeout. Expiry is a poll, not a failure.
    pub read_timeout: Duration,
    /// Hard stop for the whole session.
    pub session_deadline: Duration,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            ticks_per_symbol: 20,
            min_symbols: 3,
            read_timeout: Duration::from_secs(5),
            session_deadline: Duration::from_secs(30),
        }
    }
}

/// How a capture session ended.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// The loop terminated normally (targets met or deadline passed) with at
    /// least one buffered tick.
    Complete(CaptureBuffer),
    /// The operator interrupted the session; no analysis should run.
    Interrupted,
}

/// Per-symbol tick sample, capped at a fixed capacity per symbol. Ticks that
/// arrive for a full symbol are dropped but still counted, so the received
/// total reflects feed volume rather than buffer size. Symbols iterate in
/// first-arrival order, which keeps analyzer and report output stable.
#[derive(Debug)]
pub struct CaptureBuffer {
    ticks: HashMap<String, Vec<Tick>>,
    symbol_order: Vec<String>,
    total_received: u64,
    capacity: usize,
}

impl CaptureBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            ticks: HashMap::new(),
            symbol_order: Vec::new(),
            total_received: 0,
            capacity,
        }
    }

    /// Count a received tick and buffer it if its symbol has room.
    /// Returns whether the tick was buffered.
    pub fn record(&mut self, tick: Tick) -> bool {
        self.total_received += 1;
        if !self.ticks.contains_key(&tick.symbol) {
            self.symbol_order.push(tick.symbol.clone());
        }
        let entry = self.ticks.entry(tick.symbol.clone()).or_default();
        if entry.len() < self.capacity {
            entry.push(tick);
            true
        } else {
            false
        }
    }

    /// Every tick seen on the wire, including dropped overflow.
    pub fn total_received(&self) -> u64 {
        self.total_received
    }

    /// Ticks actually held in per-symbol buffers.
    pub fn total_buffered(&self) -> usize {
        self.ticks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_buffered() == 0
    }

    /// Symbols in first-arrival order.
    pub fn symbols(&self) -> &[String] {
        &self.symbol_order
    }

    pub fn ticks_for(&self, symbol: &str) -> &[Tick] {
        self.ticks.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All buffered ticks, grouped by symbol in first-arrival order.
    pub fn flattened(&self) -> Vec<&Tick> {
        self.symbol_order
            .iter()
            .flat_map(|s| self.ticks_for(s))
            .collect()
    }

    fn symbols_at_capacity(&self) -> usize {
        self.ticks
            .values()
            .filter(|v| v.len() >= self.capacity)
            .count()
    }

    /// Early-exit test for the capture loop: enough symbols have filled up
    /// and the global count has reached the per-symbol target. With fewer
    /// than `min_symbols` distinct symbols on the feed, whatever is there
    /// has to fill instead.
    pub fn targets_met(&self, min_symbols: usize) -> bool {
        let needed = self.symbol_order.len().min(min_symbols);
        self.symbols_at_capacity() >= needed && self.total_received >= self.capacity as u64
    }
}
