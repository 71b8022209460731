use quote_audit::analyzer::timestamp_gap;
use quote_audit::capture::CaptureBuffer;
use quote_audit::model::evidence::Polarity;
use quote_audit::model::tick::Tick;

fn tick(symbol: &str, ts: f64) -> Tick {
    Tick {
        symbol: symbol.to_string(),
        bid: 1.1000,
        ask: 1.1002,
        timestamp: ts,
        source: "YOFX".to_string(),
    }
}

fn buffer_at(timestamps: &[f64]) -> CaptureBuffer {
    let mut buffer = CaptureBuffer::new(100);
    for &ts in timestamps {
        buffer.record(tick("EURUSD", ts));
    }
    buffer
}

#[test]
fn fewer_than_two_ticks_yields_no_evidence() {
    assert!(timestamp_gap::analyze(&buffer_at(&[])).is_empty());
    assert!(timestamp_gap::analyze(&buffer_at(&[100.0])).is_empty());
}

#[test]
fn uniform_sub_second_cadence_looks_simulated() {
    // Gaps all exactly 0.5s: regularity 1/4 < 0.3, mean 0.5 < 1.
    let buffer = buffer_at(&[100.0, 100.5, 101.0, 101.5, 102.0]);
    let evidence = timestamp_gap::analyze(&buffer);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsSimulated);
}

#[test]
fn regular_but_slow_cadence_still_looks_real() {
    // Gaps [1, 1, 1, 1]: regularity 0.25 but mean gap 1.0 is not
    // sub-second, so the simulation rule does not fire.
    let buffer = buffer_at(&[100.0, 101.0, 102.0, 103.0, 104.0]);
    let evidence = timestamp_gap::analyze(&buffer);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn irregular_gaps_look_real() {
    let buffer = buffer_at(&[100.0, 100.13, 100.71, 100.74, 102.2]);
    let evidence = timestamp_gap::analyze(&buffer);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn gaps_are_pooled_across_symbols_into_one_record() {
    let mut buffer = CaptureBuffer::new(100);
    // Interleaved symbols at a fixed 0.25s global cadence.
    for i in 0..8 {
        let symbol = if i % 2 == 0 { "EURUSD" } else { "GBPUSD" };
        buffer.record(tick(symbol, 100.0 + i as f64 * 0.25));
    }
    let evidence = timestamp_gap::analyze(&buffer);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsSimulated);
}

#[test]
fn unsorted_arrival_order_is_handled() {
    // Arrival order is not time order; the analyzer sorts before diffing.
    let buffer = buffer_at(&[102.0, 100.0, 101.5, 100.2]);
    let evidence = timestamp_gap::analyze(&buffer);
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}
