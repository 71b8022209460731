use quote_audit::analyzer::spread;
use quote_audit::capture::CaptureBuffer;
use quote_audit::model::evidence::Polarity;
use quote_audit::model::tick::Tick;

fn tick(symbol: &str, bid: f64, ask: f64) -> Tick {
    Tick {
        symbol: symbol.to_string(),
        bid,
        ask,
        timestamp: 0.0,
        source: "YOFX".to_string(),
    }
}

fn buffer_of(symbol: &str, quotes: &[(f64, f64)]) -> CaptureBuffer {
    let mut buffer = CaptureBuffer::new(100);
    for &(bid, ask) in quotes {
        buffer.record(tick(symbol, bid, ask));
    }
    buffer
}

#[test]
fn ten_identical_spreads_sit_below_the_boundary() {
    // consistency = 1 - 1/10 = 0.9, not > 0.95, so this still reads real.
    let quotes: Vec<(f64, f64)> = (0..10).map(|i| {
        let bid = 1.1000 + i as f64 * 0.0001;
        (bid, bid + 0.0002)
    }).collect();
    let evidence = spread::analyze(&buffer_of("EURUSD", &quotes));
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn many_identical_spreads_look_simulated() {
    // consistency = 1 - 1/30 ~ 0.967 > 0.95.
    let quotes: Vec<(f64, f64)> = (0..30).map(|i| {
        let bid = 1.1000 + i as f64 * 0.0001;
        (bid, bid + 0.0002)
    }).collect();
    let evidence = spread::analyze(&buffer_of("EURUSD", &quotes));
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsSimulated);
}

#[test]
fn single_tick_scores_fully_varied() {
    // Known formula artifact: one spread value gives consistency
    // 1 - 1/1 = 0, which reads as "variable spread". Kept as documented
    // behavior rather than special-cased.
    let evidence = spread::analyze(&buffer_of("EURUSD", &[(1.1000, 1.1002)]));
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn varied_spreads_look_real() {
    let quotes = [
        (1.1000, 1.1002),
        (1.1001, 1.1004),
        (1.1002, 1.1003),
        (1.1003, 1.1008),
    ];
    let evidence = spread::analyze(&buffer_of("EURUSD", &quotes));
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn crossed_quotes_are_tolerated() {
    // ask < bid gives a negative spread; the analyzer must not reject it.
    let quotes = [(1.1005, 1.1001), (1.1006, 1.1000), (1.1004, 1.1002)];
    let evidence = spread::analyze(&buffer_of("EURUSD", &quotes));
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].polarity, Polarity::SupportsReal);
}

#[test]
fn each_symbol_gets_its_own_record() {
    let mut buffer = CaptureBuffer::new(100);
    buffer.record(tick("EURUSD", 1.1000, 1.1002));
    buffer.record(tick("GBPUSD", 1.2700, 1.2703));
    let evidence = spread::analyze(&buffer);
    assert_eq!(evidence.len(), 2);
}
