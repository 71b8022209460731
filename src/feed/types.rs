use serde::Deserialize;

use crate::model::tick::{Tick, UNKNOWN_LP};

/// One JSON object per WebSocket text frame, dispatched on its `type` field.
/// Only tick frames carry quote data; everything else (heartbeats, account
/// snapshots, ...) is ignored by the capture loop.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum FeedMessage {
    #[serde(rename = "tick")]
    Tick(TickMessage),
    #[serde(other)]
    Other,
}

/// Wire form of a quote update. `lp` names the liquidity provider that
/// produced the quote and is optional on the wire.
#[derive(Debug, Deserialize)]
pub struct TickMessage {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub timestamp: f64,
    #[serde(default)]
    pub lp: Option<String>,
}

impl From<TickMessage> for Tick {
    fn from(msg: TickMessage) -> Self {
        Tick {
            symbol: msg.symbol,
            bid: msg.bid,
            ask: msg.ask,
            timestamp: msg.timestamp,
            source: msg.lp.unwrap_or_else(|| UNKNOWN_LP.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_tick_frame() {
        let json = r#"{
            "type": "tick",
            "symbol": "EURUSD",
            "bid": 1.08452,
            "ask": 1.08470,
            "timestamp": 1723456789.125,
            "lp": "YOFX"
        }"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        let FeedMessage::Tick(tick) = msg else {
            panic!("expected a tick frame");
        };
        assert_eq!(tick.symbol, "EURUSD");
        assert!((tick.bid - 1.08452).abs() < f64::EPSILON);
        assert!((tick.ask - 1.08470).abs() < f64::EPSILON);
        assert_eq!(tick.lp.as_deref(), Some("YOFX"));
    }

    #[test]
    fn missing_lp_normalizes_to_unknown() {
        let json = r#"{"type":"tick","symbol":"GBPUSD","bid":1.27,"ask":1.2702,"timestamp":1723456789.0}"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        let FeedMessage::Tick(wire) = msg else {
            panic!("expected a tick frame");
        };
        let tick: Tick = wire.into();
        assert_eq!(tick.source, UNKNOWN_LP);
    }

    #[test]
    fn non_tick_frames_map_to_other() {
        let json = r#"{"type":"heartbeat","ts":1723456789}"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, FeedMessage::Other));
    }

    #[test]
    fn tick_frame_with_missing_fields_is_a_parse_error() {
        let json = r#"{"type":"tick","symbol":"EURUSD"}"#;
        assert!(serde_json::from_str::<FeedMessage>(json).is_err());
    }
}
