//! Shared output helpers for spoor commands

use serde_json::Value;
use spoor_core::graph::Weight;

/// JSON rendering for a distance. Finite weights stay numbers; JSON
/// has no infinity literal, so the infinities become the strings
/// "inf" / "-inf".
pub fn json_weight(weight: Weight) -> Value {
    if weight.is_finite() {
        serde_json::json!(weight)
    } else if weight > 0.0 {
        Value::String("inf".to_string())
    } else {
        Value::String("-inf".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_weight_rendering() {
        assert_eq!(json_weight(2.5), serde_json::json!(2.5));
        assert_eq!(json_weight(0.0), serde_json::json!(0.0));
        assert_eq!(json_weight(f64::INFINITY), serde_json::json!("inf"));
        assert_eq!(json_weight(f64::NEG_INFINITY), serde_json::json!("-inf"));
    }
}
