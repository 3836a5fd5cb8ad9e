//! Inbound frame classification and control frames.
//!
//! Client payloads are deliberately loose: the relay inspects only the two
//! fields the protocol defines (`action` and `number`) and carries the rest
//! verbatim. Classification therefore works on [`serde_json::Value`] rather
//! than a rigid schema, so forward-compatible extra fields survive.

use serde::Serialize;
use serde_json::Value;

/// Action value that clears the whole board.
pub const CLEAR_ALL_ACTION: &str = "clear-all";

/// Action value signaling that full-state replay has finished.
pub const INIT_COMPLETE_ACTION: &str = "init-complete";

/// Lowest accepted cell number.
pub const MIN_NUMBER: i64 = 1;

/// Highest accepted cell number.
pub const MAX_NUMBER: i64 = 100;

/// Control frame sent once after replay on join.
#[derive(Debug, Serialize)]
struct ControlFrame {
    action: &'static str,
}

/// Returns the init-complete control frame as wire text.
#[must_use]
pub fn init_complete_frame() -> String {
    serde_json::to_string(&ControlFrame {
        action: INIT_COMPLETE_ACTION,
    })
    .unwrap_or_else(|_| format!(r#"{{"action":"{INIT_COMPLETE_ACTION}"}}"#))
}

/// What one inbound text frame asks the relay to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `{"action": "clear-all", ...}` — empty the store, rebroadcast.
    ClearAll,
    /// `{"number": n, ...}` with `1 <= n <= 100` — append, rebroadcast.
    Place {
        /// The validated cell number.
        number: i64,
    },
    /// Anything else: unparseable text, non-object JSON, out-of-range or
    /// non-integer `number`, unknown shape. Silently dropped.
    Invalid,
}

impl Directive {
    /// Classifies one inbound frame.
    ///
    /// The `action` check takes precedence over `number`, so a frame
    /// carrying both is a clear-all.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return Self::Invalid;
        };

        if value.get("action").and_then(Value::as_str) == Some(CLEAR_ALL_ACTION) {
            return Self::ClearAll;
        }

        if let Some(number) = value.get("number").and_then(Value::as_i64)
            && (MIN_NUMBER..=MAX_NUMBER).contains(&number)
        {
            return Self::Place { number };
        }

        Self::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_all_is_recognized() {
        assert_eq!(Directive::parse(r#"{"action": "clear-all"}"#), Directive::ClearAll);
    }

    #[test]
    fn clear_all_wins_over_number() {
        let raw = r#"{"action": "clear-all", "number": 5}"#;
        assert_eq!(Directive::parse(raw), Directive::ClearAll);
    }

    #[test]
    fn place_accepts_range_bounds() {
        assert_eq!(
            Directive::parse(r#"{"number": 1}"#),
            Directive::Place { number: 1 }
        );
        assert_eq!(
            Directive::parse(r#"{"number": 100}"#),
            Directive::Place { number: 100 }
        );
    }

    #[test]
    fn place_keeps_extra_fields_out_of_the_decision() {
        let raw = r#"{"number": 42, "color": "red", "cell": [3, 4]}"#;
        assert_eq!(Directive::parse(raw), Directive::Place { number: 42 });
    }

    #[test]
    fn out_of_range_numbers_are_invalid() {
        assert_eq!(Directive::parse(r#"{"number": 0}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"number": 101}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"number": 150}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"number": -3}"#), Directive::Invalid);
    }

    #[test]
    fn non_integer_numbers_are_invalid() {
        assert_eq!(Directive::parse(r#"{"number": 5.5}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"number": "7"}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"number": true}"#), Directive::Invalid);
    }

    #[test]
    fn missing_number_is_invalid() {
        assert_eq!(Directive::parse(r#"{"color": "red"}"#), Directive::Invalid);
        assert_eq!(Directive::parse(r#"{"action": "unknown"}"#), Directive::Invalid);
    }

    #[test]
    fn unparseable_and_non_object_frames_are_invalid() {
        assert_eq!(Directive::parse("not json"), Directive::Invalid);
        assert_eq!(Directive::parse(""), Directive::Invalid);
        assert_eq!(Directive::parse("5"), Directive::Invalid);
        assert_eq!(Directive::parse("[1, 2]"), Directive::Invalid);
    }

    #[test]
    fn init_complete_frame_shape() {
        assert_eq!(init_complete_frame(), r#"{"action":"init-complete"}"#);
    }
}
