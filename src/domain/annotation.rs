//! A single accepted grid annotation.

/// One accepted "place" record.
///
/// The relay treats client payloads as opaque beyond the fields it must
/// inspect, and replays them byte-identical to how they arrived. An
/// `Annotation` therefore keeps the verbatim frame text (never a
/// re-serialization of the parsed form, which would drop unknown fields or
/// reorder keys) plus the validated cell number extracted at acceptance
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    raw: String,
    number: i64,
}

impl Annotation {
    /// Creates an annotation from the verbatim frame text and its validated
    /// number. The caller has already checked the `1..=100` range.
    #[must_use]
    pub fn new(raw: impl Into<String>, number: i64) -> Self {
        Self {
            raw: raw.into(),
            number,
        }
    }

    /// The frame text exactly as received from the original sender.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The validated cell number (1–100 inclusive).
    #[must_use]
    pub fn number(&self) -> i64 {
        self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_verbatim_text() {
        let raw = r#"{"number": 7,  "color": "red"}"#;
        let annotation = Annotation::new(raw, 7);
        assert_eq!(annotation.raw(), raw);
        assert_eq!(annotation.number(), 7);
    }
}
