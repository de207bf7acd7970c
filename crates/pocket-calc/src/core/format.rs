//! Conversion between numbers and display text
//!
//! This is the only place where operands cross between `f64` and strings.

use crate::core::{CalcError, CalcResult};

/// Formats a computed value for the display.
///
/// Uses the shortest representation that reads back to the same `f64`,
/// never scientific notation. Negative zero shows as `0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Reads a typed entry (`"12"`, `"-0.5"`, `"3."`) as a number
pub fn parse_entry(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidEntry(text.to_string()))
}

/// Serde adapter storing an `f64` as its display text.
///
/// JSON has no literal for infinities or NaN, so numbers travel as the same
/// strings the display shows (`"8"`, `"Infinity"`, `"NaN"`).
pub mod number_text {
    use super::{format_number, parse_entry};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes `value` as its display text
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    /// Reads display text back into an `f64`
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_entry(&text).map_err(D::Error::custom)
    }
}

/// [`number_text`] for optional operands; `None` stays `null`
pub mod option_number_text {
    use super::{format_number, parse_entry};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Writes `Some(value)` as its display text
    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&format_number(*v)),
            None => serializer.serialize_none(),
        }
    }

    /// Reads `null` or display text
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse_entry(&text).map_err(D::Error::custom))
            .transpose()
    }
}

/// Cuts `text` to at most `max_len` characters. Never rounds.
#[must_use]
pub fn truncate_display(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_format_number_keeps_full_precision() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_no_scientific_notation() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("12"), Ok(12.0));
        assert_eq!(parse_entry("-0.5"), Ok(-0.5));
        assert_eq!(parse_entry("3."), Ok(3.0));
        assert_eq!(parse_entry("0."), Ok(0.0));
    }

    #[test]
    fn test_parse_entry_rejects_garbage() {
        assert_eq!(parse_entry("-"), Err(CalcError::InvalidEntry("-".into())));
    }

    #[test]
    fn test_parse_entry_reads_non_finite_display_text() {
        assert_eq!(parse_entry("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_entry("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_entry("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_number_text_serde() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Operands {
            #[serde(with = "number_text")]
            a: f64,
            #[serde(with = "option_number_text")]
            b: Option<f64>,
            #[serde(with = "option_number_text")]
            c: Option<f64>,
        }

        let operands = Operands {
            a: f64::NEG_INFINITY,
            b: Some(0.25),
            c: None,
        };
        let json = serde_json::to_string(&operands).unwrap();
        assert_eq!(json, r#"{"a":"-Infinity","b":"0.25","c":null}"#);
        assert_eq!(serde_json::from_str::<Operands>(&json).unwrap(), operands);
        assert!(serde_json::from_str::<Operands>(r#"{"a":"x","b":null,"c":null}"#).is_err());
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("0.30000000000000004", 12), "0.3000000000");
        assert_eq!(truncate_display("8", 12), "8");
        assert_eq!(truncate_display("-1.99999", 4), "-1.9");
    }

    #[test]
    fn test_truncate_display_counts_chars() {
        assert_eq!(truncate_display("−12", 2), "−1");
    }
}
