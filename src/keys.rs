use std::fmt;
use std::num::ParseFloatError;

/// The five metrics the sensor firmware reports. Cache keys and gauge
/// updates are derived from these and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Wifi,
    Rco2,
    Pm02,
    Atmp,
    Rhum,
}

impl Metric {
    // Canonical order, used for both writes and reads.
    pub const ALL: [Metric; 5] = [
        Metric::Wifi,
        Metric::Rco2,
        Metric::Pm02,
        Metric::Atmp,
        Metric::Rhum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Wifi => "wifi",
            Metric::Rco2 => "rco2",
            Metric::Pm02 => "pm02",
            Metric::Atmp => "atmp",
            Metric::Rhum => "rhum",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn cache_key(device_id: &str, metric: Metric) -> String {
    format!("{}_{}", device_id, metric.name())
}

// Stored values are plain text; everything reads back as a float.
pub fn decode_value(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_device_then_metric() {
        assert_eq!(cache_key("AG-12345", Metric::Wifi), "AG-12345_wifi");
        assert_eq!(cache_key("dev1", Metric::Atmp), "dev1_atmp");
    }

    #[test]
    fn every_metric_has_a_distinct_key() {
        let keys: Vec<String> = Metric::ALL.iter().map(|m| cache_key("d", *m)).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }

    #[test]
    fn decode_accepts_plain_numbers() {
        assert_eq!(decode_value("517"), Ok(517.0));
        assert_eq!(decode_value("-51"), Ok(-51.0));
        assert_eq!(decode_value("15.5"), Ok(15.5));
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        assert_eq!(decode_value(" 78\n"), Ok(78.0));
    }

    #[test]
    fn decode_rejects_non_numeric_text() {
        assert!(decode_value("banana").is_err());
        assert!(decode_value("").is_err());
        assert!(decode_value("15,5").is_err());
    }
}
