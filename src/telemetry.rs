use serde::{Deserialize, Serialize};

// One telemetry push from the sensor firmware. All five fields are
// required; a missing or mistyped field fails the decode. atmp is in
// whatever unit the device is configured for, never converted here.
#[derive(Deserialize, Debug)]
pub struct Reading {
    pub wifi: i64,
    pub rco2: i64,
    pub pm02: i64,
    pub atmp: f64,
    pub rhum: i64,
}

// Response shape for the JSON read endpoint. Home Assistant wants a
// float for everything.
#[derive(Serialize, Debug, PartialEq)]
pub struct SensorValues {
    pub wifi: f64,
    pub rco2: f64,
    pub pm02: f64,
    pub atmp: f64,
    pub rhum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firmware_payload_decodes() {
        let reading: Reading =
            serde_json::from_str(r#"{"wifi":-51,"rco2":517,"pm02":4,"atmp":15.5,"rhum":78}"#)
                .unwrap();
        assert_eq!(reading.wifi, -51);
        assert_eq!(reading.rco2, 517);
        assert_eq!(reading.pm02, 4);
        assert_eq!(reading.atmp, 15.5);
        assert_eq!(reading.rhum, 78);
    }

    #[test]
    fn missing_field_fails_decode() {
        let result: Result<Reading, _> =
            serde_json::from_str(r#"{"wifi":-51,"rco2":517,"pm02":4,"atmp":15.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn mistyped_field_fails_decode() {
        let result: Result<Reading, _> =
            serde_json::from_str(r#"{"wifi":"-51","rco2":517,"pm02":4,"atmp":15.5,"rhum":78}"#);
        assert!(result.is_err());
    }
}
