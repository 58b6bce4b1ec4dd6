use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};

use crate::telemetry::SensorValues;

/// The long-lived gauge instruments. Probe meta gauges are written on
/// every scrape, the domain gauges only when a snapshot is complete, so
/// a failed probe leaves the last published reading visible.
#[derive(Clone)]
pub struct Gauges {
    pub probe_duration: Gauge,
    pub probe_success: Gauge,
    pub wifi: Gauge,
    pub rco2: Gauge,
    pub pm02: Gauge,
    pub atmp: Gauge,
    pub rhum: Gauge,
}

impl Gauges {
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let gauges = Gauges {
            probe_duration: Gauge::with_opts(Opts::new(
                "probe_duration",
                "How many seconds the probe took",
            ))?,
            probe_success: Gauge::with_opts(Opts::new(
                "probe_success",
                "Whether or not the probe succeeded",
            ))?,
            wifi: Gauge::with_opts(Opts::new(
                "airgradient_wifi_strength",
                "WiFi signal strength (dB)",
            ))?,
            rco2: Gauge::with_opts(Opts::new(
                "airgradient_rco2",
                "Relative CO2 concentration (ppm)",
            ))?,
            pm02: Gauge::with_opts(Opts::new(
                "airgradient_pm02",
                "2.5 ug particulate matter concentration (ug/m^3)",
            ))?,
            atmp: Gauge::with_opts(Opts::new(
                "airgradient_atmp",
                "Atmospheric temperature (Celsius or Fahrenheit, device configured)",
            ))?,
            rhum: Gauge::with_opts(Opts::new("airgradient_rhum", "Relative humidity (%)"))?,
        };

        for gauge in [
            &gauges.probe_duration,
            &gauges.probe_success,
            &gauges.wifi,
            &gauges.rco2,
            &gauges.pm02,
            &gauges.atmp,
            &gauges.rhum,
        ] {
            registry.register(Box::new(gauge.clone()))?;
        }

        Ok(gauges)
    }

    pub fn publish(&self, values: &SensorValues) {
        self.wifi.set(values.wifi);
        self.rco2.set(values.rco2);
        self.pm02.set(values.pm02);
        self.atmp.set(values.atmp);
        self.rhum.set(values.rhum);
    }
}

// Render every metric family on the registry in the text format.
pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_sets_every_domain_gauge() {
        let registry = Registry::new();
        let gauges = Gauges::register(&registry).unwrap();
        gauges.publish(&SensorValues {
            wifi: -51.0,
            rco2: 517.0,
            pm02: 4.0,
            atmp: 15.5,
            rhum: 78.0,
        });

        let body = encode(&registry).unwrap();
        assert!(body.contains("airgradient_wifi_strength -51"));
        assert!(body.contains("airgradient_rco2 517"));
        assert!(body.contains("airgradient_pm02 4"));
        assert!(body.contains("airgradient_atmp 15.5"));
        assert!(body.contains("airgradient_rhum 78"));
    }

    #[test]
    fn registering_twice_on_one_registry_fails() {
        let registry = Registry::new();
        Gauges::register(&registry).unwrap();
        assert!(Gauges::register(&registry).is_err());
    }
}
