//! Connectivity analyzer settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, check};
use crate::rules::{KeywordRule, RuleSet};
use crate::taxonomy::ConnectivityFeature;

/// Combination weight for each connectivity feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureWeights {
    /// Airports.
    pub airport: f64,
    /// Major highways.
    pub major_highway: f64,
    /// Metro stations.
    pub metro_station: f64,
    /// Railway stations.
    pub railway_station: f64,
    /// Tech corridors.
    pub tech_corridor: f64,
    /// Ports.
    pub port: f64,
    /// Bus terminals.
    pub bus_terminal: f64,
    /// Helipads.
    pub helipad: f64,
    /// Local roads.
    pub local_road: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            airport: 0.25,
            major_highway: 0.20,
            metro_station: 0.15,
            railway_station: 0.15,
            tech_corridor: 0.10,
            port: 0.08,
            bus_terminal: 0.05,
            helipad: 0.02,
            local_road: 0.01,
        }
    }
}

impl FeatureWeights {
    /// Weight for a feature.
    #[must_use]
    pub const fn weight(&self, feature: ConnectivityFeature) -> f64 {
        match feature {
            ConnectivityFeature::Airport => self.airport,
            ConnectivityFeature::MajorHighway => self.major_highway,
            ConnectivityFeature::MetroStation => self.metro_station,
            ConnectivityFeature::RailwayStation => self.railway_station,
            ConnectivityFeature::Port => self.port,
            ConnectivityFeature::TechCorridor => self.tech_corridor,
            ConnectivityFeature::BusTerminal => self.bus_terminal,
            ConnectivityFeature::Helipad => self.helipad,
            ConnectivityFeature::LocalRoad => self.local_road,
        }
    }
}

/// Settings for the connectivity analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectivityConfig {
    /// Places farther than this are ignored.
    pub scan_radius_km: f64,
    /// Distance over which the connectivity multiplier falls by `1.0`.
    pub decay_span_km: f64,
    /// Lowest connectivity multiplier.
    pub min_multiplier: f64,
    /// Value of an airport whose text contains `international_keyword`.
    pub international_airport_value: f64,
    /// Keyword marking an international airport.
    pub international_keyword: String,
    /// Feature detection rules; each rule's weight is the feature value.
    pub feature_rules: RuleSet<ConnectivityFeature>,
    /// Combination weights.
    pub weights: FeatureWeights,
    /// Upper clamp of the index.
    pub max_index: f64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            scan_radius_km: 10.0,
            decay_span_km: 10.0,
            min_multiplier: 0.3,
            international_airport_value: 100.0,
            international_keyword: "international".to_owned(),
            feature_rules: default_feature_rules(),
            weights: FeatureWeights::default(),
            max_index: 100.0,
        }
    }
}

impl ConnectivityConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check::positive("connectivity.scanRadiusKm", self.scan_radius_km)?;
        check::positive("connectivity.decaySpanKm", self.decay_span_km)?;
        check::weight("connectivity.minMultiplier", self.min_multiplier)?;
        check::weight(
            "connectivity.internationalAirportValue",
            self.international_airport_value,
        )?;
        check::positive("connectivity.maxIndex", self.max_index)?;
        check::patterns("connectivity.featureRules", &self.feature_rules)?;
        for rule in self.feature_rules.iter() {
            check::weight("connectivity.featureRules.weight", rule.weight)?;
        }
        for feature in ConnectivityFeature::ALL {
            check::weight("connectivity.weights", self.weights.weight(feature))?;
        }
        Ok(())
    }
}

fn default_feature_rules() -> RuleSet<ConnectivityFeature> {
    RuleSet::new(vec![
        KeywordRule::new(ConnectivityFeature::Airport, 70.0)
            .with_place_types(["airport"])
            .with_patterns([
                "international airport",
                "domestic airport",
                "airport terminal",
                "aerodrome",
                "airfield",
            ]),
        KeywordRule::new(ConnectivityFeature::MajorHighway, 60.0).with_patterns([
            "highway",
            "expressway",
            "national highway",
            "state highway",
            "freeway",
            "motorway",
            "ring road",
            "bypass",
            "nh",
        ]),
        KeywordRule::new(ConnectivityFeature::MetroStation, 50.0)
            .with_place_types(["subway_station", "light_rail_station"])
            .with_patterns(["metro station", "metro rail", "subway station"]),
        KeywordRule::new(ConnectivityFeature::RailwayStation, 45.0)
            .with_place_types(["train_station"])
            .with_patterns(["railway station", "railway junction", "rail station"]),
        KeywordRule::new(ConnectivityFeature::Port, 55.0).with_patterns([
            "port",
            "seaport",
            "port trust",
            "harbour",
            "harbor",
            "dock",
            "jetty",
        ]),
        KeywordRule::new(ConnectivityFeature::TechCorridor, 40.0).with_patterns([
            "tech park",
            "it park",
            "technology park",
            "software park",
            "cyber city",
            "infopark",
            "tech corridor",
            "it corridor",
            "sez",
        ]),
        KeywordRule::new(ConnectivityFeature::BusTerminal, 25.0)
            .with_place_types(["bus_station"])
            .with_patterns(["bus terminal", "bus stand", "bus depot", "isbt"]),
        KeywordRule::new(ConnectivityFeature::Helipad, 35.0).with_patterns(["helipad", "heliport"]),
        KeywordRule::new(ConnectivityFeature::LocalRoad, 10.0)
            .with_place_types(["gas_station"])
            .with_patterns(["petrol pump", "fuel station"]),
    ])
}
