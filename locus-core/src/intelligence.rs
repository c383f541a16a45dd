//! Externally supplied location classification.
//!
//! The classification arrives from an AI provider or, when that fails, from
//! the keyword fallback classifier. It is immutable for the duration of an
//! analysis and is sanitised on entry so out-of-range numbers never reach
//! the engine.

use std::str::FromStr;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::sanitise;

/// Settlement type of the analysed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Large metropolitan area.
    Metropolitan,
    /// City.
    City,
    /// Town.
    Town,
    /// Village.
    Village,
    /// Rural land.
    Rural,
    /// Land where settlement is not possible.
    Uninhabitable,
}

impl LocationType {
    /// Lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metropolitan => "metropolitan",
            Self::City => "city",
            Self::Town => "town",
            Self::Village => "village",
            Self::Rural => "rural",
            Self::Uninhabitable => "uninhabitable",
        }
    }
}

impl FromStr for LocationType {
    type Err = std::convert::Infallible;

    /// Parse case-insensitively. Unknown values map to [`LocationType::Rural`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "metropolitan" | "metro" => Self::Metropolitan,
            "city" => Self::City,
            "town" => Self::Town,
            "village" => Self::Village,
            "uninhabitable" => Self::Uninhabitable,
            _ => Self::Rural,
        })
    }
}

/// Development stage of the analysed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStage {
    /// Mature infrastructure.
    Developed,
    /// Infrastructure under active build-out.
    Developing,
    /// Little infrastructure.
    Underdeveloped,
    /// Development is restricted.
    Restricted,
}

impl DevelopmentStage {
    /// Lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developed => "developed",
            Self::Developing => "developing",
            Self::Underdeveloped => "underdeveloped",
            Self::Restricted => "restricted",
        }
    }
}

impl FromStr for DevelopmentStage {
    type Err = std::convert::Infallible;

    /// Parse case-insensitively. Unknown values map to
    /// [`DevelopmentStage::Underdeveloped`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "developed" => Self::Developed,
            "developing" => Self::Developing,
            "restricted" => Self::Restricted,
            _ => Self::Underdeveloped,
        })
    }
}

const NEUTRAL_POTENTIAL: f64 = 50.0;
const NEUTRAL_PRIORITY: f64 = 50.0;
const NEUTRAL_SAFETY: f64 = 5.0;

/// Classification of the analysed location.
///
/// # Examples
/// ```
/// use locus_core::{DevelopmentStage, LocationIntelligence, LocationType};
///
/// let intelligence = LocationIntelligence {
///     location_type: LocationType::Metropolitan,
///     development_stage: DevelopmentStage::Developed,
///     investment_potential: 140.0,
///     area_classification: "Metro city".into(),
///     priority_score: f64::NAN,
///     safety_score: 8.0,
/// }
/// .sanitised();
///
/// assert_eq!(intelligence.investment_potential, 100.0);
/// assert_eq!(intelligence.priority_score, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationIntelligence {
    /// Settlement type.
    pub location_type: LocationType,
    /// Development stage.
    pub development_stage: DevelopmentStage,
    /// Investment potential in `0..=100`.
    pub investment_potential: f64,
    /// Free-form tier tag such as "Metro city", "IT park" or "Township".
    pub area_classification: String,
    /// Priority score in `0..=100`.
    pub priority_score: f64,
    /// Safety score in `1..=10`.
    pub safety_score: f64,
}

impl LocationIntelligence {
    /// Neutral classification used when nothing better is available.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            location_type: LocationType::Town,
            development_stage: DevelopmentStage::Developing,
            investment_potential: NEUTRAL_POTENTIAL,
            area_classification: "Town".to_owned(),
            priority_score: NEUTRAL_PRIORITY,
            safety_score: NEUTRAL_SAFETY,
        }
    }

    /// Return a copy with every numeric field inside its documented range.
    ///
    /// Non-finite values take their neutral default.
    #[must_use]
    pub fn sanitised(&self) -> Self {
        Self {
            location_type: self.location_type,
            development_stage: self.development_stage,
            investment_potential: sanitise::bounded_or(
                self.investment_potential,
                0.0,
                100.0,
                NEUTRAL_POTENTIAL,
            ),
            area_classification: self.area_classification.trim().to_owned(),
            priority_score: sanitise::bounded_or(self.priority_score, 0.0, 100.0, NEUTRAL_PRIORITY),
            safety_score: sanitise::bounded_or(self.safety_score, 1.0, 10.0, NEUTRAL_SAFETY),
        }
    }
}

impl Default for LocationIntelligence {
    fn default() -> Self {
        Self::neutral()
    }
}

/// What the intelligence provider is asked to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    /// Analysed position (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Free-text address of the analysed position.
    #[serde(default)]
    pub address: String,
}

impl LocationQuery {
    /// Construct a query.
    #[must_use]
    pub fn new(origin: Coord<f64>, address: impl Into<String>) -> Self {
        Self {
            origin,
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Metropolitan", LocationType::Metropolitan)]
    #[case(" CITY ", LocationType::City)]
    #[case("hamlet", LocationType::Rural)]
    fn location_types_parse_leniently(#[case] input: &str, #[case] expected: LocationType) {
        assert_eq!(input.parse::<LocationType>(), Ok(expected));
    }

    #[rstest]
    #[case("developing", DevelopmentStage::Developing)]
    #[case("unknown", DevelopmentStage::Underdeveloped)]
    fn stages_parse_leniently(#[case] input: &str, #[case] expected: DevelopmentStage) {
        assert_eq!(input.parse::<DevelopmentStage>(), Ok(expected));
    }

    #[rstest]
    fn sanitising_clamps_and_defaults() {
        let raw = LocationIntelligence {
            investment_potential: -20.0,
            priority_score: f64::INFINITY,
            safety_score: 0.0,
            area_classification: "  IT park ".into(),
            ..LocationIntelligence::neutral()
        };
        let clean = raw.sanitised();
        assert_eq!(clean.investment_potential, 0.0);
        assert_eq!(clean.priority_score, 50.0);
        assert_eq!(clean.safety_score, 1.0);
        assert_eq!(clean.area_classification, "IT park");
    }

    #[rstest]
    fn intelligence_json_is_camel_case() {
        let json = r#"{
            "locationType": "city",
            "developmentStage": "developed",
            "investmentPotential": 70,
            "areaClassification": "Urban",
            "priorityScore": 65,
            "safetyScore": 7
        }"#;
        let parsed: LocationIntelligence = serde_json::from_str(json).expect("intelligence json");
        assert_eq!(parsed.location_type, LocationType::City);
        assert_eq!(parsed.development_stage, DevelopmentStage::Developed);
    }
}
