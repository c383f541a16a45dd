//! Deterministic keyword classifier used when the intelligence provider
//! fails.

use locus_core::{
    DevelopmentStage, IntelligenceProvider, KeywordRule, LocationIntelligence, LocationQuery,
    LocationType, MatchText, ProviderError, RuleSet,
};

/// Settlement profile picked from address keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressProfile {
    /// Listed metropolitan city.
    Metro,
    /// IT park or technology cluster.
    TechHub,
    /// Smart city programme.
    SmartCity,
    /// Urban neighbourhood.
    Urban,
    /// Town or taluk.
    Township,
    /// Village or rural land.
    Rural,
}

impl AddressProfile {
    /// Classification reported for the profile.
    #[must_use]
    pub fn intelligence(self) -> LocationIntelligence {
        let (location_type, development_stage, score, area) = match self {
            Self::Metro => (
                LocationType::Metropolitan,
                DevelopmentStage::Developed,
                85.0,
                "Metro city",
            ),
            Self::TechHub => (LocationType::City, DevelopmentStage::Developing, 75.0, "IT park"),
            Self::SmartCity => (
                LocationType::City,
                DevelopmentStage::Developing,
                75.0,
                "Smart city",
            ),
            Self::Urban => (LocationType::City, DevelopmentStage::Developing, 60.0, "Urban"),
            Self::Township => (LocationType::Town, DevelopmentStage::Developing, 45.0, "Township"),
            Self::Rural => (
                LocationType::Village,
                DevelopmentStage::Underdeveloped,
                25.0,
                "Rural",
            ),
        };
        LocationIntelligence {
            location_type,
            development_stage,
            investment_potential: score,
            area_classification: area.to_owned(),
            priority_score: score,
            ..LocationIntelligence::neutral()
        }
    }
}

/// [`IntelligenceProvider`] that classifies addresses by keyword.
///
/// Rules are consulted in order and the first match wins. Addresses that
/// match nothing take [`LocationIntelligence::neutral`]. Classification
/// never fails.
///
/// # Examples
/// ```
/// use locus_core::{IntelligenceProvider, LocationQuery, LocationType};
/// use locus_data::KeywordIntelligenceClassifier;
///
/// let classifier = KeywordIntelligenceClassifier::default();
/// let query = LocationQuery::new(geo::Coord { x: 72.87, y: 19.11 }, "Andheri East, Mumbai");
/// let intelligence = classifier.classify(&query).unwrap_or_default();
/// assert_eq!(intelligence.location_type, LocationType::Metropolitan);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordIntelligenceClassifier {
    rules: RuleSet<AddressProfile>,
}

impl KeywordIntelligenceClassifier {
    /// Build a classifier from custom rules.
    #[must_use]
    pub const fn new(rules: RuleSet<AddressProfile>) -> Self {
        Self { rules }
    }

    /// Classify an address.
    #[must_use]
    pub fn classify_address(&self, address: &str) -> LocationIntelligence {
        let text = MatchText::new([address]);
        self.rules
            .first_match(&text, &[])
            .map_or_else(LocationIntelligence::neutral, |rule| {
                rule.tag.intelligence()
            })
    }
}

impl Default for KeywordIntelligenceClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl IntelligenceProvider for KeywordIntelligenceClassifier {
    fn classify(&self, query: &LocationQuery) -> Result<LocationIntelligence, ProviderError> {
        Ok(self.classify_address(&query.address))
    }
}

fn default_rules() -> RuleSet<AddressProfile> {
    RuleSet::new(vec![
        KeywordRule::new(AddressProfile::Metro, 0.0).with_patterns([
            "mumbai",
            "bombay",
            "delhi",
            "new delhi",
            "bengaluru",
            "bangalore",
            "chennai",
            "kolkata",
            "hyderabad",
            "pune",
            "ahmedabad",
            "gurugram",
            "gurgaon",
            "noida",
            "navi mumbai",
            "thane",
        ]),
        KeywordRule::new(AddressProfile::TechHub, 0.0).with_patterns([
            "it park",
            "tech park",
            "technology park",
            "software park",
            "cyber city",
            "infopark",
            "sez",
        ]),
        KeywordRule::new(AddressProfile::SmartCity, 0.0).with_patterns(["smart city"]),
        KeywordRule::new(AddressProfile::Urban, 0.0).with_patterns([
            "city",
            "urban",
            "nagar",
            "municipal corporation",
        ]),
        KeywordRule::new(AddressProfile::Township, 0.0).with_patterns([
            "town",
            "township",
            "taluk",
            "taluka",
            "tehsil",
        ]),
        KeywordRule::new(AddressProfile::Rural, 0.0).with_patterns([
            "village",
            "rural",
            "gram",
            "panchayat",
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn classifier() -> KeywordIntelligenceClassifier {
        KeywordIntelligenceClassifier::default()
    }

    #[rstest]
    #[case("Andheri, Mumbai", LocationType::Metropolitan, "Metro city")]
    #[case("Whitefield, Bangalore", LocationType::Metropolitan, "Metro city")]
    #[case("Technopark IT Park, Kochi", LocationType::City, "IT park")]
    #[case("Smart City Road, Bhubaneswar", LocationType::City, "Smart city")]
    #[case("Gandhi Nagar, Vellore", LocationType::City, "Urban")]
    #[case("Hosur Taluk", LocationType::Town, "Township")]
    #[case("Rampur village", LocationType::Village, "Rural")]
    fn addresses_map_to_profiles(
        classifier: KeywordIntelligenceClassifier,
        #[case] address: &str,
        #[case] location_type: LocationType,
        #[case] area: &str,
    ) {
        let intelligence = classifier.classify_address(address);
        assert_eq!(intelligence.location_type, location_type);
        assert_eq!(intelligence.area_classification, area);
    }

    #[rstest]
    fn unknown_address_is_neutral(classifier: KeywordIntelligenceClassifier) {
        assert_eq!(
            classifier.classify_address("Plot 14, Sector 9"),
            LocationIntelligence::neutral()
        );
    }

    #[rstest]
    fn metro_profile_scores() {
        let intelligence = AddressProfile::Metro.intelligence();
        assert_eq!(intelligence.investment_potential, 85.0);
        assert_eq!(intelligence.priority_score, 85.0);
        assert_eq!(intelligence.development_stage, DevelopmentStage::Developed);
    }

    #[rstest]
    fn classification_never_fails(classifier: KeywordIntelligenceClassifier) {
        let query = LocationQuery::new(locus_core::test_support::FIXTURE_ORIGIN, "");
        assert_eq!(classifier.classify(&query), Ok(LocationIntelligence::neutral()));
    }
}
