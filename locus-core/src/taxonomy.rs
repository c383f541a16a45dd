//! Closed vocabularies used by rule tables, configuration and reports.

use serde::{Deserialize, Serialize};

/// Infrastructure category a place can contribute to.
///
/// Membership is not exclusive: one place may feed several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Hospitals, clinics, pharmacies.
    Healthcare,
    /// Schools, colleges, universities.
    Education,
    /// Stations and transit stops.
    Transport,
    /// Shops, banks and other business activity.
    Commercial,
    /// Dining, leisure, lodging.
    Lifestyle,
    /// Police and fire services.
    Safety,
    /// Parks and natural features.
    Environment,
}

impl Category {
    /// Every category in reporting order.
    pub const ALL: [Self; 7] = [
        Self::Healthcare,
        Self::Education,
        Self::Transport,
        Self::Commercial,
        Self::Lifestyle,
        Self::Safety,
        Self::Environment,
    ];
}

/// Quality tier inferred from rating and name keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Highly rated or a recognised premium brand.
    Premium,
    /// Well rated or a secondary quality keyword.
    Good,
    /// Anything else.
    Standard,
}

/// Place subtypes that select a category-specific amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    /// University campus.
    University,
    /// College or institute.
    College,
    /// Primary or secondary school.
    School,
    /// Metro, subway or light-rail station.
    Metro,
    /// Mainline railway station.
    Rail,
    /// Bus station or stand.
    Bus,
    /// Bank, ATM or other financial service.
    Financial,
    /// Hotel or resort.
    Lodging,
    /// Spa or wellness centre.
    Spa,
    /// Shopping mall.
    Mall,
}

/// Economic signals counted across nearby places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Technology parks and software campuses.
    TechHub,
    /// Financial district landmarks.
    FinancialDistrict,
    /// Premium residential developments.
    PremiumResidential,
}

/// Macro-connectivity features detected within the scan radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityFeature {
    /// Airports.
    Airport,
    /// Highways, expressways and ring roads.
    MajorHighway,
    /// Metro stations.
    MetroStation,
    /// Railway stations.
    RailwayStation,
    /// Sea ports and harbours.
    Port,
    /// Technology corridors and IT parks.
    TechCorridor,
    /// Bus terminals.
    BusTerminal,
    /// Helipads.
    Helipad,
    /// Local road proxies such as fuel stations.
    LocalRoad,
}

impl ConnectivityFeature {
    /// Every feature in combination order.
    pub const ALL: [Self; 9] = [
        Self::Airport,
        Self::MajorHighway,
        Self::MetroStation,
        Self::RailwayStation,
        Self::Port,
        Self::TechCorridor,
        Self::BusTerminal,
        Self::Helipad,
        Self::LocalRoad,
    ];
}

/// Area tier used to pick viability floors and multipliers.
///
/// `VeryPoor` and `Poor` come from the location score alone and take
/// precedence over the eight classification-driven tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Location score below the very-poor threshold.
    VeryPoor,
    /// Location score below the poor threshold.
    Poor,
    /// Metropolitan core.
    Metro,
    /// Designated smart city.
    SmartCity,
    /// Industrial estate or IT corridor.
    IndustrialIt,
    /// General urban area.
    Urban,
    /// Towns and townships.
    SemiUrban,
    /// Coastal settlement.
    Coastal,
    /// Hill station or tribal area.
    HillTribal,
    /// Anything else.
    Rural,
}

impl Tier {
    /// Every tier, score-driven tiers first.
    pub const ALL: [Self; 10] = [
        Self::VeryPoor,
        Self::Poor,
        Self::Metro,
        Self::SmartCity,
        Self::IndustrialIt,
        Self::Urban,
        Self::SemiUrban,
        Self::Coastal,
        Self::HillTribal,
        Self::Rural,
    ];

    /// Human-readable area category.
    #[must_use]
    pub const fn area_category(self) -> &'static str {
        match self {
            Self::VeryPoor => "Underdeveloped Area",
            Self::Poor => "Emerging Fringe",
            Self::Metro => "Metro",
            Self::SmartCity => "Smart City",
            Self::IndustrialIt => "Industrial/IT Hub",
            Self::Urban => "Urban",
            Self::SemiUrban => "Semi-Urban",
            Self::Coastal => "Coastal",
            Self::HillTribal => "Hill/Tribal",
            Self::Rural => "Rural",
        }
    }

    /// Risk band associated with the tier.
    #[must_use]
    pub const fn risk(self) -> &'static str {
        match self {
            Self::VeryPoor => "Very High Risk",
            Self::Poor | Self::HillTribal | Self::Rural => "High Risk",
            Self::Metro => "Low Risk",
            Self::SmartCity => "Low-Moderate Risk",
            Self::IndustrialIt | Self::Urban => "Moderate Risk",
            Self::SemiUrban | Self::Coastal => "Moderate-High Risk",
        }
    }
}

/// Focus of an area classification, used for business-growth bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaFocus {
    /// Metropolitan area.
    Metro,
    /// IT or technology hub.
    Technology,
    /// Smart city programme.
    SmartCity,
    /// Industrial estate.
    Industrial,
}

/// Letter grade derived from the location score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InfrastructureGrade {
    /// Score of at least 4.0.
    A,
    /// Score of at least 3.0.
    B,
    /// Score of at least 2.0.
    C,
    /// Score of at least 1.0.
    D,
    /// Anything lower.
    E,
}

impl InfrastructureGrade {
    /// Grade letter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl std::fmt::Display for InfrastructureGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viability band behind the headline recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBand {
    /// Viability of at least 85.
    Outstanding,
    /// Viability of at least 70.
    Excellent,
    /// Viability of at least 55.
    Good,
    /// Viability of at least 40.
    Limited,
    /// Viability of at least 25.
    Speculative,
    /// Anything lower.
    Poor,
}

impl RecommendationBand {
    /// Headline text for the band.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding Investment Opportunity",
            Self::Excellent => "Excellent Investment Potential",
            Self::Good => "Good Investment Prospect",
            Self::Limited => "Limited Investment Appeal",
            Self::Speculative => "Speculative Investment",
            Self::Poor => "Poor Investment Prospect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tiers_serialise_as_snake_case() {
        let json = serde_json::to_string(&Tier::IndustrialIt).expect("serialise tier");
        assert_eq!(json, "\"industrial_it\"");
    }

    #[rstest]
    #[case(Tier::Metro, "Low Risk")]
    #[case(Tier::VeryPoor, "Very High Risk")]
    #[case(Tier::Coastal, "Moderate-High Risk")]
    fn tier_risk_labels(#[case] tier: Tier, #[case] expected: &str) {
        assert_eq!(tier.risk(), expected);
    }
}
