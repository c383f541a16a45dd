//! Investment viability and tier classification settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, check};
use crate::intelligence::LocationType;
use crate::ladder::Ladder;
use crate::rules::{KeywordRule, RuleSet};
use crate::taxonomy::Tier;

const MAX_PERCENT: f64 = 100.0;

/// Baseline, priority bonus and multiplier for one tier.
///
/// The baseline is `max(floor, base_points * scale)` and the priority
/// bonus is `min(priority_cap, priority * priority_rate)` plus the
/// `priority_extra` ladder value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProfile {
    /// Lowest baseline.
    pub floor: f64,
    /// Scale applied to the base points.
    pub scale: f64,
    /// Priority bonus per priority point.
    pub priority_rate: f64,
    /// Ceiling of the proportional priority bonus.
    pub priority_cap: f64,
    /// Extra priority bonus keyed by priority score.
    #[serde(default = "zero_ladder")]
    pub priority_extra: Ladder<f64>,
    /// Tier viability multiplier keyed by priority score.
    #[serde(default = "unit_ladder")]
    pub multiplier: Ladder<f64>,
}

fn zero_ladder() -> Ladder<f64> {
    Ladder::new([], 0.0)
}

fn unit_ladder() -> Ladder<f64> {
    Ladder::new([], 1.0)
}

impl TierProfile {
    fn plain(floor: f64, scale: f64, priority_rate: f64, priority_cap: f64) -> Self {
        Self {
            floor,
            scale,
            priority_rate,
            priority_cap,
            priority_extra: zero_ladder(),
            multiplier: unit_ladder(),
        }
    }

    fn with_multiplier(mut self, multiplier: Ladder<f64>) -> Self {
        self.multiplier = multiplier;
        self
    }

    fn with_priority_extra(mut self, extra: Ladder<f64>) -> Self {
        self.priority_extra = extra;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check::weight("viability.tiers.floor", self.floor)?;
        check::weight("viability.tiers.scale", self.scale)?;
        check::weight("viability.tiers.priorityRate", self.priority_rate)?;
        check::weight("viability.tiers.priorityCap", self.priority_cap)?;
        check::weight("viability.tiers.multiplier", self.multiplier.fallback)?;
        for step in &self.multiplier.steps {
            check::weight("viability.tiers.multiplier", step.value)?;
        }
        Ok(())
    }
}

/// One profile per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierProfiles {
    /// Very poor locations.
    pub very_poor: TierProfile,
    /// Poor locations.
    pub poor: TierProfile,
    /// Metropolitan areas.
    pub metro: TierProfile,
    /// Smart cities.
    pub smart_city: TierProfile,
    /// Industrial and IT hubs.
    pub industrial_it: TierProfile,
    /// Urban areas.
    pub urban: TierProfile,
    /// Semi-urban areas.
    pub semi_urban: TierProfile,
    /// Coastal areas.
    pub coastal: TierProfile,
    /// Hill and tribal areas.
    pub hill_tribal: TierProfile,
    /// Rural areas.
    pub rural: TierProfile,
}

impl Default for TierProfiles {
    fn default() -> Self {
        Self {
            very_poor: TierProfile::plain(5.0, 0.3, 0.10, 8.0),
            poor: TierProfile::plain(10.0, 0.5, 0.10, 8.0),
            metro: TierProfile::plain(60.0, 1.0, 0.45, 40.0)
                .with_priority_extra(Ladder::new([(95.0, 15.0)], 0.0))
                .with_multiplier(Ladder::new([(95.0, 1.5), (85.0, 1.35)], 1.2)),
            smart_city: TierProfile::plain(50.0, 1.1, 0.35, 32.0)
                .with_multiplier(Ladder::new([], 1.3)),
            industrial_it: TierProfile::plain(45.0, 1.0, 0.35, 32.0)
                .with_multiplier(Ladder::new([], 1.4)),
            urban: TierProfile::plain(25.0, 0.8, 0.28, 25.0)
                .with_multiplier(Ladder::new([], 1.2)),
            semi_urban: TierProfile::plain(20.0, 0.7, 0.20, 18.0),
            coastal: TierProfile::plain(30.0, 0.8, 0.20, 18.0),
            hill_tribal: TierProfile::plain(15.0, 0.6, 0.15, 12.0),
            rural: TierProfile::plain(12.0, 0.6, 0.12, 10.0),
        }
    }
}

impl TierProfiles {
    /// Profile for a tier.
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &TierProfile {
        match tier {
            Tier::VeryPoor => &self.very_poor,
            Tier::Poor => &self.poor,
            Tier::Metro => &self.metro,
            Tier::SmartCity => &self.smart_city,
            Tier::IndustrialIt => &self.industrial_it,
            Tier::Urban => &self.urban,
            Tier::SemiUrban => &self.semi_urban,
            Tier::Coastal => &self.coastal,
            Tier::HillTribal => &self.hill_tribal,
            Tier::Rural => &self.rural,
        }
    }
}

/// Tier used when no classification rule matches, keyed by location type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeFallback {
    /// Metropolitan locations.
    pub metropolitan: Tier,
    /// Cities.
    pub city: Tier,
    /// Towns.
    pub town: Tier,
    /// Every other location type.
    pub other: Tier,
}

impl Default for TypeFallback {
    fn default() -> Self {
        Self {
            metropolitan: Tier::Metro,
            city: Tier::Urban,
            town: Tier::SemiUrban,
            other: Tier::Rural,
        }
    }
}

impl TypeFallback {
    /// Tier for a location type.
    #[must_use]
    pub const fn tier(&self, location_type: LocationType) -> Tier {
        match location_type {
            LocationType::Metropolitan => self.metropolitan,
            LocationType::City => self.city,
            LocationType::Town => self.town,
            LocationType::Village | LocationType::Rural | LocationType::Uninhabitable => {
                self.other
            }
        }
    }
}

/// Capped market sub-score: `min(cap, value / divisor * cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTerm {
    /// Value at which the term saturates.
    pub divisor: f64,
    /// Ceiling of the term.
    pub cap: f64,
}

impl MarketTerm {
    /// Construct a market term.
    #[must_use]
    pub const fn new(divisor: f64, cap: f64) -> Self {
        Self { divisor, cap }
    }
}

/// Market fundamentals feeding the viability bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketConfig {
    /// Infrastructure maturity, from the location score.
    pub infrastructure: MarketTerm,
    /// Economic activity, from the commercial total.
    pub economic: MarketTerm,
    /// Connectivity, from the connectivity index.
    pub connectivity: MarketTerm,
    /// Demographics, from education plus lifestyle totals.
    pub demographics: MarketTerm,
    /// Transportation, from the transport total.
    pub transport: MarketTerm,
    /// Share of the market total added to viability.
    pub share: f64,
    /// Ceiling of the viability bonus.
    pub cap: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            infrastructure: MarketTerm::new(5.0, 25.0),
            economic: MarketTerm::new(15.0, 20.0),
            connectivity: MarketTerm::new(150.0, 20.0),
            demographics: MarketTerm::new(20.0, 15.0),
            transport: MarketTerm::new(10.0, 20.0),
            share: 0.3,
            cap: 30.0,
        }
    }
}

impl MarketConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for term in [
            self.infrastructure,
            self.economic,
            self.connectivity,
            self.demographics,
            self.transport,
        ] {
            check::positive("viability.market.divisor", term.divisor)?;
            check::weight("viability.market.cap", term.cap)?;
        }
        check::weight("viability.market.share", self.share)?;
        check::weight("viability.market.cap", self.cap)
    }
}

/// Additive increments of the viability multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViabilityMultipliers {
    /// Keyed by connectivity index.
    pub connectivity: Ladder<f64>,
    /// Keyed by amenity count.
    pub amenities: Ladder<f64>,
    /// Keyed by commercial total.
    pub commercial: Ladder<f64>,
    /// Scale applied to the economic signal bonuses of the location score.
    pub signal_scale: f64,
}

impl Default for ViabilityMultipliers {
    fn default() -> Self {
        Self {
            connectivity: Ladder::new([(100.0, 0.3), (50.0, 0.15)], 0.0),
            amenities: Ladder::new([(30.0, 0.25), (15.0, 0.15), (8.0, 0.1)], 0.0),
            commercial: Ladder::new([(10.0, 0.2), (5.0, 0.1)], 0.0),
            signal_scale: 2.0,
        }
    }
}

/// Settings for the viability calculator and tier classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViabilityConfig {
    /// Scores below this are very poor.
    pub very_poor_below: f64,
    /// Scores below this, and not very poor, are poor.
    pub poor_below: f64,
    /// Base points at the maximum location score.
    pub base_points: f64,
    /// Area classification rules in priority order.
    pub tier_rules: RuleSet<Tier>,
    /// Tier when no rule matches.
    pub type_fallback: TypeFallback,
    /// Per-tier profiles.
    pub tiers: TierProfiles,
    /// AI bonus per investment potential point.
    pub potential_rate: f64,
    /// Ceiling of the AI bonus.
    pub potential_cap: f64,
    /// Market fundamentals.
    pub market: MarketConfig,
    /// Viability multiplier increments.
    pub multipliers: ViabilityMultipliers,
    /// Upper clamp of viability, at most `100`.
    pub max_viability: f64,
}

impl Default for ViabilityConfig {
    fn default() -> Self {
        Self {
            very_poor_below: 1.5,
            poor_below: 2.0,
            base_points: 50.0,
            tier_rules: default_tier_rules(),
            type_fallback: TypeFallback::default(),
            tiers: TierProfiles::default(),
            potential_rate: 0.25,
            potential_cap: 25.0,
            market: MarketConfig::default(),
            multipliers: ViabilityMultipliers::default(),
            max_viability: MAX_PERCENT,
        }
    }
}

impl ViabilityConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check::range(
            "viability.veryPoorBelow..poorBelow",
            self.very_poor_below,
            self.poor_below,
        )?;
        check::positive("viability.basePoints", self.base_points)?;
        check::patterns("viability.tierRules", &self.tier_rules)?;
        for tier in Tier::ALL {
            self.tiers.get(tier).validate()?;
        }
        check::weight("viability.potentialRate", self.potential_rate)?;
        check::weight("viability.potentialCap", self.potential_cap)?;
        self.market.validate()?;
        check::weight("viability.multipliers.signalScale", self.multipliers.signal_scale)?;
        check::positive("viability.maxViability", self.max_viability)?;
        check::range(
            "viability.maxViability..100",
            self.max_viability,
            MAX_PERCENT,
        )
    }
}

fn default_tier_rules() -> RuleSet<Tier> {
    RuleSet::new(vec![
        KeywordRule::new(Tier::Metro, 0.0).with_patterns([
            "metro",
            "metro city",
            "metropolitan",
            "megacity",
            "mega city",
            "tier 1",
        ]),
        KeywordRule::new(Tier::SmartCity, 0.0).with_patterns(["smart city", "smart"]),
        KeywordRule::new(Tier::IndustrialIt, 0.0).with_patterns([
            "it park",
            "it hub",
            "it corridor",
            "tech",
            "tech park",
            "technology",
            "software",
            "industrial",
            "industrial area",
            "sez",
        ]),
        KeywordRule::new(Tier::Coastal, 0.0).with_patterns([
            "coastal",
            "coast",
            "beach",
            "seaside",
            "port city",
        ]),
        KeywordRule::new(Tier::HillTribal, 0.0).with_patterns([
            "hill",
            "hills",
            "hill station",
            "tribal",
            "mountain",
        ]),
        KeywordRule::new(Tier::SemiUrban, 0.0).with_patterns([
            "semi urban",
            "peri urban",
            "suburban",
            "town",
            "township",
            "tier 3",
        ]),
        KeywordRule::new(Tier::Urban, 0.0).with_patterns(["urban", "city", "tier 2"]),
        KeywordRule::new(Tier::Rural, 0.0).with_patterns([
            "rural",
            "village",
            "gram",
            "agricultural",
        ]),
    ])
}
