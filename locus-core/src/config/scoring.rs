//! Location-intelligence adapter and location-score settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, check};
use crate::ladder::Ladder;
use crate::taxonomy::Category;

/// Multiplier and baseline bonus derived from a classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    /// Multiplier applied to the raw score.
    pub multiplier: f64,
    /// Bonus added when the gate allows it.
    pub baseline_bonus: f64,
}

impl Boost {
    /// Construct a boost.
    #[must_use]
    pub const fn new(multiplier: f64, baseline_bonus: f64) -> Self {
        Self {
            multiplier,
            baseline_bonus,
        }
    }
}

/// Settings for the location-intelligence adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntelligenceConfig {
    /// Metropolitan locations.
    pub metropolitan: Boost,
    /// Cities.
    pub city: Boost,
    /// Developed locations of any other type.
    pub developed: Boost,
    /// Developing locations of any other type.
    pub developing: Boost,
    /// Everything else.
    pub fallback: Boost,
    /// Added to `investment_potential / 100`.
    pub potential_offset: f64,
    /// Lower clamp of the potential multiplier.
    pub potential_min: f64,
    /// Upper clamp of the potential multiplier.
    pub potential_max: f64,
    /// Upper clamp of `priority_score / 100`.
    pub priority_bonus_cap: f64,
    /// Bonuses apply only when the score before them exceeds this.
    pub bonus_gate: f64,
    /// Share of the baseline bonus added to the final score.
    pub baseline_bonus_share: f64,
    /// Share of the priority bonus added to the final score.
    pub priority_bonus_share: f64,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            metropolitan: Boost::new(2.0, 1.5),
            city: Boost::new(1.6, 1.0),
            developed: Boost::new(1.4, 0.8),
            developing: Boost::new(1.2, 0.5),
            fallback: Boost::new(1.0, 0.0),
            potential_offset: 0.5,
            potential_min: 0.8,
            potential_max: 1.5,
            priority_bonus_cap: 1.0,
            bonus_gate: 0.8,
            baseline_bonus_share: 0.5,
            priority_bonus_share: 0.3,
        }
    }
}

impl IntelligenceConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        for (field, boost) in [
            ("intelligence.metropolitan", self.metropolitan),
            ("intelligence.city", self.city),
            ("intelligence.developed", self.developed),
            ("intelligence.developing", self.developing),
            ("intelligence.fallback", self.fallback),
        ] {
            check::weight(field, boost.multiplier)?;
            check::weight(field, boost.baseline_bonus)?;
        }
        check::range(
            "intelligence.potentialMin..potentialMax",
            self.potential_min,
            self.potential_max,
        )?;
        check::weight("intelligence.priorityBonusCap", self.priority_bonus_cap)?;
        check::weight("intelligence.baselineBonusShare", self.baseline_bonus_share)?;
        check::weight("intelligence.priorityBonusShare", self.priority_bonus_share)
    }
}

/// Divisor, ceiling and premium bonus used to normalise one accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Normaliser {
    /// Strict divisor.
    pub divisor: f64,
    /// Ceiling of `total / divisor`.
    pub ceiling: f64,
    /// Bonus per premium match.
    #[serde(default)]
    pub premium_step: f64,
    /// Ceiling of the premium bonus.
    #[serde(default)]
    pub premium_cap: f64,
}

impl Normaliser {
    /// Construct a normaliser with a premium bonus.
    #[must_use]
    pub const fn new(divisor: f64, ceiling: f64, premium_step: f64, premium_cap: f64) -> Self {
        Self {
            divisor,
            ceiling,
            premium_step,
            premium_cap,
        }
    }
}

/// One normaliser per category plus connectivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Normalisers {
    /// Healthcare.
    pub healthcare: Normaliser,
    /// Education.
    pub education: Normaliser,
    /// Transport.
    pub transport: Normaliser,
    /// Commercial.
    pub commercial: Normaliser,
    /// Lifestyle.
    pub lifestyle: Normaliser,
    /// Safety.
    pub safety: Normaliser,
    /// Environment.
    pub environment: Normaliser,
    /// Connectivity index.
    pub connectivity: Normaliser,
}

impl Default for Normalisers {
    fn default() -> Self {
        Self {
            healthcare: Normaliser::new(8.0, 1.2, 0.05, 0.2),
            education: Normaliser::new(10.0, 1.1, 0.05, 0.2),
            transport: Normaliser::new(8.0, 1.3, 0.05, 0.2),
            commercial: Normaliser::new(12.0, 1.1, 0.0, 0.0),
            lifestyle: Normaliser::new(9.0, 1.0, 0.05, 0.2),
            safety: Normaliser::new(4.0, 0.8, 0.0, 0.0),
            environment: Normaliser::new(6.0, 0.7, 0.0, 0.0),
            connectivity: Normaliser::new(120.0, 1.0, 0.0, 0.0),
        }
    }
}

impl Normalisers {
    /// Normaliser for a category.
    #[must_use]
    pub const fn get(&self, category: Category) -> &Normaliser {
        match category {
            Category::Healthcare => &self.healthcare,
            Category::Education => &self.education,
            Category::Transport => &self.transport,
            Category::Commercial => &self.commercial,
            Category::Lifestyle => &self.lifestyle,
            Category::Safety => &self.safety,
            Category::Environment => &self.environment,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for normaliser in Category::ALL
            .iter()
            .map(|category| self.get(*category))
            .chain(std::iter::once(&self.connectivity))
        {
            check::positive("location.normalisers.divisor", normaliser.divisor)?;
            check::weight("location.normalisers.ceiling", normaliser.ceiling)?;
            check::weight("location.normalisers.premiumStep", normaliser.premium_step)?;
            check::weight("location.normalisers.premiumCap", normaliser.premium_cap)?;
        }
        Ok(())
    }
}

/// One weight per category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryWeights {
    /// Healthcare.
    pub healthcare: f64,
    /// Education.
    pub education: f64,
    /// Transport.
    pub transport: f64,
    /// Commercial.
    pub commercial: f64,
    /// Lifestyle.
    pub lifestyle: f64,
    /// Safety.
    pub safety: f64,
    /// Environment.
    pub environment: f64,
}

impl CategoryWeights {
    /// Weight for a category.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Healthcare => self.healthcare,
            Category::Education => self.education,
            Category::Transport => self.transport,
            Category::Commercial => self.commercial,
            Category::Lifestyle => self.lifestyle,
            Category::Safety => self.safety,
            Category::Environment => self.environment,
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        for category in Category::ALL {
            check::weight(field, self.get(category))?;
        }
        Ok(())
    }
}

/// Metropolitan heuristic: many places plus strong transport and commerce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetropolitanHeuristic {
    /// Minimum number of supplied places.
    pub min_places: f64,
    /// Minimum transport total.
    pub min_transport: f64,
    /// Minimum commercial total.
    pub min_commercial: f64,
    /// Bonus when every minimum is met.
    pub bonus: f64,
}

impl Default for MetropolitanHeuristic {
    fn default() -> Self {
        Self {
            min_places: 40.0,
            min_transport: 4.0,
            min_commercial: 8.0,
            bonus: 0.15,
        }
    }
}

/// Economic-multiplier bonuses keyed by signal counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EconomicBonuses {
    /// Tech-hub signal count ladder.
    pub tech_hub: Ladder<f64>,
    /// Financial-district signal count ladder.
    pub financial_district: Ladder<f64>,
    /// Premium-residential signal count ladder.
    pub premium_residential: Ladder<f64>,
    /// Metropolitan heuristic.
    pub metropolitan: MetropolitanHeuristic,
}

impl Default for EconomicBonuses {
    fn default() -> Self {
        Self {
            tech_hub: Ladder::new([(3.0, 0.25), (1.0, 0.10)], 0.0),
            financial_district: Ladder::new([(2.0, 0.20), (1.0, 0.08)], 0.0),
            premium_residential: Ladder::new([(2.0, 0.15)], 0.0),
            metropolitan: MetropolitanHeuristic::default(),
        }
    }
}

/// Density multiplier and additive infrastructure bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTier {
    /// Multiplier on the raw score.
    pub multiplier: f64,
    /// Added to the base infrastructure score.
    pub bonus: f64,
}

impl DensityTier {
    /// Construct a density tier.
    #[must_use]
    pub const fn new(multiplier: f64, bonus: f64) -> Self {
        Self { multiplier, bonus }
    }
}

/// Settings for the location-score calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationScoreConfig {
    /// Accumulator normalisers.
    pub normalisers: Normalisers,
    /// Weights of each category's close ratio in the distance-quality factor.
    pub close_weights: CategoryWeights,
    /// Weights of normalised categories in the base infrastructure score.
    pub infrastructure_weights: CategoryWeights,
    /// Weight of the normalised connectivity index in the base score.
    pub connectivity_weight: f64,
    /// Economic-multiplier bonuses.
    pub economic: EconomicBonuses,
    /// Density tiers keyed by amenity count.
    pub density: Ladder<DensityTier>,
    /// Scale applied to the raw score.
    pub final_scale: f64,
    /// Lower clamp of the location score.
    pub min_score: f64,
    /// Upper clamp of the location score.
    pub max_score: f64,
}

impl Default for LocationScoreConfig {
    fn default() -> Self {
        Self {
            normalisers: Normalisers::default(),
            close_weights: CategoryWeights {
                transport: 0.30,
                healthcare: 0.25,
                education: 0.20,
                lifestyle: 0.15,
                safety: 0.10,
                ..CategoryWeights::default()
            },
            infrastructure_weights: CategoryWeights {
                healthcare: 0.22,
                education: 0.18,
                transport: 0.20,
                commercial: 0.15,
                lifestyle: 0.10,
                safety: 0.02,
                environment: 0.01,
            },
            connectivity_weight: 0.12,
            economic: EconomicBonuses::default(),
            density: Ladder::new(
                [
                    (50.0, DensityTier::new(1.8, 2.0)),
                    (25.0, DensityTier::new(1.6, 1.5)),
                    (15.0, DensityTier::new(1.4, 1.2)),
                    (8.0, DensityTier::new(1.2, 0.8)),
                    (3.0, DensityTier::new(1.0, 0.3)),
                ],
                DensityTier::new(0.8, 0.0),
            ),
            final_scale: 1.2,
            min_score: 0.1,
            max_score: 5.0,
        }
    }
}

impl LocationScoreConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        self.normalisers.validate()?;
        self.close_weights.validate("location.closeWeights")?;
        self.infrastructure_weights
            .validate("location.infrastructureWeights")?;
        check::weight("location.connectivityWeight", self.connectivity_weight)?;
        check::weight("location.finalScale", self.final_scale)?;
        check::range("location.minScore..maxScore", self.min_score, self.max_score)?;
        check::positive("location.maxScore", self.max_score)
    }
}
