//! Infrastructure aggregation settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, check};
use crate::rules::{KeywordRule, RuleSet};
use crate::taxonomy::{Category, QualityTier, Signal, Subtype};

/// Distance band with a fixed multiplier: applies up to `max_km` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayBand {
    /// Inclusive upper distance bound in kilometres.
    pub max_km: f64,
    /// Multiplier for places inside the band.
    pub multiplier: f64,
}

/// Distance-decay curve applied to each place's base score.
///
/// Places inside a band take its multiplier. Beyond the last band the
/// multiplier decays linearly as `1 - (d - tail_origin_km) / tail_span_km`
/// and never drops below `floor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistanceDecay {
    /// Bands in ascending `max_km` order.
    pub bands: Vec<DecayBand>,
    /// Distance at which the linear tail starts.
    pub tail_origin_km: f64,
    /// Distance over which the tail falls by `1.0`.
    pub tail_span_km: f64,
    /// Lowest multiplier the tail may produce.
    pub floor: f64,
}

impl Default for DistanceDecay {
    fn default() -> Self {
        Self {
            bands: vec![
                DecayBand {
                    max_km: 0.5,
                    multiplier: 2.0,
                },
                DecayBand {
                    max_km: 1.0,
                    multiplier: 1.7,
                },
                DecayBand {
                    max_km: 3.0,
                    multiplier: 1.3,
                },
            ],
            tail_origin_km: 3.0,
            tail_span_km: 10.0,
            floor: 0.05,
        }
    }
}

/// Category-specific amplifiers applied on top of the base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Amplifiers {
    /// Premium healthcare.
    pub healthcare_premium: f64,
    /// Good healthcare.
    pub healthcare_good: f64,
    /// Universities.
    pub education_university: f64,
    /// Colleges.
    pub education_college: f64,
    /// Premium schools.
    pub education_premium_school: f64,
    /// Other good education.
    pub education_good: f64,
    /// Metro stations.
    pub transport_metro: f64,
    /// Railway stations.
    pub transport_rail: f64,
    /// Bus stations.
    pub transport_bus: f64,
    /// Financial services.
    pub commercial_financial: f64,
    /// Premium lodging.
    pub lifestyle_premium_lodging: f64,
    /// Premium spas.
    pub lifestyle_premium_spa: f64,
    /// Malls rated at least `lifestyle_mall_min_rating`.
    pub lifestyle_rated_mall: f64,
    /// Rating a mall needs for `lifestyle_rated_mall`.
    pub lifestyle_mall_min_rating: f64,
    /// Other premium lifestyle places.
    pub lifestyle_premium: f64,
    /// Good lifestyle places.
    pub lifestyle_good: f64,
    /// Flat safety amplifier.
    pub safety: f64,
    /// Flat environment amplifier.
    pub environment: f64,
}

impl Default for Amplifiers {
    fn default() -> Self {
        Self {
            healthcare_premium: 2.5,
            healthcare_good: 1.8,
            education_university: 2.2,
            education_college: 1.8,
            education_premium_school: 2.0,
            education_good: 1.5,
            transport_metro: 2.5,
            transport_rail: 2.0,
            transport_bus: 1.5,
            commercial_financial: 1.5,
            lifestyle_premium_lodging: 3.0,
            lifestyle_premium_spa: 2.5,
            lifestyle_rated_mall: 2.2,
            lifestyle_mall_min_rating: 4.0,
            lifestyle_premium: 2.0,
            lifestyle_good: 1.5,
            safety: 1.5,
            environment: 1.3,
        }
    }
}

impl Amplifiers {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("aggregation.amplifiers.healthcarePremium", self.healthcare_premium),
            ("aggregation.amplifiers.healthcareGood", self.healthcare_good),
            ("aggregation.amplifiers.educationUniversity", self.education_university),
            ("aggregation.amplifiers.educationCollege", self.education_college),
            ("aggregation.amplifiers.educationPremiumSchool", self.education_premium_school),
            ("aggregation.amplifiers.educationGood", self.education_good),
            ("aggregation.amplifiers.transportMetro", self.transport_metro),
            ("aggregation.amplifiers.transportRail", self.transport_rail),
            ("aggregation.amplifiers.transportBus", self.transport_bus),
            ("aggregation.amplifiers.commercialFinancial", self.commercial_financial),
            ("aggregation.amplifiers.lifestylePremiumLodging", self.lifestyle_premium_lodging),
            ("aggregation.amplifiers.lifestylePremiumSpa", self.lifestyle_premium_spa),
            ("aggregation.amplifiers.lifestyleRatedMall", self.lifestyle_rated_mall),
            ("aggregation.amplifiers.lifestylePremium", self.lifestyle_premium),
            ("aggregation.amplifiers.lifestyleGood", self.lifestyle_good),
            ("aggregation.amplifiers.safety", self.safety),
            ("aggregation.amplifiers.environment", self.environment),
        ] {
            check::weight(field, value)?;
        }
        Ok(())
    }
}

/// Settings for the infrastructure aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregationConfig {
    /// Places farther than this are ignored.
    pub scoring_radius_km: f64,
    /// Places within this distance also feed the `close` sub-total.
    pub close_radius_km: f64,
    /// Distance-decay curve.
    pub decay: DistanceDecay,
    /// Upper bound of `rating / 5`.
    pub rating_ceiling: f64,
    /// Rating multiplier for unrated places.
    pub unrated_multiplier: f64,
    /// Rating at or above which a place is premium.
    pub premium_rating: f64,
    /// Rating at or above which a place is good.
    pub good_rating: f64,
    /// Rated lodging also counts as commercial activity.
    pub rated_lodging_is_commercial: bool,
    /// Name keywords that mark quality tiers. Premium rules first.
    pub quality_rules: RuleSet<QualityTier>,
    /// Category membership. Every matching rule applies.
    pub category_rules: RuleSet<Category>,
    /// Subtypes selecting category amplifiers. Every matching rule applies.
    pub subtype_rules: RuleSet<Subtype>,
    /// Economic signal keywords. Every matching rule applies.
    pub signal_rules: RuleSet<Signal>,
    /// Category amplifiers.
    pub amplifiers: Amplifiers,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            scoring_radius_km: 5.0,
            close_radius_km: 3.0,
            decay: DistanceDecay::default(),
            rating_ceiling: 1.2,
            unrated_multiplier: 0.55,
            premium_rating: 4.5,
            good_rating: 4.0,
            rated_lodging_is_commercial: true,
            quality_rules: default_quality_rules(),
            category_rules: default_category_rules(),
            subtype_rules: default_subtype_rules(),
            signal_rules: default_signal_rules(),
            amplifiers: Amplifiers::default(),
        }
    }
}

impl AggregationConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check::positive("aggregation.scoringRadiusKm", self.scoring_radius_km)?;
        check::weight("aggregation.closeRadiusKm", self.close_radius_km)?;
        check::positive("aggregation.decay.tailSpanKm", self.decay.tail_span_km)?;
        check::weight("aggregation.decay.floor", self.decay.floor)?;
        for band in &self.decay.bands {
            check::weight("aggregation.decay.bands.maxKm", band.max_km)?;
            check::weight("aggregation.decay.bands.multiplier", band.multiplier)?;
        }
        check::weight("aggregation.ratingCeiling", self.rating_ceiling)?;
        check::weight("aggregation.unratedMultiplier", self.unrated_multiplier)?;
        check::range(
            "aggregation.goodRating..premiumRating",
            self.good_rating,
            self.premium_rating,
        )?;
        check::patterns("aggregation.qualityRules", &self.quality_rules)?;
        check::patterns("aggregation.categoryRules", &self.category_rules)?;
        check::patterns("aggregation.subtypeRules", &self.subtype_rules)?;
        check::patterns("aggregation.signalRules", &self.signal_rules)?;
        self.amplifiers.validate()
    }
}

fn default_quality_rules() -> RuleSet<QualityTier> {
    RuleSet::new(vec![
        KeywordRule::new(QualityTier::Premium, 0.0).with_patterns([
            "premium",
            "luxury",
            "five star",
            "5 star",
            "super speciality",
            "super specialty",
            "international",
            "grand",
            "palace",
            "marriott",
            "taj",
            "oberoi",
            "hyatt",
            "hilton",
            "apollo",
            "fortis",
            "medanta",
            "manipal",
            "aiims",
            "iit",
            "iim",
            "delhi public school",
        ]),
        KeywordRule::new(QualityTier::Good, 0.0).with_patterns([
            "multispeciality",
            "multispecialty",
            "multi speciality",
            "plaza",
            "central",
            "public school",
            "convent",
            "institute",
            "suites",
        ]),
    ])
}

fn default_category_rules() -> RuleSet<Category> {
    RuleSet::new(vec![
        KeywordRule::new(Category::Healthcare, 0.0)
            .with_place_types([
                "hospital",
                "doctor",
                "pharmacy",
                "drugstore",
                "dentist",
                "physiotherapist",
                "health",
            ])
            .with_patterns(["hospital", "clinic", "nursing home", "diagnostic"]),
        KeywordRule::new(Category::Education, 0.0)
            .with_place_types(["school", "primary_school", "secondary_school", "university"])
            .with_patterns(["school", "college", "university", "academy", "vidyalaya"]),
        KeywordRule::new(Category::Transport, 0.0)
            .with_place_types([
                "subway_station",
                "train_station",
                "transit_station",
                "bus_station",
                "light_rail_station",
                "taxi_stand",
            ])
            .with_patterns(["metro station", "railway station", "bus stand", "bus terminal"]),
        KeywordRule::new(Category::Commercial, 0.0)
            .with_place_types([
                "bank",
                "atm",
                "finance",
                "accounting",
                "insurance_agency",
                "real_estate_agency",
                "shopping_mall",
                "supermarket",
                "grocery_or_supermarket",
                "department_store",
                "convenience_store",
                "clothing_store",
                "electronics_store",
                "store",
            ])
            .with_patterns(["market", "bazaar", "supermarket", "mall"]),
        KeywordRule::new(Category::Lifestyle, 0.0)
            .with_place_types([
                "restaurant",
                "cafe",
                "bakery",
                "bar",
                "night_club",
                "gym",
                "movie_theater",
                "spa",
                "shopping_mall",
                "lodging",
                "tourist_attraction",
            ])
            .with_patterns(["restaurant", "cafe", "hotel", "resort", "multiplex", "cinema"]),
        KeywordRule::new(Category::Safety, 0.0)
            .with_place_types(["police", "fire_station"])
            .with_patterns(["police station", "fire station"]),
        KeywordRule::new(Category::Environment, 0.0)
            .with_place_types(["park", "natural_feature", "campground", "zoo"])
            .with_patterns(["garden", "lake", "forest"]),
    ])
}

fn default_subtype_rules() -> RuleSet<Subtype> {
    RuleSet::new(vec![
        KeywordRule::new(Subtype::University, 0.0)
            .with_place_types(["university"])
            .with_patterns(["university"]),
        KeywordRule::new(Subtype::College, 0.0).with_patterns([
            "college",
            "polytechnic",
            "institute of technology",
        ]),
        KeywordRule::new(Subtype::School, 0.0)
            .with_place_types(["school", "primary_school", "secondary_school"])
            .with_patterns(["school", "vidyalaya"]),
        KeywordRule::new(Subtype::Metro, 0.0)
            .with_place_types(["subway_station", "light_rail_station"])
            .with_patterns(["metro station", "metro rail"]),
        KeywordRule::new(Subtype::Rail, 0.0)
            .with_place_types(["train_station"])
            .with_patterns(["railway station", "railway junction", "rail station"]),
        KeywordRule::new(Subtype::Bus, 0.0)
            .with_place_types(["bus_station"])
            .with_patterns(["bus stand", "bus terminal", "bus depot"]),
        KeywordRule::new(Subtype::Financial, 0.0).with_place_types([
            "bank",
            "atm",
            "finance",
            "accounting",
            "insurance_agency",
        ]),
        KeywordRule::new(Subtype::Lodging, 0.0)
            .with_place_types(["lodging"])
            .with_patterns(["hotel", "resort"]),
        KeywordRule::new(Subtype::Spa, 0.0)
            .with_place_types(["spa"])
            .with_patterns(["spa", "wellness"]),
        KeywordRule::new(Subtype::Mall, 0.0)
            .with_place_types(["shopping_mall"])
            .with_patterns(["mall"]),
    ])
}

fn default_signal_rules() -> RuleSet<Signal> {
    RuleSet::new(vec![
        KeywordRule::new(Signal::TechHub, 0.0).with_patterns([
            "tech park",
            "it park",
            "it hub",
            "software park",
            "technology park",
            "tech hub",
            "tech centre",
            "tech center",
            "cyber city",
            "cyber park",
            "infotech",
            "infopark",
            "software",
            "technologies",
            "sez",
        ]),
        KeywordRule::new(Signal::FinancialDistrict, 0.0).with_patterns([
            "financial district",
            "financial centre",
            "financial center",
            "stock exchange",
            "business bay",
            "business district",
            "corporate park",
            "trade centre",
            "trade center",
            "world trade",
            "bkc",
        ]),
        KeywordRule::new(Signal::PremiumResidential, 0.0).with_patterns([
            "villa",
            "villas",
            "luxury apartments",
            "luxury residences",
            "premium residences",
            "gated community",
            "towers",
            "heights",
            "enclave",
        ]),
    ])
}
