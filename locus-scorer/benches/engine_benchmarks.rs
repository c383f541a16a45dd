//! Criterion benchmarks for the scoring engine.
//!
//! Measures `compute_analysis` across neighbourhood sizes (20, 60, 200
//! places) generated from a seeded RNG so runs are reproducible.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package locus-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use locus_core::{
    DevelopmentStage, DistanceDuration, DistanceMap, LocationIntelligence, LocationType, Place,
};
use locus_scorer::compute_analysis;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic neighbourhood generation.
const BENCHMARK_SEED: u64 = 42;

/// Neighbourhood sizes to benchmark.
const PLACE_COUNTS: &[usize] = &[20, 60, 200];

/// Name and type pairs sampled for generated places.
const TEMPLATES: &[(&str, &str)] = &[
    ("Apollo Hospital", "hospital"),
    ("Delhi Public School", "school"),
    ("Central Metro Station", "subway_station"),
    ("HDFC Bank", "bank"),
    ("Phoenix Mall", "shopping_mall"),
    ("Taj Hotel", "lodging"),
    ("Cafe Coffee Day", "cafe"),
    ("Police Station", "police"),
    ("Lalbagh Garden", "park"),
    ("Manyata Tech Park", "point_of_interest"),
    ("International Airport", "airport"),
];

/// Generate `count` places with ratings and distances up to 12 km.
fn generate_neighbourhood(count: usize, seed: u64) -> (Vec<Place>, DistanceMap) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut places = Vec::with_capacity(count);
    let mut distances = DistanceMap::with_capacity(count);
    for index in 0..count {
        let choice = rng.gen_range(0..TEMPLATES.len());
        let (name, kind) = TEMPLATES.get(choice).copied().unwrap_or(("Corner Shop", "store"));
        let id = format!("place-{index}");
        let rating = rng.gen_range(3.0..5.0);
        let meters = rng.gen_range(0.0..12_000.0);
        let seconds = rng.gen_range(60.0..1_800.0);
        distances.insert(id.clone(), DistanceDuration::new(meters, seconds));
        places.push(Place::new(id, name).with_types([kind]).with_rating(rating));
    }
    (places, distances)
}

fn benchmark_intelligence() -> LocationIntelligence {
    LocationIntelligence {
        location_type: LocationType::City,
        development_stage: DevelopmentStage::Developing,
        investment_potential: 70.0,
        area_classification: "IT park".to_owned(),
        priority_score: 75.0,
        safety_score: 6.0,
    }
}

/// Benchmark a full analysis for each neighbourhood size.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_analysis");
    let intelligence = benchmark_intelligence();

    for &count in PLACE_COUNTS {
        let (places, distances) = generate_neighbourhood(count, BENCHMARK_SEED);
        let throughput = u64::try_from(count).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput));
        group.bench_with_input(BenchmarkId::new("places", count), &count, |b, _| {
            b.iter(|| compute_analysis(&places, &distances, &intelligence));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
