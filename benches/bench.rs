// Criterion benchmarks for the Kindly candidate pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kindly_match::core::{
    calculate_profile_completion, compatibility_score, filter_candidates, Matcher,
};
use kindly_match::models::{Filters, ScoringWeights, StoredProfile};
use serde_json::json;

const LANGUAGES: [&str; 4] = ["English", "German", "French", "Italian"];
const INVOLVEMENT: [&str; 4] = ["50/50 custody", "60/40 custody", "40/60 custody", "Weekends"];

fn create_profile(id: usize) -> StoredProfile {
    serde_json::from_value(json!({
        "id": id.to_string(),
        "full_name": format!("User {}", id),
        "age": 22 + (id % 30),
        "city": if id % 3 == 0 { "Zurich" } else { "Basel" },
        "country": "Switzerland",
        "languages": [LANGUAGES[id % 4], LANGUAGES[(id + 1) % 4]],
        "involvement": INVOLVEMENT[id % 4],
        "looking_for": ["co-parent", "friendship"],
        "qualities": ["patience", "humour"],
        "smoking": "never",
        "drinking": if id % 2 == 0 { "socially" } else { "never" },
    }))
    .unwrap_or_default()
}

fn create_filters() -> Filters {
    Filters {
        age_range: (28, 45),
        languages: vec!["German".to_string()],
        looking_for: vec!["co-parent".to_string()],
        custody_range: (40, 60),
        ..Default::default()
    }
}

fn bench_profile_completion(c: &mut Criterion) {
    let profile = create_profile(7);

    c.bench_function("profile_completion", |b| {
        b.iter(|| calculate_profile_completion(black_box(&profile)));
    });
}

fn bench_compatibility(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let viewer = create_profile(1);
    let candidate = create_profile(2);

    c.bench_function("compatibility_score", |b| {
        b.iter(|| compatibility_score(black_box(Some(&viewer)), black_box(&candidate), &weights));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let filters = create_filters();

    let mut group = c.benchmark_group("matching");

    for profile_count in [10, 50, 100, 500, 1000].iter() {
        let profiles: Vec<StoredProfile> = (0..*profile_count).map(create_profile).collect();
        let viewer = create_profile(0);

        group.bench_with_input(
            BenchmarkId::new("find_candidates", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_candidates(
                        black_box(&profiles),
                        black_box(Some(&viewer)),
                        black_box(&filters),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filtering_pipeline(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profiles: Vec<StoredProfile> = (0..100).map(create_profile).collect();
    let candidates = matcher.build_candidates(&profiles, None);
    let filters = create_filters();

    c.bench_function("filtering_pipeline_100_candidates", |b| {
        b.iter(|| black_box(filter_candidates(black_box(&candidates), &filters)));
    });
}

criterion_group!(
    benches,
    bench_profile_completion,
    bench_compatibility,
    bench_matching,
    bench_filtering_pipeline
);

criterion_main!(benches);
