// Criterion benchmarks for roomie-match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomie_match::core::{compatibility_score, Matcher};
use roomie_match::models::{ScoringWeights, SleepSchedule, TenantPreference, WorkSchedule};

fn create_candidate(id: usize) -> TenantPreference {
    let sleep = match id % 3 {
        0 => SleepSchedule::EarlyBird,
        1 => SleepSchedule::NightOwl,
        _ => SleepSchedule::Flexible,
    };
    let work = match id % 4 {
        0 => WorkSchedule::Remote,
        1 => WorkSchedule::Office,
        2 => WorkSchedule::Hybrid,
        _ => WorkSchedule::Student,
    };

    TenantPreference {
        tenant_id: id.to_string(),
        cleanliness_importance: 1 + (id % 5) as u8,
        noise_tolerance: 1 + ((id / 5) % 5) as u8,
        guest_frequency: 1 + ((id / 25) % 5) as u8,
        social_preference: 1 + (id % 5) as u8,
        sleep_schedule: sleep,
        work_schedule: work,
        smoking: id % 7 == 0,
        pets: id % 3 == 0,
        overnight_guests: id % 2 == 0,
        interests: Some("hiking,cooking,gaming,music".to_string()),
        notes: None,
        created_at: None,
        updated_at: None,
    }
}

fn bench_pair_scoring(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let a = create_candidate(1);
    let b = create_candidate(2);

    c.bench_function("compatibility_score", |bench| {
        bench.iter(|| compatibility_score(black_box(&a), black_box(&b), black_box(&weights)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let subject = create_candidate(0);

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<TenantPreference> =
            (1..=*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    matcher.find_matches(black_box(&subject), black_box(&candidates), black_box(5))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pair_scoring, bench_matching);

criterion_main!(benches);
