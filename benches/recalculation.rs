use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use osu_stats_processor::{
    model::{
        aggregates::{calculate_overall_acc, calculate_total_pp},
        map_stats::calculate_map_stats,
        rank::{LegacyRankEstimator, RankEstimator},
        structures::{beatmap::BeatmapAttributes, mods::ModFlags}
    },
    utils::test_utils::{generate_acc_values, generate_pp_values, generate_snapshot}
};

fn map_stats_benchmark(c: &mut Criterion) {
    let base = BeatmapAttributes {
        ar: 9.0,
        od: 8.0,
        hp: 6.0,
        cs: 4.0,
        total_length: 142.0,
        drain_length: 137.0,
        bpm: 222.22
    };

    let combos = [
        ("nomod", ModFlags::default()),
        (
            "hr",
            ModFlags {
                hr: true,
                ..Default::default()
            }
        ),
        (
            "ezdt",
            ModFlags {
                ez: true,
                dt: true,
                ..Default::default()
            }
        ),
        (
            "ht",
            ModFlags {
                ht: true,
                ..Default::default()
            }
        ),
    ];

    for (name, flags) in combos {
        c.bench_with_input(BenchmarkId::new("calculate_map_stats", name), &flags, |b, flags| {
            b.iter(|| calculate_map_stats(black_box(&base), *flags))
        });
    }
}

fn aggregate_benchmark(c: &mut Criterion) {
    let pp_values = generate_pp_values(200, 727);
    let acc_values = generate_acc_values(200, 727);
    // Alternate exclusions to force weight-slot promotion on every other play
    let excluded: Vec<bool> = (0..200).map(|i| i % 2 == 0).collect();

    c.bench_function("calculate_total_pp_200", |b| {
        b.iter(|| calculate_total_pp(black_box(&pp_values), black_box(&excluded)))
    });

    c.bench_function("calculate_overall_acc_200", |b| {
        b.iter(|| calculate_overall_acc(black_box(&acc_values), black_box(&excluded)))
    });
}

fn rank_benchmark(c: &mut Criterion) {
    let snapshot = generate_snapshot(727);
    let estimator = LegacyRankEstimator;

    let targets = [12.5, 431.0, 1987.65, 25_000.0, 100_000.0];

    c.bench_function("estimate_rank", |b| {
        b.iter(|| {
            for pp in targets {
                black_box(estimator.estimate_rank(black_box(pp), &snapshot));
            }
        })
    });
}

criterion_group!(benches, map_stats_benchmark, aggregate_benchmark, rank_benchmark);
criterion_main!(benches);
