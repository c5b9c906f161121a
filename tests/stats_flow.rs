use approx::assert_abs_diff_eq;

use osu_stats_processor::{
    api::{self, api_structs::ProfileDump},
    model::{
        aggregates::{
            calculate_overall_acc, calculate_overall_acc_no_selection, calculate_total_pp,
            calculate_total_pp_no_selection
        },
        map_stats::calculate_map_stats,
        rank::{estimate_rank, LegacyRankEstimator, RankEstimator},
        structures::mods::{calculate_mod_value, ModFlags}
    },
    utils::test_utils::{generate_pp_values, generate_snapshot}
};

fn fixture_dump() -> ProfileDump {
    serde_json::from_str(include_str!("../test_data/profile_best.json")).unwrap()
}

#[test]
fn fixture_mods_encode_to_expected_value() {
    let dump = fixture_dump();

    let value = calculate_mod_value(&dump.scores[0].mods).unwrap();

    assert_eq!(value, 72);
}

#[test]
fn fixture_map_stats_under_first_score_mods() {
    let dump = fixture_dump();

    let value = calculate_mod_value(&dump.scores[0].mods).unwrap();
    let flags = ModFlags::from_bits(value);
    let stats = calculate_map_stats(&api::beatmap_attributes(&dump.beatmap), flags);

    assert_eq!(stats.ar, 10.3);
    assert_eq!(stats.od, 9.8);
    assert_eq!(stats.hp, 6.0);
    assert_eq!(stats.cs, 4.0);
    assert_eq!(stats.total_length, 94.7);
    assert_eq!(stats.drain_length, 91.3);
    assert_abs_diff_eq!(stats.bpm, 333.33, epsilon = 1e-9);
}

#[test]
fn fixture_weighted_totals() {
    let dump = fixture_dump();

    let pp = api::pp_values(&dump.scores);
    let total = calculate_total_pp_no_selection(&pp);

    // 700.5 + 650 * 0.95 + 600.25 * 0.9025
    assert_abs_diff_eq!(total, 1859.725625, epsilon = 1e-9);

    let acc = api::accuracy_values(&dump.scores);
    let overall = calculate_overall_acc_no_selection(&acc);

    assert!(overall > 98.0 && overall < 100.0);
}

#[test]
fn deselecting_a_play_promotes_the_rest() {
    let dump = fixture_dump();

    let pp = api::pp_values(&dump.scores);
    let excluded = vec![false, true, false];

    // 700.5 + 600.25 * 0.95
    assert_abs_diff_eq!(calculate_total_pp(&pp, &excluded), 1270.7375, epsilon = 1e-9);

    let acc = api::accuracy_values(&dump.scores);
    let with_selection = calculate_overall_acc(&acc, &excluded);
    let baseline = calculate_overall_acc_no_selection(&acc);

    assert!(with_selection > 0.0);
    assert!(with_selection <= 100.0);
    assert_ne!(with_selection, baseline);
}

#[test]
fn rank_estimation_over_generated_snapshot_is_stable() {
    let snapshot = generate_snapshot(727);
    let pp_values = generate_pp_values(200, 727);
    let total = calculate_total_pp_no_selection(&pp_values);

    let first = estimate_rank(total, &snapshot);
    let second = LegacyRankEstimator.estimate_rank(total, &snapshot);

    assert_eq!(first, second);
    assert!(first >= 1);
    assert!(first <= 10_000);
}
