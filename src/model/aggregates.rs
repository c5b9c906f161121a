use itertools::izip;

use crate::model::constants::{MAX_WEIGHT_SUM, WEIGHT_FACTOR};

/// Decaying-weight sum over the included entries. The exponent counter only
/// advances on inclusion, so excluding an entry promotes every following
/// entry into the freed, less-decayed weight slot.
///
/// `excluded[i] == true` removes `values[i]` from the aggregate. Both slices
/// must have equal length.
fn weighted_sum(values: &[f64], excluded: Option<&[bool]>) -> (f64, i32) {
    let mut count = 0;
    let mut sum = 0.0;

    match excluded {
        Some(excluded) => {
            debug_assert_eq!(values.len(), excluded.len());

            for (value, skip) in izip!(values, excluded) {
                if *skip {
                    continue;
                }

                sum += value * WEIGHT_FACTOR.powi(count);
                count += 1;
            }
        }
        None => {
            for value in values {
                sum += value * WEIGHT_FACTOR.powi(count);
                count += 1;
            }
        }
    }

    (sum, count)
}

/// Total raw pp over the plays left included by the selection.
pub fn calculate_total_pp(pp_values: &[f64], excluded: &[bool]) -> f64 {
    weighted_sum(pp_values, Some(excluded)).0
}

/// Total raw pp assuming every play is included. Baseline before any
/// interactive deselection.
pub fn calculate_total_pp_no_selection(pp_values: &[f64]) -> f64 {
    weighted_sum(pp_values, None).0
}

/// Overall accuracy percentage over the plays left included by the
/// selection. Input accuracies are fractions in [0, 1]; the normalization
/// rescales the decayed sum into a percentage. Zero included plays yield 0.
pub fn calculate_overall_acc(acc_values: &[f64], excluded: &[bool]) -> f64 {
    let (sum, count) = weighted_sum(acc_values, Some(excluded));

    normalize_acc(sum, count)
}

/// Overall accuracy percentage assuming every play is included.
pub fn calculate_overall_acc_no_selection(acc_values: &[f64]) -> f64 {
    let (sum, count) = weighted_sum(acc_values, None);

    normalize_acc(sum, count)
}

fn normalize_acc(weighted_acc: f64, count: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }

    100.0 / (MAX_WEIGHT_SUM * (1.0 - WEIGHT_FACTOR.powi(count))) * weighted_acc
}
