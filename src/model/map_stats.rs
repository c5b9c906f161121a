use crate::model::{
    constants::{
        AR_HIGH_SLOPE_MS, AR_INVERT_BREAKPOINT_MS, AR_LOW_SLOPE_MS, AR_MID_MS, AR_MID_POINT, ATTRIBUTE_CAP,
        DT_AR_CAP, DT_BPM_SCALE, DT_TIME_SCALE, EZ_SCALE, HIT_WINDOW_MAX_MS, HIT_WINDOW_SLOPE_MS, HR_CS_SCALE,
        HR_SCALE, HT_BPM_SCALE, HT_TIME_SCALE
    },
    structures::{
        beatmap::{BeatmapAttributes, RecalculatedStats},
        mods::ModFlags
    }
};

/// Rounds to one decimal place, halves away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Approach window in milliseconds for a given AR.
fn approach_window_ms(ar: f64) -> f64 {
    if ar < AR_MID_POINT {
        AR_MID_MS + AR_LOW_SLOPE_MS * ((AR_MID_POINT - ar) / AR_MID_POINT)
    } else {
        AR_MID_MS - AR_HIGH_SLOPE_MS * ((ar - AR_MID_POINT) / AR_MID_POINT)
    }
}

/// Inverse of the AR < 5 half of the approach window mapping.
fn ar_from_low_window(ms: f64) -> f64 {
    AR_MID_POINT - ((ms - AR_MID_MS) / AR_LOW_SLOPE_MS) * AR_MID_POINT
}

/// Inverse of the AR >= 5 half of the approach window mapping.
fn ar_from_high_window(ms: f64) -> f64 {
    ((AR_MID_MS - ms) / AR_HIGH_SLOPE_MS) * AR_MID_POINT + AR_MID_POINT
}

/// Recalculates approach rate. Easy/HardRock resize first; HalfTime and
/// DoubleTime/Nightcore then rescale the approach window of the already
/// resized value.
///
/// The HalfTime inverse picks its branch from the *unscaled* window
/// (breakpoint at 900ms), while the forward mapping hinges at AR 5 (1200ms).
/// The resulting asymmetric round-trip matches the established convention
/// and must not be corrected here. DoubleTime always inverts through the
/// high-AR branch and caps the result at 11.
pub fn calculate_ar(base_ar: f64, flags: ModFlags) -> f64 {
    let mut new_ar = base_ar;

    if flags.ez {
        new_ar *= EZ_SCALE;
    } else if flags.hr {
        new_ar = (HR_SCALE * new_ar).min(ATTRIBUTE_CAP);
    }

    if flags.ht {
        let window = approach_window_ms(new_ar);
        let stretched = HT_TIME_SCALE * window;

        new_ar = if window > AR_INVERT_BREAKPOINT_MS {
            ar_from_low_window(stretched)
        } else {
            ar_from_high_window(stretched)
        };
    } else if flags.speed_up() {
        let window = approach_window_ms(new_ar);

        new_ar = ar_from_high_window(DT_TIME_SCALE * window).min(DT_AR_CAP);
    }

    round_to_tenth(new_ar)
}

/// Recalculates overall difficulty through its hit window.
pub fn calculate_od(base_od: f64, flags: ModFlags) -> f64 {
    let mut new_od = base_od;

    if flags.ez {
        new_od *= EZ_SCALE;
    } else if flags.hr {
        new_od = (HR_SCALE * new_od).min(ATTRIBUTE_CAP);
    }

    let window = HIT_WINDOW_MAX_MS - HIT_WINDOW_SLOPE_MS * new_od;
    if flags.ht {
        new_od = (HIT_WINDOW_MAX_MS - HT_TIME_SCALE * window) / HIT_WINDOW_SLOPE_MS;
    } else if flags.speed_up() {
        new_od = (HIT_WINDOW_MAX_MS - DT_TIME_SCALE * window) / HIT_WINDOW_SLOPE_MS;
    }

    round_to_tenth(new_od)
}

/// Recalculates health drain. Only Easy/HardRock apply.
pub fn calculate_hp(base_hp: f64, flags: ModFlags) -> f64 {
    let mut new_hp = base_hp;

    if flags.ez {
        new_hp *= EZ_SCALE;
    } else if flags.hr {
        new_hp = (HR_SCALE * new_hp).min(ATTRIBUTE_CAP);
    }

    round_to_tenth(new_hp)
}

/// Recalculates circle size. HardRock scales by 1.3 here, not 1.4.
pub fn calculate_cs(base_cs: f64, flags: ModFlags) -> f64 {
    let mut new_cs = base_cs;

    if flags.ez {
        new_cs *= EZ_SCALE;
    } else if flags.hr {
        new_cs = (HR_CS_SCALE * new_cs).min(ATTRIBUTE_CAP);
    }

    round_to_tenth(new_cs)
}

/// Recalculates track length (total or drain) in seconds.
pub fn calculate_length(base_length: f64, flags: ModFlags) -> f64 {
    if flags.ht {
        return round_to_tenth(HT_TIME_SCALE * base_length);
    }

    if flags.speed_up() {
        return round_to_tenth(DT_TIME_SCALE * base_length);
    }

    round_to_tenth(base_length)
}

/// Recalculates tempo. Speed-adjusted BPM is returned unrounded; only the
/// unmodified path rounds to one decimal.
pub fn calculate_bpm(base_bpm: f64, flags: ModFlags) -> f64 {
    if flags.ht {
        return HT_BPM_SCALE * base_bpm;
    }

    if flags.speed_up() {
        return DT_BPM_SCALE * base_bpm;
    }

    round_to_tenth(base_bpm)
}

/// Applies all attribute recalculations to a shared base record.
pub fn calculate_map_stats(base: &BeatmapAttributes, flags: ModFlags) -> RecalculatedStats {
    RecalculatedStats {
        ar: calculate_ar(base.ar, flags),
        od: calculate_od(base.od, flags),
        hp: calculate_hp(base.hp, flags),
        cs: calculate_cs(base.cs, flags),
        total_length: calculate_length(base.total_length, flags),
        drain_length: calculate_length(base.drain_length, flags),
        bpm: calculate_bpm(base.bpm, flags)
    }
}
