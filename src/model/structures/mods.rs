use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModError {
    #[error("unknown modifier code: {0}")]
    UnknownModifier(String)
}

/// Gameplay modifiers and their legacy bit values, as laid out by the osu!
/// client and reused by the external scoring libraries. The bit positions are
/// non-contiguous on purpose; they must interoperate with that layout exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Mod {
    /// Sentinel for "no modifiers". Carries no bit value.
    #[strum(serialize = "NM")]
    NoMod,
    #[strum(serialize = "NF")]
    NoFail,
    #[strum(serialize = "EZ")]
    Easy,
    #[strum(serialize = "TD")]
    TouchDevice,
    #[strum(serialize = "HD")]
    Hidden,
    #[strum(serialize = "HR")]
    HardRock,
    #[strum(serialize = "SD")]
    SuddenDeath,
    #[strum(serialize = "DT")]
    DoubleTime,
    #[strum(serialize = "HT")]
    HalfTime,
    #[strum(serialize = "NC")]
    Nightcore,
    #[strum(serialize = "FL")]
    Flashlight,
    #[strum(serialize = "SO")]
    SpunOut,
    #[strum(serialize = "PF")]
    Perfect
}

impl Mod {
    /// The modifier's legacy bitmask value. The SD and PF score-only
    /// modifiers map to 0, as does the NM sentinel.
    pub const fn bit_value(self) -> u32 {
        match self {
            Mod::NoMod | Mod::SuddenDeath | Mod::Perfect => 0,
            Mod::NoFail => 1 << 0,
            Mod::Easy => 1 << 1,
            Mod::TouchDevice => 1 << 2,
            Mod::Hidden => 1 << 3,
            Mod::HardRock => 1 << 4,
            Mod::DoubleTime => 1 << 6,
            Mod::HalfTime => 1 << 8,
            Mod::Nightcore => 1 << 9,
            Mod::Flashlight => 1 << 10,
            Mod::SpunOut => 1 << 12
        }
    }
}

/// Sums the bit values of the given modifier codes into a single bitmask.
/// Unrecognized codes are rejected rather than silently skipped.
pub fn calculate_mod_value<S: AsRef<str>>(codes: &[S]) -> Result<u32, ModError> {
    let mut value = 0;

    for code in codes {
        let parsed =
            Mod::from_str(code.as_ref()).map_err(|_| ModError::UnknownModifier(code.as_ref().to_string()))?;

        value += parsed.bit_value();
    }

    Ok(value)
}

/// Boolean projection of the modifiers that affect difficulty attributes.
///
/// DT and NC are mutually exclusive in valid input, but both apply the same
/// time multiplier, so the recalculation treats them as one flag. EZ+HR and
/// pairwise DT/HT/NC combinations are precondition violations inherited from
/// the upstream convention; decoding does not enforce them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModFlags {
    pub ez: bool,
    pub hr: bool,
    pub dt: bool,
    pub ht: bool,
    pub nc: bool,
    pub fl: bool
}

impl ModFlags {
    /// Deconstructs a bitmask into the individual stat-changing flags.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            ez: has_bit(bits, Mod::Easy),
            hr: has_bit(bits, Mod::HardRock),
            dt: has_bit(bits, Mod::DoubleTime),
            ht: has_bit(bits, Mod::HalfTime),
            nc: has_bit(bits, Mod::Nightcore),
            fl: has_bit(bits, Mod::Flashlight)
        }
    }

    /// True when the track plays faster than normal.
    pub fn speed_up(self) -> bool {
        self.dt || self.nc
    }
}

fn has_bit(bits: u32, m: Mod) -> bool {
    (bits & m.bit_value()) == m.bit_value()
}
