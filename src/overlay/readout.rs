//! Numbers shown by the info panel and the strings they are printed as.

use crate::battle::data::{Battler, MoveData};
use crate::battle::formulas::BattleFormulas;

pub const PLACEHOLDER: &str = "---";

/// Low roll as a percentage of the nominal damage.
const MIN_ROLL_PERCENT: u32 = 86;

/// Who moves first between the active battler and the inspected target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedOrder {
    Tie,
    First,
    Second,
}

impl SpeedOrder {
    pub fn label(self) -> &'static str {
        match self {
            SpeedOrder::Tie => " Eq",
            SpeedOrder::First => "1st",
            SpeedOrder::Second => "2nd",
        }
    }
}

/// Damage as per-mille of the target's max HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

pub fn speed_order(formulas: &dyn BattleFormulas, attacker: &Battler, target: &Battler) -> SpeedOrder {
    let ours = formulas.total_speed(attacker);
    let theirs = formulas.total_speed(target);
    if ours > theirs {
        SpeedOrder::First
    } else if ours < theirs {
        SpeedOrder::Second
    } else {
        SpeedOrder::Tie
    }
}

/// Scale a nominal damage value into a per-mille range of `max_hp`.
pub fn range_from_nominal(nominal: u32, max_hp: u16) -> DamageRange {
    let max_hp = max_hp.max(1) as u64;
    let nominal = nominal as u64;
    let low = nominal * MIN_ROLL_PERCENT as u64 / 100;
    DamageRange {
        min: per_mille(low, max_hp),
        max: per_mille(nominal, max_hp),
    }
}

fn per_mille(damage: u64, max_hp: u64) -> u32 {
    u32::try_from(damage * 1000 / max_hp).unwrap_or(u32::MAX)
}

pub fn damage_range(
    formulas: &dyn BattleFormulas,
    mv: &MoveData,
    attacker: &Battler,
    target: &Battler,
) -> DamageRange {
    range_from_nominal(formulas.move_damage(mv, attacker, target), target.max_hp)
}

fn number_or_placeholder(value: u8) -> String {
    if value == 0 {
        PLACEHOLDER.to_string()
    } else {
        format!("{:>3}", value)
    }
}

pub fn power_text(mv: &MoveData) -> String {
    format!("Pow:{}", number_or_placeholder(mv.power))
}

pub fn accuracy_text(mv: &MoveData) -> String {
    format!(" Ac:{}", number_or_placeholder(mv.accuracy))
}

/// `"1st  45%- 52%"`: speed order then the range in whole percent.
pub fn calc_text(order: SpeedOrder, range: DamageRange) -> String {
    format!("{} {:>3}%-{:>3}%", order.label(), range.min / 10, range.max / 10)
}
