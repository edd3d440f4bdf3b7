//! Type-effectiveness symbol shown next to a move.
//!
//! Works in "points": 20 is neutral, each single-type factor is 0/5/10/20
//! tenths of double damage, so the combined value lands on one of six
//! steps.

use crate::battle::data::{Ability, Battler, MoveData};
use crate::battle::formulas::BattleFormulas;
use crate::battle::types::Split;

const POINTS_NEUTRAL: u32 = 20;
/// Single-type factor meaning "super effective".
const FACTOR_WEAK: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effectiveness {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Effectiveness {
    pub fn from_points(points: u32) -> Self {
        match points {
            0 => Effectiveness::Immune,
            1..=5 => Effectiveness::Quarter,
            6..=10 => Effectiveness::Half,
            11..=20 => Effectiveness::Neutral,
            21..=40 => Effectiveness::Double,
            _ => Effectiveness::Quadruple,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Effectiveness::Immune => "×",
            Effectiveness::Quarter => "↓↓",
            Effectiveness::Half => "↓",
            Effectiveness::Neutral => "=",
            Effectiveness::Double => "↑",
            Effectiveness::Quadruple => "↑↑",
        }
    }
}

/// UQ4.12 multiplier → tenths of 2×: 0, 5, 10 or 20.
fn factor(modifier: u16) -> u32 {
    ((modifier as u32 * 2) >> 12) * 5
}

/// Effectiveness points of `mv` against `target`, before the status-move
/// shortcut.
pub fn effectiveness_points(
    formulas: &dyn BattleFormulas,
    mv: &MoveData,
    target: &Battler,
) -> u32 {
    if mv.power == 0 {
        return 0;
    }
    if target.ability.immunity() == Some(mv.move_type) {
        return 0;
    }

    let [type1, type2] = target.types;
    let factor1 = factor(formulas.type_modifier(mv.move_type, type1));
    let factor2 = factor(formulas.type_modifier(mv.move_type, type2));

    let mut points = factor1 * POINTS_NEUTRAL / 10;
    if type2 != type1 {
        points = factor2 * points / 10;
    }

    if target.ability == Ability::WonderGuard && factor1 != FACTOR_WEAK && factor2 != FACTOR_WEAK {
        points = 0;
    }
    points
}

pub fn effectiveness(formulas: &dyn BattleFormulas, mv: &MoveData, target: &Battler) -> Effectiveness {
    if mv.split == Split::Status {
        return Effectiveness::Neutral;
    }
    Effectiveness::from_points(effectiveness_points(formulas, mv, target))
}
