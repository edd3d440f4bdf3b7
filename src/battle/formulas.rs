//! Battle-engine formulas the overlays read from.
//!
//! The overlays only ever ask three questions of the engine, captured by
//! [`BattleFormulas`]. [`Gen3Formulas`] answers them with the classic
//! third-generation arithmetic, minus random rolls and critical hits.

use super::data::{Battler, MoveData};
use super::types::{type_modifier, Split, Type, UQ_4_12_ONE};

pub trait BattleFormulas {
    /// Nominal (maximum-roll, non-critical) damage of `mv` from `attacker`
    /// against `defender`.
    fn move_damage(&self, mv: &MoveData, attacker: &Battler, defender: &Battler) -> u32;

    /// Speed after stat stages.
    fn total_speed(&self, battler: &Battler) -> u32;

    /// UQ4.12 multiplier of one attacking type against one defending type.
    fn type_modifier(&self, attacking: Type, defending: Type) -> u16;
}

/// Stat stage multipliers, index 0 = -6, index 6 = neutral, index 12 = +6.
const STAGE_RATIOS: [(u32, u32); 13] = [
    (2, 8),
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4),
    (2, 3),
    (2, 2),
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2),
];

pub fn apply_stage(stat: u32, stage: i8) -> u32 {
    let (num, den) = STAGE_RATIOS[(stage.clamp(-6, 6) + 6) as usize];
    stat * num / den
}

/// `((2L/5 + 2) * P * A / D) / 50 + 2`, truncating at every step.
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }
    let level_factor = 2 * level / 5 + 2;
    level_factor * power * attack / defense / 50 + 2
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Gen3Formulas;

impl BattleFormulas for Gen3Formulas {
    fn move_damage(&self, mv: &MoveData, attacker: &Battler, defender: &Battler) -> u32 {
        if mv.power == 0 || mv.split == Split::Status {
            return 0;
        }
        if defender.ability.immunity() == Some(mv.move_type) {
            return 0;
        }

        let (attack, defense) = match mv.split {
            Split::Physical => (attacker.stats.attack, defender.stats.defense),
            _ => (attacker.stats.sp_attack, defender.stats.sp_defense),
        };
        let mut damage = base_damage(
            attacker.level as u32,
            mv.power as u32,
            attack as u32,
            defense as u32,
        );

        if attacker.has_type(mv.move_type) {
            damage = damage * 15 / 10;
        }

        let [first, second] = defender.types;
        damage = damage * self.type_modifier(mv.move_type, first) as u32 / UQ_4_12_ONE as u32;
        if second != first {
            damage = damage * self.type_modifier(mv.move_type, second) as u32 / UQ_4_12_ONE as u32;
        }
        damage
    }

    fn total_speed(&self, battler: &Battler) -> u32 {
        apply_stage(battler.stats.speed as u32, battler.speed_stage)
    }

    fn type_modifier(&self, attacking: Type, defending: Type) -> u16 {
        type_modifier(attacking, defending)
    }
}
