//! Battle-engine side of the move menu: the combatants, their moves, and the
//! formulas the overlays consult.

pub mod data;
pub mod formulas;
pub mod types;

use data::{Battler, MoveData, MoveId};

/// Field positions, in the order the engine numbers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    PlayerLeft,
    OpponentLeft,
    PlayerRight,
    OpponentRight,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::PlayerLeft,
        Position::OpponentLeft,
        Position::PlayerRight,
        Position::OpponentRight,
    ];

    pub fn is_opponent(self) -> bool {
        matches!(self, Position::OpponentLeft | Position::OpponentRight)
    }
}

/// Everyone on the field plus the move cursor of the battler choosing a move.
pub struct BattleState {
    pub player_left: Battler,
    pub opponent_left: Battler,
    pub player_right: Option<Battler>,
    pub opponent_right: Option<Battler>,
    /// Move slot under the cursor, 0..4.
    pub move_cursor: usize,
}

impl BattleState {
    pub fn single(player: Battler, opponent: Battler) -> Self {
        Self {
            player_left: player,
            opponent_left: opponent,
            player_right: None,
            opponent_right: None,
            move_cursor: 0,
        }
    }

    pub fn double(players: [Battler; 2], opponents: [Battler; 2]) -> Self {
        let [pl, pr] = players;
        let [ol, or] = opponents;
        Self {
            player_left: pl,
            opponent_left: ol,
            player_right: Some(pr),
            opponent_right: Some(or),
            move_cursor: 0,
        }
    }

    pub fn is_double(&self) -> bool {
        self.player_right.is_some() || self.opponent_right.is_some()
    }

    pub fn battler(&self, position: Position) -> Option<&Battler> {
        match position {
            Position::PlayerLeft => Some(&self.player_left),
            Position::OpponentLeft => Some(&self.opponent_left),
            Position::PlayerRight => self.player_right.as_ref(),
            Position::OpponentRight => self.opponent_right.as_ref(),
        }
    }

    pub fn battler_mut(&mut self, position: Position) -> Option<&mut Battler> {
        match position {
            Position::PlayerLeft => Some(&mut self.player_left),
            Position::OpponentLeft => Some(&mut self.opponent_left),
            Position::PlayerRight => self.player_right.as_mut(),
            Position::OpponentRight => self.opponent_right.as_mut(),
        }
    }

    /// The battler whose move menu is open.
    pub fn active(&self) -> &Battler {
        &self.player_left
    }

    pub fn active_mut(&mut self) -> &mut Battler {
        &mut self.player_left
    }

    pub fn opponent_count(&self) -> usize {
        1 + self.opponent_right.is_some() as usize
    }

    pub fn selected_move(&self) -> MoveId {
        self.active().moves[self.move_cursor]
    }

    pub fn selected_move_data(&self) -> MoveData {
        self.selected_move().data()
    }

    /// Positions that occupy a slot on the field, for target cycling.
    pub fn occupied_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|p| self.battler(*p).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::{gengar, pikachu, sceptile, swampert};

    #[test]
    fn single_battle_has_one_opponent() {
        let state = BattleState::single(pikachu(), gengar());
        assert!(!state.is_double());
        assert_eq!(state.opponent_count(), 1);
        assert!(state.battler(Position::OpponentRight).is_none());
        assert_eq!(state.occupied_positions().len(), 2);
    }

    #[test]
    fn double_battle_positions() {
        let state = BattleState::double([pikachu(), sceptile()], [gengar(), swampert()]);
        assert!(state.is_double());
        assert_eq!(state.opponent_count(), 2);
        assert_eq!(state.battler(Position::OpponentRight).map(|b| b.name), Some("SWAMPERT"));
        assert_eq!(state.occupied_positions(), Position::ALL.to_vec());
    }

    #[test]
    fn selected_move_follows_cursor() {
        let mut state = BattleState::single(pikachu(), gengar());
        state.move_cursor = 2;
        assert_eq!(state.selected_move(), MoveId::ThunderWave);
    }
}
