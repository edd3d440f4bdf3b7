//! Move-selection screen with the battle-info overlays layered on top.

pub mod effectiveness;
pub mod panel;
pub mod prompt;
pub mod readout;
pub mod render;
pub mod resource;
pub mod sprite;
pub mod type_icons;

use crate::battle::data::{gengar, pikachu, sceptile, swampert};
use crate::battle::formulas::{BattleFormulas, Gen3Formulas};
use crate::battle::{BattleState, Position};
use crate::config::OverlayConfig;
use crate::input::{Button, ButtonState};
use crate::window::{TextWindows, MOVE_NAME_WINDOWS, WIN_PP, WIN_PP_REMAINING};

use effectiveness::{effectiveness, Effectiveness};
use panel::{InfoLayout, InfoPanel, InputResult, PanelContext};
use prompt::PromptController;
use resource::{ResourcePool, SharedPool};
use type_icons::TypeInfo;

const MAX_LOG: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMode {
    ChooseMove,
    /// Double battles: picking who the chosen move hits.
    ChooseTarget(Position),
}

pub struct BattleMenu {
    pub battle: BattleState,
    pub pool: SharedPool,
    pub prompt: PromptController,
    pub panel: InfoPanel,
    pub type_info: TypeInfo,
    pub windows: TextWindows,
    pub mode: MenuMode,
    pub log: Vec<String>,
    formulas: Box<dyn BattleFormulas>,
}

impl BattleMenu {
    pub fn new(battle: BattleState, config: &OverlayConfig) -> Self {
        Self::with_formulas(battle, config, Box::new(Gen3Formulas))
    }

    pub fn with_formulas(
        battle: BattleState,
        config: &OverlayConfig,
        formulas: Box<dyn BattleFormulas>,
    ) -> Self {
        let pool = ResourcePool::shared();
        let mut menu = Self {
            battle,
            prompt: PromptController::new(pool.clone(), config.icon_track, config.window_track),
            panel: InfoPanel::new(config.layout, config.modifier),
            type_info: TypeInfo::new(pool.clone()),
            pool,
            windows: TextWindows::new(),
            mode: MenuMode::ChooseMove,
            log: Vec::new(),
            formulas,
        };
        menu.add_log(&format!("What will {} do?", menu.battle.active().name));
        menu.refresh_move_menu();
        menu
    }

    pub fn demo_single(config: &OverlayConfig) -> Self {
        Self::new(BattleState::single(pikachu(), swampert()), config)
    }

    pub fn demo_double(config: &OverlayConfig) -> Self {
        Self::new(
            BattleState::double([pikachu(), sceptile()], [gengar(), swampert()]),
            config,
        )
    }

    pub fn add_log(&mut self, text: &str) {
        self.log.push(text.to_string());
        if self.log.len() > MAX_LOG {
            self.log.remove(0);
        }
    }

    /// Battler marked on the field, by either the info panel or the target
    /// cursor.
    pub fn highlight(&self) -> Option<Position> {
        match self.mode {
            MenuMode::ChooseTarget(position) => Some(position),
            MenuMode::ChooseMove => self.panel.highlight(),
        }
    }

    /// Switch the info layout. Ignored while the panel is open.
    pub fn toggle_layout(&mut self) -> InfoLayout {
        if !self.panel.is_active() {
            let next = match self.panel.layout() {
                InfoLayout::WithDescription => InfoLayout::Compact,
                InfoLayout::Compact => InfoLayout::WithDescription,
            };
            self.panel.set_layout(next);
        }
        self.panel.layout()
    }

    /// Step one frame.
    pub fn frame(&mut self, buttons: &ButtonState) {
        match self.mode {
            MenuMode::ChooseMove => {
                let mut ctx = PanelContext {
                    battle: &self.battle,
                    formulas: self.formulas.as_ref(),
                    prompt: &mut self.prompt,
                    windows: &mut self.windows,
                    type_info: &mut self.type_info,
                };
                match self.panel.on_input(buttons, &mut ctx) {
                    InputResult::Continue => self.handle_move_input(buttons),
                    InputResult::Refresh => self.refresh_move_menu(),
                    InputResult::Break => {}
                }
            }
            MenuMode::ChooseTarget(cursor) => self.handle_target_input(buttons, cursor),
        }
        self.prompt.tick();
    }

    /// Rewrite move names, PP and the type icons from battle state.
    pub fn refresh_move_menu(&mut self) {
        let active = self.battle.active();
        for (slot, id) in MOVE_NAME_WINDOWS.iter().enumerate() {
            let marker = if slot == self.battle.move_cursor { '▶' } else { ' ' };
            let text = match active.moves.get(slot) {
                Some(mv) => format!("{}{}", marker, mv.data().name),
                None => format!("{}-", marker),
            };
            self.windows.put_text(*id, &text);
        }

        let slot = self.battle.move_cursor;
        let remaining = active.pp.get(slot).copied().unwrap_or(0);
        let max = self.battle.selected_move_data().pp;
        self.windows.put_text(WIN_PP, "PP");
        self.windows
            .put_text(WIN_PP_REMAINING, &format!("{:>2}/{:>2}", remaining, max));

        self.type_info
            .display(&self.battle, self.formulas.as_ref(), &mut self.windows);
        if let MenuMode::ChooseTarget(cursor) = self.mode {
            self.type_info.update_double(
                true,
                cursor,
                &self.battle,
                self.formulas.as_ref(),
                &mut self.windows,
            );
        }
    }

    fn handle_move_input(&mut self, buttons: &ButtonState) {
        let cursor = self.battle.move_cursor;
        let moved = if buttons.any_new(&[Button::Left, Button::Right]) {
            cursor ^ 1
        } else if buttons.any_new(&[Button::Up, Button::Down]) {
            cursor ^ 2
        } else {
            cursor
        };
        if moved != cursor && moved < self.battle.active().moves.len() {
            self.battle.move_cursor = moved;
            self.refresh_move_menu();
            return;
        }

        if buttons.is_new(Button::A) {
            if self.battle.is_double() {
                self.set_target_mode(Some(Position::OpponentLeft));
            } else {
                self.use_move(Position::OpponentLeft);
            }
        }
    }

    fn handle_target_input(&mut self, buttons: &ButtonState, cursor: Position) {
        if buttons.is_new(Button::A) {
            self.set_target_mode(None);
            self.use_move(cursor);
        } else if buttons.is_new(Button::B) {
            self.set_target_mode(None);
        } else if buttons.any_new(&[Button::Left, Button::Right]) {
            let targets = self.targets();
            let Some(index) = targets.iter().position(|p| *p == cursor) else {
                return;
            };
            let next = if buttons.is_new(Button::Right) {
                (index + 1) % targets.len()
            } else {
                (index + targets.len() - 1) % targets.len()
            };
            self.set_target_mode(Some(targets[next]));
        }
    }

    /// Everyone the active battler can aim at.
    fn targets(&self) -> Vec<Position> {
        self.battle
            .occupied_positions()
            .into_iter()
            .filter(|p| *p != Position::PlayerLeft)
            .collect()
    }

    fn set_target_mode(&mut self, cursor: Option<Position>) {
        self.mode = match cursor {
            Some(position) => MenuMode::ChooseTarget(position),
            None => MenuMode::ChooseMove,
        };
        self.type_info.update_double(
            cursor.is_some(),
            cursor.unwrap_or(Position::OpponentLeft),
            &self.battle,
            self.formulas.as_ref(),
            &mut self.windows,
        );
    }

    fn use_move(&mut self, target: Position) {
        let slot = self.battle.move_cursor;
        let mv = self.battle.selected_move_data();
        let user = self.battle.active().name;

        let has_pp = self.battle.active().pp.get(slot).is_some_and(|pp| *pp > 0);
        if !has_pp {
            self.add_log("There's no PP left for this move!");
            return;
        }
        self.battle.active_mut().pp[slot] -= 1;
        self.add_log(&format!("{} used {}!", user, mv.name));

        let Some(defender) = self.battle.battler(target) else {
            return;
        };
        let damage = self
            .formulas
            .move_damage(&mv, self.battle.active(), defender)
            .min(u16::MAX as u32) as u16;
        let verdict = effectiveness(self.formulas.as_ref(), &mv, defender);
        let name = defender.name;

        match verdict {
            Effectiveness::Immune => self.add_log(&format!("It doesn't affect {}...", name)),
            Effectiveness::Double | Effectiveness::Quadruple => {
                self.add_log("It's super effective!")
            }
            Effectiveness::Quarter | Effectiveness::Half => {
                self.add_log("It's not very effective...")
            }
            Effectiveness::Neutral => {}
        }

        if damage > 0 {
            if let Some(defender) = self.battle.battler_mut(target) {
                defender.hp = defender.hp.saturating_sub(damage);
                if defender.hp == 0 {
                    self.add_log(&format!("{} fainted!", name));
                }
            }
        }
        self.refresh_move_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::types::Type;
    use crate::window::{WIN_EFFECTIVENESS, WIN_MOVE_NAME_1, WIN_MOVE_NAME_2, WIN_MOVE_TYPE};

    fn config() -> OverlayConfig {
        OverlayConfig::default()
    }

    fn pressed(button: Button) -> ButtonState {
        let mut b = ButtonState::new();
        b.press(button);
        b
    }

    fn l_plus_a() -> ButtonState {
        let mut b = ButtonState::new();
        b.hold(Button::L);
        b.press(Button::A);
        b
    }

    fn run(menu: &mut BattleMenu, frames: usize) {
        for _ in 0..frames {
            menu.frame(&ButtonState::new());
        }
    }

    #[test]
    fn opens_on_the_move_list() {
        let menu = BattleMenu::demo_single(&config());
        assert_eq!(menu.windows.text(WIN_MOVE_NAME_1), Some("▶THUNDERBOLT"));
        assert_eq!(menu.windows.text(WIN_MOVE_NAME_2), Some(" SURF"));
        assert_eq!(menu.windows.text(WIN_PP), Some("PP"));
        assert_eq!(menu.windows.text(WIN_PP_REMAINING), Some("15/15"));
        // Thunderbolt into Swampert.
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some("×"));
        assert!(menu.type_info.type_icon().is_some());
        assert!(!menu.prompt.is_loaded());
    }

    #[test]
    fn prompt_slides_in_over_frames() {
        let mut menu = BattleMenu::demo_single(&config());
        run(&mut menu, 30);
        let icon = menu.prompt.icon().unwrap();
        assert_eq!(icon.x, config().icon_track.show_x);
        assert_eq!(menu.pool.borrow().resident_count(), 4);
    }

    #[test]
    fn cursor_moves_in_a_grid() {
        let mut menu = BattleMenu::demo_single(&config());
        menu.frame(&pressed(Button::Right));
        assert_eq!(menu.battle.move_cursor, 1);
        assert_eq!(menu.windows.text(WIN_MOVE_NAME_2), Some("▶SURF"));
        assert_eq!(
            menu.type_info.type_icon().map(|s| s.frame),
            Some(Type::Water.icon_frame())
        );
        menu.frame(&pressed(Button::Down));
        assert_eq!(menu.battle.move_cursor, 3);
        menu.frame(&pressed(Button::Left));
        assert_eq!(menu.battle.move_cursor, 2);
        menu.frame(&pressed(Button::Up));
        assert_eq!(menu.battle.move_cursor, 0);
    }

    #[test]
    fn info_panel_round_trip_redraws_the_menu() {
        let mut menu = BattleMenu::demo_single(&config());
        run(&mut menu, 5);
        menu.frame(&l_plus_a());
        assert!(menu.panel.is_active());
        assert_eq!(menu.windows.text(WIN_PP), Some("Pow: 90"));
        assert!(menu.type_info.type_icon().is_none());

        // Direction keys do not move the cursor while the panel is open.
        menu.frame(&pressed(Button::Down));
        assert_eq!(menu.battle.move_cursor, 0);

        menu.frame(&pressed(Button::B));
        assert!(!menu.panel.is_active());
        assert_eq!(menu.windows.text(WIN_PP), Some("PP"));
        assert_eq!(menu.windows.text(WIN_EFFECTIVENESS), Some(""));
        assert!(menu.type_info.type_icon().is_some());
        assert!(menu.prompt.is_showing());
    }

    #[test]
    fn b_while_closed_stays_on_the_menu() {
        let mut menu = BattleMenu::demo_single(&config());
        menu.frame(&pressed(Button::B));
        assert_eq!(menu.mode, MenuMode::ChooseMove);
        assert!(!menu.panel.is_active());
    }

    #[test]
    fn using_a_move_spends_pp_and_deals_damage() {
        let mut menu = BattleMenu::demo_single(&config());
        // Surf into Swampert: ½ on Water, 2× on Ground.
        menu.frame(&pressed(Button::Right));
        menu.frame(&pressed(Button::A));
        assert_eq!(menu.battle.active().pp[1], 14);
        assert!(menu.battle.opponent_left.hp < menu.battle.opponent_left.max_hp);
        assert_eq!(menu.log.last().map(String::as_str), Some("PIKACHU used SURF!"));
        assert_eq!(menu.windows.text(WIN_PP_REMAINING), Some("14/15"));
    }

    #[test]
    fn immune_target_takes_nothing() {
        let mut menu = BattleMenu::demo_single(&config());
        menu.frame(&pressed(Button::A));
        assert_eq!(menu.battle.opponent_left.hp, menu.battle.opponent_left.max_hp);
        assert_eq!(menu.log.last().map(String::as_str), Some("It doesn't affect SWAMPERT..."));
    }

    #[test]
    fn no_pp_refuses_the_move() {
        let mut menu = BattleMenu::demo_single(&config());
        menu.battle.active_mut().pp[0] = 0;
        menu.frame(&pressed(Button::A));
        assert_eq!(menu.log.last().map(String::as_str), Some("There's no PP left for this move!"));
        assert_eq!(menu.battle.opponent_left.hp, menu.battle.opponent_left.max_hp);
    }

    #[test]
    fn double_battle_target_selection() {
        let mut menu = BattleMenu::demo_double(&config());
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some(""));

        menu.frame(&pressed(Button::A));
        assert_eq!(menu.mode, MenuMode::ChooseTarget(Position::OpponentLeft));
        assert_eq!(menu.highlight(), Some(Position::OpponentLeft));
        assert!(menu.type_info.is_double_active());
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some("="));

        menu.frame(&pressed(Button::Right));
        assert_eq!(menu.mode, MenuMode::ChooseTarget(Position::PlayerRight));
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some("↓"));

        menu.frame(&pressed(Button::Right));
        menu.frame(&pressed(Button::Right));
        assert_eq!(menu.mode, MenuMode::ChooseTarget(Position::OpponentLeft));
        menu.frame(&pressed(Button::Left));
        assert_eq!(menu.mode, MenuMode::ChooseTarget(Position::OpponentRight));
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some("×"));

        menu.frame(&pressed(Button::B));
        assert_eq!(menu.mode, MenuMode::ChooseMove);
        assert!(!menu.type_info.is_double_active());
        assert_eq!(menu.windows.text(WIN_MOVE_TYPE), Some(""));
    }

    #[test]
    fn double_battle_move_hits_chosen_target() {
        let mut menu = BattleMenu::demo_double(&config());
        menu.frame(&pressed(Button::A));
        menu.frame(&pressed(Button::A));
        assert_eq!(menu.mode, MenuMode::ChooseMove);
        assert!(menu.battle.opponent_left.hp < menu.battle.opponent_left.max_hp);
        assert_eq!(menu.battle.active().pp[0], 14);
    }

    #[test]
    fn panel_toggles_opponents_in_double_battles() {
        let mut menu = BattleMenu::demo_double(&config());
        menu.frame(&l_plus_a());
        assert_eq!(menu.highlight(), Some(Position::OpponentLeft));
        menu.frame(&pressed(Button::Left));
        assert_eq!(menu.highlight(), Some(Position::OpponentRight));
        menu.frame(&pressed(Button::A));
        assert_eq!(menu.highlight(), None);
        assert_eq!(menu.mode, MenuMode::ChooseMove);
    }

    #[test]
    fn layout_toggle_waits_for_panel_to_close() {
        let mut menu = BattleMenu::demo_single(&config());
        assert_eq!(menu.toggle_layout(), InfoLayout::Compact);
        menu.frame(&l_plus_a());
        assert_eq!(menu.toggle_layout(), InfoLayout::Compact);
        assert_eq!(menu.panel.description_window(), None);
        menu.frame(&pressed(Button::B));
        assert_eq!(menu.toggle_layout(), InfoLayout::WithDescription);
    }

    #[test]
    fn log_is_capped() {
        let mut menu = BattleMenu::demo_single(&config());
        for i in 0..40 {
            menu.add_log(&format!("line {i}"));
        }
        assert_eq!(menu.log.len(), MAX_LOG);
        assert_eq!(menu.log.last().map(String::as_str), Some("line 39"));
    }
}
