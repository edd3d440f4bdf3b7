//! Type and split icons beside the move menu, plus the effectiveness symbol
//! written into the move-type window.

use super::effectiveness::effectiveness;
use super::resource::{SharedPool, SpritePalette, SpriteSheet, TAG_MOVE_TYPES, TAG_SPLIT_ICONS};
use super::sprite::StaticSprite;
use crate::battle::formulas::BattleFormulas;
use crate::battle::{BattleState, Position};
use crate::window::{TextWindows, WIN_MOVE_TYPE};

pub const TYPE_ICON_POS: (i16, i16) = (203, 145);
pub const SPLIT_ICON_POS: (i16, i16) = (227, 145);

/// 19 frames of 32×16.
const TYPE_SHEET: SpriteSheet = SpriteSheet { name: "move_types", tiles: 8 * 19 };
const TYPE_PALETTE: SpritePalette = SpritePalette { name: "move_types" };
/// 3 frames of 16×16.
const SPLIT_SHEET: SpriteSheet = SpriteSheet { name: "split_icons", tiles: 12 };
const SPLIT_PALETTE: SpritePalette = SpritePalette { name: "split_icons" };

pub struct TypeInfo {
    pool: SharedPool,
    type_icon: Option<StaticSprite>,
    split_icon: Option<StaticSprite>,
    /// Double battles only: the battler the target cursor is on, while
    /// target selection is open.
    double_target: Option<Position>,
}

impl TypeInfo {
    pub fn new(pool: SharedPool) -> Self {
        Self {
            pool,
            type_icon: None,
            split_icon: None,
            double_target: None,
        }
    }

    pub fn type_icon(&self) -> Option<&StaticSprite> {
        self.type_icon.as_ref()
    }

    pub fn split_icon(&self) -> Option<&StaticSprite> {
        self.split_icon.as_ref()
    }

    pub fn is_double_active(&self) -> bool {
        self.double_target.is_some()
    }

    /// Show the icons for the move under the cursor, creating them if
    /// needed, and write its effectiveness against the current target.
    pub fn display(&mut self, battle: &BattleState, formulas: &dyn BattleFormulas, windows: &mut TextWindows) {
        let mv = battle.selected_move_data();

        if self.type_icon.is_none() {
            let (x, y) = TYPE_ICON_POS;
            self.type_icon = StaticSprite::spawn(&self.pool, TAG_MOVE_TYPES, &TYPE_SHEET, &TYPE_PALETTE, x, y);
        }
        if let Some(icon) = self.type_icon.as_mut() {
            icon.frame = mv.move_type.icon_frame();
            icon.palette_num = mv.move_type.icon_palette();
        }

        if self.split_icon.is_none() {
            let (x, y) = SPLIT_ICON_POS;
            self.split_icon = StaticSprite::spawn(&self.pool, TAG_SPLIT_ICONS, &SPLIT_SHEET, &SPLIT_PALETTE, x, y);
        }
        if let Some(icon) = self.split_icon.as_mut() {
            icon.frame = mv.split.icon_frame();
        }

        self.write_effectiveness(battle, formulas, windows);
    }

    /// Enter or leave double-battle target mode and rewrite the symbol.
    /// `cursor` is ignored when `active` is false.
    pub fn update_double(
        &mut self,
        active: bool,
        cursor: Position,
        battle: &BattleState,
        formulas: &dyn BattleFormulas,
        windows: &mut TextWindows,
    ) {
        self.double_target = active.then_some(cursor);
        self.write_effectiveness(battle, formulas, windows);
    }

    /// Drop both icons and leave double-target mode.
    pub fn destroy(&mut self) {
        self.double_target = None;
        self.type_icon = None;
        self.split_icon = None;
    }

    fn target(&self, battle: &BattleState) -> Option<Position> {
        if battle.is_double() {
            self.double_target
        } else {
            Some(Position::OpponentLeft)
        }
    }

    fn write_effectiveness(&self, battle: &BattleState, formulas: &dyn BattleFormulas, windows: &mut TextWindows) {
        let symbol = self
            .target(battle)
            .and_then(|pos| battle.battler(pos))
            .map(|target| effectiveness(formulas, &battle.selected_move_data(), target).symbol())
            .unwrap_or("");
        windows.put_text(WIN_MOVE_TYPE, symbol);
    }
}
