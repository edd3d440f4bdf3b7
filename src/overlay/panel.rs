//! Move-info panel: L+A over the move menu swaps the PP and type boxes for
//! power, accuracy, speed order, damage range and effectiveness against the
//! selected target.

use serde::{Deserialize, Serialize};

use super::effectiveness::effectiveness;
use super::prompt::PromptController;
use super::readout;
use super::type_icons::TypeInfo;
use crate::battle::formulas::BattleFormulas;
use crate::battle::types::Split;
use crate::battle::{BattleState, Position};
use crate::console;
use crate::input::{Button, ButtonState};
use crate::window::{
    TextWindows, WindowId, DESCRIPTION_TEMPLATE, WIN_EFFECTIVENESS, WIN_MOVE_TYPE, WIN_PP,
    WIN_PP_REMAINING,
};

/// What the move menu should do after the panel has looked at the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Panel is closed; handle input as usual.
    Continue,
    /// Panel is open and consumed the frame.
    Break,
    /// Panel just closed; redraw the move menu.
    Refresh,
}

/// Whether the panel also opens a description box over the move names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoLayout {
    #[default]
    WithDescription,
    Compact,
}

/// Everything the panel reads or writes besides its own state.
pub struct PanelContext<'a> {
    pub battle: &'a BattleState,
    pub formulas: &'a dyn BattleFormulas,
    pub prompt: &'a mut PromptController,
    pub windows: &'a mut TextWindows,
    pub type_info: &'a mut TypeInfo,
}

#[derive(Debug)]
pub struct InfoPanel {
    active: bool,
    /// Opponent being inspected: 0 left, 1 right.
    selected_target: usize,
    description: Option<WindowId>,
    highlight: Option<Position>,
    layout: InfoLayout,
    modifier: Button,
}

impl InfoPanel {
    pub fn new(layout: InfoLayout, modifier: Button) -> Self {
        Self {
            active: false,
            selected_target: 0,
            description: None,
            highlight: None,
            layout,
            modifier,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected_target(&self) -> usize {
        self.selected_target
    }

    pub fn target_position(&self) -> Position {
        if self.selected_target == 1 {
            Position::OpponentRight
        } else {
            Position::OpponentLeft
        }
    }

    /// Battler marked on the field while the panel is open in a double
    /// battle.
    pub fn highlight(&self) -> Option<Position> {
        self.highlight
    }

    pub fn layout(&self) -> InfoLayout {
        self.layout
    }

    /// Takes effect the next time the panel opens.
    pub fn set_layout(&mut self, layout: InfoLayout) {
        self.layout = layout;
    }

    pub fn description_window(&self) -> Option<WindowId> {
        self.description
    }

    /// One frame of input while the move menu is up.
    pub fn on_input(&mut self, buttons: &ButtonState, ctx: &mut PanelContext) -> InputResult {
        if !self.active {
            ctx.prompt.restore();
            if buttons.is_new(Button::A) && buttons.is_held(self.modifier) {
                self.activate(ctx);
            }
            if buttons.any_new(&[Button::A, Button::B]) {
                ctx.prompt.hide();
            }
        } else if buttons.any_new(&[Button::A, Button::B]) {
            self.deactivate(ctx);
            return InputResult::Refresh;
        } else if buttons.any_new(&[Button::Left, Button::Right]) && ctx.battle.opponent_count() > 1 {
            self.selected_target ^= 1;
            self.highlight = Some(self.target_position());
            self.render(ctx);
        }

        if self.active {
            InputResult::Break
        } else {
            InputResult::Continue
        }
    }

    pub fn activate(&mut self, ctx: &mut PanelContext) {
        if ctx.battle.opponent_count() < 2 {
            self.selected_target = 0;
        }
        self.render(ctx);
        ctx.prompt.hide();
        ctx.type_info.destroy();
        self.highlight = ctx.battle.is_double().then(|| self.target_position());
        self.active = true;
        console::log(&format!("move info: {}", ctx.battle.selected_move_data().name));
    }

    /// Close the panel. The caller redraws the PP and type boxes.
    pub fn deactivate(&mut self, ctx: &mut PanelContext) {
        self.active = false;
        ctx.prompt.restore();
        if let Some(id) = self.description.take() {
            ctx.windows.remove_window(id);
        }
        ctx.windows.put_text(WIN_EFFECTIVENESS, "");
        self.highlight = None;
    }

    fn render(&mut self, ctx: &mut PanelContext) {
        let battle = ctx.battle;
        let mv = battle.selected_move_data();
        let attacker = battle.active();
        let Some(target) = battle.battler(self.target_position()) else {
            return;
        };

        ctx.windows.put_text(WIN_PP, &readout::power_text(&mv));
        ctx.windows.put_text(WIN_PP_REMAINING, &readout::accuracy_text(&mv));

        let order = readout::speed_order(ctx.formulas, attacker, target);
        let calc = if mv.split == Split::Status {
            order.label().to_string()
        } else {
            let range = readout::damage_range(ctx.formulas, &mv, attacker, target);
            readout::calc_text(order, range)
        };
        ctx.windows.put_text(WIN_MOVE_TYPE, &calc);
        ctx.windows
            .put_text(WIN_EFFECTIVENESS, effectiveness(ctx.formulas, &mv, target).symbol());

        if self.layout == InfoLayout::WithDescription {
            if self.description.is_none() {
                self.description = ctx.windows.add_window(DESCRIPTION_TEMPLATE);
            }
            if let Some(id) = self.description {
                ctx.windows.put_text(id, mv.description);
            }
        }
    }
}
