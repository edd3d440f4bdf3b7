//! Button polling: keyboard events folded into a per-frame button state.
//!
//! The overlays poll the way handheld code does: "was this button newly
//! pressed this frame" and "is this button currently held". Browser key events
//! arrive between frames, so they are accumulated into a [`ButtonState`] that
//! the frame loop consumes and then clears with [`ButtonState::end_frame`].

use serde::{Deserialize, Serialize};

/// Logical handheld buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    L,
    R,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Keyboard input normalized away from the web backend's key type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

/// Map a key to a button. Shift is handled by [`ButtonState::apply_key`].
pub fn button_for_key(key: KeyInput) -> Option<Button> {
    match key {
        KeyInput::Enter | KeyInput::Char('z') | KeyInput::Char(' ') => Some(Button::A),
        KeyInput::Escape | KeyInput::Char('x') => Some(Button::B),
        KeyInput::Char('q') => Some(Button::L),
        KeyInput::Char('e') => Some(Button::R),
        KeyInput::Up | KeyInput::Char('k') => Some(Button::Up),
        KeyInput::Down | KeyInput::Char('j') => Some(Button::Down),
        KeyInput::Left | KeyInput::Char('h') => Some(Button::Left),
        KeyInput::Right | KeyInput::Char('l') => Some(Button::Right),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonState {
    new: u16,
    held: u16,
    /// Button that Shift holds down.
    modifier: Button,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::with_modifier(Button::L)
    }
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifier(modifier: Button) -> Self {
        Self {
            new: 0,
            held: 0,
            modifier,
        }
    }

    /// Record a fresh press. A pressed button also counts as held this frame.
    pub fn press(&mut self, button: Button) {
        self.new |= button.bit();
        self.held |= button.bit();
    }

    pub fn hold(&mut self, button: Button) {
        self.held |= button.bit();
    }

    /// Fold a key event in. `shift` holds the modifier button for this frame.
    pub fn apply_key(&mut self, key: KeyInput, shift: bool) {
        if shift {
            self.hold(self.modifier);
        }
        if let Some(button) = button_for_key(key) {
            self.press(button);
        }
    }

    pub fn is_new(&self, button: Button) -> bool {
        self.new & button.bit() != 0
    }

    pub fn any_new(&self, buttons: &[Button]) -> bool {
        buttons.iter().any(|b| self.is_new(*b))
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held & button.bit() != 0
    }

    /// Forget the frame's buttons once it has consumed them.
    pub fn end_frame(&mut self) {
        self.new = 0;
        self.held = 0;
    }
}
