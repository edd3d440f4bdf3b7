//! Text windows: the battle screen's fixed text boxes plus windows opened on
//! demand.
//!
//! Window geometry is in 8×8 tiles on a 30×20 tile screen, the way the
//! handheld lays out its background windows. The renderer turns tiles into
//! terminal cells.

use std::collections::BTreeMap;

use crate::console;

pub type WindowId = u8;

pub const WIN_MOVE_NAME_1: WindowId = 3;
pub const WIN_MOVE_NAME_2: WindowId = 4;
pub const WIN_MOVE_NAME_3: WindowId = 5;
pub const WIN_MOVE_NAME_4: WindowId = 6;
/// "PP" label in the move menu; the info panel writes power here.
pub const WIN_PP: WindowId = 7;
/// Remaining PP; the info panel writes accuracy here.
pub const WIN_PP_REMAINING: WindowId = 9;
/// Move type, or the effectiveness symbol, or the speed/damage line.
pub const WIN_MOVE_TYPE: WindowId = 10;
/// Effectiveness symbol while the info panel is open.
pub const WIN_EFFECTIVENESS: WindowId = 11;

pub const MOVE_NAME_WINDOWS: [WindowId; 4] = [
    WIN_MOVE_NAME_1,
    WIN_MOVE_NAME_2,
    WIN_MOVE_NAME_3,
    WIN_MOVE_NAME_4,
];

/// Ids handed out by [`TextWindows::add_window`] start here.
const FIRST_DYNAMIC_ID: WindowId = 24;
const MAX_DYNAMIC_WINDOWS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowTemplate {
    pub left: u8,
    pub top: u8,
    pub width: u8,
    pub height: u8,
}

/// Move description box, laid over the move names.
pub const DESCRIPTION_TEMPLATE: WindowTemplate = WindowTemplate {
    left: 1,
    top: 15,
    width: 18,
    height: 4,
};

const FIXED_WINDOWS: [(WindowId, WindowTemplate); 8] = [
    (WIN_MOVE_NAME_1, WindowTemplate { left: 2, top: 15, width: 8, height: 2 }),
    (WIN_MOVE_NAME_2, WindowTemplate { left: 11, top: 15, width: 8, height: 2 }),
    (WIN_MOVE_NAME_3, WindowTemplate { left: 2, top: 17, width: 8, height: 2 }),
    (WIN_MOVE_NAME_4, WindowTemplate { left: 11, top: 17, width: 8, height: 2 }),
    (WIN_PP, WindowTemplate { left: 21, top: 15, width: 4, height: 2 }),
    (WIN_PP_REMAINING, WindowTemplate { left: 25, top: 15, width: 4, height: 2 }),
    (WIN_MOVE_TYPE, WindowTemplate { left: 21, top: 17, width: 8, height: 2 }),
    (WIN_EFFECTIVENESS, WindowTemplate { left: 29, top: 17, width: 1, height: 2 }),
];

#[derive(Clone, Debug)]
pub struct TextWindow {
    pub template: WindowTemplate,
    pub text: String,
    pub dynamic: bool,
}

pub struct TextWindows {
    windows: BTreeMap<WindowId, TextWindow>,
    /// Number of `put_text` calls that landed on a window.
    pub writes: u32,
}

impl TextWindows {
    pub fn new() -> Self {
        let windows = FIXED_WINDOWS
            .iter()
            .map(|&(id, template)| {
                (
                    id,
                    TextWindow {
                        template,
                        text: String::new(),
                        dynamic: false,
                    },
                )
            })
            .collect();
        Self { windows, writes: 0 }
    }

    /// Open a window from `template`. Returns `None` when every dynamic id is
    /// taken.
    pub fn add_window(&mut self, template: WindowTemplate) -> Option<WindowId> {
        let open = self.windows.values().filter(|w| w.dynamic).count();
        if open >= MAX_DYNAMIC_WINDOWS {
            console::warn("no free text window");
            return None;
        }
        let id = (FIRST_DYNAMIC_ID..).find(|id| !self.windows.contains_key(id))?;
        self.windows.insert(
            id,
            TextWindow {
                template,
                text: String::new(),
                dynamic: true,
            },
        );
        Some(id)
    }

    /// Close a window opened with `add_window`. Fixed windows stay.
    pub fn remove_window(&mut self, id: WindowId) -> bool {
        match self.windows.get(&id) {
            Some(w) if w.dynamic => {
                self.windows.remove(&id);
                true
            }
            _ => false,
        }
    }

    pub fn put_text(&mut self, id: WindowId, text: &str) {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.text.clear();
                window.text.push_str(text);
                self.writes += 1;
            }
            None => console::warn(&format!("text for missing window {}", id)),
        }
    }

    pub fn text(&self, id: WindowId) -> Option<&str> {
        self.windows.get(&id).map(|w| w.text.as_str())
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WindowId, &TextWindow)> {
        self.windows.iter()
    }
}
