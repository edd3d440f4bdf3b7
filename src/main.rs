mod battle;
mod config;
mod console;
mod input;
mod overlay;
mod time;
mod window;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use config::OverlayConfig;
use input::{ButtonState, KeyInput};
use overlay::panel::InfoLayout;
use overlay::BattleMenu;
use time::FrameClock;

/// Keys that drive the demo rather than the emulated buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
    ToggleLayout,
    ToggleBattle,
    Reset,
}

fn key_input(code: KeyCode) -> Option<KeyInput> {
    match code {
        // Shift+Z arrives as 'Z'.
        KeyCode::Char(c) => Some(KeyInput::Char(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Esc => Some(KeyInput::Escape),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        _ => None,
    }
}

fn command_for(key: KeyInput) -> Option<Command> {
    match key {
        KeyInput::Char('c') => Some(Command::ToggleLayout),
        KeyInput::Char('d') => Some(Command::ToggleBattle),
        KeyInput::Char('r') => Some(Command::Reset),
        _ => None,
    }
}

struct App {
    menu: BattleMenu,
    config: OverlayConfig,
    double: bool,
}

impl App {
    fn new(config: OverlayConfig) -> Self {
        Self {
            menu: BattleMenu::demo_single(&config),
            config,
            double: false,
        }
    }

    fn rebuild(&mut self) {
        self.menu = if self.double {
            BattleMenu::demo_double(&self.config)
        } else {
            BattleMenu::demo_single(&self.config)
        };
    }

    fn run(&mut self, command: Command) {
        match command {
            Command::ToggleLayout => {
                let layout = self.menu.toggle_layout();
                if layout != self.config.layout {
                    self.config.layout = layout;
                    config::save(&self.config);
                    let name = match layout {
                        InfoLayout::WithDescription => "with description",
                        InfoLayout::Compact => "compact",
                    };
                    self.menu.add_log(&format!("Info layout: {name}"));
                }
            }
            Command::ToggleBattle => {
                self.double = !self.double;
                self.rebuild();
            }
            Command::Reset => self.rebuild(),
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let config = config::load();
    let mut clock = FrameClock::new(config.frames_per_sec);
    let buttons = Rc::new(RefCell::new(ButtonState::with_modifier(config.modifier)));
    let app = Rc::new(RefCell::new(App::new(config)));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let app = app.clone();
        let buttons = buttons.clone();
        move |key_event| {
            let Some(key) = key_input(key_event.code) else {
                return;
            };
            match command_for(key) {
                Some(command) => app.borrow_mut().run(command),
                None => buttons.borrow_mut().apply_key(key, key_event.shift),
            }
        }
    });

    terminal.draw_web(move |f| {
        let mut app = app.borrow_mut();
        let mut buttons = buttons.borrow_mut();
        for _ in 0..clock.update(now_ms()) {
            app.menu.frame(&buttons);
            buttons.end_frame();
        }
        overlay::render::render(&app.menu, f, f.area());
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;

    #[test]
    fn shifted_letters_are_folded() {
        assert_eq!(key_input(KeyCode::Char('Z')), Some(KeyInput::Char('z')));
        assert_eq!(key_input(KeyCode::Backspace), None);
    }

    #[test]
    fn demo_commands_do_not_reach_the_buttons() {
        assert_eq!(command_for(KeyInput::Char('d')), Some(Command::ToggleBattle));
        assert_eq!(command_for(KeyInput::Char('z')), None);
        assert_eq!(command_for(KeyInput::Enter), None);
    }

    #[test]
    fn toggling_battle_kind_rebuilds_the_menu() {
        let mut app = App::new(OverlayConfig::default());
        app.run(Command::ToggleBattle);
        assert!(app.menu.battle.is_double());
        app.run(Command::Reset);
        assert!(app.menu.battle.is_double());
        app.run(Command::ToggleBattle);
        assert!(!app.menu.battle.is_double());
    }

    #[test]
    fn shift_z_opens_info_with_an_r_modifier() {
        let config = OverlayConfig {
            modifier: Button::R,
            ..OverlayConfig::default()
        };
        let mut buttons = ButtonState::with_modifier(config.modifier);
        let mut app = App::new(config);

        let key = key_input(KeyCode::Char('Z')).unwrap();
        assert_eq!(command_for(key), None);
        buttons.apply_key(key, true);
        app.menu.frame(&buttons);
        buttons.end_frame();

        assert!(app.menu.panel.is_active());
    }

    #[test]
    fn layout_toggle_is_remembered_across_rebuilds() {
        let mut app = App::new(OverlayConfig::default());
        app.run(Command::ToggleLayout);
        assert_eq!(app.config.layout, InfoLayout::Compact);
        app.run(Command::Reset);
        assert_eq!(app.menu.panel.layout(), InfoLayout::Compact);
    }
}
