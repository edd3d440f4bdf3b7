//! Terminal rendering of the battle screen.
//!
//! The handheld screen is 240×160 pixels. One terminal cell stands for 4×8
//! pixels, so the screen is 60×20 cells and an 8×8 tile is two cells wide.
//! Sprite coordinates are centres, the way the sprite engine places them.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use super::panel::InfoLayout;
use super::resource::OBJ_PALETTE_SLOTS;
use super::sprite::{AnimatedHandle, HandleKind, StaticSprite};
use super::{BattleMenu, MenuMode};
use crate::battle::data::Battler;
use crate::battle::types::{Split, Type};
use crate::battle::Position;
use crate::window::{TextWindow, WindowTemplate};

pub const SCREEN_COLS: u16 = 60;
pub const SCREEN_ROWS: u16 = 20;
const PX_PER_COL: i32 = 4;
const PX_PER_ROW: i32 = 8;
const COLS_PER_TILE: i32 = 2;

const NARROW_WIDTH: u16 = 90;
const HP_BAR_WIDTH: usize = 12;

const TYPE_ICON_SIZE: (i16, i16) = (32, 16);
const SPLIT_ICON_SIZE: (i16, i16) = (16, 16);

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// On-screen part of something drawn at a possibly off-screen position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub area: Rect,
    /// Columns cut off on the left.
    pub skip_cols: u16,
}

fn clip(screen: Rect, col: i32, row: i32, width: i32, height: i32) -> Option<Placement> {
    let left = col.max(0);
    let top = row.max(0);
    let right = (col + width).min(screen.width as i32);
    let bottom = (row + height).min(screen.height as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Placement {
        area: Rect::new(
            screen.x + left as u16,
            screen.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ),
        skip_cols: (left - col) as u16,
    })
}

pub fn tile_rect(screen: Rect, template: WindowTemplate) -> Option<Placement> {
    clip(
        screen,
        template.left as i32 * COLS_PER_TILE,
        template.top as i32,
        template.width as i32 * COLS_PER_TILE,
        template.height as i32,
    )
}

pub fn sprite_rect(screen: Rect, center_x: i16, center_y: i16, size: (i16, i16)) -> Option<Placement> {
    let (w, h) = (size.0 as i32, size.1 as i32);
    let left_px = center_x as i32 - w / 2;
    let top_px = center_y as i32 - h / 2;
    clip(
        screen,
        left_px.div_euclid(PX_PER_COL),
        top_px.div_euclid(PX_PER_ROW),
        w / PX_PER_COL,
        h / PX_PER_ROW,
    )
}

pub fn render(menu: &BattleMenu, f: &mut Frame, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(SCREEN_ROWS + 2),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(menu, f, main_chunks[0]);

    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SCREEN_ROWS + 2), Constraint::Min(3)])
            .split(main_chunks[1]);
        render_screen(menu, f, chunks[0]);
        render_log(menu, f, chunks[1]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SCREEN_COLS + 2), Constraint::Min(20)])
            .split(main_chunks[1]);
        render_screen(menu, f, chunks[0]);
        render_log(menu, f, chunks[1]);
    }

    render_help(menu, f, main_chunks[2]);
}

fn render_title(menu: &BattleMenu, f: &mut Frame, area: Rect) {
    let kind = if menu.battle.is_double() { "Double battle" } else { "Single battle" };
    let layout = match menu.panel.layout() {
        InfoLayout::WithDescription => "info+desc",
        InfoLayout::Compact => "info",
    };
    let resident = menu.pool.borrow().resident_count();
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Battle Info Overlay",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {kind} · {layout}"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  OBJ {resident}/{OBJ_PALETTE_SLOTS}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_screen(menu: &BattleMenu, f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let screen = Rect::new(
        inner.x,
        inner.y,
        inner.width.min(SCREEN_COLS),
        inner.height.min(SCREEN_ROWS),
    );

    render_field(menu, f, screen);

    // Move menu frame, rows 14..20.
    if let Some(p) = clip(screen, 0, 14, SCREEN_COLS as i32, 6) {
        let frame = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::Gray));
        f.render_widget(frame, p.area);
    }

    for (_, window) in menu.windows.iter() {
        render_text_window(window, f, screen);
    }

    if let Some(icon) = menu.type_info.type_icon() {
        render_type_icon(icon, f, screen);
    }
    if let Some(icon) = menu.type_info.split_icon() {
        render_split_icon(icon, f, screen);
    }
    for handle in [menu.prompt.icon(), menu.prompt.window()].into_iter().flatten() {
        render_prompt_handle(handle, f, screen);
    }
}

/// Where each battler's status box sits: opponents top right, player side
/// lower left.
fn status_box_origin(position: Position) -> (i32, i32) {
    match position {
        Position::OpponentLeft => (30, 1),
        Position::OpponentRight => (30, 4),
        Position::PlayerLeft => (16, 8),
        Position::PlayerRight => (16, 11),
    }
}

fn render_field(menu: &BattleMenu, f: &mut Frame, screen: Rect) {
    let highlight = menu.highlight();
    for position in menu.battle.occupied_positions() {
        let Some(battler) = menu.battle.battler(position) else {
            continue;
        };
        let (col, row) = status_box_origin(position);
        let Some(p) = clip(screen, col, row, 28, 2) else {
            continue;
        };
        let marked = highlight == Some(position);
        f.render_widget(status_box(battler, position.is_opponent(), marked), p.area);
    }
}

fn hp_color(hp: u16, max_hp: u16) -> Color {
    let ratio = hp as f64 / max_hp.max(1) as f64;
    if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn status_box(battler: &Battler, opponent: bool, marked: bool) -> Paragraph<'static> {
    let filled = (battler.hp as usize * HP_BAR_WIDTH / battler.max_hp.max(1) as usize).min(HP_BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(HP_BAR_WIDTH - filled));
    let hp_text = if opponent {
        String::new()
    } else {
        format!(" {:>3}/{:<3}", battler.hp, battler.max_hp)
    };

    let mut name_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if marked {
        name_style = name_style.fg(Color::Yellow).add_modifier(Modifier::REVERSED);
    }
    let marker = if marked { "▸" } else { " " };

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(battler.name, name_style),
            Span::styled(format!(" Lv{}", battler.level), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(" HP ", Style::default().fg(Color::Yellow)),
            Span::styled(bar, Style::default().fg(hp_color(battler.hp, battler.max_hp))),
            Span::styled(hp_text, Style::default().fg(Color::White)),
        ]),
    ])
}

fn render_text_window(window: &TextWindow, f: &mut Frame, screen: Rect) {
    let Some(p) = tile_rect(screen, window.template) else {
        return;
    };

    if window.dynamic {
        f.render_widget(Clear, p.area);
        let paragraph = Paragraph::new(window.text.as_str())
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .wrap(Wrap { trim: true });
        // Centre short text vertically.
        let lines = paragraph.line_count(p.area.width) as u16;
        let pad = p.area.height.saturating_sub(lines) / 2;
        f.render_widget(Block::default().style(Style::default().bg(Color::Blue)), p.area);
        let text_area = Rect::new(p.area.x, p.area.y + pad, p.area.width, p.area.height - pad);
        f.render_widget(paragraph, text_area);
        return;
    }

    if window.text.is_empty() {
        return;
    }
    let style = if window.text.starts_with('▶') {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    f.render_widget(Paragraph::new(window.text.as_str()).style(style), p.area);
}

fn icon_palette_color(palette: u8) -> Color {
    match palette {
        13 => Color::Red,
        14 => Color::Blue,
        15 => Color::Green,
        _ => Color::Gray,
    }
}

fn render_type_icon(icon: &StaticSprite, f: &mut Frame, screen: Rect) {
    let Some(p) = sprite_rect(screen, icon.x, icon.y, TYPE_ICON_SIZE) else {
        return;
    };
    let label = Type::from_icon_frame(icon.frame).map_or("?", Type::name);
    let widget = Paragraph::new(label)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(icon_palette_color(icon.palette_num))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(Clear, p.area);
    f.render_widget(widget, p.area);
}

fn render_split_icon(icon: &StaticSprite, f: &mut Frame, screen: Rect) {
    let Some(p) = sprite_rect(screen, icon.x, icon.y, SPLIT_ICON_SIZE) else {
        return;
    };
    let split = Split::from_icon_frame(icon.frame);
    let color = match split {
        Some(Split::Physical) => Color::LightRed,
        Some(Split::Special) => Color::LightBlue,
        _ => Color::Gray,
    };
    let label = split.map_or("?", Split::name);
    let widget = Paragraph::new(label)
        .style(Style::default().fg(Color::Black).bg(color))
        .alignment(Alignment::Center);
    f.render_widget(Clear, p.area);
    f.render_widget(widget, p.area);
}

fn render_prompt_handle(handle: &AnimatedHandle, f: &mut Frame, screen: Rect) {
    let Some(p) = sprite_rect(screen, handle.x, handle.track.y, handle.kind.size()) else {
        return;
    };
    let widget = match handle.kind {
        HandleKind::Icon => Paragraph::new("INFO").style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        HandleKind::Window => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(" L+A  ", Style::default().fg(Color::Yellow))),
            Line::from(Span::styled(" info ", Style::default().fg(Color::White))),
        ])
        .style(Style::default().bg(Color::DarkGray)),
    };
    f.render_widget(Clear, p.area);
    f.render_widget(widget.scroll((0, p.skip_cols)), p.area);
}

fn render_log(menu: &BattleMenu, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = menu.log.len().saturating_sub(visible_height);

    let lines: Vec<Line> = menu.log[start..]
        .iter()
        .map(|text| Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Gray))))
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_help(menu: &BattleMenu, f: &mut Frame, area: Rect) {
    let help_text = match menu.mode {
        MenuMode::ChooseTarget(_) => "[←→] target  [Z] confirm  [X] back",
        MenuMode::ChooseMove if menu.panel.is_active() => {
            if menu.battle.opponent_count() > 1 {
                "[←→] switch foe  [Z/X] close"
            } else {
                "[Z/X] close"
            }
        }
        MenuMode::ChooseMove => {
            "[arrows] move  [Z] use  [Shift+Z] info  [C] layout  [D] single/double  [R] reset"
        }
    };
    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}
