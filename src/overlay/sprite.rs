//! Sprites owned by the overlays.
//!
//! [`AnimatedHandle`] slides along a horizontal track one pixel per frame and
//! retracts itself off screen; [`StaticSprite`] just sits where it was put.
//! Both hold the [`TagLease`] for their graphics, so destroying the sprite
//! frees its VRAM.

use serde::{Deserialize, Serialize};

use super::resource::{SharedPool, SpritePalette, SpriteSheet, TagLease};
use super::resource::{ResourceTag, TAG_INFO_ICON, TAG_PROMPT_WINDOW};

/// Endpoints of a handle's slide, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Retracted x. Reaching it while hiding destroys the handle.
    pub hide_x: i16,
    /// Fully shown x.
    pub show_x: i16,
    pub y: i16,
}

pub const ICON_TRACK: Track = Track {
    hide_x: -10,
    show_x: 10,
    y: 99,
};

pub const WINDOW_TRACK: Track = Track {
    hide_x: -5,
    show_x: 14,
    y: 96,
};

/// Which half of the button prompt a handle draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    /// 16×16 "info" glyph.
    Icon,
    /// 32×32 window with the button hint.
    Window,
}

impl HandleKind {
    pub fn tag(self) -> ResourceTag {
        match self {
            HandleKind::Icon => TAG_INFO_ICON,
            HandleKind::Window => TAG_PROMPT_WINDOW,
        }
    }

    pub fn sheet(self) -> SpriteSheet {
        match self {
            HandleKind::Icon => SpriteSheet { name: "bis_info_icon", tiles: 4 },
            HandleKind::Window => SpriteSheet { name: "bis_la", tiles: 16 },
        }
    }

    pub fn palette(self) -> SpritePalette {
        match self {
            HandleKind::Icon => SpritePalette { name: "info_icon" },
            HandleKind::Window => SpritePalette { name: "ability_pop_up" },
        }
    }

    /// Width and height in pixels.
    pub fn size(self) -> (i16, i16) {
        match self {
            HandleKind::Icon => (16, 16),
            HandleKind::Window => (32, 32),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Showing,
    Hiding,
}

/// What one frame did to a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// Fully shown, nothing to do.
    Settled,
    /// Reached the hide target; the owner must drop the handle.
    Retracted,
}

#[derive(Debug)]
pub struct AnimatedHandle {
    pub kind: HandleKind,
    pub track: Track,
    pub x: i16,
    pub intent: Intent,
    lease: TagLease,
}

impl AnimatedHandle {
    /// Load graphics for `kind` and place the handle at its retracted
    /// position, sliding in.
    pub fn spawn(pool: &SharedPool, kind: HandleKind, track: Track) -> Option<Self> {
        let lease = TagLease::acquire(pool, kind.tag(), &kind.sheet(), &kind.palette())?;
        Some(Self {
            kind,
            track,
            x: track.hide_x,
            intent: Intent::Showing,
            lease,
        })
    }

    pub fn show(&mut self) {
        self.intent = Intent::Showing;
    }

    pub fn hide(&mut self) {
        self.intent = Intent::Hiding;
    }

    pub fn target(&self) -> i16 {
        match self.intent {
            Intent::Showing => self.track.show_x,
            Intent::Hiding => self.track.hide_x,
        }
    }

    pub fn tick(&mut self) -> Step {
        let target = self.target();
        let moved = self.x != target;
        if moved {
            self.x += (target - self.x).signum();
        }
        match self.intent {
            Intent::Hiding if self.x == target => Step::Retracted,
            _ if moved => Step::Moved,
            _ => Step::Settled,
        }
    }

    pub fn tag(&self) -> ResourceTag {
        self.lease.tag()
    }
}

/// A sprite with no motion of its own: the type and split icons.
#[derive(Debug)]
pub struct StaticSprite {
    pub x: i16,
    pub y: i16,
    /// Frame of the sheet being shown.
    pub frame: u8,
    pub palette_num: u8,
    lease: TagLease,
}

impl StaticSprite {
    pub fn spawn(
        pool: &SharedPool,
        tag: ResourceTag,
        sheet: &SpriteSheet,
        palette: &SpritePalette,
        x: i16,
        y: i16,
    ) -> Option<Self> {
        let lease = TagLease::acquire(pool, tag, sheet, palette)?;
        let palette_num = lease.residency().palette_slot;
        Some(Self {
            x,
            y,
            frame: 0,
            palette_num,
            lease,
        })
    }

    pub fn tag(&self) -> ResourceTag {
        self.lease.tag()
    }
}
