//! Tag-keyed pool of sprite tile sheets and palettes.
//!
//! OBJ VRAM holds 1024 4bpp tiles and 16 palettes. Each [`ResourceTag`] names
//! one (sheet, palette) pair that is either resident or not; there is no
//! reference count. Ownership lives in [`TagLease`]: whoever holds the lease
//! is the tag's single owner, and dropping the lease frees the tag.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::console;

pub type ResourceTag = u16;

pub const TAG_PROMPT_WINDOW: ResourceTag = 0xD722;
pub const TAG_INFO_ICON: ResourceTag = 30020;
pub const TAG_MOVE_TYPES: ResourceTag = 30002;
pub const TAG_SPLIT_ICONS: ResourceTag = 30004;

pub const OBJ_TILE_CAPACITY: u16 = 1024;
pub const OBJ_PALETTE_SLOTS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub name: &'static str,
    /// Size in 8×8 tiles.
    pub tiles: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpritePalette {
    pub name: &'static str,
}

/// Where a resident tag lives in VRAM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Residency {
    pub tile_start: u16,
    pub tiles: u16,
    pub palette_slot: u8,
}

#[derive(Default)]
pub struct ResourcePool {
    resident: HashMap<ResourceTag, Residency>,
    /// Loads and releases that actually changed residency.
    pub loads: u32,
    pub releases: u32,
}

pub type SharedPool = Rc<RefCell<ResourcePool>>;

impl ResourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedPool {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Make `tag` resident. Already-resident tags are returned untouched.
    /// `None` when the tiles or a palette slot cannot be found.
    pub fn ensure_loaded(
        &mut self,
        tag: ResourceTag,
        sheet: &SpriteSheet,
        _palette: &SpritePalette,
    ) -> Option<Residency> {
        if let Some(existing) = self.resident.get(&tag) {
            return Some(*existing);
        }

        let tile_start = self.find_tiles(sheet.tiles)?;
        let palette_slot = self.find_palette_slot()?;
        let residency = Residency {
            tile_start,
            tiles: sheet.tiles,
            palette_slot,
        };
        self.resident.insert(tag, residency);
        self.loads += 1;
        Some(residency)
    }

    /// Free the tiles and palette under `tag`. Returns false if it was not
    /// resident.
    pub fn release(&mut self, tag: ResourceTag) -> bool {
        if self.resident.remove(&tag).is_some() {
            self.releases += 1;
            true
        } else {
            false
        }
    }

    pub fn is_loaded(&self, tag: ResourceTag) -> bool {
        self.resident.contains_key(&tag)
    }

    pub fn residency(&self, tag: ResourceTag) -> Option<Residency> {
        self.resident.get(&tag).copied()
    }

    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// First-fit search over the gaps between resident sheets.
    fn find_tiles(&self, count: u16) -> Option<u16> {
        let mut used: Vec<(u16, u16)> = self
            .resident
            .values()
            .map(|r| (r.tile_start, r.tile_start + r.tiles))
            .collect();
        used.sort_unstable();

        let mut cursor = 0u16;
        for (start, end) in used {
            if start - cursor >= count {
                return Some(cursor);
            }
            cursor = cursor.max(end);
        }
        if OBJ_TILE_CAPACITY - cursor >= count {
            Some(cursor)
        } else {
            None
        }
    }

    fn find_palette_slot(&self) -> Option<u8> {
        (0..OBJ_PALETTE_SLOTS as u8).find(|slot| {
            !self.resident.values().any(|r| r.palette_slot == *slot)
        })
    }
}

/// Exclusive ownership of one resident tag. Dropping it frees the tag.
/// A tag that is already resident cannot be leased again.
#[derive(Debug)]
pub struct TagLease {
    pool: SharedPool,
    tag: ResourceTag,
    residency: Residency,
}

impl TagLease {
    pub fn acquire(
        pool: &SharedPool,
        tag: ResourceTag,
        sheet: &SpriteSheet,
        palette: &SpritePalette,
    ) -> Option<Self> {
        if pool.borrow().is_loaded(tag) {
            console::warn(&format!(
                "tag {:#06x} already has an owner, not leasing {}",
                tag, sheet.name
            ));
            return None;
        }
        let residency = pool.borrow_mut().ensure_loaded(tag, sheet, palette);
        match residency {
            Some(residency) => Some(Self {
                pool: Rc::clone(pool),
                tag,
                residency,
            }),
            None => {
                console::warn(&format!("OBJ VRAM full, cannot load {} (tag {:#06x})", sheet.name, tag));
                None
            }
        }
    }

    pub fn tag(&self) -> ResourceTag {
        self.tag
    }

    pub fn residency(&self) -> Residency {
        self.residency
    }
}

impl Drop for TagLease {
    fn drop(&mut self) {
        self.pool.borrow_mut().release(self.tag);
    }
}

impl std::fmt::Debug for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePool")
            .field("resident", &self.resident.len())
            .field("loads", &self.loads)
            .field("releases", &self.releases)
            .finish()
    }
}
