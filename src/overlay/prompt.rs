//! Button prompt: the "L+A: info" hint that slides in beside the move menu.

use super::resource::SharedPool;
use super::sprite::{AnimatedHandle, HandleKind, Intent, Step, Track};
use crate::console;

const ICON: usize = 0;
const WINDOW: usize = 1;

pub struct PromptController {
    pool: SharedPool,
    tracks: [Track; 2],
    /// Handles were created and have not all retracted yet.
    loaded: bool,
    slots: [Option<AnimatedHandle>; 2],
}

impl PromptController {
    pub fn new(pool: SharedPool, icon_track: Track, window_track: Track) -> Self {
        Self {
            pool,
            tracks: [icon_track, window_track],
            loaded: false,
            slots: [None, None],
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn icon(&self) -> Option<&AnimatedHandle> {
        self.slots[ICON].as_ref()
    }

    pub fn window(&self) -> Option<&AnimatedHandle> {
        self.slots[WINDOW].as_ref()
    }

    /// Slide the prompt in, creating it on first use.
    pub fn restore(&mut self) {
        if !self.loaded {
            self.spawn_slots();
            return;
        }
        for handle in self.slots.iter_mut().flatten() {
            handle.show();
        }
    }

    /// Start retracting every live handle. Graphics are freed once each one
    /// reaches its hide position.
    pub fn hide(&mut self) {
        for handle in self.slots.iter_mut().flatten() {
            handle.hide();
        }
    }

    /// Advance both handles one frame.
    pub fn tick(&mut self) {
        for slot in self.slots.iter_mut() {
            let retracted = match slot {
                Some(handle) => handle.tick() == Step::Retracted,
                None => false,
            };
            if retracted {
                *slot = None;
            }
        }
        if self.loaded && self.live_count() == 0 {
            self.loaded = false;
        }
    }

    /// True while any handle is sliding in or shown.
    pub fn is_showing(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|h| h.intent == Intent::Showing)
    }

    fn spawn_slots(&mut self) {
        let kinds = [HandleKind::Icon, HandleKind::Window];
        for (i, kind) in kinds.into_iter().enumerate() {
            if self.slots[i].is_none() {
                self.slots[i] = AnimatedHandle::spawn(&self.pool, kind, self.tracks[i]);
            }
        }
        self.loaded = self.live_count() > 0;
        if !self.loaded {
            console::warn("button prompt could not be created");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::resource::{
        ResourcePool, SpritePalette, SpriteSheet, TagLease, OBJ_TILE_CAPACITY, TAG_INFO_ICON,
        TAG_PROMPT_WINDOW,
    };
    use crate::overlay::sprite::{ICON_TRACK, WINDOW_TRACK};

    fn controller() -> (SharedPool, PromptController) {
        let pool = ResourcePool::shared();
        let prompt = PromptController::new(pool.clone(), ICON_TRACK, WINDOW_TRACK);
        (pool, prompt)
    }

    fn snapshot(p: &PromptController) -> Vec<(i16, Intent)> {
        p.slots.iter().flatten().map(|h| (h.x, h.intent)).collect()
    }

    #[test]
    fn first_restore_creates_both_handles() {
        let (pool, mut prompt) = controller();
        assert!(!prompt.is_loaded());
        prompt.restore();
        assert!(prompt.is_loaded());
        assert_eq!(prompt.live_count(), 2);
        assert!(pool.borrow().is_loaded(TAG_INFO_ICON));
        assert!(pool.borrow().is_loaded(TAG_PROMPT_WINDOW));
    }

    #[test]
    fn repeated_restore_does_not_reload() {
        let (pool, mut prompt) = controller();
        prompt.restore();
        prompt.restore();
        prompt.restore();
        assert_eq!(pool.borrow().loads, 2);
        assert_eq!(prompt.live_count(), 2);
    }

    #[test]
    fn hide_without_handles_is_a_no_op() {
        let (pool, mut prompt) = controller();
        prompt.hide();
        prompt.tick();
        assert!(!prompt.is_loaded());
        assert_eq!(pool.borrow().loads, 0);
        assert_eq!(pool.borrow().releases, 0);
    }

    #[test]
    fn hide_retracts_and_frees_everything_once() {
        let (pool, mut prompt) = controller();
        prompt.restore();
        for _ in 0..30 {
            prompt.tick();
        }
        assert_eq!(prompt.icon().map(|h| h.x), Some(ICON_TRACK.show_x));
        assert_eq!(prompt.window().map(|h| h.x), Some(WINDOW_TRACK.show_x));

        prompt.hide();
        // The longest slide is the icon's 20px.
        for _ in 0..19 {
            prompt.tick();
        }
        assert!(prompt.icon().is_some());
        assert!(prompt.window().is_none());
        assert!(prompt.is_loaded());
        prompt.tick();
        assert_eq!(prompt.live_count(), 0);
        assert!(!prompt.is_loaded());

        for _ in 0..10 {
            prompt.tick();
        }
        assert_eq!(pool.borrow().releases, 2);
        assert_eq!(pool.borrow().resident_count(), 0);
    }

    #[test]
    fn restore_after_full_hide_recreates() {
        let (pool, mut prompt) = controller();
        prompt.restore();
        prompt.hide();
        prompt.tick();
        assert!(!prompt.is_loaded());
        prompt.restore();
        assert!(prompt.is_loaded());
        assert_eq!(prompt.live_count(), 2);
        assert_eq!(pool.borrow().loads, 4);
    }

    #[test]
    fn restore_hide_restore_matches_single_restore() {
        let (_pool_a, mut once) = controller();
        once.restore();

        let (_pool_b, mut round_trip) = controller();
        round_trip.restore();
        round_trip.hide();
        round_trip.restore();

        assert_eq!(snapshot(&once), snapshot(&round_trip));
        for _ in 0..25 {
            once.tick();
            round_trip.tick();
        }
        assert_eq!(snapshot(&once), snapshot(&round_trip));
    }

    #[test]
    fn restore_mid_retract_slides_back() {
        let (_pool, mut prompt) = controller();
        prompt.restore();
        for _ in 0..30 {
            prompt.tick();
        }
        prompt.hide();
        for _ in 0..3 {
            prompt.tick();
        }
        prompt.restore();
        assert!(prompt.is_showing());
        for _ in 0..3 {
            prompt.tick();
        }
        assert_eq!(prompt.icon().map(|h| h.x), Some(ICON_TRACK.show_x));
        assert_eq!(prompt.live_count(), 2);
    }

    #[test]
    fn destroyed_slot_is_not_recreated_while_loaded() {
        let (_pool, mut prompt) = controller();
        prompt.restore();
        prompt.hide();
        // Keep the icon sliding in while the window retracts straight away.
        if let Some(icon) = prompt.slots[ICON].as_mut() {
            icon.show();
        }
        prompt.tick();
        assert!(prompt.window().is_none());
        assert!(prompt.is_loaded());
        prompt.restore();
        assert_eq!(prompt.live_count(), 1);
        assert!(prompt.window().is_none());
    }

    #[test]
    fn full_pool_leaves_prompt_unloaded() {
        let pool = ResourcePool::shared();
        let filler = SpriteSheet { name: "filler", tiles: OBJ_TILE_CAPACITY };
        let _hold = TagLease::acquire(&pool, 1, &filler, &SpritePalette { name: "filler" }).unwrap();
        let mut prompt = PromptController::new(pool.clone(), ICON_TRACK, WINDOW_TRACK);
        prompt.restore();
        assert!(!prompt.is_loaded());
        assert_eq!(prompt.live_count(), 0);
    }
}
