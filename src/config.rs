//! Overlay settings, stored as JSON in localStorage.
//!
//! ## Versioning
//!
//! - `CONFIG_VERSION`: current format. Bump when a field is added.
//! - `MIN_COMPATIBLE_VERSION`: oldest format still read. Bump only when a
//!   field changes meaning or is removed.
//!
//! Compatible older data is read with missing fields filled from defaults.
//! Anything else is discarded and the defaults are used.

use serde::{Deserialize, Serialize};

use crate::console;
use crate::input::Button;
use crate::overlay::panel::InfoLayout;
use crate::overlay::sprite::{Track, ICON_TRACK, WINDOW_TRACK};
use crate::time::FRAMES_PER_SEC;

pub const CONFIG_VERSION: u32 = 1;
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "battle_info_overlay_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub version: u32,
    pub layout: InfoLayout,
    /// Held together with A to open the info panel.
    pub modifier: Button,
    pub icon_track: Track,
    pub window_track: Track,
    pub frames_per_sec: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            layout: InfoLayout::default(),
            modifier: Button::L,
            icon_track: ICON_TRACK,
            window_track: WINDOW_TRACK,
            frames_per_sec: FRAMES_PER_SEC,
        }
    }
}

/// Decode stored settings. `None` when the JSON is broken or too old.
pub fn parse(json: &str) -> Option<OverlayConfig> {
    let config: OverlayConfig = match serde_json::from_str(json) {
        Ok(c) => c,
        Err(e) => {
            console::warn(&format!("overlay config: parse failed, using defaults: {e}"));
            return None;
        }
    };

    if config.version < MIN_COMPATIBLE_VERSION {
        console::warn(&format!(
            "overlay config: version too old (saved={}, min_compatible={}), using defaults",
            config.version, MIN_COMPATIBLE_VERSION
        ));
        return None;
    }
    if config.version < CONFIG_VERSION {
        console::log(&format!(
            "overlay config: migrating (saved={}, current={})",
            config.version, CONFIG_VERSION
        ));
    }

    Some(OverlayConfig {
        version: CONFIG_VERSION,
        frames_per_sec: config.frames_per_sec.max(1),
        ..config
    })
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Stored settings, or defaults when there are none usable.
#[cfg(target_arch = "wasm32")]
pub fn load() -> OverlayConfig {
    let Some(storage) = get_storage() else {
        return OverlayConfig::default();
    };
    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return OverlayConfig::default(),
    };
    match parse(&json) {
        Some(config) => config,
        None => {
            let _ = storage.remove_item(STORAGE_KEY);
            OverlayConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> OverlayConfig {
    OverlayConfig::default()
}

#[cfg(target_arch = "wasm32")]
pub fn save(config: &OverlayConfig) {
    let Some(storage) = get_storage() else {
        return;
    };
    match serde_json::to_string(config) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                console::warn(&format!("overlay config: save failed: {e:?}"));
            }
        }
        Err(e) => console::warn(&format!("overlay config: serialize failed: {e}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_config: &OverlayConfig) {}
