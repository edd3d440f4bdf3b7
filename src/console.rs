//! Browser console logging.
//!
//! Only wasm32 builds have a console to write to; native builds (tests) compile
//! these to no-ops so the overlay logic stays free of `cfg` noise.

/// Informational message.
#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Something went wrong but the frame loop keeps going.
#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}
