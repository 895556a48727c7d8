//! Browser shell for the download form.
//!
//! The DOM bindings are behind `--features web` on a wasm32 target. The
//! render layer and element ids compile everywhere so they can be tested on
//! the host.
pub mod error;
pub mod ui;

pub use error::WebError;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod platform;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use platform::start;
