//! Text overlays for a dual-screen handheld display.
//!
//! This crate manages timed, fading text on two screens (top and bottom):
//!
//! - [`manager`]: [`TextManager`] owning both text queues, the pane pool and the fonts
//! - [`entry`]: [`TextEntry`], one queued message with delay, slide and fade
//! - [`pane`]: [`TextPane`], a scrolling multi-line widget (at most 3 alive)
//! - [`font`]: the small and large compiled-in font atlases
//! - [`render`]: the [`Canvas`] drawing seam and an `embedded-graphics` implementation
//! - [`screen`]: [`Screen`] and [`FontSize`] routing enums
//! - [`config`]: compile-time constants (geometry, capacities, timing)
//! - [`log`]: ring buffer of manager events
//!
//! # Frame Loop
//!
//! ```ignore
//! let mut text = TextManager::new();
//! text.print_large_centered(Screen::Top, 80, "Hello")?.set_lifetime(120);
//!
//! loop {
//!     text.update_text(Screen::Top, &mut top_canvas);
//!     text.update_text(Screen::Bottom, &mut bottom_canvas);
//!     wait_for_vblank();
//! }
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free: all storage is `heapless`.
//! Tests run on the host with `std` enabled via `cfg_attr`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod entry;
pub mod error;
pub mod font;
pub mod log;
pub mod manager;
pub mod pane;
pub mod render;
pub mod screen;

// Re-export commonly used items
pub use entry::TextEntry;
pub use error::TextError;
pub use font::{FontAtlas, FontSet};
pub use manager::{TextManager, TextQueue};
pub use pane::TextPane;
pub use render::{BlendCanvas, Canvas, CullMode, PolyFormat};
pub use screen::{FontSize, Screen};
