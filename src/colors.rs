//! Color constants for the overlay screens.
//!
//! All colors are RGB565 (5 bits red, 6 bits green, 5 bits blue), the native
//! format of the handheld's framebuffers.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Default screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pale yellow for the title line in the simulator.
pub const PALE_YELLOW: Rgb565 = Rgb565::new(31, 60, 20);

/// Dark slate blue background for the bottom screen in the simulator.
pub const SLATE: Rgb565 = Rgb565::new(3, 8, 9);
