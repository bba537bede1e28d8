//! Compile-time configuration for the text overlay system.
//!
//! Everything here is `const`, so layout math such as `SCREEN_WIDTH / 2` is
//! folded at compile time and never recomputed per frame.
//!
//! Timing values are expressed in frames (one frame = one display refresh,
//! ~60 Hz on the target hardware), not wall-clock time, so this module stays
//! usable without `std::time`.

// =============================================================================
// Display Configuration
// =============================================================================

/// Width of each screen in pixels.
pub const SCREEN_WIDTH: u32 = 256;

/// Height of each screen in pixels.
pub const SCREEN_HEIGHT: u32 = 192;

/// Vertical gap between the two screens when they are shown stacked.
pub const SCREEN_GAP: u32 = 16;

// =============================================================================
// Fixed-Point Positions
// =============================================================================

/// Sub-pixel units per pixel for text positions.
///
/// Entry positions are stored multiplied by this factor so slide animations
/// can move by fractions of a pixel per frame.
pub const PRECISION: i32 = 256;

// =============================================================================
// Capacities
// =============================================================================

/// Maximum number of text entries held per screen.
pub const TEXT_QUEUE_CAPACITY: usize = 32;

/// Maximum number of text panes alive at once (shared by both screens).
/// Creating another pane evicts the oldest one.
pub const PANE_POOL_CAPACITY: usize = 3;

/// Maximum number of lines a single pane can hold.
pub const PANE_MAX_LINES: usize = 16;

/// Maximum characters stored per message. Longer messages are truncated.
pub const MESSAGE_LEN: usize = 48;

// =============================================================================
// Blending & Draw Layers
// =============================================================================

/// Fully opaque polygon alpha (hardware alpha is 5 bits).
pub const ALPHA_MAX: u8 = 31;

/// Polygon id used when drawing queued text entries.
pub const TEXT_POLY_ID: u8 = 1;

/// Polygon id used when drawing text panes.
pub const PANE_POLY_ID: u8 = 2;

// =============================================================================
// Animation Timing (frames)
// =============================================================================

/// Alpha change per frame while fading in or out.
/// At 4 per frame a full fade takes 8 frames (~130ms at 60 FPS).
pub const FADE_STEP: u8 = 4;

/// Slide easing divisor: each frame an entry covers 1/N of the remaining distance.
pub const SLIDE_DIVISOR: i32 = 4;

/// Pane scroll speed in fixed-point units per frame (2 px per frame).
pub const SCROLL_STEP: i32 = 2 * PRECISION;

/// Extra pixels between lines of a pane, on top of the glyph height.
pub const LINE_SPACING: u32 = 2;
