//! A single queued text message.
//!
//! Entries move through three fade phases:
//!
//! ```text
//! [delay] -> In (alpha rises) -> Hold (lifetime counts down) -> Out (alpha falls) -> expired
//! ```
//!
//! Positions are stored in fixed point (`PRECISION` units per pixel) so a
//! slide-in animation can ease toward the target by fractions of a pixel.
//! Without a lifetime an entry holds forever and only leaves its queue
//! through [`TextEntry::fade_out`] or a clear.

use embedded_graphics::prelude::Point;
use heapless::String;

use crate::config::{ALPHA_MAX, FADE_STEP, MESSAGE_LEN, PRECISION, SLIDE_DIVISOR};
use crate::screen::FontSize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Fade {
    In,
    Hold,
    Out,
}

/// One transient text message.
#[derive(Clone, Debug)]
pub struct TextEntry {
    size: FontSize,
    immune: bool,
    x: i32,
    y: i32,
    target_x: i32,
    target_y: i32,
    delay: u16,
    lifetime: Option<u16>,
    alpha: u8,
    fade: Fade,
    message: String<MESSAGE_LEN>,
}

impl TextEntry {
    /// Create an entry at pixel position (`x`, `y`), invisible and about to fade in.
    ///
    /// Messages longer than `MESSAGE_LEN - 1` characters are truncated.
    pub fn new(
        size: FontSize,
        x: i32,
        y: i32,
        message: &str,
    ) -> Self {
        let mut msg: String<MESSAGE_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= MESSAGE_LEN - 1 {
                break;
            }
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            size,
            immune: false,
            x: x * PRECISION,
            y: y * PRECISION,
            target_x: x * PRECISION,
            target_y: y * PRECISION,
            delay: 0,
            lifetime: None,
            alpha: 0,
            fade: Fade::In,
            message: msg,
        }
    }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advance one frame. Returns `true` once the entry has fully faded out.
    pub fn update(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
            return false;
        }

        self.x = approach(self.x, self.target_x);
        self.y = approach(self.y, self.target_y);

        match self.fade {
            Fade::In => {
                self.alpha = self.alpha.saturating_add(FADE_STEP).min(ALPHA_MAX);
                if self.alpha == ALPHA_MAX {
                    self.fade = Fade::Hold;
                }
                false
            }
            Fade::Hold => {
                match self.lifetime.as_mut() {
                    Some(0) => self.fade = Fade::Out,
                    Some(frames) => *frames -= 1,
                    None => {}
                }
                false
            }
            Fade::Out => {
                self.alpha = self.alpha.saturating_sub(FADE_STEP);
                self.alpha == 0
            }
        }
    }

    /// Alpha to draw with this frame; 0 means skip drawing.
    #[inline]
    pub const fn calc_alpha(&self) -> u8 { if self.delay > 0 { 0 } else { self.alpha } }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Wait `frames` frames before doing anything (including becoming visible).
    pub fn set_delay(
        &mut self,
        frames: u16,
    ) -> &mut Self {
        self.delay = frames;
        self
    }

    /// Start fading out after being fully visible for `frames` frames.
    pub fn set_lifetime(
        &mut self,
        frames: u16,
    ) -> &mut Self {
        self.lifetime = Some(frames);
        self
    }

    /// Immune entries survive `clear_text`.
    pub fn set_immune(
        &mut self,
        immune: bool,
    ) -> &mut Self {
        self.immune = immune;
        self
    }

    /// Start `dx`, `dy` pixels away from the target and ease into place.
    pub fn slide_from(
        &mut self,
        dx: i32,
        dy: i32,
    ) -> &mut Self {
        self.x = self.target_x + dx * PRECISION;
        self.y = self.target_y + dy * PRECISION;
        self
    }

    /// Skip the fade-in and appear fully opaque.
    pub fn show(&mut self) -> &mut Self {
        self.alpha = ALPHA_MAX;
        self.fade = Fade::Hold;
        self
    }

    /// Begin fading out now. The entry expires when alpha reaches 0.
    pub fn fade_out(&mut self) -> &mut Self {
        self.fade = Fade::Out;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn size(&self) -> FontSize { self.size }

    #[inline]
    pub const fn is_immune(&self) -> bool { self.immune }

    #[inline]
    pub fn is_fading_out(&self) -> bool { self.fade == Fade::Out }

    /// Current position in pixels.
    #[inline]
    pub const fn position(&self) -> Point { Point::new(self.x / PRECISION, self.y / PRECISION) }

    /// Current position in fixed-point units.
    #[inline]
    pub const fn raw_position(&self) -> (i32, i32) { (self.x, self.y) }

    #[inline]
    pub fn message(&self) -> &str { self.message.as_str() }
}

/// Move `current` a fraction of the way to `target`, at least one unit.
fn approach(
    current: i32,
    target: i32,
) -> i32 {
    let delta = target - current;
    if delta == 0 {
        return current;
    }
    let step = delta / SLIDE_DIVISOR;
    if step == 0 { current + delta.signum() } else { current + step }
}
