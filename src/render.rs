//! Drawing seam between the text manager and the graphics backend.
//!
//! The console's 3D engine draws text as textured quads; before each visible
//! print the polygon format (alpha level, culling, polygon id) is set. This
//! module models that as the [`Canvas`] trait so the manager never talks to a
//! concrete backend.
//!
//! [`BlendCanvas`] implements the trait for any `embedded-graphics`
//! `DrawTarget<Color = Rgb565>`. Framebuffers there have no alpha channel, so
//! translucency is emulated by blending the text color toward the background
//! color in RGB565 space.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::config::ALPHA_MAX;
use crate::font::FontAtlas;

// =============================================================================
// Polygon Format
// =============================================================================

/// Which polygon faces are discarded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CullMode {
    /// Draw both faces.
    None,
    Back,
    Front,
}

/// Polygon state applied to subsequent prints.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PolyFormat {
    /// 0 (invisible) ..= `ALPHA_MAX` (opaque).
    pub alpha: u8,
    pub cull: CullMode,
    /// Draw-layer id. Translucent polygons only blend with different ids.
    pub poly_id: u8,
}

impl PolyFormat {
    /// Hardware reset state.
    pub const OPAQUE: Self = Self {
        alpha: ALPHA_MAX,
        cull: CullMode::Back,
        poly_id: 0,
    };

    /// Translucent, double-sided format used for overlay text.
    #[inline]
    pub const fn translucent(
        alpha: u8,
        poly_id: u8,
    ) -> Self {
        Self {
            alpha,
            cull: CullMode::None,
            poly_id,
        }
    }
}

impl Default for PolyFormat {
    fn default() -> Self { Self::OPAQUE }
}

// =============================================================================
// Canvas
// =============================================================================

/// Graphics backend for one screen.
pub trait Canvas {
    /// Set polygon state for the following prints.
    fn set_poly_format(
        &mut self,
        format: PolyFormat,
    );

    /// Print `text` with `font`, top-left corner at `pos` (pixels).
    fn print(
        &mut self,
        font: &FontAtlas,
        pos: Point,
        text: &str,
    );
}

/// `Canvas` over an `embedded-graphics` draw target.
pub struct BlendCanvas<'a, D> {
    display: &'a mut D,
    foreground: Rgb565,
    background: Rgb565,
    format: PolyFormat,
}

impl<'a, D> BlendCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a display. `background` is what translucent text blends toward.
    pub fn new(
        display: &'a mut D,
        foreground: Rgb565,
        background: Rgb565,
    ) -> Self {
        Self {
            display,
            foreground,
            background,
            format: PolyFormat::OPAQUE,
        }
    }

    /// Change the text color for subsequent prints.
    pub fn set_foreground(
        &mut self,
        color: Rgb565,
    ) {
        self.foreground = color;
    }

    /// Current polygon format.
    #[inline]
    pub const fn poly_format(&self) -> PolyFormat { self.format }
}

impl<D> Canvas for BlendCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn set_poly_format(
        &mut self,
        format: PolyFormat,
    ) {
        self.format = format;
    }

    fn print(
        &mut self,
        font: &FontAtlas,
        pos: Point,
        text: &str,
    ) {
        if self.format.alpha == 0 {
            return;
        }
        let color = blend_rgb565(self.background, self.foreground, self.format.alpha);
        let style = MonoTextStyle::new(font.mono_font(), color);
        Text::with_baseline(text, pos, style, Baseline::Top)
            .draw(&mut *self.display)
            .ok();
    }
}

// =============================================================================
// Color Blending
// =============================================================================

/// Blend two RGB565 colors: alpha 0 gives `from`, `ALPHA_MAX` gives `to`.
///
/// Works per channel in integer math on the raw 5-6-5 components.
pub fn blend_rgb565(
    from: Rgb565,
    to: Rgb565,
    alpha: u8,
) -> Rgb565 {
    let alpha = i32::from(alpha.min(ALPHA_MAX));
    let max = i32::from(ALPHA_MAX);

    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    let mix = |a: i32, b: i32| a + (b - a) * alpha / max;

    let r = mix(from_r, to_r).clamp(0, 31);
    let g = mix(from_g, to_g).clamp(0, 63);
    let b = mix(from_b, to_b).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

// =============================================================================
// Test Support
// =============================================================================
