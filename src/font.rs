//! Bitmap font atlases.
//!
//! Both atlases are compiled into the binary: the glyph image and the
//! codepoint-to-glyph mapping come from the font constants themselves, so
//! "loading" never fails and costs nothing at runtime.
//!
//! | Atlas | Id | Font |
//! |-------|----|------|
//! | small | 0 | `FONT_6X10` (6x10 glyphs) |
//! | large | 1 | `ProFont` 14pt |

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::prelude::*;
use profont::PROFONT_14_POINT;

use crate::config::{LINE_SPACING, SCREEN_WIDTH};
use crate::render::Canvas;
use crate::screen::FontSize;

/// Small font asset.
pub const SMALL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Large font asset.
pub const LARGE_FONT: &MonoFont<'static> = &PROFONT_14_POINT;

// =============================================================================
// Font Atlas
// =============================================================================

/// One loaded font with its atlas id.
#[derive(Clone, Copy)]
pub struct FontAtlas {
    id: u8,
    font: &'static MonoFont<'static>,
}

impl FontAtlas {
    /// Register a compiled-in font under `id`.
    pub const fn load(
        id: u8,
        font: &'static MonoFont<'static>,
    ) -> Self {
        Self { id, font }
    }

    #[inline]
    pub const fn id(&self) -> u8 { self.id }

    /// Underlying glyph data.
    #[inline]
    pub const fn mono_font(&self) -> &'static MonoFont<'static> { self.font }

    /// Size of one glyph cell in pixels.
    #[inline]
    pub const fn glyph_size(&self) -> Size { self.font.character_size }

    /// Vertical distance between stacked lines of this font.
    #[inline]
    pub const fn line_height(&self) -> u32 { self.font.character_size.height + LINE_SPACING }

    /// Width of `text` in pixels when printed with this font.
    ///
    /// Monospaced: every character advances by the glyph width plus spacing,
    /// with no trailing spacing after the last one.
    pub fn calc_width(
        &self,
        text: &str,
    ) -> u32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        count * self.font.character_size.width + (count - 1) * self.font.character_spacing
    }

    /// X coordinate that centers `text` horizontally on a screen.
    ///
    /// Negative when the text is wider than the screen.
    pub fn centered_x(
        &self,
        text: &str,
    ) -> i32 {
        (SCREEN_WIDTH as i32 - self.calc_width(text) as i32) / 2
    }

    /// Print `text` at `pos` through the canvas.
    pub fn print<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        pos: Point,
        text: &str,
    ) {
        canvas.print(self, pos, text);
    }
}

impl core::fmt::Debug for FontAtlas {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("FontAtlas")
            .field("id", &self.id)
            .field("glyph_size", &self.font.character_size)
            .finish()
    }
}

// =============================================================================
// Font Set
// =============================================================================

/// The small and large atlases.
#[derive(Clone, Copy, Debug)]
pub struct FontSet {
    pub small: FontAtlas,
    pub large: FontAtlas,
}

impl FontSet {
    /// Load both atlases, assigning id 0 to small and 1 to large.
    pub const fn load() -> Self {
        Self {
            small: FontAtlas::load(FontSize::Small.atlas_id(), SMALL_FONT),
            large: FontAtlas::load(FontSize::Large.atlas_id(), LARGE_FONT),
        }
    }

    /// Atlas for a font size.
    #[inline]
    pub const fn get(
        &self,
        size: FontSize,
    ) -> &FontAtlas {
        match size {
            FontSize::Small => &self.small,
            FontSize::Large => &self.large,
        }
    }
}

impl Default for FontSet {
    fn default() -> Self { Self::load() }
}
