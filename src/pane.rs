//! Multi-line scrolling text pane.
//!
//! A pane shows a window of `shown_elements` lines starting at its origin.
//! When more lines are pushed than fit, the window scrolls up smoothly, one
//! line at a time, until the newest line is visible. A pane is bound to one
//! screen; updates for the other screen report its state without advancing it.
//!
//! # Lifecycle
//!
//! ```text
//! fade in -> scroll through lines -> [lifetime countdown] -> close() -> fade out -> done
//! ```
//!
//! Panes are owned by the text manager's pool, which drops them once
//! [`TextPane::update`] reports done.

use embedded_graphics::prelude::Point;
use heapless::{String, Vec};

use crate::config::{ALPHA_MAX, FADE_STEP, MESSAGE_LEN, PANE_MAX_LINES, PANE_POLY_ID, PRECISION, SCROLL_STEP};
use crate::error::TextError;
use crate::font::FontSet;
use crate::render::{Canvas, PolyFormat};
use crate::screen::{FontSize, Screen};

/// Scrolling multi-line text widget.
#[derive(Clone, Debug)]
pub struct TextPane {
    x: i32,
    y: i32,
    shown_elements: usize,
    screen: Screen,
    size: FontSize,
    lines: Vec<String<MESSAGE_LEN>, PANE_MAX_LINES>,

    // Progress on the bound screen
    first_visible: usize,
    /// Fixed-point scroll offset of the window, 0 when resting on a line.
    scroll: i32,
    alpha: u8,
    closing: bool,
    lifetime: Option<u16>,
}

impl TextPane {
    /// Empty pane at pixel position (`x`, `y`) showing up to `shown_elements` lines.
    pub const fn new(
        x: i32,
        y: i32,
        shown_elements: usize,
    ) -> Self {
        Self {
            x,
            y,
            shown_elements,
            screen: Screen::Bottom,
            size: FontSize::Small,
            lines: Vec::new(),
            first_visible: 0,
            scroll: 0,
            alpha: 0,
            closing: false,
            lifetime: None,
        }
    }

    /// Bind the pane to `screen` (bottom by default).
    pub fn on_screen(
        &mut self,
        screen: Screen,
    ) -> &mut Self {
        self.screen = screen;
        self
    }

    /// Use the given font size (small by default).
    pub fn with_font(
        &mut self,
        size: FontSize,
    ) -> &mut Self {
        self.size = size;
        self
    }

    /// Close automatically `frames` frames after the last line comes into view.
    pub fn set_lifetime(
        &mut self,
        frames: u16,
    ) -> &mut Self {
        self.lifetime = Some(frames);
        self
    }

    /// Append a line. Text beyond `MESSAGE_LEN - 1` characters is truncated.
    pub fn push_line(
        &mut self,
        text: &str,
    ) -> Result<(), TextError> {
        let mut line: String<MESSAGE_LEN> = String::new();
        for (i, c) in text.chars().enumerate() {
            if i >= MESSAGE_LEN - 1 {
                break;
            }
            if line.push(c).is_err() {
                break;
            }
        }
        self.lines.push(line).map_err(|_| TextError::PaneFull)
    }

    /// Start fading out. The pane is done once fully transparent.
    pub fn close(&mut self) { self.closing = true; }

    #[inline]
    pub const fn is_closing(&self) -> bool { self.closing }

    #[inline]
    pub const fn is_done(&self) -> bool { self.closing && self.alpha == 0 }

    #[inline]
    pub const fn screen(&self) -> Screen { self.screen }

    #[inline]
    pub const fn origin(&self) -> Point { Point::new(self.x, self.y) }

    #[inline]
    pub const fn shown_elements(&self) -> usize { self.shown_elements }

    /// Current pane alpha.
    #[inline]
    pub const fn alpha(&self) -> u8 { self.alpha }

    pub fn lines(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Lines currently inside the window, including one entering from below while scrolling.
    pub fn visible_lines(&self) -> impl Iterator<Item = &str> {
        let start = self.first_visible.min(self.lines.len());
        self.lines[start..self.window_end()].iter().map(|line| line.as_str())
    }

    fn window_end(&self) -> usize {
        let entering = usize::from(self.scroll > 0);
        (self.first_visible + self.shown_elements + entering).min(self.lines.len())
    }

    fn has_lines_below(&self) -> bool { self.first_visible + self.shown_elements < self.lines.len() }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advance and draw the pane for `screen`. Returns `true` when the pane is done.
    pub fn update<C: Canvas + ?Sized>(
        &mut self,
        screen: Screen,
        fonts: &FontSet,
        canvas: &mut C,
    ) -> bool {
        if screen != self.screen {
            return self.is_done();
        }

        self.alpha = if self.closing {
            self.alpha.saturating_sub(FADE_STEP)
        } else {
            self.alpha.saturating_add(FADE_STEP).min(ALPHA_MAX)
        };

        let font = fonts.get(self.size);
        let line_height = font.line_height() as i32 * PRECISION;

        if self.has_lines_below() {
            self.scroll += SCROLL_STEP;
            if self.scroll >= line_height {
                self.scroll = 0;
                self.first_visible += 1;
            }
        } else if !self.closing {
            match self.lifetime.as_mut() {
                Some(0) => self.closing = true,
                Some(frames) => *frames -= 1,
                None => {}
            }
        }

        if self.is_done() {
            return true;
        }

        if self.alpha > 0 {
            canvas.set_poly_format(PolyFormat::translucent(self.alpha, PANE_POLY_ID));
            let start = self.first_visible.min(self.lines.len());
            for (row, line) in self.lines[start..self.window_end()].iter().enumerate() {
                let offset = (row as i32 * line_height - self.scroll) / PRECISION;
                font.print(canvas, Point::new(self.x, self.y + offset), line.as_str());
            }
        }
        false
    }
}
