//! The text manager: per-screen text queues, the pane pool, and both fonts.
//!
//! One `TextManager` is created at startup and passed by reference to
//! whatever drives the frame loop. Each frame, call
//! [`TextManager::update_text`] once per screen with that screen's canvas.
//!
//! # Frame Update
//!
//! | Step | What | Removal |
//! |------|------|---------|
//! | 1 | `entry.update()` for each entry of the screen's queue | expired entries |
//! | 2 | draw entries with alpha > 0 at `TEXT_POLY_ID` | - |
//! | 3 | `pane.update(screen)` for every pane in the pool | finished panes |
//!
//! Queue order is insertion order, which is also draw order, so later
//! entries are layered over earlier ones.
//!
//! # Pane Pool
//!
//! At most `PANE_POOL_CAPACITY` (3) panes exist at once. Creating another one
//! drops the oldest pane immediately, whatever state it is in.

use heapless::Vec;

use crate::config::{PANE_POOL_CAPACITY, TEXT_POLY_ID, TEXT_QUEUE_CAPACITY};
use crate::entry::TextEntry;
use crate::error::TextError;
use crate::font::{FontAtlas, FontSet};
use crate::log::EventLog;
use crate::pane::TextPane;
use crate::render::{Canvas, PolyFormat};
use crate::screen::{FontSize, Screen};

/// Text entries of one screen, in insertion order.
pub type TextQueue = Vec<TextEntry, TEXT_QUEUE_CAPACITY>;

/// Owner of all on-screen text state.
pub struct TextManager {
    fonts: FontSet,
    queues: [TextQueue; 2],
    panes: Vec<TextPane, PANE_POOL_CAPACITY>,
    log: EventLog,
}

impl TextManager {
    /// Load both font atlases (ids 0 and 1) and start with empty queues.
    pub fn new() -> Self {
        let mut log = EventLog::new();
        log.push("fonts loaded");
        Self {
            fonts: FontSet::load(),
            queues: [Vec::new(), Vec::new()],
            panes: Vec::new(),
            log,
        }
    }

    // =========================================================================
    // Routing
    // =========================================================================

    /// Entries queued for `screen`, oldest first.
    #[inline]
    pub fn queue(
        &self,
        screen: Screen,
    ) -> &[TextEntry] {
        &self.queues[screen.index()]
    }

    #[inline]
    fn queue_mut(
        &mut self,
        screen: Screen,
    ) -> &mut TextQueue {
        &mut self.queues[screen.index()]
    }

    /// Atlas for a font size.
    #[inline]
    pub const fn font(
        &self,
        size: FontSize,
    ) -> &FontAtlas {
        self.fonts.get(size)
    }

    #[inline]
    pub const fn fonts(&self) -> &FontSet { &self.fonts }

    /// Live panes, oldest first.
    #[inline]
    pub fn panes(&self) -> &[TextPane] { &self.panes }

    /// Live panes for in-place changes such as closing; the pool itself cannot grow or shrink here.
    #[inline]
    pub fn panes_mut(&mut self) -> &mut [TextPane] { &mut self.panes }

    #[inline]
    pub const fn event_log(&self) -> &EventLog { &self.log }

    // =========================================================================
    // Panes
    // =========================================================================

    /// Create a pane, evicting the oldest one if the pool is full.
    pub fn create_text_pane(
        &mut self,
        x: i32,
        y: i32,
        shown_elements: usize,
    ) -> &mut TextPane {
        if self.panes.len() >= PANE_POOL_CAPACITY {
            self.panes.remove(0);
            self.log.push("pane evicted");
        }
        self.panes.push(TextPane::new(x, y, shown_elements)).ok();
        let newest = self.panes.len() - 1;
        &mut self.panes[newest]
    }

    /// Block until every pane has finished.
    ///
    /// `wait_for_vblank` is called once per loop iteration and must wait for
    /// the next display refresh; it receives the manager so the frame's
    /// [`update_text`](Self::update_text) calls can run. Returns the number of
    /// refreshes waited. There is no timeout.
    pub fn wait_for_panes_to_clear<F>(
        &mut self,
        mut wait_for_vblank: F,
    ) -> u32
    where
        F: FnMut(&mut Self),
    {
        let mut ticks = 0u32;
        while !self.panes.is_empty() {
            wait_for_vblank(self);
            ticks = ticks.wrapping_add(1);
        }
        ticks
    }

    // =========================================================================
    // Frame Update
    // =========================================================================

    /// Update and draw everything for one screen.
    pub fn update_text<C: Canvas + ?Sized>(
        &mut self,
        screen: Screen,
        canvas: &mut C,
    ) {
        let fonts = &self.fonts;
        self.queues[screen.index()].retain_mut(|entry| {
            if entry.update() {
                return false;
            }
            let alpha = entry.calc_alpha();
            if alpha > 0 {
                canvas.set_poly_format(PolyFormat::translucent(alpha, TEXT_POLY_ID));
                fonts.get(entry.size()).print(canvas, entry.position(), entry.message());
            }
            true
        });

        let before = self.panes.len();
        self.panes.retain_mut(|pane| !pane.update(screen, fonts, canvas));
        let finished = before - self.panes.len();
        if finished > 0 {
            self.log.push_fmt(format_args!("{finished} pane(s) finished"));
        }
    }

    // =========================================================================
    // Clearing
    // =========================================================================

    /// Remove every non-immune entry from `screen`'s queue.
    pub fn clear_text(
        &mut self,
        screen: Screen,
    ) {
        let queue = self.queue_mut(screen);
        let before = queue.len();
        queue.retain(TextEntry::is_immune);
        let removed = before - queue.len();
        if removed > 0 {
            self.log.push_fmt(format_args!("cleared {removed} on {}", screen.name()));
        }
    }

    /// Clear both screens.
    pub fn clear_all_text(&mut self) {
        for screen in Screen::ALL {
            self.clear_text(screen);
        }
    }

    // =========================================================================
    // Enqueue
    // =========================================================================

    /// Queue `message` at pixel position (`x`, `y`) on `screen`.
    pub fn print(
        &mut self,
        screen: Screen,
        size: FontSize,
        x: i32,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        let entry = TextEntry::new(size, x, y, message);
        if self.queues[screen.index()].push(entry).is_err() {
            self.log.push_fmt(format_args!("{} queue full", screen.name()));
            return Err(TextError::QueueFull(screen));
        }
        self.previous_text_entry(screen)
    }

    /// Queue `message` horizontally centered at row `y`.
    pub fn print_centered(
        &mut self,
        screen: Screen,
        size: FontSize,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        let x = self.fonts.get(size).centered_x(message);
        self.print(screen, size, x, y, message)
    }

    pub fn print_small(
        &mut self,
        screen: Screen,
        x: i32,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        self.print(screen, FontSize::Small, x, y, message)
    }

    pub fn print_large(
        &mut self,
        screen: Screen,
        x: i32,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        self.print(screen, FontSize::Large, x, y, message)
    }

    pub fn print_small_centered(
        &mut self,
        screen: Screen,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        self.print_centered(screen, FontSize::Small, y, message)
    }

    pub fn print_large_centered(
        &mut self,
        screen: Screen,
        y: i32,
        message: &str,
    ) -> Result<&mut TextEntry, TextError> {
        self.print_centered(screen, FontSize::Large, y, message)
    }

    /// Most recently queued entry on `screen`.
    pub fn previous_text_entry(
        &mut self,
        screen: Screen,
    ) -> Result<&mut TextEntry, TextError> {
        self.queue_mut(screen).last_mut().ok_or(TextError::QueueEmpty(screen))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    #[inline]
    pub fn calc_small_font_width(
        &self,
        text: &str,
    ) -> u32 {
        self.fonts.small.calc_width(text)
    }

    #[inline]
    pub fn calc_large_font_width(
        &self,
        text: &str,
    ) -> u32 {
        self.fonts.large.calc_width(text)
    }
}

impl Default for TextManager {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::vec::Vec as StdVec;

    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::config::ALPHA_MAX;
    use crate::render::CullMode;
    use crate::render::testing::RecordingCanvas;

    fn messages(
        manager: &TextManager,
        screen: Screen,
    ) -> StdVec<&str> {
        manager.queue(screen).iter().map(TextEntry::message).collect()
    }

    // -------------------------------------------------------------------------
    // Initialization & Routing
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_manager_is_empty() {
        let manager = TextManager::new();
        assert!(manager.queue(Screen::Top).is_empty());
        assert!(manager.queue(Screen::Bottom).is_empty());
        assert!(manager.panes().is_empty());
        assert_eq!(manager.event_log().last(), Some("fonts loaded"));
    }

    #[test]
    fn test_font_routing() {
        let manager = TextManager::default();
        assert_eq!(manager.font(FontSize::Small).id(), 0);
        assert_eq!(manager.font(FontSize::Large).id(), 1);
    }

    #[test]
    fn test_queue_routing_is_independent() {
        let mut manager = TextManager::new();
        manager.print_small(Screen::Top, 0, 0, "top").unwrap();
        manager.print_small(Screen::Bottom, 0, 0, "bottom").unwrap();

        assert_eq!(messages(&manager, Screen::Top), ["top"]);
        assert_eq!(messages(&manager, Screen::Bottom), ["bottom"]);
    }

    // -------------------------------------------------------------------------
    // Pane Pool
    // -------------------------------------------------------------------------

    #[test]
    fn test_pane_pool_never_exceeds_capacity() {
        let mut manager = TextManager::new();
        for i in 0..10 {
            manager.create_text_pane(i, 0, 3);
            assert!(manager.panes().len() <= PANE_POOL_CAPACITY);
            let newest = manager.panes().last().unwrap();
            assert_eq!(newest.origin(), Point::new(i, 0));
        }
    }

    #[test]
    fn test_pane_eviction_removes_oldest_only() {
        let mut manager = TextManager::new();
        manager.create_text_pane(1, 0, 3);
        manager.create_text_pane(2, 0, 3);
        manager.create_text_pane(3, 0, 3);

        manager.create_text_pane(4, 0, 3);

        let xs: StdVec<i32> = manager.panes().iter().map(|p| p.origin().x).collect();
        assert_eq!(xs, [2, 3, 4]);
        assert_eq!(manager.event_log().last(), Some("pane evicted"));
    }

    #[test]
    fn test_eviction_ignores_pane_state() {
        let mut manager = TextManager::new();
        manager.create_text_pane(1, 0, 3).push_line("still busy").unwrap();
        manager.create_text_pane(2, 0, 3);
        manager.create_text_pane(3, 0, 3);
        manager.create_text_pane(4, 0, 3);

        assert!(manager.panes().iter().all(|p| p.origin().x != 1));
    }

    #[test]
    fn test_finished_panes_are_removed() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.create_text_pane(0, 0, 3).close();
        manager.create_text_pane(1, 0, 3).push_line("keep").unwrap();

        manager.update_text(Screen::Bottom, &mut canvas);

        assert_eq!(manager.panes().len(), 1);
        assert_eq!(manager.panes()[0].origin().x, 1);
        assert_eq!(manager.event_log().last(), Some("1 pane(s) finished"));
    }

    #[test]
    fn test_adjacent_finished_panes_are_removed_in_one_pass() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.create_text_pane(0, 0, 3).close();
        manager.create_text_pane(1, 0, 3).close();
        manager.create_text_pane(2, 0, 3).push_line("keep").unwrap();

        manager.update_text(Screen::Bottom, &mut canvas);

        assert_eq!(manager.panes().len(), 1);
        assert_eq!(manager.panes()[0].origin().x, 2);
        assert_eq!(canvas.texts(), ["keep"]);
        assert_eq!(manager.event_log().last(), Some("2 pane(s) finished"));
    }

    #[test]
    fn test_finished_panes_at_tail_are_removed() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.create_text_pane(0, 0, 3).push_line("keep").unwrap();
        manager.create_text_pane(1, 0, 3).close();
        manager.create_text_pane(2, 0, 3).close();

        manager.update_text(Screen::Bottom, &mut canvas);

        assert_eq!(manager.panes().len(), 1);
        assert_eq!(manager.panes()[0].origin().x, 0);
        assert_eq!(canvas.texts(), ["keep"]);
    }

    #[test]
    fn test_wait_for_panes_empty_pool_returns_immediately() {
        let mut manager = TextManager::new();
        let mut called = false;
        let ticks = manager.wait_for_panes_to_clear(|_| called = true);
        assert_eq!(ticks, 0);
        assert!(!called);
    }

    #[test]
    fn test_wait_for_panes_drives_frames_until_clear() {
        let mut manager = TextManager::new();
        manager.create_text_pane(0, 0, 3).push_line("bye").unwrap();
        manager.create_text_pane(0, 40, 3).on_screen(Screen::Top).push_line("bye").unwrap();

        let mut canvas = RecordingCanvas::default();
        let mut frame = 0u32;
        let ticks = manager.wait_for_panes_to_clear(|m| {
            frame += 1;
            if frame == 3 {
                for pane in m.panes_mut() {
                    pane.close();
                }
            }
            m.update_text(Screen::Top, &mut canvas);
            m.update_text(Screen::Bottom, &mut canvas);
        });

        assert!(manager.panes().is_empty());
        assert_eq!(ticks, frame);
        assert!(ticks > 3);
    }

    // -------------------------------------------------------------------------
    // Frame Update
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_keeps_order_of_live_entries() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        for name in ["one", "two", "three"] {
            manager.print_small(Screen::Top, 0, 0, name).unwrap();
        }

        manager.update_text(Screen::Top, &mut canvas);

        assert_eq!(messages(&manager, Screen::Top), ["one", "two", "three"]);
        assert_eq!(canvas.texts(), ["one", "two", "three"]);
    }

    #[test]
    fn test_update_removes_expired_and_draws_survivors_in_order() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small(Screen::Top, 10, 20, "A").unwrap();
        manager.print_small(Screen::Top, 10, 40, "B").unwrap().fade_out();
        manager.print_large(Screen::Top, 10, 60, "C").unwrap();

        manager.update_text(Screen::Top, &mut canvas);

        assert_eq!(messages(&manager, Screen::Top), ["A", "C"]);
        assert_eq!(canvas.texts(), ["A", "C"]);
        assert_eq!(canvas.calls[0].pos, Point::new(10, 20));
        assert_eq!(canvas.calls[0].atlas, 0);
        assert_eq!(canvas.calls[1].atlas, 1);
    }

    #[test]
    fn test_update_removes_adjacent_and_trailing_expired_entries() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small(Screen::Top, 0, 0, "A").unwrap().fade_out();
        manager.print_small(Screen::Top, 0, 10, "B").unwrap().fade_out();
        manager.print_small(Screen::Top, 0, 20, "C").unwrap().show();
        manager.print_small(Screen::Top, 0, 30, "D").unwrap().show();
        manager.print_small(Screen::Top, 0, 40, "E").unwrap().fade_out();

        manager.update_text(Screen::Top, &mut canvas);

        assert_eq!(messages(&manager, Screen::Top), ["C", "D"]);
        assert_eq!(canvas.texts(), ["C", "D"]);
        assert_eq!(canvas.calls[0].pos, Point::new(0, 20));
        assert_eq!(canvas.calls[1].pos, Point::new(0, 30));
    }

    #[test]
    fn test_update_removes_every_expired_entry() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        for message in ["A", "B", "C"] {
            manager.print_small(Screen::Bottom, 0, 0, message).unwrap().fade_out();
        }

        manager.update_text(Screen::Bottom, &mut canvas);

        assert!(manager.queue(Screen::Bottom).is_empty());
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_update_sets_translucent_format() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small(Screen::Bottom, 0, 0, "fmt").unwrap().show();

        manager.update_text(Screen::Bottom, &mut canvas);

        let format = canvas.calls[0].format;
        assert_eq!(format, PolyFormat::translucent(ALPHA_MAX, TEXT_POLY_ID));
        assert_eq!(format.cull, CullMode::None);
    }

    #[test]
    fn test_invisible_entries_are_updated_but_not_drawn() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small(Screen::Top, 0, 0, "later").unwrap().set_delay(2);

        manager.update_text(Screen::Top, &mut canvas);
        manager.update_text(Screen::Top, &mut canvas);
        assert!(canvas.calls.is_empty());
        assert_eq!(manager.queue(Screen::Top).len(), 1);

        manager.update_text(Screen::Top, &mut canvas);
        assert_eq!(canvas.texts(), ["later"]);
    }

    #[test]
    fn test_update_only_touches_given_screen() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small(Screen::Bottom, 0, 0, "gone").unwrap().fade_out();

        manager.update_text(Screen::Top, &mut canvas);
        assert_eq!(manager.queue(Screen::Bottom).len(), 1);

        manager.update_text(Screen::Bottom, &mut canvas);
        assert!(manager.queue(Screen::Bottom).is_empty());
    }

    #[test]
    fn test_timed_entry_leaves_queue() {
        let mut manager = TextManager::new();
        let mut canvas = RecordingCanvas::default();
        manager.print_small_centered(Screen::Top, 90, "Saved").unwrap().show().set_lifetime(5);

        for _ in 0..100 {
            manager.update_text(Screen::Top, &mut canvas);
        }
        assert!(manager.queue(Screen::Top).is_empty());
    }

    // -------------------------------------------------------------------------
    // Clearing
    // -------------------------------------------------------------------------

    #[test]
    fn test_clear_keeps_immune_entries_in_order() {
        let mut manager = TextManager::new();
        manager.print_small(Screen::Top, 0, 0, "title").unwrap().set_immune(true);
        manager.print_small(Screen::Top, 0, 0, "a").unwrap();
        manager.print_small(Screen::Top, 0, 0, "footer").unwrap().set_immune(true);
        manager.print_small(Screen::Top, 0, 0, "b").unwrap();

        manager.clear_text(Screen::Top);

        assert_eq!(messages(&manager, Screen::Top), ["title", "footer"]);
        assert_eq!(manager.event_log().last(), Some("cleared 2 on top"));
    }

    #[test]
    fn test_clear_empty_queue() {
        let mut manager = TextManager::new();
        manager.clear_text(Screen::Bottom);
        assert!(manager.queue(Screen::Bottom).is_empty());
        assert_eq!(manager.event_log().len(), 1);
    }

    #[test]
    fn test_clear_all_matches_clearing_each_screen() {
        let fill = |manager: &mut TextManager| {
            for screen in Screen::ALL {
                manager.print_small(screen, 0, 0, "x").unwrap();
                manager.print_small(screen, 0, 0, "keep").unwrap().set_immune(true);
            }
        };

        let mut all = TextManager::new();
        fill(&mut all);
        all.clear_all_text();

        let mut each = TextManager::new();
        fill(&mut each);
        each.clear_text(Screen::Top);
        each.clear_text(Screen::Bottom);

        for screen in Screen::ALL {
            assert_eq!(messages(&all, screen), messages(&each, screen));
            assert_eq!(messages(&all, screen), ["keep"]);
        }
    }

    // -------------------------------------------------------------------------
    // Enqueue & Measurement
    // -------------------------------------------------------------------------

    #[test]
    fn test_identical_prints_are_independent() {
        let mut manager = TextManager::new();
        manager.print_large(Screen::Top, 5, 5, "same").unwrap();
        manager.print_large(Screen::Top, 5, 5, "same").unwrap();
        assert_eq!(manager.queue(Screen::Top).len(), 2);
    }

    #[test]
    fn test_centered_uses_atlas_centering() {
        let mut manager = TextManager::new();
        let small_x = manager.font(FontSize::Small).centered_x("Touch to start");
        let large_x = manager.font(FontSize::Large).centered_x("Touch to start");
        let empty_x = manager.font(FontSize::Small).centered_x("");

        let pos = manager.print_small_centered(Screen::Bottom, 50, "Touch to start").unwrap().position();
        assert_eq!(pos, Point::new(small_x, 50));

        let pos = manager.print_large_centered(Screen::Bottom, 70, "Touch to start").unwrap().position();
        assert_eq!(pos, Point::new(large_x, 70));

        let pos = manager.print_small_centered(Screen::Bottom, 90, "").unwrap().position();
        assert_eq!(pos, Point::new(empty_x, 90));
    }

    #[test]
    fn test_font_width_delegates() {
        let manager = TextManager::new();
        assert_eq!(manager.calc_small_font_width("abc"), manager.fonts().small.calc_width("abc"));
        assert_eq!(manager.calc_large_font_width("abc"), manager.fonts().large.calc_width("abc"));
        assert_eq!(manager.calc_small_font_width(""), 0);
    }

    #[test]
    fn test_previous_entry() {
        let mut manager = TextManager::new();
        assert_eq!(
            manager.previous_text_entry(Screen::Top).unwrap_err(),
            TextError::QueueEmpty(Screen::Top)
        );

        manager.print_small(Screen::Top, 0, 0, "first").unwrap();
        manager.print_small(Screen::Top, 0, 0, "second").unwrap();
        let entry = manager.previous_text_entry(Screen::Top).unwrap();
        assert_eq!(entry.message(), "second");
        entry.set_immune(true);

        manager.clear_text(Screen::Top);
        assert_eq!(messages(&manager, Screen::Top), ["second"]);
    }

    #[test]
    fn test_queue_full() {
        let mut manager = TextManager::new();
        for _ in 0..TEXT_QUEUE_CAPACITY {
            manager.print_small(Screen::Top, 0, 0, "x").unwrap();
        }
        let err = manager.print_small(Screen::Top, 0, 0, "overflow").unwrap_err();
        assert_eq!(err, TextError::QueueFull(Screen::Top));
        assert_eq!(manager.queue(Screen::Top).len(), TEXT_QUEUE_CAPACITY);
        assert_eq!(manager.event_log().last(), Some("top queue full"));
    }
}
