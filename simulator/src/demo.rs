//! Scripted demo content driven by key presses.

use core::fmt::Write;

use dualscreen_text::config::{PANE_POOL_CAPACITY, SCREEN_HEIGHT};
use dualscreen_text::log::{LOG_BUFFER_SIZE, LOG_LINE_LENGTH};
use dualscreen_text::{FontSize, Screen, TextError, TextManager};
use heapless::{String, Vec};

use crate::timing::{LOG_LIFETIME, PANE_LIFETIME, TOAST_LIFETIME};

const TOAST_MESSAGES: [&str; 4] = ["Hello!", "Saved", "Level up", "New message"];

const PANE_LINES: [&str; 6] = [
    "Inventory",
    "- potion x3",
    "- rope",
    "- lantern",
    "- map of the caves",
    "- 120 gold",
];

/// Title and key help. Both lines are immune, so clears keep them.
pub fn show_title(text: &mut TextManager) -> Result<(), TextError> {
    text.print_large_centered(Screen::Top, 6, "DUAL SCREEN TEXT")?
        .set_immune(true)
        .slide_from(0, -24);
    text.print_small_centered(Screen::Bottom, SCREEN_HEIGHT as i32 - 14, "A:toast P:pane C:clear L:log")?
        .set_immune(true);
    Ok(())
}

/// Centered message on the top screen that slides up and fades away.
pub fn show_toast(
    text: &mut TextManager,
    count: u32,
) -> Result<(), TextError> {
    let message = TOAST_MESSAGES[count as usize % TOAST_MESSAGES.len()];
    text.print_large_centered(Screen::Top, 80, message)?
        .slide_from(0, 30)
        .set_lifetime(TOAST_LIFETIME);
    Ok(())
}

/// Open a scrolling pane on the bottom screen.
///
/// Panes are placed in columns by creation count, so the fourth one reuses
/// the first column after the oldest pane has been evicted.
pub fn open_pane(
    text: &mut TextManager,
    count: u32,
) -> Result<(), TextError> {
    let column = count as i32 % PANE_POOL_CAPACITY as i32;
    let pane = text.create_text_pane(8 + column * 84, 24, 4);
    pane.set_lifetime(PANE_LIFETIME);

    let mut header: String<16> = String::new();
    write!(header, "Pane {count}").ok();
    pane.push_line(&header)?;
    for line in PANE_LINES {
        pane.push_line(line)?;
    }
    Ok(())
}

/// Dump the event log onto the top screen, staggering each line.
pub fn show_event_log(text: &mut TextManager) -> Result<(), TextError> {
    // Copy first: printing needs the manager mutably
    let mut lines: Vec<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE> = Vec::new();
    for line in text.event_log().iter() {
        let mut copy: String<LOG_LINE_LENGTH> = String::new();
        copy.push_str(line).ok();
        lines.push(copy).ok();
    }

    text.clear_text(Screen::Top);
    let line_height = text.font(FontSize::Small).line_height() as i32;
    for (i, line) in lines.iter().enumerate() {
        text.print_small(Screen::Top, 8, 40 + i as i32 * line_height, line)?
            .set_delay(i as u16 * 4)
            .slide_from(-16, 0)
            .set_lifetime(LOG_LIFETIME);
    }
    Ok(())
}
