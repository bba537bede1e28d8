//! Desktop simulator for the dual-screen text overlays.
//!
//! Both screens are stacked in one `embedded-graphics-simulator` window,
//! top screen above the bottom one with a small gap, and the text manager is
//! driven at the handheld's refresh rate.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | A | Toast message on the top screen |
//! | P | New scrolling pane on the bottom screen (4th evicts the oldest) |
//! | C | Clear both screens (title and help survive) |
//! | L | Show the event log on the top screen |
//! | Esc | Close all panes, wait for them to fade, quit |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod demo;
mod timing;

use std::thread;
use std::time::Instant;

use dualscreen_text::colors::{BLACK, PALE_YELLOW, SLATE, WHITE};
use dualscreen_text::config::{SCREEN_GAP, SCREEN_HEIGHT, SCREEN_WIDTH};
use dualscreen_text::{BlendCanvas, Screen, TextManager};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::timing::FRAME_TIME;

const TOP_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

const BOTTOM_AREA: Rectangle = Rectangle::new(
    Point::new(0, (SCREEN_HEIGHT + SCREEN_GAP) as i32),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT * 2 + SCREEN_GAP));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Dual Screen Text Sim", &output_settings);

    let mut text = TextManager::new();
    if let Err(err) = demo::show_title(&mut text) {
        eprintln!("title: {err}");
    }

    display.clear(BLACK).ok();
    window.update(&display);

    let mut toast_count = 0u32;
    let mut pane_count = 0u32;

    loop {
        let frame_start = Instant::now();
        let mut quit_requested = false;

        for ev in window.events() {
            let result = match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } if !repeat => match keycode {
                    Keycode::A => {
                        toast_count = toast_count.wrapping_add(1);
                        demo::show_toast(&mut text, toast_count)
                    }
                    Keycode::P => {
                        pane_count = pane_count.wrapping_add(1);
                        demo::open_pane(&mut text, pane_count)
                    }
                    Keycode::C => {
                        text.clear_all_text();
                        Ok(())
                    }
                    Keycode::L => demo::show_event_log(&mut text),
                    Keycode::Escape => {
                        quit_requested = true;
                        Ok(())
                    }
                    _ => Ok(()),
                },
                _ => Ok(()),
            };
            if let Err(err) = result {
                eprintln!("{err}");
            }
        }

        if quit_requested {
            shutdown(&mut display, &mut window, &mut text);
            return;
        }

        render_frame(&mut display, &mut text);
        window.update(&display);

        // Stand-in for the vertical blank wait
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Run one frame of text updates for both screens.
fn render_frame(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &mut TextManager,
) {
    display.clear(BLACK).ok();

    {
        let mut top = display.cropped(&TOP_AREA);
        let mut canvas = BlendCanvas::new(&mut top, PALE_YELLOW, BLACK);
        text.update_text(Screen::Top, &mut canvas);
    }

    let mut bottom = display.cropped(&BOTTOM_AREA);
    bottom.clear(SLATE).ok();
    let mut canvas = BlendCanvas::new(&mut bottom, WHITE, SLATE);
    text.update_text(Screen::Bottom, &mut canvas);
}

/// Fade out every pane and keep rendering until the pool drains.
fn shutdown(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    text: &mut TextManager,
) {
    for pane in text.panes_mut() {
        pane.close();
    }
    let frames = text.wait_for_panes_to_clear(|text| {
        render_frame(display, text);
        window.update(display);
        thread::sleep(FRAME_TIME);
    });
    println!("panes cleared after {frames} frames");
}
