//! Timing constants for the simulator.
//!
//! `FRAME_TIME` uses `std::time::Duration`, which the `no_std` library cannot,
//! so it lives here. Lifetimes are in frames, like everything in the library.

use std::time::Duration;

/// One display refresh (~60 Hz). Stands in for the vertical blank wait.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// How long a toast message stays fully visible.
pub const TOAST_LIFETIME: u16 = 90;

/// How long a pane stays open after its last line scrolls into view.
pub const PANE_LIFETIME: u16 = 180;

/// How long event log lines stay on the top screen.
pub const LOG_LIFETIME: u16 = 240;
