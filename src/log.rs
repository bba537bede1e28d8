//! Event log for the text manager.
//!
//! Provides a ring buffer of short messages describing structural changes
//! (fonts loaded, panes evicted, queues cleared). The simulator renders it on
//! the top screen; with the `defmt` feature every line is also forwarded
//! to `defmt::debug!`.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("fonts loaded");
//! log.push_fmt(format_args!("cleared {} entries", 3));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Log Configuration
// =============================================================================

/// Maximum number of log lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 40;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of event messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages; the oldest is dropped when full.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message, dropping the oldest one if the buffer is full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        #[cfg(feature = "defmt")]
        defmt::debug!("{=str}", msg);

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Format and push a message. Output past the line length is dropped.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        line.write_fmt(args).ok();
        self.push(&line);
    }

    /// Iterate over messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}
