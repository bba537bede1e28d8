//! Failure cases for text operations.

use core::fmt;

use crate::screen::Screen;

/// Errors returned by the text manager and panes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// The screen's text queue has no room for another entry.
    QueueFull(Screen),
    /// The screen's text queue has no entries to return.
    QueueEmpty(Screen),
    /// The pane already holds its maximum number of lines.
    PaneFull,
}

impl fmt::Display for TextError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::QueueFull(screen) => write!(f, "{} text queue is full", screen.name()),
            Self::QueueEmpty(screen) => write!(f, "{} text queue is empty", screen.name()),
            Self::PaneFull => f.write_str("text pane is full"),
        }
    }
}

impl core::error::Error for TextError {}
