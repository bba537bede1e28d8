//! Routing keys for the two screens and the two font sizes.
//!
//! # Screens
//!
//! - [`Screen::Top`]: upper display
//! - [`Screen::Bottom`]: lower (touch) display
//!
//! # Font Sizes
//!
//! - [`FontSize::Small`]: atlas id 0
//! - [`FontSize::Large`]: atlas id 1

/// One of the two physical displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Upper display.
    Top,
    /// Lower display.
    Bottom,
}

impl Screen {
    /// Both screens, top first.
    pub const ALL: [Self; 2] = [Self::Top, Self::Bottom];

    /// Storage index for per-screen arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }

    /// Short name for log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Which of the two font atlases a piece of text uses.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    #[default]
    Small,
    Large,
}

impl FontSize {
    /// Atlas id assigned at load time.
    #[inline]
    pub const fn atlas_id(self) -> u8 {
        match self {
            Self::Small => 0,
            Self::Large => 1,
        }
    }
}
