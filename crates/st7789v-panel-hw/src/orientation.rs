//! Display orientation support.
//!
//! Each orientation maps to the controller's memory access control (MADCTL)
//! bits. The panel is wired landscape-native at 320x240; portrait variants
//! swap the axes in hardware via the MV bit.

use crate::{Error, Result, LCD_HEIGHT, LCD_WIDTH};
use std::str::FromStr;

/// Display orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Landscape mode (320x240), hardware native.
    #[default]
    Landscape,
    /// Portrait mode (240x320).
    Portrait,
    /// Landscape rotated 180°.
    LandscapeUpsideDown,
    /// Portrait rotated 180°.
    PortraitUpsideDown,
}

impl Orientation {
    /// Returns the MADCTL register value for this orientation.
    pub fn madctl(&self) -> u8 {
        match self {
            Orientation::Landscape => 0x00,
            Orientation::Portrait => 0x60,
            Orientation::LandscapeUpsideDown => 0xC0,
            Orientation::PortraitUpsideDown => 0xA0,
        }
    }

    /// Returns true if this is a portrait orientation.
    pub fn is_portrait(&self) -> bool {
        matches!(
            self,
            Orientation::Portrait | Orientation::PortraitUpsideDown
        )
    }

    /// Returns the display dimensions for this orientation.
    pub fn dimensions(&self) -> (u16, u16) {
        if self.is_portrait() {
            (LCD_HEIGHT, LCD_WIDTH)
        } else {
            (LCD_WIDTH, LCD_HEIGHT)
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            "landscape-upside-down" | "landscape_upside_down" => {
                Ok(Orientation::LandscapeUpsideDown)
            }
            "portrait-upside-down" | "portrait_upside_down" => Ok(Orientation::PortraitUpsideDown),
            _ => Err(Error::InvalidOrientation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::LandscapeUpsideDown => write!(f, "landscape-upside-down"),
            Orientation::PortraitUpsideDown => write!(f, "portrait-upside-down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_madctl() {
        assert_eq!(Orientation::Landscape.madctl(), 0x00);
        assert_eq!(Orientation::Portrait.madctl(), 0x60);
        assert_eq!(Orientation::LandscapeUpsideDown.madctl(), 0xC0);
        assert_eq!(Orientation::PortraitUpsideDown.madctl(), 0xA0);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Orientation::Landscape.dimensions(), (320, 240));
        assert_eq!(Orientation::Portrait.dimensions(), (240, 320));
        assert_eq!(Orientation::LandscapeUpsideDown.dimensions(), (320, 240));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "landscape".parse::<Orientation>().unwrap(),
            Orientation::Landscape
        );
        assert_eq!(
            "portrait".parse::<Orientation>().unwrap(),
            Orientation::Portrait
        );
        assert_eq!(
            "portrait-upside-down".parse::<Orientation>().unwrap(),
            Orientation::PortraitUpsideDown
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
