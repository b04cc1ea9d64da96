//! Light/dark presentation theme.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors used when painting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub confirm: Color,
    pub error: Color,
    pub glow: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb { r: 15, g: 23, b: 42 },
    fg: Color::Rgb { r: 226, g: 232, b: 240 },
    muted: Color::Rgb { r: 100, g: 116, b: 139 },
    accent: Color::Rgb { r: 45, g: 212, b: 191 },
    confirm: Color::Rgb { r: 74, g: 222, b: 128 },
    error: Color::Rgb { r: 248, g: 113, b: 113 },
    glow: Color::Rgb { r: 20, g: 83, b: 92 },
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb { r: 248, g: 250, b: 252 },
    fg: Color::Rgb { r: 15, g: 23, b: 42 },
    muted: Color::Rgb { r: 100, g: 116, b: 139 },
    accent: Color::Rgb { r: 13, g: 148, b: 136 },
    confirm: Color::Rgb { r: 22, g: 163, b: 74 },
    error: Color::Rgb { r: 220, g: 38, b: 38 },
    glow: Color::Rgb { r: 204, g: 251, b: 241 },
};

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::from_name("Light"), Some(Theme::Light));
        assert_eq!(Theme::from_name(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::from_name("neon"), None);
        assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette().bg, Theme::Light.palette().bg);
    }
}
