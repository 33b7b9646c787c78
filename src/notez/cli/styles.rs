//! Palettes for the interactive mode.
//!
//! Screens ask for a [`Palette`] by [`Theme`] and style text through its named
//! fields, never through raw colors. Light and dark define the same fields, so
//! toggling the theme swaps the whole palette at once. Both are built once
//! through `once_cell::sync::Lazy`.

use console::Style;
use notez::config::Theme;
use once_cell::sync::Lazy;

pub struct Palette {
    pub regular: Style,
    pub muted: Style,
    pub faint: Style,
    pub title: Style,
    pub highlight: Style,
    pub accent: Style,
    pub index: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub clock: Style,
    pub focus_phase: Style,
    pub break_phase: Style,
}

/// Nearest color in the 6x6x6 cube of the 256-color palette.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let level = |c: u8| -> u8 {
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    };
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    Palette {
        title: regular.clone().bold(),
        regular,
        faint: Style::new().color256(rgb_to_ansi256((173, 173, 173))),
        highlight: Style::new()
            .black()
            .on_color256(rgb_to_ansi256((255, 235, 59))),
        accent: Style::new().color256(rgb_to_ansi256((0, 95, 175))).bold(),
        index: Style::new().color256(rgb_to_ansi256((196, 140, 0))),
        success: Style::new().green(),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
        clock: Style::new().black().bold(),
        focus_phase: Style::new().color256(rgb_to_ansi256((186, 33, 45))).bold(),
        break_phase: Style::new().color256(rgb_to_ansi256((0, 128, 0))).bold(),
        muted,
    }
});

static DARK: Lazy<Palette> = Lazy::new(|| {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((180, 180, 180)));
    Palette {
        title: regular.clone().bold(),
        regular,
        faint: Style::new().color256(rgb_to_ansi256((110, 110, 110))),
        highlight: Style::new()
            .black()
            .on_color256(rgb_to_ansi256((229, 185, 0))),
        accent: Style::new().color256(rgb_to_ansi256((95, 175, 255))).bold(),
        index: Style::new().color256(rgb_to_ansi256((255, 214, 10))),
        success: Style::new().green(),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
        clock: Style::new().white().bold(),
        focus_phase: Style::new().color256(rgb_to_ansi256((255, 138, 128))).bold(),
        break_phase: Style::new().color256(rgb_to_ansi256((144, 238, 144))).bold(),
        muted,
    }
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &*LIGHT,
        Theme::Dark => &*DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_corners() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
