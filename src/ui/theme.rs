use ratatui::style::Color;

/// Display palette: the four roles the renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub pivot: Color,
    pub dimmed: Color,
}

/// Default scheme: dark slate background, warm off-white text, amber pivot.
pub const DUSK: Palette = Palette {
    background: Color::Rgb(22, 24, 28),
    text: Color::Rgb(208, 204, 192),
    pivot: Color::Rgb(232, 166, 74),
    dimmed: Color::Rgb(108, 114, 128),
};

impl Palette {
    /// The palette the UI currently draws with.
    pub fn active() -> Self {
        DUSK
    }
}

impl Default for Palette {
    fn default() -> Self {
        DUSK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_palette_is_dusk() {
        assert_eq!(Palette::active(), DUSK);
        assert_eq!(Palette::default(), DUSK);
    }

    #[test]
    fn test_pivot_color_stands_out_from_text() {
        let palette = Palette::active();
        assert_ne!(palette.pivot, palette.text);
        assert_ne!(palette.pivot, palette.dimmed);
    }
}
