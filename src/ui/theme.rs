use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha, the only palette the app ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub text: Color,
    pub subtext0: Color,
    pub subtext1: Color,
    pub overlay0: Color,
    pub overlay1: Color,
    pub overlay2: Color,
    pub blue: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub mauve: Color,
    pub pink: Color,
    pub flamingo: Color,
    pub rosewater: Color,
}

pub const MOCHA: Palette = Palette {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    surface0: Color::Rgb(0x31, 0x32, 0x44),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    subtext1: Color::Rgb(0xba, 0xc2, 0xde),
    overlay0: Color::Rgb(0x6c, 0x70, 0x86),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    blue: Color::Rgb(0x89, 0xb4, 0xfa),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    pink: Color::Rgb(0xf5, 0xc2, 0xe7),
    flamingo: Color::Rgb(0xf2, 0xcd, 0xcd),
    rosewater: Color::Rgb(0xf5, 0xe0, 0xdc),
};

/// Named styles used by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self { palette: MOCHA }
    }
}

impl Theme {
    pub fn window(&self) -> Style {
        Style::default().bg(self.palette.base).fg(self.palette.text)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.surface2)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.palette.base)
            .bg(self.palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.palette.subtext0)
    }

    pub fn pending(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn typed(&self) -> Style {
        Style::default().fg(self.palette.overlay0)
    }

    pub fn incorrect(&self) -> Style {
        Style::default().fg(self.palette.red)
    }

    pub fn upcoming(&self) -> Style {
        Style::default().fg(self.palette.overlay1)
    }

    pub fn timer(&self) -> Style {
        Style::default().fg(self.palette.yellow)
    }

    pub fn bar_head(&self) -> Style {
        Style::default().fg(self.palette.yellow)
    }

    pub fn bar_letter(&self) -> Style {
        Style::default().fg(self.palette.mauve)
    }

    pub fn wpm(&self) -> Style {
        Style::default()
            .fg(self.palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn mistakes(&self) -> Style {
        Style::default().fg(self.palette.red)
    }
}
