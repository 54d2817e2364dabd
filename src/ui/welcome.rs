use ratatui::text::{Line, Span};

use super::{button, hint, theme::Theme, Content};
use crate::welcome::{Cell, WelcomeBar};

const TITLE: [&str; 8] = [
    r" _________  ___  ___  ___  _________    ___    ___ ________  _______      ",
    r"|\___   ___\\  \|\  \|\  \|\___   ___\ |\  \  /  /|\   __  \|\  ___ \     ",
    r"\|___ \  \_\ \  \\\  \ \  \|___ \  \_| \ \  \/  / | \  \|\  \ \   __/|    ",
    r"     \ \  \ \ \  \\\  \ \  \   \ \  \   \ \    / / \ \   ____\ \  \_|/__  ",
    r"      \ \  \ \ \  \\\  \ \  \   \ \  \   \/  /  /   \ \  \___|\ \  \_|\ \ ",
    r"       \ \__\ \ \_______\ \__\   \ \__\__/  / /      \ \__\    \ \_______\",
    r"        \|__|  \|_______|\|__|    \|__|\___/ /        \|__|     \|_______|",
    r"                                      \|___|/                             ",
];

pub const START_HINT: &str = "Press [Enter] or [Space] to start, [S] for settings";

pub fn content(bar: &WelcomeBar, theme: &Theme) -> Content<'static> {
    let mut lines: Vec<Line<'static>> = TITLE
        .iter()
        .map(|row| Line::styled(*row, theme.title()))
        .collect();
    lines.push(Line::default());
    lines.push(bar_line(bar, theme));
    lines.push(Line::default());
    lines.push(hint(START_HINT, theme));
    lines.push(Line::default());
    lines.push(button("Start", theme));
    Content::new(lines)
}

fn bar_line(bar: &WelcomeBar, theme: &Theme) -> Line<'static> {
    bar.cells()
        .map(|cell| match cell {
            Cell::Head => Span::styled("█", theme.bar_head()),
            Cell::Letter(c) => Span::styled(c.to_string(), theme.bar_letter()),
            Cell::Blank => Span::raw(" "),
        })
        .collect()
}
