pub mod game;
pub mod results;
pub mod settings;
pub mod theme;
pub mod welcome;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

use crate::{app::App, clock::Clock, session::Phase, words::WordSource};
use theme::Theme;

const WINDOW_WIDTH: u16 = 100;
const WINDOW_PADDING_X: u16 = 4;
const WINDOW_PADDING_Y: u16 = 2;

/// Laid-out lines for one screen, plus the line that must stay visible when
/// the window is too short to show everything.
#[derive(Debug, Default)]
pub struct Content<'a> {
    pub lines: Vec<Line<'a>>,
    pub focus: usize,
}

impl<'a> Content<'a> {
    pub fn new(lines: Vec<Line<'a>>) -> Self {
        Self { lines, focus: 0 }
    }
}

impl<W: WordSource, C: Clock> Widget for &App<W, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let content = match self.phase() {
            Phase::Welcome => welcome::content(self.welcome(), theme),
            Phase::Settings => settings::content(&self.game().snapshot(), theme),
            Phase::Active => game::content(
                &self.game().snapshot(),
                self.game().live_metrics(),
                theme,
                game::WORDS_WIDTH,
            ),
            Phase::Finished => results::content(&self.game().snapshot(), theme),
        };
        render_window(content, theme, area, buf);
    }
}

/// Draw `content` centred in a rounded window sized to fit it
pub fn render_window(content: Content<'_>, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let height = content.lines.len() as u16 + (WINDOW_PADDING_Y + 1) * 2;
    let window = centered(area, WINDOW_WIDTH, height);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.window())
        .padding(Padding::symmetric(WINDOW_PADDING_X, WINDOW_PADDING_Y));
    let inner = block.inner(window);

    let offset = scroll_offset(content.lines.len(), content.focus, inner.height as usize);

    Clear.render(window, buf);
    block.render(window, buf);
    Paragraph::new(content.lines)
        .alignment(Alignment::Center)
        .scroll((offset as u16, 0))
        .render(inner, buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// First line to show so that `focus` sits roughly mid-window
fn scroll_offset(total: usize, focus: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(total - visible)
}

/// Inverted label, padded like a button
pub fn button<'a>(label: &str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(format!("  {label}  "), theme.button()))
}

pub fn hint<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(text, theme.hint()))
}
