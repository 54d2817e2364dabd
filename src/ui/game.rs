use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{hint, theme::Theme, Content};
use crate::metrics::Metrics;
use crate::session::Snapshot;

/// Column budget for the word lines
pub const WORDS_WIDTH: usize = 72;

const CURSOR: &str = "|";
const TYPING_HINT: &str = "Type the words above. [Esc] to quit. [←][→] to move.";

pub fn content(
    snapshot: &Snapshot<'_>,
    live: Option<Metrics>,
    theme: &Theme,
    width: usize,
) -> Content<'static> {
    let mut status = vec![Span::styled(
        format!("{}s", snapshot.time_remaining.as_secs()),
        theme.timer(),
    )];
    if let Some(live) = live {
        status.push(Span::styled(
            format!("  {:.0} wpm", live.words_per_minute),
            theme.typed(),
        ));
    }

    let (words, cursor_line) = word_lines(snapshot, theme, width);

    let mut lines = vec![Line::from(status), Line::default()];
    let focus = lines.len() + cursor_line;
    lines.extend(words);
    lines.push(Line::default());
    lines.push(hint(TYPING_HINT, theme));

    Content { lines, focus }
}

/// Greedy-wrap the styled words into lines no wider than `width`.
///
/// Returns the lines and the index of the line holding the current word.
pub fn word_lines(
    snapshot: &Snapshot<'_>,
    theme: &Theme,
    width: usize,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut line: Vec<Span<'static>> = Vec::new();
    let mut line_width = 0;
    let mut cursor_line = 0;

    for (idx, word) in snapshot.words.iter().enumerate() {
        let spans = word_spans(snapshot, idx, word, theme);
        let word_width: usize = spans.iter().map(|s| s.content.width()).sum();

        if !line.is_empty() && line_width + 1 + word_width > width {
            lines.push(Line::from(std::mem::take(&mut line)));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(Span::raw(" "));
            line_width += 1;
        }
        if idx == snapshot.current_index {
            cursor_line = lines.len();
        }
        line.extend(spans);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(Line::from(line));
    }

    (lines, cursor_line)
}

fn word_spans(snapshot: &Snapshot<'_>, idx: usize, word: &str, theme: &Theme) -> Vec<Span<'static>> {
    let current = snapshot.current_index;

    if idx < current {
        return word
            .chars()
            .enumerate()
            .map(|(pos, c)| {
                let style = if snapshot.mistakes.is_marked(idx, pos) {
                    theme.incorrect()
                } else {
                    theme.typed()
                };
                Span::styled(c.to_string(), style)
            })
            .collect();
    }
    if idx > current {
        return vec![Span::styled(word.to_string(), theme.upcoming())];
    }

    let input: Vec<char> = snapshot.current_input.chars().collect();
    let mut spans = Vec::with_capacity(word.len() + 1);
    for (pos, expected) in word.chars().enumerate() {
        match input.get(pos) {
            Some(&typed) if typed == expected => {
                spans.push(Span::styled(expected.to_string(), theme.typed()))
            }
            Some(_) => spans.push(Span::styled(expected.to_string(), theme.incorrect())),
            None => {
                if pos == input.len() {
                    spans.push(Span::raw(CURSOR));
                }
                spans.push(Span::styled(expected.to_string(), theme.pending()));
            }
        }
    }
    if input.len() >= word.chars().count() {
        spans.push(Span::raw(CURSOR));
    }
    spans
}
