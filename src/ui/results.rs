use ratatui::text::Line;

use super::{button, theme::Theme, Content};
use crate::metrics::Metrics;
use crate::session::Snapshot;

pub fn content(snapshot: &Snapshot<'_>, theme: &Theme) -> Content<'static> {
    let metrics = snapshot.metrics.unwrap_or(Metrics {
        correct_characters: 0,
        words_completed: snapshot.current_index,
        words_per_minute: 0.0,
        mistake_count: snapshot.mistake_count,
    });

    Content::new(vec![
        Line::styled("Game Over!", theme.title()),
        Line::default(),
        Line::styled(
            format!("Words completed: {}", metrics.words_completed),
            theme.hint(),
        ),
        Line::styled(format!("WPM: {:.1}", metrics.words_per_minute), theme.wpm()),
        Line::styled(format!("Mistakes: {}", metrics.mistake_count), theme.mistakes()),
        Line::default(),
        button("Play Again (Enter)", theme),
    ])
}
