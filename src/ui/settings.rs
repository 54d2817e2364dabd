use ratatui::text::Line;

use super::{hint, theme::Theme, Content};
use crate::session::Snapshot;

pub fn content(snapshot: &Snapshot<'_>, theme: &Theme) -> Content<'static> {
    Content::new(vec![
        Line::styled("Settings", theme.title()),
        Line::default(),
        Line::styled(
            format!("Time Limit: {} seconds", snapshot.time_limit.as_secs()),
            theme.hint(),
        ),
        hint("Use [↑][↓] to adjust, [Esc] to return", theme),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, TimeLimit};

    #[test]
    fn shows_current_limit() {
        let session = Session::new(TimeLimit::new(45).unwrap(), vec![]);
        let content = content(&session.snapshot(), &Theme::default());
        assert_eq!(content.lines[2].to_string(), "Time Limit: 45 seconds");
    }
}
