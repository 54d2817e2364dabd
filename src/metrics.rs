use crate::session::Session;

/// Elapsed time never drops below this when dividing, so a session that ends
/// instantly still yields a finite wpm.
pub const MIN_ELAPSED_MINUTES: f64 = 0.01;

/// Used when no final elapsed time was captured for the session
pub const FALLBACK_ELAPSED_MINUTES: f64 = 0.5;

/// Characters per "word" in the wpm formula
pub const CHARS_PER_WORD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub correct_characters: usize,
    pub words_completed: usize,
    pub words_per_minute: f64,
    pub mistake_count: u32,
}

impl Metrics {
    /// Results for a finished session, timed by its captured elapsed minutes
    pub fn calculate(session: &Session) -> Self {
        let elapsed = session
            .final_elapsed_minutes()
            .unwrap_or(FALLBACK_ELAPSED_MINUTES);
        Self::with_elapsed(session, elapsed)
    }

    /// Results against an explicit elapsed time, e.g. a running clock
    pub fn with_elapsed(session: &Session, elapsed_minutes: f64) -> Self {
        let correct_characters = correct_characters(session);
        Self {
            correct_characters,
            words_completed: session.current_index(),
            words_per_minute: words_per_minute(correct_characters, elapsed_minutes),
            mistake_count: session.mistake_count(),
        }
    }
}

/// Characters of every word before the current index that are not marked
/// incorrect. Words never reached contribute nothing.
pub fn correct_characters(session: &Session) -> usize {
    session
        .target_words()
        .iter()
        .enumerate()
        .take(session.current_index())
        .map(|(idx, word)| {
            word.chars()
                .count()
                .saturating_sub(session.mistakes().marked_in(idx))
        })
        .sum()
}

pub fn words_per_minute(correct_characters: usize, elapsed_minutes: f64) -> f64 {
    // f64::max discards NaN, so a degenerate elapsed value also hits the floor
    let elapsed = elapsed_minutes.max(MIN_ELAPSED_MINUTES);
    correct_characters as f64 / CHARS_PER_WORD / elapsed
}
