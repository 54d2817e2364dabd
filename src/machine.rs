use std::time::Duration;

use itertools::Itertools;
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::metrics::Metrics;
use crate::session::{Adjust, Phase, Session, Snapshot, TimeLimit};
use crate::words::{CorpusWords, WordSource, DEFAULT_WORD_COUNT};

/// Cadence of the countdown while a session is active
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Everything the presentation layer can ask of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    StartSession,
    OpenSettings,
    /// Nudge the time limit while in settings
    AdjustTimeLimit(Adjust),
    ExitToWelcome,
    CharacterTyped(char),
    Backspace,
    NavigateWord(Direction),
    SubmitWord,
    TimerTick,
    Cancel,
}

/// Follow-up work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver one `TimerTick` after the given delay
    Tick(Duration),
    Quit,
}

/// The typing-session state machine.
///
/// Owns the single [`Session`] and mutates it only through [`Game::apply`].
/// Every (phase, event) pair is handled: events that do not apply to the
/// current phase leave the session untouched and return no command.
#[derive(Debug)]
pub struct Game<W: WordSource = CorpusWords, C: Clock = SystemClock> {
    session: Session,
    words: W,
    clock: C,
    word_count: usize,
}

impl Game {
    pub fn new(time_limit: TimeLimit, word_count: usize) -> Self {
        Self::with_parts(CorpusWords, SystemClock, time_limit, word_count)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(TimeLimit::default(), DEFAULT_WORD_COUNT)
    }
}

impl<W: WordSource, C: Clock> Game<W, C> {
    pub fn with_parts(words: W, clock: C, time_limit: TimeLimit, word_count: usize) -> Self {
        let session = Session::new(time_limit, words.words(word_count));
        Self {
            session,
            words,
            clock,
            word_count,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Minutes since the session went active, by the game's clock
    pub fn elapsed_minutes(&self) -> Option<f64> {
        self.session.started_at().map(|start| {
            self.clock
                .now()
                .saturating_duration_since(start)
                .as_secs_f64()
                / 60.0
        })
    }

    /// Running metrics for the in-progress display
    pub fn live_metrics(&self) -> Option<Metrics> {
        self.elapsed_minutes()
            .map(|elapsed| Metrics::with_elapsed(&self.session, elapsed))
    }

    pub fn apply(&mut self, event: Event) -> Option<Command> {
        if event == Event::Cancel {
            info!(phase = %self.session.phase, "cancelled");
            return Some(Command::Quit);
        }

        match (self.session.phase, event) {
            (Phase::Welcome, Event::StartSession) => self.start(),
            (Phase::Welcome, Event::OpenSettings) => {
                self.session.phase = Phase::Settings;
                None
            }
            (Phase::Settings, Event::AdjustTimeLimit(direction)) => {
                self.session.time_limit = self.session.time_limit.adjust(direction);
                debug!(
                    time_limit = self.session.time_limit.as_secs(),
                    "time limit adjusted"
                );
                None
            }
            (Phase::Settings | Phase::Active, Event::ExitToWelcome) => {
                self.reset();
                None
            }
            (Phase::Active, _) if self.session.is_time_exhausted() => self.ignore(event),
            (Phase::Active, Event::CharacterTyped(' ') | Event::SubmitWord) => {
                self.submit_word();
                None
            }
            (Phase::Active, Event::CharacterTyped(c)) => {
                self.type_char(c);
                None
            }
            (Phase::Active, Event::Backspace) => {
                self.backspace();
                None
            }
            (Phase::Active, Event::NavigateWord(direction)) => {
                self.navigate(direction);
                None
            }
            (Phase::Active, Event::TimerTick) => self.tick(),
            (Phase::Finished, Event::StartSession) => {
                self.reset();
                None
            }
            _ => self.ignore(event),
        }
    }

    fn ignore(&self, event: Event) -> Option<Command> {
        trace!(phase = %self.session.phase, ?event, "ignored");
        None
    }

    fn reset(&mut self) {
        let words = self.words.words(self.word_count);
        self.session.reset(words);
        info!("session reset");
    }

    fn start(&mut self) -> Option<Command> {
        self.reset();
        self.session.started_at = Some(self.clock.now());
        self.session.phase = Phase::Active;
        info!(
            time_limit = self.session.time_limit.as_secs(),
            words = self.session.target_words.len(),
            "session started"
        );
        debug!(
            first = %self.session.target_words.iter().take(5).join(" "),
            "words drawn"
        );
        Some(Command::Tick(TICK_INTERVAL))
    }

    fn type_char(&mut self, c: char) {
        let session = &mut self.session;
        let Some(target) = session.target_words.get(session.current_index) else {
            return;
        };
        let pos = session.current_input.chars().count();
        let Some(expected) = target.chars().nth(pos) else {
            return;
        };
        session.current_input.push(c);

        let word = session.current_index;
        if c != expected {
            if session.mistakes.mark(word, pos) {
                session.mistake_count += 1;
            }
        } else {
            // a corrected slot leaves the display set but stays counted
            session.mistakes.unmark(word, pos);
        }
    }

    fn backspace(&mut self) {
        let session = &mut self.session;
        if session.current_input.pop().is_some() {
            return;
        }
        if session.current_index == 0 {
            return;
        }
        session.current_index -= 1;
        let word = session.current_index;
        session.prior_inputs.remove(&word);
        session.mistakes.clear_word(word);
        session.current_input = String::new();
    }

    fn navigate(&mut self, direction: Direction) {
        let session = &mut self.session;
        let target = match direction {
            Direction::Prev => session.current_index.checked_sub(1),
            Direction::Next => Some(session.current_index + 1)
                .filter(|&next| next < session.target_words.len()),
        };
        if let Some(index) = target {
            session.current_index = index;
            session.current_input = session.prior_inputs.get(&index).cloned().unwrap_or_default();
        }
    }

    fn submit_word(&mut self) {
        let session = &mut self.session;
        let word = session.current_index;
        let Some(target) = session.target_words.get(word) else {
            return;
        };

        session
            .prior_inputs
            .insert(word, session.current_input.clone());

        if session.current_input == *target {
            session.mistakes.clear_word(word);
        } else {
            let mut typed = session.current_input.chars();
            for (pos, expected) in target.chars().enumerate() {
                // positions past the end of the input count as wrong too
                if typed.next() != Some(expected) {
                    session.mistakes.mark(word, pos);
                    session.mistake_count += 1;
                }
            }
        }
        debug!(
            word,
            mistakes = session.mistakes.marked_in(word),
            total = session.mistake_count,
            "word submitted"
        );

        session.current_index += 1;
        session.current_input = session
            .prior_inputs
            .get(&session.current_index)
            .cloned()
            .unwrap_or_default();
    }

    fn tick(&mut self) -> Option<Command> {
        let session = &mut self.session;
        session.time_remaining = session.time_remaining.saturating_sub(TICK_INTERVAL);
        if !session.time_remaining.is_zero() {
            return Some(Command::Tick(TICK_INTERVAL));
        }

        if session.final_elapsed_minutes.is_none() {
            let elapsed = session
                .started_at
                .map(|start| self.clock.now().saturating_duration_since(start))
                .unwrap_or_default();
            session.final_elapsed_minutes = Some(elapsed.as_secs_f64() / 60.0);
        }
        session.phase = Phase::Finished;

        let metrics = Metrics::calculate(session);
        info!(
            wpm = metrics.words_per_minute,
            mistakes = metrics.mistake_count,
            words = metrics.words_completed,
            "session finished"
        );
        None
    }
}
