use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::metrics::Metrics;

/// Top-level mode of a session, gates which events are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Phase {
    #[default]
    Welcome,
    Settings,
    Active,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Increase,
    Decrease,
}

/// Length of a timed test, always within [`MIN_SECS`, `MAX_SECS`] and a
/// multiple of `STEP_SECS`
///
/// [`MIN_SECS`]: TimeLimit::MIN_SECS
/// [`MAX_SECS`]: TimeLimit::MAX_SECS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeLimit(u64);

impl TimeLimit {
    pub const MIN_SECS: u64 = 10;
    pub const MAX_SECS: u64 = 300;
    pub const STEP_SECS: u64 = 5;
    pub const DEFAULT_SECS: u64 = 30;

    pub fn new(secs: u64) -> Result<Self, Error> {
        if (Self::MIN_SECS..=Self::MAX_SECS).contains(&secs) && secs % Self::STEP_SECS == 0 {
            Ok(Self(secs))
        } else {
            Err(Error::InvalidTimeLimit(secs))
        }
    }

    /// Coerce any value into range, rounding down to the nearest step.
    pub fn clamped(secs: u64) -> Self {
        let secs = secs.clamp(Self::MIN_SECS, Self::MAX_SECS);
        Self(secs - secs % Self::STEP_SECS)
    }

    pub fn adjust(self, direction: Adjust) -> Self {
        match direction {
            Adjust::Increase => Self::clamped(self.0.saturating_add(Self::STEP_SECS)),
            Adjust::Decrease => Self::clamped(self.0.saturating_sub(Self::STEP_SECS)),
        }
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self(Self::DEFAULT_SECS)
    }
}

impl FromStr for TimeLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s
            .trim()
            .trim_end_matches('s')
            .parse::<u64>()
            .map_err(|e| format!("{s:?} is not a number of seconds: {e}"))?;
        Self::new(secs).map_err(|e| e.to_string())
    }
}

/// Incorrect character positions, keyed by word index.
///
/// Sparse on purpose: only words with at least one marked position have an
/// entry, and an entry is dropped as soon as its last position is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistakeMap {
    by_word: BTreeMap<usize, BTreeSet<usize>>,
}

impl MistakeMap {
    pub fn is_marked(&self, word: usize, position: usize) -> bool {
        self.by_word
            .get(&word)
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Returns true when the position was not marked before.
    pub fn mark(&mut self, word: usize, position: usize) -> bool {
        self.by_word.entry(word).or_default().insert(position)
    }

    pub fn unmark(&mut self, word: usize, position: usize) -> bool {
        let Some(positions) = self.by_word.get_mut(&word) else {
            return false;
        };
        let removed = positions.remove(&position);
        if positions.is_empty() {
            self.by_word.remove(&word);
        }
        removed
    }

    pub fn clear_word(&mut self, word: usize) {
        self.by_word.remove(&word);
    }

    pub fn positions(&self, word: usize) -> impl Iterator<Item = usize> + '_ {
        self.by_word.get(&word).into_iter().flatten().copied()
    }

    pub fn marked_in(&self, word: usize) -> usize {
        self.by_word.get(&word).map_or(0, BTreeSet::len)
    }

    pub fn words(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_word.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

/// All mutable state of one typing test.
///
/// Fields are only written by [`crate::machine::Game::apply`]; everything
/// else reads through the accessors or a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) phase: Phase,
    pub(crate) target_words: Vec<String>,
    pub(crate) current_index: usize,
    pub(crate) current_input: String,
    pub(crate) prior_inputs: HashMap<usize, String>,
    pub(crate) mistakes: MistakeMap,
    pub(crate) mistake_count: u32,
    pub(crate) started_at: Option<Instant>,
    pub(crate) time_limit: TimeLimit,
    pub(crate) time_remaining: Duration,
    pub(crate) final_elapsed_minutes: Option<f64>,
}

impl Session {
    pub fn new(time_limit: TimeLimit, target_words: Vec<String>) -> Self {
        Self {
            phase: Phase::Welcome,
            target_words,
            current_index: 0,
            current_input: String::new(),
            prior_inputs: HashMap::new(),
            mistakes: MistakeMap::default(),
            mistake_count: 0,
            started_at: None,
            time_limit,
            time_remaining: time_limit.as_duration(),
            final_elapsed_minutes: None,
        }
    }

    /// Back to a fresh Welcome state with new words; only the time limit
    /// survives.
    pub(crate) fn reset(&mut self, target_words: Vec<String>) {
        *self = Self::new(self.time_limit, target_words);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn current_word(&self) -> Option<&str> {
        self.target_words
            .get(self.current_index)
            .map(String::as_str)
    }

    pub fn prior_input(&self, word: usize) -> Option<&str> {
        self.prior_inputs.get(&word).map(String::as_str)
    }

    pub fn mistakes(&self) -> &MistakeMap {
        &self.mistakes
    }

    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }

    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    pub fn final_elapsed_minutes(&self) -> Option<f64> {
        self.final_elapsed_minutes
    }

    pub fn is_time_exhausted(&self) -> bool {
        self.final_elapsed_minutes.is_some() || self.time_remaining.is_zero()
    }

    /// Read-only view handed to the presentation layer after each transition
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            words: &self.target_words,
            current_index: self.current_index,
            current_input: &self.current_input,
            mistakes: &self.mistakes,
            mistake_count: self.mistake_count,
            time_remaining: self.time_remaining,
            time_limit: self.time_limit,
            metrics: (self.phase == Phase::Finished).then(|| Metrics::calculate(self)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub words: &'a [String],
    pub current_index: usize,
    pub current_input: &'a str,
    pub mistakes: &'a MistakeMap,
    pub mistake_count: u32,
    pub time_remaining: Duration,
    pub time_limit: TimeLimit,
    pub metrics: Option<Metrics>,
}
