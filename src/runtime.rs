use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait AppEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let sent = match event::read() {
                Ok(CtEvent::Key(key)) => tx.send(AppEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(%err, "terminal input failed");
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AppEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed event source for tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl AppEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event at a time
pub struct Runner<E: AppEventSource> {
    event_source: E,
}

impl<E: AppEventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Blocks up to `timeout` and returns the next event, or Tick on timeout
    pub fn step(&self, timeout: Duration) -> AppEvent {
        match self.event_source.recv_timeout(timeout) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => AppEvent::Tick,
        }
    }
}

/// A single pending countdown deadline.
///
/// The session asks for its next tick after each transition; the runtime
/// keeps the deadline here and turns it into a `TimerTick` once it passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSchedule {
    deadline: Option<Instant>,
}

impl TickSchedule {
    pub fn arm(&mut self, from: Instant, after: Duration) {
        self.deadline = Some(from + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and return the deadline if it has passed by `now`
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.deadline.take(),
            _ => None,
        }
    }

    /// How long to wait before something needs doing, capped at `max`
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now).min(max))
            .unwrap_or(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    #[test]
    fn step_returns_tick_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let runner = Runner::new(TestEventSource::new(rx));

        match runner.step(Duration::from_millis(1)) {
            AppEvent::Tick => {}
            _ => panic!("expected Tick on timeout"),
        }
    }

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        let runner = Runner::new(TestEventSource::new(rx));

        match runner.step(Duration::from_millis(10)) {
            AppEvent::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            _ => panic!("expected Key event"),
        }
    }

    #[test]
    fn step_returns_tick_when_disconnected() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);
        let runner = Runner::new(TestEventSource::new(rx));
        assert!(matches!(runner.step(Duration::from_millis(1)), AppEvent::Tick));
    }

    #[test]
    fn schedule_is_due_only_after_deadline() {
        let now = Instant::now();
        let mut schedule = TickSchedule::default();
        assert!(!schedule.is_armed());
        assert_eq!(schedule.take_due(now), None);

        schedule.arm(now, Duration::from_secs(1));
        assert_eq!(schedule.take_due(now), None);
        assert!(schedule.is_armed());

        let later = now + Duration::from_secs(1);
        assert_eq!(schedule.take_due(later), Some(later));
        assert!(!schedule.is_armed());
    }

    #[test]
    fn schedule_timeout_is_capped() {
        let now = Instant::now();
        let mut schedule = TickSchedule::default();
        let cap = Duration::from_millis(60);
        assert_eq!(schedule.timeout(now, cap), cap);

        schedule.arm(now, Duration::from_millis(20));
        assert_eq!(schedule.timeout(now, cap), Duration::from_millis(20));
        assert_eq!(
            schedule.timeout(now + Duration::from_secs(5), cap),
            Duration::ZERO
        );

        schedule.cancel();
        assert_eq!(schedule.deadline(), None);
    }
}
