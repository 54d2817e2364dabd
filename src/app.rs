use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, ConfigStore};
use crate::keymap::map_key;
use crate::machine::{Command, Event, Game};
use crate::runtime::{AppEvent, TickSchedule};
use crate::session::Phase;
use crate::ui::theme::Theme;
use crate::welcome::{WelcomeBar, FRAME_INTERVAL};
use crate::words::{CorpusWords, WordSource};

/// Longest the event loop blocks when nothing is scheduled
pub const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Everything the terminal front end drives: the game, the countdown and
/// welcome-animation schedules, and the stored preferences.
pub struct App<W: WordSource = CorpusWords, C: Clock = SystemClock> {
    game: Game<W, C>,
    welcome: WelcomeBar,
    timer: TickSchedule,
    frames: TickSchedule,
    config: Config,
    store: Option<Box<dyn ConfigStore>>,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let game = Game::new(config.time_limit(), config.number_of_words);
        Self::with_game(game, config)
    }
}

impl<W: WordSource, C: Clock> App<W, C> {
    pub fn with_game(game: Game<W, C>, config: Config) -> Self {
        let mut frames = TickSchedule::default();
        frames.arm(game.clock().now(), Duration::ZERO);
        Self {
            game,
            welcome: WelcomeBar::new(),
            timer: TickSchedule::default(),
            frames,
            config,
            store: None,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Persist the time limit to `store` whenever Settings is left
    pub fn with_store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn game(&self) -> &Game<W, C> {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.session().phase()
    }

    pub fn welcome(&self) -> &WelcomeBar {
        &self.welcome
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timer(&self) -> &TickSchedule {
        &self.timer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Feed one runtime event through, then run whatever has come due
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize | AppEvent::Tick => {}
        }
        self.on_tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(event) = map_key(self.phase(), key) {
            let now = self.game.clock().now();
            self.dispatch(event, now);
        }
    }

    /// Fire the countdown if its deadline passed and step the welcome bar
    pub fn on_tick(&mut self) {
        let now = self.game.clock().now();

        if let Some(deadline) = self.timer.take_due(now) {
            // re-arm from the deadline, not from now, so the countdown
            // does not drift with loop latency
            self.dispatch(Event::TimerTick, deadline);
        }

        if self.phase() == Phase::Welcome && self.frames.take_due(now).is_some() {
            self.welcome.advance();
            self.frames.arm(now, FRAME_INTERVAL);
        }
    }

    /// How long the event loop may block before `on_tick` has work to do
    pub fn next_timeout(&self) -> Duration {
        let now = self.game.clock().now();
        let timer = self.timer.timeout(now, IDLE_WAIT);
        if self.phase() == Phase::Welcome {
            timer.min(self.frames.timeout(now, IDLE_WAIT))
        } else {
            timer
        }
    }

    fn dispatch(&mut self, event: Event, at: Instant) {
        let before = self.phase();
        let command = self.game.apply(event);
        let after = self.phase();

        match command {
            Some(Command::Tick(delay)) => self.timer.arm(at, delay),
            Some(Command::Quit) => self.should_quit = true,
            None if after != Phase::Active => self.timer.cancel(),
            None => {}
        }

        if before != after {
            debug!(from = %before, to = %after, "phase changed");
            if after == Phase::Welcome {
                self.welcome.reset();
                self.frames.arm(at, Duration::ZERO);
            }
            if before == Phase::Settings {
                self.save_time_limit();
            }
        }
    }

    fn save_time_limit(&mut self) {
        let secs = self.game.session().time_limit().as_secs();
        if self.config.time_limit_secs == secs {
            return;
        }
        self.config.time_limit_secs = secs;
        if let Some(store) = &self.store {
            match store.save(&self.config) {
                Ok(()) => debug!(time_limit = secs, "time limit saved"),
                Err(err) => warn!(%err, "could not save config"),
            }
        }
    }
}
