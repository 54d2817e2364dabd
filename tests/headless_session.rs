use std::sync::mpsc::{self, Sender};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tuitype::{
    clock::ManualClock,
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, Runner, TestEventSource},
    words::FixedWords,
    App, Game, Phase, TimeLimit,
};

// Headless integration: drive the App through the runtime without a TTY.
// Keys go through a channel-backed event source and time only moves when
// the manual clock is advanced.

type TestApp = App<FixedWords, ManualClock>;

fn app(words: &[&str], secs: u64) -> TestApp {
    let game = Game::with_parts(
        FixedWords::new(words.iter().copied()),
        ManualClock::new(),
        TimeLimit::new(secs).unwrap(),
        words.len(),
    );
    App::with_game(
        game,
        Config {
            time_limit_secs: secs,
            number_of_words: words.len(),
        },
    )
}

fn key(tx: &Sender<AppEvent>, code: KeyCode) {
    tx.send(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(tx: &Sender<AppEvent>, text: &str) {
    for c in text.chars() {
        key(tx, KeyCode::Char(c));
    }
}

/// Handle every queued event, stopping at the first timeout
fn drain(app: &mut TestApp, runner: &Runner<TestEventSource>) {
    loop {
        match runner.step(Duration::from_millis(5)) {
            AppEvent::Tick => {
                app.handle(AppEvent::Tick);
                break;
            }
            event => app.handle(event),
        }
    }
}

fn wait(app: &mut TestApp, runner: &Runner<TestEventSource>, secs: u64) {
    for _ in 0..secs {
        app.game().clock().advance(Duration::from_secs(1));
        drain(app, runner);
    }
}

#[test]
fn full_session_reports_results_and_restarts() {
    let mut app = app(&["hello", "world", "again"], 10);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx));

    key(&tx, KeyCode::Enter);
    type_text(&tx, "hello wurld ");
    drain(&mut app, &runner);
    assert_eq!(app.phase(), Phase::Active);
    assert_eq!(app.game().session().current_index(), 2);

    wait(&mut app, &runner, 10);
    assert_eq!(app.phase(), Phase::Finished);

    let metrics = app.game().snapshot().metrics.unwrap();
    assert_eq!(metrics.words_completed, 2);
    assert_eq!(metrics.correct_characters, 9);
    assert_eq!(metrics.mistake_count, 2);
    assert!((metrics.words_per_minute - 10.8).abs() < 1e-9);

    // typing after the clock ran out changes nothing
    type_text(&tx, "abc");
    drain(&mut app, &runner);
    assert_eq!(app.game().session().current_input(), "");

    key(&tx, KeyCode::Enter);
    drain(&mut app, &runner);
    assert_eq!(app.phase(), Phase::Welcome);
    assert_eq!(app.game().session().current_index(), 0);
    assert_eq!(app.game().session().mistake_count(), 0);
    assert!(app.game().session().mistakes().is_empty());
}

#[test]
fn correcting_an_earlier_word_through_navigation() {
    let mut app = app(&["cat", "dog"], 30);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx));

    key(&tx, KeyCode::Enter);
    type_text(&tx, "cot ");
    key(&tx, KeyCode::Left);
    drain(&mut app, &runner);

    let session = app.game().session();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_input(), "cot");
    assert!(session.mistakes().is_marked(0, 1));

    key(&tx, KeyCode::Backspace);
    key(&tx, KeyCode::Backspace);
    type_text(&tx, "at ");
    drain(&mut app, &runner);

    let session = app.game().session();
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.mistakes().marked_in(0), 0);
    // the earlier slip still counts against the total
    assert!(session.mistake_count() >= 1);
}

#[test]
fn escape_abandons_session_without_results() {
    let mut app = app(&["cat"], 30);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx));

    key(&tx, KeyCode::Enter);
    type_text(&tx, "ca");
    key(&tx, KeyCode::Esc);
    drain(&mut app, &runner);

    assert_eq!(app.phase(), Phase::Welcome);
    assert!(!app.timer().is_armed());
    assert!(app.game().snapshot().metrics.is_none());
    assert_eq!(
        app.game().session().time_remaining(),
        Duration::from_secs(30)
    );
}

#[test]
fn settings_change_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let store = FileConfigStore::with_path(&path);

    let mut app = app(&["cat"], 30).with_store(Box::new(store.clone()));
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx));

    key(&tx, KeyCode::Char('s'));
    for _ in 0..3 {
        key(&tx, KeyCode::Down);
    }
    key(&tx, KeyCode::Esc);
    drain(&mut app, &runner);

    assert_eq!(app.phase(), Phase::Welcome);
    assert_eq!(app.game().session().time_limit().as_secs(), 15);
    assert_eq!(store.load().time_limit_secs, 15);

    key(&tx, KeyCode::Enter);
    drain(&mut app, &runner);
    assert_eq!(
        app.game().session().time_remaining(),
        Duration::from_secs(15)
    );
}

#[test]
fn ctrl_c_quits_from_any_phase() {
    for setup in [&[][..], &[KeyCode::Char('s')][..], &[KeyCode::Enter][..]] {
        let mut app = app(&["cat"], 30);
        let (tx, rx) = mpsc::channel();
        let runner = Runner::new(TestEventSource::new(rx));

        for code in setup {
            key(&tx, *code);
        }
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        drain(&mut app, &runner);

        assert!(app.should_quit());
    }
}
