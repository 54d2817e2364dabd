// Library surface for the binary and for headless integration tests.
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod machine;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod welcome;
pub mod words;

pub use app::App;
pub use error::{Error, Result};
pub use machine::{Command, Event, Game};
pub use session::{Phase, Session, Snapshot, TimeLimit};
