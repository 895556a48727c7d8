#![deny(missing_docs)]
//! Logging for the hubby workspace.
//!
//! Every record goes through the `log` facade under the [`TARGET`] target, so
//! a host logger can filter the form controller independently of its
//! dependencies. Records written while an event is being dispatched can be
//! tied back to that event through [`current_event_seq`].

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

/// Target attached to every record emitted by the `hubby_*` macros.
pub const TARGET: &str = "hubby";

thread_local! {
    static EVENT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Marks the dispatch of one event. The previous sequence number comes back
/// when the scope is dropped.
#[must_use = "the event sequence resets when the scope is dropped"]
pub struct EventScope {
    previous: u64,
}

impl Drop for EventScope {
    fn drop(&mut self) {
        EVENT_SEQ.with(|seq| seq.set(self.previous));
    }
}

/// Enters the dispatch of event `seq` on this thread.
pub fn enter_event(seq: u64) -> EventScope {
    let previous = EVENT_SEQ.with(|cell| cell.replace(seq));
    EventScope { previous }
}

/// Sequence number of the event being dispatched, 0 outside any dispatch.
pub fn current_event_seq() -> u64 {
    EVENT_SEQ.with(Cell::get)
}

/// Logs at an explicit `log::Level` under the hubby target.
#[macro_export]
macro_rules! hubby_log {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::__log::log!(target: $crate::TARGET, $lvl, $($arg)+)
    };
}

/// Logs a trace-level record.
#[macro_export]
macro_rules! hubby_trace {
    ($($arg:tt)+) => { $crate::hubby_log!($crate::__log::Level::Trace, $($arg)+) };
}

/// Logs a debug-level record.
#[macro_export]
macro_rules! hubby_debug {
    ($($arg:tt)+) => { $crate::hubby_log!($crate::__log::Level::Debug, $($arg)+) };
}

/// Logs an info-level record.
#[macro_export]
macro_rules! hubby_info {
    ($($arg:tt)+) => { $crate::hubby_log!($crate::__log::Level::Info, $($arg)+) };
}

/// Logs a warn-level record.
#[macro_export]
macro_rules! hubby_warn {
    ($($arg:tt)+) => { $crate::hubby_log!($crate::__log::Level::Warn, $($arg)+) };
}

/// Logs an error-level record.
#[macro_export]
macro_rules! hubby_error {
    ($($arg:tt)+) => { $crate::hubby_log!($crate::__log::Level::Error, $($arg)+) };
}

/// Installs a terminal logger for test binaries.
///
/// The level comes from `HUBBY_LOG` (`trace`, `debug`, ...) and defaults to
/// debug. Calling it again, or after another logger was installed, does
/// nothing.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let level = std::env::var("HUBBY_LOG")
        .ok()
        .and_then(|value| value.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Debug);
    let config = ConfigBuilder::new()
        .add_filter_allow_str(TARGET)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto);
}
