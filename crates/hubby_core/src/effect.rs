use std::fmt;
use std::time::Duration;

use crate::StatusUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fire `Msg::PasteSettled` with the field value read at fire time.
    PasteSettle,
    /// Fire `Msg::StatusExpired`.
    StatusClear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleTimer {
        timer: TimerId,
        kind: TimerKind,
        delay: Duration,
    },
    CancelTimer { timer: TimerId },
    /// Cancel the native form submission.
    PreventSubmission,
    /// Let the native form submission proceed.
    AllowSubmission { target: StatusUrl },
}
