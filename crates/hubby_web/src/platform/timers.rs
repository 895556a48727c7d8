use std::collections::HashMap;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use hubby_core::TimerId;

/// Pending timeouts keyed by the state machine's timer ids. Dropping a
/// `Timeout` clears it.
#[derive(Default)]
pub(super) struct TimerRegistry {
    active: HashMap<TimerId, Timeout>,
}

impl TimerRegistry {
    pub(super) fn schedule(
        &mut self,
        timer: TimerId,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Re-using an id replaces (and cancels) the older timeout.
        self.active.insert(timer, Timeout::new(millis, callback));
    }

    pub(super) fn cancel(&mut self, timer: TimerId) {
        self.active.remove(&timer);
    }

    /// Takes the handle of a timeout that is firing. The caller drops it once
    /// the callback's work is done; wasm-bindgen defers freeing a closure
    /// that is still on the stack.
    pub(super) fn take_fired(&mut self, timer: TimerId) -> Option<Timeout> {
        self.active.remove(&timer)
    }

    pub(super) fn pending(&self) -> usize {
        self.active.len()
    }
}
