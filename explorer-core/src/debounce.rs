/// Identifies one scheduled countdown. Only the most recent ticket can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    pub deadline: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DebounceState<T> {
    Idle,
    Pending { value: T, ticket: Ticket },
}

/// Trailing-edge debouncer. Times are milliseconds on whatever clock the caller uses.
///
/// The caller schedules a timer for `window_ms` after every [`Debouncer::push`] and hands the
/// returned ticket back to [`Debouncer::expire`] when that timer runs.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window_ms: u64,
    next_id: u64,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            next_id: 0,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> &DebounceState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Holds `value` as the latest input and restarts the countdown, superseding any earlier ticket.
    pub fn push(&mut self, value: T, now: u64) -> Ticket {
        self.next_id += 1;
        let ticket = Ticket {
            id: self.next_id,
            deadline: now.saturating_add(self.window_ms),
        };
        tracing::trace!(ticket = ticket.id, deadline = ticket.deadline, "debounce restarted");
        self.state = DebounceState::Pending { value, ticket };
        ticket
    }

    /// Called when the countdown for `ticket` runs out. Returns the held value and goes idle,
    /// or returns `None` when the ticket has been superseded or cancelled.
    pub fn expire(&mut self, ticket: Ticket) -> Option<T> {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { value, ticket: current } if current == ticket => {
                tracing::trace!(ticket = ticket.id, "debounce settled");
                Some(value)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drops whatever is pending. Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            tracing::trace!("debounce cancelled");
        }
        self.state = DebounceState::Idle;
    }
}
