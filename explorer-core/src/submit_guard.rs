use crate::error::ExplorerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeToken(u64);

/// Token for the timer that re-enables the submit button if the page never navigates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValveToken(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub token: NoticeToken,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission must be stopped. `replaced` is true when a notice was already showing
    /// and has been updated in place.
    Blocked { token: NoticeToken, replaced: bool },
    /// Let the form through and show the busy state until `token` is restored or settled.
    Allowed { query: String, token: ValveToken },
    /// A submission is already on its way.
    InFlight,
}

/// Validates searches before the form is submitted and tracks the transient feedback
/// that goes with it: a single error notice and the busy submit button.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    next_id: u64,
    notice: Option<Notice>,
    valve: Option<ValveToken>,
}

impl SubmitGuard {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.valve.is_some()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn attempt(&mut self, raw_query: &str) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::InFlight;
        }
        let query = raw_query.trim();
        if query.is_empty() {
            let token = NoticeToken(self.next_id());
            let replaced = self.notice.is_some();
            self.notice = Some(Notice {
                message: ExplorerError::EmptyQuery.to_string(),
                token,
            });
            tracing::debug!(replaced, "blocked empty search");
            return SubmitOutcome::Blocked { token, replaced };
        }
        self.notice = None;
        let token = ValveToken(self.next_id());
        self.valve = Some(token);
        SubmitOutcome::Allowed {
            query: query.to_string(),
            token,
        }
    }

    /// Removes the notice if `token` still names it. A notice that was updated after the
    /// token was issued keeps showing.
    pub fn dismiss(&mut self, token: NoticeToken) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.token == token) {
            self.notice = None;
            true
        } else {
            false
        }
    }

    /// The safety valve ran out. Returns true when the button should be restored.
    pub fn restore(&mut self, token: ValveToken) -> bool {
        if self.valve == Some(token) {
            tracing::debug!("search did not navigate, restoring submit button");
            self.valve = None;
            true
        } else {
            false
        }
    }

    /// The page is going away, so the valve timer no longer matters. Returns the token that
    /// was outstanding so its timer can be cleared.
    pub fn settle(&mut self) -> Option<ValveToken> {
        self.valve.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE_MS: u64 = 3000;
    const RESTORE_MS: u64 = 10_000;

    #[derive(Clone, Copy, Debug)]
    enum Timer {
        Notice(NoticeToken),
        Valve(ValveToken),
    }

    /// Runs a guard against scheduled timers the way the search form does,
    /// recording when the notice and the busy state change.
    struct Clock {
        guard: SubmitGuard,
        timers: Vec<(u64, Timer)>,
        dismissed_at: Vec<u64>,
        restored_at: Vec<u64>,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                guard: SubmitGuard::default(),
                timers: Vec::new(),
                dismissed_at: Vec::new(),
                restored_at: Vec::new(),
            }
        }

        fn submit(&mut self, query: &str, now: u64) -> SubmitOutcome {
            self.run_until(now);
            let outcome = self.guard.attempt(query);
            match &outcome {
                SubmitOutcome::Blocked { token, .. } => {
                    self.timers.push((now + NOTICE_MS, Timer::Notice(*token)))
                }
                SubmitOutcome::Allowed { token, .. } => {
                    self.timers.push((now + RESTORE_MS, Timer::Valve(*token)))
                }
                SubmitOutcome::InFlight => {}
            }
            outcome
        }

        fn run_until(&mut self, now: u64) {
            self.timers.sort_by_key(|(deadline, _)| *deadline);
            while let Some((deadline, timer)) = self.timers.first().copied() {
                if deadline > now {
                    break;
                }
                self.timers.remove(0);
                match timer {
                    Timer::Notice(token) => {
                        if self.guard.dismiss(token) {
                            self.dismissed_at.push(deadline);
                        }
                    }
                    Timer::Valve(token) => {
                        if self.guard.restore(token) {
                            self.restored_at.push(deadline);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn refreshed_notice_outlives_the_first_countdown() {
        let mut clock = Clock::new();
        clock.submit("   ", 0);
        clock.submit("", 2_000);
        // the first countdown ends at 3000 but the notice was refreshed at 2000
        clock.run_until(3_500);
        assert!(clock.guard.notice().is_some());
        assert!(clock.dismissed_at.is_empty());
        clock.run_until(5_000);
        assert!(clock.guard.notice().is_none());
        assert_eq!(clock.dismissed_at, vec![5_000]);
    }

    #[test]
    fn busy_until_valve_then_submits_again() {
        let mut clock = Clock::new();
        assert!(matches!(
            clock.submit("astronaut", 0),
            SubmitOutcome::Allowed { .. }
        ));
        // a suggestion click or Enter during the search is swallowed
        assert_eq!(clock.submit("tissue", 4_000), SubmitOutcome::InFlight);
        clock.run_until(9_999);
        assert!(clock.guard.is_busy());
        clock.run_until(10_000);
        assert!(!clock.guard.is_busy());
        assert_eq!(clock.restored_at, vec![10_000]);
        assert!(matches!(
            clock.submit("tissue", 10_500),
            SubmitOutcome::Allowed { .. }
        ));
    }

    #[test]
    fn leaving_the_page_stops_the_valve() {
        let mut clock = Clock::new();
        clock.submit("neural", 0);
        clock.run_until(200);
        assert!(clock.guard.settle().is_some());
        clock.run_until(20_000);
        assert!(clock.restored_at.is_empty());
    }

    #[test]
    fn whitespace_is_empty() {
        let mut guard = SubmitGuard::default();
        let outcome = guard.attempt("   ");
        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked {
                replaced: false,
                ..
            }
        ));
        assert_eq!(
            guard.notice().map(|n| n.message.as_str()),
            Some("Please enter a search term")
        );
        assert!(!guard.is_busy());
    }

    #[test]
    fn second_empty_submit_updates_the_notice() {
        let mut guard = SubmitGuard::default();
        let SubmitOutcome::Blocked { token: first, .. } = guard.attempt("") else {
            panic!("expected block");
        };
        let SubmitOutcome::Blocked {
            token: second,
            replaced,
        } = guard.attempt(" \t ")
        else {
            panic!("expected block");
        };
        assert!(replaced);
        assert_ne!(first, second);
        // the first countdown must not remove the refreshed notice
        assert!(!guard.dismiss(first));
        assert!(guard.notice().is_some());
        assert!(guard.dismiss(second));
        assert!(guard.notice().is_none());
        assert!(!guard.dismiss(second));
    }

    #[test]
    fn valid_query_is_trimmed_and_busy() {
        let mut guard = SubmitGuard::default();
        guard.attempt("");
        let outcome = guard.attempt("  bone density ");
        let SubmitOutcome::Allowed { query, token } = outcome else {
            panic!("expected allow");
        };
        assert_eq!(query, "bone density");
        assert!(guard.is_busy());
        assert!(guard.notice().is_none());
        assert_eq!(guard.attempt("again"), SubmitOutcome::InFlight);
        assert!(guard.restore(token));
        assert!(!guard.is_busy());
        assert!(!guard.restore(token));
    }

    #[test]
    fn settled_valve_is_not_restored() {
        let mut guard = SubmitGuard::default();
        let SubmitOutcome::Allowed { token, .. } = guard.attempt("radiation") else {
            panic!("expected allow");
        };
        assert_eq!(guard.settle(), Some(token));
        assert!(!guard.restore(token));
        assert_eq!(guard.settle(), None);
    }
}
