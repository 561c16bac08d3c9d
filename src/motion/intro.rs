use log::{debug, warn};

use crate::config::{INTRO_DURATION_MS, SEEN_INTRO_KEY, SEEN_INTRO_VALUE};
use crate::storage::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Idle,
    Running,
    Finished,
}

/// One-time loading overlay shown on the first visit of a session.
///
/// Progress is time driven (`0..=100` over `duration_ms`) and the overlay only
/// goes away once the background asset has also reported ready. A session that
/// already saw the intro bypasses it entirely.
pub struct IntroController<S: SessionStore> {
    session: S,
    phase: IntroPhase,
    progress: u8,
    asset_ready: bool,
    bypassed: bool,
    persisted: bool,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl<S: SessionStore> IntroController<S> {
    pub fn new(session: S) -> Self {
        Self::with_duration(session, INTRO_DURATION_MS)
    }

    pub fn with_duration(session: S, duration_ms: f64) -> Self {
        let seen = match session.get(SEEN_INTRO_KEY) {
            Ok(value) => value.is_some(),
            Err(e) => {
                warn!("Could not read {}: {}", SEEN_INTRO_KEY, e);
                false
            }
        };

        let (phase, progress) = if seen {
            (IntroPhase::Finished, 100)
        } else {
            (IntroPhase::Idle, 0)
        };

        Self {
            session,
            phase,
            progress,
            // A session that already saw the intro had a usable asset back then.
            asset_ready: seen,
            bypassed: seen,
            persisted: seen,
            duration_ms,
            started_at: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[cfg(test)]
    pub fn asset_ready(&self) -> bool {
        self.asset_ready
    }

    /// The session had already seen the intro when this controller was created.
    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    pub fn show_overlay(&self) -> bool {
        !self.bypassed && self.phase != IntroPhase::Finished
    }

    pub fn content_revealed(&self) -> bool {
        self.phase == IntroPhase::Finished
    }

    /// Whether the progress animation still needs frames.
    pub fn wants_frames(&self) -> bool {
        self.phase == IntroPhase::Running && self.progress < 100
    }

    pub fn start(&mut self) {
        if self.phase == IntroPhase::Idle {
            debug!("Intro running");
            self.phase = IntroPhase::Running;
        }
    }

    /// Samples progress at `timestamp_ms`. The first sample fixes the start time, so
    /// progress depends on elapsed time only and never on how many frames ran.
    pub fn tick(&mut self, timestamp_ms: f64) -> IntroPhase {
        if self.phase != IntroPhase::Running {
            self.try_finish();
            return self.phase;
        }

        let start = *self.started_at.get_or_insert(timestamp_ms);
        let elapsed = (timestamp_ms - start).max(0.0);
        let next = if self.duration_ms > 0.0 {
            (100.0 * elapsed / self.duration_ms).round().min(100.0) as u8
        } else {
            100
        };
        self.progress = self.progress.max(next);

        self.try_finish();
        self.phase
    }

    /// Latches the asset-ready signal. Later calls are no-ops.
    pub fn mark_asset_ready(&mut self) -> IntroPhase {
        if !self.asset_ready {
            debug!("Intro asset ready at {}%", self.progress);
            self.asset_ready = true;
        }
        self.try_finish();
        self.phase
    }

    /// Writes the seen flag once the intro has finished. Safe to call repeatedly.
    fn persist_seen(&mut self) {
        if self.phase != IntroPhase::Finished {
            return;
        }
        if self.persisted {
            return;
        }
        match self.session.set(SEEN_INTRO_KEY, SEEN_INTRO_VALUE) {
            Ok(()) => {
                debug!("Persisted {}", SEEN_INTRO_KEY);
                self.persisted = true;
            }
            Err(e) => warn!("Could not persist {}: {}", SEEN_INTRO_KEY, e),
        }
    }

    fn try_finish(&mut self) {
        if self.phase == IntroPhase::Running && self.progress == 100 && self.asset_ready {
            debug!("Intro finished");
            self.phase = IntroPhase::Finished;
        }
        // Retries a write that failed earlier.
        self.persist_seen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySession, StorageError};
    use std::cell::Cell;
    use std::rc::Rc;

    fn fresh() -> (Rc<MemorySession>, IntroController<Rc<MemorySession>>) {
        let session = Rc::new(MemorySession::default());
        let intro = IntroController::new(session.clone());
        (session, intro)
    }

    #[test]
    fn first_visit_starts_idle_with_overlay() {
        let (_, intro) = fresh();
        assert_eq!(intro.phase(), IntroPhase::Idle);
        assert_eq!(intro.progress(), 0);
        assert!(intro.show_overlay());
        assert!(!intro.content_revealed());
    }

    #[test]
    fn seen_session_bypasses_the_intro() {
        let session = Rc::new(MemorySession::default());
        session.set(SEEN_INTRO_KEY, SEEN_INTRO_VALUE).unwrap();

        let mut intro = IntroController::new(session.clone());
        assert!(intro.is_bypassed());
        assert!(!intro.show_overlay());
        assert!(intro.content_revealed());
        assert_eq!(intro.phase(), IntroPhase::Finished);
        assert!(intro.asset_ready());

        intro.start();
        assert_eq!(intro.tick(0.0), IntroPhase::Finished);
        assert!(!intro.wants_frames());
    }

    #[test]
    fn progress_follows_elapsed_time_not_frame_count() {
        let (_, mut intro) = fresh();
        intro.start();
        intro.tick(1000.0);
        assert_eq!(intro.progress(), 0);

        // One long frame gets as far as many short ones would.
        intro.tick(1600.0);
        assert_eq!(intro.progress(), 50);

        intro.tick(1605.0);
        assert_eq!(intro.progress(), 50);
        intro.tick(1606.1);
        assert_eq!(intro.progress(), 51);
    }

    #[test]
    fn progress_reaches_exactly_one_hundred_and_stays_there() {
        let (_, mut intro) = fresh();
        intro.start();
        let mut previous = 0;
        let mut t = 0.0;
        while t <= 3000.0 {
            intro.tick(t);
            assert!(intro.progress() >= previous);
            assert!(intro.progress() <= 100);
            previous = intro.progress();
            t += 16.7;
        }
        assert_eq!(intro.progress(), 100);
    }

    #[test]
    fn progress_hits_one_hundred_at_the_duration() {
        let (_, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        intro.tick(1100.0);
        assert!(intro.progress() < 100);
        assert!(intro.wants_frames());
        intro.tick(1200.0);
        assert_eq!(intro.progress(), 100);
        assert!(!intro.wants_frames());
    }

    #[test]
    fn clock_going_backwards_never_lowers_progress() {
        let (_, mut intro) = fresh();
        intro.start();
        intro.tick(500.0);
        intro.tick(1100.0);
        let reached = intro.progress();
        intro.tick(700.0);
        assert_eq!(intro.progress(), reached);
    }

    #[test]
    fn slow_asset_holds_the_overlay_past_one_hundred() {
        let (session, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        intro.tick(5000.0);
        assert_eq!(intro.progress(), 100);
        assert_eq!(intro.phase(), IntroPhase::Running);
        assert!(intro.show_overlay());
        assert_eq!(session.get(SEEN_INTRO_KEY), Ok(None));

        assert_eq!(intro.mark_asset_ready(), IntroPhase::Finished);
        assert!(!intro.show_overlay());
        assert_eq!(
            session.get(SEEN_INTRO_KEY),
            Ok(Some(SEEN_INTRO_VALUE.to_string()))
        );
    }

    #[test]
    fn early_asset_waits_for_progress() {
        let (_, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        assert_eq!(intro.mark_asset_ready(), IntroPhase::Running);
        intro.tick(600.0);
        assert_eq!(intro.phase(), IntroPhase::Running);
        assert_eq!(intro.tick(1200.0), IntroPhase::Finished);
        assert!(intro.content_revealed());
    }

    #[test]
    fn asset_that_never_loads_keeps_intro_running() {
        let (session, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        intro.tick(60_000.0);
        assert_eq!(intro.phase(), IntroPhase::Running);
        assert!(intro.show_overlay());
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn asset_ready_is_a_latch() {
        let (_, mut intro) = fresh();
        intro.mark_asset_ready();
        intro.mark_asset_ready();
        assert!(intro.asset_ready());
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let (_, mut intro) = fresh();
        assert_eq!(intro.tick(5000.0), IntroPhase::Idle);
        assert_eq!(intro.progress(), 0);
        assert!(!intro.wants_frames());
    }

    #[test]
    fn abandoned_intro_persists_nothing() {
        let (session, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        intro.tick(400.0);
        drop(intro);
        assert_eq!(session.get(SEEN_INTRO_KEY), Ok(None));

        let next_visit = IntroController::new(session);
        assert!(next_visit.show_overlay());
    }

    #[test]
    fn persisting_twice_matches_persisting_once() {
        let (session, mut intro) = fresh();
        intro.start();
        intro.tick(0.0);
        intro.mark_asset_ready();
        intro.tick(1200.0);
        assert_eq!(intro.phase(), IntroPhase::Finished);
        let once = session.get(SEEN_INTRO_KEY);
        assert_eq!(once, Ok(Some(SEEN_INTRO_VALUE.to_string())));

        intro.persist_seen();
        intro.mark_asset_ready();
        intro.tick(2000.0);
        assert_eq!(session.get(SEEN_INTRO_KEY), once);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn nothing_is_persisted_before_the_intro_finishes() {
        let (session, mut intro) = fresh();
        intro.persist_seen();
        assert_eq!(session.len(), 0);

        intro.start();
        intro.tick(0.0);
        intro.tick(1200.0);
        intro.persist_seen();
        assert_eq!(intro.phase(), IntroPhase::Running);
        assert_eq!(session.len(), 0);
    }

    /// Counts writes and refuses reads.
    struct FlakySession {
        writes: Cell<u32>,
    }

    impl SessionStore for FlakySession {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn unreadable_flag_counts_as_unseen_and_is_written_once() {
        let mut intro = IntroController::new(FlakySession { writes: Cell::new(0) });
        assert!(intro.show_overlay());

        intro.start();
        intro.tick(0.0);
        intro.mark_asset_ready();
        intro.tick(1200.0);
        intro.persist_seen();
        intro.persist_seen();
        assert_eq!(intro.phase(), IntroPhase::Finished);
        assert_eq!(intro.session.writes.get(), 1);
    }

    /// Refuses the first write, then behaves like memory.
    struct RefusingOnce {
        attempts: Cell<u32>,
        inner: MemorySession,
    }

    impl SessionStore for RefusingOnce {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.attempts.set(self.attempts.get() + 1);
            if self.attempts.get() == 1 {
                return Err(StorageError::Rejected("QuotaExceededError".into()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn failed_write_is_retried_on_the_next_tick() {
        let mut intro = IntroController::new(RefusingOnce {
            attempts: Cell::new(0),
            inner: MemorySession::default(),
        });
        intro.start();
        intro.tick(0.0);
        intro.mark_asset_ready();
        intro.tick(1200.0);
        assert_eq!(intro.phase(), IntroPhase::Finished);
        assert_eq!(intro.session.inner.get(SEEN_INTRO_KEY), Ok(None));

        intro.tick(1216.0);
        assert_eq!(
            intro.session.inner.get(SEEN_INTRO_KEY),
            Ok(Some(SEEN_INTRO_VALUE.to_string()))
        );
        intro.tick(1232.0);
        assert_eq!(intro.session.attempts.get(), 2);
    }
}
