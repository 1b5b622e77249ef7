//! Clock module - the single tick timer, modeled in the state world
//!
//! The game has exactly one timer: armed while the game is playing, disarmed
//! otherwise, and restarted whenever the interval changes. Keeping that
//! contract in pure millisecond arithmetic (no `Instant` here) makes the
//! cancel/re-arm rules unit-testable; the runner supplies wall-clock time.
//!
//! The runner calls [`TickClock::sync`] after every applied command and every
//! tick. That single call site enforces the timer rules:
//!
//! - leaving `Playing` (pause, game over, reset) cancels the timer
//! - entering `Playing` arms it at the current speed
//! - a speed change while armed cancels and restarts at the new interval
//! - otherwise the pending deadline is left alone

use crate::types::GameStatus;

/// One-shot-per-interval tick timer.
///
/// Disarmed by default; all times are caller-supplied milliseconds from an
/// arbitrary fixed origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    interval_ms: u32,
    next_due_ms: Option<u64>,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            interval_ms: 0,
            next_due_ms: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Interval the clock was last armed with (0 if never armed).
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Reconcile the timer with the game's status and speed.
    pub fn sync(&mut self, status: GameStatus, speed_ms: u32, now_ms: u64) {
        if status != GameStatus::Playing {
            self.next_due_ms = None;
            return;
        }
        if self.next_due_ms.is_none() || self.interval_ms != speed_ms {
            self.interval_ms = speed_ms;
            self.next_due_ms = Some(now_ms + speed_ms as u64);
        }
    }

    /// Milliseconds until the next tick is due (0 when overdue).
    ///
    /// `None` while disarmed; the caller picks its own idle poll interval.
    pub fn poll_timeout_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }

    /// Consume a due tick, if any.
    ///
    /// Re-arms from `now`; missed intervals do not accumulate into a burst of
    /// catch-up ticks.
    pub fn tick_due(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.interval_ms as u64);
                true
            }
            _ => false,
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_disarmed() {
        let clock = TickClock::new();
        assert!(!clock.is_armed());
        assert_eq!(clock.poll_timeout_ms(0), None);
    }

    #[test]
    fn test_sync_arms_only_while_playing() {
        let mut clock = TickClock::new();

        clock.sync(GameStatus::Waiting, 150, 0);
        assert!(!clock.is_armed());

        clock.sync(GameStatus::Playing, 150, 1000);
        assert!(clock.is_armed());
        assert_eq!(clock.interval_ms(), 150);
        assert_eq!(clock.poll_timeout_ms(1000), Some(150));
    }

    #[test]
    fn test_pause_and_game_over_disarm() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);
        assert!(clock.is_armed());

        clock.sync(GameStatus::Paused, 150, 50);
        assert!(!clock.is_armed());

        clock.sync(GameStatus::Playing, 150, 100);
        clock.sync(GameStatus::GameOver, 150, 120);
        assert!(!clock.is_armed());
    }

    #[test]
    fn test_resume_rearms_full_interval() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);
        clock.sync(GameStatus::Paused, 150, 100);

        // Resuming starts a fresh interval from now; no credit for the 100ms
        // that elapsed before the pause.
        clock.sync(GameStatus::Playing, 150, 500);
        assert_eq!(clock.poll_timeout_ms(500), Some(150));
    }

    #[test]
    fn test_speed_change_restarts_interval() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);

        // 100ms in, the speed drops to 140: cancel-and-restart from now.
        clock.sync(GameStatus::Playing, 140, 100);
        assert_eq!(clock.interval_ms(), 140);
        assert_eq!(clock.poll_timeout_ms(100), Some(140));
    }

    #[test]
    fn test_same_speed_sync_leaves_deadline_alone() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);

        clock.sync(GameStatus::Playing, 150, 100);
        assert_eq!(clock.poll_timeout_ms(100), Some(50));
    }

    #[test]
    fn test_tick_due_fires_once_per_interval() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);

        assert!(!clock.tick_due(149));
        assert!(clock.tick_due(150));
        // Immediately after firing, the next deadline is a full interval out.
        assert!(!clock.tick_due(151));
        assert_eq!(clock.poll_timeout_ms(150), Some(150));
        assert!(clock.tick_due(300));
    }

    #[test]
    fn test_late_tick_rearms_from_now() {
        let mut clock = TickClock::new();
        clock.sync(GameStatus::Playing, 150, 0);

        // The process stalled well past several intervals; only one tick
        // fires and the next is due a full interval after the stall.
        assert!(clock.tick_due(1000));
        assert!(!clock.tick_due(1100));
        assert_eq!(clock.poll_timeout_ms(1000), Some(150));
    }

    #[test]
    fn test_disarmed_clock_never_fires() {
        let mut clock = TickClock::new();
        assert!(!clock.tick_due(10_000));

        clock.sync(GameStatus::Playing, 150, 0);
        clock.sync(GameStatus::Paused, 150, 10);
        assert!(!clock.tick_due(10_000));
    }
}
