//! Scoring module - score-driven speed curve
//!
//! The tick interval is a pure function of the total score. It is always
//! derived from `INITIAL_SPEED_MS`, never from the previous interval; the
//! curve is absolute, so the same score always means the same speed.

use crate::types::{INITIAL_SPEED_MS, SPEED_FLOOR_MS, SPEED_STEP_MS, SPEED_STEP_SCORE};

/// Tick interval in milliseconds for a given score.
///
/// Every `SPEED_STEP_SCORE` points shaves `SPEED_STEP_MS` off the initial
/// interval, clamped at `SPEED_FLOOR_MS`.
pub fn speed_for_score(score: u32) -> u32 {
    let steps = score / SPEED_STEP_SCORE;
    INITIAL_SPEED_MS
        .saturating_sub(steps.saturating_mul(SPEED_STEP_MS))
        .max(SPEED_FLOOR_MS)
}
