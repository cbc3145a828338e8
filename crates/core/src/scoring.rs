//! Scoring module - score for a cracked code
//!
//! A game starts from `BASE_SCORE`, loses `ATTEMPT_PENALTY` per attempt and
//! `HINT_PENALTY` per hint, and gains `TIME_BONUS_PER_SECOND` for each second
//! left when playing against the clock. The result never drops below
//! `MIN_SCORE`.

use crate::types::{ATTEMPT_PENALTY, BASE_SCORE, HINT_PENALTY, MIN_SCORE, TIME_BONUS_PER_SECOND};

/// Bonus for time left on the countdown (zero outside timer mode)
pub fn time_bonus(timer_mode: bool, time_left: u32) -> u32 {
    if timer_mode && time_left > 0 {
        time_left.saturating_mul(TIME_BONUS_PER_SECOND)
    } else {
        0
    }
}

/// Calculate the score for a game
///
/// `score = max(MIN_SCORE, BASE_SCORE - 50 * attempts - 100 * hints + bonus)`
///
/// # Examples
///
/// ```
/// use codebreaker_core::calculate_score;
///
/// assert_eq!(calculate_score(3, 1, 0), 750);
/// assert_eq!(calculate_score(100, 0, 0), 100);
/// ```
pub fn calculate_score(attempts_used: u32, hints_used: u32, time_bonus: u32) -> u32 {
    let raw = i64::from(BASE_SCORE) - i64::from(ATTEMPT_PENALTY) * i64::from(attempts_used)
        - i64::from(HINT_PENALTY) * i64::from(hints_used)
        + i64::from(time_bonus);

    raw.clamp(i64::from(MIN_SCORE), i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_formula() {
        assert_eq!(calculate_score(0, 0, 0), 1000);
        assert_eq!(calculate_score(1, 0, 0), 950);
        assert_eq!(calculate_score(4, 2, 0), 600);
    }

    #[test]
    fn floor_is_applied() {
        assert_eq!(calculate_score(100, 0, 0), 100);
        assert_eq!(calculate_score(18, 0, 0), 100);
        assert_eq!(calculate_score(u32::MAX, u32::MAX, 0), 100);
    }

    #[test]
    fn non_increasing_in_attempts_and_hints() {
        for hints in 0..6 {
            for attempts in 0..30 {
                assert!(calculate_score(attempts + 1, hints, 0) <= calculate_score(attempts, hints, 0));
                assert!(calculate_score(attempts, hints + 1, 0) <= calculate_score(attempts, hints, 0));
            }
        }
    }

    #[test]
    fn time_bonus_only_in_timer_mode() {
        assert_eq!(time_bonus(false, 30), 0);
        assert_eq!(time_bonus(true, 0), 0);
        assert_eq!(time_bonus(true, 30), 300);
        assert_eq!(calculate_score(2, 0, time_bonus(true, 30)), 1200);
    }

    #[test]
    fn bonus_can_lift_above_floor() {
        assert_eq!(calculate_score(20, 3, time_bonus(true, 50)), 200);
    }
}
