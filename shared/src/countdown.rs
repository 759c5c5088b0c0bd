use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

use crate::constants::{COUNTDOWN_TARGET, TARGET_VIEWS, VIEW_RAMP_MS};
use crate::outcome_policy::RandomSource;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::default();
        }
        Self {
            days: diff_ms / DAY_MS,
            hours: (diff_ms % DAY_MS) / HOUR_MS,
            minutes: (diff_ms % HOUR_MS) / MINUTE_MS,
            seconds: (diff_ms % MINUTE_MS) / SECOND_MS,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

pub fn countdown_target() -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(COUNTDOWN_TARGET, "%Y-%m-%dT%H:%M:%S") {
        Ok(target) => Some(target),
        Err(e) => {
            log::error!("Bad countdown target {}: {}", COUNTDOWN_TARGET, e);
            None
        }
    }
}

/// Remaining time until `target`, all zero once it has passed.
pub fn time_left(now: NaiveDateTime, target: NaiveDateTime) -> TimeLeft {
    TimeLeft::from_millis((target - now).num_milliseconds())
}

/// View counter during the opening ramp: linear from zero to the target.
pub fn view_count_at(elapsed_ms: u64) -> u64 {
    if elapsed_ms >= VIEW_RAMP_MS {
        return TARGET_VIEWS;
    }
    ((elapsed_ms as u128 * TARGET_VIEWS as u128) / VIEW_RAMP_MS as u128) as u64
}

pub fn ramp_finished(elapsed_ms: u64) -> bool {
    elapsed_ms >= VIEW_RAMP_MS
}

/// Views added by one post-ramp tick, 1 to 5.
pub fn view_increment(source: &mut dyn RandomSource) -> u64 {
    1 + source.next_index(5) as u64
}

/// How long a post-ramp tick waits before landing, 1 to 4 seconds.
pub fn view_increment_delay_ms(source: &mut dyn RandomSource) -> u32 {
    source.next_range(1000.0, 4000.0) as u32
}

/// Finnish digit grouping: `22 000 000` with no-break spaces.
pub fn format_fi(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn pad2(n: i64) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome_policy::ScriptedDraws;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_time_left_breakdown() {
        let target = countdown_target().unwrap();
        assert_eq!(target, at(2027, 7, 1, 0, 0, 0));

        let left = time_left(at(2027, 6, 29, 21, 58, 30), target);
        assert_eq!(left, TimeLeft { days: 1, hours: 2, minutes: 1, seconds: 30 });
    }

    #[test]
    fn test_time_left_is_zero_after_target() {
        let target = countdown_target().unwrap();
        assert!(time_left(target, target).is_zero());
        assert!(time_left(at(2030, 1, 1, 0, 0, 0), target).is_zero());
    }

    #[test]
    fn test_view_ramp() {
        assert_eq!(view_count_at(0), 0);
        assert_eq!(view_count_at(VIEW_RAMP_MS / 2), TARGET_VIEWS / 2);
        assert_eq!(view_count_at(VIEW_RAMP_MS), TARGET_VIEWS);
        assert_eq!(view_count_at(VIEW_RAMP_MS * 10), TARGET_VIEWS);
        assert!(!ramp_finished(VIEW_RAMP_MS - 1));
    }

    #[test]
    fn test_view_increment_bounds() {
        assert_eq!(view_increment(&mut ScriptedDraws::constant(0.0)), 1);
        assert_eq!(view_increment(&mut ScriptedDraws::constant(0.999)), 5);
        assert_eq!(view_increment_delay_ms(&mut ScriptedDraws::constant(0.0)), 1000);
    }

    #[test]
    fn test_format_fi_groups_thousands() {
        assert_eq!(format_fi(0), "0");
        assert_eq!(format_fi(999), "999");
        assert_eq!(format_fi(1000), "1\u{a0}000");
        assert_eq!(format_fi(22_000_000), "22\u{a0}000\u{a0}000");
        assert_eq!(format_fi(123_456_789), "123\u{a0}456\u{a0}789");
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(365), "365");
    }
}
