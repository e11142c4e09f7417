//! Human-relative timestamps ("3 days ago") for the post table.
//!
//! Buckets follow the usual natural-time conventions: seconds, minutes and
//! hours under a day, then days, 30.5-day months and 365-day years.
//! Timestamps in the future (clock skew) read as "now".

use std::fmt;

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// A rounded age. Variants are declared youngest first, so the derived
/// ordering sorts ages from newest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Age {
    Now,
    Second,
    Seconds(i64),
    Minute,
    Minutes(i64),
    Hour,
    Hours(i64),
    Day,
    Days(i64),
    Month,
    Months(i64),
    Year,
    YearAndDays(i64),
    YearAndMonth,
    YearAndMonths(i64),
    Years(i64),
}

impl Age {
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_seconds((now - then).num_seconds())
    }

    pub fn from_seconds(elapsed: i64) -> Self {
        if elapsed <= 0 {
            return Age::Now;
        }

        let total_days = elapsed / DAY;
        let years = total_days / 365;
        let days = total_days % 365;
        let months = (days as f64 / 30.5) as i64;

        match years {
            0 if total_days == 0 => match elapsed {
                1 => Age::Second,
                s if s < MINUTE => Age::Seconds(s),
                s if s < 2 * MINUTE => Age::Minute,
                s if s < HOUR => Age::Minutes(s / MINUTE),
                s if s < 2 * HOUR => Age::Hour,
                s => Age::Hours(s / HOUR),
            },
            0 => match (days, months) {
                (1, _) => Age::Day,
                (d, 0) => Age::Days(d),
                (_, 1) => Age::Month,
                (_, m) => Age::Months(m),
            },
            1 => match (days, months) {
                (0, _) => Age::Year,
                (d, 0) => Age::YearAndDays(d),
                (_, 1) => Age::YearAndMonth,
                (_, m) => Age::YearAndMonths(m),
            },
            y => Age::Years(y),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Now => return write!(f, "now"),
            Age::Second => write!(f, "a second"),
            Age::Seconds(n) => write!(f, "{n} seconds"),
            Age::Minute => write!(f, "a minute"),
            Age::Minutes(n) => write!(f, "{n} minutes"),
            Age::Hour => write!(f, "an hour"),
            Age::Hours(n) => write!(f, "{n} hours"),
            Age::Day => write!(f, "a day"),
            Age::Days(n) => write!(f, "{n} days"),
            Age::Month => write!(f, "a month"),
            Age::Months(n) => write!(f, "{n} months"),
            Age::Year => write!(f, "a year"),
            Age::YearAndDays(1) => write!(f, "1 year, 1 day"),
            Age::YearAndDays(n) => write!(f, "1 year, {n} days"),
            Age::YearAndMonth => write!(f, "1 year, 1 month"),
            Age::YearAndMonths(n) => write!(f, "1 year, {n} months"),
            Age::Years(n) => write!(f, "{n} years"),
        }?;
        write!(f, " ago")
    }
}

/// "3 days ago", "an hour ago", "now".
pub fn natural_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    Age::between(then, now).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(seconds: i64) -> String {
        Age::from_seconds(seconds).to_string()
    }

    #[test]
    fn test_labels() {
        assert_eq!(ago(0), "now");
        assert_eq!(ago(1), "a second ago");
        assert_eq!(ago(30), "30 seconds ago");
        assert_eq!(ago(90), "a minute ago");
        assert_eq!(ago(5 * MINUTE), "5 minutes ago");
        assert_eq!(ago(HOUR + 5), "an hour ago");
        assert_eq!(ago(5 * HOUR), "5 hours ago");
        assert_eq!(ago(DAY), "a day ago");
        assert_eq!(ago(3 * DAY), "3 days ago");
        assert_eq!(ago(30 * DAY), "30 days ago");
        assert_eq!(ago(45 * DAY), "a month ago");
        assert_eq!(ago(200 * DAY), "6 months ago");
        assert_eq!(ago(365 * DAY), "a year ago");
        assert_eq!(ago(366 * DAY), "1 year, 1 day ago");
        assert_eq!(ago(380 * DAY), "1 year, 15 days ago");
        assert_eq!(ago(400 * DAY), "1 year, 1 month ago");
        assert_eq!(ago(500 * DAY), "1 year, 4 months ago");
        assert_eq!(ago(3 * 365 * DAY), "3 years ago");
    }

    #[test]
    fn test_future_reads_as_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(natural_time(now + Duration::minutes(3), now), "now");
    }

    #[test]
    fn test_natural_time_uses_reference_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let then = now - Duration::days(3) - Duration::hours(2);
        assert_eq!(natural_time(then, now), "3 days ago");
    }

    #[test]
    fn test_age_is_monotonic() {
        // Sample densely across every bucket boundary up to ten years.
        let mut samples: Vec<i64> = (0..=3 * HOUR).step_by(7).collect();
        samples.extend((3 * HOUR..=3 * DAY).step_by(601));
        samples.extend((3 * DAY..=10 * 365 * DAY).step_by(3_607));
        samples.extend([
            DAY - 1, DAY, 2 * DAY - 1, 2 * DAY, 30 * DAY, 31 * DAY, 61 * DAY,
            364 * DAY, 365 * DAY, 366 * DAY, 395 * DAY, 396 * DAY, 730 * DAY,
        ]);
        samples.sort_unstable();

        for pair in samples.windows(2) {
            let (younger, older) = (Age::from_seconds(pair[0]), Age::from_seconds(pair[1]));
            assert!(
                younger <= older,
                "{}s => {:?} ranked after {}s => {:?}",
                pair[0],
                younger,
                pair[1],
                older
            );
        }
    }
}
