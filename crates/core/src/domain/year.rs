use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Total seconds in the given calendar year (365 or 366 days)
pub fn seconds_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366 * SECONDS_PER_DAY
    } else {
        365 * SECONDS_PER_DAY
    }
}

/// Local midnight on Jan 1 of the instant's calendar year, in the instant's timezone.
///
/// Ambiguous midnights resolve to the earliest mapping. A midnight skipped by a
/// zone transition resolves to the first local minute after the gap.
pub fn start_of_year<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<Tz> {
    let date = instant.date_naive();
    let jan_first = date - Duration::days(i64::from(date.ordinal0()));
    let midnight = jan_first.and_time(NaiveTime::MIN);

    let tz = instant.timezone();
    (0..MINUTES_PER_DAY)
        .find_map(|minute| {
            tz.from_local_datetime(&(midnight + Duration::minutes(minute)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Whole seconds elapsed since [`start_of_year`], floored.
///
/// No clamping is applied; the caller is expected to pair this with the
/// instant's own year (see [`YearProgress::at`]).
pub fn elapsed_seconds_in_year<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    let start = start_of_year(instant);
    instant
        .clone()
        .signed_duration_since(start)
        .num_milliseconds()
        .div_euclid(1000)
}

/// Progress through a calendar year as of one instant. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearProgress {
    pub year: i32,
    pub total_seconds: i64,
    pub elapsed_seconds: i64,
}

impl YearProgress {
    /// Compute progress from the instant's own calendar year
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let year = instant.year();
        Self {
            year,
            total_seconds: seconds_in_year(year),
            elapsed_seconds: elapsed_seconds_in_year(instant),
        }
    }

    pub fn fraction(&self) -> f64 {
        self.elapsed_seconds as f64 / self.total_seconds as f64
    }

    /// Percentage complete with 6 decimal digits, without the `%` sign
    pub fn percent(&self) -> String {
        format!("{:.6}", self.fraction() * 100.0)
    }

    pub fn breakdown(&self) -> super::ElapsedBreakdown {
        super::ElapsedBreakdown::from_seconds(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_leap_year_spot_checks() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_seconds_in_year() {
        assert_eq!(seconds_in_year(2023), 31_536_000);
        assert_eq!(seconds_in_year(2024), 31_622_400);
        assert_eq!(seconds_in_year(1900), 31_536_000);
    }

    #[test]
    fn test_elapsed_at_start_of_year_is_zero() {
        assert_eq!(elapsed_seconds_in_year(&utc(2023, 1, 1, 0, 0, 0)), 0);
        assert_eq!(elapsed_seconds_in_year(&utc(2024, 1, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn test_elapsed_at_last_second_of_non_leap_year() {
        assert_eq!(
            elapsed_seconds_in_year(&utc(2023, 12, 31, 23, 59, 59)),
            31_535_999
        );
    }

    #[test]
    fn test_elapsed_floors_milliseconds() {
        let instant = utc(2023, 1, 1, 0, 0, 1) + Duration::milliseconds(999);
        assert_eq!(elapsed_seconds_in_year(&instant), 1);
    }

    #[test]
    fn test_start_of_year_uses_local_calendar_fields() {
        // 2024-01-01T02:00+05:00 is still 2023 in UTC; the local year wins
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let instant = tz.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();

        let start = start_of_year(&instant);
        assert_eq!(start, tz.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(elapsed_seconds_in_year(&instant), 2 * 3600);
        assert_eq!(YearProgress::at(&instant).year, 2024);
    }

    /// UTC-3 until 2024-01-01T03:00Z, UTC-2 after; local 00:00..01:00 on Jan 1 2024 never happens
    #[derive(Debug, Clone, Copy)]
    struct SkippedNewYear;

    impl SkippedNewYear {
        fn transition() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(3, 0, 0).unwrap()
        }

        fn before() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).unwrap()
        }

        fn after() -> FixedOffset {
            FixedOffset::west_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for SkippedNewYear {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SkippedNewYear
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
            let valid = |offset: FixedOffset| {
                let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
                (utc < Self::transition()) == (offset == Self::before())
            };
            match (valid(Self::before()), valid(Self::after())) {
                (true, true) => MappedLocalTime::Ambiguous(Self::before(), Self::after()),
                (true, false) => MappedLocalTime::Single(Self::before()),
                (false, true) => MappedLocalTime::Single(Self::after()),
                (false, false) => MappedLocalTime::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::transition() {
                Self::before()
            } else {
                Self::after()
            }
        }
    }

    #[test]
    fn test_skipped_midnight_resolves_past_the_gap() {
        let transition = SkippedNewYear.from_utc_datetime(&SkippedNewYear::transition());
        // 2024-12-31T23:30 local, the last half hour of the year
        let late = SkippedNewYear.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(1, 30, 0).unwrap(),
        );
        assert_eq!(late.year(), 2024);

        assert_eq!(start_of_year(&late), transition);

        let progress = YearProgress::at(&late);
        assert_eq!(progress.elapsed_seconds, 366 * SECONDS_PER_DAY - 90 * 60);
        assert!(progress.elapsed_seconds < progress.total_seconds);
    }

    #[test]
    fn test_year_progress_values() {
        let progress = YearProgress::at(&utc(2023, 1, 2, 0, 0, 0));
        assert_eq!(progress.year, 2023);
        assert_eq!(progress.total_seconds, 31_536_000);
        assert_eq!(progress.elapsed_seconds, 86_400);
        assert_eq!(progress.percent(), "0.273973");
    }

    #[test]
    fn test_percent_at_start_of_year() {
        let progress = YearProgress::at(&utc(2025, 1, 1, 0, 0, 0));
        assert_eq!(progress.percent(), "0.000000");
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn test_mid_leap_year_is_half() {
        // 2024 has 366 days; midnight starting July 2 is 183 days in
        let progress = YearProgress::at(&utc(2024, 7, 2, 0, 0, 0));
        assert_eq!(progress.elapsed_seconds, 183 * SECONDS_PER_DAY);
        assert_eq!(progress.percent(), "50.000000");
    }
}
