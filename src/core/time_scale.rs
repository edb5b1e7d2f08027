use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_MONTH, MILLIS_PER_SECOND,
    MILLIS_PER_WEEK, MILLIS_PER_YEAR, datetime_to_unix_millis, unix_millis_to_datetime,
};
use crate::core::scale::{LinearScale, Scale};
use crate::core::ticks::{DEFAULT_TICK_COUNT, Tick, tick_step};
use crate::error::{ChartError, ChartResult};

const MAX_TIME_TICKS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A calendar interval such as "every 3 months", in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: u32,
}

/// Candidate tick intervals ordered by approximate duration.
const TICK_INTERVALS: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, MILLIS_PER_SECOND),
    (TimeUnit::Second, 5, 5.0 * MILLIS_PER_SECOND),
    (TimeUnit::Second, 15, 15.0 * MILLIS_PER_SECOND),
    (TimeUnit::Second, 30, 30.0 * MILLIS_PER_SECOND),
    (TimeUnit::Minute, 1, MILLIS_PER_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * MILLIS_PER_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * MILLIS_PER_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * MILLIS_PER_MINUTE),
    (TimeUnit::Hour, 1, MILLIS_PER_HOUR),
    (TimeUnit::Hour, 3, 3.0 * MILLIS_PER_HOUR),
    (TimeUnit::Hour, 6, 6.0 * MILLIS_PER_HOUR),
    (TimeUnit::Hour, 12, 12.0 * MILLIS_PER_HOUR),
    (TimeUnit::Day, 1, MILLIS_PER_DAY),
    (TimeUnit::Day, 2, 2.0 * MILLIS_PER_DAY),
    (TimeUnit::Week, 1, MILLIS_PER_WEEK),
    (TimeUnit::Month, 1, MILLIS_PER_MONTH),
    (TimeUnit::Month, 3, 3.0 * MILLIS_PER_MONTH),
    (TimeUnit::Year, 1, MILLIS_PER_YEAR),
];

impl TimeInterval {
    #[must_use]
    pub const fn new(unit: TimeUnit, step: u32) -> Self {
        Self {
            unit,
            step: if step == 0 { 1 } else { step },
        }
    }

    /// Interval whose duration is closest to `span / count`.
    #[must_use]
    pub fn for_span(start_ms: f64, end_ms: f64, count: usize) -> Self {
        let count = count.max(1);
        let target = (end_ms - start_ms).abs() / count as f64;
        let index = TICK_INTERVALS.partition_point(|(_, _, duration)| *duration <= target);

        if index == TICK_INTERVALS.len() {
            let years = tick_step(start_ms / MILLIS_PER_YEAR, end_ms / MILLIS_PER_YEAR, count)
                .abs()
                .max(1.0);
            return Self::new(TimeUnit::Year, years.round() as u32);
        }
        if index == 0 {
            return Self::new(TimeUnit::Second, 1);
        }

        let (below_unit, below_step, below_duration) = TICK_INTERVALS[index - 1];
        let (above_unit, above_step, above_duration) = TICK_INTERVALS[index];
        if target / below_duration < above_duration / target {
            Self::new(below_unit, below_step)
        } else {
            Self::new(above_unit, above_step)
        }
    }

    /// Latest interval boundary at or before `time`.
    #[must_use]
    pub fn floor(self, time: NaiveDateTime) -> NaiveDateTime {
        let step = self.step;
        let date = time.date();
        match self.unit {
            TimeUnit::Second => {
                let second = time.second() - time.second() % step;
                at(date, time.hour(), time.minute(), second)
            }
            TimeUnit::Minute => {
                let minute = time.minute() - time.minute() % step;
                at(date, time.hour(), minute, 0)
            }
            TimeUnit::Hour => {
                let hour = time.hour() - time.hour() % step;
                at(date, hour, 0, 0)
            }
            TimeUnit::Day => {
                let back = (date.day() - 1) % step;
                midnight(date - Duration::days(i64::from(back)))
            }
            TimeUnit::Week => {
                let back = date.weekday().num_days_from_sunday();
                midnight(date - Duration::days(i64::from(back)))
            }
            TimeUnit::Month => {
                let month0 = date.month0() - date.month0() % step;
                first_of_month(date.year(), month0 + 1)
            }
            TimeUnit::Year => {
                let year = date.year() - date.year().rem_euclid(step as i32);
                first_of_month(year, 1)
            }
        }
    }

    /// Earliest interval boundary at or after `time`.
    #[must_use]
    pub fn ceil(self, time: NaiveDateTime) -> NaiveDateTime {
        let floor = self.floor(time);
        if floor == time {
            time
        } else {
            self.next(floor)
        }
    }

    /// Boundary following the boundary `time`.
    #[must_use]
    pub fn next(self, time: NaiveDateTime) -> NaiveDateTime {
        let step = i64::from(self.step);
        match self.unit {
            TimeUnit::Second => time + Duration::seconds(step),
            TimeUnit::Minute => time + Duration::minutes(step),
            TimeUnit::Hour => time + Duration::hours(step),
            TimeUnit::Day => {
                let candidate = time + Duration::days(step);
                let month_start = time
                    .date()
                    .with_day(1)
                    .and_then(|date| date.checked_add_months(Months::new(1)))
                    .map(midnight);
                match month_start {
                    Some(month_start) if month_start < candidate => month_start,
                    _ => candidate,
                }
            }
            TimeUnit::Week => time + Duration::weeks(step),
            TimeUnit::Month => time
                .checked_add_months(Months::new(self.step))
                .unwrap_or(NaiveDateTime::MAX),
            TimeUnit::Year => time
                .checked_add_months(Months::new(self.step.saturating_mul(12)))
                .unwrap_or(NaiveDateTime::MAX),
        }
    }

    /// Boundaries within `[start, end]`.
    #[must_use]
    pub fn range(self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut boundaries = Vec::new();
        let mut current = self.ceil(start);
        while current <= end && boundaries.len() < MAX_TIME_TICKS {
            boundaries.push(current);
            let next = self.next(current);
            if next <= current {
                break;
            }
            current = next;
        }
        boundaries
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn at(date: NaiveDate, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveTime::from_hms_opt(hour, minute, second)
        .map(|time| date.and_time(time))
        .unwrap_or_else(|| midnight(date))
}

fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(midnight)
        .unwrap_or(NaiveDateTime::MIN)
}

/// Picks the coarsest calendar field at which `time` is not a boundary and
/// formats with the matching pattern.
#[must_use]
pub fn format_time_tick(time: NaiveDateTime) -> String {
    let pattern = if time.nanosecond() != 0 {
        ".%3f"
    } else if time.second() != 0 {
        ":%S"
    } else if time.minute() != 0 {
        "%I:%M"
    } else if time.hour() != 0 {
        "%I %p"
    } else if time.day() != 1 {
        if time.weekday().num_days_from_sunday() != 0 {
            "%a %d"
        } else {
            "%b %d"
        }
    } else if time.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    time.format(pattern).to_string()
}

/// Linear scale over UTC milliseconds with calendar-aware nicing and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale over a domain given in milliseconds since the epoch.
    pub fn from_millis(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for bound in [domain.0, domain.1] {
            if unix_millis_to_datetime(bound).is_none() {
                return Err(ChartError::InvalidData(format!(
                    "time domain bound {bound} is outside the supported calendar range"
                )));
            }
        }
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> ChartResult<Self> {
        Self::from_millis(
            (
                datetime_to_unix_millis(domain.0),
                datetime_to_unix_millis(domain.1),
            ),
            range,
        )
    }

    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            linear: self.linear.rounded(),
        }
    }

    /// Floors the start and ceils the end to the interval chosen for `count`
    /// ticks across the current domain.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (start, end) = self.linear.domain();
        if start == end {
            return self;
        }
        let interval = TimeInterval::for_span(start, end, count);
        self.nice_to(interval)
    }

    #[must_use]
    pub fn nice_default(self) -> Self {
        self.nice(DEFAULT_TICK_COUNT)
    }

    #[must_use]
    pub fn nice_to(self, interval: TimeInterval) -> Self {
        let (start, end) = self.linear.domain();
        let reverse = end < start;
        let (lo, hi) = if reverse { (end, start) } else { (start, end) };
        let (Some(lo_time), Some(hi_time)) =
            (unix_millis_to_datetime(lo), unix_millis_to_datetime(hi))
        else {
            return self;
        };

        let lo = datetime_to_unix_millis(interval.floor(lo_time));
        let hi = datetime_to_unix_millis(interval.ceil(hi_time));
        let domain = if reverse { (hi, lo) } else { (lo, hi) };
        match LinearScale::new(domain, self.linear.range()) {
            Ok(linear) if self.linear.is_rounded() => Self {
                linear: linear.rounded(),
            },
            Ok(linear) => Self { linear },
            Err(_) => self,
        }
    }

    #[must_use]
    pub fn forward_datetime(self, time: NaiveDateTime) -> f64 {
        self.linear.forward(datetime_to_unix_millis(time))
    }

    #[must_use]
    pub fn invert_datetime(self, pixel: f64) -> Option<NaiveDateTime> {
        unix_millis_to_datetime(self.linear.invert(pixel))
    }

    #[must_use]
    pub fn domain_datetimes(self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = self.linear.domain();
        Some((unix_millis_to_datetime(start)?, unix_millis_to_datetime(end)?))
    }

    /// Tick boundaries in milliseconds, without labels.
    #[must_use]
    pub fn tick_values(self, count: usize) -> Vec<f64> {
        self.tick_times(count)
            .into_iter()
            .map(datetime_to_unix_millis)
            .collect()
    }

    fn tick_times(self, count: usize) -> Vec<NaiveDateTime> {
        let (start, end) = self.linear.domain();
        let (lo, hi) = if end < start { (end, start) } else { (start, end) };
        let (Some(lo_time), Some(hi_time)) =
            (unix_millis_to_datetime(lo), unix_millis_to_datetime(hi))
        else {
            return Vec::new();
        };
        if lo == hi {
            return vec![lo_time];
        }
        TimeInterval::for_span(lo, hi, count).range(lo_time, hi_time)
    }
}

impl Scale for TimeScale {
    fn forward(&self, value: f64) -> f64 {
        self.linear.forward(value)
    }

    fn invert(&self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    fn domain(&self) -> (f64, f64) {
        self.linear.domain()
    }

    fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    fn ticks(&self, count: usize) -> Vec<Tick> {
        self.tick_times(count)
            .into_iter()
            .map(|time| Tick {
                value: datetime_to_unix_millis(time),
                label: format_time_tick(time),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{TimeInterval, TimeUnit, format_time_tick};

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn every_second_day_restarts_each_month() {
        let interval = TimeInterval::new(TimeUnit::Day, 2);
        assert_eq!(interval.next(date(2005, 1, 31)), date(2005, 2, 1));
        assert_eq!(interval.floor(date(2005, 2, 4)), date(2005, 2, 3));
    }

    #[test]
    fn week_floor_lands_on_sunday() {
        let interval = TimeInterval::new(TimeUnit::Week, 1);
        // 2004-04-15 was a Thursday.
        assert_eq!(interval.floor(date(2004, 4, 15)), date(2004, 4, 11));
    }

    #[test]
    fn quarter_ceil_rolls_into_next_year() {
        let interval = TimeInterval::new(TimeUnit::Month, 3);
        assert_eq!(interval.ceil(date(2005, 11, 2)), date(2006, 1, 1));
        assert_eq!(interval.ceil(date(2005, 4, 1)), date(2005, 4, 1));
    }

    #[test]
    fn multi_scale_labels() {
        assert_eq!(format_time_tick(date(2005, 1, 1)), "2005");
        assert_eq!(format_time_tick(date(2005, 3, 1)), "March");
        assert_eq!(format_time_tick(date(2004, 4, 11)), "Apr 11");
        assert_eq!(format_time_tick(date(2004, 4, 15)), "Thu 15");
    }
}
