use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Date layout accepted for temporal fields, e.g. `2004-04-15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MILLIS_PER_SECOND: f64 = 1_000.0;
pub const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
pub const MILLIS_PER_MONTH: f64 = 30.0 * MILLIS_PER_DAY;
pub const MILLIS_PER_YEAR: f64 = 365.0 * MILLIS_PER_DAY;

pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
}

/// Midnight UTC of `date` as milliseconds since the Unix epoch.
#[must_use]
pub fn date_to_unix_millis(date: NaiveDate) -> f64 {
    datetime_to_unix_millis(date.and_time(NaiveTime::MIN))
}

#[must_use]
pub fn datetime_to_unix_millis(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64
}

#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<NaiveDateTime> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64).map(|time| time.naive_utc())
}

/// Formats `value` with a fixed number of decimals and `,` thousands grouping.
#[must_use]
pub fn format_grouped(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3 + 1);
    let negative = value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{date_to_unix_millis, format_grouped, parse_date, unix_millis_to_datetime};

    #[test]
    fn parse_date_round_trips_through_millis_without_drift() {
        let date = parse_date("2004-04-15").expect("valid date");
        let millis = date_to_unix_millis(date);
        let back = unix_millis_to_datetime(millis).expect("in range");
        assert_eq!(back.date(), date);
        assert_eq!(millis % 86_400_000.0, 0.0);
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        assert!(parse_date("15/04/2004").is_err());
        assert!(parse_date("2004-13-01").is_err());
    }

    #[test]
    fn grouping_inserts_thousands_separators() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(1234.0, 0), "1,234");
        assert_eq!(format_grouped(-1234567.25, 2), "-1,234,567.25");
        assert_eq!(format_grouped(-0.001, 1), "0.0");
    }
}
