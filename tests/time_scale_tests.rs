use binchart::core::primitives::{MILLIS_PER_DAY, datetime_to_unix_millis};
use binchart::core::{Scale, TimeInterval, TimeScale, TimeUnit};
use chrono::{NaiveDate, NaiveDateTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

#[test]
fn time_scale_is_linear_in_milliseconds() {
    let scale = TimeScale::new((date(2004, 4, 7), date(2004, 4, 20)), (0.0, 740.0))
        .expect("valid time scale");
    assert_eq!(scale.forward_datetime(date(2004, 4, 7)), 0.0);
    assert_eq!(scale.forward_datetime(date(2004, 4, 20)), 740.0);

    let midpoint = datetime_to_unix_millis(date(2004, 4, 7)) + 6.5 * MILLIS_PER_DAY;
    assert!((scale.forward(midpoint) - 370.0).abs() <= 1e-9);
}

#[test]
fn invert_returns_calendar_time() {
    let scale = TimeScale::new((date(2005, 1, 1), date(2005, 1, 11)), (0.0, 100.0))
        .expect("valid time scale");
    assert_eq!(scale.invert_datetime(50.0), Some(date(2005, 1, 6)));
}

#[test]
fn span_of_fifteen_months_picks_monthly_interval() {
    let start = datetime_to_unix_millis(date(2004, 4, 15));
    let end = datetime_to_unix_millis(date(2005, 7, 14));
    assert_eq!(
        TimeInterval::for_span(start, end, 10),
        TimeInterval::new(TimeUnit::Month, 1)
    );
}

#[test]
fn nice_floors_and_ceils_to_month_boundaries() {
    let scale = TimeScale::new((date(2004, 4, 15), date(2005, 7, 14)), (0.0, 740.0))
        .expect("valid time scale")
        .nice_default();
    assert_eq!(
        scale.domain_datetimes(),
        Some((date(2004, 4, 1), date(2005, 8, 1)))
    );
}

#[test]
fn nice_keeps_day_aligned_domain_for_daily_interval() {
    let scale = TimeScale::new((date(2004, 4, 7), date(2004, 4, 20)), (0.0, 740.0))
        .expect("valid time scale")
        .nice_default();
    assert_eq!(
        scale.domain_datetimes(),
        Some((date(2004, 4, 7), date(2004, 4, 20)))
    );
}

#[test]
fn ticks_use_multi_scale_labels() {
    let scale = TimeScale::new((date(2004, 4, 1), date(2005, 8, 1)), (0.0, 740.0))
        .expect("valid time scale");
    let ticks = scale.ticks(10);
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"April"));
    assert!(labels.contains(&"2005"));
    assert_eq!(labels.last(), Some(&"August"));
    assert_eq!(ticks.len(), 17);
}

#[test]
fn degenerate_time_domain_is_left_alone() {
    let scale = TimeScale::new((date(2004, 4, 15), date(2004, 4, 15)), (0.0, 100.0))
        .expect("valid time scale")
        .nice_default();
    assert_eq!(
        scale.domain_datetimes(),
        Some((date(2004, 4, 15), date(2004, 4, 15)))
    );
    assert_eq!(scale.forward_datetime(date(2004, 4, 15)), 50.0);
}
