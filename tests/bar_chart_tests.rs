use approx::assert_relative_eq;
use binchart::ChartError;
use binchart::api::{ChartConfig, ChartKind, drawable_bars, prepare_bar_chart};
use binchart::core::primitives::{MILLIS_PER_DAY, date_to_unix_millis};
use binchart::core::{Record, Scale, ValueKind, records_from_json};
use chrono::NaiveDate;

const DATE_BARS: &str = r#"[
    {"start_date":"2004-04-07","value":2},{"start_date":"2004-04-09","value":2},
    {"start_date":"2004-04-12","value":2},{"start_date":"2004-04-13","value":2},
    {"start_date":"2004-04-14","value":2},{"start_date":"2004-04-15","value":2},
    {"start_date":"2004-04-16","value":6},{"start_date":"2004-04-17","value":2},
    {"start_date":"2004-04-18","value":10},{"start_date":"2004-04-19","value":8}
]"#;

fn millis(y: i32, m: u32, d: u32) -> f64 {
    date_to_unix_millis(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
}

fn date_config() -> ChartConfig {
    ChartConfig::default().with_value_kind(ValueKind::Date)
}

#[test]
fn domain_ends_one_day_after_last_record() {
    let records = records_from_json(DATE_BARS).expect("records");
    let state = prepare_bar_chart(&date_config(), &records).expect("bar state");

    assert_eq!(state.kind, ChartKind::Bar);
    assert_eq!(
        state.width_scale.domain(),
        (millis(2004, 4, 7), millis(2004, 4, 20))
    );
    assert!(state.bins.is_empty());
    assert_eq!(state.points.len(), 10);
    assert_eq!(state.points[0].end - state.points[0].start, MILLIS_PER_DAY);
}

#[test]
fn bar_width_divides_plot_by_days_spanned() {
    let records = records_from_json(DATE_BARS).expect("records");
    let state = prepare_bar_chart(&date_config(), &records).expect("bar state");
    let bars = drawable_bars(&state);

    assert_relative_eq!(state.bar_width_px, 740.0 / 13.0);
    for bar in &bars {
        assert_relative_eq!(bar.width, 740.0 / 13.0);
    }
    assert_eq!(bars[0].x, 0.0);
    assert_eq!(bars[1].x, 114.0);
}

#[test]
fn bar_heights_follow_values_against_zero_baseline() {
    let records = records_from_json(DATE_BARS).expect("records");
    let state = prepare_bar_chart(&date_config(), &records).expect("bar state");
    let bars = drawable_bars(&state);

    assert_eq!(state.height_scale.domain(), (0.0, 10.0));
    // value 10
    assert_eq!(bars[8].y, 0.0);
    assert_eq!(bars[8].height, 190.0);
    // value 2
    assert_relative_eq!(bars[0].y, 152.0, epsilon = 1e-9);
    assert_relative_eq!(bars[0].height, 38.0, epsilon = 1e-9);
    assert_eq!(bars[8].fill, state.colour_scale.stops().1);
}

#[test]
fn numeric_x_uses_unit_slots() {
    let records: Vec<Record> = [(1.0, 3.0), (2.0, 6.0), (4.0, 1.0)]
        .into_iter()
        .map(|(x, y)| Record::new().with_field("start_date", x).with_field("value", y))
        .collect();
    let config = ChartConfig::default().with_nice(false);
    let state = prepare_bar_chart(&config, &records).expect("bar state");

    assert_eq!(state.width_scale.domain(), (1.0, 5.0));
    assert_relative_eq!(state.bar_width_px, 740.0 / 4.0);
    let bars = drawable_bars(&state);
    assert_eq!(bars[2].x, 555.0);
}

#[test]
fn negative_values_draw_as_empty_bars() {
    let records: Vec<Record> = [(1.0, -3.0), (2.0, 6.0)]
        .into_iter()
        .map(|(x, y)| Record::new().with_field("start_date", x).with_field("value", y))
        .collect();
    let state = prepare_bar_chart(&ChartConfig::default(), &records).expect("bar state");
    let bars = drawable_bars(&state);
    assert_eq!(bars[0].height, 0.0);
    assert_eq!(bars[0].y, 190.0);
}

#[test]
fn all_zero_values_rest_on_baseline() {
    let records: Vec<Record> = [(1.0, 0.0), (2.0, 0.0)]
        .into_iter()
        .map(|(x, y)| Record::new().with_field("start_date", x).with_field("value", y))
        .collect();
    let state = prepare_bar_chart(&ChartConfig::default(), &records).expect("bar state");
    for bar in drawable_bars(&state) {
        assert_eq!(bar.height, 0.0);
    }
}

#[test]
fn missing_value_field_names_the_record() {
    let records = records_from_json(
        r#"[{"start_date":"2004-04-07","value":2},{"start_date":"2004-04-08"}]"#,
    )
    .expect("records");
    let err = prepare_bar_chart(&date_config(), &records).expect_err("missing y");
    match err {
        ChartError::MissingField { field, index } => {
            assert_eq!(field, "value");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_field_names_are_honoured() {
    let records = records_from_json(r#"[{"day":"2004-04-07","amount":"4"}]"#).expect("records");
    let config = date_config().with_x_label("day").with_y_label("amount");
    let state = prepare_bar_chart(&config, &records).expect("bar state");
    assert_eq!(state.points[0].value, 4.0);
    assert_relative_eq!(state.bar_width_px, 740.0);
}
