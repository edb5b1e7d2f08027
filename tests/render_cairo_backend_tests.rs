#![cfg(feature = "cairo-backend")]

use binchart::core::{Color, PlotLayout, Record};
use binchart::render::{DEFAULT_EXPORT_SCALE, PngExporter, Renderer};
use binchart::{ChartConfig, ChartEngine, ChartError};

fn records() -> Vec<Record> {
    ["5", "1", "35", "55", "6", "3", "34", "76", "23", "64"]
        .iter()
        .map(|value| Record::new().with_field("value", *value))
        .collect()
}

#[test]
fn exporter_rejects_invalid_scale() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = PngExporter::new(dir.path())
        .with_scale(0.0)
        .expect_err("zero scale must fail");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn exporter_writes_png_named_after_chart_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ChartConfig::new("histogramInt", PlotLayout::default()).with_transition_ms(0);
    let mut engine = ChartEngine::histogram(PngExporter::new(dir.path()), config).expect("engine");
    engine.plot(&records()).expect("plot");

    let exporter = engine.into_renderer();
    let path = exporter.last_path().expect("written path").to_path_buf();
    assert_eq!(path, dir.path().join("histogramInt.png"));

    let bytes = std::fs::read(&path).expect("png bytes");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let stats = exporter.last_stats();
    // Bars plus the publish button.
    assert_eq!(stats.rects_drawn, 11);
    assert!(stats.lines_drawn >= 2);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn publish_click_exports_through_png_exporter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut exporter = PngExporter::new(dir.path())
        .with_scale(DEFAULT_EXPORT_SCALE)
        .expect("scale")
        .with_background(Color::WHITE)
        .expect("background");
    let config = ChartConfig::default().with_transition_ms(0);
    let mut engine = ChartEngine::histogram(binchart::render::NullRenderer::default(), config)
        .expect("engine");
    engine.plot(&records()).expect("plot");

    assert!(engine.click(730.0, 40.0, &mut exporter).expect("click"));
    assert_eq!(exporter.last_path(), Some(exporter.path_for("chart").as_path()));
    assert!(exporter.path_for("chart").exists());
}

#[test]
fn exporter_reports_unwritable_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut exporter = PngExporter::new(dir.path().join("missing"));
    let mut engine =
        ChartEngine::histogram(binchart::render::NullRenderer::default(), ChartConfig::default())
            .expect("engine");
    engine.plot(&records()).expect("plot");
    let frame = engine.build_frame().expect("frame");
    let err = exporter.render(&frame).expect_err("missing dir");
    assert!(matches!(err, ChartError::Export(_)));
}
