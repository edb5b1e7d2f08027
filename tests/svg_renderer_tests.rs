use binchart::core::{PlotLayout, Record};
use binchart::render::{FrameLayer, SvgRenderer};
use binchart::{ChartConfig, ChartEngine, ChartError};

fn records() -> Vec<Record> {
    ["5", "1", "35", "55", "6", "3", "34", "76"]
        .iter()
        .map(|value| Record::new().with_field("value", *value))
        .collect()
}

fn rendered_engine(id: &str) -> ChartEngine<SvgRenderer> {
    let config = ChartConfig::new(id, PlotLayout::default()).with_transition_ms(0);
    let mut engine = ChartEngine::histogram(SvgRenderer::new(), config).expect("engine");
    engine.plot(&records()).expect("plot");
    engine
}

#[test]
fn document_carries_chart_id_and_container_class() {
    let engine = rendered_engine("histogramInt");
    let document = engine.renderer().last_document().expect("document");

    assert!(document.starts_with("<svg"));
    assert!(document.contains(r#"id="histogramInt""#));
    assert!(document.contains(r#"class="graph svg""#));
    assert!(document.contains(r#"width="800""#));
    assert!(document.contains(r#"height="250""#));
    assert!(document.contains("translate(30,30)"));
}

#[test]
fn document_contains_bars_axes_and_publish_button() {
    let engine = rendered_engine("chart");
    let document = engine.renderer().last_document().expect("document");

    let frame = engine.build_frame().expect("frame");
    let bars = frame.rects_in(FrameLayer::Bars).count();
    assert_eq!(document.matches(r#"class="bar""#).count(), bars);
    assert!(document.contains(r#"class="x axis""#));
    assert!(document.contains(r#"class="y axis""#));
    assert!(document.contains(r#"class="pub-button""#));
    assert!(document.contains("cursor: pointer"));
}

#[test]
fn every_render_replaces_the_last_document() {
    let mut engine = rendered_engine("chart");
    let before = engine.renderer().documents_rendered();
    engine.pointer_moved(730.0, 40.0).expect("hover");
    assert_eq!(engine.renderer().documents_rendered(), before + 1);
}

#[test]
fn save_writes_last_document_to_disk() {
    let engine = rendered_engine("saved");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.svg");
    engine.renderer().save(&path).expect("save");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, engine.renderer().last_document().expect("document"));
}

#[test]
fn save_before_render_is_an_export_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SvgRenderer::new()
        .save(dir.path().join("empty.svg"))
        .expect_err("nothing rendered");
    assert!(matches!(err, ChartError::Export(_)));
}
