use std::path::Path;

use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text};

use crate::error::{ChartError, ChartResult};
use crate::render::{FrameLayer, RenderFrame, Renderer};

const FONT_FAMILY: &str = "sans-serif";

/// Renders frames into standalone SVG documents.
///
/// The document mirrors the container layout: an outer `<svg>` carrying the
/// chart id and full size, one translated `<g>` for the plot area, and one
/// classed group per non-empty frame layer.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
    documents_rendered: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn documents_rendered(&self) -> usize {
        self.documents_rendered
    }

    /// Writes the most recent document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let document = self.last_document.as_deref().ok_or_else(|| {
            ChartError::Export("no frame has been rendered yet".to_owned())
        })?;
        std::fs::write(path.as_ref(), document).map_err(|err| {
            ChartError::Export(format!(
                "failed to write svg to {}: {err}",
                path.as_ref().display()
            ))
        })
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_document = Some(frame_to_svg(frame).to_string());
        self.documents_rendered += 1;
        Ok(())
    }
}

/// Builds the SVG document for `frame` without validating it.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> Document {
    let layout = frame.layout;
    let mut plot = Group::new().set(
        "transform",
        format!("translate({},{})", layout.margin.left, layout.margin.top),
    );

    for layer in FrameLayer::CANONICAL_ORDER {
        if let Some(group) = layer_group(frame, layer) {
            plot = plot.add(group);
        }
    }

    Document::new()
        .set("id", frame.id.as_str())
        .set("class", "graph svg")
        .set("width", layout.width)
        .set("height", layout.height)
        .set("viewBox", format!("0 0 {} {}", layout.width, layout.height))
        .add(plot)
}

fn layer_group(frame: &RenderFrame, layer: FrameLayer) -> Option<Group> {
    let mut group = Group::new().set("class", layer.group_class());
    let mut empty = true;

    for rect in frame.rects_in(layer) {
        let mut element = Rectangle::new()
            .set("x", rect.x)
            .set("y", rect.y)
            .set("width", rect.width)
            .set("height", rect.height)
            .set("fill", rect.fill_color.to_css());
        if let Some(class) = layer.rect_class() {
            element = element.set("class", class);
        }
        if layer == FrameLayer::Publish {
            element = element.set("style", "cursor: pointer");
        }
        group = group.add(element);
        empty = false;
    }

    for line in frame.lines_in(layer) {
        group = group.add(
            Line::new()
                .set("x1", line.x1)
                .set("y1", line.y1)
                .set("x2", line.x2)
                .set("y2", line.y2)
                .set("stroke", line.color.to_css())
                .set("stroke-width", line.stroke_width),
        );
        empty = false;
    }

    for text in frame.texts_in(layer) {
        group = group.add(
            Text::new(text.text.as_str())
                .set("x", text.x)
                .set("y", text.y)
                .set("fill", text.color.to_css())
                .set("font-family", FONT_FAMILY)
                .set("font-size", text.font_size_px)
                .set("text-anchor", text.h_align.text_anchor()),
        );
        empty = false;
    }

    if empty { None } else { Some(group) }
}
