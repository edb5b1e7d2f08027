use crate::core::{PlotLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{FrameLayer, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive coordinates are relative to the plot area; backends translate
/// by `layout.margin` when drawing into the full `viewport`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub id: String,
    pub layout: PlotLayout,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(id: impl Into<String>, layout: PlotLayout) -> Self {
        Self {
            id: id.into(),
            layout,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport()
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn rects_in(&self, layer: FrameLayer) -> impl Iterator<Item = &RectPrimitive> {
        self.rects.iter().filter(move |rect| rect.layer == layer)
    }

    pub fn lines_in(&self, layer: FrameLayer) -> impl Iterator<Item = &LinePrimitive> {
        self.lines.iter().filter(move |line| line.layer == layer)
    }

    pub fn texts_in(&self, layer: FrameLayer) -> impl Iterator<Item = &TextPrimitive> {
        self.texts.iter().filter(move |text| text.layer == layer)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.layout.width,
                height: self.layout.height,
            });
        }
        if self.id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "frame id must not be empty".to_owned(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
