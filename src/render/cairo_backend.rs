use std::fs::File;
use std::path::{Path, PathBuf};

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::render::{FrameLayer, RenderFrame, Renderer, TextHAlign};

/// Raster scale applied to exported images.
pub const DEFAULT_EXPORT_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngExportStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango renderer that saves each frame as `<id>.png`.
///
/// Frames are rasterized at `scale` times their viewport size over an opaque
/// background, so the file matches what a "save as image" action produces.
#[derive(Debug)]
pub struct PngExporter {
    output_dir: PathBuf,
    scale: f64,
    background: Color,
    last_stats: PngExportStats,
    last_path: Option<PathBuf>,
}

impl PngExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            scale: DEFAULT_EXPORT_SCALE,
            background: Color::WHITE,
            last_stats: PngExportStats::default(),
            last_path: None,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> ChartResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::Config(
                "export scale must be finite and > 0".to_owned(),
            ));
        }
        self.scale = scale;
        Ok(self)
    }

    pub fn with_background(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.background = color;
        Ok(self)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn last_stats(&self) -> PngExportStats {
        self.last_stats
    }

    #[must_use]
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    /// File the frame with `id` is written to.
    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.output_dir.join(format!("{id}.png"))
    }

    fn draw(&self, context: &Context, frame: &RenderFrame) -> ChartResult<PngExportStats> {
        apply_color(context, self.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        context.scale(self.scale, self.scale);
        context.translate(frame.layout.margin.left, frame.layout.margin.top);

        let mut stats = PngExportStats::default();
        for layer in FrameLayer::CANONICAL_ORDER {
            for rect in frame.rects_in(layer) {
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                apply_color(context, rect.fill_color);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                stats.rects_drawn += 1;
            }

            for line in frame.lines_in(layer) {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }

            for text in frame.texts_in(layer) {
                let layout = pangocairo::functions::create_layout(context);
                let font_description =
                    FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, _) = layout.pixel_size();
                let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };

                apply_color(context, text.color);
                context.move_to(x, text.y - baseline);
                pangocairo::functions::show_layout(context, &layout);
                stats.texts_drawn += 1;
            }
        }

        Ok(stats)
    }
}

impl Renderer for PngExporter {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.background.validate()?;

        let width = (f64::from(frame.layout.width) * self.scale).round() as i32;
        let height = (f64::from(frame.layout.height) * self.scale).round() as i32;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let stats = self.draw(&context, frame)?;
        drop(context);

        let path = self.path_for(&frame.id);
        let mut file = File::create(&path).map_err(|err| {
            ChartError::Export(format!("failed to create {}: {err}", path.display()))
        })?;
        surface.write_to_png(&mut file).map_err(|err| {
            ChartError::Export(format!("failed to encode {}: {err}", path.display()))
        })?;

        self.last_stats = stats;
        self.last_path = Some(path);
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Export(format!("{prefix}: {err}"))
}
