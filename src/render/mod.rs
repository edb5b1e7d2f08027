mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use crate::core::Color;
pub use frame::RenderFrame;
pub use layer_stack::FrameLayer;
pub use null_renderer::NullRenderer;
pub use primitives::{LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::{SvgRenderer, frame_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from scales, binning and chart state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{DEFAULT_EXPORT_SCALE, PngExportStats, PngExporter};
