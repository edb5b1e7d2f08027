//! binchart: histogram and bar-chart geometry over linear and time scales.
//!
//! The crate keeps a strict split between pure chart math (`core`), chart
//! orchestration (`api`) and drawing backends (`render`). Records go in,
//! a backend-agnostic `RenderFrame` comes out, and any `Renderer` (SVG by
//! default, PNG with the `cairo-backend` feature) draws it.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
