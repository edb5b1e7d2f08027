pub mod bins;
pub mod color;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use bins::{
    Bin, BinThresholds, DEFAULT_BIN_COUNT, bin_with_thresholds, compute_bins, extent,
    resolve_bin_count, uniform_thresholds,
};
pub use color::{Color, ColorScale};
pub use record::{RawValue, Record, ValueKind, parse_field, parse_pairs, records_from_json};
pub use scale::{LinearScale, Scale};
pub use ticks::{DEFAULT_TICK_COUNT, Tick};
pub use time_scale::{TimeInterval, TimeScale, TimeUnit, format_time_tick};
pub use types::{Margin, PlotLayout, Viewport};
