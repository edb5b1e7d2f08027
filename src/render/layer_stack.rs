use serde::{Deserialize, Serialize};

/// Drawing layer a primitive belongs to; later layers paint over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameLayer {
    Bars,
    BarLabels,
    XAxis,
    YAxis,
    Publish,
}

impl FrameLayer {
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Bars,
        Self::BarLabels,
        Self::XAxis,
        Self::YAxis,
        Self::Publish,
    ];

    /// CSS class of the group wrapping this layer in SVG output.
    #[must_use]
    pub fn group_class(self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::BarLabels => "labels",
            Self::XAxis => "x axis",
            Self::YAxis => "y axis",
            Self::Publish => "pub",
        }
    }

    /// CSS class of each rectangle drawn in this layer, if any.
    #[must_use]
    pub fn rect_class(self) -> Option<&'static str> {
        match self {
            Self::Bars => Some("bar"),
            Self::Publish => Some("pub-button"),
            Self::BarLabels | Self::XAxis | Self::YAxis => None,
        }
    }
}
