use serde::{Deserialize, Serialize};

use crate::core::{Color, PlotLayout};
use crate::render::{FrameLayer, RectPrimitive};

pub const PUBLISH_BUTTON_SIZE_PX: f64 = 50.0;
pub const PUBLISH_IDLE_ALPHA: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PublishButtonState {
    #[default]
    Idle,
    Hovered,
    /// Clicked; fully transparent until the pointer leaves.
    Pressed,
}

/// Square "save as image" button pinned to the top-right of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PublishButton {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    state: PublishButtonState,
}

impl PublishButton {
    #[must_use]
    pub fn for_layout(layout: PlotLayout) -> Self {
        Self {
            x: layout.inner_width() - PUBLISH_BUTTON_SIZE_PX,
            y: 0.0,
            size: PUBLISH_BUTTON_SIZE_PX,
            state: PublishButtonState::Idle,
        }
    }

    #[must_use]
    pub fn state(self) -> PublishButtonState {
        self.state
    }

    /// Hit test in plot-area coordinates.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.size && y >= self.y && y <= self.y + self.size
    }

    /// Applies a pointer position; returns `true` when the state changed.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        let next = match (self.contains(x, y), self.state) {
            (true, PublishButtonState::Idle) => PublishButtonState::Hovered,
            (true, state) => state,
            (false, _) => PublishButtonState::Idle,
        };
        self.transition_to(next)
    }

    pub fn pointer_left(&mut self) -> bool {
        self.transition_to(PublishButtonState::Idle)
    }

    /// Registers a click; returns `true` when it landed on the button.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.state = PublishButtonState::Pressed;
        true
    }

    #[must_use]
    pub fn fill(self) -> Color {
        let alpha = match self.state {
            PublishButtonState::Idle => PUBLISH_IDLE_ALPHA,
            PublishButtonState::Hovered => 1.0,
            PublishButtonState::Pressed => 0.0,
        };
        Color::BLACK.with_alpha(alpha)
    }

    #[must_use]
    pub fn rect(self) -> RectPrimitive {
        RectPrimitive::new(
            self.x,
            self.y,
            self.size,
            self.size,
            self.fill(),
            FrameLayer::Publish,
        )
    }

    fn transition_to(&mut self, next: PublishButtonState) -> bool {
        let changed = self.state != next;
        self.state = next;
        changed
    }
}
