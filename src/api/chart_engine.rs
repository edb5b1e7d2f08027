use tracing::{debug, trace};

use crate::core::{Record, records_from_json};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::attributes::drawable_bars;
use super::bar_chart::prepare_bar_chart;
use super::chart_config::ChartConfig;
use super::chart_state::{ChartKind, ChartState, DrawableBar};
use super::histogram::{prepare_histogram, rebin_histogram};
use super::publish::PublishButton;
use super::render_frame_builder::{FrameInputs, build_chart_frame};
use super::transition::BarTransition;

/// Orchestrates one chart: prepare state, resolve bars, animate, draw.
///
/// The engine owns its renderer and is driven entirely by the host: data
/// arrives through `plot`/`update`, time through `advance_transition`, and
/// pointer input through `pointer_moved`/`pointer_left`/`click`. Pointer
/// coordinates are in viewport pixels (margins included).
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    kind: ChartKind,
    state: Option<ChartState>,
    displayed: Vec<DrawableBar>,
    transition: Option<BarTransition>,
    publish: Option<PublishButton>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn histogram(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::new(renderer, config, ChartKind::Histogram)
    }

    pub fn bar_chart(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::new(renderer, config, ChartKind::Bar)
    }

    fn new(renderer: R, config: ChartConfig, kind: ChartKind) -> ChartResult<Self> {
        config.validate()?;
        let publish = config
            .publish_button
            .then(|| PublishButton::for_layout(config.layout));
        Ok(Self {
            renderer,
            config,
            kind,
            state: None,
            displayed: Vec::new(),
            transition: None,
            publish,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn state(&self) -> Option<&ChartState> {
        self.state.as_ref()
    }

    /// Bars as currently drawn, mid-transition included.
    #[must_use]
    pub fn displayed_bars(&self) -> &[DrawableBar] {
        &self.displayed
    }

    /// Bars the running transition is heading to.
    #[must_use]
    pub fn target_bars(&self) -> Vec<DrawableBar> {
        match (&self.transition, &self.state) {
            (Some(transition), _) => transition.targets().to_vec(),
            (None, Some(state)) => drawable_bars(state),
            (None, None) => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_finished())
    }

    #[must_use]
    pub fn publish_button(&self) -> Option<PublishButton> {
        self.publish
    }

    /// Full render: rebuilds domain, scales and bars from `records`; bars
    /// grow from the baseline.
    pub fn plot(&mut self, records: &[Record]) -> ChartResult<()> {
        let state = self.prepare(records)?;
        let targets = drawable_bars(&state);
        debug!(
            id = %self.config.id,
            kind = ?self.kind,
            bars = targets.len(),
            "plot"
        );
        let transition =
            BarTransition::entering(targets, state.inner_height(), self.config.transition_ms);
        self.install(state, transition)
    }

    pub fn plot_json(&mut self, json: &str) -> ChartResult<()> {
        let records = records_from_json(json)?;
        self.plot(&records)
    }

    /// Re-renders with new records, tweening from the displayed bars.
    ///
    /// Histograms keep the previous width scale so only bar heights move.
    /// Without a previous render this behaves like `plot`.
    pub fn update(&mut self, records: &[Record]) -> ChartResult<()> {
        let Some(previous) = self.state.as_ref() else {
            return self.plot(records);
        };
        let state = match self.kind {
            ChartKind::Histogram => rebin_histogram(previous, &self.config, records)?,
            ChartKind::Bar => prepare_bar_chart(&self.config, records)?,
        };
        if self.is_transitioning() {
            debug!(id = %self.config.id, "replacing in-flight transition");
        }
        let transition = BarTransition::new(
            &self.displayed,
            drawable_bars(&state),
            state.inner_height(),
            self.config.transition_ms,
        );
        self.install(state, transition)
    }

    /// Highlights the chart: bars rise to `peak` then settle back on their
    /// current targets, the settle leg three times longer than the rise.
    pub fn pulse(&mut self, peak: &[DrawableBar]) -> ChartResult<()> {
        let targets = self.target_bars();
        let state = self.state.take().ok_or_else(|| {
            ChartError::InvalidData("chart has not been plotted yet".to_owned())
        })?;
        let transition = BarTransition::pulse(
            &self.displayed,
            peak,
            targets,
            state.inner_height(),
            self.config.transition_ms,
        );
        debug!(id = %self.config.id, bars = peak.len(), "pulse");
        self.install(state, transition)
    }

    /// Moves the transition clock and redraws; returns whether it is still
    /// running.
    pub fn advance_transition(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        let Some(transition) = self.transition.as_mut() else {
            return Ok(false);
        };
        transition.advance(elapsed_ms);
        self.displayed = transition.sample();
        let running = !transition.is_finished();
        trace!(progress = transition.progress(), "transition advanced");
        if !running {
            self.transition = None;
        }
        self.render()?;
        Ok(running)
    }

    pub fn finish_transition(&mut self) -> ChartResult<()> {
        if let Some(transition) = self.transition.as_mut() {
            transition.finish();
            self.displayed = transition.sample();
            self.transition = None;
            self.render()?;
        }
        Ok(())
    }

    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let state = self.state.as_ref().ok_or_else(|| {
            ChartError::InvalidData("chart has not been plotted yet".to_owned())
        })?;
        build_chart_frame(FrameInputs {
            id: &self.config.id,
            state,
            bars: &self.displayed,
            show_counts: self.config.show_counts,
            publish: self.publish,
        })
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Updates the publish button hover state; redraws when it changed.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let (px, py) = self.to_plot_space(x, y);
        let changed = self
            .publish
            .as_mut()
            .is_some_and(|button| button.pointer_moved(px, py));
        self.redraw_if(changed)
    }

    pub fn pointer_left(&mut self) -> ChartResult<bool> {
        let changed = self
            .publish
            .as_mut()
            .is_some_and(PublishButton::pointer_left);
        self.redraw_if(changed)
    }

    /// Handles a click; a hit on the publish button hands the current frame
    /// to `exporter` (typically a `PngExporter`). Returns whether an export
    /// happened.
    pub fn click<E: Renderer>(&mut self, x: f64, y: f64, exporter: &mut E) -> ChartResult<bool> {
        // Nothing to export yet; the button stays as it was.
        if self.state.is_none() {
            return Ok(false);
        }
        let (px, py) = self.to_plot_space(x, y);
        let hit = self
            .publish
            .as_mut()
            .is_some_and(|button| button.click(px, py));
        if !hit {
            return Ok(false);
        }
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        exporter.render(&frame)?;
        debug!(id = %self.config.id, "chart exported");
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn prepare(&self, records: &[Record]) -> ChartResult<ChartState> {
        match self.kind {
            ChartKind::Histogram => prepare_histogram(&self.config, records),
            ChartKind::Bar => prepare_bar_chart(&self.config, records),
        }
    }

    fn install(&mut self, state: ChartState, transition: BarTransition) -> ChartResult<()> {
        self.displayed = transition.sample();
        self.transition = if transition.is_finished() {
            None
        } else {
            Some(transition)
        };
        self.state = Some(state);
        self.render()
    }

    fn redraw_if(&mut self, changed: bool) -> ChartResult<bool> {
        if changed && self.state.is_some() {
            self.render()?;
        }
        Ok(changed)
    }

    fn to_plot_space(&self, x: f64, y: f64) -> (f64, f64) {
        let margin = self.config.layout.margin;
        (x - margin.left, y - margin.top)
    }
}
