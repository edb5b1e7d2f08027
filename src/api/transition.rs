use super::chart_state::DrawableBar;

/// Duration of the bar grow/shrink animation.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Share of a pulse spent reaching the peak; settling takes three times as long.
pub const PULSE_PEAK_AT: f64 = 0.25;

/// Cubic ease-in-out on `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Time-sampled tween of bar `y`/`height` from a start to a target set.
///
/// `x`, `width` and `fill` jump straight to their targets; only the
/// vertical extent animates. Bars without a start counterpart grow from
/// `baseline`. A pulse passes through an intermediate `peak` set first.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTransition {
    from: Vec<DrawableBar>,
    peak: Option<Vec<DrawableBar>>,
    to: Vec<DrawableBar>,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl BarTransition {
    #[must_use]
    pub fn new(from: &[DrawableBar], to: Vec<DrawableBar>, baseline: f64, duration_ms: u64) -> Self {
        let from = to
            .iter()
            .enumerate()
            .map(|(index, target)| match from.get(index) {
                Some(start) => DrawableBar {
                    y: start.y,
                    height: start.height,
                    ..*target
                },
                None => target.collapsed(baseline),
            })
            .collect();
        Self {
            from,
            peak: None,
            to,
            duration_ms: duration_ms as f64,
            elapsed_ms: 0.0,
        }
    }

    /// Transition in which every bar grows from `baseline`.
    #[must_use]
    pub fn entering(to: Vec<DrawableBar>, baseline: f64, duration_ms: u64) -> Self {
        Self::new(&[], to, baseline, duration_ms)
    }

    /// Two-leg highlight: tweens to `peak` over `duration_ms`, then settles
    /// on `to` over three times that.
    ///
    /// Only `y`/`height` are taken from `peak`; bars it does not cover peak
    /// at their target.
    #[must_use]
    pub fn pulse(
        from: &[DrawableBar],
        peak: &[DrawableBar],
        to: Vec<DrawableBar>,
        baseline: f64,
        duration_ms: u64,
    ) -> Self {
        let peak = to
            .iter()
            .enumerate()
            .map(|(index, target)| match peak.get(index) {
                Some(top) => DrawableBar {
                    y: top.y,
                    height: top.height,
                    ..*target
                },
                None => *target,
            })
            .collect();
        let mut transition = Self::new(from, to, baseline, duration_ms.saturating_mul(4));
        transition.peak = Some(peak);
        transition
    }

    #[must_use]
    pub fn is_pulse(&self) -> bool {
        self.peak.is_some()
    }

    /// Moves the clock forward; negative or non-finite steps are ignored.
    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + elapsed_ms).min(self.duration_ms);
        }
    }

    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms;
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    #[must_use]
    pub fn targets(&self) -> &[DrawableBar] {
        &self.to
    }

    /// Bars as displayed at the current clock.
    #[must_use]
    pub fn sample(&self) -> Vec<DrawableBar> {
        let progress = self.progress();
        match &self.peak {
            Some(peak) if progress < PULSE_PEAK_AT => {
                tween(&self.from, peak, progress / PULSE_PEAK_AT)
            }
            Some(peak) => tween(
                peak,
                &self.to,
                (progress - PULSE_PEAK_AT) / (1.0 - PULSE_PEAK_AT),
            ),
            None => tween(&self.from, &self.to, progress),
        }
    }
}

fn tween(from: &[DrawableBar], to: &[DrawableBar], t: f64) -> Vec<DrawableBar> {
    let eased = ease_cubic_in_out(t);
    let mix = |a: f64, b: f64| a + (b - a) * eased;
    from.iter()
        .zip(to)
        .map(|(from, to)| DrawableBar {
            y: mix(from.y, to.y),
            height: mix(from.height, to.height),
            ..*to
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{BarTransition, ease_cubic_in_out};
    use crate::api::DrawableBar;
    use crate::core::Color;

    fn bar(y: f64, height: f64) -> DrawableBar {
        DrawableBar {
            x: 10.0,
            y,
            width: 20.0,
            height,
            fill: Color::from_rgb8(70, 130, 180),
        }
    }

    #[test]
    fn easing_is_symmetric_around_midpoint() {
        assert_relative_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_relative_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_relative_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_relative_eq!(
            ease_cubic_in_out(0.25) + ease_cubic_in_out(0.75),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn easing_clamps_outside_unit_interval() {
        assert_relative_eq!(ease_cubic_in_out(-1.0), 0.0);
        assert_relative_eq!(ease_cubic_in_out(3.0), 1.0);
    }

    #[test]
    fn pulse_peaks_after_first_quarter_and_settles_on_targets() {
        let from = [bar(80.0, 20.0)];
        let peak = [bar(0.0, 100.0)];
        let mut pulse = BarTransition::pulse(&from, &peak, vec![bar(60.0, 40.0)], 100.0, 100);
        assert!(pulse.is_pulse());

        pulse.advance(50.0);
        let rising = pulse.sample()[0];
        assert_relative_eq!(rising.height, 60.0, epsilon = 1e-9);

        pulse.advance(50.0);
        assert_eq!(pulse.sample(), vec![bar(0.0, 100.0)]);

        pulse.advance(150.0);
        let settling = pulse.sample()[0];
        assert_relative_eq!(settling.height, 70.0, epsilon = 1e-9);
        assert_relative_eq!(settling.y, 30.0, epsilon = 1e-9);
        assert!(!pulse.is_finished());

        pulse.advance(150.0);
        assert!(pulse.is_finished());
        assert_eq!(pulse.sample(), vec![bar(60.0, 40.0)]);
    }

    #[test]
    fn pulse_without_peak_entry_holds_target() {
        let targets = vec![bar(60.0, 40.0), bar(90.0, 10.0)];
        let mut pulse =
            BarTransition::pulse(&targets, &[bar(0.0, 100.0)], targets.clone(), 100.0, 100);
        pulse.advance(100.0);
        assert_eq!(pulse.sample()[1], bar(90.0, 10.0));
    }
}
