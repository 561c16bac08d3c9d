use crate::config::ScrollConfig;

/// Opacity of the "scroll for more" hint and whether it should take input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HintStyle {
    pub opacity: f64,
    pub interactive: bool,
}

impl HintStyle {
    pub fn to_css(self) -> String {
        format!(
            "opacity: {}; pointer-events: {};",
            self.opacity,
            if self.interactive { "auto" } else { "none" }
        )
    }
}

/// Playback position for `progress` through a media element of `duration`
/// seconds, or `None` while the duration is unknown (`NaN` before metadata
/// loads, or non-positive).
fn scrub_position(progress: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some(progress.clamp(0.0, 1.0) * duration)
}

/// Maps a scroll offset to video progress and hint opacity for one viewport.
///
/// Stateless: the same `(offset, viewport height, multiplier, threshold)` always
/// gives the same result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapper {
    viewport_height: f64,
    span_multiplier: f64,
    hint_threshold: f64,
}

impl ScrollMapper {
    pub fn new(viewport_height: f64, config: &ScrollConfig) -> Self {
        let viewport_height = viewport_height.max(0.0);
        let hint_threshold = config
            .hint_threshold
            .unwrap_or(viewport_height * config.hint_threshold_factor);
        Self {
            viewport_height,
            span_multiplier: config.span_multiplier,
            hint_threshold,
        }
    }

    pub fn span(&self) -> f64 {
        self.viewport_height * self.span_multiplier
    }

    #[cfg(test)]
    pub fn hint_threshold(&self) -> f64 {
        self.hint_threshold
    }

    /// Position within the scrub span in `[0, 1]`. A zero span (viewport not laid
    /// out yet) maps everything to 0.
    pub fn video_progress(&self, offset: f64) -> f64 {
        let span = self.span();
        if !(span > 0.0) {
            return 0.0;
        }
        offset.clamp(0.0, span) / span
    }

    pub fn scrub_time(&self, offset: f64, duration: f64) -> Option<f64> {
        scrub_position(self.video_progress(offset), duration)
    }

    pub fn hint_opacity(&self, offset: f64) -> f64 {
        if !(self.hint_threshold > 0.0) {
            return 0.0;
        }
        (1.0 - offset.max(0.0) / self.hint_threshold).clamp(0.0, 1.0)
    }

    pub fn hint(&self, offset: f64) -> HintStyle {
        let opacity = self.hint_opacity(offset);
        HintStyle {
            opacity,
            interactive: opacity > 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(viewport_height: f64) -> ScrollMapper {
        ScrollMapper::new(viewport_height, &ScrollConfig::default())
    }

    #[test]
    fn video_progress_is_half_way_at_half_the_span() {
        let m = mapper(1000.0);
        assert_eq!(m.span(), 8000.0);
        assert_eq!(m.video_progress(4000.0), 0.5);
    }

    #[test]
    fn video_progress_clamps_at_both_ends() {
        let m = mapper(900.0);
        assert_eq!(m.video_progress(0.0), 0.0);
        assert_eq!(m.video_progress(-25.0), 0.0);
        assert_eq!(m.video_progress(m.span()), 1.0);
        assert_eq!(m.video_progress(m.span() * 3.0), 1.0);
    }

    #[test]
    fn zero_viewport_does_not_divide_by_zero() {
        let m = mapper(0.0);
        assert_eq!(m.video_progress(500.0), 0.0);
        assert_eq!(m.hint_opacity(0.0), 0.0);
    }

    #[test]
    fn scrub_is_skipped_while_duration_is_unknown() {
        let m = mapper(1000.0);
        assert_eq!(m.scrub_time(4000.0, f64::NAN), None);
        assert_eq!(m.scrub_time(4000.0, 0.0), None);
        assert_eq!(m.scrub_time(4000.0, f64::INFINITY), None);
        assert_eq!(m.scrub_time(4000.0, 12.0), Some(6.0));
    }

    #[test]
    fn explicit_hint_threshold_overrides_viewport_factor() {
        let m = ScrollMapper::new(1000.0, &ScrollConfig::default().with_hint_threshold(300.0));
        assert_eq!(m.hint_threshold(), 300.0);
        assert_eq!(m.hint_opacity(150.0), 0.5);
    }

    #[test]
    fn default_hint_threshold_is_eighty_percent_of_viewport() {
        let m = mapper(1000.0);
        assert_eq!(m.hint_threshold(), 800.0);
        assert_eq!(m.hint_opacity(400.0), 0.5);
    }

    #[test]
    fn hint_opacity_stays_in_range_and_never_increases() {
        let m = mapper(750.0);
        let mut previous = 1.0;
        for step in 0..200 {
            let opacity = m.hint_opacity(step as f64 * 10.0);
            assert!((0.0..=1.0).contains(&opacity));
            assert!(opacity <= previous);
            previous = opacity;
        }
    }

    #[test]
    fn hint_stops_taking_input_once_faded_out() {
        let m = ScrollMapper::new(1000.0, &ScrollConfig::default().with_hint_threshold(300.0));
        let faded = m.hint(300.0);
        assert_eq!(faded.opacity, 0.0);
        assert!(!faded.interactive);
        assert!(!m.hint(5000.0).interactive);
        assert!(m.hint(299.0).interactive);
        assert_eq!(faded.to_css(), "opacity: 0; pointer-events: none;");
    }
}
