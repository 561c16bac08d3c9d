use log::Level;

/// The home page scroll area is this many viewport heights tall (`800vh`).
pub const SCROLL_SPAN_MULTIPLIER: f64 = 8.0;
/// Default hint threshold as a fraction of the viewport height.
pub const HINT_THRESHOLD_FACTOR: f64 = 0.8;

/// Offsets below this always show the header.
pub const HEADER_TOP_ZONE: f64 = 100.0;
/// Distance from the last flip the scroll must travel before the header flips again.
pub const HEADER_DEAD_ZONE: f64 = 100.0;

pub const INTRO_DURATION_MS: f64 = 1200.0;
pub const SEEN_INTRO_KEY: &str = "seenIntro";
pub const SEEN_INTRO_VALUE: &str = "1";

/// Smaller is more responsive, bigger is more floaty.
pub const SMOOTH_SCROLL_LERP: f64 = 0.06;

pub const BACKGROUND_VIDEO_SRC: &str = "/bg.webm";
pub const SITE_TITLE: &str = "Portfolio";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Parameters for the scroll-to-animation mapping on the home page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub span_multiplier: f64,
    pub hint_threshold_factor: f64,
    /// Absolute hint threshold in pixels; overrides the factor when set.
    pub hint_threshold: Option<f64>,
    pub header_top_zone: f64,
    pub header_dead_zone: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            span_multiplier: SCROLL_SPAN_MULTIPLIER,
            hint_threshold_factor: HINT_THRESHOLD_FACTOR,
            hint_threshold: None,
            header_top_zone: HEADER_TOP_ZONE,
            header_dead_zone: HEADER_DEAD_ZONE,
        }
    }
}

impl ScrollConfig {
    #[cfg(test)]
    pub fn with_hint_threshold(mut self, threshold: f64) -> Self {
        self.hint_threshold = Some(threshold);
        self
    }
}

pub fn page_title(page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} · {}", page, SITE_TITLE),
        None => SITE_TITLE.to_string(),
    }
}
