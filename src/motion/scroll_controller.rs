use crate::config::ScrollConfig;
use crate::motion::header_visibility::HeaderVisibilityController;
use crate::motion::scroll_mapper::{HintStyle, ScrollMapper};

/// Everything the views need from one scroll tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub viewport_height: f64,
    pub video_progress: f64,
    pub hint: HintStyle,
    pub header_visible: bool,
}

impl Default for ScrollFrame {
    fn default() -> Self {
        Self {
            offset: 0.0,
            viewport_height: 0.0,
            video_progress: 0.0,
            hint: HintStyle {
                opacity: 1.0,
                interactive: true,
            },
            header_visible: true,
        }
    }
}

/// Fans each scroll tick out to the mapper and the header controller so a
/// tick is fully applied before the next one arrives.
pub struct ScrollController {
    config: ScrollConfig,
    header: HeaderVisibilityController,
    last: ScrollFrame,
}

impl ScrollController {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            header: HeaderVisibilityController::new(&config),
            config,
            last: ScrollFrame::default(),
        }
    }

    #[cfg(test)]
    pub fn last_frame(&self) -> ScrollFrame {
        self.last
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64) -> ScrollFrame {
        self.header.on_scroll(offset);
        self.remap(offset, viewport_height)
    }

    /// Recomputes the mapped outputs for a new viewport without counting as a
    /// scroll tick, so the header keeps its state.
    pub fn resize(&mut self, viewport_height: f64) -> ScrollFrame {
        self.remap(self.last.offset, viewport_height)
    }

    fn remap(&mut self, offset: f64, viewport_height: f64) -> ScrollFrame {
        let mapper = ScrollMapper::new(viewport_height, &self.config);
        self.last = ScrollFrame {
            offset,
            viewport_height,
            video_progress: mapper.video_progress(offset),
            hint: mapper.hint(offset),
            header_visible: self.header.is_visible(),
        };
        self.last
    }
}
