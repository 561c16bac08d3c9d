use log::debug;

use crate::config::ScrollConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Visible,
    Hidden,
}

/// Hides the header on scroll down and shows it on scroll up.
///
/// Direction is measured against the offset of the last committed flip (the
/// anchor), not the previous tick, so small back-and-forth scrolling inside the
/// dead zone never toggles the header.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderVisibilityController {
    state: HeaderState,
    anchor: f64,
    top_zone: f64,
    dead_zone: f64,
}

impl Default for HeaderVisibilityController {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

impl HeaderVisibilityController {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            state: HeaderState::Visible,
            anchor: 0.0,
            top_zone: config.header_top_zone,
            dead_zone: config.header_dead_zone,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == HeaderState::Visible
    }

    #[cfg(test)]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Feeds one scroll tick. Returns `true` when visibility changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let previous = self.state;

        if offset < self.top_zone {
            // Top of page always shows the header; the anchor stays put.
            self.state = HeaderState::Visible;
        } else {
            let travelled = offset - self.anchor;
            if travelled > self.dead_zone {
                self.state = HeaderState::Hidden;
                self.anchor = offset;
            } else if travelled < -self.dead_zone {
                self.state = HeaderState::Visible;
                self.anchor = offset;
            }
        }

        let changed = previous != self.state;
        if changed {
            debug!("Header {:?} at offset {}", self.state, offset);
        }
        changed
    }
}
