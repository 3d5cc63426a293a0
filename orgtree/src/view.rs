//! Chart zoom level.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

pub const ZOOM_MIN: f64 = 0.25;
pub const ZOOM_MAX: f64 = 1.5;
pub const ZOOM_STEP: f64 = 0.1;
pub const ZOOM_DEFAULT: f64 = 1.0;

/// The minimap is shown below this level.
pub const MINIMAP_BELOW: f64 = 0.8;

/// Zoom factor clamped to `[ZOOM_MIN, ZOOM_MAX]` and kept to two decimals so
/// repeated steps do not drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    level: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { level: ZOOM_DEFAULT }
    }
}

impl ZoomState {
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Set an absolute level, clamped. Non-finite levels are ignored and
    /// reported with `false`.
    pub fn set(&mut self, level: f64) -> bool {
        if !level.is_finite() {
            return false;
        }
        self.level = ((level.clamp(ZOOM_MIN, ZOOM_MAX)) * 100.0).round() / 100.0;
        true
    }

    pub fn zoom_in(&mut self) {
        self.set(self.level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set(self.level - ZOOM_STEP);
    }

    /// One step per wheel event: scrolling down zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else if delta_y < 0.0 {
            self.zoom_in();
        }
    }

    pub fn reset(&mut self) {
        self.level = ZOOM_DEFAULT;
    }

    /// Level as a whole percentage, e.g. `80`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    #[must_use]
    pub fn shows_minimap(&self) -> bool {
        self.level < MINIMAP_BELOW
    }
}
