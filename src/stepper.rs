//! Scroll-position-to-active-feature mapping for the product stepper.
//!
//! The product section is a tall scroll stage: as the page scrolls through it,
//! one feature at a time is "focused". This module is the pure arithmetic for
//! that mapping; the DOM wiring (scroll listener, node refs, smooth scroll)
//! lives in `sections::product`.

use std::fmt;

/// Tuning constants for the stepper.
///
/// These are deliberate design values carried over from the shipped site, kept
/// as configuration rather than hard-coded into the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperConfig {
    /// Height of one scroll step, as a fraction of the viewport height.
    pub step_fraction: f64,
    /// Bias applied before flooring, as a fraction of the step height. Shifts
    /// the transition point earlier than the exact step boundary so a feature
    /// activates slightly before its slot is fully centered.
    pub lead_in: f64,
    /// Dead zone above the section, as a fraction of the viewport height.
    /// While the section top is still more than this far below the current
    /// scroll position, no update is produced.
    pub guard_fraction: f64,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            step_fraction: 0.8,
            lead_in: 0.3,
            guard_fraction: 0.2,
        }
    }
}

/// The feature table was empty at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFeatureTable;

impl fmt::Display for EmptyFeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stepper requires a non-empty feature table")
    }
}

/// Maps a continuous scroll offset to a discrete feature index.
///
/// All methods are pure functions of their inputs, so the stepper is safe to
/// consult on every scroll event without accumulating state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStepper {
    config: StepperConfig,
    count: usize,
}

impl ScrollStepper {
    /// Builds a stepper over `count` features. An empty table would make the
    /// clamp's upper bound negative, so it is rejected here, at startup,
    /// rather than surfacing at scroll time.
    pub fn new(count: usize, config: StepperConfig) -> Result<Self, EmptyFeatureTable> {
        if count == 0 {
            return Err(EmptyFeatureTable);
        }
        Ok(Self { config, count })
    }

    pub fn feature_count(&self) -> usize {
        self.count
    }

    /// Height in pixels of one scroll step for the given viewport height.
    pub fn step_height(&self, viewport_height: f64) -> f64 {
        viewport_height * self.config.step_fraction
    }

    /// The active feature index for a scroll offset, or `None` while the
    /// scroll position is still in the guard zone above the section.
    ///
    /// Idempotent for a given `(scroll_y, section_top, viewport_height)`
    /// triple; the caller only needs to store the result when it differs from
    /// the previously stored index.
    pub fn index_at(&self, scroll_y: f64, section_top: f64, viewport_height: f64) -> Option<usize> {
        let step = self.step_height(viewport_height);
        if !(step > 0.0) {
            return None;
        }
        let distance = scroll_y - section_top;
        if distance < -(viewport_height * self.config.guard_fraction) {
            return None;
        }
        let raw = ((distance + step * self.config.lead_in) / step).floor();
        let max = (self.count - 1) as f64;
        Some(raw.clamp(0.0, max) as usize)
    }

    /// Scroll offset that centers the given feature, used by jump-to-feature.
    /// Computing the target mutates nothing; the active index catches up via
    /// the scroll events the smooth scroll itself produces.
    pub fn target_offset(&self, index: usize, section_top: f64, viewport_height: f64) -> f64 {
        section_top + index as f64 * self.step_height(viewport_height)
    }

    /// Fill percentage for the progress track line, 0 at the first feature
    /// and 100 at the last. A single-feature table is always fully filled.
    pub fn progress_percent(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return 100.0;
        }
        index.min(self.count - 1) as f64 / (self.count - 1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;
    const TOP: f64 = 1000.0;

    fn stepper() -> ScrollStepper {
        ScrollStepper::new(5, StepperConfig::default()).unwrap()
    }

    #[test]
    fn rejects_empty_feature_table() {
        assert_eq!(
            ScrollStepper::new(0, StepperConfig::default()),
            Err(EmptyFeatureTable)
        );
    }

    #[test]
    fn step_height_is_viewport_fraction() {
        assert_eq!(stepper().step_height(VIEWPORT), 800.0);
    }

    #[test]
    fn section_top_maps_to_first_feature() {
        assert_eq!(stepper().index_at(TOP, TOP, VIEWPORT), Some(0));
    }

    #[test]
    fn lead_in_advances_boundary_to_seventy_percent_of_step() {
        let s = stepper();
        // (560 + 800 * 0.3) / 800 = 1.0, so the switch to index 1 lands at
        // 70% of the first step rather than at the exact boundary.
        assert_eq!(s.index_at(TOP + 559.0, TOP, VIEWPORT), Some(0));
        assert_eq!(s.index_at(TOP + 560.0, TOP, VIEWPORT), Some(1));
    }

    #[test]
    fn index_clamps_to_last_feature() {
        assert_eq!(stepper().index_at(TOP + 4.0 * 800.0, TOP, VIEWPORT), Some(4));
        assert_eq!(stepper().index_at(TOP + 100_000.0, TOP, VIEWPORT), Some(4));
    }

    #[test]
    fn guard_zone_produces_no_update() {
        let s = stepper();
        // Guard threshold is 0.2 * viewport = 200px above the section top.
        assert_eq!(s.index_at(TOP - 201.0, TOP, VIEWPORT), None);
        // At or inside the guard the index is computed (and clamps to 0).
        assert_eq!(s.index_at(TOP - 200.0, TOP, VIEWPORT), Some(0));
        assert_eq!(s.index_at(TOP - 1.0, TOP, VIEWPORT), Some(0));
    }

    #[test]
    fn index_is_monotonic_in_scroll_offset() {
        let s = stepper();
        let mut last = 0;
        let mut y = TOP;
        while y < TOP + 6000.0 {
            let index = s.index_at(y, TOP, VIEWPORT).unwrap();
            assert!(index >= last, "index regressed at scroll offset {y}");
            assert!(index <= 4);
            last = index;
            y += 7.0;
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn zero_viewport_produces_no_update() {
        assert_eq!(stepper().index_at(5000.0, TOP, 0.0), None);
    }

    #[test]
    fn jump_target_is_section_top_plus_whole_steps() {
        let s = stepper();
        assert_eq!(s.target_offset(0, TOP, VIEWPORT), TOP);
        assert_eq!(s.target_offset(2, TOP, VIEWPORT), TOP + 1600.0);
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        let s = stepper();
        assert_eq!(s.progress_percent(0), 0.0);
        assert_eq!(s.progress_percent(2), 50.0);
        assert_eq!(s.progress_percent(4), 100.0);
    }

    #[test]
    fn single_feature_progress_is_full() {
        let s = ScrollStepper::new(1, StepperConfig::default()).unwrap();
        assert_eq!(s.progress_percent(0), 100.0);
    }
}
