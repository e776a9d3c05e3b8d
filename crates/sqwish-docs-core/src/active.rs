//! Scroll-spy: which section is "in view".
//!
//! The browser reports intersection changes in batches. A batch is reduced
//! to a single winner: the topmost sample that is intersecting at or above
//! the visibility threshold. Later batches overwrite earlier winners.

/// Default fraction of a section that must be visible to activate it.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.6;

/// One intersection observation for an anchored element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    /// Anchor ID of the observed element.
    pub id: String,
    /// Whether the element intersects the viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
    /// Top edge of the element relative to the viewport.
    pub top: f64,
}

impl IntersectionSample {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64, top: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            ratio,
            top,
        }
    }
}

/// Tracks the active section ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    active: String,
    threshold: f64,
}

impl ActiveSectionTracker {
    pub fn new(initial: impl Into<String>, threshold: f64) -> Self {
        Self {
            active: initial.into(),
            threshold,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Apply a batch of samples.
    ///
    /// Returns the new active ID when it changed.
    pub fn observe(&mut self, samples: &[IntersectionSample]) -> Option<&str> {
        let winner = samples
            .iter()
            .filter(|sample| sample.is_intersecting && sample.ratio >= self.threshold)
            .fold(None::<&IntersectionSample>, |best, sample| match best {
                Some(best) if best.top <= sample.top => Some(best),
                _ => Some(sample),
            })?;

        if winner.id == self.active {
            return None;
        }
        self.active.clone_from(&winner.id);
        Some(self.active.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveSectionTracker {
        ActiveSectionTracker::new("introduction", DEFAULT_VISIBILITY_THRESHOLD)
    }

    #[test]
    fn test_initial_active() {
        assert_eq!(tracker().active(), "introduction");
    }

    #[test]
    fn test_single_visible_section_activates() {
        let mut tracker = tracker();
        let changed = tracker.observe(&[IntersectionSample::new("setup", true, 0.8, 40.0)]);
        assert_eq!(changed, Some("setup"));
        assert_eq!(tracker.active(), "setup");
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let mut tracker = tracker();
        assert_eq!(
            tracker.observe(&[IntersectionSample::new("setup", true, 0.59, 40.0)]),
            None
        );
        assert_eq!(tracker.active(), "introduction");
    }

    #[test]
    fn test_leaving_section_is_ignored() {
        let mut tracker = tracker();
        assert_eq!(
            tracker.observe(&[IntersectionSample::new("setup", false, 0.0, -300.0)]),
            None
        );
    }

    #[test]
    fn test_topmost_wins_regardless_of_order() {
        let samples = [
            IntersectionSample::new("troubleshooting", true, 1.0, 420.0),
            IntersectionSample::new("api-reference-optimize-endpoint", true, 0.7, 12.0),
            IntersectionSample::new("use-cases", true, 0.9, 640.0),
        ];
        let mut tracker = tracker();
        assert_eq!(
            tracker.observe(&samples),
            Some("api-reference-optimize-endpoint")
        );

        let mut reversed = samples.clone();
        reversed.reverse();
        let mut other = self::tracker();
        assert_eq!(
            other.observe(&reversed),
            Some("api-reference-optimize-endpoint")
        );
    }

    #[test]
    fn test_tie_keeps_first_in_batch() {
        let mut tracker = tracker();
        let samples = [
            IntersectionSample::new("setup", true, 1.0, 0.0),
            IntersectionSample::new("getting-started", true, 1.0, 0.0),
        ];
        assert_eq!(tracker.observe(&samples), Some("setup"));
    }

    #[test]
    fn test_same_section_reports_no_change() {
        let mut tracker = tracker();
        assert_eq!(
            tracker.observe(&[IntersectionSample::new("introduction", true, 1.0, 0.0)]),
            None
        );
    }
}
