//! Hide-on-scroll ("headroom") behaviour for the mobile top bar.

/// Default scroll offset past which scrolling down hides the bar.
pub const DEFAULT_HIDE_THRESHOLD: f64 = 100.0;

/// Tracks the last scroll offset and whether the top bar is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadroomTracker {
    threshold: f64,
    last_offset: f64,
    visible: bool,
}

impl Default for HeadroomTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_THRESHOLD)
    }
}

impl HeadroomTracker {
    /// Create a tracker at offset zero with the bar shown.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_offset: 0.0,
            visible: true,
        }
    }

    /// Whether the top bar is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The offset seen by the previous scroll event.
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed a scroll event and return whether the bar should be shown.
    ///
    /// Moving down while past the threshold hides the bar; any other
    /// movement shows it.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = !(offset > self.last_offset && offset > self.threshold);
        self.last_offset = offset;
        self.visible
    }
}
