/// Configuration for the segmentation engine with tunable thresholds.
#[derive(Debug, Clone)]
pub struct SegmentationConfig {
    /// Rolling window width, in samples, for smoothing groundspeed before
    /// classification
    pub window_width: usize,

    /// Smoothed groundspeed (m/s) at or above which a sample is AIRBORNE
    pub airborne_threshold: f64,

    /// Seconds trimmed from the start of a log before segmentation begins, to skip
    /// startup sensor instability
    pub start_trim_secs: f64,

    /// Duration threshold (seconds) separating noise spikes from genuine flights;
    /// also the quiet-gap length that marks a landing
    pub time_threshold_secs: f64,

    /// Treat a log whose trimmed region begins airborne as having taken off at the
    /// trim boundary
    pub midair_start: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            window_width: 5,
            airborne_threshold: 2.235,
            start_trim_secs: 45.0,
            time_threshold_secs: 15.0,
            midair_start: false,
        }
    }
}
