//! Runtime configuration
//!
//! Everything has a sensible default; the binary overrides individual fields
//! from command-line flags. The engines themselves only ever see the plain
//! numbers they need (a capacity, a cap), never the whole [`Config`].

use std::time::Duration;

/// Top-level configuration for a visualisation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest number of values accepted from one input list
    pub max_values: usize,
    /// Fixed capacity for stack pushes
    pub stack_capacity: usize,
    /// Fixed capacity for queue enqueues
    pub queue_capacity: usize,
    pub playback: PlaybackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_values: 20,
            stack_capacity: 10,
            queue_capacity: 10,
            playback: PlaybackConfig::default(),
        }
    }
}

/// Timer settings for auto-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between two automatic advances
    pub interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Granularity of speed changes
    pub interval_step_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            min_interval_ms: 100,
            max_interval_ms: 1500,
            interval_step_ms: 100,
        }
    }
}

impl PlaybackConfig {
    /// Clamp `ms` into the configured range and round it to the step size.
    pub fn normalize(&self, ms: u64) -> u64 {
        let step = self.interval_step_ms.max(1);
        let rounded = (ms + step / 2) / step * step;
        rounded.clamp(self.min_interval_ms, self.max_interval_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Human label for a playback interval, matching the speed slider.
pub fn speed_label(interval_ms: u64) -> &'static str {
    if interval_ms >= 1000 {
        "Slow"
    } else if interval_ms >= 500 {
        "Medium"
    } else {
        "Fast"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider() {
        let config = Config::default();
        assert_eq!(config.max_values, 20);
        assert_eq!(config.queue_capacity, 10);
        assert_eq!(config.playback.interval_ms, 500);
    }

    #[test]
    fn normalize_clamps_and_rounds() {
        let playback = PlaybackConfig::default();
        assert_eq!(playback.normalize(0), 100);
        assert_eq!(playback.normalize(5000), 1500);
        assert_eq!(playback.normalize(640), 600);
        assert_eq!(playback.normalize(650), 700);
    }

    #[test]
    fn labels() {
        assert_eq!(speed_label(1500), "Slow");
        assert_eq!(speed_label(500), "Medium");
        assert_eq!(speed_label(100), "Fast");
    }
}
