//! Playback controller for a generated step sequence
//!
//! The controller owns the steps and a cursor into them. Auto-play is a
//! single pending deadline: [`Playback::tick`] advances at most one step when
//! the deadline has passed and schedules the next one. Every manual action
//! (pause, reset, seek, stepping, new steps) clears the deadline, so no
//! advance can fire after it.
//!
//! Time is passed in by the caller as an [`Instant`], which keeps the
//! controller independent of any clock or event loop.

use crate::config::{speed_label, PlaybackConfig};
use crate::error::PlaybackError;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// At the first step, never started or reset
    Stopped,
    /// Advancing on every elapsed interval
    Playing,
    /// Held somewhere in the sequence
    Paused,
    /// Showing the last step
    Finished,
}

/// Playback controller over any step type.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    steps: Vec<S>,
    current: usize,
    state: PlaybackState,
    config: PlaybackConfig,
    deadline: Option<Instant>,
}

impl<S> Playback<S> {
    pub fn new(steps: Vec<S>, config: PlaybackConfig) -> Self {
        let interval_ms = config.normalize(config.interval_ms);
        Self {
            steps,
            current: 0,
            state: PlaybackState::Stopped,
            config: PlaybackConfig {
                interval_ms,
                ..config
            },
            deadline: None,
        }
    }

    /// Replace the sequence and rewind to its first step.
    pub fn set_steps(&mut self, steps: Vec<S>) {
        self.steps = steps;
        self.reset();
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Index of the step on screen (0 for an empty sequence).
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&S> {
        self.steps.get(self.current)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Delay between automatic advances.
    pub fn interval(&self) -> Duration {
        self.config.interval()
    }

    pub fn interval_ms(&self) -> u64 {
        self.config.interval_ms
    }

    /// Whether an automatic advance is scheduled.
    pub fn has_pending_advance(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start auto-play. Playing from the last step starts over from the first.
    pub fn play(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.steps.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.at_end() {
            self.current = 0;
        }
        if self.at_end() {
            // a single step has nowhere to go
            self.state = PlaybackState::Finished;
            self.deadline = None;
            return Ok(());
        }
        self.state = PlaybackState::Playing;
        self.deadline = Some(now + self.interval());
        Ok(())
    }

    pub fn pause(&mut self) {
        self.deadline = None;
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Play if paused, pause if playing.
    pub fn toggle(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play(now)
        }
    }

    /// Back to the first step, stopped.
    pub fn reset(&mut self) {
        self.deadline = None;
        self.current = 0;
        self.state = PlaybackState::Stopped;
    }

    fn settle(&mut self) {
        self.deadline = None;
        self.state = if self.at_end() && !self.steps.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        };
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        self.step_forward_by(1)
    }

    /// Move up to `count` steps forward, stopping at the last one.
    pub fn step_forward_by(&mut self, count: usize) -> Result<(), PlaybackError> {
        if self.steps.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.current = (self.current + count.max(1)).min(self.last_index());
        self.settle();
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.steps.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.current -= 1;
        self.settle();
        Ok(())
    }

    /// Jump to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.current = index.min(self.last_index());
        self.settle();
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.last_index());
    }

    /// Advance one step if the pending deadline has passed.
    ///
    /// Returns whether the cursor moved. A late call still advances only
    /// once; the next deadline is measured from `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        self.current = (self.current + 1).min(self.last_index());
        if self.at_end() {
            self.state = PlaybackState::Finished;
            self.deadline = None;
        } else {
            self.deadline = Some(now + self.interval());
        }
        true
    }

    /// Set the auto-play interval, rounded and clamped to the configured range.
    pub fn set_interval(&mut self, ms: u64) {
        self.config.interval_ms = self.config.normalize(ms);
    }

    /// Shorten the interval by one step.
    pub fn faster(&mut self) {
        let ms = self
            .config
            .interval_ms
            .saturating_sub(self.config.interval_step_ms);
        self.set_interval(ms);
    }

    /// Lengthen the interval by one step.
    pub fn slower(&mut self) {
        let ms = self.config.interval_ms + self.config.interval_step_ms;
        self.set_interval(ms);
    }

    pub fn speed_label(&self) -> &'static str {
        speed_label(self.config.interval_ms)
    }

    /// Fraction of the sequence shown so far (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            (self.current + 1) as f64 / self.steps.len() as f64
        }
    }
}

/// Snapshot of the transport for the status bar.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackStatus {
    pub current: usize,
    pub total: usize,
    pub state: PlaybackState,
    pub interval_ms: u64,
    pub speed: &'static str,
    pub progress: f64,
}

impl<S> From<&Playback<S>> for PlaybackStatus {
    fn from(playback: &Playback<S>) -> Self {
        Self {
            current: playback.current,
            total: playback.len(),
            state: playback.state,
            interval_ms: playback.interval_ms(),
            speed: playback.speed_label(),
            progress: playback.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playback(count: usize) -> Playback<usize> {
        Playback::new((0..count).collect(), PlaybackConfig::default())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let p = playback(5);
        assert_eq!(p.current_index(), 0);
        assert_eq!(p.state(), PlaybackState::Stopped);
        assert_eq!(p.current_step(), Some(&0));
    }

    #[test]
    fn tick_waits_for_interval() {
        let mut p = playback(5);
        let t0 = Instant::now();
        p.play(t0).unwrap();
        assert!(!p.tick(t0 + ms(499)));
        assert!(p.tick(t0 + ms(500)));
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn late_tick_advances_only_once() {
        let mut p = playback(5);
        let t0 = Instant::now();
        p.play(t0).unwrap();
        assert!(p.tick(t0 + ms(5000)));
        assert_eq!(p.current_index(), 1);
        assert!(!p.tick(t0 + ms(5000)));
    }

    #[test]
    fn reaching_last_step_finishes() {
        let mut p = playback(3);
        let t0 = Instant::now();
        p.play(t0).unwrap();
        assert!(p.tick(t0 + ms(500)));
        assert!(p.tick(t0 + ms(1000)));
        assert_eq!(p.state(), PlaybackState::Finished);
        assert!(!p.has_pending_advance());
        assert!(!p.tick(t0 + ms(5000)));
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn play_at_end_restarts() {
        let mut p = playback(3);
        p.jump_to_end();
        assert_eq!(p.state(), PlaybackState::Finished);
        p.play(Instant::now()).unwrap();
        assert_eq!(p.current_index(), 0);
        assert!(p.is_playing());
    }

    #[test]
    fn no_advance_after_pause_or_reset() {
        let mut p = playback(5);
        let t0 = Instant::now();
        p.play(t0).unwrap();
        p.pause();
        assert!(!p.tick(t0 + ms(10_000)));
        assert_eq!(p.current_index(), 0);

        p.play(t0).unwrap();
        p.reset();
        assert!(!p.has_pending_advance());
        assert!(!p.tick(t0 + ms(10_000)));
        assert_eq!(p.state(), PlaybackState::Stopped);
    }

    #[test]
    fn manual_step_cancels_auto_play() {
        let mut p = playback(5);
        let t0 = Instant::now();
        p.play(t0).unwrap();
        p.step_forward().unwrap();
        assert_eq!(p.state(), PlaybackState::Paused);
        assert!(!p.tick(t0 + ms(10_000)));
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn transport_errors_at_bounds() {
        let mut p = playback(2);
        assert_eq!(p.step_backward(), Err(PlaybackError::AtStart));
        p.step_forward().unwrap();
        assert_eq!(p.step_forward(), Err(PlaybackError::AtEnd));

        let mut empty = playback(0);
        assert_eq!(empty.play(Instant::now()), Err(PlaybackError::Empty));
        assert_eq!(empty.step_forward(), Err(PlaybackError::Empty));
    }

    #[test]
    fn seek_clamps_to_bounds() {
        let mut p = playback(10);
        p.seek(5);
        assert_eq!(p.current_index(), 5);
        p.seek(100);
        assert_eq!(p.current_index(), 9);
        assert_eq!(p.state(), PlaybackState::Finished);
    }

    #[test]
    fn step_forward_by_stops_at_last() {
        let mut p = playback(4);
        p.step_forward_by(9).unwrap();
        assert_eq!(p.current_index(), 3);
    }

    #[test]
    fn interval_is_clamped_and_labelled() {
        let mut p = playback(3);
        assert_eq!(p.speed_label(), "Medium");
        p.set_interval(10);
        assert_eq!(p.interval_ms(), 100);
        assert_eq!(p.speed_label(), "Fast");
        for _ in 0..20 {
            p.slower();
        }
        assert_eq!(p.interval_ms(), 1500);
        assert_eq!(p.speed_label(), "Slow");
    }

    #[test]
    fn single_step_play_finishes_immediately() {
        let mut p = playback(1);
        p.play(Instant::now()).unwrap();
        assert_eq!(p.state(), PlaybackState::Finished);
        assert!(!p.has_pending_advance());
    }

    #[test]
    fn status_conversion() {
        let mut p = playback(4);
        p.seek(1);
        let status = PlaybackStatus::from(&p);
        assert_eq!(status.current, 1);
        assert_eq!(status.total, 4);
        assert_eq!(status.progress, 0.5);
    }
}
