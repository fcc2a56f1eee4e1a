//! Discussion countdown
//!
//! The host application delivers a tick once per second; the countdown only
//! moves while it is running and stops by itself at zero. Reaching zero never
//! moves the game on, players still have to proceed to the vote.

use serde::{Deserialize, Serialize};

/// A cooperative seconds countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left on the clock
    remaining: u64,
    /// Seconds the countdown restarts from
    duration: u64,
    /// Whether ticks currently decrement the clock
    running: bool,
}

impl Countdown {
    /// Creates a countdown of `duration` seconds that is already running
    pub fn started(duration: u64) -> Self {
        Self {
            remaining: duration,
            duration,
            running: duration > 0,
        }
    }

    /// Seconds left
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Seconds the countdown was configured with
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Whether the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the clock has reached zero
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advances one second
    ///
    /// # Returns
    ///
    /// `true` if the clock moved
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }

    /// Resumes the countdown; does nothing once expired
    ///
    /// # Returns
    ///
    /// `true` if the running flag changed
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Pauses the countdown
    ///
    /// # Returns
    ///
    /// `true` if the running flag changed
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Puts the full duration back on the clock, paused
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = false;
    }
}
