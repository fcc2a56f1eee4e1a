//! Configuration constants for the Suspect game
//!
//! This module contains the limits and tuning values used throughout the
//! game to keep the roster, timer and scoring within sensible bounds.

/// Roster configuration constants
pub mod roster {
    /// Minimum number of players required to start a round
    pub const MIN_PLAYER_COUNT: usize = 3;
    /// Maximum number of players that can share one device
    pub const MAX_PLAYER_COUNT: usize = 20;
    /// Largest impostor count that can ever be dealt
    pub const MAX_IMPOSTOR_COUNT: usize = MAX_PLAYER_COUNT / 2;
    /// Maximum length of a player name in characters
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Discussion timer configuration constants
pub mod timer {
    /// Minimum discussion length in seconds
    pub const MIN_ROUND_DURATION: u64 = 30;
    /// Maximum discussion length in seconds
    pub const MAX_ROUND_DURATION: u64 = 600;
    /// Discussion length in seconds used when none is configured
    pub const DEFAULT_ROUND_DURATION: u64 = 120;
}

/// Round scoring constants
pub mod scoring {
    /// Points for a non-impostor whose vote landed on an impostor
    pub const CORRECT_VOTE_POINTS: u64 = 1;
    /// Points for each impostor when no impostor is eliminated
    pub const IMPOSTOR_SURVIVAL_POINTS: u64 = 2;
}

/// Player answer configuration constants
pub mod answer_text {
    /// Maximum length of a free text answer in characters
    pub const MAX_LENGTH: usize = 200;
}
