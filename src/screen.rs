//! Screens of the game flow
//!
//! Each screen carries only the data it needs: the at-bat index exists only
//! on pass-the-phone screens, the countdown only while discussing, and the
//! ballot only while voting and on the results.

use serde::Serialize;

use crate::{
    player::Id,
    roles::{GameMode, Round},
    tally::{Ballot, Outcome},
    timer::Countdown,
};

/// The screen currently shown, with its data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Screen {
    /// Mode selection
    Home,
    /// Adding and removing players before a round
    PlayerSetup {
        /// Mode picked on the home screen
        mode: GameMode,
    },
    /// Picking the word category for Impostor Word
    CategorySelect,
    /// Number Justify: hand the device to the player at `current`
    Assignment {
        /// The dealt round
        round: Round,
        /// Index of the player receiving the device
        current: usize,
    },
    /// Number Justify: the player at `current` reads their question and answers
    PrivateInput {
        /// The dealt round
        round: Round,
        /// Index of the player answering
        current: usize,
    },
    /// Number Justify: everyone's answers are shown together
    Reveal {
        /// The dealt round
        round: Round,
    },
    /// Impostor Word: the player at `current` taps to see their word
    WordReveal {
        /// The dealt round
        round: Round,
        /// Index of the player holding the device
        current: usize,
        /// Whether the word is currently uncovered
        revealed: bool,
    },
    /// Impostor Word: hand the device to the player at `next`
    PassPhone {
        /// The dealt round
        round: Round,
        /// Index of the player receiving the device
        next: usize,
    },
    /// Timed discussion
    Discuss {
        /// The dealt round
        round: Round,
        /// Discussion clock
        countdown: Countdown,
    },
    /// Players vote one at a time
    Vote {
        /// The dealt round
        round: Round,
        /// Votes cast so far
        ballot: Ballot,
    },
    /// Tally and roles revealed
    Results {
        /// The dealt round
        round: Round,
        /// Every vote cast
        ballot: Ballot,
        /// Tally of the votes
        outcome: Outcome,
        /// Points each player earned this round
        earned: Vec<(Id, u64)>,
    },
}

/// The kind of screen without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScreenKind {
    /// See [`Screen::Home`]
    Home,
    /// See [`Screen::PlayerSetup`]
    PlayerSetup,
    /// See [`Screen::CategorySelect`]
    CategorySelect,
    /// See [`Screen::Assignment`]
    Assignment,
    /// See [`Screen::PrivateInput`]
    PrivateInput,
    /// See [`Screen::Reveal`]
    Reveal,
    /// See [`Screen::WordReveal`]
    WordReveal,
    /// See [`Screen::PassPhone`]
    PassPhone,
    /// See [`Screen::Discuss`]
    Discuss,
    /// See [`Screen::Vote`]
    Vote,
    /// See [`Screen::Results`]
    Results,
}

impl Screen {
    /// Returns the kind of this screen without the associated data
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Home => ScreenKind::Home,
            Self::PlayerSetup { .. } => ScreenKind::PlayerSetup,
            Self::CategorySelect => ScreenKind::CategorySelect,
            Self::Assignment { .. } => ScreenKind::Assignment,
            Self::PrivateInput { .. } => ScreenKind::PrivateInput,
            Self::Reveal { .. } => ScreenKind::Reveal,
            Self::WordReveal { .. } => ScreenKind::WordReveal,
            Self::PassPhone { .. } => ScreenKind::PassPhone,
            Self::Discuss { .. } => ScreenKind::Discuss,
            Self::Vote { .. } => ScreenKind::Vote,
            Self::Results { .. } => ScreenKind::Results,
        }
    }

    /// The round being played, if one has been dealt
    pub fn round(&self) -> Option<&Round> {
        match self {
            Self::Home | Self::PlayerSetup { .. } | Self::CategorySelect => None,
            Self::Assignment { round, .. }
            | Self::PrivateInput { round, .. }
            | Self::Reveal { round }
            | Self::WordReveal { round, .. }
            | Self::PassPhone { round, .. }
            | Self::Discuss { round, .. }
            | Self::Vote { round, .. }
            | Self::Results { round, .. } => Some(round),
        }
    }

    /// The selected game mode, once one has been picked
    pub fn mode(&self) -> Option<GameMode> {
        match self {
            Self::Home => None,
            Self::PlayerSetup { mode } => Some(*mode),
            Self::CategorySelect => Some(GameMode::ImpostorWord),
            _ => self.round().map(Round::mode),
        }
    }

    /// Index of the player who should be holding the device
    pub fn at_bat(&self) -> Option<usize> {
        match self {
            Self::Assignment { current, .. }
            | Self::PrivateInput { current, .. }
            | Self::WordReveal { current, .. } => Some(*current),
            Self::PassPhone { next, .. } => Some(*next),
            Self::Vote { ballot, .. } => Some(ballot.current()),
            _ => None,
        }
    }

    /// Whether leaving this screen would discard a game in progress
    pub fn is_in_game(&self) -> bool {
        !matches!(self, Self::Home | Self::PlayerSetup { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::content::QUESTIONS;

    fn round() -> Round {
        Round::NumberJustify(&QUESTIONS[0])
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Screen::Home.kind(), ScreenKind::Home);
        assert_eq!(
            Screen::Discuss {
                round: round(),
                countdown: Countdown::started(10)
            }
            .kind(),
            ScreenKind::Discuss
        );
    }

    #[test]
    fn test_round_only_after_deal() {
        assert!(Screen::Home.round().is_none());
        assert!(Screen::CategorySelect.round().is_none());
        assert_eq!(Screen::Reveal { round: round() }.round(), Some(&round()));
    }

    #[test]
    fn test_mode() {
        assert_eq!(Screen::Home.mode(), None);
        assert_eq!(
            Screen::PlayerSetup {
                mode: GameMode::NumberJustify
            }
            .mode(),
            Some(GameMode::NumberJustify)
        );
        assert_eq!(Screen::CategorySelect.mode(), Some(GameMode::ImpostorWord));
        assert_eq!(
            Screen::Reveal { round: round() }.mode(),
            Some(GameMode::NumberJustify)
        );
    }

    #[test]
    fn test_at_bat() {
        assert_eq!(
            Screen::PassPhone {
                round: round(),
                next: 2
            }
            .at_bat(),
            Some(2)
        );
        assert_eq!(
            Screen::Vote {
                round: round(),
                ballot: Ballot::default()
            }
            .at_bat(),
            Some(0)
        );
        assert_eq!(Screen::Reveal { round: round() }.at_bat(), None);
    }

    #[test]
    fn test_in_game() {
        assert!(!Screen::Home.is_in_game());
        assert!(
            !Screen::PlayerSetup {
                mode: GameMode::ImpostorWord
            }
            .is_in_game()
        );
        assert!(Screen::CategorySelect.is_in_game());
        assert!(Screen::Reveal { round: round() }.is_in_game());
    }
}
