//! Impostor selection and prompt dealing
//!
//! At the start of every round the roster is wiped of last round's roles,
//! a shuffle of seat indices picks the impostors, and each player is dealt
//! the safe or impostor side of one question or word pair.

use serde::Serialize;

use crate::{
    content::{AnswerType, Category, Library, QuestionPair, WordPair},
    player::{Player, Roster},
    rng::RandomSource,
};

/// Clamps a requested impostor count to what the roster allows
///
/// The result is at most half the players (rounded down) and never below 1.
///
/// # Examples
///
/// ```rust
/// use suspect::roles::clamp_impostor_count;
///
/// assert_eq!(clamp_impostor_count(3, 4), 2);
/// assert_eq!(clamp_impostor_count(0, 6), 1);
/// ```
pub fn clamp_impostor_count(requested: usize, player_count: usize) -> usize {
    requested.min(player_count / 2).max(1)
}

/// Flags impostors on a fresh slate
///
/// Every player's role, answer and word is cleared first. The seat indices
/// are shuffled and the first `clamp_impostor_count(requested, n)` seats
/// become impostors.
///
/// # Returns
///
/// The number of impostors assigned
pub fn assign_roles<R: RandomSource>(
    players: &mut [Player],
    requested: usize,
    rng: &mut R,
) -> usize {
    for player in players.iter_mut() {
        player.clear_round();
    }
    if players.is_empty() {
        return 0;
    }

    let count = clamp_impostor_count(requested, players.len());
    let mut seats: Vec<usize> = (0..players.len()).collect();
    rng.shuffle(&mut seats);
    for &seat in seats.iter().take(count) {
        players[seat].set_impostor(true);
    }
    count
}

/// Game mode selected on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, Serialize)]
pub enum GameMode {
    /// Everyone answers a question with a number or short text; impostors
    /// answer a slightly different question
    NumberJustify,
    /// Everyone gets a secret word; impostors get a related one
    ImpostorWord,
}

/// The pair dealt for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Round {
    /// A Number Justify round
    NumberJustify(&'static QuestionPair),
    /// An Impostor Word round
    ImpostorWord {
        /// Category the word was drawn from
        category: Category,
        /// The drawn pair
        pair: &'static WordPair,
    },
}

impl Round {
    /// Starts a Number Justify round
    ///
    /// Draws a question and assigns roles. Players read their question
    /// through [`Round::prompt`].
    pub fn deal_question<R: RandomSource>(
        roster: &mut Roster,
        impostor_count: usize,
        library: &Library,
        rng: &mut R,
    ) -> Self {
        let question = library.draw_question(rng);
        let assigned = assign_roles(roster.players_mut(), impostor_count, rng);
        tracing::debug!(impostors = assigned, "dealt number justify round");
        Self::NumberJustify(question)
    }

    /// Starts an Impostor Word round
    ///
    /// Draws a word pair from `category`, assigns roles and stores each
    /// player's word on the player.
    pub fn deal_word<R: RandomSource>(
        roster: &mut Roster,
        impostor_count: usize,
        category: Category,
        library: &Library,
        rng: &mut R,
    ) -> Self {
        let pair = library.draw_word(category, rng);
        let assigned = assign_roles(roster.players_mut(), impostor_count, rng);
        for player in roster.players_mut() {
            let word = pair.word(player.is_impostor());
            player.set_word(word);
        }
        tracing::debug!(impostors = assigned, %category, "dealt impostor word round");
        Self::ImpostorWord { category, pair }
    }

    /// The mode this round is played in
    pub fn mode(&self) -> GameMode {
        match self {
            Self::NumberJustify(_) => GameMode::NumberJustify,
            Self::ImpostorWord { .. } => GameMode::ImpostorWord,
        }
    }

    /// What `player` privately sees this round
    pub fn prompt(&self, player: &Player) -> &'static str {
        match self {
            Self::NumberJustify(question) => question.prompt(player.is_impostor()),
            Self::ImpostorWord { pair, .. } => pair.word(player.is_impostor()),
        }
    }

    /// The input type expected from players, for Number Justify rounds
    pub fn answer_type(&self) -> Option<AnswerType> {
        match self {
            Self::NumberJustify(question) => Some(question.answer_type),
            Self::ImpostorWord { .. } => None,
        }
    }
}
