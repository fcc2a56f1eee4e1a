//! Players and the roster
//!
//! This module tracks everyone sitting around the device: their identity,
//! display name, role for the current round, private answer or word, and
//! their running score. The roster keeps players in the order they were
//! added, which is also the order the device is passed around.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

use crate::{
    constants::roster::MAX_PLAYER_COUNT,
    names::{self, normalize, same_name},
};

/// A unique identifier for a player
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random player ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    /// Creates a new random player ID (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Id {
    /// Formats the ID as a UUID string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    /// Parses an ID from a UUID string
    ///
    /// # Errors
    ///
    /// Returns a `uuid::Error` if the string is not a valid UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A player's private answer in Number Justify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    /// Answer to a numeric question, with the text as it was typed
    Number {
        /// Parsed value
        value: f64,
        /// Trimmed input shown on the reveal
        text: String,
    },
    /// Answer to a free text question
    Text(String),
}

impl Answer {
    /// The numeric value, for answers to numeric questions
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { text, .. } | Self::Text(text) => f.write_str(text),
        }
    }
}

/// Someone taking part in the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: Id,
    name: String,
    impostor: bool,
    score: u64,
    answer: Option<Answer>,
    word: Option<String>,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            id: Id::new(),
            name,
            impostor: false,
            score: 0,
            answer: None,
            word: None,
        }
    }

    /// The player's unique ID
    pub fn id(&self) -> Id {
        self.id
    }

    /// The normalized display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the player is an impostor this round
    pub fn is_impostor(&self) -> bool {
        self.impostor
    }

    /// Total points across all rounds played with this roster
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The answer submitted this round, if any
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    /// The secret word dealt this round, if any
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub(crate) fn set_impostor(&mut self, impostor: bool) {
        self.impostor = impostor;
    }

    pub(crate) fn set_answer(&mut self, answer: Answer) {
        self.answer = Some(answer);
    }

    pub(crate) fn set_word(&mut self, word: &str) {
        self.word = Some(word.to_owned());
    }

    pub(crate) fn add_points(&mut self, points: u64) {
        self.score += points;
    }

    /// Clears everything tied to a single round
    pub(crate) fn clear_round(&mut self) {
        self.impostor = false;
        self.answer = None;
        self.word = None;
    }
}

/// The ordered list of players
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Adds a player after normalizing and validating the name
    ///
    /// # Returns
    ///
    /// The new player's ID
    ///
    /// # Errors
    ///
    /// * `names::Error::Full` - The roster is at capacity
    /// * `names::Error::Used` - A player with the same name (ignoring case) exists
    /// * Any error from [`names::normalize`]
    pub fn add(&mut self, name: &str) -> Result<Id, names::Error> {
        if self.players.len() >= MAX_PLAYER_COUNT {
            return Err(names::Error::Full);
        }
        let name = normalize(name)?;
        if self.players.iter().any(|p| same_name(&p.name, &name)) {
            return Err(names::Error::Used);
        }
        let player = Player::new(name);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Removes a player, returning them if they were present
    pub fn remove(&mut self, id: Id) -> Option<Player> {
        let index = self.index_of(id)?;
        Some(self.players.remove(index))
    }

    /// Looks up a player by ID
    pub fn get(&self, id: Id) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The position of a player in passing order
    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Number of players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether nobody has been added yet
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in passing order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// IDs of this round's impostors in passing order
    pub fn impostors(&self) -> Vec<Id> {
        self.players
            .iter()
            .filter(|p| p.impostor)
            .map(|p| p.id)
            .collect_vec()
    }

    /// Clears role, answer and word for every player
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.clear_round();
        }
    }

    /// Players ranked by score, highest first
    ///
    /// Players with equal scores keep their passing order.
    pub fn standings(&self) -> Vec<(Id, u64)> {
        self.players
            .iter()
            .map(|p| (p.id, p.score))
            .sorted_by(|(_, a), (_, b)| b.cmp(a))
            .collect_vec()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Roster {
        let mut roster = Roster::default();
        for name in names {
            roster.add(name).unwrap();
        }
        roster
    }

    #[test]
    fn test_id_round_trip_through_string() {
        let id = Id::new();
        let parsed: Id = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<Id>().is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = Id::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn test_add_normalizes_name() {
        let mut roster = Roster::default();
        let id = roster.add("  alice ").unwrap();
        assert_eq!(roster.get(id).unwrap().name(), "Alice");
    }

    #[test]
    fn test_add_rejects_duplicates_after_normalization() {
        let mut roster = Roster::default();
        roster.add(" bob ").unwrap();
        assert_eq!(roster.add(" Bob"), Err(names::Error::Used));
        assert_eq!(roster.add("BOB"), Err(names::Error::Used));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.players()[0].name(), "Bob");
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut roster = Roster::default();
        assert_eq!(roster.add("   "), Err(names::Error::Empty));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_add_respects_capacity() {
        let mut roster = Roster::default();
        for i in 0..MAX_PLAYER_COUNT {
            roster.add(&format!("Player{i}")).unwrap();
        }
        assert_eq!(roster.add("Latecomer"), Err(names::Error::Full));
        assert_eq!(roster.len(), MAX_PLAYER_COUNT);
    }

    #[test]
    fn test_ids_are_unique() {
        let roster = roster(&["Ann", "Ben", "Cat", "Dan"]);
        let ids: Vec<Id> = roster.players().iter().map(Player::id).collect();
        assert_eq!(ids.iter().unique().count(), ids.len());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roster = roster(&["Ann", "Ben", "Cat"]);
        let ben = roster.players()[1].id();

        let removed = roster.remove(ben).unwrap();
        assert_eq!(removed.name(), "Ben");
        assert_eq!(
            roster.players().iter().map(Player::name).collect_vec(),
            vec!["Ann", "Cat"]
        );
        assert!(roster.remove(ben).is_none());
    }

    #[test]
    fn test_clear_round_keeps_score() {
        let mut roster = roster(&["Ann", "Ben", "Cat"]);
        {
            let player = &mut roster.players_mut()[0];
            player.set_impostor(true);
            player.set_answer(Answer::Number {
                value: 4.0,
                text: "4".to_string(),
            });
            player.set_word("Apple");
            player.add_points(3);
        }

        roster.clear_round();

        let player = &roster.players()[0];
        assert!(!player.is_impostor());
        assert!(player.answer().is_none());
        assert!(player.word().is_none());
        assert_eq!(player.score(), 3);
    }

    #[test]
    fn test_standings_order() {
        let mut roster = roster(&["Ann", "Ben", "Cat"]);
        roster.players_mut()[1].add_points(2);
        roster.players_mut()[2].add_points(2);
        let ids: Vec<Id> = roster.players().iter().map(Player::id).collect();

        let standings = roster.standings();
        assert_eq!(standings, vec![(ids[1], 2), (ids[2], 2), (ids[0], 0)]);
    }

    #[test]
    fn test_answer_display() {
        let typed = Answer::Number {
            value: 8.0,
            text: "08".to_string(),
        };
        assert_eq!(typed.to_string(), "08");
        assert_eq!(typed.value(), Some(8.0));
        assert_eq!(Answer::Text("pizza".to_string()).value(), None);
        assert_eq!(Answer::Text("pizza".to_string()).to_string(), "pizza");
    }
}
