//! Voting and round results
//!
//! Players vote one at a time in passing order. Once everyone has voted the
//! ballot is tallied: every target tied for the most votes is eliminated,
//! and the impostors win only if none of them is among the eliminated.

use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use crate::{
    constants::scoring::{CORRECT_VOTE_POINTS, IMPOSTOR_SURVIVAL_POINTS},
    player::{Id, Roster},
};

/// Reasons a vote is refused
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    /// A player tried to vote for themself
    #[error("players cannot vote for themselves")]
    SelfVote,
    /// The target is not on the roster
    #[error("no such player")]
    UnknownPlayer,
    /// Everyone has already voted
    #[error("voting is over")]
    Closed,
}

/// Votes cast so far this round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ballot {
    /// Voter to target
    votes: HashMap<Id, Id>,
    /// Index of the player currently voting
    current: usize,
}

impl Ballot {
    /// Index of the player whose turn it is to vote
    pub fn current(&self) -> usize {
        self.current
    }

    /// Votes recorded so far, voter to target
    pub fn votes(&self) -> &HashMap<Id, Id> {
        &self.votes
    }

    /// Whether every player on `roster` has voted
    pub fn is_complete(&self, roster: &Roster) -> bool {
        self.current >= roster.len()
    }

    /// Records the current voter's choice and passes the turn on
    ///
    /// # Errors
    ///
    /// * `VoteError::Closed` - Everyone has voted already
    /// * `VoteError::UnknownPlayer` - `target` is not on the roster
    /// * `VoteError::SelfVote` - `target` is the current voter
    pub fn cast(&mut self, roster: &Roster, target: Id) -> Result<Id, VoteError> {
        let voter = roster
            .players()
            .get(self.current)
            .ok_or(VoteError::Closed)?
            .id();
        if roster.get(target).is_none() {
            return Err(VoteError::UnknownPlayer);
        }
        if voter == target {
            return Err(VoteError::SelfVote);
        }
        self.votes.insert(voter, target);
        self.current += 1;
        Ok(voter)
    }
}

/// The result of a tallied round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Votes received per target in passing order, players without votes omitted
    counts: Vec<(Id, usize)>,
    /// Every target tied for the most votes
    eliminated: Vec<Id>,
    /// This round's impostors
    impostors: Vec<Id>,
    /// Whether no impostor was eliminated
    impostors_win: bool,
}

impl Outcome {
    /// Votes received per target
    pub fn counts(&self) -> &[(Id, usize)] {
        &self.counts
    }

    /// Players eliminated this round
    pub fn eliminated(&self) -> &[Id] {
        &self.eliminated
    }

    /// This round's impostors
    pub fn impostors(&self) -> &[Id] {
        &self.impostors
    }

    /// Whether the impostors won
    pub fn impostors_win(&self) -> bool {
        self.impostors_win
    }
}

/// Tallies `votes` against the roles on `roster`
///
/// Ties for the most votes are not broken; all tied targets are eliminated.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use suspect::{player::Roster, tally::tally};
///
/// let mut roster = Roster::default();
/// let a = roster.add("Ann").unwrap();
/// let b = roster.add("Ben").unwrap();
/// let c = roster.add("Cat").unwrap();
///
/// let votes = HashMap::from([(a, b), (b, c), (c, b)]);
/// let outcome = tally(&votes, &roster);
/// assert_eq!(outcome.eliminated(), &[b]);
/// ```
pub fn tally(votes: &HashMap<Id, Id>, roster: &Roster) -> Outcome {
    let received = votes.values().copied().counts();
    let top = received.values().copied().max().unwrap_or(0);

    let counts = roster
        .players()
        .iter()
        .filter_map(|p| received.get(&p.id()).map(|count| (p.id(), *count)))
        .collect_vec();
    let eliminated = counts
        .iter()
        .filter(|(_, count)| *count == top)
        .map(|(id, _)| *id)
        .collect_vec();
    let impostors = roster.impostors();
    let impostors_win = !eliminated.iter().any(|id| impostors.contains(id));

    Outcome {
        counts,
        eliminated,
        impostors,
        impostors_win,
    }
}

/// Awards round points on `roster` and returns what each player earned
///
/// Non-impostors who voted for an impostor earn a point; when the impostors
/// win each impostor earns the survival bonus.
pub fn award_points(
    votes: &HashMap<Id, Id>,
    outcome: &Outcome,
    roster: &mut Roster,
) -> Vec<(Id, u64)> {
    let mut earned = Vec::new();
    for player in roster.players_mut() {
        let id = player.id();
        let points = if player.is_impostor() {
            if outcome.impostors_win {
                IMPOSTOR_SURVIVAL_POINTS
            } else {
                0
            }
        } else if votes
            .get(&id)
            .is_some_and(|target| outcome.impostors.contains(target))
        {
            CORRECT_VOTE_POINTS
        } else {
            0
        };
        player.add_points(points);
        earned.push((id, points));
    }
    earned
}
