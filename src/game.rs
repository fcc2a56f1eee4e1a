//! Core game logic and state management
//!
//! This module contains the [`Game`] struct, which owns everything a round
//! needs: the roster, settings, the current screen and the random source.
//! The presentation layer sends [`Event`]s through [`Game::handle`] and
//! renders from the game's accessors or its JSON snapshot. A rejected event
//! leaves the game exactly as it was.

use std::{fmt::Debug, time::Duration};

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{answer_text, roster::MIN_PLAYER_COUNT},
    content::{AnswerType, Category, Library},
    names,
    player::{Answer, Id, Player, Roster},
    rng::{Lcg, RandomSource},
    roles::{GameMode, Round, clamp_impostor_count},
    screen::{Screen, ScreenKind},
    settings::Settings,
    tally::{self, Ballot, VoteError},
    timer::Countdown,
};

/// Events sent by the presentation layer
#[derive(Debug, Clone, PartialEq, Deserialize, derive_more::From)]
pub enum Event {
    /// Choices made before a round is dealt
    Setup(SetupEvent),
    /// Moving through a round
    Flow(FlowEvent),
    /// Discussion countdown controls and ticks
    Timer(TimerEvent),
    /// Signals from the host platform and the exit prompt
    Platform(PlatformEvent),
}

/// Events that configure the game before a round
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum SetupEvent {
    /// Pick a mode on the home screen
    ChooseMode(GameMode),
    /// Add a player by name
    AddPlayer(String),
    /// Remove a player
    RemovePlayer(Id),
    /// Set the desired impostor count
    SetImpostorCount(usize),
    /// Set the discussion length in seconds
    SetRoundDuration(u64),
    /// Pick the word category for Impostor Word
    SelectCategory(Category),
}

/// Events that move a round along
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum FlowEvent {
    /// Continue to the next screen
    Proceed,
    /// Uncover the secret word for the player holding the device
    RevealWord,
    /// Submit the at-bat player's answer
    SubmitAnswer(String),
    /// Cast the at-bat player's vote
    CastVote(Id),
}

/// Discussion countdown events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimerEvent {
    /// Resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Put the full duration back on the clock, paused
    Reset,
    /// One second has passed
    Tick,
}

/// Host platform and exit prompt events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlatformEvent {
    /// The platform back button was pressed
    Back,
    /// The player confirmed leaving the game in progress
    ConfirmExit,
    /// The player chose to stay in the game
    CancelExit,
}

/// Reasons an event was refused
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The event does nothing on the current screen
    #[error("not available on this screen")]
    WrongScreen,
    /// Fewer players than needed to deal a round
    #[error("not enough players, found {0}")]
    NotEnoughPlayers(usize),
    /// A name could not be added
    #[error(transparent)]
    Name(#[from] names::Error),
    /// No player has that ID
    #[error("no such player")]
    UnknownPlayer,
    /// A vote could not be cast
    #[error(transparent)]
    Vote(#[from] VoteError),
    /// The answer was empty
    #[error("answer cannot be empty")]
    EmptyAnswer,
    /// The answer was too long
    #[error("answer is too long")]
    AnswerTooLong,
    /// A numeric question got something other than a number
    #[error("answer must be a number")]
    NotANumber,
    /// The word has to be seen before passing the device on
    #[error("reveal the word first")]
    WordHidden,
    /// The discussion length is out of bounds
    #[error("round duration is out of bounds")]
    InvalidDuration,
    /// The exit prompt must be answered first
    #[error("confirm or cancel leaving first")]
    ExitPending,
    /// There is no exit prompt to answer
    #[error("nothing to confirm")]
    NoExitPending,
}

/// What handling an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// The game changed
    Changed,
    /// The event was accepted but nothing changed
    Unchanged,
    /// The event was refused; the game is untouched
    Rejected(Rejection),
    /// The presentation layer should ask whether to abandon the game
    ConfirmExit,
    /// The host application should close
    ExitApplication,
}

/// What the player holding the device may privately see
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrivatePrompt<'a> {
    /// The player holding the device
    pub player: &'a Player,
    /// Their question or word
    pub prompt: &'static str,
    /// Expected input, when an answer is asked for
    pub answer_type: Option<AnswerType>,
}

/// One game of Suspect on a shared device
///
/// The random source `R` is seeded once when the game is created and kept
/// across rounds and resets.
#[derive(Serialize)]
pub struct Game<R = Lcg> {
    /// Current screen and its data
    screen: Screen,
    /// Everyone playing, in passing order
    roster: Roster,
    /// Setup choices
    settings: Settings,
    /// Whether the exit prompt is showing
    exit_prompt: bool,
    /// Question and word banks
    #[serde(skip)]
    library: Library,
    /// Source for impostor and content draws
    #[serde(skip)]
    rng: R,
}

impl<R> Debug for Game<R> {
    /// Custom debug implementation that avoids printing the content banks
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("screen", &self.screen.kind())
            .field("players", &self.roster.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Game<Lcg> {
    /// Creates a game seeded from the clock with default settings
    pub fn new() -> Self {
        Self::with_rng(Lcg::from_clock())
    }
}

impl Default for Game<Lcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a game with default settings and the built-in content
    ///
    /// # Examples
    ///
    /// ```rust
    /// use suspect::{game::Game, rng::Lcg, screen::ScreenKind};
    ///
    /// let game = Game::with_rng(Lcg::new(7));
    /// assert_eq!(game.screen().kind(), ScreenKind::Home);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self {
            screen: Screen::Home,
            roster: Roster::default(),
            settings: Settings::default(),
            exit_prompt: false,
            library: Library::default(),
            rng,
        }
    }

    /// Creates a game with the given settings and content
    ///
    /// # Errors
    ///
    /// Returns the validation report if `settings` is out of bounds.
    pub fn with_settings(
        settings: Settings,
        library: Library,
        rng: R,
    ) -> Result<Self, garde::Report> {
        settings.validate()?;
        let mut game = Self {
            settings,
            library,
            ..Self::with_rng(rng)
        };
        game.clamp_impostor_count();
        Ok(game)
    }

    /// The current screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Everyone playing
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players in passing order
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// Current setup choices
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the exit prompt is showing
    pub fn is_confirming_exit(&self) -> bool {
        self.exit_prompt
    }

    /// The player who should be holding the device
    pub fn at_bat(&self) -> Option<&Player> {
        self.screen
            .at_bat()
            .and_then(|index| self.roster.players().get(index))
    }

    /// The private prompt for the player holding the device
    ///
    /// Only available while a player is answering in Number Justify, or has
    /// uncovered their word in Impostor Word.
    pub fn private_prompt(&self) -> Option<PrivatePrompt<'_>> {
        let (round, current) = match &self.screen {
            Screen::PrivateInput { round, current }
            | Screen::WordReveal {
                round,
                current,
                revealed: true,
            } => (round, *current),
            _ => return None,
        };
        let player = self.roster.players().get(current)?;
        Some(PrivatePrompt {
            player,
            prompt: round.prompt(player),
            answer_type: round.answer_type(),
        })
    }

    /// Whether [`FlowEvent::Proceed`] would be accepted right now
    pub fn can_proceed(&self) -> bool {
        if self.exit_prompt {
            return false;
        }
        match &self.screen {
            Screen::PlayerSetup { .. } => self.roster.len() >= MIN_PLAYER_COUNT,
            Screen::WordReveal { revealed, .. } => *revealed,
            Screen::Home | Screen::PrivateInput { .. } | Screen::Vote { .. } => false,
            Screen::CategorySelect
            | Screen::Assignment { .. }
            | Screen::Reveal { .. }
            | Screen::PassPhone { .. }
            | Screen::Discuss { .. }
            | Screen::Results { .. } => true,
        }
    }

    /// Converts the game to a JSON snapshot for the presentation layer
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }

    /// Applies an event
    ///
    /// While the exit prompt is showing only platform and timer events are
    /// accepted.
    pub fn handle(&mut self, event: impl Into<Event>) -> Effect {
        let event = event.into();
        let before = self.screen.kind();

        let result = match event {
            Event::Platform(event) => self.handle_platform(event),
            Event::Timer(event) => self.handle_timer(event),
            _ if self.exit_prompt => Err(Rejection::ExitPending),
            Event::Setup(event) => self.handle_setup(event),
            Event::Flow(event) => self.handle_flow(event),
        };

        match result {
            Ok(effect) => {
                let after = self.screen.kind();
                if before != after {
                    tracing::debug!(from = ?before, to = ?after, "screen transition");
                }
                effect
            }
            Err(rejection) => {
                tracing::debug!(screen = ?before, %rejection, "event rejected");
                Effect::Rejected(rejection)
            }
        }
    }

    fn handle_platform(&mut self, event: PlatformEvent) -> Result<Effect, Rejection> {
        match event {
            PlatformEvent::Back => Ok(if self.screen.is_in_game() {
                self.exit_prompt = true;
                Effect::ConfirmExit
            } else if self.screen == Screen::Home {
                Effect::ExitApplication
            } else {
                self.screen = Screen::Home;
                Effect::Changed
            }),
            PlatformEvent::ConfirmExit => {
                if !self.exit_prompt {
                    return Err(Rejection::NoExitPending);
                }
                tracing::info!(screen = ?self.screen.kind(), "abandoning game in progress");
                self.reset();
                Ok(Effect::Changed)
            }
            PlatformEvent::CancelExit => {
                if !self.exit_prompt {
                    return Err(Rejection::NoExitPending);
                }
                self.exit_prompt = false;
                Ok(Effect::Changed)
            }
        }
    }

    fn handle_setup(&mut self, event: SetupEvent) -> Result<Effect, Rejection> {
        match (event, self.screen.kind()) {
            (SetupEvent::ChooseMode(mode), ScreenKind::Home) => {
                self.screen = Screen::PlayerSetup { mode };
                Ok(Effect::Changed)
            }
            (SetupEvent::AddPlayer(name), ScreenKind::PlayerSetup) => {
                let id = self.roster.add(&name)?;
                self.clamp_impostor_count();
                tracing::debug!(%id, players = self.roster.len(), "player added");
                Ok(Effect::Changed)
            }
            (SetupEvent::RemovePlayer(id), ScreenKind::PlayerSetup) => {
                self.roster.remove(id).ok_or(Rejection::UnknownPlayer)?;
                self.clamp_impostor_count();
                Ok(Effect::Changed)
            }
            (SetupEvent::SetImpostorCount(requested), ScreenKind::PlayerSetup) => {
                let count = clamp_impostor_count(requested, self.roster.len());
                Ok(if std::mem::replace(&mut self.settings.impostor_count, count) == count {
                    Effect::Unchanged
                } else {
                    Effect::Changed
                })
            }
            (SetupEvent::SetRoundDuration(seconds), ScreenKind::PlayerSetup) => {
                let settings = Settings {
                    round_duration: Duration::from_secs(seconds),
                    ..self.settings
                };
                settings
                    .validate()
                    .map_err(|_| Rejection::InvalidDuration)?;
                self.settings = settings;
                Ok(Effect::Changed)
            }
            (SetupEvent::SelectCategory(category), ScreenKind::CategorySelect) => {
                self.settings.category = category;
                Ok(Effect::Changed)
            }
            _ => Err(Rejection::WrongScreen),
        }
    }

    fn handle_flow(&mut self, event: FlowEvent) -> Result<Effect, Rejection> {
        match event {
            FlowEvent::Proceed => self.proceed(),
            FlowEvent::RevealWord => self.reveal_word(),
            FlowEvent::SubmitAnswer(text) => self.submit_answer(&text),
            FlowEvent::CastVote(target) => self.cast_vote(target),
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) -> Result<Effect, Rejection> {
        let Screen::Discuss { countdown, .. } = &mut self.screen else {
            return match event {
                TimerEvent::Tick => Ok(Effect::Unchanged),
                _ => Err(Rejection::WrongScreen),
            };
        };

        let changed = match event {
            TimerEvent::Start => countdown.start(),
            TimerEvent::Pause => countdown.pause(),
            TimerEvent::Reset => {
                countdown.reset();
                true
            }
            TimerEvent::Tick => countdown.tick(),
        };
        Ok(if changed {
            Effect::Changed
        } else {
            Effect::Unchanged
        })
    }

    fn proceed(&mut self) -> Result<Effect, Rejection> {
        let next = match self.screen {
            Screen::PlayerSetup { mode } => {
                self.ensure_enough_players()?;
                match mode {
                    GameMode::NumberJustify => Screen::Assignment {
                        round: self.deal(GameMode::NumberJustify),
                        current: 0,
                    },
                    GameMode::ImpostorWord => Screen::CategorySelect,
                }
            }
            Screen::CategorySelect => {
                self.ensure_enough_players()?;
                Screen::WordReveal {
                    round: self.deal(GameMode::ImpostorWord),
                    current: 0,
                    revealed: false,
                }
            }
            Screen::Assignment { round, current } => Screen::PrivateInput { round, current },
            Screen::Reveal { round } => self.discuss(round),
            Screen::WordReveal {
                round,
                current,
                revealed,
            } => {
                if !revealed {
                    return Err(Rejection::WordHidden);
                }
                if current + 1 < self.roster.len() {
                    Screen::PassPhone {
                        round,
                        next: current + 1,
                    }
                } else {
                    self.discuss(round)
                }
            }
            Screen::PassPhone { round, next } => Screen::WordReveal {
                round,
                current: next,
                revealed: false,
            },
            Screen::Discuss { round, .. } => Screen::Vote {
                round,
                ballot: Ballot::default(),
            },
            Screen::Results { .. } => {
                self.reset();
                return Ok(Effect::Changed);
            }
            Screen::Home | Screen::PrivateInput { .. } | Screen::Vote { .. } => {
                return Err(Rejection::WrongScreen);
            }
        };
        self.screen = next;
        Ok(Effect::Changed)
    }

    fn reveal_word(&mut self) -> Result<Effect, Rejection> {
        match &mut self.screen {
            Screen::WordReveal { revealed, .. } => Ok(if std::mem::replace(revealed, true) {
                Effect::Unchanged
            } else {
                Effect::Changed
            }),
            _ => Err(Rejection::WrongScreen),
        }
    }

    fn submit_answer(&mut self, text: &str) -> Result<Effect, Rejection> {
        let Screen::PrivateInput { round, current } = self.screen else {
            return Err(Rejection::WrongScreen);
        };
        let answer = parse_answer(text, round.answer_type())?;
        let player = self
            .roster
            .players_mut()
            .get_mut(current)
            .ok_or(Rejection::UnknownPlayer)?;
        player.set_answer(answer);

        self.screen = if current + 1 < self.roster.len() {
            Screen::Assignment {
                round,
                current: current + 1,
            }
        } else {
            Screen::Reveal { round }
        };
        Ok(Effect::Changed)
    }

    fn cast_vote(&mut self, target: Id) -> Result<Effect, Rejection> {
        let Screen::Vote { round, ballot } = &mut self.screen else {
            return Err(Rejection::WrongScreen);
        };
        let voter = ballot.cast(&self.roster, target)?;
        tracing::debug!(%voter, %target, "vote cast");
        if !ballot.is_complete(&self.roster) {
            return Ok(Effect::Changed);
        }

        let round = *round;
        let ballot = std::mem::take(ballot);
        let outcome = tally::tally(ballot.votes(), &self.roster);
        let earned = tally::award_points(ballot.votes(), &outcome, &mut self.roster);
        tracing::info!(
            mode = ?round.mode(),
            eliminated = outcome.eliminated().len(),
            impostors_win = outcome.impostors_win(),
            "round finished"
        );
        self.screen = Screen::Results {
            round,
            ballot,
            outcome,
            earned,
        };
        Ok(Effect::Changed)
    }

    /// Keeps the stored impostor count within what the roster allows
    fn clamp_impostor_count(&mut self) {
        self.settings.impostor_count =
            clamp_impostor_count(self.settings.impostor_count, self.roster.len());
    }

    fn ensure_enough_players(&self) -> Result<(), Rejection> {
        if self.roster.len() < MIN_PLAYER_COUNT {
            return Err(Rejection::NotEnoughPlayers(self.roster.len()));
        }
        Ok(())
    }

    fn deal(&mut self, mode: GameMode) -> Round {
        let count = self.settings.impostor_count;
        match mode {
            GameMode::NumberJustify => {
                Round::deal_question(&mut self.roster, count, &self.library, &mut self.rng)
            }
            GameMode::ImpostorWord => Round::deal_word(
                &mut self.roster,
                count,
                self.settings.category,
                &self.library,
                &mut self.rng,
            ),
        }
    }

    fn discuss(&self, round: Round) -> Screen {
        Screen::Discuss {
            round,
            countdown: Countdown::started(self.settings.round_duration.as_secs()),
        }
    }

    /// Returns home and clears every round field; the roster, scores and
    /// settings stay
    fn reset(&mut self) {
        self.screen = Screen::Home;
        self.exit_prompt = false;
        self.roster.clear_round();
    }
}

/// Validates a typed answer against the expected input
fn parse_answer(text: &str, answer_type: Option<AnswerType>) -> Result<Answer, Rejection> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Rejection::EmptyAnswer);
    }
    if text.chars().count() > answer_text::MAX_LENGTH {
        return Err(Rejection::AnswerTooLong);
    }
    match answer_type {
        Some(AnswerType::Number) => text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|value| Answer::Number {
                value,
                text: text.to_owned(),
            })
            .ok_or(Rejection::NotANumber),
        Some(AnswerType::Text) | None => Ok(Answer::Text(text.to_owned())),
    }
}
