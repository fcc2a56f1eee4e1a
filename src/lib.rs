//! # Suspect Game Library
//!
//! This library provides the core game logic for Suspect, a pass-the-phone
//! social deduction party game played on a single shared device. It handles
//! player setup, secret role assignment, the screen flow of both game modes,
//! the discussion countdown, and vote tallying with scores.
//!
//! The presentation layer drives a [`Game`] by sending [`Event`]s and renders
//! from its accessors or its JSON snapshot.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod constants;
pub mod content;
pub mod game;
pub mod names;
pub mod player;
pub mod rng;
pub mod roles;
pub mod screen;
pub mod settings;
pub mod tally;
pub mod timer;

pub use game::{Effect, Event, FlowEvent, Game, PlatformEvent, Rejection, SetupEvent, TimerEvent};
pub use roles::GameMode;
pub use screen::{Screen, ScreenKind};
pub use settings::Settings;
