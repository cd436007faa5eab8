// SPDX-License-Identifier: MPL-2.0
//! Mood picker component.
//!
//! Elm-style component with "state down, messages up": [`State`] owns the
//! transient selection, [`component::Message`] carries user input back into
//! [`State::update`], and the host observes confirmed choices through
//! [`Effect::MoodChosen`]. Rendering lives in [`view`].

pub mod component;
pub mod options;
pub mod view;

pub use component::{Effect, Message, State};
pub use options::{MoodOption, MOOD_OPTIONS};
pub use view::view;
