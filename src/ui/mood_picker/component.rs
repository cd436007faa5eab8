// SPDX-License-Identifier: MPL-2.0
//! Mood picker state and update logic.
//!
//! Two view modes, selected by `confirmed`: picking (browse and highlight a
//! mood, then confirm it) and confirmed (a static illustration with a reset
//! button). All transitions happen synchronously inside [`State::update`];
//! nothing here can fail.

use crate::ui::mood_picker::options::MoodOption;
use crate::ui::state::{Emphasis, EmphasisAnimation};
use std::time::Instant;

/// Messages emitted by the picker views.
#[derive(Debug, Clone)]
pub enum Message {
    /// A mood glyph was tapped.
    MoodPressed(MoodOption),
    /// The Choose button was pressed.
    ChoosePressed,
    /// The Choose another button was pressed (confirmed mode only).
    ChooseAnotherPressed,
    /// Periodic tick driving the Choose button emphasis transition.
    Tick(Instant),
}

/// Side effects the host application should perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user confirmed a choice. Emitted exactly once per confirmation.
    MoodChosen(MoodOption),
}

/// Transient picker state. Lives and dies with the component instance.
#[derive(Debug, Clone)]
pub struct State {
    /// The mood currently highlighted, cleared on every confirmation.
    selected: Option<MoodOption>,
    /// Whether a choice was confirmed in the current cycle.
    confirmed: bool,
    emphasis: EmphasisAnimation,
}

impl State {
    /// Fresh picker: picking mode, nothing highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            confirmed: false,
            emphasis: EmphasisAnimation::new(),
        }
    }

    /// The mood currently highlighted, if any.
    #[must_use]
    pub fn selected(&self) -> Option<MoodOption> {
        self.selected
    }

    /// True while the confirmation view is showing.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Emphasis to render the Choose button with right now.
    #[must_use]
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis.current()
    }

    /// True while the emphasis transition needs tick messages.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.emphasis.is_animating()
    }

    /// Handles one input event and returns the effect the host should apply.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::MoodPressed(option) => {
                if self.confirmed {
                    return Effect::None;
                }
                // Idempotent set: re-tapping the highlighted mood keeps it;
                // there is no toggle-off.
                self.selected = Some(option);
                self.retarget_emphasis();
                Effect::None
            }
            Message::ChoosePressed => {
                if self.confirmed {
                    return Effect::None;
                }
                // Silent no-op with nothing highlighted; the button is
                // dimmed, not disabled.
                let Some(option) = self.selected.take() else {
                    return Effect::None;
                };
                self.confirmed = true;
                self.retarget_emphasis();
                Effect::MoodChosen(option)
            }
            Message::ChooseAnotherPressed => {
                // Back to picking with nothing highlighted: a fresh cycle.
                self.confirmed = false;
                Effect::None
            }
            Message::Tick(now) => {
                self.emphasis.tick(now);
                Effect::None
            }
        }
    }

    fn retarget_emphasis(&mut self) {
        self.emphasis.retarget(
            Emphasis::for_selection(self.selected.is_some()),
            Instant::now(),
        );
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mood_picker::options::MOOD_OPTIONS;

    fn celebratory() -> MoodOption {
        MOOD_OPTIONS
            .iter()
            .copied()
            .find(|o| o.symbol == "🥳")
            .expect("catalog contains the celebratory mood")
    }

    #[test]
    fn initial_state_is_picking_with_nothing_highlighted() {
        let state = State::new();
        assert!(!state.is_confirmed());
        assert!(state.selected().is_none());
        assert_eq!(state.emphasis(), Emphasis::DIMMED);
    }

    #[test]
    fn selecting_a_mood_highlights_it() {
        let mut state = State::new();
        let effect = state.update(Message::MoodPressed(MOOD_OPTIONS[0]));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.selected(), Some(MOOD_OPTIONS[0]));
    }

    #[test]
    fn reselecting_the_same_mood_is_idempotent() {
        let mut state = State::new();
        state.update(Message::MoodPressed(MOOD_OPTIONS[1]));
        state.update(Message::MoodPressed(MOOD_OPTIONS[1]));
        assert_eq!(state.selected(), Some(MOOD_OPTIONS[1]));
        assert!(!state.is_confirmed());
    }

    #[test]
    fn selecting_another_mood_replaces_the_highlight() {
        let mut state = State::new();
        state.update(Message::MoodPressed(MOOD_OPTIONS[0]));
        state.update(Message::MoodPressed(MOOD_OPTIONS[2]));
        assert_eq!(state.selected(), Some(MOOD_OPTIONS[2]));
    }

    #[test]
    fn choose_without_highlight_is_a_silent_noop() {
        let mut state = State::new();
        let effect = state.update(Message::ChoosePressed);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_confirmed());
        assert!(state.selected().is_none());
    }

    #[test]
    fn choose_emits_once_and_resets_highlight() {
        let mut state = State::new();
        state.update(Message::MoodPressed(celebratory()));

        let effect = state.update(Message::ChoosePressed);
        assert_eq!(effect, Effect::MoodChosen(celebratory()));
        assert!(state.is_confirmed());
        assert!(state.selected().is_none());

        // A second press in confirmed mode emits nothing further
        let effect = state.update(Message::ChoosePressed);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn choose_another_restarts_a_fresh_cycle() {
        let mut state = State::new();
        state.update(Message::MoodPressed(MOOD_OPTIONS[3]));
        state.update(Message::ChoosePressed);
        assert!(state.is_confirmed());

        let effect = state.update(Message::ChooseAnotherPressed);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_confirmed());
        // The previously confirmed mood does not come back highlighted
        assert!(state.selected().is_none());
    }

    #[test]
    fn mood_press_in_confirmed_mode_is_ignored() {
        let mut state = State::new();
        state.update(Message::MoodPressed(MOOD_OPTIONS[0]));
        state.update(Message::ChoosePressed);

        state.update(Message::MoodPressed(MOOD_OPTIONS[1]));
        assert!(state.selected().is_none());
        assert!(state.is_confirmed());
    }

    #[test]
    fn selection_drives_emphasis_target() {
        let mut state = State::new();
        assert!(!state.is_animating());

        state.update(Message::MoodPressed(MOOD_OPTIONS[0]));
        assert!(state.is_animating());

        // Confirming clears the selection and dims the button again
        state.update(Message::ChoosePressed);
        state.update(Message::Tick(
            Instant::now() + crate::ui::design_tokens::animation::EMPHASIS_TRANSITION,
        ));
        assert_eq!(state.emphasis(), Emphasis::DIMMED);
        assert!(!state.is_animating());
    }

    #[test]
    fn tick_never_emits_an_effect() {
        let mut state = State::new();
        state.update(Message::MoodPressed(MOOD_OPTIONS[0]));
        let effect = state.update(Message::Tick(Instant::now()));
        assert_eq!(effect, Effect::None);
    }
}
