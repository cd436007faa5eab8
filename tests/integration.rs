// SPDX-License-Identifier: MPL-2.0
use mood_picker::config::{self, Config};
use mood_picker::ui::mood_picker::{Effect, Message, State, MOOD_OPTIONS};
use mood_picker::ui::state::Emphasis;
use mood_picker::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn full_selection_cycle_emits_exactly_once() {
    let mut state = State::new();

    // Browse a few moods before settling on one
    assert_eq!(state.update(Message::MoodPressed(MOOD_OPTIONS[0])), Effect::None);
    assert_eq!(state.update(Message::MoodPressed(MOOD_OPTIONS[3])), Effect::None);
    assert_eq!(state.selected(), Some(MOOD_OPTIONS[3]));

    // Confirm: one emission, then confirmed mode with nothing highlighted
    let effect = state.update(Message::ChoosePressed);
    assert_eq!(effect, Effect::MoodChosen(MOOD_OPTIONS[3]));
    assert!(state.is_confirmed());
    assert!(state.selected().is_none());

    // Reset starts a fresh cycle
    assert_eq!(state.update(Message::ChooseAnotherPressed), Effect::None);
    assert!(!state.is_confirmed());
    assert!(state.selected().is_none());

    // A second cycle works the same way
    state.update(Message::MoodPressed(MOOD_OPTIONS[1]));
    assert_eq!(
        state.update(Message::ChoosePressed),
        Effect::MoodChosen(MOOD_OPTIONS[1])
    );
}

#[test]
fn celebratory_confirmation_carries_symbol_and_label() {
    let mut state = State::new();
    let celebratory = MOOD_OPTIONS
        .into_iter()
        .find(|o| o.symbol == "🥳")
        .expect("catalog contains the celebratory mood");

    state.update(Message::MoodPressed(celebratory));
    match state.update(Message::ChoosePressed) {
        Effect::MoodChosen(option) => {
            assert_eq!(option.symbol, "🥳");
            assert_eq!(option.label, "celebratory");
        }
        Effect::None => panic!("confirmation must emit the chosen mood"),
    }
}

#[test]
fn emphasis_follows_the_selection_across_a_cycle() {
    let mut state = State::new();
    assert_eq!(state.emphasis(), Emphasis::DIMMED);

    // Highlighting kicks off the transition towards full emphasis
    state.update(Message::MoodPressed(MOOD_OPTIONS[2]));
    assert!(state.is_animating());

    // Run the interpolation to completion
    let deadline = std::time::Instant::now()
        + mood_picker::ui::design_tokens::animation::EMPHASIS_TRANSITION;
    state.update(Message::Tick(deadline));
    assert_eq!(state.emphasis(), Emphasis::FULL);
    assert!(!state.is_animating());

    // Confirming clears the selection, which dims the button again
    state.update(Message::ChoosePressed);
    let deadline =
        deadline + mood_picker::ui::design_tokens::animation::EMPHASIS_TRANSITION;
    state.update(Message::Tick(deadline));
    assert_eq!(state.emphasis(), Emphasis::DIMMED);
}

#[test]
fn theme_mode_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    // 1. Initial config: light
    let initial = Config {
        theme_mode: ThemeMode::Light,
    };
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(loaded.theme_mode, ThemeMode::Light);

    // 2. Change config to dark
    let dark = Config {
        theme_mode: ThemeMode::Dark,
    };
    config::save_to_path(&dark, &path).expect("Failed to write dark config file");
    let loaded = config::load_from_path(&path).expect("Failed to load dark config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);

    dir.close().expect("Failed to close temporary directory");
}
