// SPDX-License-Identifier: MPL-2.0
//! Mood picker rendering for both view modes.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::mood_picker::component::{Message, State};
use crate::ui::mood_picker::options::MOOD_OPTIONS;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::theming::{AppTheme, ColorScheme};
use iced::widget::svg::Handle;
use iced::widget::{Button, Column, Container, Row, Svg, Text};
use iced::{alignment, Element, Length};

/// Confirmation illustration, embedded so packaging never has to locate
/// assets on disk.
const ILLUSTRATION: &[u8] = include_bytes!("../../../assets/illustrations/butterflies.svg");

const HEADING: &str = "How are you right now?";
const CHOOSE_LABEL: &str = "Choose";
const CHOOSE_ANOTHER_LABEL: &str = "Choose another!";

/// Renders the picker card in whichever mode `state` is in.
pub fn view(state: &State, app_theme: &AppTheme) -> Element<'static, Message> {
    let colors = &app_theme.colors;

    let content = if state.is_confirmed() {
        confirmed_view(colors)
    } else {
        picking_view(state, colors)
    };

    Container::new(content)
        .style(styles::container::picker_card(theme::picker_frame_color(
            colors,
        )))
        .padding(spacing::LG)
        .into()
}

/// Picking mode: heading, the five mood cells, and the animated Choose
/// button.
fn picking_view(state: &State, colors: &ColorScheme) -> Element<'static, Message> {
    let heading = Text::new(HEADING)
        .size(typography::HEADING)
        .color(theme::heading_color(colors))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut mood_row = Row::new().spacing(spacing::XS);
    for option in MOOD_OPTIONS {
        let is_selected = state.selected() == Some(option);

        let glyph = Button::new(
            Text::new(option.symbol)
                .size(typography::GLYPH)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::MOOD_ITEM))
        .height(Length::Fixed(sizing::MOOD_ITEM))
        .style(styles::button::mood_option(
            is_selected,
            theme::selected_mood_fill(colors),
            theme::selected_mood_ring(colors),
        ))
        .on_press(Message::MoodPressed(option));

        // A blank caption keeps the row height stable while nothing is
        // highlighted.
        let caption = Text::new(if is_selected { option.label } else { " " })
            .size(typography::CAPTION)
            .color(theme::mood_label_color(colors))
            .width(Length::Fixed(sizing::MOOD_ITEM))
            .align_x(alignment::Horizontal::Center);

        mood_row = mood_row.push(
            Column::new()
                .push(glyph)
                .push(caption)
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center),
        );
    }

    // The button scales and dims with the emphasis interpolation; it stays
    // pressable throughout, the empty-selection guard lives in `update`.
    let emphasis = state.emphasis();
    let choose = Button::new(
        Text::new(CHOOSE_LABEL)
            .size(typography::BODY * emphasis.scale)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ACTION_BUTTON_WIDTH * emphasis.scale))
    .padding(spacing::SM * emphasis.scale)
    .style(styles::button::action(
        theme::action_button_fill(colors),
        theme::action_button_text(colors),
        emphasis.opacity,
    ))
    .on_press(Message::ChoosePressed);

    Column::new()
        .push(heading)
        .push(mood_row)
        .push(choose)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Confirmed mode: the illustration plus the reset button.
fn confirmed_view(colors: &ColorScheme) -> Element<'static, Message> {
    let illustration = Svg::new(Handle::from_memory(ILLUSTRATION))
        .width(Length::Fixed(sizing::ILLUSTRATION_WIDTH))
        .height(Length::Fixed(sizing::ILLUSTRATION_HEIGHT));

    let choose_another = Button::new(
        Text::new(CHOOSE_ANOTHER_LABEL)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ACTION_BUTTON_WIDTH))
    .padding(spacing::SM)
    .style(styles::button::action(
        theme::action_button_fill(colors),
        theme::action_button_text(colors),
        1.0,
    ))
    .on_press(Message::ChooseAnotherPressed);

    Column::new()
        .push(illustration)
        .push(choose_another)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mood_picker::component;

    #[test]
    fn view_renders_in_picking_mode() {
        let state = State::new();
        let _element = view(&state, &AppTheme::default());
        // Smoke test to ensure the view builds without panicking.
    }

    #[test]
    fn view_renders_in_confirmed_mode() {
        let mut state = State::new();
        state.update(component::Message::MoodPressed(MOOD_OPTIONS[0]));
        state.update(component::Message::ChoosePressed);
        assert!(state.is_confirmed());

        let _element = view(&state, &AppTheme::default());
    }
}
