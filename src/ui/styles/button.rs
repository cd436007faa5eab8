// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, radius, with_alpha};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for one pressable mood glyph cell. A highlighted cell gets the
/// brand fill plus a ring; an idle cell stays transparent so only the
/// glyph shows.
pub fn mood_option(
    selected: bool,
    fill: Color,
    ring: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        if selected {
            button::Style {
                background: Some(Background::Color(fill)),
                text_color: ring,
                border: Border {
                    color: ring,
                    width: border::THICK,
                    radius: radius::ROUND.into(),
                },
                ..button::Style::default()
            }
        } else {
            let background = match status {
                button::Status::Hovered => Some(Background::Color(with_alpha(fill, 0.15))),
                _ => None,
            };
            button::Style {
                background,
                text_color: fill,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: border::THICK,
                    radius: radius::ROUND.into(),
                },
                ..button::Style::default()
            }
        }
    }
}

/// Style for the Choose / Choose another action buttons.
///
/// `emphasis_opacity` is the animated alpha supplied by the emphasis
/// interpolation; it multiplies both the fill and the label so the whole
/// button dims as one unit.
pub fn action(
    fill: Color,
    text: Color,
    emphasis_opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => (emphasis_opacity * opacity::HOVER).max(0.0),
            _ => emphasis_opacity,
        };

        button::Style {
            background: Some(Background::Color(with_alpha(fill, alpha))),
            text_color: with_alpha(text, alpha),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}
