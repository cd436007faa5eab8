// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat surface fill behind the whole screen.
pub fn surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// The bordered card framing the mood picker.
pub fn picker_card(frame_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: frame_color,
            width: border::THICK,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn picker_card_has_thick_border() {
        let style = picker_card(palette::ACCENT_500)(&Theme::Dark);
        assert_eq!(style.border.width, border::THICK);
        assert!(style.background.is_none());
    }

    #[test]
    fn surface_fills_background() {
        let style = surface(palette::GRAY_900)(&Theme::Dark);
        assert!(style.background.is_some());
    }
}
