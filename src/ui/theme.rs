// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers consumed by the mood picker views.
//!
//! The picker defines no colors of its own; everything it renders is
//! derived from the active [`ColorScheme`](crate::ui::theming::ColorScheme)
//! through the helpers below.

use crate::ui::theming::ColorScheme;
use iced::Color;

/// Border and accent color of the picker card.
pub fn picker_frame_color(colors: &ColorScheme) -> Color {
    colors.brand_primary
}

/// Color of the heading prompt ("How are you right now?").
pub fn heading_color(colors: &ColorScheme) -> Color {
    colors.text_primary
}

/// Color of the small label under a highlighted mood glyph.
pub fn mood_label_color(colors: &ColorScheme) -> Color {
    colors.brand_primary
}

/// Fill of a highlighted mood cell.
pub fn selected_mood_fill(colors: &ColorScheme) -> Color {
    colors.brand_primary
}

/// Ring drawn around a highlighted mood cell.
pub fn selected_mood_ring(colors: &ColorScheme) -> Color {
    colors.on_brand
}

/// Fill of the Choose / Choose another action buttons.
pub fn action_button_fill(colors: &ColorScheme) -> Color {
    colors.brand_primary
}

/// Label color on the action buttons.
pub fn action_button_text(colors: &ColorScheme) -> Color {
    colors.on_brand
}
