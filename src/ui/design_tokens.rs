// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C
Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Animation**: Transition timing

## Examples

```
use mood_picker::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim the accent color
let dimmed = Color {
    a: opacity::EMPHASIS_DIMMED,
    ..palette::ACCENT_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (muted purple scale)
    pub const ACCENT_100: Color = Color::from_rgb(0.88, 0.89, 0.95);
    pub const ACCENT_200: Color = Color::from_rgb(0.72, 0.75, 0.88);
    pub const ACCENT_400: Color = Color::from_rgb(0.42, 0.46, 0.64);
    pub const ACCENT_500: Color = Color::from_rgb(0.27, 0.30, 0.45);
    pub const ACCENT_600: Color = Color::from_rgb(0.22, 0.24, 0.38);
    pub const ACCENT_700: Color = Color::from_rgb(0.16, 0.18, 0.30);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Choose button at rest with no mood highlighted.
    pub const EMPHASIS_DIMMED: f32 = 0.6;
    pub const HOVER: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of one pressable mood glyph cell.
    pub const MOOD_ITEM: f32 = 60.0;
    /// Width of the Choose / Choose another buttons at full emphasis.
    pub const ACTION_BUTTON_WIDTH: f32 = 150.0;
    /// Rendered size of the confirmation illustration (3:2 viewbox).
    pub const ILLUSTRATION_WIDTH: f32 = 240.0;
    pub const ILLUSTRATION_HEIGHT: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Mood label under a highlighted glyph.
    pub const CAPTION: f32 = 10.0;
    pub const BODY: f32 = 14.0;
    pub const HEADING: f32 = 20.0;
    /// Emoji glyph inside a mood cell.
    pub const GLYPH: f32 = 24.0;
}

// ============================================================================
// Border & Radius Scales
// ============================================================================

pub mod border {
    pub const THIN: f32 = 1.0;
    pub const THICK: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 20.0;
    /// Half of `sizing::MOOD_ITEM`, makes the glyph cell circular.
    pub const ROUND: f32 = 30.0;
}

// ============================================================================
// Animation
// ============================================================================

pub mod animation {
    use std::time::Duration;

    /// Length of the Choose button emphasis transition.
    pub const EMPHASIS_TRANSITION: Duration = Duration::from_millis(300);
    /// Tick interval while an emphasis transition is in flight (~60 fps).
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
}

/// Interpolation helper shared by animated tokens.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Applies an alpha multiplier to a color without touching its hue.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}
