// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! The title-bar icon is rasterized at runtime from the embedded branding
//! SVG. Any parse or render failure yields `None` and the window simply
//! runs without an icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Embedded so packaging never has to locate assets on disk.
const ICON_SVG: &[u8] = include_bytes!("../assets/branding/mood_picker.svg");

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG to an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / source.width(),
        ICON_SIZE as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
