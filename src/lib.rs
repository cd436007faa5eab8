// SPDX-License-Identifier: MPL-2.0
//! `mood_picker` is a small mood check-in widget built with the Iced GUI
//! framework.
//!
//! The user highlights one of five mood glyphs, confirms it with an
//! animated Choose button, and gets a confirmation illustration with a
//! reset action. The crate demonstrates an Elm-style component design,
//! centralized design tokens, and light/dark theming.

pub mod app;
pub mod config;
pub mod error;
pub mod icon;
pub mod ui;
