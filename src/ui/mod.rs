// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`mood_picker`] - The mood selection widget (picking + confirmed modes)
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (emphasis animation)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme color helpers consumed by the picker
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod mood_picker;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
