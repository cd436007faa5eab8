// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state management.

pub mod emphasis;

pub use emphasis::{Emphasis, EmphasisAnimation};
