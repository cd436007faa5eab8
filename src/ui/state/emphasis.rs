// SPDX-License-Identifier: MPL-2.0
//! Animated emphasis for the Choose button.
//!
//! The button is never disabled; it only dims and shrinks slightly while no
//! mood is highlighted. This module interpolates the (opacity, scale) pair
//! between its two targets with an eased, timed transition. The component
//! retargets the interpolation from its update handler and advances it on
//! tick messages; retargeting mid-flight restarts from the current value,
//! it never queues.

use crate::ui::design_tokens::{animation, lerp};
use std::time::Instant;

/// Visual emphasis of the Choose button as an (opacity, scale) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub opacity: f32,
    pub scale: f32,
}

impl Emphasis {
    /// Full emphasis, shown while a mood is highlighted.
    pub const FULL: Emphasis = Emphasis {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Reduced emphasis, shown while nothing is highlighted.
    pub const DIMMED: Emphasis = Emphasis {
        opacity: 0.6,
        scale: 0.9,
    };

    /// Target emphasis for the given selection state.
    #[must_use]
    pub fn for_selection(has_selection: bool) -> Self {
        if has_selection {
            Self::FULL
        } else {
            Self::DIMMED
        }
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Timed interpolation between the two [`Emphasis`] targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisAnimation {
    current: Emphasis,
    start: Emphasis,
    target: Emphasis,
    started_at: Option<Instant>,
}

impl EmphasisAnimation {
    /// Starts settled at the dimmed target (fresh component, no selection).
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Emphasis::DIMMED,
            start: Emphasis::DIMMED,
            target: Emphasis::DIMMED,
            started_at: None,
        }
    }

    /// The emphasis to render right now.
    #[must_use]
    pub fn current(&self) -> Emphasis {
        self.current
    }

    /// The emphasis the interpolation is heading towards.
    #[must_use]
    pub fn target(&self) -> Emphasis {
        self.target
    }

    /// True while an interpolation is in flight and ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Points the interpolation at a new target.
    ///
    /// A repeat of the active target is a no-op, so idempotent re-selection
    /// of the same mood never restarts a finished transition. Otherwise the
    /// transition restarts from the current interpolated value.
    pub fn retarget(&mut self, target: Emphasis, now: Instant) {
        if target == self.target {
            return;
        }

        self.start = self.current;
        self.target = target;

        if self.current == target {
            self.started_at = None;
        } else {
            self.started_at = Some(now);
        }
    }

    /// Advances the interpolation to `now`. Settles exactly on the target
    /// once the transition duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let duration = animation::EMPHASIS_TRANSITION;

        if elapsed >= duration {
            self.current = self.target;
            self.started_at = None;
            return;
        }

        let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = ease_in_out_quad(progress);
        self.current = Emphasis {
            opacity: lerp(self.start.opacity, self.target.opacity, eased),
            scale: lerp(self.start.scale, self.target.scale, eased),
        };
    }
}

impl Default for EmphasisAnimation {
    fn default() -> Self {
        Self::new()
    }
}
