// SPDX-License-Identifier: MPL-2.0
//! The fixed mood catalog.

/// One selectable mood: a display glyph plus its human-readable label.
///
/// The symbol doubles as selection identity, which is why the catalog keeps
/// symbols distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub symbol: &'static str,
    pub label: &'static str,
}

/// The five moods offered by the picker, in display order.
pub const MOOD_OPTIONS: [MoodOption; 5] = [
    MoodOption {
        symbol: "🧑‍💻",
        label: "studious",
    },
    MoodOption {
        symbol: "🤔",
        label: "pensive",
    },
    MoodOption {
        symbol: "😊",
        label: "happy",
    },
    MoodOption {
        symbol: "🥳",
        label: "celebratory",
    },
    MoodOption {
        symbol: "😤",
        label: "frustrated",
    },
];
