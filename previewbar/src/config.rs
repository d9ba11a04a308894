//! Host-declared preview configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::animator::{morph, FadeAnimator, MorphAnimator, MorphTimings, PreviewAnimator};
use crate::types::Direction;

const FADE_MS: u64 = 350;

/// Per-scrubber preview configuration.
///
/// Mirrors the attributes a host layout declares on the scrubber. Every field
/// has a default, so a partial document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Show the preview while the user drags the scrubber.
    pub preview_enabled: bool,

    /// Animate showing and hiding. When false the preview appears and
    /// disappears at once.
    pub animation_enabled: bool,

    /// Hide the preview when the user releases the scrubber.
    pub auto_hide: bool,

    pub animator: AnimatorKind,

    pub direction: Direction,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            preview_enabled: true,
            animation_enabled: true,
            auto_hide: true,
            animator: AnimatorKind::default(),
            direction: Direction::Ltr,
        }
    }
}

impl PreviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview_enabled(mut self, enabled: bool) -> Self {
        self.preview_enabled = enabled;
        self
    }

    pub fn animation_enabled(mut self, enabled: bool) -> Self {
        self.animation_enabled = enabled;
        self
    }

    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn animator(mut self, animator: AnimatorKind) -> Self {
        self.animator = animator;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Which built-in animator to use, with its durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnimatorKind {
    Fade {
        #[serde(default = "default_fade_ms")]
        show_ms: u64,
        #[serde(default = "default_fade_ms")]
        hide_ms: u64,
    },
    Morph {
        #[serde(default = "default_show_translation_ms")]
        show_translation_ms: u64,
        #[serde(default = "default_reveal_ms")]
        reveal_ms: u64,
        #[serde(default = "default_unreveal_ms")]
        unreveal_ms: u64,
        #[serde(default = "default_hide_translation_ms")]
        hide_translation_ms: u64,
    },
}

impl Default for AnimatorKind {
    fn default() -> Self {
        Self::morph()
    }
}

impl AnimatorKind {
    pub fn fade() -> Self {
        Self::Fade {
            show_ms: FADE_MS,
            hide_ms: FADE_MS,
        }
    }

    pub fn morph() -> Self {
        Self::Morph {
            show_translation_ms: morph::SHOW_TRANSLATION_MS,
            reveal_ms: morph::REVEAL_MS,
            unreveal_ms: morph::UNREVEAL_MS,
            hide_translation_ms: morph::HIDE_TRANSLATION_MS,
        }
    }

    /// Create the animator this configuration describes.
    pub fn build(&self) -> Box<dyn PreviewAnimator> {
        match *self {
            AnimatorKind::Fade { show_ms, hide_ms } => Box::new(FadeAnimator::new(
                Duration::from_millis(show_ms),
                Duration::from_millis(hide_ms),
            )),
            AnimatorKind::Morph {
                show_translation_ms,
                reveal_ms,
                unreveal_ms,
                hide_translation_ms,
            } => Box::new(MorphAnimator::new(MorphTimings::from_millis(
                show_translation_ms,
                reveal_ms,
                unreveal_ms,
                hide_translation_ms,
            ))),
        }
    }
}

fn default_fade_ms() -> u64 {
    FADE_MS
}

fn default_show_translation_ms() -> u64 {
    morph::SHOW_TRANSLATION_MS
}

fn default_reveal_ms() -> u64 {
    morph::REVEAL_MS
}

fn default_unreveal_ms() -> u64 {
    morph::UNREVEAL_MS
}

fn default_hide_translation_ms() -> u64 {
    morph::HIDE_TRANSLATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: PreviewConfig =
            serde_json::from_str(r#"{ "auto_hide": false, "animator": { "kind": "fade" } }"#)
                .expect("valid config");

        assert!(config.preview_enabled);
        assert!(config.animation_enabled);
        assert!(!config.auto_hide);
        assert_eq!(config.animator, AnimatorKind::fade());
        assert_eq!(config.direction, Direction::Ltr);
    }

    #[test]
    fn test_morph_durations_override() {
        let config: PreviewConfig = serde_json::from_str(
            r#"{ "direction": "rtl", "animator": { "kind": "morph", "reveal_ms": 90 } }"#,
        )
        .expect("valid config");

        assert_eq!(config.direction, Direction::Rtl);
        match config.animator {
            AnimatorKind::Morph {
                reveal_ms,
                show_translation_ms,
                ..
            } => {
                assert_eq!(reveal_ms, 90);
                assert_eq!(show_translation_ms, morph::SHOW_TRANSLATION_MS);
            }
            other => panic!("expected morph, got {other:?}"),
        }
    }
}
