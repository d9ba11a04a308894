use serde::Deserialize;

/// Layout direction of the scrubber track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Visibility phase of the preview.
///
/// `Showing` and `Hiding` last until the animator reports that its sequence
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Showing,
    Shown,
    Hiding,
}

impl Phase {
    /// True while the preview is visible or on its way to being visible.
    pub fn is_showing(self) -> bool {
        matches!(self, Phase::Showing | Phase::Shown)
    }
}
