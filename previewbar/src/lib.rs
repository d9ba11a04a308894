//! Scrub-synchronized preview overlay for seek bars.
//!
//! While the user drags a [`SeekBar`] (or any host slider implementing
//! [`Scrubber`]), a [`PreviewDelegate`] keeps a preview overlay positioned
//! over the thumb and animates it in and out with a pluggable
//! [`PreviewAnimator`]. Rendering is left to the host, which draws the
//! [`Stage`] after every [`PreviewDelegate::tick`].

pub mod animation;
pub mod animator;
pub mod bar;
pub mod config;
pub mod delegate;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod listener;
pub mod seek_bar;
pub mod stage;
pub mod transitions;
pub mod types;

pub use animation::{AnimationEngine, EndReason, Timeline, Tween, TweenEnd, TweenId};
pub use animator::{
    AnimatorContext, FadeAnimator, MorphAnimator, MorphPhase, MorphTimings, PreviewAnimator,
    Settled,
};
pub use bar::{Scrubber, ScrubberState};
pub use config::{AnimatorKind, PreviewConfig};
pub use delegate::PreviewDelegate;
pub use error::SetupError;
pub use geometry::{frame_x, progress_fraction, FrameBounds, MorphPath};
pub use layout::{HostLayout, LayoutNode, NodeKind, OverlayHandle, PreviewLayout, Rect};
pub use listener::{ListenerSet, PreviewLoader, ScrubListener, VisibilityListener};
pub use seek_bar::SeekBar;
pub use stage::{ElementId, ElementState, Property, Stage};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
