use std::time::Duration;

use previewbar::{
    AnimationEngine, AnimatorContext, Color, ElementId, MorphAnimator, MorphPhase,
    PreviewAnimator, PreviewLayout, Property, Rect, ScrubberState, Settled, Stage, Timeline,
};

const THUMB: i32 = 10;

struct Rig {
    animator: MorphAnimator,
    engine: Timeline,
    stage: Stage,
    bar: ScrubberState,
    layout: PreviewLayout,
}

impl Rig {
    /// Bar at y 50..60 spanning 0..200, frame 40x30 centered above the
    /// thumb at half progress.
    fn new() -> Self {
        let mut stage = Stage::new();
        let frame = Rect::new(80.0, 0.0, 40.0, 30.0);
        stage.overlay.set_bounds(frame);
        stage.tint.set_bounds(frame);

        let mut bar = ScrubberState::new(100, THUMB, Color::rgb(200, 30, 30));
        bar.progress = 50;

        Self {
            animator: MorphAnimator::default(),
            engine: Timeline::new(),
            stage,
            bar,
            layout: PreviewLayout::new(
                Rect::new(0.0, 50.0, 200.0, 10.0),
                Rect::from_size(300.0, 80.0),
            ),
        }
    }

    fn call(&mut self, f: impl FnOnce(&mut MorphAnimator, &mut AnimatorContext<'_>)) {
        let mut cx = AnimatorContext {
            stage: &mut self.stage,
            engine: &mut self.engine,
            bar: &self.bar,
            layout: &self.layout,
        };
        f(&mut self.animator, &mut cx);
    }

    fn advance(&mut self, ms: u64) -> Vec<Settled> {
        let ended = self.engine.advance(&mut self.stage, Duration::from_millis(ms));
        let mut settled = Vec::new();
        for end in &ended {
            let mut cx = AnimatorContext {
                stage: &mut self.stage,
                engine: &mut self.engine,
                bar: &self.bar,
                layout: &self.layout,
            };
            settled.extend(self.animator.on_tween_end(end, &mut cx));
        }
        settled
    }

    fn shown(mut self) -> Self {
        self.call(|a, cx| a.show(cx));
        self.advance(150);
        assert_eq!(self.advance(150), vec![Settled::Shown]);
        self
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

// =============================================================================
// Show Sequence Tests
// =============================================================================

#[test]
fn test_show_starts_on_the_thumb() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));

    assert_eq!(rig.animator.phase(), MorphPhase::MovingToShow);
    let morph = &rig.stage.morph;
    assert!(morph.visible);
    assert_eq!((morph.x, morph.y), (95.0, 50.0));
    assert_eq!(morph.scale, 0.0);
    assert_eq!(morph.color, Some(Color::rgb(200, 30, 30)));
    assert!(!rig.stage.overlay.visible);
}

#[test]
fn test_show_travels_then_reveals() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));

    assert!(rig.advance(150).is_empty());
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToShow);
    let morph = &rig.stage.morph;
    assert_eq!((morph.x, morph.y), (95.0, 10.0));
    assert_eq!(morph.scale, 3.0);
    assert!(!morph.visible);
    assert!(rig.stage.overlay.visible);
    assert!(rig.stage.tint.visible);
    assert_eq!(rig.stage.overlay.reveal_radius, Some(15.0));

    assert_eq!(rig.advance(150), vec![Settled::Shown]);
    assert_eq!(rig.animator.phase(), MorphPhase::Idle);
    assert_eq!(rig.stage.overlay.reveal_radius, None);
    assert!(!rig.stage.tint.visible);
    assert!(!rig.engine.has_active());
}

#[test]
fn test_show_while_showing_is_ignored() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));
    rig.advance(50);
    let x = rig.stage.morph.x;
    let scale = rig.stage.morph.scale;

    rig.call(|a, cx| a.show(cx));
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToShow);
    assert_eq!(rig.stage.morph.x, x);
    assert_eq!(rig.stage.morph.scale, scale);
    assert!(rig.advance(100).is_empty());
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToShow);
}

// =============================================================================
// Hide Sequence Tests
// =============================================================================

#[test]
fn test_hide_closes_then_travels_back() {
    let mut rig = Rig::new().shown();
    rig.call(|a, cx| a.hide(cx));

    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToHide);
    assert_eq!(rig.stage.overlay.reveal_radius, Some(25.0));
    assert!(rig.stage.tint.visible);

    assert!(rig.advance(125).is_empty());
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToHide);
    assert!(!rig.stage.overlay.visible);
    assert!(rig.stage.morph.visible);
    assert_eq!(rig.stage.morph.scale, 3.0);

    assert_eq!(rig.advance(125), vec![Settled::Hidden]);
    let morph = &rig.stage.morph;
    assert!(!morph.visible);
    assert_eq!((morph.x, morph.y), (95.0, 50.0));
    assert_eq!(rig.animator.phase(), MorphPhase::Idle);

    // Nothing of the reveal is left behind once hidden.
    assert_eq!(rig.stage.overlay.reveal_radius, None);
    assert_eq!(rig.stage.tint.alpha, 0.0);
    assert!(!rig.stage.tint.visible);
}

// =============================================================================
// Interruption Tests
// =============================================================================

#[test]
fn test_hide_during_travel_goes_back_from_current_position() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));
    rig.advance(75);
    // Half way through an ease-in-out.
    assert!(close(rig.stage.morph.scale, 1.5));

    rig.call(|a, cx| a.hide(cx));
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToHide);
    assert!(!rig.stage.overlay.visible);

    // Half of the hide translation is left.
    assert!(rig.advance(60).is_empty());
    assert_eq!(rig.advance(5), vec![Settled::Hidden]);
    assert!(close(rig.stage.morph.y, 50.0));
}

#[test]
fn test_hide_during_reveal_closes_from_current_radius() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));
    rig.advance(150);
    rig.advance(75);
    let radius = rig.stage.overlay.get(Property::RevealRadius);
    assert!(close(radius, 22.5));

    rig.call(|a, cx| a.hide(cx));
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToHide);
    assert!(close(rig.stage.overlay.get(Property::RevealRadius), radius));

    rig.advance(100);
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToHide);
    assert_eq!(rig.advance(125), vec![Settled::Hidden]);
}

#[test]
fn test_show_during_unreveal_opens_again() {
    let mut rig = Rig::new().shown();
    rig.call(|a, cx| a.hide(cx));
    rig.advance(60);

    rig.call(|a, cx| a.show(cx));
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToShow);
    assert!(rig.stage.overlay.visible);
    assert_eq!(rig.advance(150), vec![Settled::Shown]);
    assert_eq!(rig.stage.overlay.reveal_radius, None);
}

#[test]
fn test_show_during_travel_back_resumes_show() {
    let mut rig = Rig::new().shown();
    rig.call(|a, cx| a.hide(cx));
    rig.advance(125);
    rig.advance(40);
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToHide);

    rig.call(|a, cx| a.show(cx));
    assert_eq!(rig.animator.phase(), MorphPhase::MovingToShow);
    assert!(rig.advance(150).is_empty());
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToShow);
    assert_eq!(rig.advance(150), vec![Settled::Shown]);
}

// =============================================================================
// Move / Cancel Tests
// =============================================================================

#[test]
fn test_move_retargets_only_horizontal_travel() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));
    rig.advance(50);
    let y_target = rig.engine.target(ElementId::Morph, Property::Y);

    rig.bar.progress = 100;
    rig.stage.set_overlay_x(160.0);
    rig.call(|a, cx| a.move_preview(cx));

    assert_eq!(rig.engine.target(ElementId::Morph, Property::X), Some(175.0));
    assert_eq!(rig.engine.target(ElementId::Morph, Property::Y), y_target);
    assert_eq!(rig.engine.next_completion(), Some(Duration::from_millis(100)));

    assert!(rig.advance(100).is_empty());
    assert_eq!(rig.stage.morph.x, 175.0);
    assert_eq!(rig.animator.phase(), MorphPhase::MorphingToShow);
}

#[test]
fn test_move_while_settled_does_nothing() {
    let mut rig = Rig::new().shown();
    rig.call(|a, cx| a.move_preview(cx));
    assert!(!rig.engine.has_active());
}

#[test]
fn test_cancel_stops_everything() {
    let mut rig = Rig::new();
    rig.call(|a, cx| a.show(cx));
    rig.advance(150);
    assert!(rig.engine.has_active());

    rig.call(|a, cx| a.cancel(cx));
    assert!(!rig.engine.has_active());
    assert_eq!(rig.animator.phase(), MorphPhase::Idle);
    assert!(rig.advance(500).is_empty());
}

#[test]
fn test_color_change_retints_next_sequence() {
    let mut rig = Rig::new().shown();
    rig.bar.color = Color::rgb(0, 0, 255);
    rig.call(|a, cx| a.hide(cx));
    assert_eq!(rig.stage.morph.color, Some(Color::rgb(0, 0, 255)));
    assert_eq!(rig.stage.tint.color, Some(Color::rgb(0, 0, 255)));
}
