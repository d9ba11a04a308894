use std::time::Duration;

use previewbar::{
    AnimationEngine, Easing, ElementId, EndReason, Property, Stage, Timeline, TransitionConfig,
    Tween,
};

fn tween(property: Property, from: f32, to: f32, ms: u64, easing: Easing) -> Tween {
    Tween::new(
        ElementId::Overlay,
        property,
        from,
        to,
        TransitionConfig::millis(ms, easing),
    )
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // Quadratic: slow start
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert!((Easing::EaseIn.apply(0.25) - 0.0625).abs() < 0.0001);
}

#[test]
fn test_easing_ease_out() {
    // Quadratic: fast start
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out() {
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries_and_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);

        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Timeline Tests
// =============================================================================

#[test]
fn test_timeline_writes_interpolated_values() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    timeline.start(tween(Property::Alpha, 0.0, 1.0, 100, Easing::Linear));

    let ended = timeline.advance(&mut stage, Duration::from_millis(25));
    assert!(ended.is_empty());
    assert!((stage.overlay.alpha - 0.25).abs() < 0.0001);

    let ended = timeline.advance(&mut stage, Duration::from_millis(75));
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].reason, EndReason::Completed);
    assert_eq!(ended[0].remaining, Duration::ZERO);
    assert_eq!(stage.overlay.alpha, 1.0);
    assert!(!timeline.has_active());
}

#[test]
fn test_timeline_never_completes_inside_start() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    timeline.start(tween(Property::X, 0.0, 10.0, 0, Easing::Linear));

    assert!(timeline.is_running(ElementId::Overlay, Property::X));
    assert_eq!(stage.overlay.x, 0.0);

    let ended = timeline.advance(&mut stage, Duration::ZERO);
    assert_eq!(ended.len(), 1);
    assert_eq!(stage.overlay.x, 10.0);
}

#[test]
fn test_timeline_reports_in_start_order() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    let first = timeline.start(tween(Property::X, 0.0, 1.0, 50, Easing::Linear));
    let second = timeline.start(tween(Property::Y, 0.0, 1.0, 50, Easing::Linear));

    let ended = timeline.advance(&mut stage, Duration::from_millis(60));
    let ids: Vec<_> = ended.iter().map(|end| end.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_timeline_cancel_keeps_last_value() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    timeline.start(tween(Property::X, 0.0, 100.0, 100, Easing::Linear));
    timeline.advance(&mut stage, Duration::from_millis(40));

    let end = timeline
        .cancel(ElementId::Overlay, Property::X)
        .expect("tween was running");
    assert!(end.is_cancelled());
    assert!((stage.overlay.x - 40.0).abs() < 0.001);

    assert!(timeline.advance(&mut stage, Duration::from_millis(100)).is_empty());
    assert!((stage.overlay.x - 40.0).abs() < 0.001);
    assert!(timeline.cancel(ElementId::Overlay, Property::X).is_none());
}

#[test]
fn test_timeline_cancel_element() {
    let mut timeline = Timeline::new();
    timeline.start(tween(Property::X, 0.0, 1.0, 50, Easing::Linear));
    timeline.start(tween(Property::Alpha, 0.0, 1.0, 50, Easing::Linear));
    timeline.start(Tween::new(
        ElementId::Morph,
        Property::Scale,
        0.0,
        1.0,
        TransitionConfig::millis(50, Easing::Linear),
    ));

    let ended = timeline.cancel_element(ElementId::Overlay);
    assert_eq!(ended.len(), 2);
    assert!(timeline.is_running(ElementId::Morph, Property::Scale));
}

#[test]
fn test_timeline_next_completion() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    assert_eq!(timeline.next_completion(), None);

    timeline.start(tween(Property::X, 0.0, 1.0, 100, Easing::Linear));
    timeline.start(tween(Property::Y, 0.0, 1.0, 30, Easing::Linear));
    timeline.advance(&mut stage, Duration::from_millis(10));

    assert_eq!(timeline.next_completion(), Some(Duration::from_millis(20)));
}

#[test]
fn test_timeline_reduced_motion_completes_on_next_advance() {
    let mut timeline = Timeline::new();
    let mut stage = Stage::new();
    timeline.set_reduced_motion(true);
    timeline.start(tween(Property::Alpha, 1.0, 0.0, 350, Easing::EaseIn));

    let ended = timeline.advance(&mut stage, Duration::from_millis(1));
    assert_eq!(ended.len(), 1);
    assert_eq!(stage.overlay.alpha, 0.0);
}
