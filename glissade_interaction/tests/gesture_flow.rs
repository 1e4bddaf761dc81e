// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end flows a host would drive: behavior selection, gesture
//! dispatch, frame pumping, and delegate replacement mid-animation.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_interaction::{
    CanvasController, FrameClock, InteractionBehavior, InteractionDelegate, PhysicsConfig,
    SmoothConfig, ViewportController,
};
use glissade_transform::ScaleBounds;
use kurbo::{Point, Size, Vec2};

const FRAME: f64 = 1.0 / 60.0;

fn controller() -> Rc<RefCell<CanvasController>> {
    Rc::new(RefCell::new(CanvasController::new(
        Size::new(800.0, 600.0),
        ScaleBounds::new(1.0, 5.0),
    )))
}

#[test]
fn every_behavior_preserves_the_focal_point_at_steady_state() {
    let behaviors = [
        InteractionBehavior::Instant,
        InteractionBehavior::Physics(PhysicsConfig::default()),
        InteractionBehavior::Smooth(SmoothConfig::default()),
    ];
    let focal = Point::new(400.0, 300.0);

    for behavior in behaviors {
        let controller = controller();
        let clock = FrameClock::new();
        let mut delegate = behavior.create_delegate();
        delegate.init(controller.clone(), &clock);

        let anchor = controller.borrow().transform().view_to_doc(focal);
        delegate.zoom(focal, 2.0);
        for frame in 0..600 {
            clock.run_frame(f64::from(frame) * FRAME);
        }

        let transform = controller.borrow().transform();
        let projected = transform.doc_to_view(anchor);
        assert!(
            (projected - focal).hypot() < 1e-6,
            "{behavior:?}: focal point drifted to {projected:?}"
        );
        assert!(
            (transform.scale() - 2.0).abs() < 1e-2,
            "{behavior:?}: scale settled at {}",
            transform.scale()
        );
    }
}

#[test]
fn scale_never_leaves_bounds_under_arbitrary_zoom_sequences() {
    let deltas = [10.0, 0.01, 3.0, 0.2, 100.0, 1e-4, 2.0, 0.5];
    let behaviors = [
        InteractionBehavior::Instant,
        InteractionBehavior::Physics(PhysicsConfig::default()),
        InteractionBehavior::Smooth(SmoothConfig::default()),
    ];

    for behavior in behaviors {
        let controller = controller();
        let clock = FrameClock::new();
        let mut delegate = behavior.create_delegate();
        delegate.init(controller.clone(), &clock);

        let mut now = 0.0;
        for &scale_delta in &deltas {
            delegate.zoom(Point::new(123.0, 456.0), scale_delta);
            for _ in 0..120 {
                clock.run_frame(now);
                let scale = controller.borrow().current_scale();
                assert!(
                    (1.0..=5.0).contains(&scale),
                    "{behavior:?}: scale {scale} escaped bounds"
                );
                now += FRAME;
            }
        }
    }
}

#[test]
fn behavior_change_detection_drives_delegate_recreation() {
    let controller = controller();
    let clock = FrameClock::new();

    let mut current = InteractionBehavior::Smooth(SmoothConfig::default());
    let mut delegate = current.create_delegate();
    delegate.init(controller.clone(), &clock);

    // Same desired behavior: the host keeps the delegate.
    let desired = InteractionBehavior::Smooth(SmoothConfig::default());
    assert_eq!(current, desired);

    // Changed behavior: dispose the old delegate mid-animation and bind a
    // fresh one; the transform continues from wherever the old one left it.
    delegate.pan(Vec2::new(40.0, 0.0));
    for frame in 0..5 {
        clock.run_frame(f64::from(frame) * FRAME);
    }
    let desired = InteractionBehavior::Physics(PhysicsConfig::default());
    assert_ne!(current, desired);
    delegate.dispose();
    assert_eq!(clock.callback_count(), 0, "old delegate must unsubscribe");
    let handoff = controller.borrow().transform();

    current = desired;
    let mut delegate = current.create_delegate();
    delegate.init(controller.clone(), &clock);
    assert_eq!(
        controller.borrow().transform(),
        handoff,
        "binding a delegate must not move the transform"
    );

    delegate.zoom(Point::new(400.0, 300.0), 3.0);
    for frame in 5..605 {
        clock.run_frame(f64::from(frame) * FRAME);
    }
    assert!(
        (controller.borrow().current_scale() - 3.0).abs() < 1e-2,
        "new delegate should animate from the handoff state"
    );
}

#[test]
fn interleaved_gestures_keep_the_last_channel_only() {
    let controller = controller();
    let clock = FrameClock::new();
    let mut delegate = InteractionBehavior::Physics(PhysicsConfig::default()).create_delegate();
    delegate.init(controller.clone(), &clock);

    let mut now = 0.0;
    // Rapid alternation; the final gesture is a zoom, so at steady state the
    // scale has settled and the translation only reflects zoom anchoring.
    for _ in 0..3 {
        delegate.pan(Vec2::new(10.0, 10.0));
        clock.run_frame(now);
        now += FRAME;
        delegate.zoom(Point::new(400.0, 300.0), 1.2);
        clock.run_frame(now);
        now += FRAME;
    }
    let settled_scale = {
        for _ in 0..600 {
            clock.run_frame(now);
            now += FRAME;
        }
        controller.borrow().current_scale()
    };
    let frozen = controller.borrow().transform();
    for _ in 0..60 {
        clock.run_frame(now);
        now += FRAME;
    }
    assert_eq!(
        controller.borrow().transform(),
        frozen,
        "both channels should be at rest"
    );
    assert!(
        (1.0..=5.0).contains(&settled_scale),
        "scale {settled_scale} escaped bounds"
    );
}
