#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::animation::*;
    use crate::effects::*;
    use crate::scope::*;
    use crate::signal::*;
    use crate::{ObserveError, ObserveOptions, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_signal_unsubscribe_stops_delivery() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = seen.clone();
            sig.subscribe(move |v| seen.borrow_mut().push(*v))
        };
        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_read_signal() {
        let sig = signal(1);
        let mirrored = Rc::new(RefCell::new(0));
        {
            let sig2 = sig.clone();
            let mirrored = mirrored.clone();
            sig.subscribe(move |_| *mirrored.borrow_mut() = sig2.get() * 10);
        }
        sig.set(4);
        assert_eq!(*mirrored.borrow(), 40);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_itself() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let own_id = Rc::new(RefCell::new(None));
        {
            let sig2 = sig.clone();
            let seen = seen.clone();
            let own_id2 = own_id.clone();
            let id = sig.subscribe(move |v| {
                seen.borrow_mut().push(*v);
                if let Some(id) = own_id2.borrow_mut().take() {
                    sig2.unsubscribe(id);
                }
            });
            *own_id.borrow_mut() = Some(id);
        }
        sig.set(1);
        sig.set(2);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_removed_mid_round_is_skipped() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(None));
        {
            let sig2 = sig.clone();
            let hits = hits.clone();
            let second = second.clone();
            sig.subscribe(move |_| {
                hits.borrow_mut().push("first");
                if let Some(id) = second.borrow_mut().take() {
                    sig2.unsubscribe(id);
                }
            });
        }
        {
            let hits = hits.clone();
            let id = sig.subscribe(move |_| hits.borrow_mut().push("second"));
            *second.borrow_mut() = Some(id);
        }
        // A subscriber added during delivery waits for the next write.
        {
            let sig2 = sig.clone();
            let hits = hits.clone();
            sig.subscribe(move |_| {
                let hits = hits.clone();
                sig2.subscribe(move |_| hits.borrow_mut().push("late"));
            });
        }
        sig.set(1);
        assert_eq!(*hits.borrow(), vec!["first"]);
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(RefCell::new(0));
        let d = {
            let count = count.clone();
            Dispose::new(move || *count.borrow_mut() += 1)
        };
        let d2 = d.clone();
        d.run();
        d2.run();
        assert_eq!(*count.borrow(), 1);
        assert!(d.is_disposed());
        assert!(Dispose::noop().is_disposed());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scope_drop_releases() {
        let cleaned_up = Rc::new(RefCell::new(false));
        {
            let scope = Scope::new();
            let c = cleaned_up.clone();
            scope.add_disposer(move || *c.borrow_mut() = true);
        }
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scope_children_dispose_first_and_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let parent = Scope::new();
        let child = parent.child();

        for (scope, name) in [(&parent, "p1"), (&child, "c1"), (&parent, "p2")] {
            let log = log.clone();
            scope.add_disposer(move || log.borrow_mut().push(name));
        }

        parent.clone().dispose();
        assert_eq!(*log.borrow(), vec!["c1", "p2", "p1"]);
        assert!(child.is_disposed());

        // Late registration on a dead scope runs immediately.
        let log2 = log.clone();
        parent.add_disposer(move || log2.borrow_mut().push("late"));
        assert_eq!(log.borrow().last(), Some(&"late"));
    }

    #[test]
    fn test_effect_registers_in_current_scope() {
        let released = signal(false);
        let scope = Scope::new();
        let d = scope.run(|| {
            let released = released.clone();
            effect(move || on_unmount(move || released.set(true)))
        });
        assert_eq!(scope.pending_disposers(), 1);
        assert!(current_scope().is_none());
        scope.dispose();
        assert!(released.get());
        assert!(d.is_disposed());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#222"), Color(34, 34, 34, 255));
        assert_eq!(Color::from_hex("#e8ff47").to_css(), "#e8ff47");
        assert_eq!(Color(10, 10, 10, 235).to_css(), "rgba(10,10,10,0.92)");
    }

    #[test]
    fn test_intersection_ratio() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);

        let inside = Rect::new(0.0, 100.0, 1000.0, 200.0);
        assert_eq!(inside.intersection_ratio(&viewport), 1.0);

        // 30px of a 200px tall block peeking in from below: 15%.
        let peeking = Rect::new(0.0, 770.0, 1000.0, 200.0);
        assert!((peeking.intersection_ratio(&viewport) - 0.15).abs() < 1e-6);

        let below = Rect::new(0.0, 900.0, 1000.0, 200.0);
        assert_eq!(below.intersection_ratio(&viewport), 0.0);

        // Touching edges do not intersect.
        let touching = Rect::new(0.0, 800.0, 1000.0, 10.0);
        assert_eq!(touching.intersection_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_observe_options_validate() {
        assert!(ObserveOptions::threshold(0.12).validate().is_ok());
        assert_eq!(
            ObserveOptions::threshold(1.5).validate(),
            Err(ObserveError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn test_scheduler_ids() {
        let mut s = Scheduler::new();
        assert_eq!(s.id(), 1);
        assert_eq!(s.id(), 2);
        assert_eq!(s.issued(), 2);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = ManualClock::install();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        // advance 250ms
        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        clear_clock();
    }

    #[test]
    fn test_animation_delay_holds_start_value() {
        let clock = ManualClock::install();
        let spec = AnimationSpec::reveal().with_delay(Duration::from_millis(100));
        let mut a = AnimatedValue::new(0.0f32, spec);
        a.set_target(1.0);

        clock.advance(Duration::from_millis(99));
        assert!(a.update());
        assert_eq!(*a.get(), 0.0);

        clock.advance(Duration::from_millis(601));
        assert!(!a.update());
        assert_eq!(*a.get(), 1.0);
        clear_clock();
    }

    #[test]
    fn test_retarget_midway_starts_from_current() {
        let clock = ManualClock::install();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(1.0);
        clock.advance(Duration::from_millis(50));
        a.set_target(0.0);
        assert!((*a.get() - 0.5).abs() < 1e-4);
        clock.advance(Duration::from_millis(50));
        a.update();
        assert!((*a.get() - 0.25).abs() < 1e-4);
        clear_clock();
    }

    #[test]
    fn test_ease_curve_matches_css() {
        let e = Easing::Ease;
        assert_eq!(e.interpolate(0.0), 0.0);
        assert_eq!(e.interpolate(1.0), 1.0);
        // Reference values of cubic-bezier(.25,.1,.25,1).
        assert!((e.interpolate(0.25) - 0.4085).abs() < 2e-3);
        assert!((e.interpolate(0.5) - 0.8024).abs() < 2e-3);
        assert!(e.interpolate(0.75) > 0.95);
    }

    #[test]
    fn test_huge_delay_has_no_motion_start() {
        let clock = ManualClock::install();
        let spec = AnimationSpec::reveal().with_delay(Duration::from_millis(u64::MAX));
        let mut a = AnimatedValue::new(0.0f32, spec);
        a.set_target(1.0);
        assert!(a.is_animating());
        assert_eq!(a.motion_start(), None);
        assert_eq!(a.motion_end(), None);
        clock.advance(Duration::from_secs(60));
        assert!(a.update());
        assert_eq!(*a.get(), 0.0);
        clear_clock();
    }

    #[test]
    fn test_css_transition_entry() {
        let spec = AnimationSpec::reveal().with_delay(Duration::from_millis(120));
        assert_eq!(spec.css_transition("opacity"), "opacity 0.6s ease 120ms");
    }
}
