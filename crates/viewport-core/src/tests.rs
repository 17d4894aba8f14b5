#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use web_time::Duration;

    use crate::testing::*;
    use crate::watcher::{BindPath, bind};
    use crate::*;

    fn host(viewport: &FakeViewport) -> Rc<dyn ViewportCapability> {
        Rc::new(viewport.clone())
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |v| sink.borrow_mut().push(v))
    }

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
    fn test_signal_subscriber_can_read_back() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = sig.clone();
        let seen_clone = seen.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push((*v, reader.get()));
        });

        sig.set(7);
        assert_eq!(*seen.borrow(), vec![(7, 7)]);
    }

    #[test]
    fn test_signal_set_if_changed_skips_equal_values() {
        let sig = signal(false);
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        sig.subscribe(move |_| *calls_clone.borrow_mut() += 1);

        assert!(!sig.set_if_changed(false));
        assert!(sig.set_if_changed(true));
        assert!(!sig.set_if_changed(true));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        let id = sig.subscribe(move |_| *calls_clone.borrow_mut() += 1);

        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        let o = order.clone();
        scope.add_disposer(move || o.borrow_mut().push("first"));
        let o = order.clone();
        scope.add_disposer(move || o.borrow_mut().push("second"));

        assert!(order.borrow().is_empty());
        scope.dispose();
        assert_eq!(*order.borrow(), vec!["first", "second"]);

        // Already drained.
        scope.dispose();
        assert_eq!(order.borrow().len(), 2);
    }

    #[test]
    fn test_scope_drop_runs_disposers() {
        let cleaned_up = Rc::new(RefCell::new(false));
        {
            let scope = Scope::new();
            let cleaned_up_clone = cleaned_up.clone();
            scope.add_disposer(move || *cleaned_up_clone.borrow_mut() = true);
        }
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_dispose_runs_once() {
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        let d = Dispose::new(move || *calls_clone.borrow_mut() += 1);
        let d2 = d.clone();

        d.run();
        d2.run();
        assert_eq!(*calls.borrow(), 1);
        assert!(d.is_spent());
    }

    #[test]
    fn test_remember_is_stable_across_passes() {
        let composition = Composition::new();
        let first = composition.compose(|| remember(|| RefCell::new(1)));
        *first.borrow_mut() = 5;
        let second = composition.compose(|| remember(|| RefCell::new(1)));
        assert_eq!(*second.borrow(), 5);
        assert_eq!(composition.slot_count(), 1);
    }

    #[test]
    fn test_disposable_effect_reruns_on_key_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let composition = Composition::new();

        let pass = |key: u32| {
            let log = log.clone();
            composition.compose(move || {
                disposable_effect(key, move || {
                    log.borrow_mut().push(format!("start {key}"));
                    on_unmount(move || log.borrow_mut().push(format!("stop {key}")))
                })
            })
        };

        pass(1);
        pass(1);
        pass(2);
        composition.dispose();

        assert_eq!(
            *log.borrow(),
            vec!["start 1", "stop 1", "start 2", "stop 2"]
        );
    }

    #[test]
    fn test_config_defaults_and_validation() {
        let config = ViewportConfig::new(DEFAULT_MOBILE_SCREEN_SIZE, IsMobileOptions::default())
            .unwrap();
        assert_eq!(config, ViewportConfig::default());

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ViewportConfig::new(bad, IsMobileOptions::default()),
                Err(ViewportError::InvalidConfiguration {
                    field: "mobileScreenSize",
                    ..
                })
            ));
        }
        assert!(matches!(
            ViewportConfig::new(768.0, IsMobileOptions::default().debounce(-5.0)),
            Err(ViewportError::InvalidConfiguration {
                field: "debounce",
                ..
            })
        ));

        let zero = ViewportConfig::new(0.0, IsMobileOptions::default().debounce(0.0)).unwrap();
        assert_eq!(zero.threshold_px, 0.0);
    }

    #[test]
    fn test_config_rebind_rules() {
        let base = ViewportConfig::default();
        let slower = ViewportConfig {
            debounce: Duration::from_millis(50),
            ..base
        };
        let wider = ViewportConfig {
            threshold_px: 1024.0,
            ..base
        };
        let turned = ViewportConfig {
            orientation_enabled: true,
            ..base
        };
        assert!(!base.needs_rebind(&slower));
        assert!(base.needs_rebind(&wider));
        assert!(base.needs_rebind(&turned));
    }

    #[test]
    fn test_media_query_strings() {
        assert_eq!(MediaQuery::MaxWidth(768.0).to_string(), "(max-width: 768px)");
        assert_eq!(
            MediaQuery::MaxWidth(600.5).to_string(),
            "(max-width: 600.5px)"
        );
        assert_eq!(MediaQuery::Portrait.to_string(), "(orientation: portrait)");
    }

    #[test]
    fn test_media_query_evaluation() {
        assert!(MediaQuery::MaxWidth(768.0).evaluate(768.0, 100.0));
        assert!(!MediaQuery::MaxWidth(768.0).evaluate(769.0, 100.0));
        assert!(MediaQuery::Portrait.evaluate(500.0, 500.0));
        assert!(!MediaQuery::Portrait.evaluate(800.0, 600.0));
    }

    #[test]
    fn test_evaluate_threshold_reads_host() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        assert!(!evaluate_threshold(&viewport, 768.0).unwrap());
        assert!(evaluate_threshold(&viewport, 1024.0).unwrap());
        assert_eq!(viewport.stats().added(), 0);

        assert_eq!(
            evaluate_threshold(&FakeViewport::unsupported(), 768.0),
            Err(ViewportError::UnsupportedEnvironment)
        );
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis(0.0), Duration::ZERO);
        assert_eq!(millis(30.0), Duration::from_millis(30));
        assert_eq!(millis(0.5), Duration::from_micros(500));
        assert_eq!(millis(0.0004), Duration::from_micros(1));
        assert_eq!(millis(-3.0), Duration::ZERO);
    }

    #[test]
    fn test_sub_microsecond_debounce_still_defers() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let timers = viewport.test_timers();
        let classifier = ViewportClassifier::new(host(&viewport));
        let config = ViewportConfig::new(768.0, IsMobileOptions::default().debounce(0.0004)).unwrap();
        classifier.configure(config).unwrap();

        viewport.fire(&MediaQuery::MaxWidth(768.0), true);
        assert!(!classifier.classification().is_mobile());
        assert_eq!(timers.pending(), 1);

        timers.advance(Duration::from_micros(1));
        assert!(classifier.classification().is_mobile());
    }

    #[test]
    fn test_test_timers_fire_in_deadline_order() {
        let timers = TestTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("b", 20), ("a", 10), ("c", 20)] {
            let log = log.clone();
            timers.set_timeout(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(name)),
            );
        }
        let cleared = {
            let log = log.clone();
            timers.set_timeout(
                Duration::from_millis(5),
                Box::new(move || log.borrow_mut().push("cleared")),
            )
        };
        timers.clear_timeout(cleared);

        timers.advance_ms(15);
        assert_eq!(*log.borrow(), vec!["a"]);
        timers.advance_ms(5);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timers.now(), Duration::from_millis(20));
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_bind_prefers_modern() {
        let viewport = FakeViewport::new(1024.0, 768.0).with_shape(RegistrationShape::Both);
        let list = viewport.match_media(&MediaQuery::MaxWidth(768.0)).unwrap();
        let watcher = bind(list, Listener::new(|_| {})).unwrap();

        assert_eq!(watcher.path(), BindPath::Modern);
        assert_eq!(viewport.stats().modern_added, 1);
        assert_eq!(viewport.stats().legacy_added, 0);
    }

    #[test]
    fn test_bind_falls_back_to_legacy() {
        for shape in [RegistrationShape::Legacy, RegistrationShape::ModernRejects] {
            let viewport = FakeViewport::new(1024.0, 768.0).with_shape(shape);
            let list = viewport.match_media(&MediaQuery::MaxWidth(768.0)).unwrap();
            let watcher = bind(list, Listener::new(|_| {})).unwrap();

            assert_eq!(watcher.path(), BindPath::Legacy, "{shape:?}");
            assert_eq!(
                viewport.stats(),
                RegistrationStats {
                    legacy_added: 1,
                    ..Default::default()
                }
            );

            watcher.detach();
            assert_eq!(viewport.stats().legacy_removed, 1);
            assert_eq!(viewport.stats().modern_removed, 0);
        }
    }

    #[test]
    fn test_bind_without_any_api_is_unsupported() {
        let viewport = FakeViewport::new(1024.0, 768.0).with_shape(RegistrationShape::None);
        let list = viewport.match_media(&MediaQuery::MaxWidth(768.0)).unwrap();
        assert!(matches!(
            bind(list, Listener::new(|_| {})),
            Err(ViewportError::UnsupportedEnvironment)
        ));
        assert_eq!(viewport.stats(), RegistrationStats::default());
    }

    #[test]
    fn test_detach_is_idempotent_and_symmetric() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let list = viewport.match_media(&MediaQuery::MaxWidth(768.0)).unwrap();
        let (log, sink) = recorder();
        let watcher = bind(list, Listener::new(sink)).unwrap();

        viewport.resize(700.0, 900.0);
        watcher.detach();
        watcher.detach();
        drop(watcher);
        viewport.resize(1200.0, 900.0);

        assert_eq!(*log.borrow(), vec![true]);
        assert_eq!(
            viewport.stats(),
            RegistrationStats {
                modern_added: 1,
                modern_removed: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_dropping_a_watcher_detaches() {
        let viewport = FakeViewport::new(1024.0, 768.0).with_shape(RegistrationShape::Legacy);
        let list = viewport.match_media(&MediaQuery::Portrait).unwrap();
        let watcher = bind(list, Listener::new(|_| {})).unwrap();
        assert_eq!(viewport.active_listeners(), 1);
        drop(watcher);
        assert_eq!(viewport.active_listeners(), 0);
        assert_eq!(viewport.stats().legacy_removed, 1);
    }

    #[test]
    fn test_scheduler_immediate_commits_in_order() {
        let timers = Rc::new(TestTimers::new());
        let (log, sink) = recorder();
        let scheduler = UpdateScheduler::immediate("width", timers.clone(), sink);

        for v in [true, false, false, true] {
            scheduler.notify(v);
        }
        assert_eq!(*log.borrow(), vec![true, false, false, true]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_scheduler_debounce_coalesces() {
        let timers = Rc::new(TestTimers::new());
        let (log, sink) = recorder();
        let scheduler =
            UpdateScheduler::new("width", timers.clone(), Duration::from_millis(100), sink);

        scheduler.notify(true);
        timers.advance_ms(99);
        scheduler.notify(false);
        timers.advance_ms(99);
        assert!(log.borrow().is_empty());
        assert_eq!(timers.pending(), 1);

        timers.advance_ms(1);
        assert_eq!(*log.borrow(), vec![false]);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_scheduler_cancel_prevents_commit() {
        let timers = Rc::new(TestTimers::new());
        let (log, sink) = recorder();
        let scheduler =
            UpdateScheduler::new("width", timers.clone(), Duration::from_millis(50), sink);

        scheduler.notify(true);
        scheduler.cancel();
        scheduler.cancel();
        assert_eq!(timers.pending(), 0);

        scheduler.notify(false);
        timers.advance_ms(500);
        assert!(log.borrow().is_empty());
        assert!(scheduler.is_cancelled());
    }

    #[test]
    fn test_scheduler_debounce_change_applies_to_next_notification() {
        let timers = Rc::new(TestTimers::new());
        let (log, sink) = recorder();
        let scheduler =
            UpdateScheduler::new("width", timers.clone(), Duration::from_millis(100), sink);

        scheduler.notify(true);
        scheduler.set_debounce(Duration::ZERO);
        assert!(log.borrow().is_empty());

        // The undebounced notification supersedes the pending one.
        scheduler.notify(false);
        assert_eq!(*log.borrow(), vec![false]);
        timers.advance_ms(200);
        assert_eq!(*log.borrow(), vec![false]);
    }

    #[test]
    fn test_scheduler_listener_does_not_outlive_scheduler() {
        let timers = Rc::new(TestTimers::new());
        let (log, sink) = recorder();
        let scheduler = UpdateScheduler::immediate("width", timers, sink);
        let listener = scheduler.listener();

        listener.call(true);
        drop(scheduler);
        listener.call(false);
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_orientation_mapping() {
        assert_eq!(Orientation::from_portrait_match(true), Orientation::Portrait);
        assert_eq!(
            Orientation::from_portrait_match(false),
            Orientation::Landscape
        );
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
    }

    #[test]
    fn test_orientation_tracker_follows_rotation() {
        let viewport = FakeViewport::new(375.0, 812.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let (tracker, seed) =
            OrientationTracker::start(&viewport, move |o| sink.borrow_mut().push(o)).unwrap();

        assert_eq!(seed, Orientation::Portrait);
        viewport.resize(812.0, 375.0);
        viewport.resize(375.0, 812.0);
        assert_eq!(
            *seen.borrow(),
            vec![Orientation::Landscape, Orientation::Portrait]
        );

        tracker.stop();
        assert!(!tracker.is_running());
        viewport.resize(812.0, 375.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_classification_shape_helpers() {
        let flag = ViewportClassification::seed(true, None);
        assert_eq!(flag, ViewportClassification::IsMobile(true));
        assert_eq!(flag.with_orientation(Orientation::Portrait), flag);
        assert_eq!(flag.orientation(), None);

        let record = ViewportClassification::seed(false, Some(Orientation::Landscape));
        let record = record.with_mobile(true).with_orientation(Orientation::Portrait);
        assert!(record.is_mobile());
        assert_eq!(record.orientation(), Some(Orientation::Portrait));
    }

    #[test]
    fn test_classifier_identical_config_is_noop() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let classifier = ViewportClassifier::new(host(&viewport));

        classifier.configure(ViewportConfig::default()).unwrap();
        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(classifier.state(), LifecycleState::Active);
        assert_eq!(viewport.stats().added(), 1);
        assert_eq!(viewport.stats().removed(), 0);
    }

    #[test]
    fn test_classifier_debounce_change_keeps_watchers() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let timers = viewport.test_timers();
        let classifier = ViewportClassifier::new(host(&viewport));

        classifier.configure(ViewportConfig::default()).unwrap();
        let slow = ViewportConfig {
            debounce: Duration::from_millis(40),
            ..ViewportConfig::default()
        };
        classifier.configure(slow).unwrap();
        assert_eq!(viewport.stats().added(), 1);
        assert_eq!(classifier.config(), Some(slow));

        viewport.resize(700.0, 900.0);
        assert!(!classifier.classification().is_mobile());
        timers.advance_ms(40);
        assert!(classifier.classification().is_mobile());
    }

    #[test]
    fn test_classifier_threshold_change_rebinds() {
        let viewport = FakeViewport::new(900.0, 768.0);
        let classifier = ViewportClassifier::new(host(&viewport));

        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(
            classifier.classification(),
            ViewportClassification::IsMobile(false)
        );

        classifier
            .configure(ViewportConfig {
                threshold_px: 1024.0,
                ..ViewportConfig::default()
            })
            .unwrap();
        assert_eq!(
            classifier.classification(),
            ViewportClassification::IsMobile(true)
        );
        assert_eq!(viewport.stats().added(), 2);
        assert_eq!(viewport.stats().removed(), 1);
        assert_eq!(viewport.active_listeners(), 1);
    }

    #[test]
    fn test_classifier_orientation_toggle_changes_shape() {
        let viewport = FakeViewport::new(375.0, 812.0);
        let classifier = ViewportClassifier::new(host(&viewport));

        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(
            classifier.classification(),
            ViewportClassification::IsMobile(true)
        );

        classifier
            .configure(ViewportConfig {
                orientation_enabled: true,
                ..ViewportConfig::default()
            })
            .unwrap();
        assert_eq!(
            classifier.classification(),
            ViewportClassification::WithOrientation {
                is_mobile: true,
                orientation: Orientation::Portrait,
            }
        );
        assert_eq!(viewport.active_listeners(), 2);

        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(
            classifier.classification(),
            ViewportClassification::IsMobile(true)
        );
        assert_eq!(viewport.active_listeners(), 1);
        assert_eq!(viewport.stats().added(), 4);
        assert_eq!(viewport.stats().removed(), 3);
    }

    #[test]
    fn test_classifier_teardown_is_terminal() {
        let viewport = FakeViewport::new(375.0, 812.0);
        let classifier = ViewportClassifier::new(host(&viewport));
        classifier.configure(ViewportConfig::default()).unwrap();

        classifier.teardown();
        classifier.teardown();
        assert_eq!(classifier.state(), LifecycleState::TornDown);
        assert_eq!(viewport.stats().removed(), 1);

        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(classifier.state(), LifecycleState::TornDown);
        assert_eq!(viewport.stats().added(), 1);
        assert!(classifier.bind_paths().is_empty());
    }

    #[test]
    fn test_classifier_failed_orientation_bind_releases_width() {
        let viewport = FakeViewport::new(375.0, 812.0);
        let classifier = ViewportClassifier::new(host(&viewport));
        classifier.configure(ViewportConfig::default()).unwrap();

        // Registration APIs disappear before the next rebind.
        let viewport = viewport.with_shape(RegistrationShape::None);
        let err = classifier
            .configure(ViewportConfig {
                orientation_enabled: true,
                ..ViewportConfig::default()
            })
            .unwrap_err();
        assert_eq!(err, ViewportError::UnsupportedEnvironment);
        assert_eq!(classifier.state(), LifecycleState::Uninitialized);
        assert_eq!(viewport.active_listeners(), 0);
    }

    #[test]
    fn test_classifier_signal_notifies_only_on_change() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let classifier = ViewportClassifier::new(host(&viewport));
        classifier.configure(ViewportConfig::default()).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        classifier.signal().subscribe(move |c| sink.borrow_mut().push(*c));

        viewport.fire(&MediaQuery::MaxWidth(768.0), false);
        viewport.fire(&MediaQuery::MaxWidth(768.0), true);
        viewport.fire(&MediaQuery::MaxWidth(768.0), true);
        assert_eq!(*seen.borrow(), vec![ViewportClassification::IsMobile(true)]);
    }

    #[test]
    fn test_use_is_mobile_reads_without_recomputing() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let host = host(&viewport);
        let composition = Composition::new();

        for _ in 0..3 {
            let v = composition
                .compose(|| use_is_mobile(&host, 768.0, IsMobileOptions::default()))
                .unwrap();
            assert_eq!(v, ViewportClassification::IsMobile(false));
        }
        assert_eq!(viewport.stats().added(), 1);
        assert_eq!(composition.scope().pending_disposers(), 1);

        composition.dispose();
        composition.dispose();
        assert_eq!(viewport.stats().removed(), 1);
    }

    #[test]
    fn test_use_is_mobile_validation_precedes_state() {
        let viewport = FakeViewport::new(1024.0, 768.0);
        let host = host(&viewport);
        let composition = Composition::new();

        let err = composition
            .compose(|| use_is_mobile(&host, -10.0, IsMobileOptions::default()))
            .unwrap_err();
        assert!(matches!(err, ViewportError::InvalidConfiguration { .. }));
        assert_eq!(viewport.stats().added(), 0);
        assert_eq!(viewport.active_listeners(), 0);
    }

    #[test]
    fn test_use_is_mobile_failed_pass_keeps_slots_aligned() {
        let viewport = FakeViewport::new(900.0, 700.0);
        let host = host(&viewport);
        let composition = Composition::new();
        let pass = |size: f64| {
            composition.compose(|| {
                let value = use_is_mobile(&host, size, IsMobileOptions::default());
                let sibling = remember(|| Cell::new(0u32));
                sibling.set(sibling.get() + 1);
                (value, sibling.get())
            })
        };

        assert_eq!(pass(768.0), (Ok(ViewportClassification::IsMobile(false)), 1));
        assert_eq!(pass(768.0).1, 2);
        assert!(pass(-1.0).0.is_err());
        assert_eq!(pass(1024.0), (Ok(ViewportClassification::IsMobile(true)), 4));

        // The same classifier rebound once; nothing leaked.
        let stats = viewport.stats();
        assert_eq!(stats.added(), 2);
        assert_eq!(stats.removed(), 1);
        assert_eq!(viewport.active_listeners(), 1);

        composition.dispose();
        assert_eq!(viewport.active_listeners(), 0);
    }

    #[test]
    fn test_classifier_teardown_from_seed_subscriber_stays_down() {
        let viewport = FakeViewport::new(375.0, 812.0);
        let classifier = Rc::new(ViewportClassifier::new(host(&viewport)));
        let weak = Rc::downgrade(&classifier);
        classifier.signal().subscribe(move |value| {
            if value.is_mobile() {
                if let Some(classifier) = weak.upgrade() {
                    classifier.teardown();
                }
            }
        });

        classifier.configure(ViewportConfig::default()).unwrap();
        assert_eq!(classifier.state(), LifecycleState::TornDown);
        assert_eq!(classifier.config(), None);
        assert_eq!(viewport.active_listeners(), 0);
        assert_eq!(viewport.stats().removed(), viewport.stats().added());

        viewport.resize(1024.0, 768.0);
        assert!(classifier.classification().is_mobile());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_classification_json_shape() {
        let flag = serde_json::to_value(ViewportClassification::IsMobile(true)).unwrap();
        assert_eq!(flag, serde_json::json!(true));

        let record = serde_json::to_value(ViewportClassification::WithOrientation {
            is_mobile: false,
            orientation: Orientation::Landscape,
        })
        .unwrap();
        assert_eq!(
            record,
            serde_json::json!({ "isMobile": false, "orientation": "landscape" })
        );

        let options: IsMobileOptions =
            serde_json::from_value(serde_json::json!({ "enableOrientation": true })).unwrap();
        assert_eq!(options, IsMobileOptions::default().with_orientation());
    }
}
