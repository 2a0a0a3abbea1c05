#[cfg(test)]
mod tests {
    use crate::*;
    use applause_core::{AnimationSpec, Easing};
    use web_time::{Duration, Instant};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn label() -> TargetHandle {
        TargetHandle::new(7).with_attr("data-refkey", "count-label")
    }

    fn fade_and_rise() -> Tween {
        Tween::new(label(), AnimationSpec::tween(ms(100), Easing::Linear))
            .animate(Property::Opacity, 0.0, 1.0)
            .animate(Property::TranslateY, 0.0, -30.0)
            .then(AnimationSpec::tween(ms(100), Easing::Linear).with_delay(ms(100)))
            .animate(Property::Opacity, 1.0, 0.0)
            .animate(Property::TranslateY, -30.0, -80.0)
    }

    fn value(samples: &[(Property, f32)], property: Property) -> f32 {
        samples
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn test_handle_attributes() {
        let h = TargetHandle::new(1)
            .with_attr("data-refkey", "button")
            .with_attr("data-refkey", "total-label");
        assert_eq!(h.id(), TargetId(1));
        assert_eq!(h.attr("data-refkey"), Some("total-label"));
        assert_eq!(h.attr("missing"), None);
    }

    #[test]
    fn test_chained_phases_are_scheduled_back_to_back() {
        let tween = fade_and_rise();
        assert_eq!(tween.phase_offsets().as_slice(), &[ms(0), ms(100)]);
        assert_eq!(tween.span(), ms(300));
    }

    #[test]
    fn test_sample_follows_phases() {
        let tween = fade_and_rise();

        let start = tween.sample(ms(0));
        assert_eq!(value(&start, Property::Opacity), 0.0);
        assert_eq!(value(&start, Property::TranslateY), 0.0);

        let mid_first = tween.sample(ms(50));
        assert!((value(&mid_first, Property::Opacity) - 0.5).abs() < 1e-4);

        // Second phase is waiting out its delay: it holds its starting values.
        let waiting = tween.sample(ms(150));
        assert_eq!(value(&waiting, Property::Opacity), 1.0);
        assert_eq!(value(&waiting, Property::TranslateY), -30.0);

        let end = tween.sample(ms(300));
        assert_eq!(value(&end, Property::Opacity), 0.0);
        assert_eq!(value(&end, Property::TranslateY), -80.0);
    }

    #[test]
    fn test_placeholder_replay_is_noop() {
        let mut tl = Timeline::placeholder();
        tl.add([Primitive::from(fade_and_rise())]);
        assert!(tl.primitives().is_empty());
        assert!(!tl.replay(Instant::now()));
        assert_eq!(tl.plays(), 0);
    }

    #[test]
    fn test_replay_restarts_from_zero() {
        let t0 = Instant::now();
        let mut tl = Timeline::new();
        tl.add([Primitive::from(fade_and_rise())]);
        assert_eq!(tl.duration(), ms(300));
        assert!(!tl.is_running(t0));

        assert!(tl.replay(t0));
        assert_eq!(tl.position(t0 + ms(200)), ms(200));
        assert!(tl.is_running(t0 + ms(200)));

        assert!(tl.replay(t0 + ms(200)));
        assert_eq!(tl.position(t0 + ms(250)), ms(50));
        assert_eq!(tl.plays(), 2);

        assert_eq!(tl.position(t0 + ms(900)), ms(300));
        assert!(!tl.is_running(t0 + ms(900)));
    }

    #[test]
    fn test_duration_is_longest_primitive() {
        let burst = Burst {
            center: TargetHandle::new(1),
            shape: Shape::Circle,
            count: 5,
            radius: ValueRange::new(50.0, 75.0),
            angle: 25.0,
            particle_radius: ValueRange::new(3.0, 0.0),
            spec: AnimationSpec::tween(ms(120), Easing::Linear).with_delay(ms(400)),
        };
        let mut tl = Timeline::new();
        tl.add([Primitive::from(fade_and_rise()), Primitive::from(burst)]);
        assert_eq!(tl.duration(), ms(520));
        assert_eq!(tl.primitives()[1].target(), TargetId(1));
    }

    #[test]
    fn test_recording_engine_counts() {
        let mut tl = Timeline::new();
        tl.add([Primitive::from(fade_and_rise())]);
        let mut engine = RecordingEngine::new();
        engine.reset_transform(&label());
        engine.prepare(&tl);
        tl.replay(Instant::now());
        engine.play(&tl);
        assert_eq!(
            engine.events(),
            &[
                EngineEvent::ResetTransform(TargetId(7)),
                EngineEvent::Prepared { primitives: 1 },
                EngineEvent::Played {
                    primitives: 1,
                    plays: 1
                },
            ]
        );
        assert_eq!(engine.plays(), 1);
        assert_eq!(engine.prepared(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_primitive_serializes() {
        let json = serde_json::to_value(Primitive::from(fade_and_rise())).unwrap();
        assert_eq!(json["Tween"]["target"]["id"], 7);
        assert_eq!(json["Tween"]["phases"].as_array().map(Vec::len), Some(2));
    }
}
