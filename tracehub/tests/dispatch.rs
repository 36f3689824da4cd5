//! End-to-end dispatch behavior: gating, fan-out, rendering.

use std::sync::{Arc, Mutex};
use tracehub::{
    Dispatcher, Level, RegisterError, RenderOutcome, Subscriber, WithoutSource, level_text,
    testing::{CountingSubscriber, RecordingSubscriber},
};

mod common;
use common::{OrderRecordingSubscriber, Unrendered};

#[test]
fn test_debug_gated_at_info_threshold() {
    let tracer = Dispatcher::<WithoutSource>::new();
    let recorder = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(recorder.clone());

    assert_eq!(tracer.level(), Level::Info);

    tracer.emit(Level::Debug, (), format_args!("x={}", 5));
    assert_eq!(recorder.count(), 0);

    tracer.emit(Level::Info, (), format_args!("x={}", 5));
    let records = recorder.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].message, "x=5");
}

#[test]
fn test_sixth_registration_ignored() {
    let tracer = Dispatcher::<WithoutSource>::new();
    let counter = CountingSubscriber::new();

    for _ in 0..6 {
        tracer.register(counter.clone());
    }
    assert_eq!(tracer.subscriber_count(), 5);

    tracer.emit(Level::Info, (), format_args!("x={}", 5));
    assert_eq!(counter.count(), 5);
}

#[test]
fn test_try_register_reports_full_registry() {
    let tracer = Dispatcher::<WithoutSource, 2>::new();

    assert_eq!(tracer.try_register(CountingSubscriber::new()), Ok(0));
    assert_eq!(tracer.try_register(CountingSubscriber::new()), Ok(1));
    assert_eq!(
        tracer.try_register(CountingSubscriber::new()),
        Err(RegisterError::RegistryFull { capacity: 2 })
    );
    assert_eq!(tracer.subscriber_count(), 2);
}

#[test]
fn test_short_message_fits_stack_buffer() {
    let tracer = Dispatcher::<WithoutSource, 5, 8>::new();
    let recorder = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(recorder.clone());

    let outcome = tracer
        .dispatch(Level::Info, (), format_args!("{}-{}", 42, "ok"))
        .unwrap();

    assert_eq!(outcome.render, RenderOutcome::Inline { len: 5 });
    assert_eq!(recorder.messages(), ["42-ok"]);
}

#[test]
fn test_long_message_takes_heap_path() {
    let tracer = Dispatcher::<WithoutSource, 5, 4>::new();
    let recorder = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(recorder.clone());

    let outcome = tracer
        .dispatch(Level::Info, (), format_args!("{}-{}", 42, "ok"))
        .unwrap();

    assert_eq!(outcome.render, RenderOutcome::Heap { len: 5 });
    assert_eq!(recorder.messages(), ["42-ok"]);
}

#[test]
fn test_message_longer_than_default_buffer() {
    let tracer = Dispatcher::<WithoutSource>::new();
    let recorder = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(recorder.clone());

    let payload = "a".repeat(1000);
    tracer.emit(Level::Warn, (), format_args!("{}", payload));

    assert_eq!(recorder.messages(), [payload]);
}

#[test]
fn test_refused_heap_delivers_stack_prefix() {
    let tracer: Dispatcher<WithoutSource, 5, 8> = Dispatcher::builder().heap_limit(0).build();
    let recorder = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(recorder.clone());

    let outcome = tracer
        .dispatch(Level::Error, (), format_args!("{}", "0123456789"))
        .unwrap();

    assert_eq!(
        outcome.render,
        RenderOutcome::Truncated {
            required: 10,
            kept: 8
        }
    );
    assert_eq!(outcome.delivered, 1);
    assert_eq!(recorder.messages(), ["01234567"]);
}

#[test]
fn test_delivery_follows_level_order() {
    for threshold in Level::ALL {
        let tracer = Dispatcher::<WithoutSource>::new();
        let counter = CountingSubscriber::new();
        tracer.register(counter.clone());
        tracer.set_level(threshold);

        for level in Level::ALL {
            counter.reset();
            tracer.emit(level, (), format_args!("{}", level));
            assert_eq!(
                counter.count() == 1,
                level <= threshold,
                "level {level} at threshold {threshold}"
            );
        }
    }
}

#[test]
fn test_set_level_round_trip() {
    let tracer = Dispatcher::<WithoutSource>::new();
    for level in Level::ALL {
        tracer.set_level(level);
        assert_eq!(tracer.level(), level);
    }
}

#[test]
fn test_gated_message_is_not_rendered() {
    let tracer = Dispatcher::<WithoutSource>::new();
    tracer.register(CountingSubscriber::new());

    assert!(
        tracer
            .dispatch(Level::Verbose, (), format_args!("{}", Unrendered))
            .is_none()
    );
}

#[test]
fn test_subscribers_invoked_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let tracer = Dispatcher::<WithoutSource>::new();

    for id in 1..=3 {
        tracer.register(OrderRecordingSubscriber {
            id,
            order: order.clone(),
        });
    }

    tracer.emit(Level::Info, (), format_args!("first"));
    tracer.emit(Level::Info, (), format_args!("second"));

    assert_eq!(*order.lock().unwrap(), [1, 2, 3, 1, 2, 3]);
}

#[test]
fn test_per_subscriber_level_cap() {
    let tracer = Dispatcher::<WithoutSource>::new();
    tracer.set_level(Level::Verbose);

    let everything = RecordingSubscriber::<WithoutSource>::new();
    let warnings = RecordingSubscriber::<WithoutSource>::new();
    tracer.register(everything.clone());
    tracer.register(warnings.clone().max_level(Level::Warn));

    tracer.emit(Level::Debug, (), format_args!("tick"));
    tracer.emit(Level::Warn, (), format_args!("low battery"));

    assert_eq!(everything.messages(), ["tick", "low battery"]);
    assert_eq!(warnings.messages(), ["low battery"]);
}

#[test]
fn test_level_text_labels() {
    let labels: Vec<&str> = (0..=5).map(level_text).collect();
    assert_eq!(labels, ["NONE", "ERROR", "WARN", "INFO", "DEBUG", "VERBOSE"]);
    assert_eq!(level_text(6), "????");
    assert_eq!(level_text(u8::MAX), "????");
}
