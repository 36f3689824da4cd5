//! Call-site macros against the feature-selected `Tracer`.

use std::cell::Cell;
use tracehub::{
    Level, Mode, Tracer, WriterSubscriber, testing::RecordingSubscriber, trace_debug, trace_emit,
    trace_error, trace_info, trace_verbose, trace_warn,
};

mod common;
use common::{SharedBuf, Unrendered};

#[test]
fn test_per_level_macros() {
    let tracer = Tracer::new();
    tracer.set_level(Level::Verbose);
    let recorder = RecordingSubscriber::<Mode>::new();
    tracer.register(recorder.clone());

    trace_error!(tracer, "e{}", 1);
    trace_warn!(tracer, "w{}", 2);
    trace_info!(tracer, "i{}", 3);
    trace_debug!(tracer, "d{}", 4);
    trace_verbose!(tracer, "v{}", 5);
    trace_emit!(tracer, Level::None, "n{}", 0);

    let levels: Vec<Level> = recorder.records().iter().map(|r| r.level).collect();
    assert_eq!(
        levels,
        [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Verbose,
            Level::None
        ]
    );
    assert_eq!(recorder.messages(), ["e1", "w2", "i3", "d4", "v5", "n0"]);
}

#[test]
fn test_gated_arguments_not_evaluated() {
    let tracer = Tracer::new();
    tracer.register(RecordingSubscriber::<Mode>::new());
    let evaluated = Cell::new(false);

    trace_debug!(tracer, "{}", {
        evaluated.set(true);
        Unrendered
    });

    assert!(!evaluated.get());
}

#[test]
fn test_macros_accept_tracer_reference() {
    let tracer = Tracer::new();
    let recorder = RecordingSubscriber::<Mode>::new();
    tracer.register(recorder.clone());

    let by_ref: &Tracer = &tracer;
    trace_warn!(by_ref, "low battery: {}%", 7);

    assert_eq!(recorder.messages(), ["low battery: 7%"]);
}

#[cfg(feature = "source")]
#[test]
fn test_call_site_captured() {
    let tracer = Tracer::new();
    let recorder = RecordingSubscriber::<Mode>::new();
    tracer.register(recorder.clone());

    let line = line!() + 1;
    trace_info!(tracer, "booted");

    let site = recorder.records()[0].site;
    assert!(site.file.ends_with("trace_macros.rs"), "{}", site.file);
    assert_eq!(site.line, line);
    assert!(
        site.function.ends_with("::test_call_site_captured"),
        "{}",
        site.function
    );
}

#[cfg(feature = "source")]
#[test]
fn test_call_site_inside_closure() {
    let tracer = Tracer::new();
    let recorder = RecordingSubscriber::<Mode>::new();
    tracer.register(recorder.clone());

    let emit = || trace_error!(tracer, "from closure");
    emit();

    let site = recorder.records()[0].site;
    assert!(
        site.function.ends_with("::test_call_site_inside_closure"),
        "{}",
        site.function
    );
}

#[cfg(feature = "source")]
#[test]
fn test_writer_line_format() {
    let tracer = Tracer::new();
    let buf = SharedBuf::default();
    tracer.register(WriterSubscriber::new(buf.clone()));

    let line = line!() + 1;
    trace_warn!(tracer, "x={}", 5);

    let text = buf.contents();
    assert!(text.starts_with("[WARN] "), "{text}");
    assert!(text.contains(&format!("trace_macros.rs:{line} ")), "{text}");
    assert!(text.ends_with("test_writer_line_format: x=5\n"), "{text}");
}

#[cfg(not(feature = "source"))]
#[test]
fn test_writer_line_format() {
    let tracer = Tracer::new();
    let buf = SharedBuf::default();
    tracer.register(WriterSubscriber::new(buf.clone()));

    trace_warn!(tracer, "x={}", 5);

    assert_eq!(buf.contents(), "[WARN] x=5\n");
}
