use touchchart::telemetry::init_default_tracing;

#[cfg(feature = "telemetry")]
#[test]
fn init_installs_a_global_subscriber_once() {
    // First init in this process wins; a repeat must report failure instead
    // of clobbering the installed subscriber.
    assert!(init_default_tracing());
    assert!(!init_default_tracing());
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_inert_without_the_telemetry_feature() {
    assert!(!init_default_tracing());
}
