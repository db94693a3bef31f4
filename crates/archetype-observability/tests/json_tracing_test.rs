//! JSON log output. Kept in its own binary so this test is the one that
//! installs the global subscriber.

use archetype_core::config::ObservabilityConfig;
use archetype_observability::{batch_span, events, init_tracing};

#[test]
fn json_subscriber_installs_once() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json_logs: true,
    };
    assert!(init_tracing(&config).unwrap());

    let span = batch_span!(1);
    let _guard = span.enter();
    events::team_classified("Alpha", "Pragmatic performers", 0.5, 91);
    events::batch_completed(1);

    assert!(!init_tracing(&config).unwrap());
}

