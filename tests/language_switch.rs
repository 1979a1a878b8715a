//! End-to-end language-switch scenarios against a running Gas Station
//! Finder. When the app (or a local Chrome) is not available the
//! scenarios skip with a note on stderr instead of failing.

use gasfinder_e2e::config::Config;
use gasfinder_e2e::i18n::Lang;
use gasfinder_e2e::verifier::{Outcome, Verifier};
use std::net::TcpListener;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn report(name: &str, outcome: Outcome) {
    if let Outcome::Skipped { reason } = outcome {
        eprintln!("skipping {name}: {reason}");
    }
}

#[tokio::test]
async fn italian_then_english_switch() {
    init_tracing();
    let verifier = Verifier::new(Config::from_env());

    // Seeds one recent search, loads the root page, waits for both
    // i18n elements, then asserts exact title and label strings for
    // IT and EN in a single session.
    let outcome = verifier
        .run()
        .await
        .expect("language-switch scenario should pass or skip");
    report("italian_then_english_switch", outcome);
}

#[tokio::test]
async fn unreachable_app_skips_without_navigating() {
    init_tracing();

    // Bind then drop so nothing is listening on the port; the probe
    // must classify this as unavailable and the run must end there,
    // as a skip rather than an error or a navigation attempt.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
        listener.local_addr().expect("probe port addr").port()
    };
    let config = Config {
        base_url: format!("http://127.0.0.1:{port}"),
    };

    let outcome = Verifier::new(config)
        .run()
        .await
        .expect("an unreachable app must skip, not fail");
    match outcome {
        Outcome::Skipped { reason } => {
            assert!(reason.contains("unreachable"), "unexpected reason: {reason}")
        }
        Outcome::Passed => panic!("scenario ran against a port nothing listens on"),
    }
}

#[tokio::test]
async fn repeated_switches_are_idempotent() {
    init_tracing();
    let verifier = Verifier::new(Config::from_env());

    // Ending on IT after a round trip must yield the same Italian
    // strings as switching to IT directly; no stale fragments survive.
    let outcome = verifier
        .run_sequence(&[Lang::It, Lang::En, Lang::It])
        .await
        .expect("idempotence scenario should pass or skip");
    report("repeated_switches_are_idempotent", outcome);
}
