use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber for test output, once per test binary.
/// Filter with RUST_LOG, e.g. `RUST_LOG=schedulehub_availability=debug`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
