/// Centralized tracing setup.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (from the config
/// file) is used.
///
/// ```text
/// RUST_LOG=debug training_admin                       # everything
/// RUST_LOG=training_admin::actor_framework=debug,info training_admin
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
