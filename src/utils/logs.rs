use tracing_subscriber::EnvFilter;

// installs a json formatter filtered by RUST_LOG, defaulting to info. Returns false when a
// global subscriber was already installed.
pub fn setup_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::setup_tracing;

    #[tokio::test]
    async fn test_should_setup_tracing_once() {
        let _ = setup_tracing();
        assert!(!setup_tracing());
    }
}
