use env_logger::Env;

/// Route `log` records to stderr. `RUST_LOG` wins; otherwise warnings only,
/// or debug output for this workspace's crates with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,codeit=debug,codeit_api=debug,codeit_chat=debug,codeit_storage=debug"
    } else {
        "warn"
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}
