use env_logger::{Builder, Env};

/// Default filter for the given verbosity flags; `RUST_LOG` still wins
pub(crate) fn default_level(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

pub(crate) fn init_logging(verbose: bool, debug: bool) {
    let env = Env::default().default_filter_or(default_level(verbose, debug));
    // A second init (tests) is harmless
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
