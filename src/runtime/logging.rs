use crate::command::constants::LOG_ENV;

/// Install the global logger. Level is info, or debug when debug mode is on;
/// JUNCTION_FINDER_LOG overrides both
pub fn setup_global_logger(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    let env = env_logger::Env::default().filter_or(LOG_ENV, default_filter);

    //Can only be installed once per process; later calls are ignored
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
