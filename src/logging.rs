use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Dependencies (wgpu, winit, eframe)
/// stay at warn; our own loading and processing messages show at info, or at
/// debug when the settings ask for it.
fn default_directives(enable_debug: bool) -> String {
    let own_level = if enable_debug { "debug" } else { "info" };
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), own_level)
}

/// Initialize tracing and bridge `log` to `tracing`. Later calls are no-ops.
///
/// The `debug_logging` setting overrides `RUST_LOG`.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new(default_directives(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(false)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(enable_debug)
        .with_thread_names(false)
        .try_init()
        .ok();
}
