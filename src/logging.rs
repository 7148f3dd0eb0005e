use tracing_subscriber::EnvFilter;

/// Initialises tracing on stderr. `SALARYRS_LOG` overrides the verbosity
/// given on the command line.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("SALARYRS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!("salaryrs={level},salaryrs_core={level},salaryrs_gui={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
