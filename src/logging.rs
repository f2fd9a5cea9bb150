pub fn setup_logging() {
    build_logger().init();
}

/// Browse mode owns the alternate screen, so its logger writes to a
/// side file instead of stderr.
pub fn setup_file_logging(file_name: &str) {
    let mut builder = build_logger();

    match std::fs::File::create(file_name) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter(None, log::LevelFilter::Off);
        }
    }

    builder.init();
}

fn build_logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder
}
