use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

/// Install the global subscriber, writing compact lines to stderr. A
/// `RUST_LOG` directive in the environment refines the chosen level.
pub fn init_tracing(verbosity: Verbosity, colour: bool) {
    let level: tracing::Level = verbosity.into();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
