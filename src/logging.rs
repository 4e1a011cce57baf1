use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Log lines go to stderr so report output can be piped.
#[derive(Clone, Copy)]
pub(crate) struct StderrMakeWriter;

impl<'a> MakeWriter<'a> for StderrMakeWriter {
    type Writer = std::io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        std::io::stderr()
    }
}

pub(crate) fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub(crate) fn init(verbosity: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_target(verbosity > 2)
        .with_ansi(console::Term::stderr().features().colors_supported())
        .with_writer(StderrMakeWriter)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
