use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/* Log lines go to stderr so they don't mix with the progress output on stdout. Debug output from dependencies such
 * as reqwest is left out, it drowns our own.
 */
struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (metadata.level() <= Level::Info || metadata.target().starts_with(env!("CARGO_CRATE_NAME")))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(loglevel: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: Logger = Logger {};
    log::set_logger(&LOGGER).map(|()| {
        log::set_max_level(loglevel);
    })
}
