//! A small logger writing to standard error.
//!
//! The libraries only log through the `log` facade, so nothing shows up
//! unless a binary installs something like this.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct StderrLogger {
    level: LevelFilter,
}

/// Install the logger. Each `-v` shows one more level of detail, starting
/// from warnings.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let logger: &'static StderrLogger =
        Box::leak(Box::new(StderrLogger { level }));

    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

impl StderrLogger {
    fn color(level: Level) -> Color {
        match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Blue,
            Level::Trace => Color::Magenta,
        }
    }

    fn write(&self, record: &Record) -> std::io::Result<()> {
        let out = StandardStream::stderr(ColorChoice::Auto);
        let mut lock = out.lock();

        lock.set_color(
            ColorSpec::new()
                .set_fg(Some(Self::color(record.level())))
                .set_bold(true),
        )?;
        write!(lock, "{:>5}", record.level())?;
        lock.reset()?;

        lock.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(lock, " {}", record.target())?;
        lock.reset()?;

        writeln!(lock, ": {}", record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // There's nowhere left to report a failure to write a log.
            let _ = self.write(record);
        }
    }

    fn flush(&self) {}
}
