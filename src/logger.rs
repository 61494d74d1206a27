//! Logging setup for scaffold runs.

use env_logger::{
    fmt::{Color, Formatter, Style, StyledValue},
    Builder, Target,
};
use log::{Level, LevelFilter, Record};
use std::io::Write;

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

fn level_label(style: &mut Style, level: Level) -> StyledValue<'_, &'static str> {
    style.set_color(level_color(level)).value(level.as_str())
}

fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let mut label_style = buf.style();
    let label = level_label(&mut label_style, record.level());

    let mut message_style = buf.style();
    if record.level() <= Level::Warn {
        message_style.set_color(level_color(record.level()));
    }

    writeln!(buf, "[{}] - {}", label, message_style.value(record.args()))
}

/// Installs the stderr logger: debug with `--verbose`, info otherwise.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(format_record)
        .init();
}
