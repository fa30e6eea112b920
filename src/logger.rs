use std::fmt;

use env_logger::{
    fmt::{Color, Style, StyledValue},
    Builder, Env,
};
use log::Level;

/// Colored terminal logger. `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) {
    let env = Env::default().filter_or("RUST_LOG", default_level);

    Builder::from_env(env)
        .format(|buf, record| {
            use std::io::Write;

            let mut style = buf.style();
            let level = colored_level(&mut style, record.level());

            let time = buf.timestamp_seconds().to_string();
            let text = record.args().to_string();
            let mut lines = text.lines();

            // continuation lines line up with the message column
            let indent = Indent(time.len() + 7);

            writeln!(buf, "{time} {level} | {}", lines.next().unwrap_or_default())?;
            for line in lines {
                writeln!(buf, "{indent}| {line}")?;
            }

            Ok(())
        })
        .init();
}

struct Indent(usize);

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.0)
    }
}

fn colored_level(style: &'_ mut Style, level: Level) -> StyledValue<'_, &'static str> {
    let (color, label) = match level {
        Level::Trace => (Color::Magenta, "TRACE"),
        Level::Debug => (Color::Blue, "DEBUG"),
        Level::Info => (Color::Green, "INFO "),
        Level::Warn => (Color::Yellow, "WARN "),
        Level::Error => (Color::Red, "ERROR"),
    };

    style.set_color(color).set_bold(level <= Level::Warn).value(label)
}
