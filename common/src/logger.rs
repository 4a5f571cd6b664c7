use chrono::Local;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Colored, timestamped console logger. Each actor owns one, tagged with its name.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn header(&self, level: Level) -> ColoredString {
        let header = format!("[{}][{}][{}]", Self::timestamp(), level.label(), self.name).bold();
        match level {
            Level::Info => header.color(self.info_color),
            Level::Warn => header.yellow(),
            Level::Error => header.bright_red(),
        }
    }

    fn emit(&self, level: Level, msg: &str) {
        let line = format!("{} {} {}", self.header(level), "→".dimmed(), msg);
        if level == Level::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.emit(Level::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.emit(Level::Warn, msg.as_ref());
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        self.emit(Level::Error, msg.as_ref());
    }
}
