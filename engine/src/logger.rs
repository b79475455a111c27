use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Diagnostic logger. Writes to stderr so it never mixes with the board on stdout.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            eprintln!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message);
        } else {
            eprintln!("[{}][{}:{}] {}", timestamp, file_name, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_enabled() -> bool {
    LOGGER.get().is_some()
}

/// Logging stays silent until `init_logger` has been called.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}
