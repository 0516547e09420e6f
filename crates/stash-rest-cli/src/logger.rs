//! Warnings go to stderr; everything goes to a file in the temp directory.

use std::{
    env,
    fs::File,
    path::{Path, PathBuf},
};

use log::{LevelFilter, Log, Metadata, Record};

const FILE_NAME: &str = "stash-rest.log";

struct Tee {
    loggers: Vec<env_logger::Logger>,
}

impl Log for Tee {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.loggers.iter().any(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        self.loggers
            .iter()
            .filter(|logger| logger.matches(record))
            .for_each(|logger| logger.log(record));
    }

    fn flush(&self) {
        self.loggers.iter().for_each(Log::flush);
    }
}

/// Points at the log file when dropped, unless disarmed after a successful run.
pub struct Guard {
    file: Option<PathBuf>,
}

impl Guard {
    pub fn disarm(&mut self) {
        self.file = None;
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            eprintln!("Full log stored in {file:?}");
        }
    }
}

fn file_logger(path: &Path) -> Option<env_logger::Logger> {
    let file = File::create(path).ok()?;
    Some(
        env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .build(),
    )
}

fn stderr_logger() -> env_logger::Logger {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .build()
}

pub fn init() -> Guard {
    let path = env::temp_dir().join(FILE_NAME);
    let mut loggers = vec![stderr_logger()];
    let file = match file_logger(&path) {
        Some(logger) => {
            loggers.push(logger);
            Some(path)
        }
        None => None,
    };

    let max_level = loggers
        .iter()
        .map(env_logger::Logger::filter)
        .max()
        .unwrap_or(LevelFilter::Warn);
    if log::set_boxed_logger(Box::new(Tee { loggers })).is_ok() {
        log::set_max_level(max_level);
    }

    Guard { file }
}
