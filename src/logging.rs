use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, ThreadLogMode};

use crate::opts::Opts;
use crate::prelude::*;

pub fn init(opts: &Opts) -> Result {
    let mut config_builder = ConfigBuilder::new();
    config_builder
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .set_thread_mode(ThreadLogMode::Names)
        .set_time_format_rfc3339()
        .add_filter_allow_str("page_shell")
        .add_filter_allow_str("rocket");
    if opts.suppress_log_timestamps {
        config_builder.set_time_level(LevelFilter::Off);
    }
    TermLogger::init(level(opts), config_builder.build(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn level(opts: &Opts) -> LevelFilter {
    if opts.silent {
        LevelFilter::Warn
    } else if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub trait Log {
    fn log<M: Fn() -> R, R: AsRef<str>>(self, message: M) -> Self;
}

/// Logs the error, if any.
impl<T> Log for Result<T> {
    fn log<M: Fn() -> R, R: AsRef<str>>(self, message: M) -> Self {
        if let Err(ref error) = self {
            error!("{}: {:#}", message().as_ref(), error);
        }
        self
    }
}
