use std::fmt;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", default_value = "", hide_default_value = true)]
    pub discord_token: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_default_value = true)]
    pub openai_api_key: String,

    /// How many days of history to summarize
    #[arg(long, env = "DAYS_TO_LOOK_BACK", default_value_t = 7)]
    pub days: i64,

    /// Model used to generate the summaries
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Log verbosity
    #[arg(short, long, value_name = "LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}
