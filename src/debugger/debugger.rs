use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DebugLevel {
    #[default]
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            DebugLevel::Off => "off",
            DebugLevel::Error => "error",
            DebugLevel::Warn => "warn",
            DebugLevel::Info => "info",
            DebugLevel::Debug => "debug",
            DebugLevel::Trace => "trace",
        }
    }
}

impl FromStr for DebugLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(DebugLevel::Off),
            "ERROR" => Ok(DebugLevel::Error),
            "WARN" => Ok(DebugLevel::Warn),
            "INFO" => Ok(DebugLevel::Info),
            "DEBUG" => Ok(DebugLevel::Debug),
            "TRACE" => Ok(DebugLevel::Trace),
            other => Err(format!("unknown debug level '{other}'")),
        }
    }
}

/// Subsystem tag attached to every log line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Component {
    Exec,
    Storage,
    Txn,
    Config,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Exec => "exec",
            Component::Storage => "storage",
            Component::Txn => "txn",
            Component::Config => "config",
        };
        f.write_str(name)
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

#[inline]
pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level as u8 <= DEBUG_LEVEL.load(Ordering::Relaxed)
}

/// Sets the global level and installs a `fmt` subscriber.
///
/// `RUST_LOG` wins over `level` when present. Calling this more than once is
/// harmless: the first installed subscriber stays.
pub fn init_tracing(level: DebugLevel) {
    set_debug_level(level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .try_init();
}

/// Like `init_tracing`, writing through the test harness so output is only
/// shown for failing tests.
pub fn init_test_tracing(level: DebugLevel) {
    set_debug_level(level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_test_writer()
        .try_init();
}

/// `init_tracing` at the level carried by `config`.
pub fn init_tracing_from(config: &EngineConfig) {
    init_tracing(config.debug_level());
}

/// `init_test_tracing` at the level carried by `config`.
pub fn init_test_tracing_from(config: &EngineConfig) {
    init_test_tracing(config.debug_level());
}

fn env_filter(level: DebugLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}
