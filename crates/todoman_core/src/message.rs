//! Caller-owned user messaging.
//!
//! # Responsibility
//! - Render leveled user-facing messages (`[info] ...`).
//! - Forward them to the `log` facade; the backend decides where they land.
//!
//! # Invariants
//! - No process-wide state: each caller owns and passes its `Messenger`.
//! - Debug messages are dropped when debug output is disabled.
//! - Model and validation code never receive a `Messenger`.

use log::Level;
use std::fmt::Display;

/// Log target used for every forwarded message.
pub const MESSAGE_TARGET: &str = "todoman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl MessageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
            Self::Debug => "debug",
        }
    }

    fn log_level(self) -> Level {
        match self {
            Self::Info => Level::Info,
            Self::Warning => Level::Warn,
            Self::Error => Level::Error,
            Self::Debug => Level::Debug,
        }
    }
}

/// Messaging context handed explicitly to whoever reports to the user.
#[derive(Debug, Clone)]
pub struct Messenger {
    debug_enabled: bool,
}

impl Default for Messenger {
    fn default() -> Self {
        Self::new()
    }
}

impl Messenger {
    /// Creates a messenger with debug output enabled.
    pub fn new() -> Self {
        Self {
            debug_enabled: true,
        }
    }

    pub fn with_debug(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    pub fn disable_debug(&mut self) {
        self.debug_enabled = false;
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn is_enabled(&self, level: MessageLevel) -> bool {
        level != MessageLevel::Debug || self.debug_enabled
    }

    /// Renders `message` with its level prefix.
    pub fn render(level: MessageLevel, message: impl Display) -> String {
        format!("[{}] {message}", level.as_str())
    }

    pub fn info(&self, message: impl Display) {
        self.emit(MessageLevel::Info, message);
    }

    pub fn warning(&self, message: impl Display) {
        self.emit(MessageLevel::Warning, message);
    }

    pub fn error(&self, message: impl Display) {
        self.emit(MessageLevel::Error, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.emit(MessageLevel::Debug, message);
    }

    fn emit(&self, level: MessageLevel, message: impl Display) {
        if !self.is_enabled(level) {
            return;
        }
        log::log!(
            target: MESSAGE_TARGET,
            level.log_level(),
            "{}",
            Self::render(level, message)
        );
    }
}
