use crate::utils::error::{GlobeError, Result};
use std::time::Duration;

pub const DEFAULT_INTERVAL_MS: u64 = 3000;

pub fn default_messages() -> Vec<String> {
    [
        "John from Canada joined",
        "Priya from India became a supporter",
        "Alex from United States started a project",
        "Maria from Spain shared an update",
        "Chen from China launched their startup",
        "Sarah from United Kingdom joined the community",
    ]
    .iter()
    .map(|message| message.to_string())
    .collect()
}

#[derive(Debug, Clone)]
pub struct Ticker {
    messages: Vec<String>,
    index: usize,
    interval: Duration,
}

impl Ticker {
    pub fn new(messages: Vec<String>, interval_ms: u64) -> Result<Self> {
        if messages.is_empty() {
            return Err(GlobeError::ConfigError {
                message: "ticker needs at least one message".to_string(),
            });
        }
        if interval_ms == 0 {
            return Err(GlobeError::InvalidConfigValueError {
                field: "ticker.interval_ms".to_string(),
                value: interval_ms.to_string(),
                reason: "Interval must be positive".to_string(),
            });
        }

        Ok(Self {
            messages,
            index: 0,
            interval: Duration::from_millis(interval_ms),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current(&self) -> &str {
        &self.messages[self.index]
    }

    /// 前進到下一則，最後一則之後回到第一則
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.messages.len();
        self.current()
    }

    pub fn banner(&self) -> String {
        format!(
            "🌟 {} · Welcome to the global founder community!",
            self.current()
        )
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            index: 0,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}
