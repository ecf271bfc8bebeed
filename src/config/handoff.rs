use crate::core::handoff::DEFAULT_MESSAGE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// 一小時，超過就不像是 demo 了
pub const MAX_DELAY_MS: u64 = 3_600_000;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "handoff")]
#[command(about = "Hands a single message from a background task to the main task")]
pub struct HandoffConfig {
    #[arg(long, default_value_t = 2000, help = "Delay before the producer sends, in milliseconds")]
    pub delay_ms: u64,

    #[arg(long, default_value = DEFAULT_MESSAGE, help = "Message the producer sends")]
    pub message: String,

    #[arg(long, help = "Log timing and memory statistics to stderr")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self::parse_from(["handoff"])
    }
}

impl Validate for HandoffConfig {
    fn validate(&self) -> Result<()> {
        validate_range("delay_ms", self.delay_ms, 0, MAX_DELAY_MS)?;
        validate_non_empty_string("message", &self.message)?;
        Ok(())
    }
}
