use crate::core::dispatch::DEFAULT_DOG_NAME;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dispatch")]
#[command(about = "Makes a dog and a cat speak through one shared trait")]
pub struct DispatchConfig {
    #[arg(long, default_value = DEFAULT_DOG_NAME, help = "Name the dog introduces itself with")]
    pub dog_name: String,

    #[arg(long, help = "Log timing and memory statistics to stderr")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::parse_from(["dispatch"])
    }
}

impl Validate for DispatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dog_name", &self.dog_name)
    }
}
