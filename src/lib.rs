#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{DispatchConfig, HandoffConfig};

pub use self::core::{dispatch::DispatchDemo, handoff::HandoffDemo, runner::DemoRunner};
pub use domain::model::{Cat, Dog};
pub use domain::ports::{Animal, Demo};
pub use utils::error::{DemoError, Result};
