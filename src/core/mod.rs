pub mod dispatch;
pub mod handoff;
pub mod runner;

pub use crate::domain::model::{Cat, Dog};
pub use crate::domain::ports::{Animal, Demo};
pub use crate::utils::error::Result;
