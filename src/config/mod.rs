pub mod dispatch;
pub mod handoff;

pub use dispatch::DispatchConfig;
pub use handoff::HandoffConfig;
