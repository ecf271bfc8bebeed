use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Anything that can describe itself in one line of text.
pub trait Animal: Send + Sync {
    fn speak(&self) -> String;
}

/// A runnable demo. Output goes to `out`, never straight to stdout.
#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()>;
}
