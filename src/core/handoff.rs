use crate::core::Demo;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info};

#[cfg(feature = "cli")]
use crate::config::HandoffConfig;

pub const DEFAULT_MESSAGE: &str = "Hello from Goroutine";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Spawns the producer task and hands back the receiving half.
///
/// The channel carries exactly one message. The producer sleeps for `delay`
/// before sending, so the receiver can never complete earlier than that.
pub fn spawn_producer(delay: Duration, message: String) -> oneshot::Receiver<String> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        debug!("Producer sleeping for {:?}", delay);
        tokio::time::sleep(delay).await;

        if tx.send(message).is_err() {
            debug!("Receiver went away before the message was sent");
        } else {
            debug!("Producer sent its message");
        }
    });

    rx
}

/// Waits for the single message. There is no timeout: a producer that stays
/// alive without sending blocks this forever.
pub async fn receive(rx: oneshot::Receiver<String>) -> Result<String> {
    let message = rx.await.map_err(|_| DemoError::ProducerDropped)?;
    info!("📨 Received message from producer");
    Ok(message)
}

#[derive(Debug, Clone)]
pub struct HandoffDemo {
    delay: Duration,
    message: String,
}

impl HandoffDemo {
    pub fn new(delay: Duration, message: impl Into<String>) -> Self {
        Self {
            delay,
            message: message.into(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_config(config: &HandoffConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.message.clone())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for HandoffDemo {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_MESSAGE)
    }
}

#[async_trait]
impl Demo for HandoffDemo {
    fn name(&self) -> &str {
        "handoff"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let rx = spawn_producer(self.delay, self.message.clone());
        let message = receive(rx).await?;

        writeln!(out, "{}", message)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Instant};
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test(start_paused = true)]
    async fn test_default_demo_prints_single_line_after_delay() {
        let demo = HandoffDemo::default();
        let mut out = Vec::new();

        let started = Instant::now();
        assert_ok!(demo.run(&mut out).await);

        assert!(started.elapsed() >= DEFAULT_DELAY);
        assert_eq!(String::from_utf8(out).unwrap(), "Hello from Goroutine\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_receive_blocks_until_producer_sends() {
        let delay = Duration::from_millis(2000);
        let mut rx = spawn_producer(delay, "ping".to_string());

        // 延遲結束前不應收到任何訊息
        assert_err!(timeout(delay - Duration::from_millis(1), &mut rx).await);

        let message = assert_ok!(receive(rx).await);
        assert_eq!(message, "ping");
    }

    #[tokio::test]
    async fn test_zero_delay_still_delivers() {
        let rx = spawn_producer(Duration::ZERO, "now".to_string());
        assert_eq!(assert_ok!(receive(rx).await), "now");
    }

    #[tokio::test]
    async fn test_dropped_sender_is_reported() {
        let (tx, rx) = oneshot::channel::<String>();
        drop(tx);

        let result = receive(rx).await;
        assert!(matches!(result, Err(DemoError::ProducerDropped)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_message_and_delay() {
        let demo = HandoffDemo::new(Duration::from_millis(250), "custom");
        assert_eq!(demo.delay(), Duration::from_millis(250));
        assert_eq!(demo.message(), "custom");
        assert_eq!(demo.name(), "handoff");

        let mut out = Vec::new();
        let started = Instant::now();
        assert_ok!(demo.run(&mut out).await);

        assert!(started.elapsed() >= Duration::from_millis(250));
        assert_eq!(out, b"custom\n");
    }
}
