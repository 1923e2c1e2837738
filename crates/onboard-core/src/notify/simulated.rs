//! Sender used when no real transport is configured.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use super::NotificationSender;
use crate::{error::Result, models::ProjectRecord};

/// Default pause before a simulated delivery succeeds.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_secs(2);

/// Pretends to deliver: waits for `delay`, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for SimulatedSender {
    async fn send(&self, record: &ProjectRecord) -> Result<()> {
        warn!(
            "No notification transport configured, simulating delivery for '{}'",
            record.business_name
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSender::default().delay(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_simulated_send_succeeds() {
        let sender = SimulatedSender::new().with_delay(Duration::from_millis(1));
        assert!(sender.send(&ProjectRecord::default()).await.is_ok());
    }
}
