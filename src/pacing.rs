use async_trait::async_trait;
use std::time::Duration;

/// Pause policy applied after every transcript request, successful or not.
#[async_trait]
pub trait Pacing: Send + Sync {
    async fn pause(&self);
}

/// Fixed unconditional delay, the provider's rate-limit etiquette.
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacing for FixedDelay {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_delay_completes_immediately() {
        let pacing = FixedDelay::new(Duration::ZERO);
        let start = std::time::Instant::now();
        pacing.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
