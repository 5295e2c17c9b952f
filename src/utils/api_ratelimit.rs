/// Outbound API rate limiters, one sliding window per upstream provider
use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

lazy_static! {
    static ref BINANCE_RATE_LIMITER: Mutex<ApiRateLimiter> = Mutex::new(ApiRateLimiter::new(10, Duration::from_secs(1)));
    static ref FOREX_RATE_LIMITER: Mutex<ApiRateLimiter> = Mutex::new(ApiRateLimiter::new(5, Duration::from_secs(1)));
}

/// Upstream APIs the bot talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Binance,
    Forex,
}

pub struct ApiRateLimiter {
    /// Queue of request timestamps inside the window
    request_times: VecDeque<Instant>,
    max_requests: usize,
    window: Duration,
}

impl ApiRateLimiter {
    fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            request_times: VecDeque::new(),
            max_requests,
            window,
        }
    }

    fn check_and_record(&mut self) -> Duration {
        let now = Instant::now();

        while let Some(&front) = self.request_times.front() {
            if now.duration_since(front) > self.window {
                self.request_times.pop_front();
            } else {
                break;
            }
        }

        if self.request_times.len() >= self.max_requests {
            if let Some(&oldest) = self.request_times.front() {
                let elapsed = now.duration_since(oldest);
                if elapsed < self.window {
                    return self.window - elapsed;
                }
            }
        }

        self.request_times.push_back(now);
        Duration::from_secs(0)
    }
}

/// Wait if necessary to stay under the provider's request allowance
pub async fn throttle(provider: Provider) {
    loop {
        let wait_duration = {
            let limiter: &Mutex<ApiRateLimiter> = match provider {
                Provider::Binance => &BINANCE_RATE_LIMITER,
                Provider::Forex => &FOREX_RATE_LIMITER,
            };
            let mut limiter = limiter.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            limiter.check_and_record()
        };

        if wait_duration.is_zero() {
            return;
        }

        tracing::debug!("{:?} API rate limit: waiting {}ms", provider, wait_duration.as_millis());
        tokio::time::sleep(wait_duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_allows_requests_within_limit() {
        let mut limiter = ApiRateLimiter::new(10, Duration::from_secs(1));

        for _ in 0..10 {
            let wait = limiter.check_and_record();
            assert_eq!(wait.as_millis(), 0);
        }
    }

    #[test]
    fn test_rate_limiter_blocks_over_limit() {
        let mut limiter = ApiRateLimiter::new(3, Duration::from_secs(1));

        for _ in 0..3 {
            limiter.check_and_record();
        }

        let wait = limiter.check_and_record();
        assert!(wait.as_millis() > 0);
        // A blocked request is not recorded
        assert_eq!(limiter.request_times.len(), 3);
    }

    #[tokio::test]
    async fn test_throttle_returns_immediately_when_idle() {
        let started = Instant::now();
        throttle(Provider::Forex).await;
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
