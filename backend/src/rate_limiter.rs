use std::collections::HashMap;
use std::sync::Mutex;
use time::{OffsetDateTime, Duration};
use thiserror::Error;
use tracing::{warn, error, debug};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded. Please try again in {0} minutes.")]
    Exceeded(i64),
    #[error("Rate limit state unavailable")]
    Unavailable,
}

#[derive(Debug)]
struct RateLimit {
    attempts: u32,
    first_attempt: OffsetDateTime,
}

#[derive(Debug)]
pub struct RateLimiter {
    limits: Mutex<HashMap<String, RateLimit>>,
    max_attempts: u32,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(5, 15)
    }
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window_minutes: i64) -> Self {
        Self {
            limits: Mutex::new(HashMap::new()),
            max_attempts,
            window: Duration::minutes(window_minutes),
        }
    }

    pub fn check_rate_limit(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_rate_limit_at(key, OffsetDateTime::now_utc())
    }

    fn check_rate_limit_at(&self, key: &str, now: OffsetDateTime) -> Result<(), RateLimitError> {
        let result = {
            let mut limits = match self.limits.lock() {
                Ok(guard) => guard,
                Err(e) => {
                    error!("Failed to acquire rate limit lock: {}", e);
                    return Err(RateLimitError::Unavailable);
                }
            };

            match limits.get_mut(key) {
                Some(limit) => {
                    if now - limit.first_attempt <= self.window && limit.attempts >= self.max_attempts {
                        let minutes_to_wait = (limit.first_attempt + self.window - now).whole_minutes();
                        Err(RateLimitError::Exceeded(minutes_to_wait.max(1)))
                    } else if now - limit.first_attempt > self.window {
                        *limit = RateLimit { attempts: 1, first_attempt: now };
                        Ok(())
                    } else {
                        limit.attempts += 1;
                        Ok(())
                    }
                }
                None => {
                    limits.insert(key.to_string(), RateLimit { attempts: 1, first_attempt: now });
                    Ok(())
                }
            }
        };

        if let Err(ref e) = result {
            warn!("Rate limit triggered for key {}: {}", key, e);
        }

        result
    }

    /// Drops entries whose window ended long enough ago to be irrelevant.
    pub fn prune(&self) -> usize {
        self.prune_at(OffsetDateTime::now_utc())
    }

    fn prune_at(&self, now: OffsetDateTime) -> usize {
        let Ok(mut limits) = self.limits.lock() else {
            error!("Failed to acquire rate limit lock for pruning");
            return 0;
        };
        let before = limits.len();
        limits.retain(|_, limit| now - limit.first_attempt <= self.window * 2);
        let removed = before - limits.len();
        if removed > 0 {
            debug!("Pruned {} rate limit entries", removed);
        }
        removed
    }

    pub fn tracked_keys(&self) -> usize {
        self.limits.lock().map(|limits| limits.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_resets_after_window() {
        let limiter = RateLimiter::new(2, 15);
        let start = OffsetDateTime::now_utc();

        assert!(limiter.check_rate_limit_at("k", start).is_ok());
        assert!(limiter.check_rate_limit_at("k", start).is_ok());
        let err = limiter.check_rate_limit_at("k", start + Duration::minutes(1)).unwrap_err();
        assert_eq!(err, RateLimitError::Exceeded(14));
        assert!(err.to_string().contains("14 minutes"));
        assert!(limiter.check_rate_limit_at("other", start).is_ok());

        assert!(limiter.check_rate_limit_at("k", start + Duration::minutes(16)).is_ok());
    }

    #[test]
    fn test_prune_drops_stale_entries() {
        let limiter = RateLimiter::new(1, 10);
        let start = OffsetDateTime::now_utc();
        limiter.check_rate_limit_at("old", start).unwrap();
        limiter.check_rate_limit_at("new", start + Duration::minutes(25)).unwrap();

        assert_eq!(limiter.prune_at(start + Duration::minutes(25)), 1);
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn test_poisoned_lock_reports_unavailable() {
        let limiter = std::sync::Arc::new(RateLimiter::new(5, 15));
        let poisoner = std::sync::Arc::clone(&limiter);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.limits.lock().unwrap();
            panic!("poison the limiter");
        }).join();

        assert_eq!(limiter.check_rate_limit("k"), Err(RateLimitError::Unavailable));
    }
}
