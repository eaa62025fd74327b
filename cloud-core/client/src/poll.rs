//! 异步任务轮询策略
//!
//! 第 n 次轮询前的等待时间为 `min(initial_interval * multiplier^n, max_interval)`，
//! 总耗时超过 `timeout` 后放弃并返回超时错误。

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 轮询策略
#[derive(Debug, Clone, PartialEq)]
pub struct PollPolicy {
    /// 首次轮询间隔
    pub initial_interval: Duration,

    /// 最大轮询间隔
    pub max_interval: Duration,

    /// 间隔增长倍数
    pub backoff_multiplier: f64,

    /// 总超时
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollConfig::default().policy()
    }
}

impl PollPolicy {
    /// 固定间隔轮询
    pub fn fixed(interval: Duration, timeout: Duration) -> Self {
        Self {
            initial_interval: interval,
            max_interval: interval,
            backoff_multiplier: 1.0,
            timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 计算第 `attempt` 次（从 0 开始）轮询后的等待时间
    pub fn delay(&self, attempt: u32) -> Duration {
        let multiplier = self.backoff_multiplier.max(1.0).powi(attempt as i32);
        let delay = self.initial_interval.as_secs_f64() * multiplier;
        let max = self.max_interval.as_secs_f64();

        if !delay.is_finite() || delay >= max {
            self.max_interval
        } else {
            Duration::from_secs_f64(delay)
        }
    }
}

/// 轮询配置（可序列化，单位为毫秒/秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// 首次轮询间隔（毫秒）
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// 最大轮询间隔（毫秒）
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,

    /// 间隔增长倍数
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// 总超时（秒）
    #[serde(default = "default_poll_timeout")]
    pub timeout: u64,
}

fn default_initial_interval_ms() -> u64 {
    1000
}
fn default_max_interval_ms() -> u64 {
    10_000
}
fn default_backoff_multiplier() -> f64 {
    1.5
}
fn default_poll_timeout() -> u64 {
    600
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: default_initial_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            timeout: default_poll_timeout(),
        }
    }
}

impl PollConfig {
    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            initial_interval: Duration::from_millis(self.initial_interval_ms),
            max_interval: Duration::from_millis(self.max_interval_ms.max(self.initial_interval_ms)),
            backoff_multiplier: self.backoff_multiplier,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.initial_interval, Duration::from_secs(1));
        assert_eq!(policy.max_interval, Duration::from_secs(10));
        assert_eq!(policy.backoff_multiplier, 1.5);
        assert_eq!(policy.timeout, Duration::from_secs(600));
    }

    #[test]
    fn test_delay_backoff_capped() {
        let policy = PollPolicy {
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            timeout: Duration::from_secs(60),
        };

        assert_eq!(policy.delay(0), Duration::from_secs(1));
        assert_eq!(policy.delay(1), Duration::from_secs(2));
        assert_eq!(policy.delay(2), Duration::from_secs(4));
        assert_eq!(policy.delay(3), Duration::from_secs(5));
        assert_eq!(policy.delay(100), Duration::from_secs(5));
    }

    #[test]
    fn test_fixed_policy() {
        let policy = PollPolicy::fixed(Duration::from_millis(200), Duration::from_secs(2));
        assert_eq!(policy.delay(0), Duration::from_millis(200));
        assert_eq!(policy.delay(10), Duration::from_millis(200));
    }
}
