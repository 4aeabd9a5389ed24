//! Synthetic telemetry feeds for the dashboard service.
//!
//! This module simulates the "live" side of the dashboard: a sliding window
//! of network traffic samples and an active-connection gauge, each advanced
//! by its own cancellable periodic task. The tasks are fire-and-forget
//! producers with no backpressure; missed ticks are skipped, never replayed.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::models::FeedConfig;

/// One point of the live traffic chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSample {
    /// Display-formatted sample time (HH:MM:SS)
    pub time: String,
    pub requests: u64,
    pub suspicious: u64,
}

/// Generate one random traffic sample stamped at `at`.
pub fn generate_sample(config: &FeedConfig, at: DateTime<Utc>) -> NetworkSample {
    let mut rng = rand::thread_rng();
    NetworkSample {
        time: at.format("%H:%M:%S").to_string(),
        requests: rng.gen_range(config.requests_min..config.requests_max),
        suspicious: rng.gen_range(0..config.suspicious_max),
    }
}

/// Fixed-size sliding window of traffic samples.
///
/// After seeding the window always holds exactly `capacity` samples; every
/// push evicts the oldest.
#[derive(Debug)]
pub struct TrafficWindow {
    samples: VecDeque<NetworkSample>,
    capacity: usize,
}

impl TrafficWindow {
    /// Seed a full window of back-dated samples ending at `now`.
    pub fn seeded(config: &FeedConfig, now: DateTime<Utc>) -> Self {
        let period = chrono::Duration::seconds(config.traffic_interval_seconds as i64);
        let samples = (0..config.window_size)
            .map(|i| {
                let at = now - period * (config.window_size - 1 - i) as i32;
                generate_sample(config, at)
            })
            .collect();
        Self {
            samples,
            capacity: config.window_size,
        }
    }

    /// Append `sample`, evicting the oldest entry once at capacity.
    pub fn push(&mut self, sample: NetworkSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Requests per second of the newest sample.
    pub fn current_rps(&self) -> u64 {
        self.samples.back().map(|s| s.requests).unwrap_or(0)
    }

    pub fn snapshot(&self) -> Vec<NetworkSample> {
        self.samples.iter().cloned().collect()
    }
}

/// Active-connection count advanced by a random walk.
#[derive(Debug)]
pub struct ConnectionGauge {
    active: u64,
}

impl ConnectionGauge {
    pub fn new(base: u64) -> Self {
        Self { active: base }
    }

    /// Apply a signed delta, flooring at zero.
    pub fn apply_delta(&mut self, delta: i64) {
        self.active = self.active.saturating_add_signed(delta);
    }

    pub fn active(&self) -> u64 {
        self.active
    }
}

/// Handle to a running periodic feed task.
///
/// Stopping (or dropping) the handle aborts the task, so a torn-down owner
/// can never observe further mutation of its state.
#[derive(Debug)]
pub struct FeedTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl FeedTask {
    /// Stop the task immediately.
    pub fn stop(self) {
        info!("Stopping {} feed", self.name);
        self.handle.abort();
    }
}

impl Drop for FeedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the traffic feed: one new window sample per period.
pub fn spawn_traffic_feed(window: Arc<RwLock<TrafficWindow>>, config: FeedConfig) -> FeedTask {
    info!(
        "Starting traffic feed (period {}s, window {})",
        config.traffic_interval_seconds, config.window_size
    );
    let handle = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(config.traffic_interval_seconds));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of a fresh interval fires immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let sample = generate_sample(&config, Utc::now());
            debug!("Traffic sample: {} rps, {} suspicious", sample.requests, sample.suspicious);
            window.write().await.push(sample);
        }
    });
    FeedTask {
        name: "traffic",
        handle,
    }
}

/// Spawn the connection feed: one random delta per period.
pub fn spawn_connection_feed(gauge: Arc<RwLock<ConnectionGauge>>, config: FeedConfig) -> FeedTask {
    info!(
        "Starting connection feed (period {}s)",
        config.connection_interval_seconds
    );
    let handle = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(config.connection_interval_seconds));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let delta = {
                let mut rng = rand::thread_rng();
                rng.gen_range(-config.connection_max_delta..=config.connection_max_delta)
            };
            gauge.write().await.apply_delta(delta);
        }
    });
    FeedTask {
        name: "connection",
        handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FeedConfig {
        FeedConfig::default()
    }

    fn sample(tag: u64) -> NetworkSample {
        NetworkSample {
            time: format!("00:00:{:02}", tag),
            requests: 100 + tag,
            suspicious: tag,
        }
    }

    #[test]
    fn seeded_window_is_full() {
        let window = TrafficWindow::seeded(&config(), Utc::now());
        assert_eq!(window.len(), config().window_size);
    }

    #[test]
    fn push_evicts_exactly_the_oldest() {
        let mut window = TrafficWindow::seeded(&config(), Utc::now());
        let before = window.snapshot();

        window.push(sample(1));
        let after = window.snapshot();

        assert_eq!(after.len(), before.len());
        assert_eq!(after[..before.len() - 1], before[1..]);
        assert_eq!(after.last(), Some(&sample(1)));
        assert_eq!(window.current_rps(), 101);
    }

    #[test]
    fn generated_samples_stay_in_range() {
        let config = config();
        for _ in 0..1000 {
            let sample = generate_sample(&config, Utc::now());
            assert!(sample.requests >= config.requests_min);
            assert!(sample.requests < config.requests_max);
            assert!(sample.suspicious < config.suspicious_max);
        }
    }

    #[test]
    fn gauge_floors_at_zero() {
        let mut gauge = ConnectionGauge::new(5);
        gauge.apply_delta(-10);
        assert_eq!(gauge.active(), 0);
        gauge.apply_delta(7);
        assert_eq!(gauge.active(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn traffic_feed_pushes_one_sample_per_tick() {
        let config = config();
        let window = Arc::new(RwLock::new(TrafficWindow::seeded(&config, Utc::now())));
        let before = window.read().await.snapshot();

        let task = spawn_traffic_feed(window.clone(), config.clone());
        tokio::time::advance(Duration::from_secs(config.traffic_interval_seconds)).await;
        tokio::task::yield_now().await;

        let after = window.read().await.snapshot();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[..before.len() - 1], before[1..]);

        task.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_feed_no_longer_mutates_state() {
        let config = config();
        let window = Arc::new(RwLock::new(TrafficWindow::seeded(&config, Utc::now())));
        let task = spawn_traffic_feed(window.clone(), config.clone());

        tokio::time::advance(Duration::from_secs(config.traffic_interval_seconds * 3)).await;
        tokio::task::yield_now().await;
        task.stop();
        tokio::task::yield_now().await;

        let frozen = window.read().await.snapshot();
        tokio::time::advance(Duration::from_secs(config.traffic_interval_seconds * 10)).await;
        tokio::task::yield_now().await;
        assert_eq!(window.read().await.snapshot(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_task() {
        let config = config();
        let gauge = Arc::new(RwLock::new(ConnectionGauge::new(config.connection_base)));
        {
            let _task = spawn_connection_feed(gauge.clone(), config.clone());
        }
        tokio::task::yield_now().await;

        let frozen = gauge.read().await.active();
        tokio::time::advance(Duration::from_secs(config.connection_interval_seconds * 10)).await;
        tokio::task::yield_now().await;
        assert_eq!(gauge.read().await.active(), frozen);
    }
}
