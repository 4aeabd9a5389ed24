//! Simulated model training for the dashboard service.
//!
//! A training run is a periodic ticker that advances a progress value by
//! random increments until it clamps at exactly 100, then terminates on its
//! own. Progress is monotonically non-decreasing and a second run cannot be
//! started while one is active.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::info;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::models::TrainingConfig;

/// Errors that can occur when driving a training run
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrainingError {
    #[error("training already in progress")]
    AlreadyRunning,
}

/// Observable state of the training simulator
#[derive(Debug, Clone, Serialize)]
pub struct TrainingStatus {
    pub is_training: bool,
    /// Progress percentage in [0, 100]
    pub progress: f64,
}

#[derive(Debug)]
struct TrainingState {
    is_training: bool,
    progress: f64,
}

/// Simulated training session owned by the API state.
pub struct TrainingSession {
    config: TrainingConfig,
    state: Arc<RwLock<TrainingState>>,
    // Ticker of the current run, aborted when the session is dropped
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl TrainingSession {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(TrainingState {
                is_training: false,
                progress: 0.0,
            })),
            handle: Mutex::new(None),
        }
    }

    /// Kick off a simulated training run.
    pub async fn start(&self) -> Result<(), TrainingError> {
        {
            let mut state = self.state.write().await;
            if state.is_training {
                return Err(TrainingError::AlreadyRunning);
            }
            state.is_training = true;
            state.progress = 0.0;
        }

        info!("Starting simulated training run");
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(config.tick_millis));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let increment = {
                    let mut rng = rand::thread_rng();
                    rng.gen_range(0.0..config.max_increment)
                };
                let mut state = state.write().await;
                state.progress = (state.progress + increment).min(100.0);
                if state.progress >= 100.0 {
                    state.progress = 100.0;
                    state.is_training = false;
                    info!("Simulated training run completed");
                    break;
                }
            }
        });

        let mut slot = self
            .handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    pub async fn status(&self) -> TrainingStatus {
        let state = self.state.read().await;
        TrainingStatus {
            is_training: state.is_training,
            progress: state.progress,
        }
    }
}

impl Drop for TrainingSession {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.handle.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TrainingConfig {
        TrainingConfig::default()
    }

    #[tokio::test(start_paused = true)]
    async fn progress_is_monotonic_and_terminates_at_exactly_100() {
        let session = TrainingSession::new(config());
        session.start().await.unwrap();

        let mut last = 0.0;
        let mut ticks = 0;
        loop {
            tokio::time::advance(Duration::from_millis(config().tick_millis)).await;
            tokio::task::yield_now().await;

            let status = session.status().await;
            assert!(status.progress >= last);
            assert!(status.progress <= 100.0);
            last = status.progress;

            if !status.is_training {
                break;
            }
            ticks += 1;
            assert!(ticks < 10_000, "training run never completed");
        }

        assert_eq!(session.status().await.progress, 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn starting_twice_is_rejected() {
        let session = TrainingSession::new(config());
        session.start().await.unwrap();
        assert_eq!(session.start().await, Err(TrainingError::AlreadyRunning));
    }

    #[tokio::test(start_paused = true)]
    async fn completed_run_allows_a_fresh_start() {
        let session = TrainingSession::new(config());
        session.start().await.unwrap();

        for _ in 0..10_000 {
            tokio::time::advance(Duration::from_millis(config().tick_millis)).await;
            tokio::task::yield_now().await;
            if !session.status().await.is_training {
                break;
            }
        }
        assert!(!session.status().await.is_training);

        session.start().await.unwrap();
        let status = session.status().await;
        assert!(status.is_training);
        assert_eq!(status.progress, 0.0);
    }
}
