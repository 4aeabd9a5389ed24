//! Alert board for the dashboard service.
//!
//! A mutable view over the alert fixtures. The only mutation the product
//! supports is acknowledgement; everything else resets with the process,
//! matching the page-lifetime semantics of the original dashboard.

use log::info;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::fixtures::{Alert, Severity};

/// Errors that can occur on alert operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlertError {
    #[error("alert {0} not found")]
    NotFound(Uuid),
}

/// Per-severity alert counts for the statistics cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityTally {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub info: usize,
}

/// In-memory alert store with acknowledgement tracking.
pub struct AlertBoard {
    alerts: RwLock<Vec<Alert>>,
}

impl AlertBoard {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: RwLock::new(alerts),
        }
    }

    pub async fn snapshot(&self) -> Vec<Alert> {
        self.alerts.read().await.clone()
    }

    /// Mark one alert as acknowledged. Idempotent for already-acknowledged
    /// alerts; unknown ids are an error.
    pub async fn acknowledge(&self, id: Uuid) -> Result<(), AlertError> {
        let mut alerts = self.alerts.write().await;
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AlertError::NotFound(id))?;
        if !alert.acknowledged {
            alert.acknowledged = true;
            info!("Alert acknowledged: {}", alert.title);
        }
        Ok(())
    }

    /// Mark every alert as acknowledged.
    pub async fn acknowledge_all(&self) {
        let mut alerts = self.alerts.write().await;
        for alert in alerts.iter_mut() {
            alert.acknowledged = true;
        }
        info!("All alerts acknowledged");
    }

    pub async fn severity_tally(&self) -> SeverityTally {
        let alerts = self.alerts.read().await;
        let mut tally = SeverityTally::default();
        for alert in alerts.iter() {
            match alert.severity {
                Severity::Critical => tally.critical += 1,
                Severity::High => tally.high += 1,
                Severity::Medium => tally.medium += 1,
                Severity::Info => tally.info += 1,
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::Fixtures;
    use chrono::Utc;

    fn board() -> AlertBoard {
        AlertBoard::new(Fixtures::seeded_at(Utc::now()).alerts)
    }

    #[tokio::test]
    async fn acknowledge_flips_the_flag() {
        let board = board();
        let unacknowledged = board.snapshot().await[0].clone();
        assert!(!unacknowledged.acknowledged);

        board.acknowledge(unacknowledged.id).await.unwrap();
        let after = board.snapshot().await;
        assert!(after.iter().find(|a| a.id == unacknowledged.id).unwrap().acknowledged);
    }

    #[tokio::test]
    async fn acknowledge_is_idempotent() {
        let board = board();
        let id = board.snapshot().await[2].id;

        board.acknowledge(id).await.unwrap();
        board.acknowledge(id).await.unwrap();
        assert!(board.snapshot().await[2].acknowledged);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let board = board();
        let id = Uuid::new_v4();
        assert_eq!(board.acknowledge(id).await, Err(AlertError::NotFound(id)));
    }

    #[tokio::test]
    async fn acknowledge_all_clears_every_flag() {
        let board = board();
        board.acknowledge_all().await;
        assert!(board.snapshot().await.iter().all(|a| a.acknowledged));
    }

    #[tokio::test]
    async fn tally_matches_fixture_severities() {
        let tally = board().severity_tally().await;
        assert_eq!(
            tally,
            SeverityTally {
                critical: 1,
                high: 2,
                medium: 1,
                info: 1
            }
        );
    }
}
