//! Core functionality for the dashboard service.
//!
//! This module contains the core components of the service,
//! including the fixture store, synthetic feeds, log filtering,
//! the alert board, the training simulator and display mapping.

pub mod alerts;
pub mod feed;
pub mod filter;
pub mod fixtures;
pub mod presentation;
pub mod training;

pub use alerts::{AlertBoard, AlertError};
pub use feed::{ConnectionGauge, FeedTask, NetworkSample, TrafficWindow};
pub use filter::{filter_logs, LevelFilter};
pub use fixtures::Fixtures;
pub use training::{TrainingError, TrainingSession};
