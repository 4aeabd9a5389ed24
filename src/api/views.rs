//! JSON view models for the dashboard endpoints.
//!
//! Each view is a pure function of the state it is given: records are
//! mapped to display rows with their fixed badge variant and color
//! treatment, and numbers and timestamps are pre-formatted for display.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::alerts::SeverityTally;
use crate::core::filter::LevelTally;
use crate::core::fixtures::{
    Alert, AlertStatus, AttackerRecord, DetectionRecord, Fixtures, IpStatus, LogEntry, LogLevel,
    RequestSource, Risk, Severity, ThreatTypeSlice, TrafficPoint, TrainingFile,
};
use crate::core::presentation::{
    action_color, alert_status_color, detection_action_color, file_status_variant, format_clock_time,
    format_count, format_time_ago, format_timestamp, ip_status_variant, level_variant, risk_variant,
    severity_variant, BadgeVariant,
};
use crate::core::training::TrainingStatus;

/// Direction of a stat-card change indicator
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

/// Optional change indicator on a stat card
#[derive(Debug, Clone, Serialize)]
pub struct StatChange {
    pub value: u32,
    pub direction: ChangeDirection,
}

/// One dashboard stat card; `change` is omitted when absent
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<StatChange>,
}

#[derive(Debug, Serialize)]
pub struct AttackerRow {
    pub ip: String,
    pub country: String,
    pub requests: String,
    pub risk: Risk,
    pub risk_variant: BadgeVariant,
    pub flagged: bool,
}

#[derive(Debug, Serialize)]
pub struct AlertSummary {
    pub title: String,
    pub source: String,
    pub time_ago: String,
}

/// `GET /` response
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub traffic: Vec<TrafficPoint>,
    pub threat_types: Vec<ThreatTypeSlice>,
    pub top_attackers: Vec<AttackerRow>,
    pub recent_alerts: Vec<AlertSummary>,
}

pub fn dashboard_view(
    fixtures: &Fixtures,
    active_connections: u64,
    now: DateTime<Utc>,
) -> DashboardView {
    let stats = vec![
        StatCard {
            title: "Active Connections".to_string(),
            value: format_count(active_connections),
            change: Some(StatChange {
                value: 12,
                direction: ChangeDirection::Increase,
            }),
        },
        StatCard {
            title: "Threats Blocked Today".to_string(),
            value: format_count(fixtures.threats_blocked_today),
            change: Some(StatChange {
                value: 8,
                direction: ChangeDirection::Increase,
            }),
        },
        StatCard {
            title: "Blocked IPs".to_string(),
            value: format_count(fixtures.blocked_ips),
            change: Some(StatChange {
                value: 3,
                direction: ChangeDirection::Decrease,
            }),
        },
        StatCard {
            title: "System Status".to_string(),
            value: "Active".to_string(),
            change: None,
        },
    ];

    DashboardView {
        stats,
        traffic: fixtures.hourly_traffic.clone(),
        threat_types: fixtures.threat_types.clone(),
        top_attackers: fixtures.top_attackers.iter().map(attacker_row).collect(),
        recent_alerts: fixtures
            .alerts
            .iter()
            .take(3)
            .map(|a| alert_summary(a, now))
            .collect(),
    }
}

fn attacker_row(record: &AttackerRecord) -> AttackerRow {
    AttackerRow {
        ip: record.ip.clone(),
        country: record.country.clone(),
        requests: format_count(record.requests),
        risk: record.risk,
        risk_variant: risk_variant(record.risk),
        flagged: record.flagged,
    }
}

fn alert_summary(alert: &Alert, now: DateTime<Utc>) -> AlertSummary {
    AlertSummary {
        title: alert.title.clone(),
        source: alert.source.clone(),
        time_ago: format_time_ago(alert.timestamp, now),
    }
}

#[derive(Debug, Serialize)]
pub struct AgentStats {
    pub accuracy: String,
    pub threats_blocked: String,
    pub response_time: String,
}

#[derive(Debug, Serialize)]
pub struct DetectionRow {
    pub time: String,
    pub source_ip: String,
    pub request_count: String,
    pub risk: Risk,
    pub risk_variant: BadgeVariant,
    pub action_taken: String,
    pub action_color: &'static str,
}

/// `GET /ai-agent` response; stats are omitted while the agent is disabled
#[derive(Debug, Serialize)]
pub struct AgentView {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<AgentStats>,
    pub detections: Vec<DetectionRow>,
}

pub fn agent_view(fixtures: &Fixtures, enabled: bool) -> AgentView {
    let stats = enabled.then(|| AgentStats {
        accuracy: format!("{}%", fixtures.model_accuracy),
        threats_blocked: format_count(fixtures.threats_blocked_today),
        response_time: "2.3ms".to_string(),
    });
    AgentView {
        enabled,
        stats,
        detections: fixtures.detection_log.iter().map(detection_row).collect(),
    }
}

fn detection_row(record: &DetectionRecord) -> DetectionRow {
    DetectionRow {
        time: format_clock_time(record.timestamp),
        source_ip: record.source_ip.clone(),
        request_count: format_count(record.request_count),
        risk: record.risk,
        risk_variant: risk_variant(record.risk),
        action_taken: record.action_taken.clone(),
        action_color: detection_action_color(&record.action_taken),
    }
}

#[derive(Debug, Serialize)]
pub struct SourceRow {
    pub ip: String,
    pub country: String,
    pub requests: String,
    pub status: IpStatus,
    pub status_variant: BadgeVariant,
    pub flagged: bool,
    pub activity: &'static str,
}

/// `GET /network` response
#[derive(Debug, Serialize)]
pub struct NetworkView {
    pub current_rps: u64,
    pub samples: Vec<crate::core::feed::NetworkSample>,
    pub sources: Vec<SourceRow>,
}

pub fn network_view(
    fixtures: &Fixtures,
    samples: Vec<crate::core::feed::NetworkSample>,
    current_rps: u64,
) -> NetworkView {
    NetworkView {
        current_rps,
        samples,
        sources: fixtures.request_sources.iter().map(source_row).collect(),
    }
}

fn source_row(record: &RequestSource) -> SourceRow {
    SourceRow {
        ip: record.ip.clone(),
        country: record.country.clone(),
        requests: format_count(record.requests),
        status: record.status,
        status_variant: ip_status_variant(record.status),
        flagged: record.flagged,
        activity: if record.flagged { "Monitoring" } else { "Normal" },
    }
}

#[derive(Debug, Serialize)]
pub struct FileRow {
    pub name: String,
    pub size: String,
    pub uploaded: String,
    pub status: crate::core::fixtures::FileStatus,
    pub status_variant: BadgeVariant,
    pub samples: String,
}

/// `GET /training` response
#[derive(Debug, Serialize)]
pub struct TrainingView {
    pub model_accuracy: f64,
    pub last_training: String,
    pub total_samples: String,
    pub is_training: bool,
    pub progress: f64,
    pub files: Vec<FileRow>,
}

pub fn training_view(fixtures: &Fixtures, status: TrainingStatus) -> TrainingView {
    TrainingView {
        model_accuracy: fixtures.model_accuracy,
        last_training: fixtures.last_training.clone(),
        total_samples: format_count(fixtures.total_training_samples()),
        is_training: status.is_training,
        progress: status.progress.round(),
        files: fixtures.training_files.iter().map(file_row).collect(),
    }
}

fn file_row(file: &TrainingFile) -> FileRow {
    FileRow {
        name: file.name.clone(),
        size: file.size.clone(),
        uploaded: file.uploaded.clone(),
        status: file.status,
        status_variant: file_status_variant(file.status),
        samples: format_count(file.samples),
    }
}

#[derive(Debug, Serialize)]
pub struct AlertRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub severity_variant: BadgeVariant,
    pub status: AlertStatus,
    pub status_color: &'static str,
    pub time_ago: String,
    pub source: String,
    pub acknowledged: bool,
}

/// `GET /alerts` response
#[derive(Debug, Serialize)]
pub struct AlertsView {
    pub tally: SeverityTally,
    pub alerts: Vec<AlertRow>,
}

pub fn alerts_view(alerts: Vec<Alert>, tally: SeverityTally, now: DateTime<Utc>) -> AlertsView {
    AlertsView {
        tally,
        alerts: alerts.iter().map(|a| alert_row(a, now)).collect(),
    }
}

fn alert_row(alert: &Alert, now: DateTime<Utc>) -> AlertRow {
    AlertRow {
        id: alert.id,
        title: alert.title.clone(),
        description: alert.description.clone(),
        severity: alert.severity,
        severity_variant: severity_variant(alert.severity),
        status: alert.status,
        status_color: alert_status_color(alert.status),
        time_ago: format_time_ago(alert.timestamp, now),
        source: alert.source.clone(),
        acknowledged: alert.acknowledged,
    }
}

#[derive(Debug, Serialize)]
pub struct LogRow {
    pub timestamp: String,
    pub level: LogLevel,
    pub level_variant: BadgeVariant,
    pub source: String,
    pub event: String,
    pub action: String,
    pub action_color: &'static str,
    pub details: String,
}

/// `GET /logs` response
#[derive(Debug, Serialize)]
pub struct LogsView {
    pub tally: LevelTally,
    pub total: usize,
    pub filtered: usize,
    pub entries: Vec<LogRow>,
}

pub fn logs_view(all: &[LogEntry], filtered: Vec<LogEntry>, tally: LevelTally) -> LogsView {
    LogsView {
        tally,
        total: all.len(),
        filtered: filtered.len(),
        entries: filtered.iter().map(log_row).collect(),
    }
}

fn log_row(entry: &LogEntry) -> LogRow {
    LogRow {
        timestamp: format_timestamp(entry.timestamp),
        level: entry.level,
        level_variant: level_variant(entry.level),
        source: entry.source.clone(),
        event: entry.event.clone(),
        action: entry.action.clone(),
        action_color: action_color(&entry.action),
        details: entry.details.clone(),
    }
}

#[derive(Debug, Serialize)]
pub struct BackupSection {
    pub id: &'static str,
    pub title: &'static str,
    pub action: &'static str,
}

/// `GET /backup` response
#[derive(Debug, Serialize)]
pub struct BackupView {
    pub sections: Vec<BackupSection>,
}

pub fn backup_view() -> BackupView {
    BackupView {
        sections: vec![
            BackupSection {
                id: "create",
                title: "Create Backup",
                action: "Backup Current State",
            },
            BackupSection {
                id: "restore",
                title: "Restore System",
                action: "Select Restore Point",
            },
        ],
    }
}

/// `GET /settings` response
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub server_host: String,
    pub server_port: u16,
    pub admin_email_placeholder: &'static str,
}

pub fn settings_view(host: &str, port: u16) -> SettingsView {
    SettingsView {
        server_host: host.to_string(),
        server_port: port,
        admin_email_placeholder: "admin@cybershield.com",
    }
}
