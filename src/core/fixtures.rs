//! Static fixture telemetry for the dashboard service.
//!
//! All sample data the views render is built here, once, relative to a
//! caller-supplied reference time and injected into the API state. Nothing
//! in this module is mutated after construction; the alert board copies the
//! alert fixtures into its own state for acknowledgement tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
        }
    }
}

/// A single security log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Originating IP address, or "System" for internal events
    pub source: String,
    pub event: String,
    pub action: String,
    pub details: String,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Info,
}

/// Alert lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Investigating,
    Mitigated,
    Blocked,
    Completed,
}

/// A security alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub status: AlertStatus,
    pub acknowledged: bool,
}

/// Risk classification for an attacking host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Risk {
    Low,
    Medium,
    High,
    Critical,
}

/// Attacker seen by the dashboard's threat-source list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackerRecord {
    pub ip: String,
    pub country: String,
    /// Requests per hour attributed to this host
    pub requests: u64,
    pub risk: Risk,
    pub flagged: bool,
}

/// Per-IP traffic status on the network monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpStatus {
    Normal,
    Suspicious,
    Blocked,
    Monitored,
}

/// Request source row on the network monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSource {
    pub ip: String,
    pub country: String,
    pub requests: u64,
    pub status: IpStatus,
    pub flagged: bool,
}

/// Training dataset file status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Processed,
    Processing,
    Failed,
}

/// An uploaded training dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingFile {
    pub name: String,
    /// Display size, e.g. "2.3 GB"
    pub size: String,
    pub uploaded: String,
    pub status: FileStatus,
    pub samples: u64,
}

/// One row of the AI agent's live detection log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub timestamp: DateTime<Utc>,
    pub source_ip: String,
    pub request_count: u64,
    pub risk: Risk,
    pub action_taken: String,
}

/// Attack-type share for the dashboard pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatTypeSlice {
    pub name: String,
    pub share: u32,
    pub color: String,
}

/// Pre-aggregated hourly traffic point for the dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub time: String,
    pub requests: u64,
    pub threats: u64,
}

/// The full fixture store
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub log_entries: Vec<LogEntry>,
    pub alerts: Vec<Alert>,
    pub top_attackers: Vec<AttackerRecord>,
    pub request_sources: Vec<RequestSource>,
    pub training_files: Vec<TrainingFile>,
    pub detection_log: Vec<DetectionRecord>,
    pub threat_types: Vec<ThreatTypeSlice>,
    pub hourly_traffic: Vec<TrafficPoint>,
    /// Published model accuracy, percent
    pub model_accuracy: f64,
    /// Timestamp of the last completed training run, display-formatted
    pub last_training: String,
    pub threats_blocked_today: u64,
    pub blocked_ips: u64,
}

impl Fixtures {
    /// Build the fixture store with all timestamps relative to `now`.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        Self {
            log_entries: log_entries(now),
            alerts: alerts(now),
            top_attackers: top_attackers(),
            request_sources: request_sources(),
            training_files: training_files(),
            detection_log: detection_log(now),
            threat_types: threat_types(),
            hourly_traffic: hourly_traffic(),
            model_accuracy: 97.2,
            last_training: "2024-01-15 14:30:00".to_string(),
            threats_blocked_today: 1234,
            blocked_ips: 89,
        }
    }

    /// Total number of training samples across all dataset files.
    pub fn total_training_samples(&self) -> u64 {
        self.training_files.iter().map(|f| f.samples).sum()
    }
}

fn entry(
    now: DateTime<Utc>,
    minutes_ago: i64,
    level: LogLevel,
    source: &str,
    event: &str,
    action: &str,
    details: &str,
) -> LogEntry {
    LogEntry {
        timestamp: now - Duration::minutes(minutes_ago),
        level,
        source: source.to_string(),
        event: event.to_string(),
        action: action.to_string(),
        details: details.to_string(),
    }
}

fn log_entries(now: DateTime<Utc>) -> Vec<LogEntry> {
    vec![
        entry(
            now,
            2,
            LogLevel::Error,
            "203.45.67.89",
            "DDoS Attack",
            "IP_BLOCKED",
            "High-volume traffic detected, automatic blocking activated",
        ),
        entry(
            now,
            5,
            LogLevel::Warn,
            "78.90.123.45",
            "Suspicious Activity",
            "RATE_LIMITED",
            "Unusual request pattern detected, rate limiting applied",
        ),
        entry(
            now,
            8,
            LogLevel::Info,
            "System",
            "Model Update",
            "COMPLETED",
            "AI model retrained successfully, accuracy improved to 97.2%",
        ),
        entry(
            now,
            12,
            LogLevel::Error,
            "45.123.67.12",
            "Malware Detection",
            "QUARANTINED",
            "Known malware signature detected in payload",
        ),
        entry(
            now,
            18,
            LogLevel::Warn,
            "156.78.90.123",
            "Brute Force",
            "MONITORED",
            "Multiple failed authentication attempts detected",
        ),
        entry(
            now,
            25,
            LogLevel::Info,
            "192.168.1.100",
            "Connection Established",
            "ALLOWED",
            "Normal traffic pattern, connection permitted",
        ),
        entry(
            now,
            35,
            LogLevel::Error,
            "89.45.123.67",
            "SQL Injection",
            "BLOCKED",
            "SQL injection attempt detected and blocked",
        ),
        entry(
            now,
            42,
            LogLevel::Warn,
            "123.45.67.89",
            "Anomaly Detected",
            "FLAGGED",
            "Unusual traffic pattern requires investigation",
        ),
    ]
}

fn alert(
    now: DateTime<Utc>,
    minutes_ago: i64,
    title: &str,
    description: &str,
    severity: Severity,
    source: &str,
    status: AlertStatus,
    acknowledged: bool,
) -> Alert {
    Alert {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        timestamp: now - Duration::minutes(minutes_ago),
        source: source.to_string(),
        status,
        acknowledged,
    }
}

fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        alert(
            now,
            2,
            "High-volume DDoS attack detected",
            "Massive traffic spike from multiple IPs targeting web server",
            Severity::Critical,
            "203.45.67.89, 45.123.67.12",
            AlertStatus::Active,
            false,
        ),
        alert(
            now,
            5,
            "Suspicious login attempts",
            "Multiple failed login attempts from different geographic locations",
            Severity::High,
            "Multiple IPs",
            AlertStatus::Investigating,
            false,
        ),
        alert(
            now,
            15,
            "Rate limiting triggered",
            "Automatic rate limiting activated for suspicious traffic patterns",
            Severity::Medium,
            "78.90.123.45",
            AlertStatus::Mitigated,
            true,
        ),
        alert(
            now,
            30,
            "AI model updated",
            "Machine learning model retrained with new threat patterns",
            Severity::Info,
            "System",
            AlertStatus::Completed,
            true,
        ),
        alert(
            now,
            45,
            "Malware signature detected",
            "Known malware pattern identified in network traffic",
            Severity::High,
            "156.78.90.123",
            AlertStatus::Blocked,
            true,
        ),
    ]
}

fn attacker(ip: &str, country: &str, requests: u64, risk: Risk) -> AttackerRecord {
    AttackerRecord {
        ip: ip.to_string(),
        country: country.to_string(),
        requests,
        risk,
        flagged: matches!(risk, Risk::High | Risk::Critical),
    }
}

fn top_attackers() -> Vec<AttackerRecord> {
    vec![
        attacker("192.168.1.100", "Unknown", 1250, Risk::High),
        attacker("203.45.67.89", "China", 890, Risk::Critical),
        attacker("45.123.67.12", "Russia", 654, Risk::High),
        attacker("78.90.123.45", "Iran", 432, Risk::Medium),
    ]
}

fn source(ip: &str, country: &str, requests: u64, status: IpStatus) -> RequestSource {
    RequestSource {
        ip: ip.to_string(),
        country: country.to_string(),
        requests,
        status,
        flagged: matches!(status, IpStatus::Suspicious | IpStatus::Blocked),
    }
}

fn request_sources() -> Vec<RequestSource> {
    vec![
        source("203.45.67.89", "China", 2450, IpStatus::Suspicious),
        source("192.168.1.100", "Unknown", 1890, IpStatus::Normal),
        source("45.123.67.12", "Russia", 1654, IpStatus::Blocked),
        source("78.90.123.45", "Iran", 1432, IpStatus::Suspicious),
        source("156.78.90.123", "USA", 1234, IpStatus::Normal),
        source("89.45.123.67", "Germany", 987, IpStatus::Normal),
        source("123.45.67.89", "India", 765, IpStatus::Monitored),
        source("67.89.123.45", "Brazil", 543, IpStatus::Normal),
    ]
}

fn training_files() -> Vec<TrainingFile> {
    let file = |name: &str, size: &str, uploaded: &str, status: FileStatus, samples: u64| {
        TrainingFile {
            name: name.to_string(),
            size: size.to_string(),
            uploaded: uploaded.to_string(),
            status,
            samples,
        }
    };
    vec![
        file(
            "network_logs_2024.pcap",
            "2.3 GB",
            "2024-01-15",
            FileStatus::Processed,
            45678,
        ),
        file(
            "ddos_attack_samples.log",
            "890 MB",
            "2024-01-10",
            FileStatus::Processed,
            23456,
        ),
        file(
            "legitimate_traffic.pcap",
            "1.8 GB",
            "2024-01-08",
            FileStatus::Processing,
            34567,
        ),
        file(
            "malware_signatures.dat",
            "456 MB",
            "2024-01-05",
            FileStatus::Processed,
            12345,
        ),
    ]
}

fn detection_log(now: DateTime<Utc>) -> Vec<DetectionRecord> {
    let record = |seconds_ago: i64, ip: &str, count: u64, risk: Risk, action: &str| {
        DetectionRecord {
            timestamp: now - Duration::seconds(seconds_ago),
            source_ip: ip.to_string(),
            request_count: count,
            risk,
            action_taken: action.to_string(),
        }
    };
    vec![
        record(2, "203.45.67.89", 1250, Risk::Critical, "IP Blocked"),
        record(15, "192.168.1.100", 890, Risk::High, "Rate Limited"),
        record(45, "45.123.67.12", 654, Risk::High, "IP Blocked"),
        record(72, "78.90.123.45", 432, Risk::Medium, "Monitored"),
        record(120, "156.78.90.123", 234, Risk::Low, "Allowed"),
    ]
}

fn threat_types() -> Vec<ThreatTypeSlice> {
    let slice = |name: &str, share: u32, color: &str| ThreatTypeSlice {
        name: name.to_string(),
        share,
        color: color.to_string(),
    };
    vec![
        slice("DDoS Flood", 35, "#ef4444"),
        slice("SQL Injection", 25, "#f97316"),
        slice("XSS Attack", 20, "#eab308"),
        slice("Brute Force", 15, "#22c55e"),
        slice("Other", 5, "#06b6d4"),
    ]
}

fn hourly_traffic() -> Vec<TrafficPoint> {
    let point = |time: &str, requests: u64, threats: u64| TrafficPoint {
        time: time.to_string(),
        requests,
        threats,
    };
    vec![
        point("00:00", 120, 5),
        point("04:00", 80, 2),
        point("08:00", 200, 15),
        point("12:00", 350, 25),
        point("16:00", 280, 18),
        point("20:00", 180, 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_deterministic_for_a_reference_time() {
        let now = Utc::now();
        let fixtures = Fixtures::seeded_at(now);

        assert_eq!(fixtures.log_entries.len(), 8);
        assert_eq!(fixtures.alerts.len(), 5);
        assert_eq!(fixtures.request_sources.len(), 8);
        assert_eq!(
            fixtures.log_entries[0].timestamp,
            now - Duration::minutes(2)
        );
    }

    #[test]
    fn training_sample_total_is_summed_from_files() {
        let fixtures = Fixtures::seeded_at(Utc::now());
        assert_eq!(fixtures.total_training_samples(), 116_046);
    }

    #[test]
    fn log_level_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&LogLevel::Error).unwrap(),
            "\"ERROR\""
        );
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
    }
}
