//! Display mapping for the dashboard views.
//!
//! Pure functions from domain values to the fixed visual treatment the
//! frontend applies: badge variants, text-color classes and formatted
//! timestamps and counts. No side effects, no validation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::fixtures::{AlertStatus, FileStatus, IpStatus, LogLevel, Risk, Severity};

/// Badge variant rendered for an enumerated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
    Outline,
}

pub fn level_variant(level: LogLevel) -> BadgeVariant {
    match level {
        LogLevel::Error => BadgeVariant::Destructive,
        LogLevel::Warn => BadgeVariant::Default,
        LogLevel::Info => BadgeVariant::Secondary,
    }
}

pub fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Critical => BadgeVariant::Destructive,
        Severity::High => BadgeVariant::Default,
        Severity::Medium => BadgeVariant::Secondary,
        Severity::Info => BadgeVariant::Outline,
    }
}

pub fn risk_variant(risk: Risk) -> BadgeVariant {
    match risk {
        Risk::Critical => BadgeVariant::Destructive,
        Risk::High => BadgeVariant::Default,
        Risk::Medium => BadgeVariant::Secondary,
        Risk::Low => BadgeVariant::Outline,
    }
}

pub fn ip_status_variant(status: IpStatus) -> BadgeVariant {
    match status {
        IpStatus::Blocked => BadgeVariant::Destructive,
        IpStatus::Suspicious => BadgeVariant::Default,
        IpStatus::Monitored => BadgeVariant::Secondary,
        IpStatus::Normal => BadgeVariant::Outline,
    }
}

pub fn file_status_variant(status: FileStatus) -> BadgeVariant {
    match status {
        FileStatus::Processed => BadgeVariant::Default,
        FileStatus::Processing => BadgeVariant::Secondary,
        FileStatus::Failed => BadgeVariant::Destructive,
    }
}

/// Text-color class for a log action
pub fn action_color(action: &str) -> &'static str {
    match action {
        "IP_BLOCKED" | "BLOCKED" | "QUARANTINED" => "destructive",
        "RATE_LIMITED" | "MONITORED" | "FLAGGED" => "warning",
        "COMPLETED" => "success",
        _ => "accent",
    }
}

/// Text-color class for a detection action
pub fn detection_action_color(action: &str) -> &'static str {
    match action {
        "IP Blocked" => "destructive",
        "Rate Limited" => "warning",
        "Monitored" => "accent",
        _ => "success",
    }
}

/// Text-color class for an alert status
pub fn alert_status_color(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => "destructive",
        AlertStatus::Investigating => "warning",
        AlertStatus::Mitigated => "accent",
        AlertStatus::Blocked => "primary",
        AlertStatus::Completed => "success",
    }
}

/// Full timestamp, 24-hour clock: `2024-01-15 14:30:00`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Clock time only: `14:30:00`
pub fn format_clock_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Relative age: "N min ago", "N hours ago" or "N days ago".
pub fn format_time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes().max(0);
    if minutes < 60 {
        format!("{} min ago", minutes)
    } else if minutes < 1440 {
        format!("{} hours ago", minutes / 60)
    } else {
        format!("{} days ago", minutes / 1440)
    }
}

/// Integer with thousands separators: 1234567 -> "1,234,567"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
