use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Detailed diagnostic information",
            LogLevel::Info => "General information messages",
            LogLevel::Warn => "Warning conditions",
            LogLevel::Error => "Error conditions",
            LogLevel::Fatal => "Critical system errors",
        }
    }
}

/// Log categories the platform records separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Auth,
    Api,
    Workflow,
    Plugin,
    Media,
    System,
    Security,
    Error,
}

impl LogCategory {
    pub const ALL: [LogCategory; 8] = [
        LogCategory::Auth,
        LogCategory::Api,
        LogCategory::Workflow,
        LogCategory::Plugin,
        LogCategory::Media,
        LogCategory::System,
        LogCategory::Security,
        LogCategory::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Auth => "auth",
            LogCategory::Api => "api",
            LogCategory::Workflow => "workflow",
            LogCategory::Plugin => "plugin",
            LogCategory::Media => "media",
            LogCategory::System => "system",
            LogCategory::Security => "security",
            LogCategory::Error => "error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LogCategory::Auth => "Authentication and authorization events",
            LogCategory::Api => "API requests and responses",
            LogCategory::Workflow => "Content workflow state changes",
            LogCategory::Plugin => "Plugin-related activities",
            LogCategory::Media => "File upload and media operations",
            LogCategory::System => "General system events",
            LogCategory::Security => "Security-related events and alerts",
            LogCategory::Error => "General error conditions",
        }
    }
}

/// Per-category logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    pub category: LogCategory,
    pub enabled: bool,
    #[serde(default)]
    pub level: LogLevel,
    /// Retention in days.
    pub retention: u32,
    #[serde(default)]
    pub max_size: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
