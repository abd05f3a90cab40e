//! Config validation: schema checks with user-friendly error messages.

use crate::schema::FormatterConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &FormatterConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_emoji(config, &mut report);
    validate_cache(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_emoji(config: &FormatterConfig, report: &mut ValidationReport) {
    let Some(emoji) = &config.emoji else { return };
    if let Some(host) = &emoji.cdn_host {
        if host.trim().is_empty() {
            report.error("emoji.cdnHost", "CDN host cannot be empty");
        } else if host.contains("://") {
            report.error("emoji.cdnHost", "CDN host must be a bare host name, without a scheme");
        }
    }
    if emoji.mega_max_count == Some(0) {
        report.error("emoji.megaMaxCount", "megaMaxCount must be >= 1");
    }
    if let Some(max) = emoji.mega_max_count {
        if max > 20 {
            report.warn(
                "emoji.megaMaxCount",
                format!("megaMaxCount {max} lets long emoji walls render oversized"),
            );
        }
    }
}

fn validate_cache(config: &FormatterConfig, report: &mut ValidationReport) {
    let Some(cache) = &config.cache else { return };
    if cache.capacity == Some(0) {
        report.warn("cache.capacity", "Token cache is disabled");
    }
}

fn validate_logging(config: &FormatterConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !matches!(
            level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            report.error(
                "logging.level",
                format!("Unknown log level '{level}'. Use trace, debug, info, warn, error, or off"),
            );
        }
    }
}
