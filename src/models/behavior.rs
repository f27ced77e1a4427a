use super::record::{FieldSpec, Record};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorRecord {
    pub name: String,
    pub incident: String,
    pub severity: String,
    pub points: String,
}

impl BehaviorRecord {
    pub fn new(
        name: impl Into<String>,
        incident: impl Into<String>,
        severity: impl Into<String>,
        points: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            incident: incident.into(),
            severity: severity.into(),
            points: points.into(),
        }
    }
}

impl Record for BehaviorRecord {
    const SECTION: &'static str = "BEHAVIORAL INCIDENTS";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            label: "Student Name",
            heading: "STUDENT NAME",
            width: 20,
        },
        FieldSpec {
            label: "Incident Type",
            heading: "INCIDENT TYPE",
            width: 20,
        },
        FieldSpec {
            label: "Severity",
            heading: "SEVERITY",
            width: 12,
        },
        FieldSpec {
            label: "Points",
            heading: "POINTS",
            width: 8,
        },
    ];

    fn values(&self) -> Vec<&str> {
        vec![&self.name, &self.incident, &self.severity, &self.points]
    }
}

/// Points stored when the operator leaves the field blank:
/// `severity * per_severity`, formatted as a plain integer.
///
/// Fails when the severity is not an integer, instead of storing garbage.
pub fn default_points(severity: &str, per_severity: i64) -> AppResult<String> {
    let level: i64 = severity
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidSeverity(severity.to_string()))?;

    level
        .checked_mul(per_severity)
        .map(|p| p.to_string())
        .ok_or_else(|| AppError::InvalidSeverity(severity.to_string()))
}

/// Resolve the points field: explicit input is kept verbatim, blank input
/// falls back to [`default_points`].
pub fn resolve_points(points_input: &str, severity: &str, per_severity: i64) -> AppResult<String> {
    if points_input.is_empty() {
        default_points(severity, per_severity)
    } else {
        Ok(points_input.to_string())
    }
}
