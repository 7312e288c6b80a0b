//! Common types used across iprscan

use crate::error::{IprscanError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Jobs
// ============================================================================

/// Opaque job identifier issued by the service on submission.
///
/// The identifier is kept exactly as the service returned it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Classification of a status token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Pending,
    Running,
    Finished,
    Error,
    Failure,
    NotFound,
    /// Any token the service may add later; treated as terminal.
    Unknown,
}

/// Job status as reported by the service.
///
/// Only `PENDING` and `RUNNING` are non-terminal. The raw token is preserved
/// so callers can display exactly what the service said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    raw: String,
}

impl JobStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The token exactly as returned by the service
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> StatusKind {
        match self.raw.as_str() {
            "PENDING" => StatusKind::Pending,
            "RUNNING" => StatusKind::Running,
            "FINISHED" => StatusKind::Finished,
            "ERROR" => StatusKind::Error,
            "FAILURE" => StatusKind::Failure,
            "NOT_FOUND" => StatusKind::NotFound,
            _ => StatusKind::Unknown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.kind(), StatusKind::Pending | StatusKind::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.kind() == StatusKind::Finished
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

// ============================================================================
// Submission Parameters
// ============================================================================

/// A single submission parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Flag(bool),
    /// Multi-valued field, sent as repeated `key=value` pairs
    List(Vec<String>),
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Wire representations of this value, one per form field
    pub fn to_wire_values(&self) -> Vec<String> {
        match self {
            ParamValue::Text(s) => vec![s.clone()],
            ParamValue::Flag(b) => vec![b.to_string()],
            ParamValue::List(items) => items.clone(),
        }
    }
}

/// Parameters for a job submission, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameters {
    entries: Vec<(String, ParamValue)>,
}

impl JobParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter. A replaced key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set a boolean option only when the caller decided on it
    pub fn insert_flag(&mut self, name: impl Into<String>, value: Option<bool>) {
        if let Some(flag) = value {
            self.insert(name, ParamValue::Flag(flag));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check the fields the service requires before a submission
    pub fn validate(&self) -> Result<()> {
        for required in ["email", "sequence"] {
            match self.get(required) {
                None => return Err(IprscanError::missing(required)),
                Some(ParamValue::Text(s)) if s.trim().is_empty() => {
                    return Err(IprscanError::invalid(required, "must not be empty"));
                },
                Some(ParamValue::Text(_)) => {},
                Some(_) => {
                    return Err(IprscanError::invalid(required, "must be a single text value"));
                },
            }
        }
        Ok(())
    }
}

// ============================================================================
// Service Descriptions
// ============================================================================

/// One downloadable artifact offered for a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultType {
    pub identifier: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub file_suffix: Option<String>,
}

impl ResultType {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: None,
            description: None,
            media_type: None,
            file_suffix: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = Some(suffix.into());
        self
    }

    /// File name for this result: `{base}.{identifier}.{suffix}`
    pub fn file_name(&self, base: &str) -> String {
        match self.file_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => {
                format!("{}.{}.{}", base, self.identifier, suffix)
            },
            _ => format!("{}.{}", base, self.identifier),
        }
    }
}

/// Description of a submission parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDetail {
    pub name: String,
    pub param_type: String,
    pub description: String,
    pub values: Vec<ParameterValue>,
}

impl ParameterDetail {
    /// Values flagged as defaults by the service
    pub fn default_values(&self) -> impl Iterator<Item = &ParameterValue> {
        self.values.iter().filter(|v| v.is_default)
    }
}

/// One allowed value of a parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
    pub label: String,
    pub is_default: bool,
    pub properties: Vec<(String, String)>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(JobStatus::new("PENDING").kind(), StatusKind::Pending);
        assert_eq!(JobStatus::new("RUNNING").kind(), StatusKind::Running);
        assert_eq!(JobStatus::new("FINISHED").kind(), StatusKind::Finished);
        assert_eq!(JobStatus::new("NOT_FOUND").kind(), StatusKind::NotFound);
        assert_eq!(JobStatus::new("QUEUED").kind(), StatusKind::Unknown);
    }

    #[test]
    fn test_only_pending_and_running_are_non_terminal() {
        assert!(!JobStatus::new("PENDING").is_terminal());
        assert!(!JobStatus::new("RUNNING").is_terminal());
        assert!(JobStatus::new("FINISHED").is_terminal());
        assert!(JobStatus::new("ERROR").is_terminal());
        // Tokens are matched exactly
        assert!(JobStatus::new("running").is_terminal());
        assert!(JobStatus::new("RUNNING\n").is_terminal());
    }

    #[test]
    fn test_status_keeps_raw_token() {
        let status = JobStatus::new(" FINISHED\n");
        assert_eq!(status.as_str(), " FINISHED\n");
        assert_eq!(status.to_string(), " FINISHED\n");
    }

    #[test]
    fn test_job_id_is_opaque() {
        let id = JobId::from("iprscan5-R20240101-000000-0000-00000000-p1m\n");
        assert_eq!(id.as_str(), "iprscan5-R20240101-000000-0000-00000000-p1m\n");
    }

    #[test]
    fn test_parameters_keep_insertion_order() {
        let mut params = JobParameters::new();
        params.insert("sequence", ParamValue::text("MKT"));
        params.insert("goterms", ParamValue::Flag(true));
        params.insert("sequence", ParamValue::text("MKV"));

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sequence", "goterms"]);
        assert_eq!(params.get("sequence"), Some(&ParamValue::text("MKV")));
    }

    #[test]
    fn test_insert_flag_skips_unset() {
        let mut params = JobParameters::new();
        params.insert_flag("goterms", None);
        params.insert_flag("pathways", Some(false));

        assert!(!params.contains("goterms"));
        assert_eq!(params.get("pathways"), Some(&ParamValue::Flag(false)));
    }

    #[test]
    fn test_validate_requires_email_and_sequence() {
        let mut params = JobParameters::new();
        params.insert("sequence", ParamValue::text("MKT"));
        assert!(matches!(
            params.validate(),
            Err(IprscanError::MissingParameter(name)) if name == "email"
        ));

        params.insert("email", ParamValue::text("a@b.com"));
        assert!(params.validate().is_ok());

        params.insert("sequence", ParamValue::text("  "));
        assert!(matches!(
            params.validate(),
            Err(IprscanError::InvalidParameter { name, .. }) if name == "sequence"
        ));
    }

    #[test]
    fn test_list_wire_values() {
        let value = ParamValue::list(["PfamA", "SMART"]);
        assert_eq!(value.to_wire_values(), vec!["PfamA", "SMART"]);
        assert_eq!(ParamValue::Flag(true).to_wire_values(), vec!["true"]);
    }

    #[test]
    fn test_result_file_name() {
        let tsv = ResultType::new("tsv").with_suffix("tsv");
        assert_eq!(tsv.file_name("iprscan5-X-123"), "iprscan5-X-123.tsv.tsv");

        let bare = ResultType::new("log");
        assert_eq!(bare.file_name("run1"), "run1.log");
    }
}
