// SPDX-License-Identifier: MPL-2.0
//! Job board payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server identifier of a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "_id")]
    pub id: JobId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobBoard {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Body of `/api/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub job_id: JobId,
    pub resume_text: String,
}

/// An application received for a posting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub applied_at: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationList {
    #[serde(default)]
    pub applications: Vec<JobApplication>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_without_location_deserializes() {
        let board: JobBoard = serde_json::from_str(
            r#"{"jobs":[{"_id":"1","title":"Frontend Developer","description":"React job","skills":["React","JS"]}]}"#,
        )
        .unwrap();
        assert_eq!(board.jobs[0].id, JobId::new("1"));
        assert!(board.jobs[0].location.is_none());
    }

    #[test]
    fn application_draft_serializes_job_id_as_string() {
        let body = serde_json::to_value(ApplicationDraft {
            job_id: JobId::new("42"),
            resume_text: "cv".into(),
        })
        .unwrap();
        assert_eq!(body["jobId"], "42");
        assert_eq!(body["resumeText"], "cv");
    }

    #[test]
    fn application_reads_camel_case_fields() {
        let list: ApplicationList = serde_json::from_str(
            r#"{"applications":[{"_id":"a","applicant":"bob","appliedAt":"2024-03-01T09:30:00Z","resumeText":"hi"}]}"#,
        )
        .unwrap();
        assert_eq!(list.applications[0].applicant, "bob");
        assert_eq!(list.applications[0].applied_at, "2024-03-01T09:30:00Z");
    }
}
