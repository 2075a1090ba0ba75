// SPDX-License-Identifier: MPL-2.0
//! Match scoring payloads.

use serde::{Deserialize, Serialize};

/// Score above which a match is presented as a success.
pub const GOOD_MATCH_THRESHOLD: f64 = 50.0;

/// Body of `/api/match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRequest {
    pub resume: String,
    pub job: String,
}

/// Server-computed match between a resume and a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    /// Score rounded for display, clamped to 0..=100.
    #[must_use]
    pub fn percent(&self) -> u32 {
        // Clamped first, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = self.score.clamp(0.0, 100.0).round() as u32;
        percent
    }

    /// Compares the raw score, so 50.3 counts even though it displays as 50%.
    #[must_use]
    pub fn is_good_match(&self) -> bool {
        self.score > GOOD_MATCH_THRESHOLD
    }

    /// Builds the request body for AI tips from this result.
    #[must_use]
    pub fn tips_request(&self) -> TipsRequest {
        TipsRequest {
            resume: self.resume_skills.join(", "),
            job: self.job_skills.join(", "),
            missing_skills: self.missing_skills.clone(),
        }
    }
}

/// One entry of `/api/my-matches`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchHistory {
    #[serde(default)]
    pub matches: Vec<MatchHistoryEntry>,
}

/// A résumé file read from disk, ready for multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Response of `/api/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// Body of `/api/ai-tips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    pub resume: String,
    pub job: String,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tips {
    #[serde(default)]
    pub tips: String,
}
