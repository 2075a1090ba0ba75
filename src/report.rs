// SPDX-License-Identifier: MPL-2.0
//! Plain-text match report.

use crate::domain::matching::MatchResult;
use crate::error::{Error, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Name suggested by the save dialog.
pub const DEFAULT_FILE_NAME: &str = "MatchReport.txt";

/// Renders the report: title, user, score and the four skill lists.
#[must_use]
pub fn render(result: &MatchResult) -> String {
    let mut out = String::new();
    let lines: [(&str, String); 6] = [
        ("User", result.user.clone()),
        ("Score", format!("{}%", result.percent())),
        ("Resume Skills", result.resume_skills.join(", ")),
        ("Job Skills", result.job_skills.join(", ")),
        ("Matched", result.matched_skills.join(", ")),
        ("Missing", result.missing_skills.join(", ")),
    ];

    out.push_str("Resume Match Report\n\n");
    for (label, value) in lines {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}

/// Writes the rendered report to `path`.
///
/// # Errors
///
/// Returns [`Error::Report`] if the file cannot be written.
pub async fn save(path: &Path, result: &MatchResult) -> Result<()> {
    tokio::fs::write(path, render(result))
        .await
        .map_err(|e| Error::Report(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchResult {
        MatchResult {
            score: 66.7,
            user: "ada".into(),
            resume_skills: vec!["Rust".into(), "SQL".into()],
            job_skills: vec!["Rust".into(), "Go".into()],
            matched_skills: vec!["Rust".into()],
            missing_skills: vec!["Go".into()],
        }
    }

    #[test]
    fn render_lists_every_section() {
        let report = render(&sample());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Resume Match Report");
        assert!(lines.contains(&"User: ada"));
        assert!(lines.contains(&"Score: 67%"));
        assert!(lines.contains(&"Resume Skills: Rust, SQL"));
        assert!(lines.contains(&"Job Skills: Rust, Go"));
        assert!(lines.contains(&"Matched: Rust"));
        assert!(lines.contains(&"Missing: Go"));
    }

    #[test]
    fn empty_lists_render_blank() {
        let report = render(&MatchResult::default());
        assert!(report.contains("Missing: \n"));
    }

    #[tokio::test]
    async fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        save(&path, &sample()).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&sample()));
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);
        let err = save(&path, &sample()).await.unwrap_err();
        assert!(matches!(err, Error::Report(_)));
    }
}
