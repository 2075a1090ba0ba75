// SPDX-License-Identifier: MPL-2.0
//! Admin analytics payload.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    #[serde(default)]
    pub freq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAnalytics {
    #[serde(default)]
    pub users: Vec<UserSummary>,
    #[serde(default)]
    pub top_skills: Vec<SkillFrequency>,
    #[serde(default)]
    pub match_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_admin_payload() {
        let analytics: AdminAnalytics = serde_json::from_str(
            r#"{"users":[{"_id":"u1","username":"ada"}],"topSkills":[{"skill":"Rust","freq":3}],"matchCount":7}"#,
        )
        .unwrap();
        assert_eq!(analytics.users.len(), 1);
        assert_eq!(analytics.top_skills[0].freq, 3);
        assert_eq!(analytics.match_count, 7);
    }
}
