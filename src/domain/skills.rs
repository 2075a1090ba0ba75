// SPDX-License-Identifier: MPL-2.0
//! Parsing of free-text skill lists typed into forms.

/// Splits a comma-separated skill string, trimming each entry and dropping
/// empty fragments left by stray or trailing commas.
#[must_use]
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

/// Joins skills back into the editable comma-separated form.
#[must_use]
pub fn join_skill_list(skills: &[String]) -> String {
    skills.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_skill_list(" Rust,  SQL ,React"),
            vec!["Rust", "SQL", "React"]
        );
    }

    #[test]
    fn drops_empty_fragments() {
        assert_eq!(parse_skill_list("Go,, ,Python,"), vec!["Go", "Python"]);
        assert!(parse_skill_list("   ").is_empty());
    }

    #[test]
    fn join_uses_comma_space() {
        let skills = vec!["A".to_string(), "B".to_string()];
        assert_eq!(join_skill_list(&skills), "A, B");
        assert_eq!(parse_skill_list(&join_skill_list(&skills)), skills);
    }
}
