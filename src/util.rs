use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Display label for an account id: the last five characters, prefixed.
pub fn user_label(id: &str) -> String {
    let tail_start = id
        .char_indices()
        .rev()
        .nth(4)
        .map(|(index, _)| index)
        .unwrap_or(0);
    format!("User #{}", &id[tail_start..])
}

pub fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_last_five_characters() {
        assert_eq!(user_label("1234567890"), "User #67890");
        assert_eq!(user_label("abc"), "User #abc");
    }

    #[test]
    fn fuzzy_score_falls_back_to_lowercase() {
        let matcher = SkimMatcherV2::default();
        assert!(fuzzy_match_score(&matcher, "User #67890", "user 678").is_some());
        assert!(fuzzy_match_score(&matcher, "User #67890", "zzz").is_none());
    }
}
