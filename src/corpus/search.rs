use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::corpus::TranslationRecord;

/// Fuzzy-ranks `records` against `term`.
///
/// An empty term returns the input unchanged. Otherwise each record is
/// scored against `source_text`, `id`, and `translated_text` (absent
/// translations match as the empty string) and ranked by its best field
/// score. Matching is case-insensitive and tolerates non-contiguous
/// characters; contiguous and prefix matches rank above scattered ones.
/// Records with no match are dropped. Ties keep the input order, so the
/// result is reproducible for a fixed input.
pub fn search(records: Vec<TranslationRecord>, term: &str) -> Vec<TranslationRecord> {
    if term.is_empty() {
        return records;
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(term, CaseMatching::Ignore, Normalization::Smart);

    let mut buf = Vec::new();
    let mut scored: Vec<(u32, TranslationRecord)> = records
        .into_iter()
        .filter_map(|record| {
            let fields = [
                record.source_text.as_str(),
                record.id.as_str(),
                record.translated_text.as_deref().unwrap_or(""),
            ];
            let best = fields
                .iter()
                .filter_map(|field| pattern.score(Utf32Str::new(field, &mut buf), &mut matcher))
                .max();
            best.map(|score| (score, record))
        })
        .collect();

    // Stable sort: equal scores keep their original relative order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, source: &str, translated: Option<&str>) -> TranslationRecord {
        TranslationRecord {
            id: id.to_string(),
            source_text: source.to_string(),
            translated_text: translated.map(ToString::to_string),
        }
    }

    #[test]
    fn test_empty_term_returns_input_unchanged() {
        let records = vec![
            record("b", "乙", Some("B")),
            record("a", "甲", Some("A")),
        ];
        let result = search(records.clone(), "");
        assert_eq!(result, records);
    }

    #[test]
    fn test_non_matching_records_are_excluded() {
        let records = vec![
            record("login.title", "登录", Some("Sign in")),
            record("cart.total", "合计", Some("Total")),
        ];
        let result = search(records, "login");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "login.title");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let records = vec![record("greeting", "你好", Some("Hello World"))];
        let result = search(records, "HELLO");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_matches_any_field() {
        let records = vec![
            record("farewell", "再见", Some("Goodbye")),
            record("greeting", "你好", Some("Hello")),
        ];

        // Matches on id only.
        assert_eq!(search(records.clone(), "farewell")[0].id, "farewell");
        // Matches on source text only.
        assert_eq!(search(records.clone(), "你好")[0].id, "greeting");
        // Matches on translated text only.
        assert_eq!(search(records, "goodbye")[0].id, "farewell");
    }

    #[test]
    fn test_absent_translation_matches_as_empty() {
        let records = vec![record("pending", "待定", None)];
        let result = search(records, "pending");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_contiguous_match_ranks_above_scattered() {
        let records = vec![
            // "cfg" appears scattered in "c-o-n-f-i-g-u-r-e" vs. verbatim.
            record("configure.label", "配置", Some("Configure")),
            record("cfg.path", "路径", Some("cfg path")),
        ];
        let result = search(records, "cfg");
        assert_eq!(result[0].id, "cfg.path");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("menu.one", "一", Some("One")),
            record("menu.two", "二", Some("Two")),
            record("menu.six", "六", Some("Six")),
        ];
        let result = search(records, "menu");
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["menu.one", "menu.two", "menu.six"]);
    }
}
