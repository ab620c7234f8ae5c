//! Lexical key extraction.
//!
//! Keys are found by pattern, not by parsing the host language: calls inside
//! comments or unrelated strings are reported too, while keys built by
//! concatenation, template interpolation, or containing their own escaped
//! delimiter are missed.

use regex::Regex;
use std::sync::LazyLock;

// An optional `.` or `$`, `t`/`T`, then a key wrapped in one quote style.
// The regex crate has no back-references, so each quote style gets its own
// alternative and capture group.
static KEY_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.$]?[tT]\((?:'([^']*)'|"([^"]*)")\)"#).expect("key call pattern is valid")
});

/// Returns every key in `content`, in order of appearance, duplicates kept.
pub fn extract_keys(content: &str) -> Vec<String> {
    KEY_CALL_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_all_call_forms() {
        let content = r#"a.t("one"); $t('two'); x.T('three'); $T("four"); t('five')"#;
        assert_eq!(
            extract_keys(content),
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn quotes_must_match() {
        assert!(extract_keys(r#"$t('key")"#).is_empty());
        assert!(extract_keys(r#"$t("key')"#).is_empty());
    }

    #[test]
    fn other_quote_is_allowed_inside_key() {
        assert_eq!(extract_keys(r#".t("it's")"#), vec!["it's"]);
        assert_eq!(extract_keys(r#".t('say "hi"')"#), vec![r#"say "hi""#]);
    }

    #[test]
    fn escaped_delimiter_is_not_understood() {
        assert!(extract_keys(r"$t('it\'s')").is_empty());
    }

    #[test]
    fn empty_key_is_a_key() {
        assert_eq!(extract_keys(r#"$t("")"#), vec![""]);
    }

    #[test]
    fn duplicates_and_multiline_content() {
        let content = "// .t('menu.open')\nlabel = $t('menu.open');\n\n.t(\"menu.close\")";
        assert_eq!(
            extract_keys(content),
            vec!["menu.open", "menu.open", "menu.close"]
        );
    }

    #[test]
    fn requires_parenthesised_string_literal() {
        assert!(extract_keys("$t(key) .t( 'spaced' ) .t(`tpl`)").is_empty());
        assert!(extract_keys("no calls here").is_empty());
    }
}
