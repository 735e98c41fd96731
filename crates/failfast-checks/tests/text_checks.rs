mod common;

use common::Harness;
use failfast_checks::TextChecks;
use failfast_core::Rule;
use regex::Regex;

#[test]
fn emptiness() {
    let h = Harness::new();
    assert!(h.checker.is_empty("name", ""));
    h.take("name", Rule::Empty);
    assert!(h.checker.is_not_empty("name", "bob"));
    h.take("name", Rule::NotEmpty);
    assert!(h.checker.is_none_or_empty("name", None));
    h.take("name", Rule::NoneOrEmpty);
    assert!(h.checker.is_none_or_empty("name", Some("")));
    h.take("name", Rule::NoneOrEmpty);
    assert!(!h.checker.is_some_and_not_empty("name", Some("")));
    assert!(h.checker.is_some_and_not_empty("name", Some("x")));
    h.take("name", Rule::SomeAndNotEmpty);
    h.assert_nothing_pending();
}

#[test]
fn affixes_record_the_part() {
    let h = Harness::new();
    assert!(h.checker.is_with_prefix("url", "https://x", "https"));
    let contract = h.take("url", Rule::WithPrefix);
    assert_eq!(contract.check_args, vec!["url", "https://x", "https"]);

    assert!(h.checker.is_without_prefix("url", "ftp://x", "https"));
    h.take("url", Rule::WithoutPrefix);
    assert!(h.checker.is_with_postfix("file", "a.rs", ".rs"));
    h.take("file", Rule::WithPostfix);
    assert!(h.checker.is_without_postfix("file", "a.rs", ".py"));
    h.take("file", Rule::WithoutPostfix);
    assert!(h.checker.is_with_substring("text", "needle in hay", "needle"));
    h.take("text", Rule::WithSubstring);
    assert!(!h.checker.is_without_substring("text", "needle in hay", "needle"));
    h.assert_nothing_pending();
}

#[test]
fn pattern_matching() {
    let h = Harness::new();
    let digits = Regex::new(r"^\d+$").expect("regex");
    assert!(h.checker.is_matching("id", "12345", &digits));
    let contract = h.take("id", Rule::Matching);
    assert_eq!(contract.check_extra_args, vec![r"^\d+$"]);
    assert!(h.checker.is_not_matching("id", "12a45", &digits));
    h.take("id", Rule::NotMatching);

    let anywhere = Regex::new(r"\d").expect("regex");
    assert!(h.checker.is_matching("id", "ab1", &anywhere));
    h.take("id", Rule::Matching);
}
